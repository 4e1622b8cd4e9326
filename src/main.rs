//! Tagcat CLI application entry point
//!
//! Inspects and edits the tags of audio files in batches and files them
//! into a directory tree derived from their tags.
//!
//! # Usage
//!
//! ```bash
//! # Show the merged tags of an album; differing fields show as `~`
//! tagcat ls -r rips/autobahn/
//!
//! # Set fields on every file
//! tagcat wr *.flac -a Kraftwerk --aa Kraftwerk -A Autobahn -d 1974
//!
//! # Keep only whitelisted fields (preview first)
//! tagcat cl -d *.flac
//!
//! # File the album under the base directory
//! tagcat mv -r rips/autobahn/ --base-dir /srv/music
//!
//! # Review, clean up and file one album interactively
//! tagcat auto rips/autobahn/*.flac
//!
//! # Find files by field
//! tagcat g -R /srv/music -t artist -t albumartist -r "kraft"
//! ```
//!
//! # Configuration
//!
//! The base directory and the quiet default are read from the user's config
//! directory (`~/.config/tagcat/config.toml` on Linux) and `TAGCAT_*`
//! environment variables. Set `RUST_LOG` or pass `-v` for diagnostics.

use std::path::PathBuf;
use std::process::ExitCode;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tagcat::{
    Result,
    cli::{Cli, Commands, FileArgs},
    commands::{self, auto::AutoOutcome},
    config::TagcatConfig,
    discovery::{self, FileKind},
    tags::{LoftyCodec, TagAccessor},
    ui::DialoguerPrompter,
};

/// Exit code of an auto run the user aborted
const EXIT_ABORTED: u8 = 2;

/// Log to stderr; `RUST_LOG` takes precedence over `-v`
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "tagcat=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn audio_files(args: &FileArgs) -> Result<Vec<PathBuf>> {
    discovery::collect(&args.files, args.recursive, FileKind::Audio)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = TagcatConfig::load_or_init()?.with_base_dir(cli.base_dir);
    let quiet = cli.quiet || config.quiet;
    tracing::debug!(base_dir = %config.base_dir.display(), quiet, "configuration loaded");

    let accessor = TagAccessor::new(LoftyCodec);

    match cli.command {
        Commands::List { files } => {
            commands::list(&accessor, &audio_files(&files)?, quiet);
        }
        Commands::Write { files, fields } => {
            commands::write(&accessor, &audio_files(&files)?, fields.edits(), quiet)?;
        }
        Commands::Delete { files, tags } => {
            commands::delete(&accessor, &audio_files(&files)?, tags, quiet)?;
        }
        Commands::Wipeout { files } => {
            commands::wipeout(&accessor, &audio_files(&files)?, quiet)?;
        }
        Commands::Cleanup { files, dry } => {
            commands::cleanup(&accessor, &audio_files(&files)?, dry, quiet)?;
        }
        Commands::Move { files, dry } => {
            commands::rename(&accessor, &audio_files(&files)?, &config.base_dir, dry, quiet)?;
        }
        Commands::Auto { files, dry } => {
            let prompter = DialoguerPrompter::new();
            let outcome = commands::auto(
                &accessor,
                &prompter,
                &audio_files(&files)?,
                &config.base_dir,
                dry,
                quiet,
            )?;
            if outcome == AutoOutcome::Aborted {
                return Ok(ExitCode::from(EXIT_ABORTED));
            }
        }
        Commands::Grep {
            files,
            recursive,
            tags,
            regexp,
        } => {
            let files = discovery::collect(&files, recursive, FileKind::Audio)?;
            commands::grep(&accessor, &files, &tags, &regexp)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{} {e}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
