//! Interactive prompts
//!
//! [`DialoguerPrompter`] talks to the terminal; [`ScriptedPrompter`] replays
//! canned [`Answer`]s so interactive commands can be tested.

pub mod input;
pub mod mock;

pub use input::{DialoguerPrompter, Prompter};
pub use mock::{Answer, ScriptedPrompter};
