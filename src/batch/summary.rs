use colored::Colorize;

/// Per-file outcome counts of one tag operation
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub success: usize,
    pub errors: usize,
    /// One message per failed file, in processing order
    pub error_messages: Vec<String>,
}

impl BatchSummary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn add_success(&mut self) {
        self.success += 1;
    }

    pub fn add_error(&mut self, message: String) {
        self.errors += 1;
        self.error_messages.push(message);
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.success + self.errors
    }

    /// True if no file failed
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.errors == 0
    }

    /// Print counts, then one line per failed file
    pub fn print(&self, operation: &str) {
        let line = format!("{operation}: {} of {} file(s) done", self.success, self.total());
        if self.is_clean() {
            println!("{}", line.green());
            return;
        }

        println!("{}, {}", line.yellow(), format!("{} failed", self.errors).red());
        for message in &self.error_messages {
            println!("  - {message}");
        }
    }
}
