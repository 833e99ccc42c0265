//! Blocking user-interaction capability used by the collector and the runner.

/// Outcome of a single prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<T> {
    /// The user answered
    Value(T),
    /// The user dismissed the prompt, or it could not be shown
    Cancelled,
    /// The prompt was not shown because the answer was already known
    Skipped,
}

impl<T> Answer<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Answer::Value(value) => Some(value),
            Answer::Cancelled | Answer::Skipped => None,
        }
    }
}

impl<T: Default> Answer<T> {
    /// The answer, or the empty value when cancelled or skipped
    pub fn or_empty(self) -> T {
        self.value().unwrap_or_default()
    }
}

/// Modal prompts. Every call blocks until the user responds.
pub trait Prompter {
    /// Free-text entry pre-filled with `default`
    fn entry(&mut self, label: &str, title: &str, default: &str) -> Answer<String>;

    /// Single choice among `items`, answered with the chosen index
    fn select(&mut self, label: &str, items: &[&str]) -> Answer<usize>;

    /// Combined username and password entry
    fn login(&mut self, title: &str) -> Answer<(String, String)>;

    fn error(&mut self, message: &str, title: &str);

    fn notify(&mut self, message: &str, title: &str);
}
