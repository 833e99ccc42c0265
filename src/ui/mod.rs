pub mod collector;
pub mod prompt;
pub mod terminal;

#[cfg(test)]
pub mod testing;

pub use collector::{collect_parameters, Parameters};
pub use prompt::Prompter;
pub use terminal::TerminalPrompter;
