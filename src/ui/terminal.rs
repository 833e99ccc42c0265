//! Terminal prompts built on dialoguer

use dialoguer::{Input, Password, Select};

use super::prompt::{Answer, Prompter};

/// Prompter drawing its dialogs on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }

    fn heading(title: &str) {
        eprintln!();
        eprintln!("{}", title);
        eprintln!("{}", "-".repeat(title.chars().count()));
    }
}

fn cancelled<T>(e: dialoguer::Error) -> Answer<T> {
    tracing::debug!("Prompt dismissed: {}", e);
    Answer::Cancelled
}

impl Prompter for TerminalPrompter {
    fn entry(&mut self, label: &str, title: &str, default: &str) -> Answer<String> {
        Self::heading(title);
        Input::<String>::new()
            .with_prompt(label)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_or_else(cancelled, Answer::Value)
    }

    fn select(&mut self, label: &str, items: &[&str]) -> Answer<usize> {
        match Select::new()
            .with_prompt(label)
            .items(items)
            .default(0)
            .interact_opt()
        {
            Ok(Some(index)) => Answer::Value(index),
            Ok(None) => Answer::Cancelled,
            Err(e) => cancelled(e),
        }
    }

    fn login(&mut self, title: &str) -> Answer<(String, String)> {
        Self::heading(title);
        let username = match Input::<String>::new()
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()
        {
            Ok(username) => username,
            Err(e) => return cancelled(e),
        };

        Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()
            .map_or_else(cancelled, |password| Answer::Value((username, password)))
    }

    fn error(&mut self, message: &str, title: &str) {
        Self::heading(title);
        eprintln!("{}", message);
    }

    fn notify(&mut self, message: &str, title: &str) {
        println!("{}: {}", title, message);
    }
}
