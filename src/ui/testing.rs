//! In-memory prompter for tests

use std::collections::VecDeque;

use super::prompt::{Answer, Prompter};

enum EntryReply {
    Text(String),
    Default,
}

/// Replays queued answers; an empty queue behaves like a cancelled dialog.
#[derive(Default)]
pub struct ScriptedPrompter {
    entries: VecDeque<EntryReply>,
    selects: VecDeque<usize>,
    logins: VecDeque<(String, String)>,
    /// Kinds of prompts shown, in order
    pub prompts: Vec<&'static str>,
    pub titles: Vec<String>,
    pub errors: Vec<String>,
    pub notifications: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, text: &str) -> Self {
        self.entries.push_back(EntryReply::Text(text.to_string()));
        self
    }

    /// Accept the pre-filled value
    pub fn with_entry_default(mut self) -> Self {
        self.entries.push_back(EntryReply::Default);
        self
    }

    pub fn with_select(mut self, index: usize) -> Self {
        self.selects.push_back(index);
        self
    }

    pub fn with_login(mut self, username: &str, password: &str) -> Self {
        self.logins
            .push_back((username.to_string(), password.to_string()));
        self
    }

    pub fn selects_shown(&self) -> usize {
        self.prompts.iter().filter(|p| **p == "select").count()
    }
}

impl Prompter for ScriptedPrompter {
    fn entry(&mut self, _label: &str, title: &str, default: &str) -> Answer<String> {
        self.prompts.push("entry");
        self.titles.push(title.to_string());
        match self.entries.pop_front() {
            Some(EntryReply::Text(text)) => Answer::Value(text),
            Some(EntryReply::Default) => Answer::Value(default.to_string()),
            None => Answer::Cancelled,
        }
    }

    fn select(&mut self, _label: &str, _items: &[&str]) -> Answer<usize> {
        self.prompts.push("select");
        self.selects
            .pop_front()
            .map_or(Answer::Cancelled, Answer::Value)
    }

    fn login(&mut self, title: &str) -> Answer<(String, String)> {
        self.prompts.push("login");
        self.titles.push(title.to_string());
        self.logins
            .pop_front()
            .map_or(Answer::Cancelled, Answer::Value)
    }

    fn error(&mut self, message: &str, _title: &str) {
        self.errors.push(message.to_string());
    }

    fn notify(&mut self, message: &str, _title: &str) {
        self.notifications.push(message.to_string());
    }
}
