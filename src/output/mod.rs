use anyhow::Result;

use crate::stats::{CategoryStats, Status};

pub mod console;
#[cfg(test)]
pub mod mock;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AvailableCategories(Vec<(String, usize, Option<Status>)>),
    CategoryPrompt,
    CategorySummary(Vec<(String, CategoryStats)>),
    CountPrompt,
    InvalidCategory,
    InvalidSelection,
    NotEnoughQuestions(usize),
    OverallTotal(CategoryStats),
    QuestionBegins(String, Vec<String>),
    Response(String),
    RunningTotal(CategoryStats, usize),
    SelectionPrompt,
    TryAgain,
}

impl Message {
    /// Prompts leave the cursor on the same line as the text.
    pub fn is_prompt(&self) -> bool {
        matches!(
            self,
            Message::CategoryPrompt | Message::CountPrompt | Message::SelectionPrompt
        )
    }
}

pub trait QuizOutput {
    fn say(&mut self, message: &Message);
}

pub trait QuizInput {
    /// Reads one line without its line terminator. Fails once input is exhausted.
    fn read_line(&mut self) -> Result<String>;
}
