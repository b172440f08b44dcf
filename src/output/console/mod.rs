use anyhow::{bail, Result};
use log::error;
use std::io::{BufRead, Write};

use crate::output::{Message, QuizInput, QuizOutput};
use crate::stats::Status;


fn format_status(status: &Option<Status>) -> String {
    match status {
        Some(status) => format!(" ({})", status.get_label()),
        None => String::new(),
    }
}

pub fn interpret_message(message: &Message) -> String {
    use Message::*;
    match message {
        OverallTotal(stats) => format!(
            "Overall Total: {} of {} questions correct ({:.2}%)\n",
            stats.correct_answers,
            stats.questions_asked,
            stats.percentage_correct()
        ),
        AvailableCategories(categories) => {
            let mut message = "Available categories:\n".to_owned();
            for (category, count, status) in categories {
                message += &format!(
                    "\n{}{}: {} question(s)",
                    category,
                    format_status(status),
                    count
                );
            }
            message
        }
        CategoryPrompt => "\nChoose a category (leave blank for all categories): ".into(),
        InvalidCategory => "Invalid category. Please choose from the available categories.".into(),
        CountPrompt => "\nEnter the number of questions to ask (e.g. 10): ".into(),
        NotEnoughQuestions(available) => format!(
            "Not enough questions in the selected category. Only {} questions available.",
            available
        ),
        QuestionBegins(prompt, options) => {
            let mut message = prompt.clone();
            for (index, option) in options.iter().enumerate() {
                message += &format!("\n{}. {}", index + 1, option);
            }
            message
        }
        SelectionPrompt => "Please select the correct option (1-4): ".into(),
        InvalidSelection => "Invalid input. Please enter a number between 1 and 4.\n".into(),
        Response(response) => response.clone(),
        TryAgain => "Incorrect. Please try again.\n".into(),
        RunningTotal(stats, remaining) => format!(
            "Running total: {:.2}% ({} of {} questions correct)\n{} questions remaining\n",
            stats.percentage_correct(),
            stats.correct_answers,
            stats.questions_asked,
            remaining
        ),
        CategorySummary(categories) => {
            let mut message = "Updated Overall Summary of Categories:".to_owned();
            for (category, stats) in categories {
                message += &format!(
                    "\n{}{}: {} questions asked, {:.2}% correct",
                    category,
                    format_status(&Status::classify(stats)),
                    stats.questions_asked,
                    stats.percentage_correct()
                );
            }
            message
        }
    }
}

pub struct ConsoleOutput<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        ConsoleOutput { writer }
    }
}

impl<W: Write> QuizOutput for ConsoleOutput<W> {
    fn say(&mut self, message: &Message) {
        let content = interpret_message(message);
        let result = if message.is_prompt() {
            write!(self.writer, "{}", content).and_then(|_| self.writer.flush())
        } else {
            writeln!(self.writer, "{}", content)
        };
        if let Err(e) = result {
            error!("Error writing to console: {}", e);
        }
    }
}

pub struct ConsoleInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ConsoleInput<R> {
    pub fn new(reader: R) -> Self {
        ConsoleInput { reader }
    }
}

impl<R: BufRead> QuizInput for ConsoleInput<R> {
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            bail!("Input closed");
        }
        let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed_len);
        Ok(line)
    }
}
