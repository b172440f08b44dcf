use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod question;

#[cfg(test)]
pub mod fixtures;

pub use question::{Question, RawQuestion, NUM_OPTIONS};

#[derive(Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn open(source: &Path) -> Result<QuestionBank> {
        let file = File::open(source)
            .with_context(|| format!("Failed to load question bank from `{}`", source.display()))?;
        let bank = Self::from_reader(file)
            .with_context(|| format!("Failed to load question bank from `{}`", source.display()))?;
        info!(
            "Loaded {} question(s) from {}",
            bank.questions.len(),
            source.display()
        );
        Ok(bank)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<QuestionBank> {
        let mut questions = Vec::new();

        let mut csv_reader = csv::Reader::from_reader(reader);
        for question in csv_reader.deserialize() {
            let raw_question: RawQuestion = question.context("Malformed question bank row")?;
            questions.push(Question::try_from(raw_question)?);
        }

        Ok(QuestionBank { questions })
    }

    pub fn get_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn census(&self) -> Census {
        let mut entries: Vec<(String, usize)> = Vec::new();
        for question in &self.questions {
            match entries.iter_mut().find(|(c, _)| *c == question.category) {
                Some((_, count)) => *count += 1,
                None => entries.push((question.category.clone(), 1)),
            }
        }
        Census { entries }
    }
}

/// Number of available questions per category, in the order categories first
/// appear in the bank.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Census {
    entries: Vec<(String, usize)>,
}

impl Census {
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(c, n)| (c.as_str(), *n))
    }

    pub fn contains_ignore_case(&self, category: &str) -> bool {
        let category = category.to_lowercase();
        self.entries
            .iter()
            .any(|(c, _)| c.to_lowercase() == category)
    }
}
