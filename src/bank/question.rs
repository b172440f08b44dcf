use serde::Deserialize;

use crate::error::QuizError;

pub const NUM_OPTIONS: usize = 4;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[cfg_attr(test, derive(serde::Serialize))]
pub struct RawQuestion {
    pub category: String,
    pub question: String,
    pub option1: String,
    pub option2: String,
    pub option3: String,
    pub option4: String,
    pub answer: String,
    pub response1: String,
    pub response2: String,
    pub response3: String,
    pub response4: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub category: String,
    pub prompt: String,
    pub options: [String; NUM_OPTIONS],
    /// 1-based slot of the correct option, as authored.
    pub answer: usize,
    pub responses: [String; NUM_OPTIONS],
}

impl Question {
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    pub fn get_option(&self, slot: usize) -> Option<&str> {
        slot.checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    pub fn get_response(&self, slot: usize) -> Option<&str> {
        slot.checked_sub(1)
            .and_then(|i| self.responses.get(i))
            .map(String::as_str)
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = QuizError;

    fn try_from(raw_question: RawQuestion) -> Result<Self, Self::Error> {
        let answer = raw_question
            .answer
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|a| (1..=NUM_OPTIONS).contains(a))
            .ok_or_else(|| QuizError::InvalidAnswerIndex {
                question: raw_question.question.clone(),
                answer: raw_question.answer.clone(),
            })?;

        Ok(Question {
            category: raw_question.category,
            prompt: raw_question.question,
            options: [
                raw_question.option1,
                raw_question.option2,
                raw_question.option3,
                raw_question.option4,
            ],
            answer,
            responses: [
                raw_question.response1,
                raw_question.response2,
                raw_question.response3,
                raw_question.response4,
            ],
        })
    }
}
