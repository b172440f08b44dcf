use chrono::NaiveDateTime;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::bank::{Question, NUM_OPTIONS};
use crate::error::QuizError;
use crate::ledger::LedgerEntry;
use crate::output::{Message, QuizOutput};


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnswerOutcome {
    Invalid,
    Incorrect,
    Correct,
}

fn parse_choice(input: &str) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|choice| (1..=NUM_OPTIONS).contains(choice))
}

/// One question being asked. Choices are 1-based displayed positions;
/// `order` maps each displayed position back to its authored slot.
#[derive(Debug)]
pub struct QuestionState<'a> {
    question: &'a Question,
    order: [usize; NUM_OPTIONS],
    correct_choice: usize,
    attempts: u32,
    first_choice: Option<usize>,
    is_resolved: bool,
}

impl<'a> QuestionState<'a> {
    pub fn new<R: Rng + ?Sized>(question: &'a Question, rng: &mut R) -> Self {
        let mut order = [1, 2, 3, 4];
        order.shuffle(rng);
        Self::with_order(question, order)
    }

    pub fn with_order(question: &'a Question, order: [usize; NUM_OPTIONS]) -> Self {
        let mut correct_choice = 0;
        for (index, slot) in order.iter().enumerate() {
            if *slot == question.answer {
                correct_choice = index + 1;
            }
        }
        QuestionState {
            question,
            order,
            correct_choice,
            attempts: 0,
            first_choice: None,
            is_resolved: false,
        }
    }

    pub fn get_correct_choice(&self) -> usize {
        self.correct_choice
    }

    pub fn get_attempts(&self) -> u32 {
        self.attempts
    }

    pub fn get_first_choice(&self) -> Option<usize> {
        self.first_choice
    }

    pub fn get_displayed_options(&self) -> Vec<String> {
        self.order
            .iter()
            .filter_map(|slot| self.question.get_option(*slot))
            .map(str::to_owned)
            .collect()
    }

    pub fn is_first_attempt_correct(&self) -> bool {
        self.first_choice == Some(self.correct_choice)
    }

    pub fn present<O: QuizOutput + ?Sized>(&self, output: &mut O) {
        output.say(&Message::QuestionBegins(
            self.question.prompt.clone(),
            self.get_displayed_options(),
        ));
        output.say(&Message::SelectionPrompt);
    }

    /// Every submission counts as an attempt, including unparseable ones.
    pub fn submit<O: QuizOutput + ?Sized>(&mut self, input: &str, output: &mut O) -> AnswerOutcome {
        self.attempts += 1;

        let choice = match parse_choice(input) {
            Some(choice) => choice,
            None => {
                output.say(&Message::InvalidSelection);
                return AnswerOutcome::Invalid;
            }
        };

        if self.first_choice.is_none() {
            self.first_choice = Some(choice);
        }

        let slot = self.order[choice - 1];
        if let Some(response) = self.question.get_response(slot) {
            output.say(&Message::Response(response.to_owned()));
        }

        if choice == self.correct_choice {
            self.is_resolved = true;
            AnswerOutcome::Correct
        } else {
            output.say(&Message::TryAgain);
            AnswerOutcome::Incorrect
        }
    }

    pub fn record(self, timestamp: NaiveDateTime) -> Result<LedgerEntry, QuizError> {
        if !self.is_resolved {
            return Err(QuizError::UnresolvedQuestion(self.question.prompt.clone()));
        }
        Ok(LedgerEntry {
            timestamp,
            category: self.question.category.clone(),
            question: self.question.prompt.clone(),
            selected_option: self.first_choice,
            correct_option: self.correct_choice,
            is_correct: self.is_first_attempt_correct(),
            attempts: self.attempts,
        })
    }
}
