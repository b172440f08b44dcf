use anyhow::Result;
use chrono::Local;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::Write;

use crate::bank::Question;
use crate::error::SessionError;
use crate::ledger::LedgerWriter;
use crate::output::{Message, QuizInput, QuizOutput};
use crate::stats::CategoryStats;

pub mod question;


pub use self::question::{AnswerOutcome, QuestionState};

/// Picks `count` distinct questions from `pool`, optionally restricted to a
/// category (matched ignoring case, blank means any), in random order.
pub fn select_questions<R: Rng + ?Sized>(
    pool: &[Question],
    category: Option<&str>,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Question>, SessionError> {
    let filtered: Vec<&Question> = match category.map(str::trim).filter(|c| !c.is_empty()) {
        Some(category) => pool.iter().filter(|q| q.is_in_category(category)).collect(),
        None => pool.iter().collect(),
    };

    if filtered.len() < count {
        return Err(SessionError::NotEnoughQuestions {
            available: filtered.len(),
        });
    }

    let mut selection: Vec<Question> = filtered
        .choose_multiple(rng, count)
        .map(|q| (*q).clone())
        .collect();
    selection.shuffle(rng);
    Ok(selection)
}

pub struct Session<'a, I: ?Sized, O: ?Sized> {
    questions: Vec<Question>,
    input: &'a mut I,
    output: &'a mut O,
    tally: CategoryStats,
}

impl<'a, I, O> Session<'a, I, O>
where
    I: QuizInput + ?Sized,
    O: QuizOutput + ?Sized,
{
    pub fn new(questions: Vec<Question>, input: &'a mut I, output: &'a mut O) -> Self {
        Session {
            questions,
            input,
            output,
            tally: CategoryStats::default(),
        }
    }

    /// Asks every question in turn, appending one ledger row per question once
    /// it has been answered correctly. A failed read abandons the current
    /// question without recording it.
    pub fn run<W, R>(&mut self, ledger: &mut LedgerWriter<W>, rng: &mut R) -> Result<CategoryStats>
    where
        W: Write,
        R: Rng + ?Sized,
    {
        let total = self.questions.len();
        info!("Starting quiz session with {} question(s)", total);

        for question in &self.questions {
            let mut state = QuestionState::new(question, rng);
            loop {
                state.present(self.output);
                let line = self.input.read_line()?;
                if state.submit(&line, self.output) == AnswerOutcome::Correct {
                    break;
                }
            }
            debug!(
                "Resolved `{}` after {} attempt(s), first choice {:?}, correct choice {}",
                question.prompt,
                state.get_attempts(),
                state.get_first_choice(),
                state.get_correct_choice()
            );

            let entry = state.record(Local::now().naive_local())?;
            ledger.append(&entry)?;
            self.tally.record(entry.is_correct);

            let remaining = total - self.tally.questions_asked as usize;
            self.output.say(&Message::RunningTotal(self.tally, remaining));
        }

        info!(
            "Quiz session over: {} of {} correct, {} ledger row(s) written",
            self.tally.correct_answers,
            self.tally.questions_asked,
            ledger.get_rows_written()
        );
        Ok(self.tally)
    }
}
