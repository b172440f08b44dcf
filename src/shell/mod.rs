use anyhow::Result;
use log::info;
use rand::Rng;

use crate::bank::{Census, QuestionBank};
use crate::error::{QuizError, SessionError};
use crate::ledger::Ledger;
use crate::output::{Message, QuizInput, QuizOutput};
use crate::session::{select_questions, Session};
use crate::settings::Settings;
use crate::stats::{HistoryStats, Status};


pub struct Shell<I, O> {
    settings: Settings,
    input: I,
    output: O,
}

impl<I: QuizInput, O: QuizOutput> Shell<I, O> {
    pub fn new(settings: Settings, input: I, output: O) -> Self {
        Shell {
            settings,
            input,
            output,
        }
    }

    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let ledger = Ledger::new(self.settings.ledger_path.clone());
        info!("Reading history from {}", ledger.get_path().display());
        let history = ledger.read_stats()?;
        self.output.say(&Message::OverallTotal(history.total));

        let bank = QuestionBank::open(&self.settings.bank_path)?;
        let census = bank.census();
        self.print_categories(&census, &history);

        let category = self.prompt_category(&census)?;
        let count = self.prompt_count()?;

        let questions = match select_questions(
            bank.get_questions(),
            category.as_deref(),
            count,
            rng,
        ) {
            Ok(questions) => questions,
            Err(SessionError::NotEnoughQuestions { available }) => {
                info!(
                    "Requested {} question(s) but only {} available",
                    count, available
                );
                self.output.say(&Message::NotEnoughQuestions(available));
                return Ok(());
            }
        };

        {
            let mut writer = ledger.open_for_append()?;
            let mut session = Session::new(questions, &mut self.input, &mut self.output);
            session.run(&mut writer, rng)?;
        }

        let history = ledger.read_stats()?;
        self.output.say(&Message::OverallTotal(history.total));
        self.output.say(&Message::CategorySummary(
            history.get_categories().to_vec(),
        ));
        Ok(())
    }

    fn print_categories(&mut self, census: &Census, history: &HistoryStats) {
        let categories = census
            .iter()
            .map(|(category, count)| {
                let status = history.get(category).and_then(Status::classify);
                (category.to_owned(), count, status)
            })
            .collect();
        self.output.say(&Message::AvailableCategories(categories));
    }

    /// Returns the lower-cased category, or `None` for all categories.
    fn prompt_category(&mut self, census: &Census) -> Result<Option<String>> {
        loop {
            self.output.say(&Message::CategoryPrompt);
            let category = self.input.read_line()?.trim().to_lowercase();
            if category.is_empty() {
                return Ok(None);
            }
            if census.contains_ignore_case(&category) {
                return Ok(Some(category));
            }
            self.output.say(&Message::InvalidCategory);
        }
    }

    fn prompt_count(&mut self) -> Result<usize> {
        self.output.say(&Message::CountPrompt);
        let line = self.input.read_line()?;
        let count = line
            .trim()
            .parse::<usize>()
            .map_err(|_| QuizError::InvalidQuestionCount(line.trim().to_owned()))?;
        Ok(count)
    }
}
