use anyhow::{anyhow, Result};
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::output::{Message, QuizInput, QuizOutput};

type Responder = dyn Fn(&[Message]) -> String + Send + Sync;

enum MockInput {
    Script(VecDeque<String>),
    Responder(Arc<Responder>),
}

/// Records everything said and answers reads from a script, or from a
/// responder that sees every message said so far.
#[derive(Clone)]
pub struct MockConsole {
    messages: Arc<RwLock<Vec<Message>>>,
    input: Arc<RwLock<MockInput>>,
    reads: Arc<RwLock<usize>>,
    read_limit: Option<usize>,
}

impl MockConsole {
    pub fn new<S: AsRef<str>>(lines: &[S]) -> Self {
        let script = lines.iter().map(|l| l.as_ref().to_owned()).collect();
        Self::with_input(MockInput::Script(script))
    }

    pub fn with_responder<F>(responder: F) -> Self
    where
        F: Fn(&[Message]) -> String + Send + Sync + 'static,
    {
        Self::with_input(MockInput::Responder(Arc::new(responder)))
    }

    fn with_input(input: MockInput) -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
            input: Arc::new(RwLock::new(input)),
            reads: Arc::new(RwLock::new(0)),
            read_limit: None,
        }
    }

    /// Simulates input being closed after `limit` reads.
    pub fn limit_reads(mut self, limit: usize) -> Self {
        self.read_limit = Some(limit);
        self
    }

    pub fn flush(&self) -> Vec<Message> {
        std::mem::take(&mut *self.messages.write())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.messages.read().iter().any(|m| m == message)
    }

    pub fn count_messages<F: Fn(&Message) -> bool>(&self, predicate: F) -> usize {
        self.messages.read().iter().filter(|m| predicate(m)).count()
    }

    pub fn get_reads(&self) -> usize {
        *self.reads.read()
    }
}

impl QuizOutput for MockConsole {
    fn say(&mut self, message: &Message) {
        self.messages.write().push(message.clone());
    }
}

impl QuizInput for MockConsole {
    fn read_line(&mut self) -> Result<String> {
        let reads = {
            let mut reads = self.reads.write();
            *reads += 1;
            *reads
        };
        if self.read_limit.map_or(false, |limit| reads > limit) {
            return Err(anyhow!("Input closed"));
        }
        match &mut *self.input.write() {
            MockInput::Script(script) => script
                .pop_front()
                .ok_or_else(|| anyhow!("No more scripted input")),
            MockInput::Responder(responder) => Ok(responder(self.messages.read().as_slice())),
        }
    }
}

/// Answers every selection prompt with the option matching `pick`, applied to
/// the question being displayed and the texts of its shuffled options.
pub fn answer_with<F>(pick: F) -> impl Fn(&[Message]) -> String + Send + Sync + 'static
where
    F: Fn(&str, &[String]) -> usize + Send + Sync + 'static,
{
    move |messages: &[Message]| {
        let displayed = messages.iter().rev().find_map(|m| match m {
            Message::QuestionBegins(prompt, options) => Some((prompt, options)),
            _ => None,
        });
        match displayed {
            Some((prompt, options)) => pick(prompt.as_str(), options.as_slice()).to_string(),
            None => String::new(),
        }
    }
}
