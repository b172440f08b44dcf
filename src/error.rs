use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QuizError {
    #[error("Invalid number of questions `{0}`: expected a whole number")]
    InvalidQuestionCount(String),

    #[error("Question `{question}` has invalid answer `{answer}`: expected 1, 2, 3 or 4")]
    InvalidAnswerIndex { question: String, answer: String },

    #[error("Question `{0}` was recorded before being answered correctly")]
    UnresolvedQuestion(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Not enough questions in the selected category: only {available} available")]
    NotEnoughQuestions { available: usize },
}
