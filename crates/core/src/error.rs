use thiserror::Error;

use crate::model::{LinkError, QuestionError, QuestionnaireError};
use crate::quiz::QuizError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Link(#[from] LinkError),
}
