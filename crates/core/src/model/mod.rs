mod answers;
mod ids;
mod matches;
mod question;

pub use ids::{ParseIdError, QuestionId};

pub use answers::AnswerSet;
pub use matches::{LinkError, MatchResult};
pub use question::{Question, QuestionError, Questionnaire, QuestionnaireError};
