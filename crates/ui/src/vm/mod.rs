mod quiz_vm;

pub use quiz_vm::{MatchCardVm, QuestionVm, QuizScreen, QuizVm, map_match_card};
