use crate::verbs::{PronounId, TenseId, VerbId};
use thiserror::Error;

/// A verb, tense or pronoun was requested that the verb table does not hold.
///
/// This signals a data inconsistency rather than a user mistake, so callers
/// should pick a different selection instead of retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("verb '{0}' is not in the verb table")]
    UnknownVerb(VerbId),

    #[error("verb '{verb}' has no conjugations for tense '{tense}'")]
    MissingTense { verb: VerbId, tense: TenseId },

    #[error("verb '{verb}' has no '{pronoun}' form for tense '{tense}'")]
    MissingPronoun {
        verb: VerbId,
        tense: TenseId,
        pronoun: PronounId,
    },
}

/// Failures while generating a multiple-choice exercise
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExerciseError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("no verb in the table supports tense '{0}'")]
    NoVerbsAvailable(TenseId),
}

/// Rejected verb table contents
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("verb '{verb}' conjugates tense '{tense}' but has no lesson for it")]
    MissingLesson { verb: VerbId, tense: TenseId },

    #[error("verb '{verb}' lists tense '{tense}' without any forms")]
    EmptyConjugation { verb: VerbId, tense: TenseId },

    #[error("verb '{0}' appears more than once")]
    DuplicateVerb(VerbId),
}

/// Invalid transitions of a practice session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no tense has been selected")]
    NoTenseSelected,

    #[error("there is no open exercise to answer")]
    NoOpenExercise,

    #[error(transparent)]
    Exercise(#[from] ExerciseError),
}

/// A string did not name any known identifier of the given kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseIdError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseIdError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
