use crate::error::SessionError;
use crate::exercise::{Exercise, ExerciseEngine};
use crate::verbs::{Lesson, Level, TenseId};
use log::{debug, info};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    ChoosingLevel,
    ChoosingTense,
    Answering,
    Answered,
}

/// Outcome of submitting an answer
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerFeedback {
    Correct,
    Incorrect {
        correct_answer: String,
        lesson: Lesson,
    },
}

impl AnswerFeedback {
    pub fn is_correct(&self) -> bool {
        matches!(self, AnswerFeedback::Correct)
    }
}

/// Everything a front-end needs to know about the running quiz.
///
/// Handlers never mutate in place: each takes the current state and returns
/// the next one, leaving the original untouched when they fail.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub level: Option<Level>,
    pub tense: Option<TenseId>,
    pub exercise: Option<Exercise>,
    pub score: u32,
    pub streak: u32,
    pub best_streak: u32,
    pub answered: u32,
    pub answered_correctly: bool,
    pub phase: SessionPhase,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_level(&self, level: Level) -> Self {
        info!("Selected level {}", level);
        Self {
            level: Some(level),
            phase: SessionPhase::ChoosingTense,
            ..self.clone()
        }
    }

    /// Resets the counters for `tense` and opens its first exercise
    pub fn start_practice<R: Rng + ?Sized>(
        &self,
        engine: &ExerciseEngine<'_>,
        rng: &mut R,
        tense: TenseId,
    ) -> Result<Self, SessionError> {
        info!("Starting practice for {}", tense);
        let fresh = Self {
            level: self.level,
            tense: Some(tense),
            ..Self::default()
        };
        fresh.next_exercise(engine, rng)
    }

    pub fn next_exercise<R: Rng + ?Sized>(
        &self,
        engine: &ExerciseEngine<'_>,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let tense = self.tense.ok_or(SessionError::NoTenseSelected)?;
        let exercise = engine.get_random_exercise(rng, tense)?;

        Ok(Self {
            exercise: Some(exercise),
            answered_correctly: false,
            phase: SessionPhase::Answering,
            ..self.clone()
        })
    }

    /// Scores `answer` against the open exercise.
    ///
    /// A correct answer bumps score and streak; a wrong one clears the streak.
    /// Each exercise accepts exactly one submission.
    pub fn submit_answer(&self, answer: &str) -> Result<(Self, AnswerFeedback), SessionError> {
        let exercise = match (&self.exercise, self.phase) {
            (Some(exercise), SessionPhase::Answering) => exercise,
            _ => return Err(SessionError::NoOpenExercise),
        };

        let mut next = self.clone();
        next.answered += 1;
        next.phase = SessionPhase::Answered;

        let feedback = if exercise.check_answer(answer) {
            next.score += 1;
            next.streak += 1;
            next.best_streak = next.best_streak.max(next.streak);
            next.answered_correctly = true;
            AnswerFeedback::Correct
        } else {
            next.streak = 0;
            next.answered_correctly = false;
            AnswerFeedback::Incorrect {
                correct_answer: exercise.correct_answer.clone(),
                lesson: exercise.lesson.clone(),
            }
        };

        debug!(
            "Answer '{}' to '{}': {} | Score: {}, Streak: {}",
            answer,
            exercise.question,
            if feedback.is_correct() { "correct" } else { "incorrect" },
            next.score,
            next.streak
        );

        Ok((next, feedback))
    }

    /// Leaves the practice screen, dropping tense, exercise and counters
    pub fn go_back(&self) -> Self {
        debug!("Session reset");
        Self::default()
    }
}

/// End-of-session statistics
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub answered: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub best_streak: u32,
    pub accuracy_percentage: f64,
}

impl SessionSummary {
    pub fn from_state(state: &SessionState) -> Self {
        let accuracy_percentage = if state.answered > 0 {
            (state.score as f64 / state.answered as f64) * 100.0
        } else {
            0.0
        };

        SessionSummary {
            answered: state.answered,
            correct: state.score,
            incorrect: state.answered.saturating_sub(state.score),
            best_streak: state.best_streak,
            accuracy_percentage,
        }
    }
}
