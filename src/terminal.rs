use crate::data::level_catalog;
use crate::exercise::{Exercise, ExerciseEngine};
use crate::session::{AnswerFeedback, SessionState, SessionSummary};
use crate::verbs::VerbEntry;
use colored::Colorize;
use log::debug;
use rand::Rng;
use std::error::Error;
use std::io::{BufRead, Write};

/// What the learner typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Answer(String),
    Quit,
    Invalid,
}

/// Accepts an option number (1-based), the option text itself, or `q`/`quit`
pub fn parse_choice(input: &str, exercise: &Exercise) -> Choice {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return Choice::Quit;
    }

    if let Ok(number) = input.parse::<usize>() {
        return match number.checked_sub(1).and_then(|i| exercise.options.get(i)) {
            Some(option) => Choice::Answer(option.clone()),
            None => Choice::Invalid,
        };
    }

    match exercise.options.iter().find(|option| option.as_str() == input) {
        Some(option) => Choice::Answer(option.clone()),
        None => Choice::Invalid,
    }
}

pub fn render_exercise(exercise: &Exercise) -> String {
    let mut lines = vec![
        "Complete the sentence:".to_string(),
        format!("  {}", exercise.question),
        String::new(),
    ];
    lines.extend(
        exercise
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| format!("  {}) {}", i + 1, option)),
    );
    lines.join("\n")
}

/// The lesson card shown after a wrong answer, with the full conjugation
pub fn render_lesson(exercise: &Exercise, entry: &VerbEntry) -> String {
    let mut lines = vec![
        exercise.lesson.title.clone(),
        format!("Translation: {} ({} verb)", exercise.translation, entry.kind),
        exercise.lesson.explanation.clone(),
        exercise.lesson.usage.clone(),
        String::new(),
        "Full Conjugation".to_string(),
    ];
    if let Ok(conjugation) = entry.conjugation(exercise.tense) {
        lines.extend(
            conjugation
                .iter()
                .map(|(pronoun, form)| format!("  {:<8} {}", pronoun.label(), form)),
        );
    }
    lines.join("\n")
}

pub fn render_feedback(feedback: &AnswerFeedback, state: &SessionState) -> String {
    let counters = format!("Score: {}  Streak: {}", state.score, state.streak);
    match feedback {
        AnswerFeedback::Correct => format!("{}  {}", "✓ Correct!".green().bold(), counters),
        AnswerFeedback::Incorrect { correct_answer, .. } => format!(
            "{} The answer was: {}  {}",
            "✗ Incorrect.".red().bold(),
            correct_answer.as_str().bold(),
            counters
        ),
    }
}

pub fn render_summary(summary: &SessionSummary) -> String {
    format!(
        "Session complete: {}/{} correct ({:.1}%), best streak {}",
        summary.correct, summary.answered, summary.accuracy_percentage, summary.best_streak
    )
}

/// Runs exercises from `state` until `rounds` answers are in, the input ends,
/// or the learner quits. Returns the final session state.
pub fn run_quiz<I, O, R>(
    input: &mut I,
    output: &mut O,
    engine: &ExerciseEngine<'_>,
    rng: &mut R,
    mut state: SessionState,
    rounds: Option<u32>,
) -> Result<SessionState, Box<dyn Error>>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    if let Some(tense) = state.tense {
        if let Some(descriptor) = level_catalog().describe(tense) {
            writeln!(
                output,
                "{} - {}",
                descriptor.display_name.as_str().bold(),
                descriptor.description
            )?;
        }
    }

    while let Some(exercise) = state.exercise.clone() {
        if rounds.is_some_and(|limit| state.answered >= limit) {
            break;
        }
        writeln!(output)?;
        writeln!(output, "{}", render_exercise(&exercise))?;
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("Input closed");
            break;
        }

        let answer = match parse_choice(&line, &exercise) {
            Choice::Quit => break,
            Choice::Invalid => {
                writeln!(
                    output,
                    "Please enter a number between 1 and {}, or q to quit",
                    exercise.options.len()
                )?;
                continue;
            }
            Choice::Answer(answer) => answer,
        };

        let (next, feedback) = state.submit_answer(&answer)?;
        writeln!(output, "{}", render_feedback(&feedback, &next))?;
        if !feedback.is_correct() {
            let entry = engine.table().get(exercise.verb)?;
            writeln!(output)?;
            writeln!(output, "{}", render_lesson(&exercise, entry))?;
        }

        if rounds.is_some_and(|limit| next.answered >= limit) {
            state = next;
            break;
        }
        state = next.next_exercise(engine, rng)?;
    }

    writeln!(output)?;
    writeln!(output, "{}", render_summary(&SessionSummary::from_state(&state)))?;
    Ok(state)
}
