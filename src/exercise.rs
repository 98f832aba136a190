use crate::error::{ExerciseError, LookupError};
use crate::verbs::{Auxiliary, Lesson, PronounId, TenseId, VerbId, VerbTable};
use log::{debug, info};
use rand::Rng;
use rand::seq::SliceRandom;

/// Distractors requested for a standard six-option exercise
pub const DISTRACTOR_COUNT: usize = 5;

/// Random draws allowed when the auxiliary pools run dry
pub const FALLBACK_ATTEMPTS: usize = 50;

/// A single practice item
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub verb: VerbId,
    pub infinitive: String,
    pub translation: String,
    pub tense: TenseId,
    pub pronoun: PronounId,
    pub question: String,
    pub correct_answer: String,
    /// Candidate answers; empty until the multiple-choice step fills it
    pub options: Vec<String>,
    pub lesson: Lesson,
}

impl Exercise {
    pub fn check_answer(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

/// Pure equality between a submitted answer and the exercise's correct one
pub fn check_answer(exercise: &Exercise, answer: &str) -> bool {
    exercise.check_answer(answer)
}

/// How many distractors to take from the correct verb's auxiliary class and
/// from the opposite class, so both classes fill half of the options.
pub fn auxiliary_split(count: usize) -> (usize, usize) {
    let per_class = (count + 1) / 2;
    let same = per_class.saturating_sub(1);
    (same, count - same)
}

/// Stateless exercise generator over a borrowed verb table
#[derive(Debug, Clone, Copy)]
pub struct ExerciseEngine<'a> {
    table: &'a VerbTable,
}

impl<'a> ExerciseEngine<'a> {
    pub fn new(table: &'a VerbTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a VerbTable {
        self.table
    }

    /// Builds the exercise for one verb/tense/pronoun, without options
    pub fn generate_exercise(
        &self,
        verb: VerbId,
        tense: TenseId,
        pronoun: PronounId,
    ) -> Result<Exercise, LookupError> {
        let entry = self.table.get(verb)?;
        let correct_answer = entry.form(tense, pronoun)?.to_string();
        let lesson = entry.lesson(tense)?.clone();

        Ok(Exercise {
            verb,
            infinitive: verb.as_str().to_string(),
            translation: entry.translation.clone(),
            tense,
            pronoun,
            question: format!("{} __________ ({})", pronoun.label(), verb.as_str()),
            correct_answer,
            options: Vec::new(),
            lesson,
        })
    }

    /// Wrong answers drawn evenly from both auxiliary classes.
    ///
    /// Each class is walked in random order taking the same pronoun's form;
    /// if that leaves the list short, random forms of the tense are sampled
    /// for at most `FALLBACK_ATTEMPTS` draws. A shorter result is possible
    /// and is not an error.
    pub fn generate_distractors<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        correct_answer: &str,
        verb: VerbId,
        tense: TenseId,
        pronoun: PronounId,
        count: usize,
    ) -> Result<Vec<String>, LookupError> {
        let auxiliary = self.table.get(verb)?.auxiliary;
        let (same_count, opposite_count) = auxiliary_split(count);

        let mut distractors = Vec::with_capacity(count);
        for (class, wanted) in [
            (auxiliary, same_count),
            (auxiliary.opposite(), opposite_count),
        ] {
            self.draw_from_class(
                rng,
                class,
                wanted,
                correct_answer,
                (tense, pronoun),
                &mut distractors,
            );
        }

        let mut attempts = 0;
        let verbs = self.table.verbs();
        while distractors.len() < count && attempts < FALLBACK_ATTEMPTS {
            attempts += 1;
            let Some(entry) = verbs.choose(rng) else {
                break;
            };
            let Ok(conjugation) = entry.conjugation(tense) else {
                continue;
            };
            let forms: Vec<&String> = conjugation.values().collect();
            let Some(form) = forms.choose(rng) else {
                continue;
            };
            if form.as_str() != correct_answer && !distractors.contains(*form) {
                distractors.push((*form).clone());
            }
        }

        if attempts > 0 {
            debug!(
                "Distractor fallback for {} {} used {} attempt(s)",
                verb, tense, attempts
            );
        }
        if distractors.len() < count {
            debug!(
                "Only {} of {} distractors available for {} {} ({})",
                distractors.len(),
                count,
                verb,
                tense,
                pronoun
            );
        }

        distractors.truncate(count);
        Ok(distractors)
    }

    fn draw_from_class<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        class: Auxiliary,
        wanted: usize,
        correct_answer: &str,
        (tense, pronoun): (TenseId, PronounId),
        distractors: &mut Vec<String>,
    ) {
        let mut candidates = self.table.verbs_with_auxiliary(class);
        candidates.shuffle(rng);

        let mut taken = 0;
        for candidate in candidates {
            if taken >= wanted {
                break;
            }
            let Ok(entry) = self.table.get(candidate) else {
                continue;
            };
            let Ok(form) = entry.form(tense, pronoun) else {
                continue;
            };
            if form != correct_answer && !distractors.iter().any(|d| d == form) {
                distractors.push(form.to_string());
                taken += 1;
            }
        }
    }

    /// Random pronoun, correct answer plus distractors, shuffled
    pub fn generate_multiple_choice_exercise<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        verb: VerbId,
        tense: TenseId,
    ) -> Result<Exercise, ExerciseError> {
        let pronouns: Vec<PronounId> = self
            .table
            .get(verb)?
            .conjugation(tense)?
            .keys()
            .copied()
            .collect();
        let pronoun = *pronouns
            .choose(rng)
            .ok_or(LookupError::MissingTense { verb, tense })?;

        let mut exercise = self.generate_exercise(verb, tense, pronoun)?;
        let distractors = self.generate_distractors(
            rng,
            &exercise.correct_answer,
            verb,
            tense,
            pronoun,
            DISTRACTOR_COUNT,
        )?;

        let mut options = Vec::with_capacity(distractors.len() + 1);
        options.push(exercise.correct_answer.clone());
        options.extend(distractors);
        options.shuffle(rng);
        exercise.options = options;

        Ok(exercise)
    }

    /// Exercise for a uniformly chosen verb that has `tense`
    pub fn get_random_exercise<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        tense: TenseId,
    ) -> Result<Exercise, ExerciseError> {
        let verbs = self.table.verbs_for_tense(tense);
        let verb = *verbs
            .choose(rng)
            .ok_or(ExerciseError::NoVerbsAvailable(tense))?;

        let exercise = self.generate_multiple_choice_exercise(rng, verb, tense)?;
        info!(
            "New exercise: {} | {} options",
            exercise.question,
            exercise.options.len()
        );
        Ok(exercise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::verb_table;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn engine() -> ExerciseEngine<'static> {
        ExerciseEngine::new(verb_table())
    }

    #[test]
    fn test_auxiliary_split_for_six_options() {
        assert_eq!(auxiliary_split(5), (2, 3));
    }

    #[test]
    fn test_auxiliary_split_other_counts() {
        assert_eq!(auxiliary_split(0), (0, 0));
        assert_eq!(auxiliary_split(1), (0, 1));
        assert_eq!(auxiliary_split(3), (1, 2));
        assert_eq!(auxiliary_split(4), (1, 3));
        assert_eq!(auxiliary_split(7), (3, 4));
    }

    #[test]
    fn test_generate_exercise_parlare_io() {
        let exercise = engine()
            .generate_exercise(VerbId::Parlare, TenseId::PassatoProssimo, PronounId::Io)
            .unwrap();

        assert_eq!(exercise.correct_answer, "ho parlato");
        assert_eq!(exercise.question, "io __________ (parlare)");
        assert_eq!(exercise.translation, "to speak");
        assert_eq!(exercise.lesson.title, "Parlare - Passato Prossimo");
        assert!(exercise.options.is_empty());
    }

    #[test]
    fn test_generate_exercise_uses_pronoun_label() {
        let exercise = engine()
            .generate_exercise(VerbId::Andare, TenseId::PassatoProssimo, PronounId::LuiLei)
            .unwrap();

        assert_eq!(exercise.question, "lui/lei __________ (andare)");
        assert_eq!(exercise.correct_answer, "è andato/a");
    }

    #[test]
    fn test_generate_exercise_missing_tense() {
        let result =
            engine().generate_exercise(VerbId::Fare, TenseId::Imperfetto, PronounId::Tu);
        assert_eq!(
            result.unwrap_err(),
            LookupError::MissingTense {
                verb: VerbId::Fare,
                tense: TenseId::Imperfetto,
            }
        );
    }

    #[test]
    fn test_distractors_never_contain_correct_answer() {
        let engine = engine();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let distractors = engine
                .generate_distractors(
                    &mut rng,
                    "ha fatto",
                    VerbId::Fare,
                    TenseId::PassatoProssimo,
                    PronounId::LuiLei,
                    DISTRACTOR_COUNT,
                )
                .unwrap();
            assert_eq!(distractors.len(), DISTRACTOR_COUNT);
            assert!(!distractors.iter().any(|d| d == "ha fatto"));
        }
    }

    #[test]
    fn test_distractors_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let distractors = engine()
            .generate_distractors(
                &mut rng,
                "ho parlato",
                VerbId::Parlare,
                TenseId::PassatoProssimo,
                PronounId::Io,
                0,
            )
            .unwrap();
        assert!(distractors.is_empty());
    }

    #[test]
    fn test_multiple_choice_has_six_unique_options() {
        let engine = engine();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let exercise = engine
                .generate_multiple_choice_exercise(&mut rng, VerbId::Essere, TenseId::PassatoProssimo)
                .unwrap();

            assert_eq!(exercise.options.len(), 6);
            let mut unique = exercise.options.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), 6);
            assert_eq!(
                exercise
                    .options
                    .iter()
                    .filter(|o| **o == exercise.correct_answer)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn test_same_seed_gives_same_exercise() {
        let engine = engine();
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);

        let a = engine
            .get_random_exercise(&mut first, TenseId::PassatoProssimo)
            .unwrap();
        let b = engine
            .get_random_exercise(&mut second, TenseId::PassatoProssimo)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_exercise_without_verbs() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = engine().get_random_exercise(&mut rng, TenseId::Trapassato);
        assert_eq!(
            result.unwrap_err(),
            ExerciseError::NoVerbsAvailable(TenseId::Trapassato)
        );
    }

    #[test]
    fn test_check_answer() {
        let exercise = engine()
            .generate_exercise(VerbId::Mangiare, TenseId::PassatoProssimo, PronounId::Noi)
            .unwrap();

        assert!(check_answer(&exercise, "abbiamo mangiato"));
        assert!(!check_answer(&exercise, "abbiamo parlato"));
        assert!(!check_answer(&exercise, ""));
    }
}
