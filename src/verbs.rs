use crate::error::{LookupError, ParseIdError, TableError};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VerbId {
    Parlare,
    Mangiare,
    Andare,
    Fare,
    Essere,
    Venire,
    Partire,
    Vedere,
}

impl VerbId {
    pub const ALL: [VerbId; 8] = [
        VerbId::Parlare,
        VerbId::Mangiare,
        VerbId::Andare,
        VerbId::Fare,
        VerbId::Essere,
        VerbId::Venire,
        VerbId::Partire,
        VerbId::Vedere,
    ];

    /// The infinitive, which doubles as the verb's key
    pub fn as_str(&self) -> &'static str {
        match self {
            VerbId::Parlare => "parlare",
            VerbId::Mangiare => "mangiare",
            VerbId::Andare => "andare",
            VerbId::Fare => "fare",
            VerbId::Essere => "essere",
            VerbId::Venire => "venire",
            VerbId::Partire => "partire",
            VerbId::Vedere => "vedere",
        }
    }
}

impl fmt::Display for VerbId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerbId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VerbId::ALL
            .into_iter()
            .find(|verb| verb.as_str() == s)
            .ok_or_else(|| ParseIdError::new("verb", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TenseId {
    Presente,
    PassatoProssimo,
    Imperfetto,
    Trapassato,
    FuturoSemplice,
}

impl TenseId {
    pub const ALL: [TenseId; 5] = [
        TenseId::Presente,
        TenseId::PassatoProssimo,
        TenseId::Imperfetto,
        TenseId::Trapassato,
        TenseId::FuturoSemplice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TenseId::Presente => "presente",
            TenseId::PassatoProssimo => "passatoProssimo",
            TenseId::Imperfetto => "imperfetto",
            TenseId::Trapassato => "trapassato",
            TenseId::FuturoSemplice => "futuroSemplice",
        }
    }
}

impl fmt::Display for TenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TenseId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TenseId::ALL
            .into_iter()
            .find(|tense| tense.as_str() == s)
            .ok_or_else(|| ParseIdError::new("tense", s))
    }
}

/// The six grammatical persons, in conjugation-table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PronounId {
    Io,
    Tu,
    LuiLei,
    Noi,
    Voi,
    Loro,
}

impl PronounId {
    pub const ALL: [PronounId; 6] = [
        PronounId::Io,
        PronounId::Tu,
        PronounId::LuiLei,
        PronounId::Noi,
        PronounId::Voi,
        PronounId::Loro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PronounId::Io => "io",
            PronounId::Tu => "tu",
            PronounId::LuiLei => "lui_lei",
            PronounId::Noi => "noi",
            PronounId::Voi => "voi",
            PronounId::Loro => "loro",
        }
    }

    /// How the pronoun is shown to learners
    pub fn label(&self) -> &'static str {
        match self {
            PronounId::LuiLei => "lui/lei",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for PronounId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PronounId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PronounId::ALL
            .into_iter()
            .find(|pronoun| pronoun.as_str() == s || pronoun.label() == s)
            .ok_or_else(|| ParseIdError::new("pronoun", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Auxiliary {
    Avere,
    Essere,
}

impl Auxiliary {
    pub fn as_str(&self) -> &'static str {
        match self {
            Auxiliary::Avere => "avere",
            Auxiliary::Essere => "essere",
        }
    }

    pub fn opposite(&self) -> Auxiliary {
        match self {
            Auxiliary::Avere => Auxiliary::Essere,
            Auxiliary::Essere => Auxiliary::Avere,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbKind {
    Regular,
    Irregular,
}

impl VerbKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerbKind::Regular => "regular",
            VerbKind::Irregular => "irregular",
        }
    }
}

impl fmt::Display for VerbKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    A1,
    A2,
    B1,
    B2,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::A1, Level::A2, Level::B1, Level::B2];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseIdError::new("level", s))
    }
}

/// Explanation shown after a wrong answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub title: String,
    pub explanation: String,
    pub usage: String,
}

impl Lesson {
    pub fn new(title: &str, explanation: &str, usage: &str) -> Self {
        Self {
            title: title.to_string(),
            explanation: explanation.to_string(),
            usage: usage.to_string(),
        }
    }
}

pub type Conjugation = BTreeMap<PronounId, String>;

#[derive(Debug, Clone, PartialEq)]
pub struct VerbEntry {
    pub infinitive: VerbId,
    pub translation: String,
    pub auxiliary: Auxiliary,
    pub kind: VerbKind,
    pub conjugations: BTreeMap<TenseId, Conjugation>,
    pub lessons: BTreeMap<TenseId, Lesson>,
}

impl VerbEntry {
    pub fn new(
        infinitive: VerbId,
        translation: &str,
        auxiliary: Auxiliary,
        kind: VerbKind,
    ) -> Self {
        Self {
            infinitive,
            translation: translation.to_string(),
            auxiliary,
            kind,
            conjugations: BTreeMap::new(),
            lessons: BTreeMap::new(),
        }
    }

    /// Adds a full six-person conjugation, given in `PronounId::ALL` order,
    /// together with its lesson.
    pub fn with_tense(mut self, tense: TenseId, forms: [&str; 6], lesson: Lesson) -> Self {
        let conjugation = PronounId::ALL
            .into_iter()
            .zip(forms)
            .map(|(pronoun, form)| (pronoun, form.to_string()))
            .collect();
        self.conjugations.insert(tense, conjugation);
        self.lessons.insert(tense, lesson);
        self
    }

    pub fn has_tense(&self, tense: TenseId) -> bool {
        self.conjugations.contains_key(&tense)
    }

    pub fn conjugation(&self, tense: TenseId) -> Result<&Conjugation, LookupError> {
        self.conjugations
            .get(&tense)
            .ok_or(LookupError::MissingTense {
                verb: self.infinitive,
                tense,
            })
    }

    pub fn form(&self, tense: TenseId, pronoun: PronounId) -> Result<&str, LookupError> {
        self.conjugation(tense)?
            .get(&pronoun)
            .map(String::as_str)
            .ok_or(LookupError::MissingPronoun {
                verb: self.infinitive,
                tense,
                pronoun,
            })
    }

    pub fn lesson(&self, tense: TenseId) -> Result<&Lesson, LookupError> {
        self.lessons.get(&tense).ok_or(LookupError::MissingTense {
            verb: self.infinitive,
            tense,
        })
    }
}

/// Immutable verb data, validated once at construction
#[derive(Debug, Clone)]
pub struct VerbTable {
    verbs: Vec<VerbEntry>,
}

impl VerbTable {
    pub fn new(verbs: Vec<VerbEntry>) -> Result<Self, TableError> {
        let mut seen = BTreeSet::new();
        for entry in &verbs {
            if !seen.insert(entry.infinitive) {
                return Err(TableError::DuplicateVerb(entry.infinitive));
            }
            if let Some((tense, _)) = entry
                .conjugations
                .iter()
                .find(|(_, conjugation)| conjugation.is_empty())
            {
                return Err(TableError::EmptyConjugation {
                    verb: entry.infinitive,
                    tense: *tense,
                });
            }
            if let Some(tense) = entry
                .conjugations
                .keys()
                .find(|tense| !entry.lessons.contains_key(tense))
            {
                return Err(TableError::MissingLesson {
                    verb: entry.infinitive,
                    tense: *tense,
                });
            }
        }
        Ok(Self { verbs })
    }

    pub fn get(&self, verb: VerbId) -> Result<&VerbEntry, LookupError> {
        self.verbs
            .iter()
            .find(|entry| entry.infinitive == verb)
            .ok_or(LookupError::UnknownVerb(verb))
    }

    pub fn verbs(&self) -> &[VerbEntry] {
        &self.verbs
    }

    /// Verbs conjugated in `tense`, in table order
    pub fn verbs_for_tense(&self, tense: TenseId) -> Vec<VerbId> {
        self.verbs
            .iter()
            .filter(|entry| entry.has_tense(tense))
            .map(|entry| entry.infinitive)
            .collect()
    }

    pub fn verbs_with_auxiliary(&self, auxiliary: Auxiliary) -> Vec<VerbId> {
        self.verbs
            .iter()
            .filter(|entry| entry.auxiliary == auxiliary)
            .map(|entry| entry.infinitive)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenseDescriptor {
    pub id: TenseId,
    pub display_name: String,
    pub description: String,
}

impl TenseDescriptor {
    pub fn new(id: TenseId, display_name: &str, description: &str) -> Self {
        Self {
            id,
            display_name: display_name.to_string(),
            description: description.to_string(),
        }
    }
}

/// Which tenses each proficiency level practices
#[derive(Debug, Clone, Default)]
pub struct LevelTenseCatalog {
    tenses: BTreeMap<Level, Vec<TenseDescriptor>>,
}

impl LevelTenseCatalog {
    pub fn new(tenses: BTreeMap<Level, Vec<TenseDescriptor>>) -> Self {
        Self { tenses }
    }

    /// Tenses offered at `level`; empty for a level with nothing configured
    pub fn tenses_for(&self, level: Level) -> &[TenseDescriptor] {
        self.tenses.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn levels(&self) -> impl Iterator<Item = Level> + '_ {
        self.tenses.keys().copied()
    }

    pub fn describe(&self, tense: TenseId) -> Option<&TenseDescriptor> {
        self.tenses
            .values()
            .flatten()
            .find(|descriptor| descriptor.id == tense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson() -> Lesson {
        Lesson::new("Title", "Explanation", "Usage")
    }

    fn parlare() -> VerbEntry {
        VerbEntry::new(
            VerbId::Parlare,
            "to speak",
            Auxiliary::Avere,
            VerbKind::Regular,
        )
        .with_tense(
            TenseId::PassatoProssimo,
            [
                "ho parlato",
                "hai parlato",
                "ha parlato",
                "abbiamo parlato",
                "avete parlato",
                "hanno parlato",
            ],
            lesson(),
        )
    }

    #[test]
    fn test_ids_round_trip_through_strings() {
        for verb in VerbId::ALL {
            assert_eq!(verb.as_str().parse::<VerbId>(), Ok(verb));
        }
        for tense in TenseId::ALL {
            assert_eq!(tense.as_str().parse::<TenseId>(), Ok(tense));
        }
        for pronoun in PronounId::ALL {
            assert_eq!(pronoun.as_str().parse::<PronounId>(), Ok(pronoun));
        }
    }

    #[test]
    fn test_unknown_ids_are_rejected() {
        assert!("trapassatoRemoto".parse::<TenseId>().is_err());
        assert!("cantare".parse::<VerbId>().is_err());
        assert!("egli".parse::<PronounId>().is_err());
        assert!("C1".parse::<Level>().is_err());
    }

    #[test]
    fn test_pronoun_label_and_key() {
        assert_eq!(PronounId::LuiLei.as_str(), "lui_lei");
        assert_eq!(PronounId::LuiLei.label(), "lui/lei");
        assert_eq!("lui/lei".parse::<PronounId>(), Ok(PronounId::LuiLei));
        assert_eq!(PronounId::Noi.label(), "noi");
    }

    #[test]
    fn test_level_parse_is_case_insensitive() {
        assert_eq!("b1".parse::<Level>(), Ok(Level::B1));
        assert_eq!("A2".parse::<Level>(), Ok(Level::A2));
    }

    #[test]
    fn test_auxiliary_opposite() {
        assert_eq!(Auxiliary::Avere.opposite(), Auxiliary::Essere);
        assert_eq!(Auxiliary::Essere.opposite(), Auxiliary::Avere);
    }

    #[test]
    fn test_with_tense_fills_all_pronouns_in_order() {
        let entry = parlare();
        assert_eq!(
            entry.form(TenseId::PassatoProssimo, PronounId::Io),
            Ok("ho parlato")
        );
        assert_eq!(
            entry.form(TenseId::PassatoProssimo, PronounId::Loro),
            Ok("hanno parlato")
        );
        assert_eq!(
            entry.conjugation(TenseId::PassatoProssimo).unwrap().len(),
            6
        );
    }

    #[test]
    fn test_form_reports_missing_tense_and_pronoun() {
        let mut entry = parlare();
        assert_eq!(
            entry.form(TenseId::Imperfetto, PronounId::Io),
            Err(LookupError::MissingTense {
                verb: VerbId::Parlare,
                tense: TenseId::Imperfetto,
            })
        );

        entry
            .conjugations
            .get_mut(&TenseId::PassatoProssimo)
            .unwrap()
            .remove(&PronounId::Voi);
        assert_eq!(
            entry.form(TenseId::PassatoProssimo, PronounId::Voi),
            Err(LookupError::MissingPronoun {
                verb: VerbId::Parlare,
                tense: TenseId::PassatoProssimo,
                pronoun: PronounId::Voi,
            })
        );
    }

    #[test]
    fn test_table_rejects_tense_without_lesson() {
        let mut entry = parlare();
        entry.lessons.clear();

        let result = VerbTable::new(vec![entry]);
        assert_eq!(
            result.unwrap_err(),
            TableError::MissingLesson {
                verb: VerbId::Parlare,
                tense: TenseId::PassatoProssimo,
            }
        );
    }

    #[test]
    fn test_table_rejects_tense_without_forms() {
        let mut entry = parlare();
        entry
            .conjugations
            .get_mut(&TenseId::PassatoProssimo)
            .unwrap()
            .clear();

        let result = VerbTable::new(vec![entry]);
        assert_eq!(
            result.unwrap_err(),
            TableError::EmptyConjugation {
                verb: VerbId::Parlare,
                tense: TenseId::PassatoProssimo,
            }
        );
    }

    #[test]
    fn test_verb_kind_display() {
        assert_eq!(VerbKind::Regular.to_string(), "regular");
        assert_eq!(VerbKind::Irregular.to_string(), "irregular");
    }

    #[test]
    fn test_table_rejects_duplicate_verbs() {
        let result = VerbTable::new(vec![parlare(), parlare()]);
        assert_eq!(
            result.unwrap_err(),
            TableError::DuplicateVerb(VerbId::Parlare)
        );
    }

    #[test]
    fn test_table_lookup_and_tense_filter() {
        let table = VerbTable::new(vec![parlare()]).unwrap();

        assert!(table.get(VerbId::Parlare).is_ok());
        assert_eq!(
            table.get(VerbId::Fare).unwrap_err(),
            LookupError::UnknownVerb(VerbId::Fare)
        );
        assert_eq!(
            table.verbs_for_tense(TenseId::PassatoProssimo),
            vec![VerbId::Parlare]
        );
        assert!(table.verbs_for_tense(TenseId::Trapassato).is_empty());
        assert!(table.verbs_with_auxiliary(Auxiliary::Essere).is_empty());
    }

    #[test]
    fn test_catalog_lookup() {
        let mut tenses = BTreeMap::new();
        tenses.insert(
            Level::A1,
            vec![TenseDescriptor::new(
                TenseId::PassatoProssimo,
                "Passato Prossimo",
                "Recent past",
            )],
        );
        let catalog = LevelTenseCatalog::new(tenses);

        assert_eq!(catalog.tenses_for(Level::A1).len(), 1);
        assert!(catalog.tenses_for(Level::B2).is_empty());
        assert_eq!(catalog.levels().collect::<Vec<_>>(), vec![Level::A1]);
        assert_eq!(
            catalog
                .describe(TenseId::PassatoProssimo)
                .map(|d| d.display_name.as_str()),
            Some("Passato Prossimo")
        );
        assert!(catalog.describe(TenseId::Imperfetto).is_none());
    }
}
