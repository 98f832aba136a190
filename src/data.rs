//! The verb table and level catalog the application ships with.
//!
//! Adding a verb means adding a `VerbId` variant and an entry below; adding a
//! tense means a `with_tense` call per verb plus a catalog descriptor.

use crate::verbs::{
    Auxiliary, Lesson, Level, LevelTenseCatalog, TenseDescriptor, TenseId, VerbEntry, VerbId,
    VerbKind, VerbTable,
};
use std::collections::BTreeMap;
use std::sync::OnceLock;

use Auxiliary::{Avere, Essere};
use TenseId::PassatoProssimo;
use VerbKind::{Irregular, Regular};

/// Process-wide shipped verb table, built on first use
pub fn verb_table() -> &'static VerbTable {
    static TABLE: OnceLock<VerbTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        // The entries below always carry a lesson per tense and unique ids.
        VerbTable::new(shipped_verbs()).unwrap_or_else(|err| panic!("shipped verb data: {err}"))
    })
}

/// Process-wide shipped level catalog
pub fn level_catalog() -> &'static LevelTenseCatalog {
    static CATALOG: OnceLock<LevelTenseCatalog> = OnceLock::new();
    CATALOG.get_or_init(shipped_catalog)
}

pub fn shipped_verbs() -> Vec<VerbEntry> {
    vec![
        VerbEntry::new(VerbId::Parlare, "to speak", Avere, Regular).with_tense(
            PassatoProssimo,
            [
                "ho parlato",
                "hai parlato",
                "ha parlato",
                "abbiamo parlato",
                "avete parlato",
                "hanno parlato",
            ],
            Lesson::new(
                "Parlare - Passato Prossimo",
                "Parlare is a regular -are verb. In passato prossimo, it uses the auxiliary verb \"avere\" + the past participle \"parlato\". This tense is used to describe completed actions in the past.",
                "Example: \"Ieri ho parlato con Maria\" (Yesterday I spoke with Maria)",
            ),
        ),
        VerbEntry::new(VerbId::Mangiare, "to eat", Avere, Regular).with_tense(
            PassatoProssimo,
            [
                "ho mangiato",
                "hai mangiato",
                "ha mangiato",
                "abbiamo mangiato",
                "avete mangiato",
                "hanno mangiato",
            ],
            Lesson::new(
                "Mangiare - Passato Prossimo",
                "Mangiare is a regular -are verb. It uses \"avere\" as auxiliary + past participle \"mangiato\". Remember that verbs ending in -giare drop the \"i\" before adding -ato.",
                "Example: \"Stamattina ho mangiato una mela\" (This morning I ate an apple)",
            ),
        ),
        VerbEntry::new(VerbId::Andare, "to go", Essere, Irregular).with_tense(
            PassatoProssimo,
            [
                "sono andato/a",
                "sei andato/a",
                "è andato/a",
                "siamo andati/e",
                "siete andati/e",
                "sono andati/e",
            ],
            Lesson::new(
                "Andare - Passato Prossimo",
                "Andare is an irregular verb that uses \"essere\" as auxiliary + past participle \"andato\". When using essere, the past participle must agree in gender and number with the subject (-o/-a for singular, -i/-e for plural).",
                "Example: \"Sono andato al cinema\" (I went to the cinema - masculine) / \"Sono andata al cinema\" (I went to the cinema - feminine)",
            ),
        ),
        VerbEntry::new(VerbId::Fare, "to do/make", Avere, Irregular).with_tense(
            PassatoProssimo,
            [
                "ho fatto",
                "hai fatto",
                "ha fatto",
                "abbiamo fatto",
                "avete fatto",
                "hanno fatto",
            ],
            Lesson::new(
                "Fare - Passato Prossimo",
                "Fare is an irregular verb with an irregular past participle \"fatto\". It uses \"avere\" as auxiliary. This is one of the most common verbs in Italian.",
                "Example: \"Ho fatto i compiti\" (I did my homework)",
            ),
        ),
        VerbEntry::new(VerbId::Essere, "to be", Essere, Irregular).with_tense(
            PassatoProssimo,
            [
                "sono stato/a",
                "sei stato/a",
                "è stato/a",
                "siamo stati/e",
                "siete stati/e",
                "sono stati/e",
            ],
            Lesson::new(
                "Essere - Passato Prossimo",
                "Essere is irregular and uses itself as auxiliary + past participle \"stato\". The past participle agrees with the subject in gender and number.",
                "Example: \"Sono stato malato\" (I was sick - masculine) / \"Sono stata contenta\" (I was happy - feminine)",
            ),
        ),
        VerbEntry::new(VerbId::Venire, "to come", Essere, Irregular).with_tense(
            PassatoProssimo,
            [
                "sono venuto/a",
                "sei venuto/a",
                "è venuto/a",
                "siamo venuti/e",
                "siete venuti/e",
                "sono venuti/e",
            ],
            Lesson::new(
                "Venire - Passato Prossimo",
                "Venire is an irregular verb of motion. It takes \"essere\" as auxiliary + the irregular past participle \"venuto\", which agrees with the subject in gender and number.",
                "Example: \"Sono venuta alla festa\" (I came to the party - feminine)",
            ),
        ),
        VerbEntry::new(VerbId::Partire, "to leave", Essere, Regular).with_tense(
            PassatoProssimo,
            [
                "sono partito/a",
                "sei partito/a",
                "è partito/a",
                "siamo partiti/e",
                "siete partiti/e",
                "sono partiti/e",
            ],
            Lesson::new(
                "Partire - Passato Prossimo",
                "Partire is a regular -ire verb. Like most verbs of movement it uses \"essere\" + the past participle \"partito\", agreeing with the subject.",
                "Example: \"Siamo partiti alle otto\" (We left at eight)",
            ),
        ),
        VerbEntry::new(VerbId::Vedere, "to see", Avere, Irregular).with_tense(
            PassatoProssimo,
            [
                "ho visto",
                "hai visto",
                "ha visto",
                "abbiamo visto",
                "avete visto",
                "hanno visto",
            ],
            Lesson::new(
                "Vedere - Passato Prossimo",
                "Vedere is an -ere verb with the irregular past participle \"visto\". It uses \"avere\" as auxiliary, so the participle does not change with the subject.",
                "Example: \"Hai visto quel film?\" (Did you see that film?)",
            ),
        ),
    ]
}

pub fn shipped_catalog() -> LevelTenseCatalog {
    let passato_prossimo = || TenseDescriptor::new(PassatoProssimo, "Passato Prossimo", "Recent past");

    let tenses = Level::ALL
        .into_iter()
        .map(|level| (level, vec![passato_prossimo()]))
        .collect::<BTreeMap<_, _>>();
    LevelTenseCatalog::new(tenses)
}
