use crate::verbs::{Level, TenseId};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Italian verb conjugation practice with multiple-choice exercises
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "Verb Practice")]
#[command(about = "Practice Italian verb conjugations", long_about = None)]
#[command(version)]
pub struct Args {
    /// Run the quiz in the terminal instead of opening a window
    #[arg(long, help = "Run the quiz in the terminal instead of opening a window")]
    pub terminal: bool,

    /// Proficiency level to start with (A1, A2, B1, B2)
    #[arg(long, value_name = "LEVEL", help = "Preselect a level (A1, A2, B1, B2)")]
    pub level: Option<String>,

    /// Tense to practice, e.g. passatoProssimo
    #[arg(long, value_name = "TENSE", help = "Preselect a tense, e.g. passatoProssimo")]
    pub tense: Option<String>,

    /// Seed for reproducible exercises
    #[arg(long, value_name = "SEED", help = "Seed the random generator")]
    pub seed: Option<u64>,

    /// Stop the terminal quiz after this many answers
    #[arg(long, value_name = "N", help = "Number of answers before the terminal quiz ends")]
    pub rounds: Option<u32>,

    /// Disable colored terminal output
    #[arg(long, help = "Disable colored terminal output")]
    pub no_color: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    pub fn validate_level(&self) -> Result<Option<Level>, String> {
        match &self.level {
            Some(level) => level.parse().map(Some).map_err(|_| {
                format!(
                    "Invalid value for --level: '{}'. Expected one of A1, A2, B1, B2",
                    level
                )
            }),
            None => Ok(None),
        }
    }

    pub fn validate_tense(&self) -> Result<Option<TenseId>, String> {
        match &self.tense {
            Some(tense) => tense.parse().map(Some).map_err(|_| {
                let known: Vec<&str> = TenseId::ALL.iter().map(|t| t.as_str()).collect();
                format!(
                    "Invalid value for --tense: '{}'. Expected one of {}",
                    tense,
                    known.join(", ")
                )
            }),
            None => Ok(None),
        }
    }

    /// Seeded generator when `--seed` is given, otherwise from entropy
    pub fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
