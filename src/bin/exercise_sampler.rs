use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use verb_practice::data::verb_table;
use verb_practice::exercise::{Exercise, ExerciseEngine};
use verb_practice::verbs::{Auxiliary, TenseId};

fn main() {
    let args: Vec<String> = env::args().collect();

    let (tense, count, seed) = validate_input(args);

    let engine = ExerciseEngine::new(verb_table());
    let mut rng = StdRng::seed_from_u64(seed);

    println!(
        "Sample exercises for: tense={}, count={}, seed={}",
        tense, count, seed
    );

    for index in 1..=count {
        match engine.get_random_exercise(&mut rng, tense) {
            Ok(exercise) => print_exercise(&engine, index, &exercise),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn validate_input(args: Vec<String>) -> (TenseId, usize, u64) {
    if args.len() < 2 || args.len() > 4 {
        eprintln!("Usage: {} <tense> [count] [seed]", args[0]);
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  <tense>  Tense identifier, e.g. passatoProssimo");
        eprintln!("  [count]  Number of exercises to print (default 5)");
        eprintln!("  [seed]   Random seed (default 0)");
        eprintln!();
        eprintln!("Example: {} passatoProssimo 3 42", args[0]);
        std::process::exit(1);
    }

    let tense: TenseId = match args[1].parse() {
        Ok(tense) => tense,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let count: usize = match args.get(2).map(|s| s.parse()) {
        None => 5,
        Some(Ok(n)) => n,
        Some(Err(_)) => {
            eprintln!("Error: count must be a non-negative integer");
            std::process::exit(1);
        }
    };

    let seed: u64 = match args.get(3).map(|s| s.parse()) {
        None => 0,
        Some(Ok(n)) => n,
        Some(Err(_)) => {
            eprintln!("Error: seed must be a non-negative integer");
            std::process::exit(1);
        }
    };
    (tense, count, seed)
}

/// Print one exercise, tagging each option with the auxiliary of the verb it came from
fn print_exercise(engine: &ExerciseEngine<'_>, index: usize, exercise: &Exercise) {
    println!();
    println!("{}. {}", index, exercise.question);
    for option in &exercise.options {
        let marker = if *option == exercise.correct_answer {
            "*"
        } else {
            " "
        };
        println!(
            "  {} {:<20} [{}]",
            marker,
            option,
            owning_auxiliary(engine, exercise.tense, option)
                .map(|aux| aux.as_str())
                .unwrap_or("?")
        );
    }
}

fn owning_auxiliary(engine: &ExerciseEngine<'_>, tense: TenseId, form: &str) -> Option<Auxiliary> {
    engine
        .table()
        .verbs()
        .iter()
        .find(|entry| {
            entry
                .conjugation(tense)
                .is_ok_and(|conjugation| conjugation.values().any(|f| f == form))
        })
        .map(|entry| entry.auxiliary)
}
