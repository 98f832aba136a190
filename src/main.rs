use log::info;
use std::error::Error;
use std::io;
use verb_practice::cli::Args;
use verb_practice::data::{level_catalog, verb_table};
use verb_practice::exercise::ExerciseEngine;
use verb_practice::gui;
use verb_practice::session::SessionState;
use verb_practice::terminal::run_quiz;
use verb_practice::verbs::Level;

fn main() {
    env_logger::init();
    let args = Args::parse_args();

    if let Err(err) = run(&args) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let level = args.validate_level()?;
    let tense = args.validate_tense()?;
    let mut rng = args.make_rng();

    if !args.terminal {
        // Run the GUI application
        gui::run_app(level, tense, rng)?;
        return Ok(());
    }

    let level = level.unwrap_or(Level::A1);
    let tense = match tense {
        Some(tense) => tense,
        None => level_catalog()
            .tenses_for(level)
            .first()
            .map(|descriptor| descriptor.id)
            .ok_or_else(|| format!("Level {} has no tenses to practice", level))?,
    };
    info!("Terminal session: level {}, tense {}", level, tense);

    let engine = ExerciseEngine::new(verb_table());
    let state = SessionState::new()
        .select_level(level)
        .start_practice(&engine, &mut rng, tense)?;

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    run_quiz(&mut input, &mut output, &engine, &mut rng, state, args.rounds)?;
    Ok(())
}
