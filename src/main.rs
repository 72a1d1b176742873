// buzzlock — quiz lockout buzzer controller.
//
// Runs the round controller against scripted inputs on a simulated clock;
// the same controller drives real lines and a real clock on hardware.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use buzzlock::config::Settings;
use buzzlock::round::RoundController;
use buzzlock::sim::{ConsoleDisplay, ConsoleSounder, InputScript, Simulation, demo_script};
use buzzlock::traits::{NullSounder, Sounder};
use buzzlock::util::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "buzzlock", about = "Quiz lockout buzzer controller")]
struct Args {
    /// Path to settings JSON file.
    #[arg(long, default_value = "buzzlock.json")]
    config: PathBuf,

    /// Input script to replay instead of the built-in demo round.
    #[arg(long)]
    script: Option<PathBuf>,

    /// How far to run the simulated clock, in ms. Defaults to a little
    /// past the script's last event.
    #[arg(long)]
    run_ms: Option<u32>,

    /// Show debug logs.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    info!("buzzlock starting");

    // Load settings from file, falling back to defaults if not present.
    // A file that exists but fails to parse or validate is a hard error.
    let settings = if args.config.exists() {
        let settings = Settings::read(&args.config)?;
        info!(path = %args.config.display(), "Loaded settings");
        settings
    } else {
        info!(path = %args.config.display(), "Settings not found, using defaults");
        Settings::default()
    };

    let script = match &args.script {
        Some(path) => {
            let script = InputScript::read(path)?;
            info!(
                path = %path.display(),
                events = script.events.len(),
                "Loaded input script"
            );
            script
        }
        None => {
            info!("No script given, running the built-in demo round");
            demo_script(&settings)
        }
    };

    let until_ms = args
        .run_ms
        .unwrap_or_else(|| script.end_ms().saturating_add(500));

    let mut controller = RoundController::new(&settings);
    let mut display = ConsoleDisplay;
    let mut sounder: Box<dyn Sounder> = if settings.audio {
        Box::new(ConsoleSounder)
    } else {
        Box::new(NullSounder)
    };

    let mut sim = Simulation::new(script);
    sim.run(&mut controller, &mut display, sounder.as_mut(), until_ms);

    let round = controller.round();
    match (round.winner(), round.reaction_ms()) {
        (Some(winner), Some(reaction_ms)) => {
            info!(
                player = winner.index(),
                reaction_ms, "Final state: locked"
            );
        }
        _ => info!(phase = %round.phase(), "Final state"),
    }

    Ok(())
}
