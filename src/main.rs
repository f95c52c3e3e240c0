//! Pixel Pet - Entry Point
//!
//! Interactive terminal front-end. A tokio interval feeds wall-clock time
//! into the engine while commands arrive on stdin.

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use pixel_pet::core::config::PetConfig;
use pixel_pet::core::error::Result;
use pixel_pet::core::types::{Accessory, Biome, Species, ThemeId};
use pixel_pet::engine::EventKind;
use pixel_pet::persistence::FileStore;
use pixel_pet::pet::AdoptionForm;
use pixel_pet::render::{colors::palette, render_frame};
use pixel_pet::{Command, PetApp};

/// How often the real-time loop advances the engine
const FRAME: Duration = Duration::from_millis(100);

/// Log lines shown under the pet
const LOG_TAIL: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "pixel-pet")]
#[command(about = "Adopt and look after a pixel pet in your terminal")]
struct Args {
    /// Directory holding the save file
    #[arg(long, default_value = ".pixel-pet")]
    save_dir: PathBuf,

    /// Optional TOML file overriding engine tunables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

/// Where the adoption prompts are
enum Adoption {
    Name,
    Species { name: String },
    Theme { name: String, species: Species },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pixel_pet=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PetConfig::load(path)?,
        None => PetConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    tracing::info!("Pixel Pet starting (save dir {:?})", args.save_dir);

    let rt = Runtime::new()?;
    rt.block_on(run(args, config))
}

async fn run(args: Args, config: PetConfig) -> Result<()> {
    let color = !args.no_color;
    let mut app = PetApp::start(config, Box::new(FileStore::new(&args.save_dir)))?;
    let mut adoption = Adoption::Name;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut frames = tokio::time::interval(FRAME);
    let mut last = Instant::now();

    print_help();
    if app.needs_adoption() {
        prompt_adoption(&adoption);
    } else {
        redraw(&app, color);
    }

    loop {
        tokio::select! {
            _ = frames.tick() => {
                let now = Instant::now();
                app.advance(now.duration_since(last).as_millis() as u64);
                last = now;
                announce(&mut app);
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                if input == "quit" || input == "q" {
                    break;
                }

                if app.needs_adoption() {
                    adoption = step_adoption(&mut app, adoption, input);
                    if app.needs_adoption() {
                        prompt_adoption(&adoption);
                    } else {
                        redraw(&app, color);
                    }
                    continue;
                }

                match input {
                    "status" | "s" => redraw(&app, color),
                    "help" | "h" => print_help(),
                    _ => match input.parse::<Command>() {
                        Ok(command) => {
                            let applied = app.dispatch(command)?;
                            if !applied {
                                println!("(nothing happened)");
                            }
                            if app.needs_adoption() {
                                adoption = Adoption::Name;
                                prompt_adoption(&adoption);
                            } else {
                                announce(&mut app);
                                redraw(&app, color);
                            }
                        }
                        Err(e) => println!("{}", e),
                    },
                }
            }
        }
    }

    if let Some(engine) = app.engine_mut() {
        engine.shutdown();
    }
    tracing::info!("Goodbye");
    Ok(())
}

fn step_adoption(app: &mut PetApp, step: Adoption, input: &str) -> Adoption {
    match step {
        Adoption::Name => Adoption::Species {
            name: input.to_string(),
        },
        Adoption::Species { name } => match Species::from_id(input) {
            Some(species) => Adoption::Theme { name, species },
            None => {
                println!("Pick one of: cat, dino, slime");
                Adoption::Species { name }
            }
        },
        Adoption::Theme { name, species } => {
            let Some(theme) = ThemeId::from_id(input) else {
                println!("Pick one of: pink, blue, green");
                return Adoption::Theme { name, species };
            };
            match app.adopt(AdoptionForm::new(name, species, theme)) {
                Ok(_) => Adoption::Name,
                Err(e) => {
                    println!("{}", e);
                    Adoption::Name
                }
            }
        }
    }
}

fn prompt_adoption(step: &Adoption) {
    match step {
        Adoption::Name => print!("Name your pet (up to 16 characters): "),
        Adoption::Species { .. } => print!("Which friend? [cat/dino/slime]: "),
        Adoption::Theme { .. } => {
            let options: Vec<String> = ThemeId::ALL
                .iter()
                .map(|t| format!("{} ({})", t.id(), palette(*t).label))
                .collect();
            print!("Theme? {}: ", options.join(", "));
        }
    }
    let _ = std::io::stdout().flush();
}

/// Print toasts for session results and other notable events
fn announce(app: &mut PetApp) {
    let Some(engine) = app.engine_mut() else {
        return;
    };
    for event in engine.drain_events() {
        if let Some(cue) = event.kind.audio_cue() {
            tracing::trace!("audio cue {:?}", cue);
        }
        match event.kind {
            EventKind::MiniGameEnded { earned, catches } => {
                println!("*** Time's up! {} catches, +{} coins ***", catches, earned)
            }
            EventKind::ExpeditionSucceeded { artifact } => {
                println!("*** Found a {}! ***", artifact.name)
            }
            EventKind::ExpeditionFailed { biome } => {
                println!("*** Nothing found in the {} ***", biome.label())
            }
            EventKind::TargetCaught { earned } => println!("Caught! ({} so far)", earned),
            _ => {}
        }
    }
}

fn redraw(app: &PetApp, color: bool) {
    if let Some(view) = app.view(LOG_TAIL) {
        println!("{}", render_frame(&view, color));
    }
}

fn print_help() {
    let biomes: Vec<&str> = Biome::ALL.iter().map(|b| b.id()).collect();
    let shop: Vec<String> = Accessory::ALL
        .iter()
        .map(|a| format!("{} ({})", a.id(), a.cost()))
        .collect();
    println!("\n=== PIXEL PET ===");
    println!("Commands:");
    println!("  feed / play          - Restore hunger / morale");
    println!("  sleep / wake         - Toggle sleep (pauses decay)");
    println!("  game, then catch     - Catch-the-pet mini-game (10s)");
    println!("  expedition <biome>   - {}", biomes.join(", "));
    println!("  buy <item>           - {}", shop.join(", "));
    println!("  status / help / reset / quit");
    println!();
}
