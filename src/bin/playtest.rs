//! Automated playtester - drives a pet with a scripted player in simulated time
//!
//! Headless: nothing touches the disk. Prints a JSON report of what the
//! autopilot achieved so balance changes can be compared run to run.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use pixel_pet::core::config::PetConfig;
use pixel_pet::core::error::Result;
use pixel_pet::core::types::{Accessory, Biome, Species, ThemeId};
use pixel_pet::engine::EventKind;
use pixel_pet::persistence::MemoryStore;
use pixel_pet::pet::AdoptionForm;
use pixel_pet::session::SessionStatus;
use pixel_pet::{Command, PetApp};

/// Simulated player reaction time
const FRAME_MS: u64 = 100;

/// Frames between catches while a round runs
const CATCH_EVERY: u64 = 8;

/// Care threshold: feed or play once a stat drops this low
const CARE_BELOW: u8 = 85;

#[derive(Parser, Debug)]
#[command(name = "playtest")]
#[command(about = "Run a scripted pet owner and report the results")]
struct Args {
    /// Simulated seconds to play
    #[arg(long, default_value_t = 600)]
    seconds: u64,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Optional TOML config
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Default, Serialize)]
struct Report {
    seconds: u64,
    seed: u64,
    feeds: u32,
    plays: u32,
    minigames: u32,
    catches: u32,
    coins_earned: u64,
    expeditions: u32,
    expedition_successes: u32,
    artifacts: BTreeMap<String, usize>,
    purchases: Vec<Accessory>,
    final_coins: u64,
    final_hunger: u8,
    final_morale: u8,
    lowest_hunger: u8,
    lowest_morale: u8,
    decay_ticks: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pixel_pet=warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => PetConfig::load(path)?,
        None => PetConfig::default(),
    }
    .with_seed(args.seed);

    let report = run(&args, config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run(args: &Args, config: PetConfig) -> Result<Report> {
    let mut app = PetApp::start(config, Box::new(MemoryStore::new()))?;
    app.adopt(AdoptionForm::new("Autopilot", Species::Slime, ThemeId::Green))?;

    let mut report = Report {
        seconds: args.seconds,
        seed: args.seed,
        lowest_hunger: 100,
        lowest_morale: 100,
        ..Default::default()
    };

    let frames = args.seconds * 1000 / FRAME_MS;
    let mut next_biome = 0usize;
    let mut play_round_next = true;

    for frame in 0..frames {
        app.advance(FRAME_MS);
        tally(&mut app, &mut report);

        let Some(engine) = app.engine() else {
            break;
        };
        let vitals = engine.vitals();
        report.lowest_hunger = report.lowest_hunger.min(vitals.hunger);
        report.lowest_morale = report.lowest_morale.min(vitals.morale);

        let command = match engine.status() {
            SessionStatus::MiniGame(_) if frame % CATCH_EVERY == 0 => Some(Command::CatchTarget),
            SessionStatus::Idle if vitals.hunger <= CARE_BELOW => Some(Command::Feed),
            SessionStatus::Idle if vitals.morale <= CARE_BELOW => Some(Command::Play),
            SessionStatus::Idle => {
                let wallet = &engine.economy().wallet;
                let shopping = Accessory::ALL
                    .into_iter()
                    .find(|item| !wallet.owns(*item) && wallet.can_afford(*item));
                if let Some(item) = shopping {
                    Some(Command::Purchase(item))
                } else if play_round_next {
                    play_round_next = false;
                    Some(Command::StartMiniGame)
                } else {
                    play_round_next = true;
                    let biome = Biome::ALL[next_biome % Biome::ALL.len()];
                    next_biome += 1;
                    Some(Command::LaunchExpedition(biome))
                }
            }
            _ => None,
        };

        if let Some(command) = command {
            app.dispatch(command)?;
            tally(&mut app, &mut report);
        }
    }

    if let Some(engine) = app.engine() {
        report.final_coins = engine.coins();
        report.final_hunger = engine.vitals().hunger;
        report.final_morale = engine.vitals().morale;
    }
    Ok(report)
}

fn tally(app: &mut PetApp, report: &mut Report) {
    let Some(engine) = app.engine_mut() else {
        return;
    };
    for event in engine.drain_events() {
        match event.kind {
            EventKind::Decayed { .. } => report.decay_ticks += 1,
            EventKind::Fed { .. } => report.feeds += 1,
            EventKind::Played { .. } => report.plays += 1,
            EventKind::MiniGameStarted { .. } => report.minigames += 1,
            EventKind::MiniGameEnded { earned, catches } => {
                report.catches += catches;
                report.coins_earned += earned;
            }
            EventKind::ExpeditionLaunched { .. } => report.expeditions += 1,
            EventKind::ExpeditionSucceeded { artifact } => {
                report.expedition_successes += 1;
                *report.artifacts.entry(artifact.name).or_insert(0) += 1;
            }
            EventKind::Purchased { item, .. } => report.purchases.push(item),
            _ => {}
        }
    }
}
