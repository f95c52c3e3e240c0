//! Integration tests for the pet engine
//!
//! These drive the engine through its public command/query API with a
//! seeded rng and the virtual clock:
//! - Needs decay and care
//! - Mini-game rounds and coin crediting
//! - Expeditions and their morale cost
//! - Shop purchases and session locks

use pixel_pet::core::config::PetConfig;
use pixel_pet::core::types::{Accessory, Biome, Species, ThemeId};
use pixel_pet::engine::{AudioCue, EventKind, PetEngine};
use pixel_pet::pet::{AdoptionForm, Mood, Vitals};
use pixel_pet::session::{SessionStatus, StatusSummary};
use proptest::prelude::*;

fn adopt(name: &str, seed: u64) -> PetEngine {
    let form = AdoptionForm::new(name, Species::Cat, ThemeId::Pink);
    let mut engine = PetEngine::adopt(form, PetConfig::default().with_seed(seed)).unwrap();
    engine.drain_events();
    engine
}

/// Play one full round with `catches` catches and let it finish
fn play_round(engine: &mut PetEngine, catches: u32) {
    assert!(engine.start_minigame());
    for _ in 0..catches {
        assert!(engine.catch_target());
    }
    engine.advance(10_000);
}

// ============================================================================
// Adoption
// ============================================================================

#[test]
fn test_adoption_starts_full_and_idle() {
    let form = AdoptionForm::new("  Mochi  ", Species::Dino, ThemeId::Blue);
    let mut engine = PetEngine::adopt(form, PetConfig::default().with_seed(1)).unwrap();

    assert_eq!(engine.profile().name(), "Mochi");
    assert_eq!(engine.vitals(), Vitals::new(100, 100));
    assert_eq!(engine.mood(), Mood::Happy);
    assert!(engine.status().is_idle());
    assert_eq!(engine.coins(), 0);
    assert!(engine.is_decaying());

    let events = engine.drain_events();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].kind.audio_cue(),
        Some(AudioCue::Chirp { from_hz: 400, to_hz: 800 })
    );
    assert_eq!(engine.mission_log().latest().unwrap().message, "Welcome home, Mochi!");
}

#[test]
fn test_adoption_rejects_blank_and_caps_long_names() {
    let config = PetConfig::default().with_seed(1);
    assert!(PetEngine::adopt(AdoptionForm::new("   ", Species::Cat, ThemeId::Pink), config.clone()).is_err());

    let engine = PetEngine::adopt(
        AdoptionForm::new("Seventeen chars!!", Species::Cat, ThemeId::Pink),
        config,
    )
    .unwrap();
    assert_eq!(engine.profile().name(), "Seventeen chars!");
}

// ============================================================================
// Needs
// ============================================================================

#[test]
fn test_neglect_bottoms_out_at_zero() {
    let mut engine = adopt("Mochi", 7);
    engine.advance(10 * 60 * 1000);
    assert_eq!(engine.vitals(), Vitals::new(0, 0));
    assert_eq!(engine.mood(), Mood::Sad);
}

#[test]
fn test_feed_and_play_clamp_at_hundred() {
    let mut engine = adopt("Mochi", 7);
    engine.advance(3000);
    assert_eq!(engine.vitals(), Vitals::new(98, 98));

    assert!(engine.feed());
    assert!(engine.play());
    assert_eq!(engine.vitals(), Vitals::new(100, 100));

    // full stats: both are no-ops
    assert!(!engine.feed());
    assert!(!engine.play());

    let cues: Vec<_> = engine
        .drain_events()
        .iter()
        .filter_map(|e| e.kind.audio_cue())
        .collect();
    assert_eq!(
        cues,
        vec![
            AudioCue::Chirp { from_hz: 300, to_hz: 500 },
            AudioCue::Chirp { from_hz: 500, to_hz: 700 },
        ]
    );
}

#[test]
fn test_sleeping_pet_does_not_decay_or_eat() {
    let mut engine = adopt("Mochi", 7);
    engine.advance(6000);
    assert!(engine.toggle_sleep());
    assert!(!engine.is_decaying());
    assert!(!engine.feed());

    engine.advance(60_000);
    assert_eq!(engine.vitals(), Vitals::new(96, 96));

    assert!(engine.toggle_sleep());
    assert!(engine.is_decaying());
    engine.advance(3000);
    assert_eq!(engine.vitals(), Vitals::new(94, 94));
}

// ============================================================================
// Mini-game
// ============================================================================

#[test]
fn test_each_catch_is_worth_five_coins() {
    let mut engine = adopt("Mochi", 3);
    play_round(&mut engine, 7);
    assert_eq!(engine.coins(), 35);
    assert!(engine.status().is_idle());

    let ended = engine
        .drain_events()
        .into_iter()
        .find_map(|e| match e.kind {
            EventKind::MiniGameEnded { earned, catches } => Some((earned, catches)),
            _ => None,
        });
    assert_eq!(ended, Some((35, 7)));
}

#[test]
fn test_round_ends_after_ten_seconds_and_frees_timers() {
    let mut engine = adopt("Mochi", 3);
    assert!(engine.start_minigame());
    assert_eq!(engine.active_timers(), 3);

    engine.advance(9999);
    assert!(matches!(engine.status_summary(), StatusSummary::MiniGame { time_left: 1, .. }));
    assert!(engine.catch_target());

    engine.advance(1);
    assert!(engine.status().is_idle());
    assert_eq!(engine.coins(), 5);
    assert_eq!(engine.active_timers(), 1);
    assert!(!engine.catch_target());
}

#[test]
fn test_target_moves_during_round() {
    let mut engine = adopt("Mochi", 3);
    assert!(engine.start_minigame());
    engine.advance(5000);

    let moves: Vec<_> = engine
        .drain_events()
        .into_iter()
        .filter_map(|e| match e.kind {
            EventKind::TargetMoved { target } => Some(target),
            _ => None,
        })
        .collect();
    assert_eq!(moves.len(), 3);
    for target in moves {
        assert!((8.0..=73.0).contains(&target.x));
        assert!((12.0..=67.0).contains(&target.y));
    }
}

#[test]
fn test_care_is_locked_during_round() {
    let mut engine = adopt("Mochi", 3);
    engine.advance(3000);
    assert!(engine.start_minigame());

    assert!(!engine.feed());
    assert!(!engine.play());
    assert!(!engine.toggle_sleep());
    assert!(!engine.start_minigame());
    assert!(!engine.launch_expedition(Biome::CrystalCaves));
}

// ============================================================================
// Expeditions
// ============================================================================

#[test]
fn test_expedition_costs_twenty_morale_up_front() {
    let mut engine = adopt("Mochi", 11);
    assert!(engine.launch_expedition(Biome::SunkenRuins));
    assert_eq!(engine.vitals().morale, 80);
    assert!(matches!(engine.status(), SessionStatus::Expedition(_)));

    assert!(!engine.start_minigame());
    assert!(!engine.feed());
    assert!(!engine.catch_target());
}

#[test]
fn test_launch_refused_below_twenty_morale() {
    let mut engine = adopt("Mochi", 11);
    // 50 decay ticks empty both stats, one play brings morale to 15
    engine.advance(150_000);
    assert!(engine.play());
    assert_eq!(engine.vitals().morale, 15);

    assert!(!engine.launch_expedition(Biome::DragonPeak));
    assert_eq!(engine.vitals().morale, 15);
    assert!(engine.status().is_idle());
}

#[test]
fn test_launch_with_exactly_twenty_morale() {
    let mut engine = adopt("Mochi", 11);
    engine.advance(120_000);
    assert_eq!(engine.vitals().morale, 20);

    assert!(engine.launch_expedition(Biome::CrystalCaves));
    assert_eq!(engine.vitals().morale, 0);
}

#[test]
fn test_expedition_resolves_once() {
    let mut engine = adopt("Mochi", 11);
    assert!(engine.launch_expedition(Biome::CrystalCaves));
    engine.advance(10_000);
    assert!(engine.status().is_idle());

    let results: Vec<_> = engine
        .drain_events()
        .into_iter()
        .filter(|e| {
            matches!(
                e.kind,
                EventKind::ExpeditionSucceeded { .. } | EventKind::ExpeditionFailed { .. }
            )
        })
        .collect();
    assert_eq!(results.len(), 1);

    let found = engine.economy().artifacts.len();
    match &results[0].kind {
        EventKind::ExpeditionSucceeded { artifact } => {
            assert_eq!(found, 1);
            assert_eq!(artifact.name, "Glow Crystal");
            assert_eq!(artifact.biome, Biome::CrystalCaves);
        }
        _ => assert_eq!(found, 0),
    }

    // nothing else arrives later
    engine.advance(30_000);
    assert_eq!(engine.economy().artifacts.len(), found);
}

#[test]
fn test_many_expeditions_follow_biome_odds() {
    let mut engine = adopt("Mochi", 2024);
    let mut trips = 0;
    while trips < 200 {
        // top morale back up between trips
        while engine.play() {}
        assert!(engine.launch_expedition(Biome::CrystalCaves));
        engine.advance(10_000);
        trips += 1;
    }
    let found = engine.economy().artifacts.count_from(Biome::CrystalCaves);
    assert!((130..=190).contains(&found), "found {} in 200 trips", found);
}

// ============================================================================
// Shop
// ============================================================================

#[test]
fn test_mochi_buys_a_party_hat() {
    let mut engine = adopt("Mochi", 5);
    assert!(!engine.purchase(Accessory::PartyHat));

    play_round(&mut engine, 12);
    assert_eq!(engine.coins(), 60);

    assert!(engine.purchase(Accessory::PartyHat));
    assert_eq!(engine.coins(), 10);
    assert_eq!(engine.economy().wallet.accessories(), &[Accessory::PartyHat]);

    // owned once only
    assert!(!engine.purchase(Accessory::PartyHat));
    assert_eq!(engine.coins(), 10);
    assert_eq!(engine.view(5).worn, Some(Accessory::PartyHat));
}

#[test]
fn test_highest_tier_is_worn() {
    let mut engine = adopt("Mochi", 5);
    for _ in 0..9 {
        play_round(&mut engine, 10);
    }
    assert_eq!(engine.coins(), 450);

    assert!(engine.purchase(Accessory::Crown));
    assert!(engine.purchase(Accessory::PartyHat));
    assert_eq!(engine.view(0).worn, Some(Accessory::Crown));
    assert_eq!(engine.coins(), 150);
}

// ============================================================================
// Properties
// ============================================================================

#[derive(Debug, Clone)]
enum Step {
    Wait(u64),
    Feed,
    Play,
    Sleep,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0u64..20_000).prop_map(Step::Wait),
        Just(Step::Feed),
        Just(Step::Play),
        Just(Step::Sleep),
    ]
}

proptest! {
    #[test]
    fn prop_vitals_stay_in_range(steps in prop::collection::vec(step(), 0..60)) {
        let mut engine = adopt("Prop", 9);
        for s in steps {
            match s {
                Step::Wait(ms) => engine.advance(ms),
                Step::Feed => { engine.feed(); }
                Step::Play => { engine.play(); }
                Step::Sleep => { engine.toggle_sleep(); }
            }
            let v = engine.vitals();
            prop_assert!(v.hunger <= 100);
            prop_assert!(v.morale <= 100);
            prop_assert_eq!(engine.mood(), Mood::from_vitals(v.hunger, v.morale));
            prop_assert_eq!(engine.is_decaying(), !engine.status().is_sleeping());
        }
    }

    #[test]
    fn prop_mood_thresholds(hunger in 0u8..=100, morale in 0u8..=100) {
        let sum = hunger as u16 + morale as u16;
        let expected = if sum >= 120 {
            Mood::Happy
        } else if sum < 60 {
            Mood::Sad
        } else {
            Mood::Neutral
        };
        prop_assert_eq!(Mood::from_vitals(hunger, morale), expected);
    }
}
