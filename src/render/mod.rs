//! Text rendering for terminal front-ends
//!
//! This module is READ-ONLY - it draws a `PetView` and never touches
//! engine state.

pub mod colors;
pub mod sprite;

use crate::engine::PetView;
use crate::session::StatusSummary;
use colors::{palette, ANSI_RESET};

const BAR_WIDTH: usize = 20;

/// `Hunger [##########..........]  50%`
pub fn stat_bar(label: &str, value: u8) -> String {
    let filled = (value as usize * BAR_WIDTH + 50) / 100;
    format!(
        "{:<7}[{}{}] {:>3}%",
        label,
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled),
        value
    )
}

pub fn status_line(status: &StatusSummary) -> String {
    match status {
        StatusSummary::Idle => "Idle".to_string(),
        StatusSummary::Sleeping => "Sleeping".to_string(),
        StatusSummary::MiniGame { time_left, earned, target } => format!(
            "Mini-game: {}s left, {} coins so far, target at ({:.0}%, {:.0}%)",
            time_left, earned, target.x, target.y
        ),
        StatusSummary::Expedition { biome, seconds_remaining } => {
            format!("Exploring {}: back in {}s", biome.label(), seconds_remaining)
        }
    }
}

/// Care actions, bracketed when available and dimmed to dashes when not
pub fn action_hints(view: &PetView) -> String {
    let sleep = if matches!(view.status, StatusSummary::Sleeping) {
        "wake"
    } else {
        "sleep"
    };
    [("feed", view.can_feed()), ("play", view.can_play()), (sleep, view.can_toggle_sleep())]
        .iter()
        .map(|(name, ok)| if *ok { format!("[{}]", name) } else { format!("-{}-", name) })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full frame: header, sprite, bars, status, coins and recent log
pub fn render_frame(view: &PetView, color: bool) -> String {
    let theme = palette(view.theme);
    let (accent, reset) = if color {
        (theme.accent.ansi_fg(), ANSI_RESET.to_string())
    } else {
        (String::new(), String::new())
    };
    let sleeping = matches!(view.status, StatusSummary::Sleeping);

    let mut out = String::new();
    out.push_str(&format!(
        "{}== {} the {} ({:?}) =={}   coins: {}\n",
        accent,
        view.name,
        view.species.label(),
        view.mood,
        reset,
        view.coins
    ));
    for line in sprite::sprite(view.species, view.mood, view.worn, sleeping) {
        out.push_str(&format!("{}{}{}\n", accent, line, reset));
    }
    out.push_str(&stat_bar("Hunger", view.hunger));
    out.push('\n');
    out.push_str(&stat_bar("Morale", view.morale));
    out.push('\n');
    out.push_str(&status_line(&view.status));
    out.push('\n');
    out.push_str(&action_hints(view));
    out.push('\n');
    if !view.artifacts.is_empty() {
        out.push_str(&format!("Artifacts: {}\n", view.artifacts.len()));
    }
    for line in &view.log_tail {
        out.push_str(&format!("  > {}\n", line));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Biome, Species, ThemeId};
    use crate::pet::Mood;

    fn view(hunger: u8, morale: u8, status: StatusSummary) -> PetView {
        PetView {
            name: "Mochi".into(),
            species: Species::Cat,
            theme: ThemeId::Pink,
            hunger,
            morale,
            mood: Mood::from_vitals(hunger, morale),
            status,
            coins: 0,
            accessories: Vec::new(),
            worn: None,
            artifacts: Vec::new(),
            log_tail: Vec::new(),
        }
    }

    #[test]
    fn test_hints_follow_availability() {
        assert_eq!(action_hints(&view(100, 40, StatusSummary::Idle)), "-feed- [play] [sleep]");
        assert_eq!(action_hints(&view(50, 50, StatusSummary::Sleeping)), "-feed- -play- [wake]");

        let away = StatusSummary::Expedition {
            biome: Biome::DragonPeak,
            seconds_remaining: 4,
        };
        assert_eq!(action_hints(&view(50, 50, away)), "-feed- -play- -sleep-");
    }

    #[test]
    fn test_frame_includes_hints() {
        let frame = render_frame(&view(80, 80, StatusSummary::Idle), false);
        assert!(frame.contains("[feed] [play] [sleep]"));
        assert!(frame.starts_with("== Mochi the "));
    }

    #[test]
    fn test_stat_bar_fill() {
        assert_eq!(stat_bar("Hunger", 100), "Hunger [####################] 100%");
        assert_eq!(stat_bar("Morale", 0), "Morale [....................]   0%");
        assert!(stat_bar("Hunger", 50).contains("##########.........."));
    }
}
