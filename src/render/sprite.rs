//! Per-species sprite strategies
//!
//! The species is a closed enum fixed at adoption, so drawing is a plain
//! match instead of a lookup by name.

use crate::core::types::{Accessory, Species};
use crate::pet::Mood;

/// Face parts that change with mood
struct Face {
    eyes: &'static str,
    mouth: &'static str,
}

fn face(mood: Mood) -> Face {
    match mood {
        Mood::Happy => Face { eyes: "^ ^", mouth: "w" },
        Mood::Neutral => Face { eyes: "o o", mouth: "-" },
        Mood::Sad => Face { eyes: "; ;", mouth: "n" },
    }
}

fn hat(item: Accessory) -> &'static str {
    match item {
        Accessory::PartyHat => "    /\\    ",
        Accessory::WizardHat => "   _/*\\_  ",
        Accessory::Crown => "   \\^^^/  ",
    }
}

fn cat(f: &Face) -> Vec<String> {
    vec![
        "  /\\_/\\   ".to_string(),
        format!(" ( {} )  ", f.eyes),
        format!("  > {} <  ", f.mouth),
        " (\")_(\")~ ".to_string(),
    ]
}

fn dino(f: &Face) -> Vec<String> {
    vec![
        "   __     ".to_string(),
        format!("  ({} )> ", f.eyes),
        format!("  /| {} |\\ ", f.mouth),
        " ~^^-^^   ".to_string(),
    ]
}

fn slime(f: &Face) -> Vec<String> {
    vec![
        "   .--.   ".to_string(),
        format!("  ( {} ) ", f.eyes),
        format!(" (   {}  )", f.mouth),
        " `~~~~~~` ".to_string(),
    ]
}

/// Lines of text art for the pet, hat on top when one is worn
pub fn sprite(species: Species, mood: Mood, worn: Option<Accessory>, sleeping: bool) -> Vec<String> {
    let f = face(mood);
    let mut lines = Vec::with_capacity(6);
    if let Some(item) = worn {
        lines.push(hat(item).to_string());
    }
    lines.extend(match species {
        Species::Cat => cat(&f),
        Species::Dino => dino(&f),
        Species::Slime => slime(&f),
    });
    if sleeping {
        if let Some(first) = lines.first_mut() {
            first.push_str(" z z");
        }
    }
    lines
}
