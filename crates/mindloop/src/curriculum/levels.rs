use crate::analysis::{AnalysisProfile, DifficultyBand};

use super::{Level, LevelBand, LockState};

struct LevelSlot {
    band: LevelBand,
    suffix: &'static str,
    description: &'static str,
    minutes: u32,
    points: u32,
}

const CORE_SLOTS: [LevelSlot; 3] = [
    LevelSlot {
        band: LevelBand::Explorer,
        suffix: "Fundamentals",
        description: "Master the basic concepts and key terminology",
        minutes: 15,
        points: 100,
    },
    LevelSlot {
        band: LevelBand::Explorer,
        suffix: "Key Concepts",
        description: "Understand important ideas and relationships",
        minutes: 20,
        points: 150,
    },
    LevelSlot {
        band: LevelBand::Challenger,
        suffix: "Applications",
        description: "Apply knowledge in practical scenarios",
        minutes: 25,
        points: 200,
    },
];

const MASTERY_SLOT: LevelSlot = LevelSlot {
    band: LevelBand::Masters,
    suffix: "Mastery Challenge",
    description: "Demonstrate complete understanding and expertise",
    minutes: 35,
    points: 300,
};

/// Builds the level ladder for one run. Three levels always, plus a
/// masters level when the profile is advanced. `run_id` keeps ids unique
/// across runs.
///
/// Levels come back without questions.
pub fn build_levels(profile: &AnalysisProfile, run_id: &str) -> Vec<Level> {
    let topic = profile.primary_topic();

    let mut slots: Vec<&LevelSlot> = CORE_SLOTS.iter().collect();
    if profile.difficulty == DifficultyBand::Advanced {
        slots.push(&MASTERY_SLOT);
    }

    let mut levels = Vec::with_capacity(slots.len());
    let mut per_band: Vec<(LevelBand, u32)> = Vec::new();

    for (index, slot) in slots.into_iter().enumerate() {
        let ordinal = match per_band.iter_mut().find(|(band, _)| *band == slot.band) {
            Some((_, n)) => {
                *n += 1;
                *n
            }
            None => {
                per_band.push((slot.band, 1));
                1
            }
        };

        let status = if slot.band == LevelBand::Explorer {
            LockState::Unlocked
        } else {
            LockState::Locked
        };

        levels.push(Level {
            id: format!("{}_{}_{}", slot.band, run_id, ordinal),
            name: format!("{} - {}", topic, slot.suffix),
            description: slot.description.to_string(),
            difficulty: slot.band,
            status,
            estimated_minutes: slot.minutes,
            points: slot.points,
            order: index as u32 + 1,
            questions: Vec::new(),
        });
    }

    levels
}
