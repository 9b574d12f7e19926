//! Flattens an event tree into the phoneme material the engine consumes.
//!
//! Compilation is total: any tree that type-checks produces a list. Trees
//! that fail [`crate::validate::validate`] still compile, with their numbers
//! passed through the arithmetic as-is.

use serde::{Deserialize, Serialize};

use crate::pitch::{cents_to_ratio, Pitch};
use crate::types::{Event, Hz, Leaf, Ms, Percent, PhonemeList, PhonemeUnit, PitchPoint, SILENCE};

/// How many points a pitch with no envelope contributes to the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantPitchSamples {
    /// One point at the onset.
    Single,
    /// Matching points at the onset and the release.
    #[default]
    Bookend,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    pub constant_pitch_samples: ConstantPitchSamples,
}

pub fn compile(event: &Event) -> PhonemeList {
    compile_with(&CompilerConfig::default(), event)
}

/// One unit per leaf, in pre-order left-to-right traversal order. Sequences
/// contribute nothing of their own; an empty sequence yields an empty list.
pub fn compile_with(config: &CompilerConfig, event: &Event) -> PhonemeList {
    let mut units = Vec::new();
    flatten(config, event, &mut units);
    units
}

fn flatten(config: &CompilerConfig, event: &Event, out: &mut PhonemeList) {
    match event {
        Event::Leaf(leaf) => out.push(leaf_to_unit(config, leaf)),
        Event::Sequence(children) => {
            for child in children {
                flatten(config, child, out);
            }
        }
    }
}

fn leaf_to_unit(config: &CompilerConfig, leaf: &Leaf) -> PhonemeUnit {
    let name = match &leaf.phoneme {
        Some(phoneme) => phoneme.clone(),
        None => SILENCE.to_string(),
    };
    // round() everywhere: ties go away from zero
    let duration_ms = (leaf.duration * 1000.0).round() as Ms;
    let pitch_modifiers = match leaf.pitches.first() {
        Some(pitch) => pitch_points(config, pitch),
        None => vec![],
    };
    PhonemeUnit {
        name,
        duration_ms,
        pitch_modifiers,
    }
}

fn pitch_points(config: &CompilerConfig, pitch: &Pitch) -> Vec<PitchPoint> {
    if pitch.envelope.is_empty() {
        let hz = pitch.hertz.round() as Hz;
        return match config.constant_pitch_samples {
            ConstantPitchSamples::Single => vec![(0, hz)],
            ConstantPitchSamples::Bookend => vec![(0, hz), (100, hz)],
        };
    }
    pitch
        .envelope
        .iter()
        .map(|&(fraction, cents)| {
            let percent = (fraction * 100.0).round() as Percent;
            let hz = (pitch.hertz * cents_to_ratio(cents)).round() as Hz;
            (percent, hz)
        })
        .collect()
}
