use serde::{Deserialize, Serialize};

use crate::pitch::Pitch;

pub type Seconds = f64;
pub type Ms = i32;
pub type Percent = i32;
pub type Hz = i32;
pub type PitchPoint = (Percent, Hz);

/// Phoneme name the engine treats as a rest.
pub const SILENCE: &str = "_";

/// A node in the time tree. A `Leaf` occupies its own duration on the time
/// axis; a `Sequence` concatenates its children in order and has no duration
/// of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Event {
    Leaf(Leaf),
    Sequence(Vec<Event>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaf {
    /// Duration in seconds. Must be positive for a well-formed tree.
    pub duration: Seconds,
    /// Articulation for this span of time. None renders as a rest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phoneme: Option<String>,
    /// Candidate pitches. Only the first is voiced.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pitches: Vec<Pitch>,
}

impl Leaf {
    pub fn new(duration: Seconds) -> Self {
        Leaf {
            duration,
            phoneme: None,
            pitches: vec![],
        }
    }
}

impl Event {
    /// A bare leaf with no phoneme and no pitch.
    pub fn simple(duration: Seconds) -> Self {
        Event::Leaf(Leaf::new(duration))
    }

    pub fn sequence(children: Vec<Event>) -> Self {
        Event::Sequence(children)
    }
}

/// One entry in the material handed to the synthesis engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhonemeUnit {
    pub name: String,
    pub duration_ms: Ms,
    /// Piecewise pitch curve as (percent of the unit's duration, Hertz).
    pub pitch_modifiers: Vec<PitchPoint>,
}

pub type PhonemeList = Vec<PhonemeUnit>;
