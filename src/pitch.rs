//! Pitch values and the logarithmic interval arithmetic used to evaluate
//! their envelopes.

use serde::{Deserialize, Serialize};

pub type Cents = f64;
/// Position within a note's duration, 0 at onset and 1 at release.
pub type Fraction = f64;
pub type Breakpoint = (Fraction, Cents);

/// A pitch with a base frequency and an optional envelope of deviations
/// from it. An empty envelope means the pitch holds its base frequency for
/// the whole note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pitch {
    pub hertz: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub envelope: Vec<Breakpoint>,
}

impl Pitch {
    pub fn new(hertz: f64) -> Self {
        Pitch {
            hertz,
            envelope: vec![],
        }
    }

    pub fn with_envelope(hertz: f64, envelope: Vec<Breakpoint>) -> Self {
        Pitch { hertz, envelope }
    }
}

/// Frequency multiplier for an interval in cents. 1200 cents is one octave.
pub fn cents_to_ratio(cents: Cents) -> f64 {
    2f64.powf(cents / 1200.0)
}

/// Interval in cents between two frequencies. Positive when f2 is above f1.
pub fn hertz_to_cents(f1: f64, f2: f64) -> Cents {
    1200.0 * (f2 / f1).log2()
}
