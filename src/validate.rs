//! Fail-fast checks for event trees before compilation.
//!
//! The compiler itself never rejects input; callers that want a descriptive
//! error instead of arithmetic pass-through run the tree through here first.

use thiserror::Error;

use crate::pitch::Pitch;
use crate::types::{Event, Leaf, Seconds};

#[derive(Debug, Error, PartialEq)]
pub enum InvalidEventError {
    #[error("event {path}: duration must be a positive number of seconds, got {duration}")]
    Duration { path: String, duration: Seconds },
    #[error("event {path}: base frequency must be positive, got {hertz} Hz")]
    Frequency { path: String, hertz: f64 },
    #[error("event {path}: {source}")]
    Envelope {
        path: String,
        source: InvalidEnvelopeError,
    },
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidEnvelopeError {
    #[error("envelope point {index}: fraction {fraction} is outside [0, 1]")]
    Range { index: usize, fraction: f64 },
    #[error("envelope point {index}: fraction {fraction} is below the preceding {previous}")]
    Order {
        index: usize,
        fraction: f64,
        previous: f64,
    },
}

/// Walks the tree and reports the first defect, naming the offending event
/// by its child-index path ("/" is the root, "/2/0" the first child of the
/// root's third child).
pub fn validate(event: &Event) -> Result<(), InvalidEventError> {
    let mut path = Vec::new();
    walk(event, &mut path)
}

fn walk(event: &Event, path: &mut Vec<usize>) -> Result<(), InvalidEventError> {
    match event {
        Event::Leaf(leaf) => check_leaf(leaf, path),
        Event::Sequence(children) => {
            for (index, child) in children.iter().enumerate() {
                path.push(index);
                walk(child, path)?;
                path.pop();
            }
            Ok(())
        }
    }
}

fn check_leaf(leaf: &Leaf, path: &[usize]) -> Result<(), InvalidEventError> {
    if !leaf.duration.is_finite() || leaf.duration <= 0.0 {
        return Err(InvalidEventError::Duration {
            path: format_path(path),
            duration: leaf.duration,
        });
    }
    for pitch in &leaf.pitches {
        check_pitch(pitch, path)?;
    }
    Ok(())
}

fn check_pitch(pitch: &Pitch, path: &[usize]) -> Result<(), InvalidEventError> {
    if !pitch.hertz.is_finite() || pitch.hertz <= 0.0 {
        return Err(InvalidEventError::Frequency {
            path: format_path(path),
            hertz: pitch.hertz,
        });
    }
    let mut previous = 0.0;
    for (index, &(fraction, _)) in pitch.envelope.iter().enumerate() {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(InvalidEventError::Envelope {
                path: format_path(path),
                source: InvalidEnvelopeError::Range { index, fraction },
            });
        }
        if fraction < previous {
            return Err(InvalidEventError::Envelope {
                path: format_path(path),
                source: InvalidEnvelopeError::Order {
                    index,
                    fraction,
                    previous,
                },
            });
        }
        previous = fraction;
    }
    Ok(())
}

fn format_path(path: &[usize]) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    path.iter().map(|index| format!("/{}", index)).collect()
}
