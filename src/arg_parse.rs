use std::fs;

use serde::{Deserialize, Serialize};

use crate::compile::CompilerConfig;
use crate::types::Event;

/// A score file: compiler settings plus the event tree. A leaf is an object
/// with a `duration` and optional `phoneme`/`pitches`; a sequence is a
/// plain JSON array of events.
#[derive(Debug, Serialize, Deserialize)]
pub struct Score {
    #[serde(default)]
    pub conf: CompilerConfig,
    pub events: Event,
}

pub fn load_score_from_file(file_path: &str) -> Result<Score, String> {
    let text = fs::read_to_string(file_path)
        .map_err(|err| format!("unable to read score {}: {}", file_path, err))?;
    serde_json::from_str(&text)
        .map_err(|err| format!("unable to parse score {}: {}", file_path, err))
}
