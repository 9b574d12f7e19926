pub mod arg_parse;
pub mod compile;
pub mod files;
pub mod pho;
pub mod pitch;
pub mod render;
pub mod types;
pub mod validate;

use std::path::Path;

use thiserror::Error;

use crate::compile::CompilerConfig;
use crate::render::{SynthesisError, Synthesizer};
use crate::types::Event;
use crate::validate::InvalidEventError;

#[derive(Debug, Error)]
pub enum SpeakError {
    #[error(transparent)]
    Invalid(#[from] InvalidEventError),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

/// Validates, compiles and renders an event tree with the default engine
/// configuration.
pub fn speak(event: &Event, out_path: &Path) -> Result<(), SpeakError> {
    speak_with(
        &CompilerConfig::default(),
        &Synthesizer::default(),
        event,
        out_path,
    )
}

pub fn speak_with(
    config: &CompilerConfig,
    synth: &Synthesizer,
    event: &Event,
    out_path: &Path,
) -> Result<(), SpeakError> {
    validate::validate(event)?;
    let units = compile::compile_with(config, event);
    synth.synthesize(&units, out_path)?;
    Ok(())
}
