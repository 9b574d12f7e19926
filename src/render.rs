//! Drives the external MBROLA engine: feeds it a serialized phoneme list
//! and leaves a sound file at the caller's path. The engine is an external
//! collaborator; nothing here touches the signal itself.

use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::{debug, warn};

use crate::files;
use crate::pho;
use crate::types::PhonemeList;

static DEFAULT_ENGINE: Lazy<PathBuf> = Lazy::new(|| {
    std::env::var("MBROLA_BIN")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("mbrola"))
});

static DEFAULT_VOICE: Lazy<PathBuf> = Lazy::new(|| {
    std::env::var("MBROLA_VOICE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/usr/share/mbrola/us1/us1"))
});

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("refusing to synthesize an empty phoneme list")]
    EmptyPhonemeList,
    #[error("no voice database at {}", .0.display())]
    MissingVoice(PathBuf),
    #[error("could not start engine {}: {source}", .engine.display())]
    Spawn {
        engine: PathBuf,
        source: io::Error,
    },
    #[error("engine exited with {status}: {stderr}")]
    Engine { status: ExitStatus, stderr: String },
    #[error("engine reported success but left no readable audio at {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },
    #[error("io failure around the engine: {0}")]
    Io(#[from] io::Error),
}

/// A resolved engine configuration. Calls against distinct output paths are
/// independent; calls against the same path must be serialized by the
/// caller.
pub struct Synthesizer {
    pub engine: PathBuf,
    pub voice: PathBuf,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Synthesizer {
            engine: DEFAULT_ENGINE.clone(),
            voice: DEFAULT_VOICE.clone(),
        }
    }
}

impl Synthesizer {
    pub fn new(engine: PathBuf, voice: PathBuf) -> Self {
        Synthesizer { engine, voice }
    }

    /// Renders `units` to a sound file at `out_path`. On any failure the
    /// partial output is removed; the engine's own diagnostics travel back
    /// verbatim inside the error.
    pub fn synthesize(
        &self,
        units: &PhonemeList,
        out_path: &Path,
    ) -> Result<(), SynthesisError> {
        if units.is_empty() {
            return Err(SynthesisError::EmptyPhonemeList);
        }
        if files::exists(&self.voice).is_none() {
            return Err(SynthesisError::MissingVoice(self.voice.clone()));
        }
        files::with_dir(out_path)?;

        let result = self.run_engine(units, out_path);
        if result.is_err() {
            let _ = fs::remove_file(out_path);
        }
        result
    }

    fn run_engine(&self, units: &PhonemeList, out_path: &Path) -> Result<(), SynthesisError> {
        let mut child = Command::new(&self.engine)
            .arg("-e")
            .arg(&self.voice)
            .arg("-")
            .arg(out_path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SynthesisError::Spawn {
                engine: self.engine.clone(),
                source,
            })?;
        debug!(
            engine = %self.engine.display(),
            voice = %self.voice.display(),
            out = %out_path.display(),
            "spawned synthesis engine"
        );

        {
            // stdin closes when this scope drops the handle
            let mut stdin = child.stdin.take().ok_or_else(|| {
                io::Error::new(io::ErrorKind::BrokenPipe, "engine stdin unavailable")
            })?;
            stdin.write_all(pho::write_pho(units).as_bytes())?;
        }

        let output = child.wait_with_output()?;
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(SynthesisError::Engine {
                status: output.status,
                stderr,
            });
        }
        if !stderr.is_empty() {
            warn!(%stderr, "engine diagnostics");
        }

        match hound::WavReader::open(out_path) {
            Ok(reader) => {
                let spec = reader.spec();
                let seconds = reader.duration() as f64 / spec.sample_rate as f64;
                debug!(seconds, "rendered audio");
                Ok(())
            }
            Err(err) => Err(SynthesisError::Unreadable {
                path: out_path.to_path_buf(),
                reason: err.to_string(),
            }),
        }
    }
}
