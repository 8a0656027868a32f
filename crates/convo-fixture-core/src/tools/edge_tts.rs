//! edge-tts command-line synthesizer

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

use super::{run_tool, Synthesizer};
use crate::error::Result;
use crate::script::Utterance;

/// Synthesizer backed by the `edge-tts` executable
pub struct EdgeTts {
    program: PathBuf,
}

impl EdgeTts {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Build the invocation for one utterance
    pub fn command(&self, utterance: &Utterance, dest: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("--voice")
            .arg(&utterance.voice)
            .arg("--text")
            .arg(&utterance.text)
            .arg("--write-media")
            .arg(dest);
        command
    }
}

impl Default for EdgeTts {
    fn default() -> Self {
        Self::new("edge-tts")
    }
}

impl Synthesizer for EdgeTts {
    fn synthesize(&self, utterance: &Utterance, dest: &Path) -> Result<()> {
        debug!("Synthesizing {:?} with voice {}", dest, utterance.voice);
        run_tool("edge-tts", &mut self.command(utterance, dest))
    }
}
