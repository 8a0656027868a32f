//! ffmpeg concat-demuxer joiner

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{run_tool, Concatenator};
use crate::error::Result;

/// Concatenator that stream-copies segments with ffmpeg's concat demuxer
pub struct FfmpegConcat {
    program: PathBuf,
}

impl FfmpegConcat {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Build the invocation; `-y` replaces an existing output instead of prompting
    pub fn command(&self, manifest: &Path, output: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(["-y", "-f", "concat", "-safe", "0", "-i"])
            .arg(manifest)
            .args(["-c", "copy"])
            .arg(output);
        command
    }
}

impl Default for FfmpegConcat {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl Concatenator for FfmpegConcat {
    fn concatenate(&self, manifest: &Path, output: &Path) -> Result<()> {
        run_tool("ffmpeg", &mut self.command(manifest, output))
    }
}
