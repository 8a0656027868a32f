//! External tool seams used by the generator
//! Production runs shell out to edge-tts and ffmpeg; tests plug in fakes

mod command;
mod edge_tts;
mod ffmpeg;

pub use command::{render_command, run_tool};
pub use edge_tts::EdgeTts;
pub use ffmpeg::FfmpegConcat;

use std::path::Path;

use crate::error::Result;
use crate::script::Utterance;

/// Turns one utterance into an audio file at `dest`
pub trait Synthesizer {
    fn synthesize(&self, utterance: &Utterance, dest: &Path) -> Result<()>;
}

/// Joins the segments listed in a concat manifest into `output`
pub trait Concatenator {
    fn concatenate(&self, manifest: &Path, output: &Path) -> Result<()>;
}

impl<T: Synthesizer + ?Sized> Synthesizer for &T {
    fn synthesize(&self, utterance: &Utterance, dest: &Path) -> Result<()> {
        (**self).synthesize(utterance, dest)
    }
}

impl<T: Concatenator + ?Sized> Concatenator for &T {
    fn concatenate(&self, manifest: &Path, output: &Path) -> Result<()> {
        (**self).concatenate(manifest, output)
    }
}
