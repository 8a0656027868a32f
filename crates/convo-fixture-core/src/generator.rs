//! Fixture generation pipeline: synthesize, write manifest, concatenate

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::artifacts::TempArtifacts;
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::tools::{Concatenator, EdgeTts, FfmpegConcat, Synthesizer};

/// Characters of each line echoed in progress output
const PREVIEW_CHARS: usize = 30;

/// Summary of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub segments: usize,
}

/// Drives one fixture generation run
pub struct FixtureGenerator<S, C> {
    config: GeneratorConfig,
    synthesizer: S,
    concatenator: C,
}

impl FixtureGenerator<EdgeTts, FfmpegConcat> {
    /// Generator that shells out to the configured edge-tts and ffmpeg binaries
    pub fn from_config(config: GeneratorConfig) -> Self {
        let synthesizer = EdgeTts::new(&config.tts_program);
        let concatenator = FfmpegConcat::new(&config.concat_program);
        Self::new(config, synthesizer, concatenator)
    }
}

impl<S: Synthesizer, C: Concatenator> FixtureGenerator<S, C> {
    pub fn new(config: GeneratorConfig, synthesizer: S, concatenator: C) -> Self {
        Self {
            config,
            synthesizer,
            concatenator,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the whole pipeline.
    ///
    /// Segment files and the manifest are removed before this returns,
    /// whether or not a step failed. Only the output fixture is left behind.
    pub fn generate(&self) -> Result<GenerationReport> {
        if self.config.utterances.is_empty() {
            return Err(Error::EmptyScript);
        }

        fs::create_dir_all(&self.config.work_dir)?;
        let mut artifacts = TempArtifacts::new();

        let manifest = self.synthesize_segments(&mut artifacts)?;

        let manifest_path = artifacts.track(self.config.manifest_path());
        manifest.write_to(&manifest_path)?;
        debug!("Wrote manifest with {} entries to {:?}", manifest.len(), manifest_path);

        self.concatenate(&manifest_path)?;

        println!("Conversation audio generated successfully!");
        info!("Fixture written to {:?}", self.config.output_path);

        Ok(GenerationReport {
            output_path: self.config.output_path.clone(),
            segments: manifest.len(),
        })
    }

    /// Synthesize every utterance in order, stopping at the first failure
    fn synthesize_segments(&self, artifacts: &mut TempArtifacts) -> Result<Manifest> {
        let mut manifest = Manifest::new();

        for (i, utterance) in self.config.utterances.iter().enumerate() {
            // Tracked before the tool runs so a partial file is still removed
            let segment = artifacts.track(self.config.segment_path(i));

            println!(
                "Generating line {}: {}...",
                i + 1,
                utterance.preview(PREVIEW_CHARS)
            );
            self.synthesizer.synthesize(utterance, &segment)?;

            manifest.push(self.config.segment_file_name(i));
        }

        Ok(manifest)
    }

    fn concatenate(&self, manifest_path: &Path) -> Result<()> {
        let output = &self.config.output_path;
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        println!("Combining audio files...");
        self.concatenator.concatenate(manifest_path, output)
    }
}
