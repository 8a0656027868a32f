//! Configuration types for the fixture generator

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::script::{intake_conversation, Utterance};

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "convo-fixture.toml";

/// Main generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Directory holding segment files and the manifest while the run is active
    #[serde(default = "default_work_dir")]
    pub work_dir: PathBuf,

    /// Destination of the concatenated fixture
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    #[serde(default = "default_manifest_name")]
    pub manifest_name: String,

    #[serde(default = "default_segment_prefix")]
    pub segment_prefix: String,

    #[serde(default = "default_segment_extension")]
    pub segment_extension: String,

    /// Text-to-speech executable
    #[serde(default = "default_tts_program")]
    pub tts_program: PathBuf,

    /// Executable used to join the segments
    #[serde(default = "default_concat_program")]
    pub concat_program: PathBuf,

    /// Dialogue to synthesize, in playback order
    #[serde(default = "intake_conversation")]
    pub utterances: Vec<Utterance>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            work_dir: default_work_dir(),
            output_path: default_output_path(),
            manifest_name: default_manifest_name(),
            segment_prefix: default_segment_prefix(),
            segment_extension: default_segment_extension(),
            tts_program: default_tts_program(),
            concat_program: default_concat_program(),
            utterances: intake_conversation(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration, layering the file at `path` over the defaults.
    ///
    /// A missing file is not an error; the defaults are returned as-is.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// File name of the segment for the utterance at `index`
    pub fn segment_file_name(&self, index: usize) -> String {
        format!(
            "{}{:02}.{}",
            self.segment_prefix, index, self.segment_extension
        )
    }

    pub fn segment_path(&self, index: usize) -> PathBuf {
        self.work_dir.join(self.segment_file_name(index))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.work_dir.join(&self.manifest_name)
    }
}

fn default_work_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("src/fixtures/test4_conversation.mp3")
}

fn default_manifest_name() -> String {
    "filelist.txt".to_string()
}

fn default_segment_prefix() -> String {
    "temp_line_".to_string()
}

fn default_segment_extension() -> String {
    "mp3".to_string()
}

fn default_tts_program() -> PathBuf {
    PathBuf::from("edge-tts")
}

fn default_concat_program() -> PathBuf {
    PathBuf::from("ffmpeg")
}
