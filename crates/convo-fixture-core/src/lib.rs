//! Convo Fixture Core - Conversation Audio Fixture Generation
//!
//! Builds the multi-speaker conversation recording used by the transcription
//! tests. Each dialogue line is rendered by an external text-to-speech tool and
//! the resulting segments are joined, in script order, by an external concat
//! tool. Intermediate files never outlive a run.
//!
//! # Example
//!
//! ```ignore
//! use convo_fixture_core::{FixtureGenerator, GeneratorConfig};
//!
//! let config = GeneratorConfig::load("convo-fixture.toml")?;
//! let report = FixtureGenerator::from_config(config).generate()?;
//! println!("{} segments -> {:?}", report.segments, report.output_path);
//! ```

pub mod artifacts;
pub mod config;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod script;
pub mod tools;

pub use artifacts::TempArtifacts;
pub use config::{GeneratorConfig, DEFAULT_CONFIG_FILE};
pub use error::{Error, Result};
pub use generator::{FixtureGenerator, GenerationReport};
pub use manifest::Manifest;
pub use script::{intake_conversation, Utterance};
pub use tools::{Concatenator, EdgeTts, FfmpegConcat, Synthesizer};
