//! Concat demuxer manifest
//!
//! One `file '<path>'` line per segment, in playback order. Paths are written
//! exactly as given; relative entries resolve against the manifest's directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<PathBuf>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(path.into());
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("file '{}'\n", escape(&entry.to_string_lossy())))
            .collect()
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }

    /// Parse manifest text back into its entries
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .filter_map(|line| line.trim().strip_prefix("file "))
            .map(|quoted| PathBuf::from(unescape(quoted.trim())))
            .collect();
        Self { entries }
    }
}

// Quotes cannot be escaped inside a quoted string, so close, escape, reopen
fn escape(path: &str) -> String {
    path.replace('\'', r"'\''")
}

fn unescape(quoted: &str) -> String {
    let mut out = String::with_capacity(quoted.len());
    let mut in_quotes = false;
    let mut chars = quoted.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => in_quotes = !in_quotes,
            '\\' if !in_quotes => {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keeps_order() {
        let mut manifest = Manifest::new();
        manifest.push("temp_line_00.mp3");
        manifest.push("temp_line_01.mp3");
        manifest.push("temp_line_02.mp3");

        assert_eq!(
            manifest.render(),
            "file 'temp_line_00.mp3'\nfile 'temp_line_01.mp3'\nfile 'temp_line_02.mp3'\n"
        );
    }

    #[test]
    fn test_single_quote_in_path() {
        let mut manifest = Manifest::new();
        manifest.push("ortiz's line.mp3");

        let text = manifest.render();
        assert_eq!(text, "file 'ortiz'\\''s line.mp3'\n");
        assert_eq!(Manifest::parse(&text), manifest);
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let manifest = Manifest::parse("# generated\n\nfile 'a.mp3'\nfile 'b.mp3'\n");
        assert_eq!(
            manifest.entries(),
            [PathBuf::from("a.mp3"), PathBuf::from("b.mp3")]
        );
    }
}
