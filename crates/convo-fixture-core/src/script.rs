//! Dialogue script types and the built-in intake conversation

use serde::{Deserialize, Serialize};

const INTAKE_VOICE: &str = "en-US-JennyNeural";
const CLIENT_VOICE: &str = "en-US-GuyNeural";

/// A single line of dialogue and the voice that speaks it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub voice: String,
}

impl Utterance {
    pub fn new(text: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: voice.into(),
        }
    }

    /// Leading characters of the text for progress output
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.text.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.text[..idx],
            None => &self.text,
        }
    }
}

/// Insurance intake call between a desk clerk and a claimant.
pub fn intake_conversation() -> Vec<Utterance> {
    [
        ("Intake desk\u{2014}name, please?", INTAKE_VOICE),
        ("Daniel Ortiz.", CLIENT_VOICE),
        ("What happened?", INTAKE_VOICE),
        (
            "Last Wednesday around 8 PM on I-80, a car and I merged at the same time and we sideswiped. Damage looks moderate.",
            CLIENT_VOICE,
        ),
        ("Police?", INTAKE_VOICE),
        ("Yes, a report was taken.", CLIENT_VOICE),
        ("Injuries?", INTAKE_VOICE),
        (
            "Right shoulder and mid back. Pain is five out of ten, up to six when I lift.",
            CLIENT_VOICE,
        ),
        ("Treatment?", INTAKE_VOICE),
        (
            "Urgent care two days later; ordered X-rays; started PT.",
            CLIENT_VOICE,
        ),
        ("Any chiropractic?", INTAKE_VOICE),
        ("One visit so far.", CLIENT_VOICE),
        ("Witness present?", INTAKE_VOICE),
        (
            "The car behind us pulled over and gave their info to the officer.",
            CLIENT_VOICE,
        ),
        ("Missed work?", INTAKE_VOICE),
        ("One day.", CLIENT_VOICE),
        ("Insurance?", INTAKE_VOICE),
        (
            "Progressive auto; United Healthcare for medical.",
            CLIENT_VOICE,
        ),
    ]
    .into_iter()
    .map(|(text, voice)| Utterance::new(text, voice))
    .collect()
}
