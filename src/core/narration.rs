use super::constants::{NARRATION_LANG, NARRATION_PITCH, NARRATION_RATE};

/// One request for the platform speech engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub lang: &'static str,
    pub rate: f32,
    pub pitch: f32,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: NARRATION_LANG,
            rate: NARRATION_RATE,
            pitch: NARRATION_PITCH,
        }
    }
}

/// Speech on/off switch for the avatar widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Narrator {
    enabled: bool,
}

impl Default for Narrator {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Narrator {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Flips speech on or off and returns the new setting.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn utter(&self, text: &str) -> Option<Utterance> {
        (self.enabled && !text.trim().is_empty()).then(|| Utterance::new(text))
    }
}
