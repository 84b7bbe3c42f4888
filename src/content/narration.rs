//! Read-aloud toggle over a pluggable speech backend
//!
//! Playback is best-effort. Starting an utterance always cancels whatever
//! the backend is currently saying; nothing is queued.

use tracing::debug;

/// Something that can speak text aloud
pub trait SpeechBackend {
    /// Start speaking `text`
    fn speak(&mut self, text: &str, lang: &str, rate: f32);

    /// Stop any utterance in progress
    fn cancel(&mut self);
}

pub struct Narrator<B: SpeechBackend> {
    backend: B,
    lang: String,
    rate: f32,
    speaking: bool,
}

impl<B: SpeechBackend> Narrator<B> {
    pub fn new(backend: B, lang: impl Into<String>, rate: f32) -> Self {
        Self {
            backend,
            lang: lang.into(),
            rate,
            speaking: false,
        }
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking
    }

    /// Start reading `text`, or stop if already reading.
    /// Returns whether narration is running afterwards.
    pub fn toggle(&mut self, text: &str) -> bool {
        if self.speaking {
            self.stop();
            return false;
        }
        self.backend.cancel();
        self.backend.speak(text, &self.lang, self.rate);
        self.speaking = true;
        debug!(lang = %self.lang, chars = text.len(), "Narration started");
        true
    }

    /// Toggle narration of a whole story, paragraphs joined by a space
    pub fn toggle_all(&mut self, paragraphs: &[&str]) -> bool {
        self.toggle(&paragraphs.join(" "))
    }

    pub fn stop(&mut self) {
        self.backend.cancel();
        self.speaking = false;
    }

    /// The backend reported the end of the utterance
    pub fn finished(&mut self) {
        self.speaking = false;
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
