use rspeak::pitch::Pitch;
use rspeak::types::{Event, Leaf};

pub const TEST_AUDIO_DIR: &str = "test-render";

pub fn test_audio_name(label: &str) -> String {
    format!("{}/{}.wav", TEST_AUDIO_DIR, label)
}

/// A rest: no phoneme, no pitch.
pub fn rest(duration: f64) -> Event {
    Event::simple(duration)
}

/// A consonant-style leaf: articulated but unvoiced.
pub fn spoken(duration: f64, phoneme: &str) -> Event {
    let mut leaf = Leaf::new(duration);
    leaf.phoneme = Some(phoneme.to_string());
    Event::Leaf(leaf)
}

/// A sung leaf: articulated and voiced.
pub fn sung(duration: f64, phoneme: &str, pitch: Pitch) -> Event {
    let mut leaf = Leaf::new(duration);
    leaf.phoneme = Some(phoneme.to_string());
    leaf.pitches = vec![pitch];
    Event::Leaf(leaf)
}
