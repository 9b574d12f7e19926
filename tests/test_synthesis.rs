mod common;

use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rspeak::compile::compile;
use rspeak::pho::write_pho;
use rspeak::pitch::Pitch;
use rspeak::render::{SynthesisError, Synthesizer};
use rspeak::speak;
use rspeak::types::Event;

/// If the file doesn't exist it is already cleaned up.
fn clean_up(path: &str) {
    let _ = fs::remove_file(path);
}

#[test]
fn test_pho_material() {
    let tree = Event::sequence(vec![
        common::spoken(1.0, "R"),
        common::sung(0.5, "@", Pitch::new(440.0)),
        common::rest(1.35),
    ]);
    let text = write_pho(&compile(&tree));
    assert_eq!(text, "R 1000\n@ 500 0 440 100 440\n_ 1350\n");
}

#[test]
fn test_unstartable_engine_is_reported() {
    fs::create_dir_all(common::TEST_AUDIO_DIR).expect("test dir");
    let fake_voice = format!("{}/fake-voice", common::TEST_AUDIO_DIR);
    fs::write(&fake_voice, b"not a voice database").expect("fake voice");

    let synth = Synthesizer::new(
        PathBuf::from("test-render/no-such-engine"),
        PathBuf::from(&fake_voice),
    );
    let units = compile(&common::spoken(1.0, "R"));
    let out = common::test_audio_name("unstartable");

    match synth.synthesize(&units, Path::new(&out)) {
        Err(SynthesisError::Spawn { engine, .. }) => {
            assert_eq!(engine, PathBuf::from("test-render/no-such-engine"))
        }
        other => panic!("expected a spawn error, got {:?}", other),
    }
    assert!(!Path::new(&out).exists());
    clean_up(&fake_voice);
}

/// Checks if the driver creates a soundfile.
///
/// Needs an installed MBROLA engine and voice database; point MBROLA_BIN
/// and MBROLA_VOICE at them and run with --ignored.
#[test]
#[ignore]
fn test_render_happens() {
    let out = common::test_audio_name("render-happens");
    clean_up(&out);

    let event = common::sung(2.0, "@", Pitch::new(261.63));
    speak(&event, Path::new(&out)).expect("engine render");

    assert!(Path::new(&out).exists());
    clean_up(&out);
}

/// Checks the rendered file's duration against the score's total. The
/// engine isn't 100% precise, but it keeps within a few hundredths of a
/// second regardless of how long the material is.
#[test]
#[ignore]
fn test_render_with_correct_duration() {
    let out = common::test_audio_name("render-duration");
    clean_up(&out);

    let choices = [
        common::sung(1.25, "@", Pitch::new(261.63)),
        common::spoken(0.75, "u"),
        common::rest(1.35),
    ];

    let mut rng = StdRng::seed_from_u64(100);
    let mut events = Vec::new();
    for _ in 0..400 {
        events.push(choices[rng.gen_range(0..choices.len())].clone());
    }
    let tree = Event::sequence(events);

    let expected_seconds: f64 = compile(&tree)
        .iter()
        .map(|unit| unit.duration_ms as f64 / 1000.0)
        .sum();

    speak(&tree, Path::new(&out)).expect("engine render");

    let reader = hound::WavReader::open(&out).expect("readable render");
    let rendered_seconds = reader.duration() as f64 / reader.spec().sample_rate as f64;
    assert!(
        (rendered_seconds - expected_seconds).abs() < 0.05,
        "rendered {}s, scored {}s",
        rendered_seconds,
        expected_seconds
    );
    clean_up(&out);
}
