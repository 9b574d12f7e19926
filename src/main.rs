use std::env;
use std::path::Path;
use std::process;

use rspeak::arg_parse;
use rspeak::compile;
use rspeak::render::Synthesizer;
use rspeak::validate;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!(r#"Usage: rspeak "/abs/to/score.json" "/abs/to/speech.wav""#);
        process::exit(1);
    }

    let score_path = &args[1];
    let out_path = &args[2];
    render_score(score_path, out_path);
}

fn render_score(score_path: &str, out_path: &str) {
    let score = match arg_parse::load_score_from_file(score_path) {
        Ok(score) => score,
        Err(msg) => {
            eprintln!("Failed to open score: {}", msg);
            process::exit(1);
        }
    };

    if let Err(err) = validate::validate(&score.events) {
        eprintln!("Malformed score {}: {}", score_path, err);
        process::exit(1);
    }

    let units = compile::compile_with(&score.conf, &score.events);
    match Synthesizer::default().synthesize(&units, Path::new(out_path)) {
        Ok(()) => {
            println!("{}", out_path)
        }
        Err(err) => {
            eprintln!("Problem while writing {}: {}", out_path, err);
            process::exit(1);
        }
    }
}
