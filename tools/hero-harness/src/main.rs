use std::env;
use std::fs;
use std::process::ExitCode;

use hero_core::{score, QuizAnswers};
use hero_data::{profiles, CharacterCustomization};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use render_vector::{render, svg, RenderInput};

fn main() -> ExitCode {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_secs()
    .try_init();

    let args: Vec<String> = env::args().collect();
    let mut answers_path: Option<String> = None;
    let mut custom_path: Option<String> = None;
    let mut out_path: Option<String> = None;
    let mut seed: u64 = 0;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--custom" => {
                i += 1;
                custom_path = args.get(i).cloned();
            }
            "--out" => {
                i += 1;
                out_path = args.get(i).cloned();
            }
            "--seed" => {
                i += 1;
                seed = args.get(i).and_then(|s| s.parse().ok()).unwrap_or(0);
            }
            other => answers_path = Some(other.to_string()),
        }
        i += 1;
    }

    let Some(answers_path) = answers_path else {
        eprintln!("usage: hero-harness <answers.json> [--custom custom.json] [--seed N] [--out file.svg]");
        return ExitCode::from(2);
    };

    let txt = fs::read_to_string(&answers_path).expect("read answers json");
    let answers: QuizAnswers = serde_json::from_str(&txt).expect("parse answers json");

    let custom = match custom_path {
        Some(path) => {
            let txt = fs::read_to_string(&path).expect("read customization json");
            serde_json::from_str::<CharacterCustomization>(&txt).expect("parse customization json")
        }
        None => CharacterCustomization::default(),
    };

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let key = score(&answers, &mut rng);
    let profile = profiles::get(key);
    log::info!(
        "archetype={} name={:?} villain={}",
        key.token(),
        profile.name,
        profile.is_villain
    );

    let input = RenderInput::merged(profile, &custom);
    let doc = svg::document(&render(&input));
    match out_path {
        Some(path) => {
            fs::write(&path, doc).expect("write svg");
            log::info!("wrote {path}");
        }
        None => println!("{doc}"),
    }
    ExitCode::SUCCESS
}
