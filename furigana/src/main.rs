use libfurigana::{
    demo_engine, ruby_text, Engine, FuriganaConfig, FuriganaEngine, JapaneseReadings, Lexicon,
    UserDict,
};
use std::io::{self, BufRead};
use std::path::Path;

fn build_engine() -> FuriganaEngine {
    let config = FuriganaConfig::default();

    // Prefer compiled lexicon artifacts from `data/` when they exist.
    let data_dir = Path::new("data");
    let fst_path = data_dir.join("lexicon.fst");
    let bin_path = data_dir.join("lexicon.bincode");

    if fst_path.exists() && bin_path.exists() {
        match Lexicon::load_from_fst_bincode(&fst_path, &bin_path) {
            Ok(lexicon) => {
                println!("✓ Loaded lexicon artifacts");

                let home = std::env::var("HOME")
                    .or_else(|_| std::env::var("USERPROFILE"))
                    .unwrap_or_else(|_| ".".to_string());
                let overrides_path = std::path::PathBuf::from(home)
                    .join(".furigana")
                    .join("overrides.redb");
                let overrides = UserDict::new_redb(&overrides_path).unwrap_or_else(|e| {
                    eprintln!("⚠ Failed to open overrides at {overrides_path:?}: {e}");
                    UserDict::new_in_memory()
                });

                let provider = JapaneseReadings::new(lexicon, overrides, &config);
                return Engine::with_config(provider, config.into_base());
            }
            Err(e) => eprintln!("⚠ Failed to load lexicon: {e}"),
        }
    }

    println!("ℹ Using built-in demo lexicon");
    demo_engine()
}

fn main() {
    println!("═══════════════════════════════════════════════════");
    println!("  libfurigana - Interactive Annotation Test");
    println!("═══════════════════════════════════════════════════");
    println!();

    let engine = build_engine();

    println!("Ready! Type Japanese text and press Enter.");
    println!("Examples: 食べる, 明日は晴れ, 日本語を勉強する");
    println!("Press Ctrl+C to exit.");
    println!();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        match line {
            Ok(raw) => {
                let input = raw.trim();
                if input.is_empty() {
                    continue;
                }

                let sequence = engine.parse(&engine.convert(input));
                println!("  → {}", ruby_text(&sequence));
                let unresolved: Vec<&str> = sequence
                    .iter()
                    .filter(|u| u.is_unresolved())
                    .map(|u| u.kanji())
                    .collect();
                if !unresolved.is_empty() {
                    println!("    (no reading for: {})", unresolved.join(", "));
                }
                println!();
            }
            Err(e) => {
                eprintln!("Error: {e}");
                break;
            }
        }
    }
}
