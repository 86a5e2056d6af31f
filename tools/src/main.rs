// convert_readings
//
// Compiles one or more reading tables into the runtime lexicon artifacts:
// an fst map over kanji-run keys plus a bincode payload vector.
//
// Table format, one entry per line:
//   <kanji-run> <TAB-or-space> <kana-reading> [<TAB-or-space> <freq>]
// Lines without a reading column and blank lines are skipped.

use anyhow::{Context, Result};
use clap::Parser;
use libfurigana_core::Lexicon;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "convert_readings")]
#[command(about = "Compile TSV reading tables into lexicon fst/bincode artifacts")]
struct Args {
    /// Input reading tables (TSV or whitespace separated)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Output fst path
    #[arg(long, default_value = "lexicon.fst")]
    out_fst: PathBuf,

    /// Output bincode payload path
    #[arg(long, default_value = "lexicon.bincode")]
    out_bincode: PathBuf,
}

fn load_table(lexicon: &mut Lexicon, path: &PathBuf) -> Result<usize> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut entries = 0;
    for line in reader.lines() {
        let line = line.with_context(|| format!("read {}", path.display()))?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = if line.contains('\t') {
            line.split('\t').collect()
        } else {
            line.split_whitespace().collect()
        };
        if parts.len() < 2 {
            continue;
        }
        let run = parts[0].trim();
        let kana = parts[1].trim();
        if run.is_empty() || kana.is_empty() {
            continue;
        }
        let freq = parts
            .get(2)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(1);
        lexicon.insert(run, kana, freq);
        entries += 1;
    }
    Ok(entries)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut lexicon = Lexicon::new();
    for input in &args.inputs {
        let entries = load_table(&mut lexicon, input)?;
        println!("✓ {}: {} entries", input.display(), entries);
    }

    lexicon
        .save_artifacts(&args.out_fst, &args.out_bincode)
        .context("write artifacts")?;
    println!(
        "✓ Wrote {} and {}",
        args.out_fst.display(),
        args.out_bincode.display()
    );
    Ok(())
}
