use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kannada_phonology::config::ScanConfig;
use kannada_phonology::deck::{load_curated_pairs, PairNote};
use kannada_phonology::persistence::save_report;
use kannada_phonology::reference::load_reference_corpus;
use kannada_phonology::{DiscardRegistry, PhonologyEngine};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "minimal_pairs")]
#[command(about = "Kannada phoneme tokenizer and minimal-pair finder")]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a single word
    Word {
        word: String,

        /// Print the full word as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare two words and report their minimal-pair contrast
    Compare { left: String, right: String },

    /// Validate a reference corpus and list every minimal pair in it
    Scan {
        /// Tab-separated corpus: word and reference transliteration columns
        corpus: PathBuf,

        /// Also print the discarded contrasts
        #[arg(short, long)]
        discards: bool,

        /// Write a report snapshot here
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        #[arg(long)]
        word_column: Option<usize>,

        #[arg(long)]
        reference_column: Option<usize>,
    },

    /// Print flashcard note fields for a curated pairs file
    Notes { pairs: PathBuf },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("[ERROR] {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = ScanConfig::load_or_default(cli.config.as_deref())
        .context("Could not load configuration")?;
    let engine = PhonologyEngine::new().context("Phoneme table failed validation")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Word { word, json } => {
            let w = engine.word2phonemes(&word)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&w)?)?;
            } else if !w.is_analyzable() {
                writeln!(out, "'{}' is not Kannada script", word)?;
            } else {
                writeln!(out, "word:  {}", w.word)?;
                writeln!(out, "ipa:   {}", w.ipa.join(" "))?;
                writeln!(out, "iso:   {}", w.iso)?;
                writeln!(out, "units: {}", w.units.len())?;
            }
        }
        Commands::Compare { left, right } => {
            let l = engine.word2phonemes(&left)?;
            let r = engine.word2phonemes(&right)?;
            let mut discards = DiscardRegistry::new();
            match engine.find_minimal_pair(&l.ipa, &r.ipa, &mut discards) {
                Some(pair) => writeln!(out, "{}\t{}\t{}\t{}\t{}", pair, l.word, r.word, l.iso, r.iso)?,
                None if !discards.is_empty() => {
                    write!(out, "not a listed contrast: {}", discards.to_tsv())?
                }
                None => writeln!(out, "not a minimal pair")?,
            }
        }
        Commands::Scan {
            corpus,
            discards,
            snapshot,
            word_column,
            reference_column,
        } => {
            config.report_discards |= discards;
            if let Some(path) = snapshot {
                config.snapshot_path = Some(path);
            }
            if let Some(column) = word_column {
                config.word_column = column;
            }
            if let Some(column) = reference_column {
                config.reference_column = column;
            }

            let file = File::open(&corpus)
                .with_context(|| format!("Failed to open corpus: {}", corpus.display()))?;
            let entries = load_reference_corpus(BufReader::new(file), &config)?;
            let outcome = engine.process_corpus(&entries)?;
            let report = engine.scan(outcome.words);

            write!(out, "{}", report.render())?;
            if config.report_discards {
                writeln!(out, "\nDiscarded contrasts ({}):", report.discards.len())?;
                write!(out, "{}", report.discards.to_tsv())?;
            }
            if let Some(path) = &config.snapshot_path {
                save_report(&report, path)
                    .with_context(|| format!("Failed to save snapshot: {}", path.display()))?;
            }
        }
        Commands::Notes { pairs } => {
            let file = File::open(&pairs)
                .with_context(|| format!("Failed to open pairs file: {}", pairs.display()))?;
            for pair in load_curated_pairs(BufReader::new(file))? {
                let note = PairNote::new(&engine, &pair, Vec::new(), Vec::new())?;
                writeln!(out, "{}", note.fields().join("\t"))?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
