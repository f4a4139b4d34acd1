// Interactive pair explorer: type two Kannada words separated by a space
// and see their phonemes with the contrasting one highlighted.
use crossterm::style::Stylize;
use kannada_phonology::pairs::finder::Witness;
use kannada_phonology::{DiscardRegistry, PairFinder, PairVerdict, PhonologyEngine, Word};
use std::io::{stdin, stdout, Write};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let engine = match PhonologyEngine::new() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            std::process::exit(1);
        }
    };
    let mut discards = DiscardRegistry::new();

    println!("Kannada Minimal Pair Explorer. Type 'exit' to quit.");
    println!("---------------------------------------------------------------");

    loop {
        print!("\n> ");
        if stdout().flush().is_err() {
            break;
        }
        let mut input = String::new();
        match stdin().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let words: Vec<&str> = input.split_whitespace().collect();

        match words.as_slice() {
            ["exit"] => break,
            [single] => match engine.word2phonemes(single) {
                Ok(w) => print_word(&w, None),
                Err(e) => println!("{}", e.to_string().red()),
            },
            [left, right] => compare(&engine, left, right, &mut discards),
            _ => println!("Enter one word, or two words to compare."),
        }
    }

    if !discards.is_empty() {
        println!("\nContrasts seen but not on the list:");
        print!("{}", discards.to_tsv());
    }
}

fn compare(engine: &PhonologyEngine<'_>, left: &str, right: &str, discards: &mut DiscardRegistry) {
    let (l, r) = match (engine.word2phonemes(left), engine.word2phonemes(right)) {
        (Ok(l), Ok(r)) => (l, r),
        (Err(e), _) | (_, Err(e)) => {
            println!("{}", e.to_string().red());
            return;
        }
    };
    let position = PairFinder::difference_position(&l.ipa, &r.ipa);
    print_word(&l, position);
    print_word(&r, position);

    match engine.finder().judge(&l.ipa, &r.ipa) {
        PairVerdict::Accepted(pair) => {
            println!("{} {} / {}", "minimal pair:".green().bold(), pair.left, pair.right)
        }
        PairVerdict::Rejected(pair) => {
            println!("{} {} / {}", "not a listed contrast:".yellow(), pair.left, pair.right);
            discards.record(pair, Some(Witness::of(&l, &r)));
        }
        PairVerdict::NotMinimal => println!("{}", "not a minimal pair".dark_grey()),
    }
}

fn print_word(w: &Word, highlight: Option<usize>) {
    if !w.is_analyzable() {
        println!("'{}' is not Kannada script", w.word);
        return;
    }
    let phonemes: Vec<String> = w
        .ipa
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if Some(i) == highlight {
                p.as_str().black().on_yellow().to_string()
            } else {
                p.clone()
            }
        })
        .collect();
    println!("  {}  [{}]  {}", w.word, phonemes.join(" "), w.iso.as_str().cyan());
}
