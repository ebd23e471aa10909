//! Alphabet sampling statistics - draws characters through the generator and
//! reports per-character frequencies with a chi-square statistic.
//!
//! Usage:
//!   ./alphabet_stats                        # digits, 100k draws, OS source
//!   ./alphabet_stats -c uld -a -d 1000000   # upper+lower+digit, no ambiguous
//!   ./alphabet_stats --source chacha --raw | ent

use std::io::{self, BufWriter, Write};

use clap::Parser;
use passgen::entropy::{Entropy, Source, chi_square};
use passgen::pass::{Alphabet, CharacterClass, ClassSet, from_alphabet};

#[derive(Parser, Debug)]
#[command(name = "alphabet_stats", about = "Frequency check for password sampling")]
struct Args {
    /// Classes to include: any of u (upper), l (lower), d (digit), s (symbol)
    #[arg(short, long, default_value = "d")]
    classes: String,

    /// Exclude ambiguous characters
    #[arg(short = 'a', long)]
    exclude_ambiguous: bool,

    /// Number of characters to draw
    #[arg(short, long, default_value_t = 100_000)]
    draws: usize,

    /// Random source: os or chacha
    #[arg(long, default_value_t = Source::Os)]
    source: Source,

    /// Stream sampled characters to stdout instead of printing a report
    #[arg(long)]
    raw: bool,
}

fn parse_classes(letters: &str) -> Result<ClassSet, String> {
    letters
        .chars()
        .map(|c| match c {
            'u' => Ok(CharacterClass::Upper),
            'l' => Ok(CharacterClass::Lower),
            'd' => Ok(CharacterClass::Digit),
            's' => Ok(CharacterClass::Symbol),
            other => Err(format!("unknown class `{other}`")),
        })
        .collect()
}

/// A report over zero draws would divide by zero for every row.
fn check_draws(draws: usize, raw: bool) -> Result<(), String> {
    if draws == 0 && !raw {
        return Err("--draws must be at least 1".to_string());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    check_draws(args.draws, args.raw)?;
    let classes = parse_classes(&args.classes)?;
    let alphabet = Alphabet::build(classes, args.exclude_ambiguous)?;
    let mut rng = Entropy::new(args.source)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.raw {
        loop {
            let chunk = from_alphabet(&alphabet, 8192, &mut rng);
            if out.write_all(chunk.as_bytes()).is_err() {
                return Ok(());
            }
        }
    }

    let mut counts = vec![0u64; 128];
    let mut remaining = args.draws;
    while remaining > 0 {
        let n = remaining.min(8192);
        let chunk = from_alphabet(&alphabet, n, &mut rng);
        for b in chunk.bytes() {
            counts[b as usize] += 1;
        }
        remaining -= n;
    }

    let observed: Vec<u64> = alphabet.as_bytes().iter().map(|&b| counts[b as usize]).collect();
    let expected = args.draws as f64 / alphabet.len() as f64;

    writeln!(out, "alphabet: {} chars ({})", alphabet.len(), classes)?;
    writeln!(out, "source:   {}", args.source.description())?;
    writeln!(out, "draws:    {}  expected/char: {:.1}", args.draws, expected)?;
    writeln!(out)?;
    for (&b, &count) in alphabet.as_bytes().iter().zip(&observed) {
        let deviation = (count as f64 - expected) / expected.sqrt();
        writeln!(out, "  {}  {:>10}  {:+6.2}σ", b as char, count, deviation)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "chi-square: {:.2} with {} degrees of freedom",
        chi_square(&observed),
        alphabet.len() - 1
    )?;
    out.flush()?;
    Ok(())
}
