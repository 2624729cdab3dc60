//! Times repeated segmentation of a text.
use std::error::Error;
use std::io::Read;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use hanseg::{Decoder, Lexicon};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "benchmark", about = "Measures the segmentation speed")]
struct Args {
    /// Text dictionary, read as zstd when the extension is `.zst`.
    #[clap(short = 'i', long)]
    dict: PathBuf,

    /// Number of times the text is segmented.
    #[clap(short = 'n', long, default_value = "10")]
    iterations: usize,

    /// Text to segment. Read from stdin when omitted.
    #[clap(long)]
    text: Option<String>,
}

fn per_iteration(elapsed: Duration, iterations: usize) -> Duration {
    elapsed / u32::try_from(iterations).unwrap_or(u32::MAX).max(1)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let start = Instant::now();
    let lexicon = if args.dict.extension().is_some_and(|ext| ext == "zst") {
        Lexicon::from_zstd(&args.dict)?
    } else {
        Lexicon::load(&args.dict)?
    };
    eprintln!("Loaded the dictionary in {:?}", start.elapsed());

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut text = String::new();
            std::io::stdin().lock().read_to_string(&mut text)?;
            text
        }
    };

    let decoder = Decoder::new(lexicon);
    let mut worker = decoder.new_worker();
    worker.reset_sentence(&text);

    let mut num_tokens = 0;
    let start = Instant::now();
    for _ in 0..args.iterations {
        worker.tokenize();
        num_tokens += worker.num_tokens();
    }
    let elapsed = start.elapsed();

    let surfaces: Vec<_> = worker.token_iter().map(|t| t.surface()).collect();
    println!("{}", surfaces.join("/"));
    println!(
        "{} iterations, {} tokens, {:?} elapsed ({:?} per iteration)",
        args.iterations,
        num_tokens,
        elapsed,
        per_iteration(elapsed, args.iterations),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_iteration() {
        let elapsed = Duration::from_secs(10);
        assert_eq!(per_iteration(elapsed, 4), Duration::from_millis(2500));
        assert_eq!(per_iteration(elapsed, 0), elapsed);
        assert_eq!(per_iteration(elapsed, usize::MAX), elapsed / u32::MAX);
    }
}
