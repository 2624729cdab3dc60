//! Segments lines read from stdin and writes the tokens to stdout.
use std::error::Error;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use hanseg::{Decoder, Lexicon};

use clap::Parser;

#[derive(Clone, Debug)]
enum OutputMode {
    Wakati,
    Lines,
    Detail,
}

impl FromStr for OutputMode {
    type Err = &'static str;
    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        match mode {
            "wakati" => Ok(Self::Wakati),
            "lines" => Ok(Self::Lines),
            "detail" => Ok(Self::Detail),
            _ => Err("Could not parse a mode"),
        }
    }
}

#[derive(Parser, Debug)]
#[clap(name = "tokenize", about = "Segments Chinese text into words")]
struct Args {
    /// Text dictionary, read as zstd when the extension is `.zst`.
    #[clap(short = 'i', long)]
    dict: PathBuf,

    /// Output mode. Choices are wakati, lines, and detail.
    #[clap(short = 'O', long, default_value = "wakati")]
    output_mode: OutputMode,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    eprintln!("Loading the dictionary...");
    let lexicon = if args.dict.extension().is_some_and(|ext| ext == "zst") {
        Lexicon::from_zstd(&args.dict)?
    } else {
        Lexicon::load(&args.dict)?
    };
    eprintln!(
        "Loaded {} words (total frequency {})",
        lexicon.num_words(),
        lexicon.total()
    );

    let decoder = Decoder::new(lexicon);
    let mut worker = decoder.new_worker();

    eprintln!("Ready to tokenize");

    let is_tty = atty::is(atty::Stream::Stdout);

    let out = std::io::stdout();
    let mut out = BufWriter::new(out.lock());
    let lines = std::io::stdin().lock().lines();
    for line in lines {
        let line = line?;
        worker.reset_sentence(line);
        worker.tokenize();
        match args.output_mode {
            OutputMode::Wakati => {
                for i in 0..worker.num_tokens() {
                    if i != 0 {
                        out.write_all(b" ")?;
                    }
                    out.write_all(worker.token(i).surface().as_bytes())?;
                }
                out.write_all(b"\n")?;
            }
            OutputMode::Lines => {
                for t in worker.token_iter() {
                    out.write_all(t.surface().as_bytes())?;
                    out.write_all(b"\n")?;
                }
                out.write_all(b"EOS\n")?;
            }
            OutputMode::Detail => {
                for t in worker.token_iter() {
                    writeln!(
                        &mut out,
                        "{}\tkind={:?}\trange_char={:?}\tword_cost={}\ttotal_cost={}",
                        t.surface(),
                        t.kind(),
                        t.range_char(),
                        t.word_cost(),
                        t.total_cost(),
                    )?;
                }
                out.write_all(b"EOS\n")?;
            }
        }
        if is_tty {
            out.flush()?;
        }
    }

    Ok(())
}
