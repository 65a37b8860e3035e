use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tweet_gen_core::{
    io as corpus, Dictionary, GenerationInput, ReadLimit, SentenceGenerator, MAX_WORDS_IN_SENTENCE,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate tweets from a text corpus with a word-level Markov chain",
    long_about = None
)]
struct Args {
    #[arg(help = "Seed of the random generator; the same seed gives the same tweets")]
    seed: u64,

    #[arg(help = "Number of tweets to generate")]
    tweets: usize,

    #[arg(value_name = "PATH", help = "Path to the text corpus")]
    corpus: PathBuf,

    #[arg(help = "Number of words to read from the corpus (whole file if omitted)")]
    words_to_read: Option<usize>,

    #[arg(long, default_value_t = MAX_WORDS_IN_SENTENCE, help = "Maximum number of words per tweet")]
    max_words: usize,

    #[arg(long, help = "Print the learned model as JSON instead of generating tweets")]
    dump_model: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Err(err) = run(&args, &mut out).and_then(|()| out.flush().map_err(Into::into)) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<()> {
    // Reading zero words leaves nothing to do.
    if args.words_to_read == Some(0) {
        return Ok(());
    }

    let mut input = GenerationInput::default();
    input.set_max_words(args.max_words)?;

    let text = corpus::read_corpus(&args.corpus).context("Error: Unable to open file")?;
    let dictionary = Dictionary::build(corpus::tokens(&text), ReadLimit::from_count(args.words_to_read));
    info!(
        "loaded {}: {} words read, {} distinct",
        args.corpus.display(),
        dictionary.tokens_read(),
        dictionary.len()
    );

    if args.dump_model {
        serde_json::to_writer_pretty(&mut *out, &dictionary.snapshot())?;
        writeln!(out)?;
        return Ok(());
    }

    let generator = SentenceGenerator::with_input(&dictionary, input);
    let mut rng = StdRng::seed_from_u64(args.seed);
    for i in 1..=args.tweets {
        let sentence = generator.generate(&mut rng)?;
        writeln!(out, "Tweet {i}: {sentence}")?;
    }

    Ok(())
}
