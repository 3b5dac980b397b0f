use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use wordgen_core::io::load_words;
use wordgen_core::model::graph::TransitionGraph;

/// How the output chain advances from one word to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ChainMode {
    /// Always follow the single most probable successor
    One,
    /// Draw each successor at random, weighted by observed frequency
    All,
}

/// Word-level Markov text generator.
///
/// Builds a transition graph from the input file and either lists the k
/// most probable successors of the seed word (no mode given) or prints a
/// generated chain of k words.
#[derive(Debug, Parser)]
#[clap(name = "wordgen", about = "Word-level Markov text generator")]
struct CliArguments {
    /// Text file used to build the model
    input: PathBuf,

    /// Seed word to start from
    seed: String,

    /// Number of words to produce
    k: usize,

    /// Chain mode; omit it to list the k most probable successors instead
    #[clap(value_enum)]
    mode: Option<ChainMode>,
}

fn main() -> Result<()> {
    let args = CliArguments::parse();

    let words = load_words(&args.input)?;
    let graph = TransitionGraph::new(&words);

    let output = match args.mode {
        None => graph.top_successors(&args.seed, args.k)?,
        Some(ChainMode::One) => graph.generate_greedy_chain(&args.seed, args.k)?,
        Some(ChainMode::All) => {
            graph.generate_weighted_chain(&args.seed, args.k, &mut rand::rng())?
        }
    };

    println!("{}", output.join(" "));
    Ok(())
}
