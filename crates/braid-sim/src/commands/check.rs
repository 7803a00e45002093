use std::error::Error;

use braid_core::{BraidWord, Bounds, DEFAULT_MAX_GEN, DEFAULT_MAX_LEN};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Comma separated letters, e.g. `1,-2,3`.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub word: Vec<i32>,
    /// Maximum generator magnitude.
    #[arg(long, default_value_t = DEFAULT_MAX_GEN)]
    pub maxgen: u32,
    /// Maximum word length.
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    pub maxlen: usize,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    word: BraidWord,
    length: usize,
    largest_generator: u32,
    strand_count: u32,
    writhe: i64,
}

pub fn run(args: &CheckArgs) -> Result<(), Box<dyn Error>> {
    let bounds = Bounds::new(args.maxgen, args.maxlen)?;
    let word = BraidWord::new(args.word.clone())?;
    word.check_bounds(&bounds)?;
    let report = CheckReport {
        length: word.len(),
        largest_generator: word.largest_generator(),
        strand_count: word.strand_count(),
        writhe: word.writhe(),
        word,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
