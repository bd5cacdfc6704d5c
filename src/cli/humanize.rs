use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::error::WordhashError;
use crate::humanize::{DEFAULT_SEPARATOR, DEFAULT_WORDS, Humanizer};
use crate::wordlist::Wordlist;

#[derive(Debug, Args)]
pub struct HumanizeArgs {
    #[arg(value_name = "DIGEST", help = "Hexadecimal digest to humanize")]
    pub digest: String,
    #[arg(
        long,
        default_value_t = DEFAULT_WORDS,
        help = "Number of words in the output"
    )]
    pub words: usize,
    #[arg(
        long,
        default_value = DEFAULT_SEPARATOR,
        help = "Separator placed between words"
    )]
    pub separator: String,
    #[arg(
        long,
        value_name = "FILE",
        help = "Custom wordlist file (256 words, one per line)"
    )]
    pub wordlist: Option<PathBuf>,
    #[arg(long, help = "Emit structured JSON output")]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct HumanizeResponse {
    pub human: String,
    pub digest: String,
    pub words: usize,
    pub separator: String,
}

pub enum HumanizeCommandOutput {
    Text(String),
    Json(HumanizeResponse),
}

pub fn run_humanize(args: HumanizeArgs) -> Result<HumanizeCommandOutput, WordhashError> {
    let humanizer = match args.wordlist.as_deref() {
        Some(path) => Humanizer::new(Wordlist::from_file(path)?),
        None => Humanizer::default(),
    };

    let human = humanizer.humanize(&args.digest, args.words, &args.separator)?;

    if args.json {
        Ok(HumanizeCommandOutput::Json(HumanizeResponse {
            human,
            digest: args.digest,
            words: args.words,
            separator: args.separator,
        }))
    } else {
        Ok(HumanizeCommandOutput::Text(human))
    }
}
