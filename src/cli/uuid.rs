use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::error::WordhashError;
use crate::humanize::{DEFAULT_SEPARATOR, DEFAULT_WORDS, Humanizer};
use crate::wordlist::Wordlist;

#[derive(Debug, Args)]
pub struct UuidArgs {
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
pub struct UuidResponse {
    pub human: String,
    pub digest: String,
    pub words: usize,
    pub separator: String,
}

pub enum UuidCommandOutput {
    Text(String),
    Json(UuidResponse),
}

pub fn run_uuid(args: UuidArgs) -> Result<UuidCommandOutput, WordhashError> {
    let humanizer = match args.wordlist.as_deref() {
        Some(path) => Humanizer::new(Wordlist::from_file(path)?),
        None => Humanizer::default(),
    };

    let (human, digest) = humanizer.uuid4(args.words, &args.separator)?;

    if args.json {
        Ok(UuidCommandOutput::Json(UuidResponse {
            human,
            digest,
            words: args.words,
            separator: args.separator,
        }))
    } else {
        Ok(UuidCommandOutput::Text(format!("{human}  {digest}")))
    }
}
