use clap::{Parser, Subcommand};

pub mod humanize;
pub mod uuid;

#[derive(Debug, Parser)]
#[command(name = "wordhash")]
#[command(about = "Human-readable representations of digests")]
#[command(
    long_about = "Renders hexadecimal digests as short, memorable word sequences. The mapping is deterministic: the same digest, word count, separator and wordlist always produce the same output."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Humanize a hexadecimal digest")]
    Humanize(humanize::HumanizeArgs),
    #[command(about = "Generate a random UUID and humanize it")]
    Uuid(uuid::UuidArgs),
}
