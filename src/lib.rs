pub mod cli;
pub mod compress;
pub mod error;
pub mod humanize;
pub mod wordlist;

pub use compress::compress;
pub use error::WordhashError;
pub use humanize::{Humanizer, humanize, humanize_with, uuid4_humanized};
pub use wordlist::Wordlist;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
