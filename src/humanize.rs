use uuid::Uuid;

use crate::compress::compress;
use crate::error::WordhashError;
use crate::wordlist::Wordlist;

pub const DEFAULT_WORDS: usize = 4;
pub const DEFAULT_SEPARATOR: &str = "-";

/// Renders hex digests as word sequences using a vocabulary bound once at
/// construction. Reusable and shareable; every call is pure.
#[derive(Debug, Clone, Default)]
pub struct Humanizer {
    wordlist: Wordlist,
}

impl Humanizer {
    pub fn new(wordlist: Wordlist) -> Self {
        Self { wordlist }
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// Parses `hex_digest` strictly (even length, hex characters only),
    /// folds the bytes down to `words` values and joins the corresponding
    /// vocabulary entries with `separator`.
    pub fn humanize(
        &self,
        hex_digest: &str,
        words: usize,
        separator: &str,
    ) -> Result<String, WordhashError> {
        let bytes = parse_digest(hex_digest)?;
        let folded = compress(&bytes, words);
        Ok(folded
            .iter()
            .map(|&byte| self.wordlist.word(byte))
            .collect::<Vec<_>>()
            .join(separator))
    }

    /// Generates a random v4 UUID and humanizes it, returning the human
    /// string alongside the 32-character dashless hex digest it came from.
    pub fn uuid4(
        &self,
        words: usize,
        separator: &str,
    ) -> Result<(String, String), WordhashError> {
        let digest = Uuid::new_v4().simple().to_string();
        let human = self.humanize(&digest, words, separator)?;
        Ok((human, digest))
    }
}

fn parse_digest(hex_digest: &str) -> Result<Vec<u8>, WordhashError> {
    hex::decode(hex_digest).map_err(|source| WordhashError::InvalidDigest {
        digest: hex_digest.to_string(),
        source,
    })
}

/// Humanizes `hex_digest` with the default wordlist, four words and a `-`
/// separator.
pub fn humanize(hex_digest: &str) -> Result<String, WordhashError> {
    humanize_with(hex_digest, DEFAULT_WORDS, DEFAULT_SEPARATOR)
}

/// Humanizes `hex_digest` with the default wordlist and explicit word count
/// and separator.
pub fn humanize_with(
    hex_digest: &str,
    words: usize,
    separator: &str,
) -> Result<String, WordhashError> {
    Humanizer::default().humanize(hex_digest, words, separator)
}

/// Generates and humanizes a random v4 UUID with the default wordlist.
/// Returns `(human, digest)`.
pub fn uuid4_humanized(
    words: usize,
    separator: &str,
) -> Result<(String, String), WordhashError> {
    Humanizer::default().uuid4(words, separator)
}
