use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::{Arc, LazyLock};

use crate::error::WordhashError;

/// The vocabulary a [`Wordlist`] must contain exactly this many entries of,
/// so any byte value indexes a word without a bounds check.
pub const WORDLIST_LEN: usize = 256;

/// The default index-to-word mapping. The exact contents and order are a
/// compatibility surface: callers relying on default output expect the same
/// word for the same byte value across releases.
pub const DEFAULT_WORDLIST: [&str; WORDLIST_LEN] = [
    "ack", "alabama", "alanine", "alaska", "alpha", "angel", "apart", "april",
    "arizona", "arkansas", "artist", "asparagus", "aspen", "august", "autumn",
    "avocado", "bacon", "bakerloo", "batman", "beer", "berlin", "beryllium",
    "black", "blossom", "blue", "bluebird", "bravo", "bulldog", "burger",
    "butter", "california", "carbon", "cardinal", "carolina", "carpet", "cat",
    "ceiling", "charlie", "chicken", "coffee", "cola", "cold", "colorado",
    "comet", "connecticut", "crazy", "cup", "dakota", "december", "delaware",
    "delta", "diet", "don", "double", "early", "earth", "east", "echo",
    "edward", "eight", "eighteen", "eleven", "emma", "enemy", "equal",
    "failed", "fanta", "fifteen", "fillet", "finch", "fish", "five", "fix",
    "floor", "florida", "football", "four", "fourteen", "foxtrot", "freddie",
    "friend", "fruit", "gee", "georgia", "glucose", "golf", "green", "grey",
    "hamper", "happy", "harry", "hawaii", "helium", "high", "hot", "hotel",
    "hydrogen", "idaho", "illinois", "india", "indigo", "ink", "iowa",
    "island", "item", "jersey", "jig", "johnny", "juliet", "july", "jupiter",
    "kansas", "kentucky", "kilo", "king", "kitten", "lactose", "lake", "lamp",
    "lemon", "leopard", "lima", "lion", "lithium", "london", "louisiana",
    "low", "magazine", "magnesium", "maine", "mango", "march", "mars",
    "maryland", "massachusetts", "may", "mexico", "michigan", "mike",
    "minnesota", "mirror", "mississippi", "missouri", "mobile", "mockingbird",
    "monkey", "montana", "moon", "mountain", "muppet", "music", "nebraska",
    "neptune", "network", "nevada", "nine", "nineteen", "nitrogen", "north",
    "november", "nuts", "october", "ohio", "oklahoma", "one", "orange",
    "oranges", "oregon", "oscar", "oven", "oxygen", "papa", "paris", "pasta",
    "pennsylvania", "pip", "pizza", "pluto", "potato", "princess", "purple",
    "quebec", "queen", "quiet", "red", "river", "robert", "robin", "romeo",
    "rugby", "sad", "salami", "saturn", "september", "seven", "seventeen",
    "shade", "sierra", "single", "sink", "six", "sixteen", "skylark", "snake",
    "social", "sodium", "solar", "south", "spaghetti", "speaker", "spring",
    "stairway", "steak", "stream", "summer", "sweet", "table", "tango", "ten",
    "tennessee", "tennis", "texas", "thirteen", "three", "timing", "triple",
    "twelve", "twenty", "two", "uncle", "undress", "uniform", "uranus", "utah",
    "vegan", "venus", "vermont", "victor", "video", "violet", "virginia",
    "washington", "west", "whiskey", "white", "william", "winner", "winter",
    "wisconsin", "wolfram", "wyoming", "xray", "yankee", "yellow", "zebra",
    "zulu",
];

static DEFAULT: LazyLock<Wordlist> = LazyLock::new(|| {
    Wordlist::new(DEFAULT_WORDLIST.iter().map(|word| word.to_string()).collect())
        .expect("default wordlist has exactly 256 entries")
});

/// An immutable 256-word vocabulary mapping byte values to words.
///
/// Construction validates the length once; lookups are infallible after
/// that. Cloning is cheap, so one validated list can be shared freely.
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Arc<[String]>,
}

impl Wordlist {
    pub fn new(words: Vec<String>) -> Result<Self, WordhashError> {
        if words.len() != WORDLIST_LEN {
            return Err(WordhashError::WordlistSize { len: words.len() });
        }
        Ok(Self {
            words: words.into(),
        })
    }

    /// The shared process-wide default vocabulary, built on first use.
    pub fn default_list() -> Self {
        DEFAULT.clone()
    }

    /// Reads a newline-separated vocabulary; blank lines are skipped so a
    /// trailing newline does not change the count.
    pub fn from_reader(reader: impl Read) -> Result<Self, WordhashError> {
        let mut words = Vec::with_capacity(WORDLIST_LEN);
        for line in BufReader::new(reader).lines() {
            let line = line.map_err(|source| WordhashError::Io {
                path: "<reader>".to_string(),
                source,
            })?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }
        Self::new(words)
    }

    pub fn from_file(path: &Path) -> Result<Self, WordhashError> {
        let file = std::fs::File::open(path).map_err(|source| WordhashError::io(path, source))?;
        Self::from_reader(file).map_err(|error| match error {
            WordhashError::Io { source, .. } => WordhashError::io(path, source),
            other => other,
        })
    }

    pub fn word(&self, byte: u8) -> &str {
        &self.words[usize::from(byte)]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Wordlist {
    fn default() -> Self {
        Self::default_list()
    }
}
