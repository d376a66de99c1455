use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-z0-9]+").expect("valid regex");
    static ref ENGLISH: Vec<&'static str> = vec![
        "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
        "be","because","been","before","being","below","between","both","but","by",
        "can","can't","cannot","could","couldn't",
        "did","didn't","do","does","doesn't","doing","don't","down","during",
        "each","few","for","from","further",
        "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
        "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
        "let's","me","more","most","mustn't","my","myself",
        "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
        "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
        "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
        "under","until","up","very",
        "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
        "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
    ];
}

/// Lowercase a single word and strip everything outside `[a-z0-9]`.
///
/// NFKD runs first so accented letters keep their base character (`café` -> `cafe`).
pub fn normalize_word(word: &str) -> String {
    let folded = word.nfkd().collect::<String>().to_lowercase();
    NON_ALNUM.replace_all(&folded, "").into_owned()
}

/// Split raw query text into normalized tokens. Tokens that normalize to nothing are dropped.
pub fn normalize_query(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(normalize_word)
        .filter(|t| !t.is_empty())
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Entries are trimmed and lowercased but keep their punctuation, so `don't` never matches
    /// the normalized token `dont`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Built-in English list, used when no stop-word file is supplied.
    pub fn english() -> Self {
        Self::from_words(ENGLISH.iter())
    }

    /// Load a newline-delimited list, one word per line.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let stopwords = Self::from_words(text.lines());
        tracing::debug!(path = %path.display(), count = stopwords.len(), "loaded stop words");
        Ok(stopwords)
    }

    /// Expects an already normalized token.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Normalization, stop-word filtering and stemming shared by indexing and querying.
pub struct Analyzer {
    stopwords: StopWords,
    stemmer: Stemmer,
}

impl Analyzer {
    pub fn new(stopwords: StopWords) -> Self {
        Self { stopwords, stemmer: Stemmer::create(Algorithm::English) }
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    pub fn stem(&self, token: &str) -> String {
        self.stemmer.stem(token).into_owned()
    }

    /// Stem an already normalized token, or `None` for empty tokens and stop words.
    pub fn term_for_token(&self, token: &str) -> Option<String> {
        if token.is_empty() || self.stopwords.contains(token) {
            return None;
        }
        Some(self.stem(token))
    }

    /// Full pipeline for one raw word of a document.
    pub fn term(&self, raw_word: &str) -> Option<String> {
        self.term_for_token(&normalize_word(raw_word))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(StopWords::english())
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer").field("stopwords", &self.stopwords.len()).finish()
    }
}
