use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Placeholder the cleaning stage emits for an empty or null field
pub const EMPTY_SENTINEL: &str = "None";

/// One record's tokenized text for a single field.
///
/// `Empty` stands for an originally empty record. It still occupies one
/// position, so its TF-IDF vector has length 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Document {
    Empty,
    Tokens(Vec<String>),
}

/// A single position inside a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term<'a> {
    Empty,
    Word(&'a str),
}

impl<'a> Term<'a> {
    /// A sentinel token anywhere in a document is the empty marker
    pub fn from_token(token: &'a str) -> Self {
        if token == EMPTY_SENTINEL {
            Term::Empty
        } else {
            Term::Word(token)
        }
    }
}

impl Document {
    /// Build a document from cleaned tokens.
    /// The upstream sentinel sequence `["None"]` and an empty slice both map to `Empty`.
    pub fn from_tokens<T>(tokens: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        match tokens {
            [] => Document::Empty,
            [only] if only.as_ref() == EMPTY_SENTINEL => Document::Empty,
            _ => Document::Tokens(tokens.iter().map(|t| t.as_ref().to_string()).collect()),
        }
    }

    /// Split on whitespace, same as the upstream tokenizer.
    pub fn from_text(text: &str) -> Self {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        Self::from_tokens(tokens.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Document::Empty)
    }

    /// Number of positions, duplicates included
    pub fn token_count(&self) -> usize {
        match self {
            Document::Empty => 1,
            Document::Tokens(tokens) => tokens.len(),
        }
    }

    /// Terms in document order. Sentinel tokens come out as `Term::Empty`.
    pub fn terms(&self) -> Box<dyn Iterator<Item = Term<'_>> + '_> {
        match self {
            Document::Empty => Box::new(std::iter::once(Term::Empty)),
            Document::Tokens(tokens) => Box::new(tokens.iter().map(|t| Term::from_token(t.as_str()))),
        }
    }

    /// Distinct terms, used for content-based identity lookup
    pub fn term_set(&self) -> HashSet<Term<'_>> {
        self.terms().collect()
    }

    /// Exact occurrences of `word`; the empty marker matches nothing
    pub fn count(&self, word: &str) -> u32 {
        match self {
            Document::Empty => 0,
            Document::Tokens(tokens) => tokens.iter().filter(|t| t.as_str() == word).count() as u32,
        }
    }
}

///  TokenFrequency
/// per-document token counts, kept in first-occurrence order
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TokenFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    token_count: IndexMap<String, u32>,
    total_token_count: u64,
}

impl TokenFrequency {
    pub fn new() -> Self {
        TokenFrequency {
            token_count: IndexMap::new(),
            total_token_count: 0,
        }
    }

    #[inline]
    pub fn add_token(&mut self, token: &str) -> &mut Self {
        let count = self.token_count.entry(token.to_string()).or_insert(0);
        *count += 1;
        self.total_token_count += 1;
        self
    }

    #[inline]
    pub fn add_tokens<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for token in tokens {
            self.add_token(token.as_ref());
        }
        self
    }

    #[inline]
    pub fn token_count(&self, token: &str) -> u32 {
        self.token_count.get(token).copied().unwrap_or(0)
    }

    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// distinct tokens in first-occurrence order
    pub fn token_set_ref_str(&self) -> Vec<&str> {
        self.token_count.keys().map(|s| s.as_str()).collect()
    }
}

impl From<&Document> for TokenFrequency {
    fn from(doc: &Document) -> Self {
        let mut freq = TokenFrequency::new();
        if let Document::Tokens(tokens) = doc {
            freq.add_tokens(tokens);
        }
        freq
    }
}
