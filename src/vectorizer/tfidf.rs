use crate::{error::{EngineError, Result}, vectorizer::{corpus::Corpus, token::{Document, Term, EMPTY_SENTINEL}}};

/// Count of `word` in each document, by plain token equality.
///
/// Rescans every document. `Corpus::term_frequency` returns the same array
/// from its precomputed table.
pub fn term_frequency(word: &str, documents: &[Document]) -> Vec<u32> {
    documents.iter().map(|doc| doc.count(word)).collect()
}

/// TF-IDF weighting strategy.
///
/// `DefaultTfIdfEngine` implements raw count times `ln(N / df)`.
pub trait TfIdfEngine {
    /// IDF from corpus size and the number of documents containing the term.
    /// `None` when no document contains it.
    fn idf_from_counts(doc_num: u64, containing: u64) -> Option<f64>;

    /// IDF of a term-frequency array
    /// # Errors
    /// `Statistics` when every entry is zero (or the array is empty)
    fn idf(freqs: &[u32]) -> Result<f64> {
        let containing = freqs.iter().filter(|&&count| count > 0).count() as u64;
        Self::idf_from_counts(freqs.len() as u64, containing)
            .ok_or(EngineError::Statistics { term: None })
    }

    /// Weight of one term: `idf(freqs) * frequency`.
    /// The empty marker and the sentinel word always weigh 0 and never touch
    /// the statistics.
    fn weight(term: Term<'_>, frequency: f64, freqs: &[u32]) -> Result<f64> {
        match term {
            Term::Empty | Term::Word(EMPTY_SENTINEL) => Ok(0.0),
            Term::Word(word) => {
                let idf = Self::idf(freqs).map_err(|_| EngineError::Statistics {
                    term: Some(word.to_string()),
                })?;
                Ok(idf * frequency)
            }
        }
    }

    /// Same as `weight` with the frequency array read from the corpus tables
    fn weight_in_corpus(term: Term<'_>, index: usize, corpus: &Corpus) -> Result<f64> {
        match term {
            Term::Empty | Term::Word(EMPTY_SENTINEL) => Ok(0.0),
            Term::Word(word) => {
                let idf = Self::idf_from_counts(corpus.len() as u64, corpus.doc_freq(word))
                    .ok_or_else(|| EngineError::Statistics {
                        term: Some(word.to_string()),
                    })?;
                Ok(idf * corpus.count_at(word, index) as f64)
            }
        }
    }
}

/// デフォルトのTF-IDFエンジン
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTfIdfEngine;

impl TfIdfEngine for DefaultTfIdfEngine {
    #[inline]
    fn idf_from_counts(doc_num: u64, containing: u64) -> Option<f64> {
        if containing == 0 {
            return None;
        }
        Some((doc_num as f64 / containing as f64).ln())
    }
}
