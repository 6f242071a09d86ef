use indexmap::IndexMap;
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::vectorizer::token::{Document, TokenFrequency};

/// Ordered, index-stable documents of one text field.
///
/// The per-document count table and the document frequency of every term are
/// built once here, so term-frequency arrays never rescan the documents.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    /// token counts per document, aligned with `documents`
    doc_counts: Vec<TokenFrequency>,
    /// number of documents containing each term
    term_doc_counts: IndexMap<Box<str>, u64>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        let doc_counts: Vec<TokenFrequency> = documents.iter().map(TokenFrequency::from).collect();
        let mut term_doc_counts: IndexMap<Box<str>, u64> = IndexMap::new();
        for freq in &doc_counts {
            for term in freq.token_set_ref_str() {
                *term_doc_counts.entry(term.into()).or_insert(0) += 1;
            }
        }
        debug!(documents = documents.len(), vocab = term_doc_counts.len(), "corpus built");
        Self {
            documents,
            doc_counts,
            term_doc_counts,
        }
    }

    /// Build from cleaned token lists, mapping the sentinel to `Document::Empty`
    pub fn from_token_lists<T>(lists: &[Vec<T>]) -> Self
    where
        T: AsRef<str>,
    {
        Self::new(lists.iter().map(|l| Document::from_tokens(l.as_slice())).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, index: usize) -> Result<&Document> {
        self.documents.get(index).ok_or(EngineError::RowOutOfRange {
            index,
            len: self.documents.len(),
        })
    }

    /// Term-frequency array: count of `word` in each document, aligned by index
    pub fn term_frequency(&self, word: &str) -> Vec<u32> {
        self.doc_counts.iter().map(|freq| freq.token_count(word)).collect()
    }

    /// Count of `word` in the document at `index`
    #[inline]
    pub fn count_at(&self, word: &str, index: usize) -> u32 {
        self.doc_counts.get(index).map_or(0, |freq| freq.token_count(word))
    }

    /// Number of documents containing `word`
    #[inline]
    pub fn doc_freq(&self, word: &str) -> u64 {
        self.term_doc_counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct terms across the corpus
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_doc_counts.len()
    }

    /// Locate `doc` by comparing its distinct terms with each member's.
    ///
    /// First match wins. Several matching rows is a known ambiguity and is
    /// only logged.
    pub fn resolve_position(&self, doc: &Document) -> Result<usize> {
        let wanted = doc.term_set();
        let mut matches = self
            .documents
            .iter()
            .enumerate()
            .filter(|(_, member)| member.term_set() == wanted)
            .map(|(idx, _)| idx);
        let first = matches.next().ok_or(EngineError::DocumentNotInCorpus)?;
        let extra = matches.count();
        if extra > 0 {
            debug!(row = first, other_matches = extra, "ambiguous identity lookup, using first match");
        }
        Ok(first)
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Corpus::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sharks() -> Corpus {
        Corpus::from_token_lists(&[
            vec!["shark", "shark"],
            vec!["shark", "shark", "camel", "camel", "camel"],
            vec!["camel"; 5],
        ])
    }

    #[test]
    fn term_frequency_counts_each_document() {
        let corpus = sharks();
        assert_eq!(corpus.term_frequency("camel"), vec![0, 3, 5]);
        assert_eq!(corpus.term_frequency("shark"), vec![2, 2, 0]);
        assert_eq!(corpus.term_frequency("kamel"), vec![0, 0, 0]);
        assert_eq!(corpus.doc_freq("camel"), 2);
        assert_eq!(corpus.vocab_size(), 2);
    }

    #[test]
    fn empty_documents_count_nothing() {
        let corpus = Corpus::from_token_lists(&[vec!["None"], vec!["shark"]]);
        assert!(corpus.documents()[0].is_empty());
        assert_eq!(corpus.term_frequency("None"), vec![0, 0]);
        assert_eq!(corpus.term_frequency("shark"), vec![0, 1]);
    }

    #[test]
    fn resolve_position_takes_first_set_match() {
        let corpus = Corpus::from_token_lists(&[
            vec!["a", "b"],
            vec!["b", "a", "a"],
            vec!["c"],
        ]);
        let probe = Document::from_text("a b b");
        assert_eq!(corpus.resolve_position(&probe).unwrap(), 0);
        assert_eq!(corpus.resolve_position(&Document::from_text("c")).unwrap(), 2);
        assert!(matches!(
            corpus.resolve_position(&Document::from_text("d")),
            Err(EngineError::DocumentNotInCorpus)
        ));
    }

    #[test]
    fn document_out_of_range() {
        let corpus = sharks();
        assert!(matches!(
            corpus.document(3),
            Err(EngineError::RowOutOfRange { index: 3, len: 3 })
        ));
    }
}
