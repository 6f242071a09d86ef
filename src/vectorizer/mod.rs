pub mod corpus;
pub mod tfidf;
pub mod token;
pub mod table;
pub mod compute;
pub mod evaluate;
pub mod serde;

use rayon::prelude::*;
use tracing::debug;

use crate::{error::Result, vectorizer::{corpus::Corpus, tfidf::{DefaultTfIdfEngine, TfIdfEngine}, token::Document}};

/// TF-IDF weights of one document, one entry per token occurrence in
/// document order. Lengths differ between documents.
pub type TfIdfVector = Vec<f64>;

/// Turns documents into TF-IDF vectors against one corpus.
///
/// Statistics come from the corpus tables, so the vectorizer itself is only a
/// borrowed view and costs nothing to create.
#[derive(Debug, Clone, Copy)]
pub struct TfIdfVectorizer<'a, E = DefaultTfIdfEngine>
where
    E: TfIdfEngine + Send + Sync,
{
    /// Corpus reference
    pub corpus_ref: &'a Corpus,
    _marker: std::marker::PhantomData<E>,
}

impl<'a, E> TfIdfVectorizer<'a, E>
where
    E: TfIdfEngine + Send + Sync,
{
    pub fn new(corpus_ref: &'a Corpus) -> Self {
        Self {
            corpus_ref,
            _marker: std::marker::PhantomData,
        }
    }

    /// Vectorize a document given by content.
    ///
    /// Its row is found by token-set lookup (`Corpus::resolve_position`);
    /// when several rows share the token set the first one supplies the counts.
    pub fn vectorize_document(&self, doc: &Document) -> Result<TfIdfVector> {
        let index = self.corpus_ref.resolve_position(doc)?;
        self.vectorize_at(doc, index)
    }

    /// Vectorize the corpus member at `index`
    pub fn vectorize_row(&self, index: usize) -> Result<TfIdfVector> {
        let doc = self.corpus_ref.document(index)?;
        self.vectorize_at(doc, index)
    }

    /// Vectorize every member in corpus order
    pub fn vectorize_all(&self, parallel: bool) -> Result<Vec<TfIdfVector>> {
        debug!(rows = self.corpus_ref.len(), parallel, "vectorizing corpus");
        if parallel {
            (0..self.corpus_ref.len())
                .into_par_iter()
                .map(|index| self.vectorize_row(index))
                .collect()
        } else {
            (0..self.corpus_ref.len())
                .map(|index| self.vectorize_row(index))
                .collect()
        }
    }

    fn vectorize_at(&self, doc: &Document, index: usize) -> Result<TfIdfVector> {
        doc.terms()
            .map(|term| E::weight_in_corpus(term, index, self.corpus_ref))
            .collect()
    }
}
