/// This crate is a cross-corpus recommendation engine built on TF-IDF vectors.
pub mod config;
pub mod error;
pub mod vectorizer;

/// Engine configuration
/// Holds the top-k size, the parallelism switch and the score used for
/// zero-norm comparisons. Deserializable from any serde format.
pub use config::EngineConfig;

/// Error type and result alias shared by every operation
pub use error::{EngineError, Result};

/// Document and term types
/// A `Document` is one record's tokenized text for one field. Originally
/// empty records are `Document::Empty` rather than a magic token.
pub use vectorizer::token::{Document, Term};

/// Corpus
/// Ordered documents of one text field, with the document-term count table
/// and document frequencies computed once at construction.
pub use vectorizer::corpus::Corpus;

/// TF-IDF Vectorizer
/// Converts documents into variable-length TF-IDF vectors (one weight per
/// token occurrence) against a borrowed `Corpus`.
///
/// `TfIdfVectorizer<E>` is generic over the weighting engine `E`; the default
/// `DefaultTfIdfEngine` uses raw counts times `ln(N / df)`.
pub use vectorizer::{TfIdfVector, TfIdfVectorizer};

/// TF-IDF Calculation Engine Trait
pub use vectorizer::tfidf::{term_frequency, DefaultTfIdfEngine, TfIdfEngine};

/// Text tables
/// `TextTable` holds raw titles and tokenized fields of one collection;
/// `VectorizedTable` is the same collection with the requested fields turned
/// into vectors and the others kept as `Column::Text`.
pub use vectorizer::table::{Column, TextTable, VectorizedTable};

/// Similarity Comparator
/// Cosine similarity over zero-padded vectors of unequal length.
pub use vectorizer::compute::compare::{pad, similarity_or, Compare, DefaultCompare};

/// Similarity Matrix
/// Rows are source items in source order, columns are keyed by target titles.
pub use vectorizer::evaluate::matrix::SimilarityMatrix;

/// Ranking
/// - `best_matches`: top-k source titles for one target column
/// - `recommend_for_history`: top-k over summed history columns of several matrices
/// - `MatchReport`: both, per criterion and per watched item
pub use vectorizer::evaluate::scoring::{best_matches, recommend_for_history, HitEntry, Hits, MatchReport};

/// CBOR snapshots for derived tables
pub use vectorizer::serde::Snapshot;
