use thiserror::Error;

/// Errors raised while vectorizing corpora or ranking matches.
///
/// Every variant aborts the current corpus-level computation; nothing is
/// retried and no partial matrix is returned.
#[derive(Debug, Error)]
pub enum EngineError {
    /// IDF requested for a term that no document contains
    #[error(
        "statistics error: no document contains the term{}",
        .term.as_deref().map(|t| format!(" {t:?}")).unwrap_or_default()
    )]
    Statistics { term: Option<String> },

    /// content lookup found no corpus row with the same token set
    #[error("document is not a member of the corpus")]
    DocumentNotInCorpus,

    #[error("row index {index} out of range for corpus of {len} documents")]
    RowOutOfRange { index: usize, len: usize },

    #[error("unknown text field {field:?}")]
    UnknownField { field: String },

    /// field exists but was carried over as text
    #[error("field {field:?} was not vectorized")]
    NotVectorized { field: String },

    #[error("field {field:?} has {actual} rows but the title column has {expected}")]
    ColumnLengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// column key missing from a similarity matrix
    #[error("key {key:?} not found in similarity matrix")]
    KeyNotFound { key: String },

    #[error("similarity matrices do not share the same source rows")]
    IncompatibleMatrices,

    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_cbor::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
