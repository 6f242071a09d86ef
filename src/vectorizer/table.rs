use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{config::EngineConfig, error::{EngineError, Result}, vectorizer::{corpus::Corpus, token::Document, TfIdfVector, TfIdfVectorizer}};

/// Tokenized text fields of one item collection plus its raw titles.
///
/// Titles are only labels for output. Every field holds one document per
/// title, in the same order.
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    titles: Vec<String>,
    fields: IndexMap<String, Corpus>,
}

impl TextTable {
    pub fn new<T>(titles: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
            fields: IndexMap::new(),
        }
    }

    /// Add or replace a text field
    /// # Errors
    /// `ColumnLengthMismatch` when the corpus is not aligned with the titles
    pub fn insert_field(&mut self, name: impl Into<String>, corpus: Corpus) -> Result<&mut Self> {
        let name = name.into();
        if corpus.len() != self.titles.len() {
            return Err(EngineError::ColumnLengthMismatch {
                field: name,
                expected: self.titles.len(),
                actual: corpus.len(),
            });
        }
        self.fields.insert(name, corpus);
        Ok(self)
    }

    pub fn with_field(mut self, name: impl Into<String>, corpus: Corpus) -> Result<Self> {
        self.insert_field(name, corpus)?;
        Ok(self)
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn field(&self, name: &str) -> Result<&Corpus> {
        self.fields.get(name).ok_or_else(|| EngineError::UnknownField {
            field: name.to_string(),
        })
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Vectorize the named fields, each against its own corpus.
    ///
    /// IDF statistics are scoped to the field; rows keep their table order.
    /// Fields not named are carried over as text in their original position.
    pub fn vectorize<S>(&self, fields: &[S], config: &EngineConfig) -> Result<VectorizedTable>
    where
        S: AsRef<str>,
    {
        let mut columns: IndexMap<String, Column> = self
            .fields
            .iter()
            .map(|(name, corpus)| (name.clone(), Column::Text(corpus.documents().to_vec())))
            .collect();
        for name in fields {
            let name = name.as_ref();
            let corpus = self.field(name)?;
            let vectorizer: TfIdfVectorizer = TfIdfVectorizer::new(corpus);
            let vectors = vectorizer.vectorize_all(config.parallel)?;
            debug!(field = name, rows = vectors.len(), vocab = corpus.vocab_size(), "field vectorized");
            columns.insert(name.to_string(), Column::Vectors(vectors));
        }
        Ok(VectorizedTable {
            titles: self.titles.clone(),
            columns,
        })
    }

    /// Vectorize every field
    pub fn vectorize_all(&self, config: &EngineConfig) -> Result<VectorizedTable> {
        let names: Vec<&str> = self.field_names().collect();
        self.vectorize(names.as_slice(), config)
    }
}

/// One field of a `VectorizedTable`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    Text(Vec<Document>),
    Vectors(Vec<TfIdfVector>),
}

/// The table after vectorization: named fields hold per-row TF-IDF vectors,
/// the rest keep their documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizedTable {
    titles: Vec<String>,
    columns: IndexMap<String, Column>,
}

impl VectorizedTable {
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns.get(name).ok_or_else(|| EngineError::UnknownField {
            field: name.to_string(),
        })
    }

    /// Vectors of a vectorized field
    /// # Errors
    /// `UnknownField` when absent, `NotVectorized` when the field is still text
    pub fn field(&self, name: &str) -> Result<&[TfIdfVector]> {
        match self.column(name)? {
            Column::Vectors(vectors) => Ok(vectors.as_slice()),
            Column::Text(_) => Err(EngineError::NotVectorized {
                field: name.to_string(),
            }),
        }
    }

    /// Documents of a field that was carried over untouched
    pub fn text_field(&self, name: &str) -> Option<&[Document]> {
        match self.column(name).ok()? {
            Column::Text(documents) => Some(documents.as_slice()),
            Column::Vectors(_) => None,
        }
    }

    /// Every field name in table order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn vectorized_field_names(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter(|(_, column)| matches!(column, Column::Vectors(_)))
            .map(|(name, _)| name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(words: &[&str]) -> Corpus {
        words
            .iter()
            .map(|w| Document::Tokens(w.chars().map(String::from).collect()))
            .collect()
    }

    fn table() -> TextTable {
        let words = ["shark", "camel", "shark", "camel", "shark", "kamel", "james"];
        TextTable::new(words)
            .with_field("title", letters(&words))
            .unwrap()
            .with_field("desc", letters(&words))
            .unwrap()
    }

    #[test]
    fn vectorizes_each_named_field() {
        let vectorized = table().vectorize(&["title", "desc"], &EngineConfig::default()).unwrap();
        let title = vectorized.field("title").unwrap();
        assert_eq!(title.len(), 7);
        let expected = [0.55961579, 0.84729786, 0.0, 0.84729786, 0.55961579];
        for (a, e) in title[0].iter().zip(expected) {
            assert!((a - e).abs() < 1e-8);
        }
        let desc = vectorized.field("desc").unwrap();
        let expected = [1.25276297, 0.0, 0.55961579, 0.55961579, 0.84729786];
        for (a, e) in desc[1].iter().zip(expected) {
            assert!((a - e).abs() < 1e-8);
        }
        assert_eq!(vectorized.titles()[6], "james");
    }

    #[test]
    fn unnamed_fields_are_carried_over_as_text() {
        let source = table();
        let vectorized = source.vectorize(&["desc"], &EngineConfig::default()).unwrap();
        assert_eq!(vectorized.field_names().collect::<Vec<_>>(), vec!["title", "desc"]);
        assert_eq!(vectorized.vectorized_field_names().collect::<Vec<_>>(), vec!["desc"]);
        assert_eq!(vectorized.text_field("title"), Some(source.field("title").unwrap().documents()));
        assert_eq!(vectorized.text_field("desc"), None);
        assert!(matches!(
            vectorized.field("title"),
            Err(EngineError::NotVectorized { .. })
        ));
        assert!(matches!(
            vectorized.field("text"),
            Err(EngineError::UnknownField { .. })
        ));
    }

    #[test]
    fn field_scoped_statistics() {
        let table = TextTable::new(["a", "b"])
            .with_field("title", Corpus::from_token_lists(&[vec!["x"], vec!["y"]]))
            .unwrap()
            .with_field("desc", Corpus::from_token_lists(&[vec!["x"], vec!["x"]]))
            .unwrap();
        let vectorized = table.vectorize_all(&EngineConfig::default()).unwrap();
        assert!((vectorized.field("title").unwrap()[0][0] - 2.0f64.ln()).abs() < 1e-12);
        assert_eq!(vectorized.field("desc").unwrap()[0], vec![0.0]);
    }

    #[test]
    fn rejects_misaligned_or_unknown_fields() {
        let mut table = TextTable::new(["a", "b"]);
        assert!(matches!(
            table.insert_field("desc", Corpus::from_token_lists(&[vec!["x"]])),
            Err(EngineError::ColumnLengthMismatch { expected: 2, actual: 1, .. })
        ));
        assert!(matches!(
            table.vectorize(&["text"], &EngineConfig::default()),
            Err(EngineError::UnknownField { .. })
        ));
    }
}
