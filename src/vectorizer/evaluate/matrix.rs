use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{config::EngineConfig, error::{EngineError, Result}, vectorizer::{compute::compare::{Compare, DefaultCompare}, table::VectorizedTable, TfIdfVector}};

/// Pairwise similarity between a source and a target collection.
///
/// Rows follow the source order and are labelled with source titles.
/// Columns are keyed by target titles in target order. A title that repeats
/// in the target replaces its earlier column in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityMatrix {
    row_titles: Vec<String>,
    columns: IndexMap<String, Vec<f64>>,
}

impl SimilarityMatrix {
    /// Assemble a matrix from precomputed columns
    /// # Errors
    /// `ColumnLengthMismatch` when a column length differs from the row count
    pub fn from_columns(
        row_titles: Vec<String>,
        columns: impl IntoIterator<Item = (String, Vec<f64>)>,
    ) -> Result<Self> {
        let mut map = IndexMap::new();
        for (key, column) in columns {
            if column.len() != row_titles.len() {
                return Err(EngineError::ColumnLengthMismatch {
                    field: key,
                    expected: row_titles.len(),
                    actual: column.len(),
                });
            }
            map.insert(key, column);
        }
        Ok(Self {
            row_titles,
            columns: map,
        })
    }

    /// Compare `source_field` of every source row with `target_field` of
    /// every target row using cosine similarity.
    pub fn between(
        source: &VectorizedTable,
        target: &VectorizedTable,
        source_field: &str,
        target_field: &str,
        config: &EngineConfig,
    ) -> Result<Self> {
        Self::between_with::<DefaultCompare>(source, target, source_field, target_field, config)
    }

    /// `between` with a custom comparator
    pub fn between_with<C>(
        source: &VectorizedTable,
        target: &VectorizedTable,
        source_field: &str,
        target_field: &str,
        config: &EngineConfig,
    ) -> Result<Self>
    where
        C: Compare<f64>,
    {
        let source_vecs = source.field(source_field)?;
        let target_vecs = target.field(target_field)?;
        debug!(
            source_field,
            target_field,
            rows = source_vecs.len(),
            cols = target_vecs.len(),
            parallel = config.parallel,
            "building similarity matrix"
        );

        let degenerate = config.degenerate_score;
        let column_for = |target_vec: &TfIdfVector| -> Vec<f64> {
            source_vecs
                .iter()
                .map(|source_vec| C::cosine_similarity(source_vec, target_vec).unwrap_or(degenerate))
                .collect()
        };
        let computed: Vec<Vec<f64>> = if config.parallel {
            target_vecs.par_iter().map(column_for).collect()
        } else {
            target_vecs.iter().map(column_for).collect()
        };

        let mut columns = IndexMap::with_capacity(computed.len());
        for (title, column) in target.titles().iter().zip(computed) {
            trace!(column = title.as_str(), "column computed");
            columns.insert(title.clone(), column);
        }
        Ok(Self {
            row_titles: source.titles().to_vec(),
            columns,
        })
    }

    pub fn row_titles(&self) -> &[String] {
        &self.row_titles
    }

    pub fn column_keys(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.row_titles.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.columns.contains_key(key)
    }

    pub fn column(&self, key: &str) -> Result<&[f64]> {
        self.columns
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| EngineError::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// Score at source row `row` and target column `key`
    pub fn get(&self, row: usize, key: &str) -> Option<f64> {
        self.columns.get(key).and_then(|column| column.get(row).copied())
    }
}
