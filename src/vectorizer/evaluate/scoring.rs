use std::{cmp::Ordering, fmt};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{config::EngineConfig, error::{EngineError, Result}, vectorizer::evaluate::matrix::SimilarityMatrix};

/// One ranked source item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitEntry {
    pub title: String,
    pub score: f64,
}

/// Ranked source items, best first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    /// Sort by descending score. Equal scores keep their current order.
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|hit| !hit.score.is_nan());
        // -0.0 and 0.0 compare equal
        self.list
            .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        self
    }

    pub fn truncate(&mut self, k: usize) -> &mut Self {
        self.list.truncate(k);
        self
    }

    pub fn titles(&self) -> Vec<&str> {
        self.list.iter().map(|hit| hit.title.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    fn ranked(titles: &[String], scores: impl IntoIterator<Item = f64>, k: usize) -> Self {
        let mut hits = Hits::new(
            titles
                .iter()
                .zip(scores)
                .map(|(title, score)| HitEntry {
                    title: title.clone(),
                    score,
                })
                .collect(),
        );
        hits.sort_by_score_desc().truncate(k);
        hits
    }
}

impl fmt::Display for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, hit) in self.list.iter().enumerate() {
            writeln!(f, "{:>3}. {} ({:.6})", rank + 1, hit.title, hit.score)?;
        }
        Ok(())
    }
}

/// The `k` source rows scoring highest in column `key`, best first.
///
/// Ties keep matrix row order.
/// # Errors
/// `KeyNotFound` when `key` is not a column of the matrix
pub fn best_matches(matrix: &SimilarityMatrix, key: &str, k: usize) -> Result<Hits> {
    let column = matrix.column(key)?;
    Ok(Hits::ranked(matrix.row_titles(), column.iter().copied(), k))
}

/// Rank source rows over a whole viewing history.
///
/// For each matrix the history columns are summed per row, then the matrices
/// are added together. All matrices must share the same row titles.
pub fn recommend_for_history<S>(matrices: &[&SimilarityMatrix], history: &[S], k: usize) -> Result<Hits>
where
    S: AsRef<str>,
{
    let first = matrices.first().ok_or(EngineError::IncompatibleMatrices)?;
    if matrices.iter().any(|m| m.row_titles() != first.row_titles()) {
        return Err(EngineError::IncompatibleMatrices);
    }

    let mut totals = vec![0.0f64; first.row_count()];
    for matrix in matrices {
        let mut per_matrix = vec![0.0f64; matrix.row_count()];
        for key in history {
            let column = matrix.column(key.as_ref())?;
            for (sum, score) in per_matrix.iter_mut().zip(column) {
                *sum += score;
            }
        }
        for (total, sum) in totals.iter_mut().zip(per_matrix) {
            *total += sum;
        }
    }
    debug!(matrices = matrices.len(), history = history.len(), rows = totals.len(), "history aggregated");
    Ok(Hits::ranked(first.row_titles(), totals, k))
}

/// Recommendations for a viewing history across several comparison criteria
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// aggregated over every criterion and every watched item
    pub overall: Hits,
    /// criterion name -> watched item -> best matches
    pub per_criterion: IndexMap<String, IndexMap<String, Hits>>,
}

impl MatchReport {
    /// Build the report for `history` over named matrices, e.g.
    /// `("Title - Description", &td)`.
    pub fn build<S>(criteria: &[(&str, &SimilarityMatrix)], history: &[S], config: &EngineConfig) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let matrices: Vec<&SimilarityMatrix> = criteria.iter().map(|(_, m)| *m).collect();
        let overall = recommend_for_history(&matrices, history, config.top_k)?;

        let mut per_criterion = IndexMap::with_capacity(criteria.len());
        for (name, matrix) in criteria {
            let mut per_item = IndexMap::with_capacity(history.len());
            for key in history {
                let key = key.as_ref();
                per_item.insert(key.to_string(), best_matches(matrix, key, config.top_k)?);
            }
            per_criterion.insert(name.to_string(), per_item);
        }
        Ok(Self {
            overall,
            per_criterion,
        })
    }

    pub fn criterion(&self, name: &str) -> Option<&IndexMap<String, Hits>> {
        self.per_criterion.get(name)
    }
}
