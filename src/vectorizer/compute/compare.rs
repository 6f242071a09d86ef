use num::Num;

/// Comparison of variable-length TF-IDF vectors.
///
/// Vectors carry one entry per token occurrence and share no vocabulary
/// index, so a shorter vector is compared as if zero-padded at its tail.
pub trait Compare<N>
where
    N: Num + Copy,
{
    /// dot積
    /// d(a, b) = Σ(a_i * b_i) over the padded vectors
    fn dot(vec: &[N], other: &[N]) -> f64;
    /// ||a|| = sqrt(Σ(a_i^2))
    fn norm(vec: &[N]) -> f64;
    /// コサイン類似度
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// `None` when either norm is zero
    fn cosine_similarity(vec: &[N], other: &[N]) -> Option<f64>;
}

#[derive(Debug)]
pub struct DefaultCompare;

impl<N> Compare<N> for DefaultCompare
where
    N: Num + Copy + Into<f64>,
{
    #[inline]
    fn dot(vec: &[N], other: &[N]) -> f64 {
        // padded tail entries multiply to zero, so the shorter length is enough
        vec.iter()
            .zip(other)
            .map(|(&a, &b)| a.into() * b.into())
            .sum()
    }

    #[inline]
    fn norm(vec: &[N]) -> f64 {
        vec.iter()
            .map(|&a| {
                let a: f64 = a.into();
                a * a
            })
            .sum::<f64>()
            .sqrt()
    }

    #[inline]
    fn cosine_similarity(vec: &[N], other: &[N]) -> Option<f64> {
        let norm_a = Self::norm(vec);
        let norm_b = Self::norm(other);
        if norm_a == 0.0 || norm_b == 0.0 {
            return None;
        }
        Some(Self::dot(vec, other) / (norm_a * norm_b))
    }
}

/// Zero-pad `vec` at its tail up to `len`. Longer inputs are returned as is.
pub fn pad<N>(vec: &[N], len: usize) -> Vec<N>
where
    N: Num + Copy,
{
    let mut padded = vec.to_vec();
    if padded.len() < len {
        padded.resize(len, N::zero());
    }
    padded
}

/// Cosine similarity with the degenerate case mapped to `degenerate_score`
#[inline]
pub fn similarity_or<N>(vec: &[N], other: &[N], degenerate_score: f64) -> f64
where
    N: Num + Copy + Into<f64>,
{
    DefaultCompare::cosine_similarity(vec, other).unwrap_or(degenerate_score)
}
