//! Concordance Builder - How strongly each criterion supports an outranking.

use crate::domain::foundation::UnitInterval;

use super::{Boundary, CriterionMatrix, ElectreError, SortingProblem, Thresholds};

/// Partial concordance matrices for one boundary.
pub type ConcordanceMatrix = CriterionMatrix;

/// Builds partial concordance indices.
pub struct ConcordanceBuilder;

impl ConcordanceBuilder {
    /// Computes both concordance matrices of a boundary.
    ///
    /// # Algorithm
    /// For action `ai`, criterion `j`, profile tuple `(g(bk), q, p, v)`:
    /// - `c(ai,bk) = clamp((g(ai) - g(bk) + p) / (p - q), 0, 1)`
    /// - `c(bk,ai) = clamp((g(bk) - g(ai) + p) / (p - q), 0, 1)`
    pub fn build(
        problem: &SortingProblem,
        boundary: Boundary,
    ) -> Result<ConcordanceMatrix, ElectreError> {
        CriterionMatrix::compute(problem, boundary, Self::partial)
    }

    /// Partial concordance for a given advantage of the asserted outranker.
    ///
    /// Full concordance once the deficit is within `q`, none beyond `p`,
    /// linear in between.
    pub fn partial(advantage: f64, thresholds: &Thresholds) -> UnitInterval {
        let p = thresholds.preference();
        let q = thresholds.indifference();
        UnitInterval::clamped((advantage + p) / (p - q))
    }
}
