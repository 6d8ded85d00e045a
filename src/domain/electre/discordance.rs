//! Discordance Builder - How strongly each criterion opposes an outranking.

use crate::domain::foundation::UnitInterval;

use super::{Boundary, CriterionMatrix, ElectreError, SortingProblem, Thresholds};

/// Partial discordance matrices for one boundary.
pub type DiscordanceMatrix = CriterionMatrix;

/// Builds partial discordance indices.
pub struct DiscordanceBuilder;

impl DiscordanceBuilder {
    /// Computes both discordance matrices of a boundary.
    ///
    /// # Algorithm
    /// - `d(ai,bk) = clamp((g(bk) - g(ai) - p) / (v - p), 0, 1)`
    /// - `d(bk,ai) = clamp((g(ai) - g(bk) - p) / (v - p), 0, 1)`
    pub fn build(
        problem: &SortingProblem,
        boundary: Boundary,
    ) -> Result<DiscordanceMatrix, ElectreError> {
        CriterionMatrix::compute(problem, boundary, Self::partial)
    }

    /// Partial discordance for a given advantage of the asserted outranker.
    ///
    /// Zero until the deficit exceeds `p`, full veto from `v` on.
    pub fn partial(advantage: f64, thresholds: &Thresholds) -> UnitInterval {
        let p = thresholds.preference();
        let v = thresholds.veto();
        UnitInterval::clamped((-advantage - p) / (v - p))
    }
}
