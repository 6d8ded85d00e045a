//! ELECTRE Tri Module - Outranking-based sorting into three ordered categories.
//!
//! Each action is compared with two reference profiles (Moderate and Good).
//! Fuzzy concordance and discordance indices are aggregated into a
//! credibility per comparison direction, cut at λ into an outranking
//! relation, and the relation is walked pessimistically and optimistically.
//!
//! # Components
//!
//! - `Criteria`, `PerformanceTable`, `ProfileSet` - Validated inputs
//! - `ConcordanceBuilder` / `DiscordanceBuilder` - Partial indices per criterion
//! - `GlobalConcordanceAggregator` - Weighted concordance
//! - `CredibilityBuilder` - Veto discounting
//! - `OutrankingRelationBuilder` - λ-cut into {>, <, I, R}
//! - `PessimisticSorter` / `OptimisticSorter` - Category assignment
//! - `RankReconciler` - Median rank and summary lines
//! - `ElectreTri` - Runs the whole pipeline
//!
//! All stages are pure. Intermediate tables are keyed by action id rather
//! than by position.

mod action_table;
mod concordance;
mod credibility;
mod criteria;
mod direction;
mod discordance;
mod errors;
mod global_concordance;
mod matrix;
mod outranking;
mod performance_table;
mod pipeline;
mod problem;
mod profile;
mod reconciler;
mod sorting;

pub use action_table::ActionTable;
pub use concordance::{ConcordanceBuilder, ConcordanceMatrix};
pub use credibility::{Credibility, CredibilityBuilder};
pub use criteria::{Criteria, Criterion};
pub use direction::{Direction, Directional};
pub use discordance::{DiscordanceBuilder, DiscordanceMatrix};
pub use errors::{ElectreError, MissingEntry};
pub use global_concordance::{GlobalConcordance, GlobalConcordanceAggregator};
pub use matrix::CriterionMatrix;
pub use outranking::{
    CuttingThreshold, OutrankingRelationBuilder, OutrankingRelations, ProfileLevel, Relation,
    RelationRow, RECOMMENDED_LAMBDA_FLOOR,
};
pub use performance_table::{PerformanceTable, PerformanceTableBuilder};
pub use pipeline::{BoundaryAnalysis, ElectreTri, SortingOutcome};
pub use problem::SortingProblem;
pub use profile::{Boundary, ProfileSet, ReferenceProfile, Thresholds};
pub use reconciler::{ActionRanking, MedianRank, RankReconciler};
pub use sorting::{
    CategoryAssignment, OptimisticSorter, PessimisticSorter, Procedure, SortingProcedure,
};
