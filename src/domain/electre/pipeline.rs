//! ELECTRE Tri pipeline - Runs every stage for both boundaries.
//!
//! Data flows strictly downward: partial indices, global concordance,
//! credibility, outranking relations, the two sortings, then the median
//! rank. A single fault aborts the run.

use serde::Serialize;
use tracing::{debug, info};

use super::{
    ActionRanking, ActionTable, Boundary, CategoryAssignment, ConcordanceBuilder,
    ConcordanceMatrix, Credibility, CredibilityBuilder, CuttingThreshold, DiscordanceBuilder,
    DiscordanceMatrix, ElectreError, GlobalConcordance, GlobalConcordanceAggregator,
    OptimisticSorter, OutrankingRelationBuilder, OutrankingRelations, PessimisticSorter,
    RankReconciler, SortingProblem, SortingProcedure,
};

/// Intermediate results for one boundary, kept for audit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryAnalysis {
    pub concordance: ConcordanceMatrix,
    pub discordance: DiscordanceMatrix,
    pub global_concordance: GlobalConcordance,
    pub credibility: Credibility,
}

/// Everything a run produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortingOutcome {
    pub cutting_threshold: CuttingThreshold,
    pub moderate: BoundaryAnalysis,
    pub good: BoundaryAnalysis,
    pub relations: OutrankingRelations,
    pub pessimistic: CategoryAssignment,
    pub optimistic: CategoryAssignment,
    pub rankings: ActionTable<ActionRanking>,
}

impl SortingOutcome {
    /// Returns the intermediate results of a boundary.
    pub fn analysis(&self, boundary: Boundary) -> &BoundaryAnalysis {
        match boundary {
            Boundary::Moderate => &self.moderate,
            Boundary::Good => &self.good,
        }
    }

    /// Returns the ranking of an action.
    pub fn ranking(&self, action: &str) -> Result<&ActionRanking, ElectreError> {
        self.rankings.require(action)
    }

    /// One summary line per action, in input order.
    pub fn summary_lines(&self) -> Vec<String> {
        self.rankings
            .iter()
            .map(|(_, ranking)| ranking.summary_line())
            .collect()
    }
}

/// ELECTRE Tri sorter with a fixed cutting threshold.
#[derive(Debug, Clone, Copy)]
pub struct ElectreTri {
    cutting_threshold: CuttingThreshold,
}

impl ElectreTri {
    /// Creates a sorter; fails if λ lies outside (0, 1].
    pub fn new(lambda: f64) -> Result<Self, ElectreError> {
        Ok(Self {
            cutting_threshold: CuttingThreshold::new(lambda)?,
        })
    }

    /// Creates a sorter from an already validated threshold.
    pub fn with_threshold(cutting_threshold: CuttingThreshold) -> Self {
        Self { cutting_threshold }
    }

    pub fn cutting_threshold(&self) -> CuttingThreshold {
        self.cutting_threshold
    }

    /// Sorts every action of the problem.
    pub fn sort(&self, problem: &SortingProblem) -> Result<SortingOutcome, ElectreError> {
        let moderate = Self::analyze(problem, Boundary::Moderate)?;
        let good = Self::analyze(problem, Boundary::Good)?;

        let relations = OutrankingRelationBuilder::build(
            &moderate.credibility,
            &good.credibility,
            self.cutting_threshold,
        )?;
        debug!(lambda = self.cutting_threshold.value(), "outranking relations built");

        let pessimistic = PessimisticSorter::sort(&relations);
        let optimistic = OptimisticSorter::sort(&relations);
        let rankings = RankReconciler::reconcile(&pessimistic, &optimistic)?;

        info!(
            actions = rankings.len(),
            criteria = problem.criteria().len(),
            lambda = self.cutting_threshold.value(),
            "ELECTRE Tri sorting completed"
        );

        Ok(SortingOutcome {
            cutting_threshold: self.cutting_threshold,
            moderate,
            good,
            relations,
            pessimistic,
            optimistic,
            rankings,
        })
    }

    /// Runs the boundary-local stages.
    fn analyze(problem: &SortingProblem, boundary: Boundary) -> Result<BoundaryAnalysis, ElectreError> {
        let concordance = ConcordanceBuilder::build(problem, boundary)?;
        let discordance = DiscordanceBuilder::build(problem, boundary)?;
        let global_concordance =
            GlobalConcordanceAggregator::aggregate(&concordance, problem.criteria())?;
        let credibility = CredibilityBuilder::build(&global_concordance, &discordance)?;

        debug!(
            boundary = %boundary,
            actions = problem.action_ids().len(),
            criteria = problem.criteria().len(),
            "boundary analysis complete"
        );

        Ok(BoundaryAnalysis {
            concordance,
            discordance,
            global_concordance,
            credibility,
        })
    }
}
