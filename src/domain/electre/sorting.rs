//! Pessimistic and optimistic sorting procedures.

use serde::Serialize;

use crate::domain::foundation::Category;

use super::{ActionTable, ElectreError, OutrankingRelations, ProfileLevel, Relation, RelationRow};

/// Which assignment rule produced a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Procedure {
    Pessimistic,
    Optimistic,
}

/// Category of every action under one procedure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAssignment {
    pub procedure: Procedure,
    pub categories: ActionTable<Category>,
}

impl CategoryAssignment {
    /// Returns the category of an action.
    pub fn category(&self, action: &str) -> Result<Category, ElectreError> {
        self.categories.require(action).copied()
    }

    /// Actions placed in a category, in input order.
    pub fn actions_in(&self, category: Category) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|(_, c)| **c == category)
            .map(|(action, _)| action)
            .collect()
    }
}

/// An assignment rule over one action's relation row.
pub trait SortingProcedure {
    const PROCEDURE: Procedure;

    /// Assigns exactly one category from the relations of a single action.
    fn assign(row: &RelationRow) -> Category;

    /// Assigns every action.
    fn sort(relations: &OutrankingRelations) -> CategoryAssignment {
        CategoryAssignment {
            procedure: Self::PROCEDURE,
            categories: relations
                .rows
                .iter()
                .map(|(action, row)| (action, Self::assign(row)))
                .collect(),
        }
    }
}

/// Walks the boundaries from the top down; the first one the action
/// outranks (or is indifferent to) fixes its category.
pub struct PessimisticSorter;

impl SortingProcedure for PessimisticSorter {
    const PROCEDURE: Procedure = Procedure::Pessimistic;

    fn assign(row: &RelationRow) -> Category {
        match (row.get(ProfileLevel::Good), row.get(ProfileLevel::Moderate)) {
            (Relation::Preferred | Relation::Indifferent, _) => Category::Good,
            (_, Relation::Preferred | Relation::Indifferent) => Category::Moderate,
            // Floor is always outranked.
            (
                Relation::Inverse | Relation::Incomparable,
                Relation::Inverse | Relation::Incomparable,
            ) => Category::Bad,
        }
    }
}

/// Walks the boundaries from the bottom up; the first one that outranks
/// the action (or is incomparable to it) caps its category.
pub struct OptimisticSorter;

impl SortingProcedure for OptimisticSorter {
    const PROCEDURE: Procedure = Procedure::Optimistic;

    fn assign(row: &RelationRow) -> Category {
        match (row.get(ProfileLevel::Moderate), row.get(ProfileLevel::Good)) {
            (Relation::Inverse | Relation::Incomparable, _) => Category::Bad,
            (_, Relation::Inverse | Relation::Incomparable) => Category::Moderate,
            // Roof always outranks.
            (
                Relation::Preferred | Relation::Indifferent,
                Relation::Preferred | Relation::Indifferent,
            ) => Category::Good,
        }
    }
}
