//! Credibility Builder - Global concordance discounted by vetoing criteria.

use serde::Serialize;

use crate::domain::foundation::UnitInterval;

use super::{
    ActionTable, Boundary, Direction, Directional, DiscordanceMatrix, ElectreError,
    GlobalConcordance,
};

/// Credibility of each outranking assertion, for one boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credibility {
    pub boundary: Boundary,
    pub values: Directional<ActionTable<UnitInterval>>,
}

impl Credibility {
    /// Returns the credibility of an action in one direction.
    pub fn value(&self, direction: Direction, action: &str) -> Result<UnitInterval, ElectreError> {
        self.values.get(direction).require(action).copied()
    }
}

/// Applies the veto-discounting rule.
pub struct CredibilityBuilder;

impl CredibilityBuilder {
    /// Computes `cr = GC · Π_{j : d_j > GC} (1 - d_j) / (1 - GC)`.
    ///
    /// Both inputs must belong to the same boundary and share the action set.
    pub fn build(
        global: &GlobalConcordance,
        discordance: &DiscordanceMatrix,
    ) -> Result<Credibility, ElectreError> {
        let values = Directional::try_from_fn(|direction| {
            global.values.get(direction).try_map(|action, gc| {
                let row = discordance.row(direction, action)?;
                Ok::<_, ElectreError>(Self::discount(*gc, row))
            })
        })?;

        Ok(Credibility {
            boundary: global.boundary,
            values,
        })
    }

    /// Discounts one global concordance by the discordances that exceed it.
    ///
    /// A criterion only enters the product when `d > gc`, and `d ≤ 1`, so
    /// `gc = 1` never reaches the division.
    pub fn discount(gc: UnitInterval, discordances: &[UnitInterval]) -> UnitInterval {
        let factor: f64 = discordances
            .iter()
            .filter(|d| d.value() > gc.value())
            .map(|d| d.complement() / gc.complement())
            .product();
        UnitInterval::clamped((gc.value() * factor).min(gc.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degrees(values: &[f64]) -> Vec<UnitInterval> {
        values.iter().copied().map(UnitInterval::clamped).collect()
    }

    #[test]
    fn discount_keeps_concordance_without_veto() {
        let gc = UnitInterval::clamped(0.8);
        assert_eq!(CredibilityBuilder::discount(gc, &degrees(&[0.0, 0.5, 0.8])), gc);
    }

    #[test]
    fn discount_applies_dominating_discordance() {
        // 0.5 · (1 - 0.75) / (1 - 0.5) = 0.25
        let cr = CredibilityBuilder::discount(UnitInterval::clamped(0.5), &degrees(&[0.75]));
        assert_eq!(cr.value(), 0.25);
    }

    #[test]
    fn discount_multiplies_every_dominating_discordance() {
        // two factors of 0.25 / 0.5, the 0.2 entry is ignored
        let cr =
            CredibilityBuilder::discount(UnitInterval::clamped(0.5), &degrees(&[0.75, 0.75, 0.2]));
        assert_eq!(cr.value(), 0.125);
    }

    #[test]
    fn discount_full_veto_gives_zero() {
        let cr = CredibilityBuilder::discount(UnitInterval::clamped(0.9), &degrees(&[1.0]));
        assert_eq!(cr, UnitInterval::ZERO);
    }

    #[test]
    fn discount_full_concordance_is_never_discounted() {
        let cr = CredibilityBuilder::discount(UnitInterval::ONE, &degrees(&[1.0, 1.0]));
        assert_eq!(cr, UnitInterval::ONE);
    }

    #[test]
    fn build_discounts_per_action_and_direction() {
        let global = GlobalConcordance {
            boundary: Boundary::Good,
            values: Directional {
                action_over_profile: vec![("a1", UnitInterval::clamped(0.5))]
                    .into_iter()
                    .collect(),
                profile_over_action: vec![("a1", UnitInterval::ONE)].into_iter().collect(),
            },
        };
        let discordance = DiscordanceMatrix {
            boundary: Boundary::Good,
            criteria: vec!["g1".to_string()],
            rows: Directional {
                action_over_profile: vec![("a1", degrees(&[0.75]))].into_iter().collect(),
                profile_over_action: vec![("a1", degrees(&[0.0]))].into_iter().collect(),
            },
        };

        let credibility = CredibilityBuilder::build(&global, &discordance).unwrap();
        assert_eq!(credibility.boundary, Boundary::Good);
        assert_eq!(
            credibility.value(Direction::ActionOverProfile, "a1").unwrap().value(),
            0.25
        );
        assert_eq!(
            credibility.value(Direction::ProfileOverAction, "a1").unwrap(),
            UnitInterval::ONE
        );
    }

    #[test]
    fn build_reports_action_missing_from_discordance() {
        let global = GlobalConcordance {
            boundary: Boundary::Moderate,
            values: Directional {
                action_over_profile: vec![("a1", UnitInterval::ONE)].into_iter().collect(),
                profile_over_action: vec![("a1", UnitInterval::ONE)].into_iter().collect(),
            },
        };
        let discordance = DiscordanceMatrix {
            boundary: Boundary::Moderate,
            criteria: vec!["g1".to_string()],
            rows: Directional {
                action_over_profile: ActionTable::new(),
                profile_over_action: ActionTable::new(),
            },
        };

        let err = CredibilityBuilder::build(&global, &discordance).unwrap_err();
        assert_eq!(err, ElectreError::missing_action("a1"));
    }
}
