//! End-to-end tests of the sorting pipeline through the public API.
//!
//! Scenario: five retrofit options scored on three maximized criteria.

use electre_tri::domain::electre::{
    Boundary, Criteria, CuttingThreshold, Direction, ElectreError, ElectreTri, PerformanceTable,
    ProfileLevel, ProfileSet, Relation, SortingProblem,
};
use electre_tri::domain::foundation::{Category, ErrorCode};

// =============================================================================
// Test Infrastructure
// =============================================================================

const CRITERIA: [&str; 3] = ["energy", "comfort", "saving"];

fn criteria() -> Criteria {
    Criteria::from_pairs(vec![("energy", 4.0), ("comfort", 3.0), ("saving", 2.0)]).unwrap()
}

fn profiles() -> ProfileSet {
    ProfileSet::new()
        .with(Boundary::Moderate, "energy", (50.0, 5.0, 10.0, 30.0))
        .unwrap()
        .with(Boundary::Moderate, "comfort", (5.0, 0.5, 1.0, 3.0))
        .unwrap()
        .with(Boundary::Moderate, "saving", (40.0, 5.0, 10.0, 25.0))
        .unwrap()
        .with(Boundary::Good, "energy", (75.0, 5.0, 10.0, 30.0))
        .unwrap()
        .with(Boundary::Good, "comfort", (7.5, 0.5, 1.0, 3.0))
        .unwrap()
        .with(Boundary::Good, "saving", (70.0, 5.0, 10.0, 25.0))
        .unwrap()
}

fn retrofit_problem() -> SortingProblem {
    let performances = PerformanceTable::builder()
        .actions(vec!["R1", "R2", "R3", "R4", "R5"])
        .row("R1", &CRITERIA, &[80.0, 8.0, 75.0])
        .row("R2", &CRITERIA, &[60.0, 6.0, 50.0])
        .row("R3", &CRITERIA, &[20.0, 3.0, 20.0])
        .row("R4", &CRITERIA, &[85.0, 4.0, 65.0])
        .row("R5", &CRITERIA, &[70.0, 7.2, 45.0])
        .build();
    SortingProblem::new(criteria(), performances, profiles()).unwrap()
}

// =============================================================================
// Worked scenario
// =============================================================================

#[test]
fn single_criterion_worked_scenario() {
    let criteria = Criteria::from_pairs(vec![("g1", 1.0)]).unwrap();
    let performances = PerformanceTable::builder()
        .actions(vec!["action"])
        .score("action", "g1", 10.0)
        .build();
    let profiles = ProfileSet::new()
        .with(Boundary::Moderate, "g1", (8.0, 1.0, 2.0, 4.0))
        .unwrap()
        .with(Boundary::Good, "g1", (15.0, 1.0, 2.0, 4.0))
        .unwrap();
    let problem = SortingProblem::new(criteria, performances, profiles).unwrap();

    let outcome = ElectreTri::new(0.75).unwrap().sort(&problem).unwrap();

    assert_eq!(
        outcome.summary_lines(),
        vec!["action is classified in category C22 with a median rank of 2.0"]
    );
}

// =============================================================================
// Multi-action scenario
// =============================================================================

#[test]
fn retrofit_categories_at_default_lambda() {
    let outcome = ElectreTri::new(0.75).unwrap().sort(&retrofit_problem()).unwrap();

    let expected = [
        ("R1", Category::Good),
        ("R2", Category::Moderate),
        ("R3", Category::Bad),
        ("R4", Category::Bad),
        ("R5", Category::Moderate),
    ];
    for (action, category) in expected {
        let ranking = outcome.ranking(action).unwrap();
        assert_eq!(ranking.pessimistic, category, "pessimistic {action}");
        assert_eq!(ranking.optimistic, category, "optimistic {action}");
    }

    assert_eq!(
        outcome.pessimistic.actions_in(Category::Moderate),
        vec!["R2", "R5"]
    );
    assert_eq!(outcome.optimistic.actions_in(Category::Bad), vec!["R3", "R4"]);
}

#[test]
fn retrofit_relations_at_default_lambda() {
    let outcome = ElectreTri::new(0.75).unwrap().sort(&retrofit_problem()).unwrap();

    let good: Vec<(&str, Relation)> = outcome.relations.column(ProfileLevel::Good);
    assert_eq!(
        good,
        vec![
            ("R1", Relation::Indifferent),
            ("R2", Relation::Inverse),
            ("R3", Relation::Inverse),
            ("R4", Relation::Incomparable),
            ("R5", Relation::Inverse),
        ]
    );

    let moderate = outcome.relations.row("R4").unwrap().get(ProfileLevel::Moderate);
    assert_eq!(moderate, Relation::Incomparable);

    for (_, relation) in outcome.relations.column(ProfileLevel::Floor) {
        assert_eq!(relation, Relation::Preferred);
    }
    for (_, relation) in outcome.relations.column(ProfileLevel::Roof) {
        assert_eq!(relation, Relation::Inverse);
    }
}

#[test]
fn lower_lambda_lifts_incomparable_action() {
    let outcome = ElectreTri::new(0.6).unwrap().sort(&retrofit_problem()).unwrap();

    let row = outcome.relations.row("R4").unwrap();
    assert_eq!(row.get(ProfileLevel::Moderate), Relation::Preferred);
    assert_eq!(row.get(ProfileLevel::Good), Relation::Incomparable);

    let ranking = outcome.ranking("R4").unwrap();
    assert_eq!(ranking.category_label(), "C22");
    assert_eq!(ranking.median_rank.value(), 2.0);
}

#[test]
fn sorter_built_from_validated_threshold_matches_raw_lambda() {
    let threshold = CuttingThreshold::new(0.6).unwrap();
    let sorter = ElectreTri::with_threshold(threshold);
    assert_eq!(sorter.cutting_threshold(), threshold);

    let problem = retrofit_problem();
    let outcome = sorter.sort(&problem).unwrap();
    assert_eq!(outcome, ElectreTri::new(0.6).unwrap().sort(&problem).unwrap());
    assert_eq!(outcome.cutting_threshold.value(), 0.6);
}

#[test]
fn veto_caps_credibility_below_global_concordance() {
    let outcome = ElectreTri::new(0.75).unwrap().sort(&retrofit_problem()).unwrap();
    let moderate = outcome.analysis(Boundary::Moderate);

    // Moderate only concords on saving; the energy and comfort gaps discount it.
    let gc = moderate
        .global_concordance
        .value(Direction::ProfileOverAction, "R5")
        .unwrap();
    let cr = moderate
        .credibility
        .value(Direction::ProfileOverAction, "R5")
        .unwrap();
    assert!((gc.value() - 2.0 / 9.0).abs() < 1e-9);
    assert!(cr.value() < gc.value());
    assert!(cr.value() > 0.0);
}

#[test]
fn intermediates_are_bounded_for_every_pair() {
    let problem = retrofit_problem();
    let outcome = ElectreTri::new(0.75).unwrap().sort(&problem).unwrap();

    for boundary in Boundary::ALL {
        let analysis = outcome.analysis(boundary);
        for direction in Direction::ALL {
            for action in problem.action_ids() {
                let gc = analysis.global_concordance.value(direction, action).unwrap();
                let cr = analysis.credibility.value(direction, action).unwrap();
                assert!(cr <= gc, "{boundary} {direction} {action}");
                for criterion in CRITERIA {
                    let c = analysis.concordance.entry(direction, action, criterion).unwrap();
                    let d = analysis.discordance.entry(direction, action, criterion).unwrap();
                    assert!((0.0..=1.0).contains(&c.value()));
                    assert!((0.0..=1.0).contains(&d.value()));
                }
            }
        }
    }
}

#[test]
fn summary_lines_follow_input_order() {
    let outcome = ElectreTri::new(0.75).unwrap().sort(&retrofit_problem()).unwrap();

    assert_eq!(
        outcome.summary_lines(),
        vec![
            "R1 is classified in category C33 with a median rank of 3.0",
            "R2 is classified in category C22 with a median rank of 2.0",
            "R3 is classified in category C11 with a median rank of 1.0",
            "R4 is classified in category C11 with a median rank of 1.0",
            "R5 is classified in category C22 with a median rank of 2.0",
        ]
    );
}

#[test]
fn inverted_profiles_split_the_two_procedures() {
    // Good sits below Moderate, so the action beats Good yet loses to Moderate.
    let criteria = Criteria::from_pairs(vec![("g1", 1.0)]).unwrap();
    let performances = PerformanceTable::builder()
        .actions(vec!["odd"])
        .score("odd", "g1", 7.0)
        .build();
    let profiles = ProfileSet::new()
        .with(Boundary::Moderate, "g1", (10.0, 1.0, 2.0, 4.0))
        .unwrap()
        .with(Boundary::Good, "g1", (5.0, 1.0, 2.0, 4.0))
        .unwrap();
    let problem = SortingProblem::new(criteria, performances, profiles).unwrap();

    let outcome = ElectreTri::new(0.75).unwrap().sort(&problem).unwrap();
    let ranking = outcome.ranking("odd").unwrap();

    assert_eq!(ranking.pessimistic, Category::Good);
    assert_eq!(ranking.optimistic, Category::Bad);
    assert_eq!(ranking.category_label(), "C13");
    assert_eq!(ranking.median_rank.value(), 2.0);
}

// =============================================================================
// Failure modes
// =============================================================================

#[test]
fn missing_score_aborts_construction() {
    let performances = PerformanceTable::builder()
        .actions(vec!["R1"])
        .row("R1", &["energy", "comfort"], &[80.0, 8.0])
        .build();

    let err = SortingProblem::new(criteria(), performances, profiles()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MissingEntry);
}

#[test]
fn missing_threshold_aborts_construction() {
    let profiles = ProfileSet::new()
        .with(Boundary::Moderate, "energy", (50.0, 5.0, 10.0, 30.0))
        .unwrap();
    let performances = PerformanceTable::builder()
        .actions(vec!["R1"])
        .row("R1", &CRITERIA, &[80.0, 8.0, 75.0])
        .build();

    let err = SortingProblem::new(criteria(), performances, profiles).unwrap_err();
    assert_eq!(err.code(), ErrorCode::MissingEntry);
}

#[test]
fn unordered_thresholds_are_rejected() {
    let err = ProfileSet::new()
        .with(Boundary::Good, "energy", (75.0, 10.0, 5.0, 30.0))
        .unwrap_err();

    assert!(matches!(
        err,
        ElectreError::InvalidThresholds {
            boundary: Boundary::Good,
            ..
        }
    ));
    assert_eq!(err.code(), ErrorCode::InvalidThresholds);
}

#[test]
fn zero_total_weight_is_rejected() {
    let err = Criteria::from_pairs(vec![("energy", 0.0), ("comfort", 0.0)]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidWeights);
}

#[test]
fn lambda_outside_unit_interval_is_rejected() {
    for lambda in [0.0, -1.0, 1.0001] {
        let err = ElectreTri::new(lambda).unwrap_err();
        assert_eq!(err, ElectreError::InvalidCuttingThreshold { lambda });
    }
    assert!(ElectreTri::new(0.4).is_ok());
}
