//! End-to-end VIKOR scenarios through the public API.

use supplier_mcdm::application::{CalculateVikorCommand, CalculateVikorHandler};
use supplier_mcdm::config::VikorConfig;
use supplier_mcdm::domain::analysis::{
    compute_vikor, AnalysisError, CompromiseKind, Criterion, DecisionMatrix,
};
use supplier_mcdm::domain::foundation::Direction;
use supplier_mcdm::domain::workflow::VikorWorkflow;

const TOL: f64 = 1e-6;

fn supplier_matrix() -> DecisionMatrix {
    DecisionMatrix::builder()
        .criteria(vec!["Cost", "Quality", "Delivery"])
        .row("A", vec![100.0, 8.0, 7.0])
        .row("B", vec![80.0, 6.0, 9.0])
        .row("C", vec![120.0, 9.0, 5.0])
        .build()
        .unwrap()
}

fn directions() -> Vec<Direction> {
    vec![Direction::Min, Direction::Max, Direction::Max]
}

#[test]
fn three_supplier_scenario_matches_hand_computation() {
    let result = compute_vikor(&supplier_matrix(), &[0.4, 0.3, 0.3], &directions(), 0.5).unwrap();

    let expected = [
        ("A", 0.45, 0.20, 0.1875, 1),
        ("B", 0.30, 0.30, 0.25, 2),
        ("C", 0.70, 0.40, 1.0, 3),
    ];
    for (id, s, r, q, rank) in expected {
        let score = result.score_for(id).unwrap();
        assert!((score.s - s).abs() < TOL, "S of {id}");
        assert!((score.r - r).abs() < TOL, "R of {id}");
        assert!((score.q - q).abs() < TOL, "Q of {id}");
        assert_eq!(score.rank, rank, "rank of {id}");
    }

    let compromise = &result.compromise;
    assert_eq!(compromise.kind, CompromiseKind::Pair);
    assert_eq!(compromise.alternatives, vec!["A", "B"]);
    assert!(!compromise.acceptable_advantage);
    assert!(compromise.acceptable_stability);
    assert!((compromise.dq - 0.5).abs() < TOL);
}

#[test]
fn unnormalized_weights_give_the_same_ranking() {
    let normalized = compute_vikor(&supplier_matrix(), &[0.4, 0.3, 0.3], &directions(), 0.5).unwrap();
    let raw = compute_vikor(&supplier_matrix(), &[40.0, 30.0, 30.0], &directions(), 0.5).unwrap();
    for (a, b) in normalized.scores.iter().zip(&raw.scores) {
        assert_eq!(a.alternative_id, b.alternative_id);
        assert!((a.q - b.q).abs() < TOL);
    }
}

#[test]
fn dominant_alternative_is_single_compromise() {
    let matrix = DecisionMatrix::builder()
        .criteria(vec!["Cost", "Quality"])
        .row("Best", vec![50.0, 10.0])
        .row("Middle", vec![75.0, 5.0])
        .row("Worst", vec![100.0, 1.0])
        .build()
        .unwrap();
    let result = compute_vikor(&matrix, &[1.0, 1.0], &[Direction::Min, Direction::Max], 0.5).unwrap();

    let best = result.best().unwrap();
    assert_eq!(best.alternative_id, "Best");
    assert_eq!(best.s, 0.0);
    assert_eq!(best.r, 0.0);
    assert_eq!(result.compromise.kind, CompromiseKind::Single);
    assert_eq!(result.compromise.alternatives, vec!["Best"]);
}

#[test]
fn tied_q_keeps_input_order() {
    let matrix = DecisionMatrix::builder()
        .criteria(vec!["Score"])
        .row("Second", vec![5.0])
        .row("First", vec![5.0])
        .build()
        .unwrap();
    let result = compute_vikor(&matrix, &[1.0], &[Direction::Max], 0.5).unwrap();
    assert_eq!(result.ranking(), vec!["Second", "First"]);
    assert_eq!(result.scores[1].rank, 2);
}

#[test]
fn extreme_v_values_are_accepted() {
    for v in [0.0, 1.0] {
        let result = compute_vikor(&supplier_matrix(), &[0.4, 0.3, 0.3], &directions(), v).unwrap();
        assert_eq!(result.v, v);
    }
}

#[test]
fn workflow_and_handler_agree() {
    let mut wf = VikorWorkflow::new();
    wf.add_criterion("Cost", Direction::Min, 0.4).unwrap();
    wf.add_criterion("Quality", Direction::Max, 0.3).unwrap();
    wf.add_criterion("Delivery", Direction::Max, 0.3).unwrap();
    wf.replace_matrix(supplier_matrix());
    let from_workflow = wf.calculate(0.5).unwrap();

    let handler = CalculateVikorHandler::new(VikorConfig::default());
    let report = handler
        .handle(CalculateVikorCommand {
            matrix: supplier_matrix(),
            criteria: wf.criteria().to_vec(),
            v: None,
        })
        .unwrap();

    assert_eq!(from_workflow, report.result);
}

#[test]
fn criteria_file_shape_deserializes() {
    let yaml = "
- name: Cost
  direction: min
  weight: 0.4
- name: Quality
  direction: max
  weight: 0.3
";
    let criteria: Vec<Criterion> = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(criteria[0].direction, Direction::Min);
    assert_eq!(criteria[1].weight, 0.3);
}

#[test]
fn single_row_matrix_is_its_own_compromise() {
    let matrix = DecisionMatrix::builder()
        .criteria(vec!["Cost"])
        .row("Only", vec![10.0])
        .build()
        .unwrap();
    let result = compute_vikor(&matrix, &[1.0], &[Direction::Min], 0.5).unwrap();
    assert_eq!(result.compromise.kind, CompromiseKind::Single);
    assert_eq!(result.compromise.dq, 0.0);
}

#[test]
fn negative_weight_is_invalid_input() {
    let err = compute_vikor(&supplier_matrix(), &[0.4, -0.3, 0.3], &directions(), 0.5).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidInput { .. }));
}

#[test]
fn two_alternatives_never_reach_single_compromise() {
    // DQ = 1 and the Q gap is at most 1 / (1 + ε), so advantage cannot hold.
    let matrix = DecisionMatrix::builder()
        .criteria(vec!["Cost", "Quality"])
        .row("Cheap", vec![10.0, 9.0])
        .row("Dear", vec![90.0, 1.0])
        .build()
        .unwrap();
    for v in [0.0, 0.5, 1.0] {
        let result =
            compute_vikor(&matrix, &[1.0, 1.0], &[Direction::Min, Direction::Max], v).unwrap();
        let compromise = &result.compromise;
        assert!((compromise.dq - 1.0).abs() < TOL);
        assert!(!compromise.acceptable_advantage, "v = {v}");
        assert_eq!(compromise.kind, CompromiseKind::Pair, "v = {v}");
        assert_eq!(compromise.alternatives, vec!["Cheap", "Dear"]);
    }
}
