use netlab_core::{
    EpidemicError, EpidemicErrorCode, Graph, GraphError, GraphErrorCode, Parameter,
};
use rstest::rstest;

#[rstest]
#[case(EpidemicError::EmptyPopulation, EpidemicErrorCode::EmptyPopulation)]
#[case(
    EpidemicError::InitialInfectedOutOfRange { initial_infected: 4, total_nodes: 3 },
    EpidemicErrorCode::InitialInfectedOutOfRange,
)]
#[case(
    EpidemicError::ProbabilityOutOfRange { parameter: Parameter::Beta, value: 2.0 },
    EpidemicErrorCode::ProbabilityOutOfRange,
)]
fn returns_expected_epidemic_code(
    #[case] error: EpidemicError,
    #[case] expected: EpidemicErrorCode,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().to_string(), expected.as_str());
}

#[rstest]
#[case(GraphError::UnknownNode { node: 9, node_count: 3 }, GraphErrorCode::UnknownNode)]
#[case(GraphError::SelfLoop { node: 1 }, GraphErrorCode::SelfLoop)]
fn returns_expected_graph_code(#[case] error: GraphError, #[case] expected: GraphErrorCode) {
    assert_eq!(error.code(), expected);
    assert!(expected.as_str().starts_with("GRAPH_"));
}

#[rstest]
#[case(
    EpidemicError::InitialInfectedOutOfRange { initial_infected: 4, total_nodes: 3 },
    "initial_infected (4) must not exceed total_nodes (3)",
)]
#[case(
    EpidemicError::ProbabilityOutOfRange {
        parameter: Parameter::ConnectionProbability,
        value: -0.5,
    },
    "connection_probability must lie within [0, 1] (got -0.5)",
)]
fn messages_name_the_offending_values(#[case] error: EpidemicError, #[case] message: &str) {
    assert_eq!(error.to_string(), message);
}

#[rstest]
fn graph_construction_reports_stable_codes() {
    let loop_err = Graph::try_from_edges(3, [(0, 1), (2, 2)]).expect_err("self-loop is rejected");
    assert_eq!(loop_err.code().as_str(), "GRAPH_SELF_LOOP");

    let range_err = Graph::try_from_edges(3, [(0, 3)]).expect_err("node 3 is out of range");
    assert_eq!(
        range_err,
        GraphError::UnknownNode {
            node: 3,
            node_count: 3
        }
    );
}
