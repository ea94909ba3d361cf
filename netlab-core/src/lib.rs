//! Netlab core library.
//!
//! Generates canonical network topologies, measures their structure, and
//! simulates SIR epidemics over random contact networks.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod epidemic;
mod error;
mod graph;
mod metrics;
mod topology;

pub use crate::{
    epidemic::{
        Census, EpidemicNetwork, HealthState, NetworkParams, NetworkStats, Seeding, Simulation,
        SimulationBuilder, StepOutcome, StepReport, TimeSeries, TimeSeriesPoint,
        TransmissionParams, generate_epidemic_network, step_epidemic,
    },
    error::{EpidemicError, EpidemicErrorCode, GraphError, GraphErrorCode, Parameter, Result},
    graph::{Adjacency, Edge, Graph, NodeId},
    metrics::{
        TopologySummary, average_path_length, clustering_coefficient, summarize,
    },
    topology::{HUB, Topology, complete_graph, random_graph, ring_lattice, star_graph},
};
