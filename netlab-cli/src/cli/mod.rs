//! Command-line interface for generating topologies and running epidemics.
//!
//! `topology` builds one of the canonical graphs and prints its structural
//! summary; `epidemic` seeds a random contact network, runs the SIR process
//! and prints the census history.

mod commands;

pub use commands::{
    Cli, CliError, Command, EpidemicArgs, EpidemicReport, NodesArgs, RandomArgs, Report,
    RingArgs, TopologyKind, TopologyReport, render_report, run_cli,
};
