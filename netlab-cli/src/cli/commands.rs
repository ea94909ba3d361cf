//! Argument definitions and command execution.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use netlab_core::{
    EpidemicError, EpidemicErrorCode, NetworkStats, Seeding, SimulationBuilder, TimeSeries,
    Topology, TopologySummary, summarize,
};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_NODES: usize = 20;
const DEFAULT_NEIGHBOURS: usize = 4;
const DEFAULT_EDGE_PROBABILITY: f64 = 0.1;
const DEFAULT_SEED: u64 = 0x5EED_CAFE;
const DEFAULT_STEPS: u64 = 100;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "netlab", about = "Explore network topologies and SIR epidemics.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a topology and print its structural summary.
    #[command(subcommand)]
    Topology(TopologyKind),
    /// Simulate an SIR epidemic on a random contact network.
    Epidemic(EpidemicArgs),
}

/// Topologies accepted by the `topology` command.
#[derive(Debug, Subcommand, Clone)]
pub enum TopologyKind {
    /// Every pair of nodes is connected.
    Complete(NodesArgs),
    /// Nodes on a cycle, each linked to its nearest neighbours.
    Ring(RingArgs),
    /// One hub joined to every other node.
    Star(NodesArgs),
    /// Every pair joined independently with a fixed probability.
    Random(RandomArgs),
}

/// Node count shared by the deterministic topologies.
#[derive(Debug, Args, Clone)]
pub struct NodesArgs {
    /// Number of nodes.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,
}

/// Ring lattice arguments.
#[derive(Debug, Args, Clone)]
pub struct RingArgs {
    /// Number of nodes.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Neighbours per node; odd values are decremented.
    #[arg(long, default_value_t = DEFAULT_NEIGHBOURS)]
    pub neighbours: usize,
}

/// Random graph arguments.
#[derive(Debug, Args, Clone)]
pub struct RandomArgs {
    /// Number of nodes.
    #[arg(long, default_value_t = DEFAULT_NODES)]
    pub nodes: usize,

    /// Edge probability; clamped to `[0, 1]`.
    #[arg(long, default_value_t = DEFAULT_EDGE_PROBABILITY, allow_negative_numbers = true)]
    pub probability: f64,

    /// Random seed.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,
}

impl TopologyKind {
    fn topology(&self) -> Topology {
        match *self {
            Self::Complete(NodesArgs { nodes }) => Topology::Complete { nodes },
            Self::Ring(RingArgs { nodes, neighbours }) => Topology::RingLattice { nodes, neighbours },
            Self::Star(NodesArgs { nodes }) => Topology::Star { nodes },
            Self::Random(RandomArgs {
                nodes, probability, ..
            }) => Topology::Random { nodes, probability },
        }
    }

    fn seed(&self) -> u64 {
        match self {
            Self::Random(args) => args.seed,
            Self::Complete(_) | Self::Ring(_) | Self::Star(_) => DEFAULT_SEED,
        }
    }
}

/// Options accepted by the `epidemic` command.
///
/// Defaults match [`SimulationBuilder::new`] apart from the step limit.
#[derive(Debug, Args, Clone)]
pub struct EpidemicArgs {
    /// Per-contact transmission probability.
    #[arg(long, default_value_t = SimulationBuilder::new().beta(), allow_negative_numbers = true)]
    pub beta: f64,

    /// Per-step recovery probability.
    #[arg(long, default_value_t = SimulationBuilder::new().gamma(), allow_negative_numbers = true)]
    pub gamma: f64,

    /// Population size.
    #[arg(long, default_value_t = SimulationBuilder::new().total_nodes())]
    pub nodes: usize,

    /// Number of index cases.
    #[arg(long, default_value_t = SimulationBuilder::new().initial_infected())]
    pub initial_infected: usize,

    /// Edge probability of the contact network.
    #[arg(
        long,
        default_value_t = SimulationBuilder::new().connection_probability(),
        allow_negative_numbers = true,
    )]
    pub connection_probability: f64,

    /// Random seed for network generation and stepping.
    #[arg(long, default_value_t = SimulationBuilder::new().seed())]
    pub seed: u64,

    /// Maximum number of steps; the run stops early once nobody is infected.
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    pub steps: u64,

    /// Sample the index cases at random instead of taking the first nodes.
    #[arg(long)]
    pub random_seeding: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The epidemic configuration was rejected.
    #[error(transparent)]
    Core(#[from] EpidemicError),
}

impl CliError {
    /// Returns the stable code of the underlying library error.
    #[must_use]
    pub const fn code(&self) -> EpidemicErrorCode {
        match self {
            Self::Core(err) => err.code(),
        }
    }
}

/// Output of the `topology` command.
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyReport {
    /// Human-readable topology name.
    pub name: &'static str,
    /// Structural metrics of the generated graph.
    pub summary: TopologySummary,
}

/// Output of the `epidemic` command.
#[derive(Debug, Clone, PartialEq)]
pub struct EpidemicReport {
    /// Structure of the generated contact network.
    pub stats: NetworkStats,
    /// Number of steps actually taken.
    pub steps: u64,
    /// Census history starting at `time = 0`.
    pub series: TimeSeries,
}

/// Result of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// See [`TopologyReport`].
    Topology(TopologyReport),
    /// See [`EpidemicReport`].
    Epidemic(EpidemicReport),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the epidemic configuration is invalid.
///
/// # Examples
/// ```
/// use netlab_cli::cli::{Cli, Command, NodesArgs, Report, TopologyKind, run_cli};
///
/// let cli = Cli {
///     command: Command::Topology(TopologyKind::Complete(NodesArgs { nodes: 4 })),
/// };
/// let Report::Topology(report) = run_cli(cli).expect("topologies never fail") else {
///     panic!("topology command yields a topology report");
/// };
/// assert_eq!(report.summary.edges, 6);
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    match cli.command {
        Command::Topology(kind) => {
            Span::current().record("command", field::display("topology"));
            Ok(Report::Topology(run_topology(&kind)))
        }
        Command::Epidemic(args) => {
            Span::current().record("command", field::display("epidemic"));
            run_epidemic(&args).map(Report::Epidemic)
        }
    }
}

#[instrument(name = "cli.topology", skip(kind), fields(topology = field::Empty))]
pub(super) fn run_topology(kind: &TopologyKind) -> TopologyReport {
    let topology = kind.topology();
    Span::current().record("topology", field::display(topology.name()));
    let graph = topology.generate(&mut SmallRng::seed_from_u64(kind.seed()));
    let summary = summarize(&graph);
    info!(
        nodes = summary.nodes,
        edges = summary.edges,
        "topology generated"
    );
    TopologyReport {
        name: topology.name(),
        summary,
    }
}

#[instrument(
    name = "cli.epidemic",
    err,
    skip(args),
    fields(nodes = args.nodes, seed = args.seed, max_steps = args.steps),
)]
pub(super) fn run_epidemic(args: &EpidemicArgs) -> Result<EpidemicReport, CliError> {
    let seeding = if args.random_seeding {
        Seeding::Random
    } else {
        Seeding::FirstNodes
    };
    let mut simulation = SimulationBuilder::new()
        .with_beta(args.beta)
        .with_gamma(args.gamma)
        .with_total_nodes(args.nodes)
        .with_initial_infected(args.initial_infected)
        .with_connection_probability(args.connection_probability)
        .with_seeding(seeding)
        .with_seed(args.seed)
        .build()?;

    let stats = simulation.network().stats();
    let steps = simulation.run(args.steps);
    Ok(EpidemicReport {
        stats,
        steps,
        series: simulation.into_series(),
    })
}

/// Renders `report` to `writer` as plain text.
///
/// Epidemic reports end with a tab-separated table of the census history.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use netlab_cli::cli::{Report, TopologyReport, render_report};
/// # use netlab_core::{star_graph, summarize};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let report = Report::Topology(TopologyReport {
///     name: "star",
///     summary: summarize(&star_graph(5)),
/// });
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.contains("average path length: 1.600"));
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &Report, mut writer: impl Write) -> io::Result<()> {
    match report {
        Report::Topology(report) => {
            let summary = &report.summary;
            writeln!(writer, "topology: {}", report.name)?;
            writeln!(writer, "nodes: {}", summary.nodes)?;
            writeln!(writer, "edges: {}", summary.edges)?;
            writeln!(writer, "average degree: {:.3}", summary.average_degree)?;
            writeln!(writer, "average path length: {:.3}", summary.average_path_length)?;
            writeln!(writer, "clustering coefficient: {:.3}", summary.clustering_coefficient)?;
        }
        Report::Epidemic(report) => {
            writeln!(writer, "nodes: {}", report.stats.total_nodes)?;
            writeln!(writer, "links: {}", report.stats.total_links)?;
            writeln!(writer, "average connections: {:.3}", report.stats.average_connections)?;
            writeln!(writer, "initially infected: {}", report.stats.infected)?;
            writeln!(writer, "steps: {}", report.steps)?;
            writeln!(writer, "time\tsusceptible\tinfected\trecovered")?;
            for point in &report.series {
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}",
                    point.time, point.susceptible, point.infected, point.recovered
                )?;
            }
        }
    }
    Ok(())
}
