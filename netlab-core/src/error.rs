//! Error types for the netlab core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Names the probability-valued parameter that failed validation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Parameter {
    /// Edge probability of the random contact graph.
    ConnectionProbability,
    /// Per-contact transmission probability.
    Beta,
    /// Per-step recovery probability.
    Gamma,
}

impl Parameter {
    /// Returns the parameter name as used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConnectionProbability => "connection_probability",
            Self::Beta => "beta",
            Self::Gamma => "gamma",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error produced while validating epidemic parameters.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EpidemicError {
    /// The population must contain at least one node.
    #[error("total_nodes must be at least 1 (got 0)")]
    EmptyPopulation,
    /// More nodes were seeded as infected than exist in the population.
    #[error("initial_infected ({initial_infected}) must not exceed total_nodes ({total_nodes})")]
    InitialInfectedOutOfRange {
        /// Requested number of initially infected nodes.
        initial_infected: usize,
        /// Size of the population.
        total_nodes: usize,
    },
    /// A probability parameter fell outside `[0, 1]` or was NaN.
    #[error("{parameter} must lie within [0, 1] (got {value})")]
    ProbabilityOutOfRange {
        /// Parameter that failed validation.
        parameter: Parameter,
        /// Value supplied by the caller.
        value: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`EpidemicError`] variants.
    enum EpidemicErrorCode for EpidemicError {
        /// The population must contain at least one node.
        EmptyPopulation => EmptyPopulation => "EPIDEMIC_EMPTY_POPULATION",
        /// More nodes were seeded as infected than exist in the population.
        InitialInfectedOutOfRange => InitialInfectedOutOfRange { .. } => "EPIDEMIC_INITIAL_INFECTED_OUT_OF_RANGE",
        /// A probability parameter fell outside `[0, 1]` or was NaN.
        ProbabilityOutOfRange => ProbabilityOutOfRange { .. } => "EPIDEMIC_PROBABILITY_OUT_OF_RANGE",
    }
}

/// An error produced when assembling a [`crate::Graph`] from caller-supplied edges.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge referenced a node outside the graph.
    #[error("edge endpoint {node} is out of range for a graph with {node_count} nodes")]
    UnknownNode {
        /// The offending endpoint.
        node: usize,
        /// Number of nodes in the graph under construction.
        node_count: usize,
    },
    /// An edge connected a node to itself.
    #[error("self-loop on node {node} is not permitted")]
    SelfLoop {
        /// The node carrying the loop.
        node: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a node outside the graph.
        UnknownNode => UnknownNode { .. } => "GRAPH_UNKNOWN_NODE",
        /// An edge connected a node to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
    }
}

/// Validates that `value` is a probability, rejecting NaN.
pub(crate) fn check_probability(parameter: Parameter, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(EpidemicError::ProbabilityOutOfRange { parameter, value })
    }
}

/// Convenient alias for results returned by the epidemic API.
pub type Result<T> = core::result::Result<T, EpidemicError>;
