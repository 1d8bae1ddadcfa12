//! MILP backend selection
//!
//! The schedule model is a true mixed-integer program, so every backend here
//! must handle binary variables. `microlp` is the default because it is pure
//! Rust and needs no system libraries; `coin_cbc` and `highs` are available
//! behind cargo features for larger instances.

use std::str::FromStr;

use anyhow::anyhow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MilpSolverKind {
    #[default]
    Microlp,
    #[cfg(feature = "solver-coin_cbc")]
    CoinCbc,
    #[cfg(feature = "solver-highs")]
    Highs,
}

impl MilpSolverKind {
    pub fn available() -> &'static [&'static str] {
        AVAILABLE_MILP_SOLVERS
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MilpSolverKind::Microlp => "microlp",
            #[cfg(feature = "solver-coin_cbc")]
            MilpSolverKind::CoinCbc => "coin_cbc",
            #[cfg(feature = "solver-highs")]
            MilpSolverKind::Highs => "highs",
        }
    }
}

const AVAILABLE_MILP_SOLVERS: &[&str] = &[
    "microlp",
    #[cfg(feature = "solver-coin_cbc")]
    "coin_cbc",
    #[cfg(feature = "solver-highs")]
    "highs",
];

fn unknown_solver_error(label: &str) -> anyhow::Error {
    anyhow!(
        "unknown milp solver '{}'; supported values: {}",
        label,
        MilpSolverKind::available().join(", ")
    )
}

impl FromStr for MilpSolverKind {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.to_ascii_lowercase();
        match normalized.as_str() {
            "microlp" => Ok(MilpSolverKind::Microlp),
            "coin_cbc" | "cbc" => {
                #[cfg(feature = "solver-coin_cbc")]
                {
                    Ok(MilpSolverKind::CoinCbc)
                }
                #[cfg(not(feature = "solver-coin_cbc"))]
                {
                    Err(unknown_solver_error(&normalized))
                }
            }
            "highs" => {
                #[cfg(feature = "solver-highs")]
                {
                    Ok(MilpSolverKind::Highs)
                }
                #[cfg(not(feature = "solver-highs"))]
                {
                    Err(unknown_solver_error(&normalized))
                }
            }
            other => Err(unknown_solver_error(other)),
        }
    }
}
