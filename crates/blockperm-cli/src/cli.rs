use crate::support::DEFAULT_MAX_DIMENSION;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "blockperm",
    about = "blockperm: two-block decomposition and permutation of 0/1 structural matrices",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the two ordered blocks and the permutation that exposes them
    Decompose {
        /// Path to a matrix JSON file (`[[0,1],[1,0]]` or `{"matrix": ...}`)
        #[arg(long, conflicts_with = "system", required_unless_present = "system")]
        matrix: Option<String>,

        /// Path to an equation system, one equation per line (must be square)
        #[arg(long)]
        system: Option<String>,

        /// Largest accepted matrix dimension
        #[arg(long, default_value_t = DEFAULT_MAX_DIMENSION)]
        max_dimension: usize,

        /// Include every realm's history in text output
        #[arg(long)]
        realms: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Reorder rows and columns of a matrix by an explicit permutation
    Permute {
        /// Path to a matrix JSON file
        #[arg(long)]
        matrix: String,

        /// Comma-separated 1-based labels, e.g. `3,1,2`
        #[arg(long, value_delimiter = ',', required = true)]
        permutation: Vec<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show zero-sets, the initial working set and its ranked candidates
    ZeroSets {
        /// Path to a matrix JSON file
        #[arg(long)]
        matrix: String,

        /// Largest accepted matrix dimension
        #[arg(long, default_value_t = DEFAULT_MAX_DIMENSION)]
        max_dimension: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse an equation system into a 0/1 structural matrix
    ParseSystem {
        /// Path to the equation system, one equation per line
        #[arg(long)]
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
