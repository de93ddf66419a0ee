// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands over the service's two operations:
//
//   execute   — envelope JSON in, envelope JSON out
//   annotate  — raw text in (wrapped as a TEXT envelope)
//   metadata  — print the metadata envelope
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use lif_tokenizer::ServiceConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process a JSON envelope and print the response envelope
    Execute(InputArgs),

    /// Tokenize raw text and print the response envelope
    Annotate(InputArgs),

    /// Print the service metadata envelope
    Metadata,
}

/// Where to read request input from
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input file; stdin when omitted
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}

/// Flags shared by every subcommand. Each one overrides the
/// matching field of the config file when given.
#[derive(Args, Debug, Default)]
pub struct ServiceArgs {
    /// JSON file with a saved ServiceConfig
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// tokenizer.json (or directory) to segment with instead of
    /// the built-in English segmenter
    #[arg(long, global = true)]
    pub tokenizer: Option<PathBuf>,

    /// Id of the token view in the output document
    #[arg(long, global = true)]
    pub view_id: Option<String>,

    /// Single-line JSON output
    #[arg(long, global = true)]
    pub compact: bool,
}

impl ServiceArgs {
    /// Layer CLI overrides on top of a base config
    pub fn apply(&self, mut cfg: ServiceConfig) -> ServiceConfig {
        if let Some(path) = &self.tokenizer {
            cfg.tokenizer_path = Some(path.clone());
        }
        if let Some(id) = &self.view_id {
            cfg.view_id = id.clone();
        }
        if self.compact {
            cfg.pretty = false;
        }
        cfg
    }
}
