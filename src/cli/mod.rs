// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Local harness around the service. Reads one request from a
// file or stdin, prints one response envelope to stdout.
// All request handling is delegated to TokenizerService.

pub mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;

use commands::{Commands, InputArgs, ServiceArgs};
use lif_tokenizer::infra::config_store::load_config;
use lif_tokenizer::{Envelope, ProcessingService, ServiceConfig, TokenizerService};

#[derive(Parser, Debug)]
#[command(
    name = "lif-tokenizer",
    version,
    about = "Tokenize text into a LIF document with character-offset Token annotations."
)]
pub struct Cli {
    #[command(flatten)]
    pub service: ServiceArgs,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let service = self.build_service()?;

        let output = match &self.command {
            Commands::Execute(args)  => service.execute(&read_input(args)?),
            Commands::Annotate(args) => {
                let request = Envelope::text(read_input(args)?).to_json(false);
                service.execute(&request)
            }
            Commands::Metadata => service.metadata(),
        };

        println!("{output}");
        Ok(())
    }

    /// Config file (if any) → CLI overrides → service
    fn build_service(&self) -> Result<TokenizerService> {
        let base = match &self.service.config {
            Some(path) => load_config(path)?,
            None       => ServiceConfig::default(),
        };
        let cfg = self.service.apply(base);
        tracing::debug!("Service config: {:?}", cfg);

        TokenizerService::from_config(cfg)
    }
}

/// Read the whole request from the named file or stdin
fn read_input(args: &InputArgs) -> Result<String> {
    match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read input '{}'", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Cannot read input from stdin")?;
            Ok(buf)
        }
    }
}
