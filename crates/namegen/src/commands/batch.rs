//! Batch command - answer name requests from a JSON document

use anyhow::{Context as _, Result};
use colored::Colorize;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use namegen_core::NameRequest;
use namegen_core::generator::default_requests;

use super::category_rng;
use crate::cli::OutputFormat;
use crate::context::Context;
use crate::output;

/// Accepted request documents
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BatchInput {
    /// `[{"id": "1", "gender": "female"}, ...]`
    List(Vec<NameRequest>),
    /// `{"requests": [...]}`
    Wrapped {
        #[serde(default)]
        requests: Vec<NameRequest>,
    },
}

impl BatchInput {
    fn into_requests(self) -> Vec<NameRequest> {
        match self {
            BatchInput::List(requests) | BatchInput::Wrapped { requests } => requests,
        }
    }
}

fn parse_requests(text: &str) -> Result<Vec<NameRequest>> {
    let input: BatchInput =
        serde_json::from_str(text).context("requests must be a JSON array or {\"requests\": [...]}")?;
    Ok(input.into_requests())
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))
}

/// Answer every request in `input`
///
/// An empty request list is answered with `generate.default_count` names
/// mixed by the configured shares.
pub fn run(
    config: Option<&Path>,
    input: &Path,
    seed: Option<u64>,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let mut requests = parse_requests(&read_input(input)?)?;
    let ctx = Context::new(config)?;

    if requests.is_empty() {
        if verbose {
            eprintln!(
                "{} No requests given, generating {} names",
                "→".cyan(),
                ctx.config.generate.default_count
            );
        }
        requests = default_requests(
            ctx.config.generate.default_count,
            &ctx.config.generate,
            &mut category_rng(seed),
        );
    }

    let responses = ctx.generator.generate_batch(&requests, seed)?;
    output::print_names(&responses, format)?;

    if verbose {
        eprintln!("{} Answered {} requests", "✓".green(), responses.len());
    }
    Ok(())
}
