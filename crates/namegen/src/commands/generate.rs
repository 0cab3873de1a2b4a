//! Generate command - produce a batch of names

use anyhow::{Result, bail};
use colored::Colorize;
use std::path::Path;

use namegen_core::NameRequest;
use namegen_core::generator::default_requests;

use super::category_rng;
use crate::cli::OutputFormat;
use crate::context::Context;
use crate::output;

/// Generate names
///
/// # Arguments
///
/// * `count` - Number of names, defaults to `generate.default_count`
/// * `gender` - Category label for every name; mixed by configured shares when `None`
/// * `seed` - Seed for reproducible output
pub fn run(
    config: Option<&Path>,
    count: Option<usize>,
    gender: Option<String>,
    seed: Option<u64>,
    format: OutputFormat,
    verbose: bool,
) -> Result<()> {
    let ctx = Context::new(config)?;
    let count = count.unwrap_or(ctx.config.generate.default_count);
    if count == 0 {
        bail!("--count must be at least 1");
    }

    let requests: Vec<NameRequest> = match gender {
        Some(label) => (0..count)
            .map(|i| NameRequest {
                id: i.to_string(),
                gender: label.clone(),
            })
            .collect(),
        None => default_requests(count, &ctx.config.generate, &mut category_rng(seed)),
    };

    let responses = ctx.generator.generate_batch(&requests, seed)?;
    output::print_names(&responses, format)?;

    if verbose {
        eprintln!("{} Generated {} names", "✓".green(), responses.len());
    }
    Ok(())
}
