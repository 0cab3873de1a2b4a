//! Check command - validate the template and word table

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use std::path::Path;

use namegen_core::{Category, NameGenerator};

use crate::context::Context;
use crate::output;

/// Word counts for one list, per category context
struct ListStats {
    name: String,
    female: usize,
    male: usize,
    unfiltered: usize,
}

fn list_stats(generator: &NameGenerator) -> Vec<ListStats> {
    let contexts = generator.contexts();
    let count = |category: Category, name: &str| {
        contexts
            .for_category(category)
            .list(name, true)
            .map_or(0, <[String]>::len)
    };

    let mut names: Vec<&String> = contexts.other.unfiltered_choice_lists().keys().collect();
    names.sort();
    names
        .into_iter()
        .map(|name| ListStats {
            name: name.clone(),
            female: count(Category::Female, name),
            male: count(Category::Male, name),
            unfiltered: count(Category::Other, name),
        })
        .collect()
}

/// Bootstrap the generator and report what it loaded
///
/// Parse and fetch failures exit non-zero; references to missing lists or
/// substitutions are reported but do not fail the check.
pub fn run(config: Option<&Path>, json: bool, verbose: bool) -> Result<()> {
    let ctx = Context::new(config)?;
    let generator = &ctx.generator;
    let stats = list_stats(generator);
    let unknown_lists = generator.unknown_lists();
    let unknown_keys = generator.unknown_keys();

    if json {
        let lists: Vec<_> = stats
            .iter()
            .map(|s| {
                json!({
                    "name": s.name,
                    "female": s.female,
                    "male": s.male,
                    "unfiltered": s.unfiltered,
                })
            })
            .collect();
        let report = json!({
            "template": generator.template().to_string(),
            "nodes": generator.template().node_count(),
            "lists": lists,
            "unknown_lists": unknown_lists,
            "unknown_keys": unknown_keys,
        });
        output::print_json(&serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    println!("{} Template parsed ({} nodes)", "✓".green(), generator.template().node_count());
    if verbose {
        println!("  {}", generator.template());
    }

    println!("{} Word lists:", "→".cyan());
    for s in &stats {
        println!(
            "  {} (female {}, male {}, all {})",
            s.name, s.female, s.male, s.unfiltered
        );
    }

    for name in &unknown_lists {
        println!("{} List '{}' is not in the word table", "⚠".yellow(), name);
    }
    for key in &unknown_keys {
        println!("{} Substitution '{}' is not defined", "⚠".yellow(), key);
    }
    Ok(())
}
