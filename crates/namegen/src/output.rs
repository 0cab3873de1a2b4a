use serde::Serialize;
use std::io::{self, Write};

use namegen_core::NameResponse;

use crate::cli::OutputFormat;

pub fn print_json(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

pub fn print_text(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}

/// Write `s` exactly, without a trailing newline
pub fn print_raw(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(s.as_bytes())?;
    out.flush()
}

#[derive(Serialize)]
struct NamesBody<'a> {
    names: &'a [NameResponse],
}

/// `{"names":[{"id":..,"name":..}, ...]}`
pub fn render_json(responses: &[NameResponse]) -> serde_json::Result<String> {
    serde_json::to_string(&NamesBody { names: responses })
}

/// Names separated by `<p>` lines inside an `<html>` element, CRLF line endings
pub fn render_html(responses: &[NameResponse]) -> String {
    let names: Vec<&str> = responses.iter().map(|r| r.name.as_str()).collect();
    format!("<html>\r\n{}</html>\r\n", names.join("\r\n<p>\r\n"))
}

/// One name per line
pub fn render_text(responses: &[NameResponse]) -> String {
    responses
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_names(responses: &[NameResponse], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(&render_json(responses)?)?,
        OutputFormat::Html => print_raw(&render_html(responses))?,
        OutputFormat::Text if responses.is_empty() => {}
        OutputFormat::Text => print_text(&render_text(responses))?,
    }
    Ok(())
}
