//! Testing utilities for the SiteForge workspace
//!
//! Builders for response texts in each format the extraction chain
//! recognizes.

#![allow(missing_docs)]

use std::fmt::Write;

/// Build a `=== filename ===` sectioned response
pub fn delimited_response(files: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (name, content) in files {
        writeln!(out, "=== {name} ===").unwrap();
        writeln!(out, "{content}").unwrap();
    }
    out
}

/// Build a sectioned response whose bodies are wrapped in code fences
pub fn delimited_response_fenced(files: &[(&str, &str, &str)]) -> String {
    let mut out = String::new();
    for (name, lang, content) in files {
        writeln!(out, "=== {name} ===").unwrap();
        writeln!(out, "```{lang}").unwrap();
        writeln!(out, "{content}").unwrap();
        writeln!(out, "```").unwrap();
    }
    out
}

/// Build a markdown response: `### filename` headings over fenced blocks
pub fn heading_response(files: &[(&str, &str, &str)]) -> String {
    let mut out = String::new();
    for (name, lang, content) in files {
        writeln!(out, "### {name}").unwrap();
        writeln!(out, "```{lang}").unwrap();
        writeln!(out, "{content}").unwrap();
        writeln!(out, "```").unwrap();
        out.push('\n');
    }
    out
}

/// Build a markdown response: `**filename**` labels over fenced blocks
pub fn bold_response(files: &[(&str, &str, &str)]) -> String {
    let mut out = String::new();
    for (name, lang, content) in files {
        writeln!(out, "**{name}**").unwrap();
        writeln!(out, "```{lang}").unwrap();
        writeln!(out, "{content}").unwrap();
        writeln!(out, "```").unwrap();
        out.push('\n');
    }
    out
}

/// A small three-file site in the primary format, preamble included
pub fn sample_site_response() -> String {
    let mut out = String::from("Here is the generated site:\n\n");
    out.push_str(&delimited_response_fenced(&[
        ("index.html", "html", "<!doctype html>\n<html><body>hei</body></html>"),
        ("style.css", "css", "body { margin: 0; }"),
        ("main.js", "js", "console.log('valmis');"),
    ]));
    out
}
