//! CLI output formatting.
//!
//! Information-first display: the primary line for every route is its URL
//! path and positional index, with the component source shown as trailing
//! context. Write outcomes are listed per generated file so a build log
//! shows at a glance whether a pass actually touched anything.
//!
//! ```text
//! Routes
//! 001 / → @/layouts
//!     001 /a → ../pages/a/index.tsx
//!     002 /b → ../pages/b/index.tsx
//!
//! Generated (typescript)
//! src/router/routes.tsx: written
//! src/router/index.tsx: unchanged
//! ```
//!
//! Each piece has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::emit::{GeneratedFile, WriteOutcome};
use crate::pipeline::RunReport;
use crate::render::Dialect;
use crate::route::RouteDescriptor;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn dialect_label(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::TypeScript => "typescript",
        Dialect::JavaScript => "javascript",
    }
}

fn outcome_label(outcome: WriteOutcome) -> &'static str {
    match outcome {
        WriteOutcome::Written => "written",
        WriteOutcome::Unchanged => "unchanged",
    }
}

/// Format the route tree, one line per route, children indented.
pub fn format_route_tree(routes: &[RouteDescriptor]) -> Vec<String> {
    let mut lines = vec!["Routes".to_string()];
    if routes.is_empty() {
        lines.push("(no pages discovered)".to_string());
        return lines;
    }
    format_routes_recursive(routes, 0, &mut lines);
    lines
}

fn format_routes_recursive(routes: &[RouteDescriptor], depth: usize, lines: &mut Vec<String>) {
    for (i, route) in routes.iter().enumerate() {
        lines.push(format!(
            "{}{} {} → {}",
            indent(depth),
            format_index(i + 1),
            route.path,
            route.component
        ));
        if !route.children.is_empty() {
            format_routes_recursive(&route.children, depth + 1, lines);
        }
    }
}

/// Format the emitted-files section of a run report.
pub fn format_generated_files(files: &[GeneratedFile], dialect: Dialect) -> Vec<String> {
    let mut lines = vec![format!("Generated ({})", dialect_label(dialect))];
    for file in files {
        lines.push(format!(
            "{}: {}",
            file.path.display(),
            outcome_label(file.outcome)
        ));
    }
    lines
}

/// Format a full run report: route tree, then write outcomes.
pub fn format_run_report(report: &RunReport) -> Vec<String> {
    let mut lines = format_route_tree(&report.routes);
    lines.push(String::new());
    lines.extend(format_generated_files(&report.files, report.dialect));
    lines
}

pub fn print_run_report(report: &RunReport) {
    for line in format_run_report(report) {
        println!("{line}");
    }
}

/// Format check output: the tree plus a one-line summary.
pub fn format_check_output(routes: &[RouteDescriptor], dialect: Dialect) -> Vec<String> {
    let mut lines = format_route_tree(routes);
    lines.push(String::new());
    lines.push(format!(
        "{} top-level routes, {} dialect",
        routes.len(),
        dialect_label(dialect)
    ));
    lines
}

pub fn print_check_output(routes: &[RouteDescriptor], dialect: Dialect) {
    for line in format_check_output(routes, dialect) {
        println!("{line}");
    }
}
