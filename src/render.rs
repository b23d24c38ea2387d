//! Generated-source rendering.
//!
//! Stage 4 of the routegen pipeline. Turns the assembled route tree into the
//! two generated modules:
//!
//! - **Route table** (`routes.tsx` / `routes.jsx`): exports `getRoutes()`,
//!   returning the recursive array of route records. Each record carries the
//!   route path and name, a lazily-loaded component behind a `Suspense`
//!   wrapper, and its children rendered the same way.
//! - **Router shell** (`index.tsx` / `index.jsx`): default-exports
//!   `AppRouter`, which loads the table on first render, recursively nests a
//!   `<Route>` per record, and appends one catch-all wildcard redirecting to
//!   the configured index path.
//!
//! ## Structure Before Text
//!
//! Rendering never interpolates strings recursively through the tree.
//! Descriptors are first lowered into [`RouteEntry`] nodes — the shape the
//! generated table needs, including the chunk identifier — and a single
//! formatter serializes that tree at the end. Structural concerns (nesting,
//! ordering) stay separate from textual ones (quoting, indentation), and
//! swapping the output template touches only the formatter.
//!
//! ## Chunk Identifiers
//!
//! Each lazy import is annotated with a `webpackChunkName` derived from the
//! component reference: parent-directory markers and the source extension
//! stripped, `/` replaced by `__`, lowercased, prefixed with `src`. The id
//! is a pure function of the file path, so an unchanged file keeps its chunk
//! name across runs and downstream incremental-build caches stay warm.
//!
//! ## Dialects
//!
//! The TypeScript and JavaScript templates differ only in annotations (the
//! `IRoute` interface, generic parameters); the emitted structure is
//! identical.

use crate::config::RoutingMode;
use crate::route::{RouteDescriptor, strip_page_extension};
use serde::Serialize;
use std::fmt::Write;

/// Output dialect of the generated sources, selected by the scan stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    JavaScript,
    TypeScript,
}

impl Dialect {
    pub fn from_scan(uses_typescript: bool) -> Self {
        if uses_typescript {
            Dialect::TypeScript
        } else {
            Dialect::JavaScript
        }
    }

    fn is_typed(self) -> bool {
        matches!(self, Dialect::TypeScript)
    }

    /// Filename of the generated route table module.
    pub fn route_table_filename(self) -> &'static str {
        match self {
            Dialect::TypeScript => "routes.tsx",
            Dialect::JavaScript => "routes.jsx",
        }
    }

    /// Filename of the generated router shell module.
    pub fn router_shell_filename(self) -> &'static str {
        match self {
            Dialect::TypeScript => "index.tsx",
            Dialect::JavaScript => "index.jsx",
        }
    }
}

/// Derive the lazy-load chunk identifier for a component reference.
///
/// `../pages/Blog/Post.tsx` → `src__pages__blog__post`. Stable across runs
/// for a given file.
pub fn chunk_name(component: &str) -> String {
    let marker_stripped = component.replacen("..", "", 1);
    let ext_stripped = strip_page_extension(&marker_stripped);
    format!("src{}", ext_stripped.replace('/', "__").to_lowercase())
}

/// One node of the generated route table: a descriptor lowered to exactly
/// what the table needs, chunk id included.
#[derive(Debug)]
struct RouteEntry {
    path: String,
    name: String,
    chunk: String,
    component: String,
    children: Vec<RouteEntry>,
}

fn lower(routes: &[RouteDescriptor]) -> Vec<RouteEntry> {
    routes
        .iter()
        .map(|route| RouteEntry {
            path: route.path.clone(),
            name: route.name.clone(),
            chunk: chunk_name(&route.component),
            component: route.component.clone(),
            children: lower(&route.children),
        })
        .collect()
}

/// Escape a string for a single-quoted source literal.
fn quote(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Serialize route entries as nested object literals, two-space indented.
fn write_entries(out: &mut String, entries: &[RouteEntry], depth: usize) {
    let pad = "  ".repeat(depth);
    for entry in entries {
        let _ = writeln!(out, "{pad}{{");
        let _ = writeln!(out, "{pad}  path: '{}',", quote(&entry.path));
        let _ = writeln!(out, "{pad}  name: '{}',", quote(&entry.name));
        let _ = writeln!(
            out,
            "{pad}  Component: withLazyLoad(React.lazy(() => import(/* webpackChunkName: \"{}\" */ '{}'))),",
            entry.chunk,
            quote(&entry.component)
        );
        if entry.children.is_empty() {
            let _ = writeln!(out, "{pad}  children: [],");
        } else {
            let _ = writeln!(out, "{pad}  children: [");
            write_entries(out, &entry.children, depth + 2);
            let _ = writeln!(out, "{pad}  ],");
        }
        let _ = writeln!(out, "{pad}}},");
    }
}

/// Render the route table module for the given dialect.
pub fn render_route_table(routes: &[RouteDescriptor], dialect: Dialect) -> String {
    let entries = lower(routes);

    let mut body = String::new();
    write_entries(&mut body, &entries, 2);

    let wrapper = if dialect.is_typed() {
        "\
function withLazyLoad<P>(LazyComponent: React.ComponentType<P>) {
  const lazyComponentWrapper: React.FC<P> = (props) => (
    <Suspense fallback={<div>Loading...</div>}>
      <LazyComponent {...props} />
    </Suspense>
  );

  return lazyComponentWrapper;
}"
    } else {
        "\
function withLazyLoad(LazyComponent) {
  const lazyComponentWrapper = (props) => (
    <Suspense fallback={<div>Loading...</div>}>
      <LazyComponent {...props} />
    </Suspense>
  );

  return lazyComponentWrapper;
}"
    };

    format!(
        "\
import React, {{ Suspense }} from 'react';

{wrapper}

export function getRoutes() {{
  return [
{body}  ];
}}
"
    )
}

/// Render the router shell module for the given dialect.
pub fn render_router_shell(mode: RoutingMode, index_path: &str, dialect: Dialect) -> String {
    let router = mode.router_import();

    let interface = if dialect.is_typed() {
        "\n\ninterface IRoute {
  path: string;
  name: string;
  Component: React.FC;
  children?: IRoute[];
}"
    } else {
        ""
    };
    let state_annotation = if dialect.is_typed() { "<IRoute[]>" } else { "" };
    let param_annotation = if dialect.is_typed() {
        ": IRoute[]"
    } else {
        ""
    };

    format!(
        "\
import React, {{ useEffect, useState }} from 'react';
import {{ {router} as Router, Route, Routes, Navigate }} from 'react-router-dom';
import {{ getRoutes }} from './routes';{interface}

export default function AppRouter() {{
  const [routes, setRoutes] = useState{state_annotation}([]);

  useEffect(() => {{
    setRoutes(getRoutes());
  }}, []);

  const renderRoutes = (routes{param_annotation}) =>
    routes.map((route) => {{
      const {{ path, Component, children = [] }} = route;
      return (
        <Route key={{path}} path={{path}} element={{<Component />}}>
          {{renderRoutes(children)}}
        </Route>
      );
    }});

  if (!routes.length) {{
    return <div>Loading...</div>;
  }}

  return (
    <Router>
      <Routes>
        {{renderRoutes(routes)}}
        <Route path=\"*\" element={{<Navigate to=\"{}\" />}} />
      </Routes>
    </Router>
  );
}}
",
        quote(index_path)
    )
}
