//! Route descriptors: mapping page files to routes and assembling the tree.
//!
//! Stages 2 and 3 of the routegen pipeline.
//!
//! ## Mapping
//!
//! [`file_to_route`] is a pure function from a discovered page file to a
//! [`RouteDescriptor`]:
//!
//! ```text
//! src/pages/Blog/Post.tsx       →  path "/blog/post.tsx"   name "blog-post.tsx"
//! src/pages/foo/index.tsx       →  path "/foo"             name "foo"
//! src/pages/index.tsx           →  (no route — the root index has no path)
//! ```
//!
//! The URL `path` is the lowercased relative path. Only a trailing
//! `/index.<ext>` suffix is stripped (directory-index files collapse onto
//! their parent directory's route); any other file keeps its extension in
//! the path. The `component` reference keeps the original casing because it
//! must match the real file on disk when the bundler resolves the import.
//!
//! ## Assembly
//!
//! When the project has a `src/layouts` directory, the whole flat sequence
//! is nested under one synthetic root route (`path "/"`,
//! name [`GLOBAL_LAYOUT_NAME`]) whose component points at that directory.
//! The layout then renders every page through its outlet. Without
//! `src/layouts` the flat sequence is the tree.

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Route name of the synthetic root injected when `src/layouts` exists.
pub const GLOBAL_LAYOUT_NAME: &str = "@@global-layout";

/// Directory under `src/` whose presence triggers global layout wrapping.
pub const GLOBAL_LAYOUTS_DIR: &str = "layouts";

#[derive(Error, Debug)]
pub enum RouteError {
    #[error(
        "route `{path}` is produced by two files: {} and {}",
        .first.display(),
        .second.display()
    )]
    DuplicateRoute {
        path: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// One node of the route tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescriptor {
    /// Lowercase, `/`-separated URL path (`/blog/post.tsx`).
    pub path: String,
    /// Unique slug derived from the path (`blog-post.tsx`).
    pub name: String,
    /// Import reference to the source file, case preserved
    /// (`../pages/Blog/Post.tsx`).
    pub component: String,
    /// Child routes, nested beneath this one in the generated router.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteDescriptor>,
}

/// Map one page file to a route descriptor.
///
/// Returns `None` for the pages root's own index file: it collapses to an
/// empty path and produces no route.
pub fn file_to_route(file: &Path, pages_root: &Path) -> Option<RouteDescriptor> {
    let rel = relative_url_path(file, pages_root);
    // Only directory-index files collapse onto their parent directory's
    // route; every other file keeps its extension in the URL.
    let collapsed = strip_index_suffix(&rel);
    let path = collapsed.to_lowercase();
    if path.is_empty() {
        return None;
    }
    let name = path.trim_start_matches('/').replace('/', "-");
    Some(RouteDescriptor {
        path,
        name,
        component: format!("../pages{rel}"),
        children: Vec::new(),
    })
}

/// Map a discovered file list to routes, preserving discovery order.
///
/// Two files collapsing onto the same route path (case-only differences, or
/// `foo/index.tsx` alongside `foo/index.jsx`) is an error naming both
/// files, not a silent last-wins.
pub fn routes_from_files(
    files: &[PathBuf],
    pages_root: &Path,
) -> Result<Vec<RouteDescriptor>, RouteError> {
    let mut routes = Vec::new();
    let mut sources: HashMap<String, PathBuf> = HashMap::new();
    for file in files {
        let Some(route) = file_to_route(file, pages_root) else {
            continue;
        };
        if let Some(first) = sources.get(&route.path) {
            return Err(RouteError::DuplicateRoute {
                path: route.path,
                first: first.clone(),
                second: file.clone(),
            });
        }
        sources.insert(route.path.clone(), file.clone());
        routes.push(route);
    }
    Ok(routes)
}

/// Wrap the flat route sequence under the global layout when `src/layouts`
/// exists; otherwise return the sequence unchanged.
pub fn assemble(routes: Vec<RouteDescriptor>, src_dir: &Path) -> Vec<RouteDescriptor> {
    if !src_dir.join(GLOBAL_LAYOUTS_DIR).is_dir() {
        return routes;
    }
    vec![RouteDescriptor {
        path: "/".to_string(),
        name: GLOBAL_LAYOUT_NAME.to_string(),
        component: format!("@/{GLOBAL_LAYOUTS_DIR}"),
        children: routes,
    }]
}

/// Relative path of `file` under `pages_root`, rendered with a leading `/`
/// and `/` separators regardless of platform.
fn relative_url_path(file: &Path, pages_root: &Path) -> String {
    let rel = file.strip_prefix(pages_root).unwrap_or(file);
    let mut out = String::new();
    for component in rel.components() {
        out.push('/');
        out.push_str(&component.as_os_str().to_string_lossy());
    }
    out
}

/// Strip a trailing directory-index suffix (`/index.js`, `/index.jsx`,
/// `/index.ts`, `/index.tsx`) if present.
fn strip_index_suffix(path: &str) -> &str {
    for ext in crate::scan::PAGE_EXTENSIONS {
        if let Some(stem) = path.strip_suffix(&format!("/index.{ext}")) {
            return stem;
        }
    }
    path
}

/// Strip a page-source extension (`.js`, `.jsx`, `.ts`, `.tsx`) if present.
pub(crate) fn strip_page_extension(path: &str) -> &str {
    for ext in crate::scan::PAGE_EXTENSIONS {
        if let Some(stem) = path.strip_suffix(&format!(".{ext}")) {
            return stem;
        }
    }
    path
}
