//! End-to-end route synthesis.
//!
//! Ties the five stages together behind [`RouteGenerator::run`]: scan the
//! pages directory, map files to route descriptors, assemble the tree,
//! render both generated modules, and emit them idempotently. Hosts call
//! `run()` once before each compilation pass; a run is strictly sequential
//! and each stage consumes the previous stage's full output.
//!
//! All per-run state (the discovered file list, the dialect probe) lives in
//! values threaded through the stages. The only cross-run state on the
//! generator is `first_run`, which forces the initial write of the
//! instance's lifetime.

use crate::config::GeneratorConfig;
use crate::emit::{self, EmitError, GeneratedFile};
use crate::render::{self, Dialect};
use crate::route::{self, RouteDescriptor, RouteError};
use crate::scan::{self, ScanError};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("route error: {0}")]
    Route(#[from] RouteError),
    #[error("emit error: {0}")]
    Emit(#[from] EmitError),
}

/// Well-known locations inside a project, derived from its root.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    pub src_dir: PathBuf,
    pub pages_dir: PathBuf,
    pub router_dir: PathBuf,
}

impl ProjectPaths {
    pub fn new(project_root: &Path) -> Self {
        let src_dir = project_root.join("src");
        let pages_dir = src_dir.join("pages");
        let router_dir = src_dir.join("router");
        Self {
            src_dir,
            pages_dir,
            router_dir,
        }
    }
}

/// Everything one run produced: the assembled tree, the selected dialect,
/// and the emitted files with their write outcomes.
#[derive(Debug)]
pub struct RunReport {
    pub routes: Vec<RouteDescriptor>,
    pub dialect: Dialect,
    pub files: Vec<GeneratedFile>,
}

/// The route synthesizer. Construct once per build session; call [`run`]
/// before each compilation pass.
///
/// [`run`]: RouteGenerator::run
pub struct RouteGenerator {
    config: GeneratorConfig,
    first_run: bool,
}

impl RouteGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            first_run: true,
        }
    }

    /// Discovery, mapping and assembly without writing anything.
    ///
    /// Used by `run()` and by the read-only CLI commands (`routes`,
    /// `check`).
    pub fn route_tree(
        &self,
        paths: &ProjectPaths,
    ) -> Result<(Vec<RouteDescriptor>, Dialect), GenerateError> {
        let scan = scan::scan(&paths.pages_dir, &self.config.exclude_folders)?;
        let routes = route::routes_from_files(&scan.files, &paths.pages_dir)?;
        let tree = route::assemble(routes, &paths.src_dir);
        Ok((tree, Dialect::from_scan(scan.uses_typescript)))
    }

    /// One full synthesis pass over the project rooted at `project_root`.
    pub fn run(&mut self, project_root: &Path) -> Result<RunReport, GenerateError> {
        let paths = ProjectPaths::new(project_root);
        let (routes, dialect) = self.route_tree(&paths)?;

        let mut files = Vec::new();

        let table = render::render_route_table(&routes, dialect);
        files.push(emit::write_generated(
            &paths.router_dir,
            dialect.route_table_filename(),
            &table,
            self.first_run,
        )?);
        self.first_run = false;

        if !self.config.only_routes {
            let shell = render::render_router_shell(
                self.config.routing_mode,
                &self.config.index_path,
                dialect,
            );
            files.push(emit::write_generated(
                &paths.router_dir,
                dialect.router_shell_filename(),
                &shell,
                false,
            )?);
        }

        Ok(RunReport {
            routes,
            dialect,
            files,
        })
    }
}
