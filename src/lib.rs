//! # Routegen
//!
//! File-based route generation for React projects. Your filesystem is the
//! route table: every source file under `src/pages` becomes a reachable
//! route, and the hand-maintained router configuration disappears.
//!
//! # Architecture: Five-Stage Pipeline
//!
//! Routegen derives the router from the pages directory in five sequential
//! stages, each consuming the previous stage's full output:
//!
//! ```text
//! 1. Scan      src/pages/        →  page file list + dialect probe
//! 2. Map       page file         →  route descriptor (path, name, component)
//! 3. Assemble  descriptors       →  route tree (global layout wrap)
//! 4. Render    route tree        →  routes.{tsx,jsx} + index.{tsx,jsx} text
//! 5. Emit      generated text    →  src/router/ (write only on change)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Purity**: stages 2-4 are pure functions, so unit tests exercise the
//!   mapping and rendering logic without touching the filesystem.
//! - **Inspectability**: the assembled tree serializes to JSON (`routegen
//!   routes`), so you can see exactly what will be generated before writing.
//! - **Idempotence**: the emit stage compares proposed content against what
//!   is on disk and skips identical writes. Generation runs before every
//!   compilation pass; without this guard each pass would touch the output
//!   files and retrigger the host build loop indefinitely.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks `src/pages`, filters page sources, probes the dialect |
//! | [`route`] | Stages 2-3 — file path → route descriptor, global layout assembly |
//! | [`render`] | Stage 4 — route tree → route table and router shell sources |
//! | [`emit`] | Stage 5 — idempotent writes into `src/router` |
//! | [`pipeline`] | Ties the stages together behind [`pipeline::RouteGenerator::run`] |
//! | [`config`] | `routegen.toml` loading and generator options |
//! | [`output`] | CLI output formatting — tree display of routes and write outcomes |
//!
//! # Design Decisions
//!
//! ## Filesystem Order Is Route Order
//!
//! Discovery walks the pages directory depth-first in the order the
//! filesystem enumerates entries, and that order flows unchanged into the
//! generated table. No resorting happens anywhere in the pipeline, so for an
//! unchanged tree two runs produce byte-identical output.
//!
//! ## Duplicate Routes Fail Fast
//!
//! Two files can collapse onto the same route path (case-only differences,
//! or `foo/index.tsx` next to `foo/index.jsx`). Rather than letting
//! discovery order silently pick a winner, mapping stops with an error
//! naming both files. A route table where one of your pages is unreachable is a bug you
//! want at build time, not in production.
//!
//! ## Dialect Follows the Corpus
//!
//! A single `.ts`/`.tsx` file anywhere under `src/pages` switches both
//! generated files to the TypeScript template and `.tsx` extension. Mixed
//! projects get one consistent output dialect instead of per-file guessing.

pub mod config;
pub mod emit;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod route;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
