use clap::{Parser, Subcommand};
use routegen::config::{self, RoutingMode};
use routegen::output;
use routegen::pipeline::{ProjectPaths, RouteGenerator};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "routegen")]
#[command(about = "Generate React Router sources from a pages directory")]
#[command(long_about = "\
Generate React Router sources from a pages directory

Your filesystem is the route table. Every source file under src/pages
becomes a route; adding a file adds a route.

Project structure:

  project/
  ├── routegen.toml                # Generator config (optional)
  └── src/
      ├── pages/                   # One route per file
      │   ├── index.tsx            # (root index — no route of its own)
      │   ├── about.tsx            # → /about.tsx
      │   ├── blog/
      │   │   ├── index.tsx        # → /blog
      │   │   └── post.tsx         # → /blog/post.tsx
      │   └── components/          # Excluded from discovery (default)
      ├── layouts/                 # Optional: wraps all routes when present
      └── router/                  # Generated output
          ├── routes.tsx           # Route table (getRoutes)
          └── index.tsx            # Router shell (AppRouter)

Route paths are lowercased; only index files drop their filename from the
path, and component references keep the on-disk casing.
Any .ts/.tsx file under src/pages switches output to the TypeScript
dialect. Writes are skipped when the generated content is unchanged, so
running before every compilation never retriggers the build loop.")]
#[command(version)]
struct Cli {
    /// Project root containing the src/ directory
    #[arg(long, default_value = ".", global = true)]
    project: PathBuf,

    /// Folder name to exclude from page discovery (repeatable; replaces
    /// the configured set)
    #[arg(long = "exclude", global = true)]
    exclude: Vec<String>,

    /// History strategy for the generated router shell
    #[arg(long, value_enum, global = true)]
    mode: Option<RoutingMode>,

    /// Generate only the route table, skip the router shell
    #[arg(long, global = true)]
    only_routes: bool,

    /// Redirect target of the catch-all wildcard route
    #[arg(long, global = true)]
    index_path: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: scan pages, build the tree, write router sources
    Generate,
    /// Print the assembled route tree as JSON without writing anything
    Routes,
    /// Validate the pages directory: discovery and mapping, no writes
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = config::load_config(&cli.project)?;
    if !cli.exclude.is_empty() {
        config.exclude_folders = cli.exclude.clone();
    }
    if let Some(mode) = cli.mode {
        config.routing_mode = mode;
    }
    if cli.only_routes {
        config.only_routes = true;
    }
    if let Some(index_path) = &cli.index_path {
        config.index_path = index_path.clone();
    }

    match cli.command {
        Command::Generate => {
            let mut generator = RouteGenerator::new(config);
            let report = generator.run(&cli.project)?;
            output::print_run_report(&report);
        }
        Command::Routes => {
            let generator = RouteGenerator::new(config);
            let paths = ProjectPaths::new(&cli.project);
            let (tree, _) = generator.route_tree(&paths)?;
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
        Command::Check => {
            let generator = RouteGenerator::new(config);
            let paths = ProjectPaths::new(&cli.project);
            let (tree, dialect) = generator.route_tree(&paths)?;
            output::print_check_output(&tree, dialect);
            println!("==> Pages are valid");
        }
    }

    Ok(())
}
