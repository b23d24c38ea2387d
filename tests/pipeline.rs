//! End-to-end pipeline tests over real temp projects.
//!
//! Exercises the public API the way a host build tool would: construct a
//! generator, call `run()` before each "compilation", and inspect what
//! landed in `src/router`.

use routegen::config::{GeneratorConfig, RoutingMode};
use routegen::emit::WriteOutcome;
use routegen::pipeline::{ProjectPaths, RouteGenerator};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::TempDir;

fn page_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("src/pages")).unwrap();
    tmp
}

fn write_page(root: &Path, rel: &str) -> PathBuf {
    let path = root.join("src/pages").join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, "export default () => null;\n").unwrap();
    path
}

fn mtime(path: &Path) -> SystemTime {
    fs::metadata(path).unwrap().modified().unwrap()
}

#[test]
fn two_runs_are_byte_identical_and_second_touches_nothing() {
    let tmp = page_project();
    write_page(tmp.path(), "home.tsx");
    write_page(tmp.path(), "blog/index.tsx");
    write_page(tmp.path(), "blog/post.tsx");

    let mut generator = RouteGenerator::new(GeneratorConfig::default());
    generator.run(tmp.path()).unwrap();

    let routes_path = tmp.path().join("src/router/routes.tsx");
    let shell_path = tmp.path().join("src/router/index.tsx");
    let routes_before = fs::read_to_string(&routes_path).unwrap();
    let shell_before = fs::read_to_string(&shell_path).unwrap();
    let routes_stamp = mtime(&routes_path);
    let shell_stamp = mtime(&shell_path);

    let report = generator.run(tmp.path()).unwrap();

    assert!(
        report
            .files
            .iter()
            .all(|f| f.outcome == WriteOutcome::Unchanged)
    );
    assert_eq!(fs::read_to_string(&routes_path).unwrap(), routes_before);
    assert_eq!(fs::read_to_string(&shell_path).unwrap(), shell_before);
    assert_eq!(mtime(&routes_path), routes_stamp);
    assert_eq!(mtime(&shell_path), shell_stamp);
}

#[test]
fn fresh_instance_overwrites_identical_output_on_first_run() {
    let tmp = page_project();
    write_page(tmp.path(), "home.tsx");

    let mut first = RouteGenerator::new(GeneratorConfig::default());
    first.run(tmp.path()).unwrap();

    let mut second = RouteGenerator::new(GeneratorConfig::default());
    let report = second.run(tmp.path()).unwrap();
    assert_eq!(report.files[0].outcome, WriteOutcome::Written);
}

#[test]
fn generated_table_reflects_page_tree() {
    let tmp = page_project();
    write_page(tmp.path(), "about.tsx");
    write_page(tmp.path(), "blog/post.tsx");
    write_page(tmp.path(), "index.tsx");

    let mut generator = RouteGenerator::new(GeneratorConfig::default());
    let report = generator.run(tmp.path()).unwrap();

    let paths: Vec<&str> = report.routes.iter().map(|r| r.path.as_str()).collect();
    assert!(paths.contains(&"/about.tsx"));
    assert!(paths.contains(&"/blog/post.tsx"));
    // The root index collapses to an empty path and yields no route
    assert_eq!(report.routes.len(), 2);

    let table = fs::read_to_string(tmp.path().join("src/router/routes.tsx")).unwrap();
    assert!(table.contains("path: '/about.tsx',"));
    assert!(table.contains("'../pages/about.tsx'"));
    assert!(table.contains("webpackChunkName: \"src__pages__about\""));
}

#[test]
fn directory_index_and_same_named_page_coexist() {
    let tmp = page_project();
    write_page(tmp.path(), "foo.tsx");
    write_page(tmp.path(), "foo/index.tsx");

    let mut generator = RouteGenerator::new(GeneratorConfig::default());
    let report = generator.run(tmp.path()).unwrap();

    let mut paths: Vec<&str> = report.routes.iter().map(|r| r.path.as_str()).collect();
    paths.sort();
    assert_eq!(paths, vec!["/foo", "/foo.tsx"]);
}

#[test]
fn layouts_directory_nests_every_route_under_the_global_layout() {
    let tmp = page_project();
    fs::create_dir_all(tmp.path().join("src/layouts")).unwrap();
    write_page(tmp.path(), "a.tsx");
    write_page(tmp.path(), "b.tsx");

    let mut generator = RouteGenerator::new(GeneratorConfig::default());
    let report = generator.run(tmp.path()).unwrap();

    assert_eq!(report.routes.len(), 1);
    let root = &report.routes[0];
    assert_eq!(root.path, "/");
    assert_eq!(root.name, "@@global-layout");
    assert_eq!(root.children.len(), 2);

    let table = fs::read_to_string(tmp.path().join("src/router/routes.tsx")).unwrap();
    assert!(table.contains("name: '@@global-layout',"));
    assert!(table.contains("'@/layouts'"));
}

#[test]
fn single_typed_file_switches_whole_output_to_typescript() {
    let tmp = page_project();
    write_page(tmp.path(), "home.jsx");
    write_page(tmp.path(), "admin/settings.ts");

    let mut generator = RouteGenerator::new(GeneratorConfig::default());
    generator.run(tmp.path()).unwrap();

    let router = tmp.path().join("src/router");
    assert!(router.join("routes.tsx").exists());
    assert!(router.join("index.tsx").exists());
    assert!(!router.join("routes.jsx").exists());

    let shell = fs::read_to_string(router.join("index.tsx")).unwrap();
    assert!(shell.contains("interface IRoute {"));
}

#[test]
fn hash_mode_and_custom_index_path_flow_into_the_shell() {
    let tmp = page_project();
    write_page(tmp.path(), "home.tsx");

    let config = GeneratorConfig {
        routing_mode: RoutingMode::Hash,
        index_path: "/home".to_string(),
        ..GeneratorConfig::default()
    };
    let mut generator = RouteGenerator::new(config);
    generator.run(tmp.path()).unwrap();

    let shell = fs::read_to_string(tmp.path().join("src/router/index.tsx")).unwrap();
    assert!(shell.contains("import { HashRouter as Router"));
    assert_eq!(shell.matches("path=\"*\"").count(), 1);
    assert!(shell.contains("<Navigate to=\"/home\" />"));
}

#[test]
fn excluded_folders_never_become_routes() {
    let tmp = page_project();
    write_page(tmp.path(), "home.tsx");
    write_page(tmp.path(), "components/button.tsx");

    let generator = RouteGenerator::new(GeneratorConfig::default());
    let paths = ProjectPaths::new(tmp.path());
    let (tree, _) = generator.route_tree(&paths).unwrap();

    let route_paths: Vec<&str> = tree.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(route_paths, vec!["/home.tsx"]);
}

#[test]
fn editing_a_page_changes_only_the_route_table() {
    let tmp = page_project();
    write_page(tmp.path(), "home.tsx");

    let mut generator = RouteGenerator::new(GeneratorConfig::default());
    generator.run(tmp.path()).unwrap();

    write_page(tmp.path(), "pricing.tsx");
    let report = generator.run(tmp.path()).unwrap();

    // Table gains a route; shell depends only on config so it is unchanged.
    assert_eq!(report.files[0].outcome, WriteOutcome::Written);
    assert_eq!(report.files[1].outcome, WriteOutcome::Unchanged);
}
