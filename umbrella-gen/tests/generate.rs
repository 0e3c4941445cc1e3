//! Pipeline tests: build a header tree in a temp dir, generate, check the
//! include list.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use umbrella_gen::config::Config;
use umbrella_gen::layout::Layout;
use umbrella_gen::sort::SortPolicy;

fn tree(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::create_dir_all(dir.path().join("include/RE")).unwrap();
    for rel in files {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "#pragma once\n").unwrap();
    }
    dir
}

fn includes(root: &Path, cfg: &Config) -> Vec<String> {
    let layout = Layout::from_root(root, cfg).expect("resolve layout");
    umbrella_gen::generate(&layout, cfg)
        .expect("generate")
        .includes()
        .iter()
        .map(|p| p.to_string())
        .collect()
}

fn with_sort(sort: SortPolicy) -> Config {
    Config {
        sort,
        ..Config::default()
    }
}

#[cfg(target_os = "linux")]
#[test]
fn example_tree_lexicographic() {
    let dir = tree(&[
        "include/RE/Foo.h",
        "include/RE/Bar/Baz.h",
        "include/RE/bar/Qux.h",
    ]);
    assert_eq!(
        includes(dir.path(), &with_sort(SortPolicy::Lexicographic)),
        ["RE/Bar/Baz.h", "RE/Foo.h", "RE/bar/Qux.h"]
    );
}

#[cfg(target_os = "linux")]
#[test]
fn example_tree_depth_first() {
    let dir = tree(&[
        "include/RE/Foo.h",
        "include/RE/Bar/Baz.h",
        "include/RE/bar/Qux.h",
    ]);
    assert_eq!(
        includes(dir.path(), &with_sort(SortPolicy::DepthFirst)),
        ["RE/Foo.h", "RE/Bar/Baz.h", "RE/bar/Qux.h"]
    );
}

#[test]
fn depth_first_shallow_before_deep() {
    let dir = tree(&["include/RE/A/B.h", "include/RE/AA.h"]);
    assert_eq!(
        includes(dir.path(), &with_sort(SortPolicy::DepthFirst)),
        ["RE/AA.h", "RE/A/B.h"]
    );
    assert_eq!(
        includes(dir.path(), &with_sort(SortPolicy::Lexicographic)),
        ["RE/A/B.h", "RE/AA.h"]
    );
}

#[test]
fn every_header_listed_once() {
    let files = [
        "include/RE/A.h",
        "include/RE/B/C.h",
        "include/RE/B/D/E.h",
        "include/RE/F/G.h",
        "include/RE/F/H.h",
    ];
    let dir = tree(&files);
    let listed = includes(dir.path(), &Config::default());
    assert_eq!(listed.len(), files.len());
    for f in files {
        let rel = f.strip_prefix("include/").unwrap();
        assert_eq!(listed.iter().filter(|l| *l == rel).count(), 1, "{rel}");
    }
}

#[test]
fn umbrella_header_excluded_from_itself() {
    for sort in [SortPolicy::Lexicographic, SortPolicy::DepthFirst] {
        let dir = tree(&["include/RE/Actor.h", "include/RE/Skyrim.h", "include/RE/Z/Skyrim.h"]);
        let listed = includes(dir.path(), &with_sort(sort));
        assert_eq!(listed.len(), 2, "{sort:?}");
        assert!(!listed.contains(&"RE/Skyrim.h".to_string()), "{sort:?}");
        assert!(listed.contains(&"RE/Z/Skyrim.h".to_string()), "{sort:?}");
    }
}

#[test]
fn empty_tree_writes_guard_only() {
    let dir = tree(&[]);
    let exe = dir.path().join("umbrella-gen");
    let written = umbrella_gen::run_with_config(&exe, &Config::default()).unwrap();
    assert_eq!(written, dir.path().join("include").join("RE").join("Skyrim.h"));
    assert_eq!(fs::read_to_string(&written).unwrap(), "#pragma once\n\n");
}

#[test]
fn run_writes_sorted_includes() {
    let dir = tree(&["include/RE/Z.h", "include/RE/M/N.h", "include/RE/A.h"]);
    let exe = dir.path().join("umbrella-gen");
    let written = umbrella_gen::run(&exe).unwrap();
    assert_eq!(
        fs::read_to_string(written).unwrap(),
        "#pragma once\n\n\
         #include \"RE/A.h\"\n\
         #include \"RE/M/N.h\"\n\
         #include \"RE/Z.h\"\n"
    );
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tree(&[
        "include/RE/b.h",
        "include/RE/a/x.h",
        "include/RE/C.h",
        "include/RE/a/Y.h",
    ]);
    let exe = dir.path().join("umbrella-gen");
    let first = fs::read(umbrella_gen::run(&exe).unwrap()).unwrap();
    let second = fs::read(umbrella_gen::run(&exe).unwrap()).unwrap();
    assert_eq!(first, second);
    // The second run sees the first run's output and must still leave it out.
    assert!(!String::from_utf8(second).unwrap().contains("Skyrim.h"));
}

#[test]
fn config_file_next_to_executable_is_honored() {
    let dir = tree(&["include/RE/A/B.h", "include/RE/AA.h"]);
    fs::write(
        dir.path().join("umbrella-gen.toml"),
        "sort = \"depth-first\"\noutput = \"All.h\"\nguard = \"#pragma once // generated\"\n",
    )
    .unwrap();

    let written = umbrella_gen::run(&dir.path().join("umbrella-gen")).unwrap();
    assert_eq!(written, dir.path().join("include").join("RE").join("All.h"));
    assert_eq!(
        fs::read_to_string(written).unwrap(),
        "#pragma once // generated\n\n\
         #include \"RE/AA.h\"\n\
         #include \"RE/A/B.h\"\n"
    );
}

#[test]
fn missing_include_dir_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("RE")).unwrap();
    let err = umbrella_gen::run(&dir.path().join("umbrella-gen")).unwrap_err();
    assert!(matches!(err, umbrella_gen::Error::MissingDirectory { .. }), "{err:?}");
    assert!(!dir.path().join("include").exists());
    assert!(!dir.path().join("RE/Skyrim.h").exists());
}
