//! Directory reports over temporary trees.

use std::fs;

use reportree::Location;
use reportree_render::{parse, BorderStyle};
use tempfile::TempDir;
use tree_report::commands::{dir_report, name_filter, render, DirOptions};

// ============================================================================
// Test helpers
// ============================================================================

/// ```text
/// a.txt
/// empty/
/// src/lib.rs
/// src/main.rs
/// ```
fn sample_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::create_dir(dir.path().join("empty")).unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/main.rs"), "fn main() {}").unwrap();
    fs::write(dir.path().join("src/lib.rs"), "").unwrap();
    dir
}

fn options(max_depth: usize, header: bool) -> DirOptions {
    DirOptions {
        max_depth,
        header,
        filter: None,
    }
}

// ============================================================================
// Reports
// ============================================================================

#[test]
fn renders_nested_tree_with_header() {
    let dir = sample_tree();
    let column = dir_report(dir.path(), &options(2, true)).unwrap();

    assert_eq!(
        render(&column, BorderStyle::Light),
        "┌───┬───────┬──────┬────────────────────┐\n\
         │ # │ name  │ kind │ contents           │\n\
         ├───┼───────┼──────┼────────────────────┤\n\
         │ 1 │ a.txt │ file │ ┌┐                 │\n\
         │   │       │      │ └┘                 │\n\
         ├───┼───────┼──────┼────────────────────┤\n\
         │ 2 │ empty │ dir  │ ┌┐                 │\n\
         │   │       │      │ └┘                 │\n\
         ├───┼───────┼──────┼────────────────────┤\n\
         │ 3 │ src   │ dir  │ ┌─────────┬──────┐ │\n\
         │   │       │      │ │ lib.rs  │ file │ │\n\
         │   │       │      │ ├─────────┼──────┤ │\n\
         │   │       │      │ │ main.rs │ file │ │\n\
         │   │       │      │ └─────────┴──────┘ │\n\
         └───┴───────┴──────┴────────────────────┘"
    );
}

#[test]
fn depth_one_lists_only_children() {
    let dir = sample_tree();
    let column = dir_report(dir.path(), &options(1, false)).unwrap();

    let rows = column.as_rows().unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|row| row.len() == 3));
    assert_eq!(column.leaf_at(&Location::root().nest(2, 1)).unwrap(), "src");
    assert_eq!(column.leaf_at(&Location::root().nest(2, 2)).unwrap(), "dir");
}

#[test]
fn filter_numbers_only_accepted_entries() {
    let dir = sample_tree();
    let mut options = options(1, false);
    options.filter = Some(name_filter("ne:empty").unwrap());

    let column = dir_report(dir.path(), &options).unwrap();
    assert_eq!(
        render(&column, BorderStyle::Ascii),
        "+---+-------+------+\n\
         | 1 | a.txt | file |\n\
         +---+-------+------+\n\
         | 2 | src   | dir  |\n\
         +---+-------+------+"
    );
}

#[test]
fn filter_hides_subtrees_of_rejected_directories() {
    let dir = sample_tree();
    let mut options = options(3, false);
    options.filter = Some(name_filter("ends-with:.rs").unwrap());

    let column = dir_report(dir.path(), &options).unwrap();
    assert_eq!(render(&column, BorderStyle::Light), "┌┐\n└┘");
}

#[test]
fn empty_directory_without_header() {
    let dir = TempDir::new().unwrap();
    let column = dir_report(dir.path(), &options(2, false)).unwrap();
    assert!(column.as_rows().unwrap().is_empty());
}

#[test]
fn reports_read_back_in_every_style() {
    let dir = sample_tree();
    let column = dir_report(dir.path(), &options(3, true)).unwrap();

    for style in BorderStyle::ALL {
        assert_eq!(parse(&render(&column, style)).unwrap(), column, "style {style}");
    }
}

#[test]
fn json_dump_shape() {
    let dir = sample_tree();
    let column = dir_report(dir.path(), &options(2, false)).unwrap();

    let json = serde_json::to_value(&column).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            ["1", "a.txt", "file", []],
            ["2", "empty", "dir", []],
            ["3", "src", "dir", [["lib.rs", "file"], ["main.rs", "file"]]],
        ])
    );
}

#[test]
fn rejects_files_and_missing_paths() {
    let dir = sample_tree();

    let err = dir_report(&dir.path().join("a.txt"), &options(1, false)).unwrap_err();
    assert!(err.to_string().ends_with("is not a directory"));

    let err = dir_report(&dir.path().join("missing"), &options(1, false)).unwrap_err();
    assert!(err.to_string().starts_with("cannot open"));
}
