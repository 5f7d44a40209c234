//! Integration tests for twig


use harness::{TestTree, run_twig};
use serde_json::{Value, json};

fn example_tree() -> TestTree {
    let tree = TestTree::new();
    tree.add_file("x.txt", "0123456789");
    tree.add_dir("b");
    tree
}

#[test]
fn test_basic_tree_output() {
    let tree = example_tree();

    let (stdout, _stderr, success) = run_twig(tree.path(), &[]);
    assert!(success, "twig should succeed");
    assert_eq!(stdout, "├── b/\n└── x.txt\n");
}

#[test]
fn test_directory_argument() {
    let tree = TestTree::new();
    tree.add_file("project/src/main.rs", "fn main() {}");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["project"]);
    assert!(success);
    assert_eq!(stdout, "└── src/\n    └── main.rs\n");
}

#[test]
fn test_show_size_adds_size_lines() {
    let tree = example_tree();

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-s"]);
    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "output: {}", stdout);
    assert_eq!(lines[0], "├── b/");
    assert!(lines[1].starts_with("    │    Size: "), "got: {}", lines[1]);
    assert!(lines[1].ends_with(" b"));
    assert_eq!(lines[2], "└── x.txt");
    assert_eq!(lines[3], "         Size: 10 b");
}

#[test]
fn test_depth_limit() {
    let tree = TestTree::new();
    tree.add_file("top.rs", "");
    tree.add_file("level1/mid.rs", "");
    tree.add_file("level1/level2/deep.rs", "");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-d", "1"]);
    assert!(success);
    assert!(stdout.contains("top.rs"), "should show top level");
    assert!(stdout.contains("mid.rs"), "should show depth 1");
    assert!(stdout.contains("level2/"), "should show depth 1 directory");
    assert!(!stdout.contains("deep.rs"), "should not show deep files: {}", stdout);
}

#[test]
fn test_depth_zero_lists_only_root_entries() {
    let tree = TestTree::new();
    tree.add_file("a/b.txt", "");
    tree.add_file("c.txt", "");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["--max-depth", "0"]);
    assert!(success);
    assert_eq!(stdout, "├── a/\n└── c.txt\n");
}

#[test]
fn test_directories_only() {
    let tree = TestTree::new();
    tree.add_file("file.rs", "");
    tree.add_file("subdir/nested.rs", "");
    tree.add_dir("subdir/inner");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-o"]);
    assert!(success);
    assert!(!stdout.contains(".rs"), "should not show files: {}", stdout);
    assert_eq!(stdout, "└── subdir/\n    └── inner/\n");
}

#[test]
fn test_json_output() {
    let tree = example_tree();

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-j"]);
    assert!(success);
    let parsed: Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed, json!({"b": {}, "x.txt": {}}));
    assert!(stdout.contains("\n    \"b\": {}"), "four-space indent: {}", stdout);
}

#[test]
fn test_json_with_sizes() {
    let tree = TestTree::new();
    tree.add_file("d/f.txt", "abc");
    tree.add_file("d/big.bin", &"x".repeat(10_000));

    let (stdout, _stderr, success) = run_twig(tree.path(), &["--json", "--show-size"]);
    assert!(success);
    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    let inode_len = std::fs::symlink_metadata(tree.path().join("d")).unwrap().len();
    assert_eq!(parsed["d"]["size"], json!(inode_len));
    assert_ne!(parsed["d"]["size"], json!(10_003));
    assert_eq!(parsed["d"]["f.txt"], json!({"size": 3}));
    assert_eq!(parsed["d"]["big.bin"], json!({"size": 10_000}));
}

#[test]
fn test_json_nested_schema() {
    let tree = TestTree::new();
    tree.add_file("d/f.txt", "");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-j", "--schema", "nested"]);
    assert!(success);
    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        parsed,
        json!({"d": {"type": "dir", "children": {"f.txt": {"type": "file"}}}})
    );
}

#[test]
fn test_schema_requires_json() {
    let tree = example_tree();
    let (_stdout, _stderr, success) = run_twig(tree.path(), &["--schema", "nested"]);
    assert!(!success, "--schema without --json should be rejected");
}

#[test]
fn test_json_dirs_only_with_depth() {
    let tree = TestTree::new();
    tree.add_file("a/b/c/file.txt", "");
    tree.add_file("top.txt", "");

    let (stdout, _stderr, success) = run_twig(tree.path(), &["-j", "-o", "-d", "1"]);
    assert!(success);
    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed, json!({"a": {"b": {}}}));
}

#[test]
fn test_color_always_marks_directories() {
    let tree = example_tree();
    let (stdout, _stderr, success) = run_twig(tree.path(), &["--color", "always"]);
    assert!(success);
    assert!(stdout.contains("\u{1b}["), "expected ANSI escapes: {:?}", stdout);
    assert!(stdout.contains("b/"));
}
