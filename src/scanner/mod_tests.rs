use std::fs;

use tempfile::TempDir;

use super::*;

fn write(dir: &TempDir, relative: &str, content: &str) {
    let path = dir.path().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn finds_matching_files_recursively() {
    let dir = TempDir::new().unwrap();
    write(&dir, "Program.cs", "");
    write(&dir, "nested/Helper.cs", "");
    write(&dir, "nested/notes.txt", "");

    let filter = GlobFilter::new(vec!["cs".to_string()], &[]).unwrap();
    let scanner = DirectoryScanner::new(filter);
    let files = scanner.scan(dir.path()).unwrap();

    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.extension().unwrap() == "cs"));
}

#[test]
fn excluded_directories_are_skipped() {
    let dir = TempDir::new().unwrap();
    write(&dir, "src/Program.cs", "");
    write(&dir, "obj/Generated.cs", "");

    let filter =
        GlobFilter::new(vec!["cs".to_string()], &["**/obj/**".to_string()]).unwrap();
    let scanner = DirectoryScanner::new(filter);
    let files = scanner.scan(dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("src/Program.cs"));
}

#[test]
fn scan_order_is_sorted() {
    let dir = TempDir::new().unwrap();
    write(&dir, "b/Two.cs", "");
    write(&dir, "a/One.cs", "");

    let filter = GlobFilter::new(vec!["cs".to_string()], &[]).unwrap();
    let scanner = DirectoryScanner::new(filter);
    let files = scanner.scan(dir.path()).unwrap();

    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
}

#[test]
fn empty_directory_yields_no_files() {
    let dir = TempDir::new().unwrap();

    let filter = GlobFilter::new(vec!["cs".to_string()], &[]).unwrap();
    let scanner = DirectoryScanner::new(filter);
    let files = scanner.scan(dir.path()).unwrap();

    assert!(files.is_empty());
}

#[test]
fn gitignore_scanner_still_applies_filter() {
    let dir = TempDir::new().unwrap();
    write(&dir, "Program.cs", "");
    write(&dir, "readme.md", "");

    let filter = GlobFilter::new(vec!["cs".to_string()], &[]).unwrap();
    let scanner = DirectoryScanner::with_gitignore(filter, true);
    let files = scanner.scan(dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("Program.cs"));
}
