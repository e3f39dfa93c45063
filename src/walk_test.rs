use std::fs;

use tempfile::tempdir;

use super::*;

#[test]
fn single_file_returns_itself() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.txt");
    fs::write(&file, "hello").unwrap();

    let files = collect_files(&file).unwrap();
    assert_eq!(files, vec![file]);
}

#[test]
fn walks_nested_directories() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join("sub").join("b.txt"), "b").unwrap();

    let files = collect_files(dir.path()).unwrap();
    assert_eq!(files.len(), 2);
    assert!(files.iter().any(|p| p.ends_with("a.txt")));
    assert!(files.iter().any(|p| p.ends_with("sub/b.txt")));
}

#[test]
fn skips_git_directory() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".git")).unwrap();
    fs::write(dir.path().join(".git").join("HEAD"), "ref: refs/heads/main").unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();

    let files = collect_files(dir.path()).unwrap();
    assert_eq!(files, vec![dir.path().join("a.txt")]);
}

#[test]
fn result_is_sorted() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("z.txt"), "z").unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();

    let files = collect_files(dir.path()).unwrap();
    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
}
