//! Integration tests for rewriting a whole directory tree

use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use strmfix::{rewrite_tree, RewriteConfig, RewriteStatistics};
use tempfile::tempdir;

const SEARCH: &str = "https://pan.510222.xyz";
const REPLACE: &str = "http://zuk.v2ns.eu.org:5244";

fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

fn run(config: &RewriteConfig) -> (Vec<String>, RewriteStatistics) {
    let mut out = Vec::new();
    let stats = rewrite_tree(config, &mut out).unwrap();
    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    (lines, stats)
}

#[test]
fn test_strm_url_is_rewritten() {
    let tmp = tempdir().unwrap();
    let video = write(tmp.path(), "a/video.strm", "https://pan.510222.xyz/x/y.mp4");

    let (lines, _) = run(&RewriteConfig::new(tmp.path(), SEARCH, REPLACE));

    assert_eq!(
        fs::read_to_string(&video).unwrap(),
        "http://zuk.v2ns.eu.org:5244/x/y.mp4"
    );
    assert_eq!(lines, vec![format!("Processed file: {}", video.display())]);
}

#[test]
fn test_other_suffixes_are_untouched() {
    let tmp = tempdir().unwrap();
    let readme = write(tmp.path(), "a/readme.txt", "https://pan.510222.xyz/x");

    let (lines, stats) = run(&RewriteConfig::new(tmp.path(), SEARCH, REPLACE));

    assert_eq!(fs::read_to_string(&readme).unwrap(), "https://pan.510222.xyz/x");
    assert!(lines.is_empty());
    assert_eq!(stats.files_processed, 0);
}

#[test]
fn test_nested_file_without_match_is_visited() {
    let tmp = tempdir().unwrap();
    let video = write(tmp.path(), "a/b/c/video.strm", "http://elsewhere/clip.mkv");

    let (lines, stats) = run(&RewriteConfig::new(tmp.path(), SEARCH, REPLACE));

    assert_eq!(lines, vec![format!("Processed file: {}", video.display())]);
    assert_eq!(fs::read_to_string(&video).unwrap(), "http://elsewhere/clip.mkv");
    assert_eq!(stats.files_processed, 1);
    assert_eq!(stats.files_changed, 0);
}

#[test]
fn test_tree_without_matches_completes_silently() {
    let tmp = tempdir().unwrap();
    write(tmp.path(), "docs/notes.md", "nothing");
    fs::create_dir_all(tmp.path().join("empty/deeper")).unwrap();

    let (lines, stats) = run(&RewriteConfig::new(tmp.path(), SEARCH, REPLACE));

    assert!(lines.is_empty());
    assert_eq!(stats.files_processed, 0);
    assert_eq!(stats.files_failed, 0);
}

#[test]
fn test_every_matching_file_is_visited_once() {
    let tmp = tempdir().unwrap();
    let mut expected = BTreeSet::new();
    for relative in [
        "top.strm",
        "a/one.strm",
        "a/b/two.strm",
        "a/b/c/d/e/three.strm",
        "z/four.strm",
    ] {
        expected.insert(write(tmp.path(), relative, "https://pan.510222.xyz/v.mp4"));
    }
    write(tmp.path(), "a/b/ignored.strm.txt", "https://pan.510222.xyz/v.mp4");

    let (lines, stats) = run(&RewriteConfig::new(tmp.path(), SEARCH, REPLACE));

    let visited: Vec<PathBuf> = lines
        .iter()
        .map(|line| PathBuf::from(line.strip_prefix("Processed file: ").unwrap()))
        .collect();
    let unique: BTreeSet<PathBuf> = visited.iter().cloned().collect();
    assert_eq!(visited.len(), unique.len());
    assert_eq!(unique, expected);
    assert_eq!(stats.files_processed, 5);
    assert_eq!(stats.replacements, 5);
}

#[test]
fn test_second_run_is_idempotent() {
    let tmp = tempdir().unwrap();
    let video = write(
        tmp.path(),
        "show/s01e01.strm",
        "https://pan.510222.xyz/a.mkv\nhttps://pan.510222.xyz/b.mkv\n",
    );
    let config = RewriteConfig::new(tmp.path(), SEARCH, REPLACE);

    run(&config);
    let once = fs::read_to_string(&video).unwrap();
    let (_, stats) = run(&config);
    let twice = fs::read_to_string(&video).unwrap();

    assert_eq!(once, twice);
    assert_eq!(stats.replacements, 0);
}

#[test]
fn test_shorter_content_truncates_file() {
    let tmp = tempdir().unwrap();
    let original = "https://pan.510222.xyz/".repeat(20);
    let video = write(tmp.path(), "long.strm", &original);

    let config = RewriteConfig::new(tmp.path(), "https://pan.510222.xyz/", "x");
    run(&config);

    assert_eq!(fs::read_to_string(&video).unwrap(), "x".repeat(20));
    assert_eq!(fs::metadata(&video).unwrap().len(), 20);
}

#[test]
fn test_longer_content_grows_file() {
    let tmp = tempdir().unwrap();
    let video = write(tmp.path(), "short.strm", "a-a-a");

    run(&RewriteConfig::new(tmp.path(), "a", "abc"));

    assert_eq!(fs::read_to_string(&video).unwrap(), "abc-abc-abc");
}

#[test]
fn test_custom_suffix_is_case_sensitive() {
    let tmp = tempdir().unwrap();
    let lower = write(tmp.path(), "list.m3u", "old");
    let upper = write(tmp.path(), "LIST.M3U", "old");

    let config = RewriteConfig::new(tmp.path(), "old", "new").with_suffix(".m3u");
    run(&config);

    assert_eq!(fs::read_to_string(&lower).unwrap(), "new");
    assert_eq!(fs::read_to_string(&upper).unwrap(), "old");
}

#[test]
fn test_file_over_limit_aborts_run() {
    let tmp = tempdir().unwrap();
    let big = write(tmp.path(), "big.strm", &"https://pan.510222.xyz/".repeat(100));

    let config = RewriteConfig::new(tmp.path(), SEARCH, REPLACE).with_max_file_size(Some(64));
    let err = rewrite_tree(&config, &mut Vec::<u8>::new()).unwrap_err();

    assert_eq!(err.path(), Some(big.as_path()));
    assert!(fs::read_to_string(&big).unwrap().starts_with(SEARCH));
}
