use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use strmfix::walker::{matches_suffix, matching_files, traverse};
use tempfile::TempDir;

#[test]
fn test_traverse_finds_nested_files() {
    let td = TempDir::new().unwrap();
    let deep = td.path().join("l1/l2/l3");
    fs::create_dir_all(&deep).unwrap();

    let mut f = File::create(deep.join("deep.strm")).unwrap();
    write!(f, "https://example/deep.mp4").unwrap();
    File::create(td.path().join("top.txt")).unwrap();

    let mut files: Vec<PathBuf> = traverse(td.path()).map(Result::unwrap).collect();
    files.sort();
    assert_eq!(
        files,
        vec![deep.join("deep.strm"), td.path().join("top.txt")]
    );
}

#[test]
fn test_traverse_is_lazy() {
    let td = TempDir::new().unwrap();
    for i in 0..10 {
        File::create(td.path().join(format!("{}.strm", i))).unwrap();
    }

    let mut iter = traverse(td.path());
    assert!(iter.next().unwrap().is_ok());
    assert_eq!(iter.count(), 9);
}

#[test]
fn test_matching_files_uses_exact_suffix() {
    let td = TempDir::new().unwrap();
    for name in ["a.strm", "b.STRM", "c.strm.bak", "dstrm", "e.strm"] {
        File::create(td.path().join(name)).unwrap();
    }

    let mut names: Vec<String> = matching_files(td.path(), ".strm")
        .map(|item| item.unwrap().file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["a.strm", "e.strm"]);
}

#[test]
fn test_directory_named_like_suffix_is_not_a_match() {
    let td = TempDir::new().unwrap();
    let dir = td.path().join("folder.strm");
    fs::create_dir_all(&dir).unwrap();
    File::create(dir.join("inner.txt")).unwrap();

    assert!(matching_files(td.path(), ".strm").next().is_none());
    assert!(matches_suffix(&dir, ".strm"));
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_is_not_followed() {
    let td = TempDir::new().unwrap();
    let real = td.path().join("real");
    fs::create_dir_all(&real).unwrap();
    File::create(real.join("movie.strm")).unwrap();
    std::os::unix::fs::symlink(&real, td.path().join("alias")).unwrap();

    let files: Vec<PathBuf> = matching_files(td.path(), ".strm")
        .map(Result::unwrap)
        .collect();
    assert_eq!(files, vec![real.join("movie.strm")]);
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_is_yielded() {
    let td = TempDir::new().unwrap();
    let target = td.path().join("target.txt");
    File::create(&target).unwrap();
    std::os::unix::fs::symlink(&target, td.path().join("link.strm")).unwrap();

    let files: Vec<PathBuf> = matching_files(td.path(), ".strm")
        .map(Result::unwrap)
        .collect();
    assert_eq!(files, vec![td.path().join("link.strm")]);
}
