use askline::{History, HistoryConfig, HistoryError};
use tempfile::TempDir;

#[test]
fn saved_lines_come_back_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history");
    let lines = ["cargo build", "git status", "ls -la", "echo hi"];

    let mut h = History::with_capacity(&path, 5).unwrap();
    for line in lines {
        h.add(line);
    }
    h.save().unwrap();

    let mut fresh = History::with_capacity(&path, 5).unwrap();
    assert_eq!(fresh.load().unwrap(), lines.len());
    assert_eq!(fresh.iter().collect::<Vec<_>>(), lines);
}

#[test]
fn loaded_lines_are_oldest_after_new_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history");
    std::fs::write(&path, "first\nsecond\n").unwrap();

    let mut h = History::with_capacity(&path, 3).unwrap();
    h.load().unwrap();
    h.add("third");
    h.add("fourth");
    assert_eq!(h.iter().collect::<Vec<_>>(), ["second", "third", "fourth"]);
    h.save().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "second\nthird\nfourth\n");
}

#[test]
fn saved_lines_are_trimmed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history");
    let mut h = History::open(&path).unwrap();
    h.add("make test\t");
    h.add("\tgrep foo");
    h.save().unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "make test\ngrep foo\n");
}

#[test]
fn zero_capacity_config_is_a_size_error() {
    let dir = TempDir::new().unwrap();
    let config = HistoryConfig {
        capacity: 0,
        ..HistoryConfig::default()
    };
    let err = History::with_config(dir.path().join("history"), &config).unwrap_err();
    assert!(matches!(err, HistoryError::Size(0)));
}

#[test]
fn unreadable_path_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    // a directory cannot be opened for writing
    let err = History::open(dir.path()).unwrap_err();
    assert!(matches!(err, HistoryError::Io(_)));
}
