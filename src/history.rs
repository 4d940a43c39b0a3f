// history.rs

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::config::HistoryConfig;
use crate::error::HistoryError;

/// Bounded log of entered lines, backed by one file for the whole session.
///
/// Holds the `len` most recent lines; once full, every `add` drops the
/// oldest. Lines starting with a space are kept in memory but never
/// written by [`History::save`].
#[derive(Debug)]
pub struct History {
    capacity: usize,
    len: usize,
    cursor: usize,
    slots: Vec<String>,
    path: PathBuf,
    file: File,
}

impl History {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, HistoryError> {
        Self::with_config(path, &HistoryConfig::default())
    }

    pub fn with_capacity(path: impl AsRef<Path>, capacity: usize) -> Result<Self, HistoryError> {
        let config = HistoryConfig {
            capacity,
            ..HistoryConfig::default()
        };
        Self::with_config(path, &config)
    }

    pub fn with_config(path: impl AsRef<Path>, config: &HistoryConfig) -> Result<Self, HistoryError> {
        if config.capacity == 0 {
            return Err(HistoryError::Size(config.capacity));
        }
        let path = path.as_ref().to_path_buf();
        let file = open_history_file(&path, config.file_mode)?;
        Ok(Self {
            capacity: config.capacity,
            len: 0,
            cursor: 0,
            slots: vec![String::new(); config.capacity],
            path,
            file,
        })
    }

    pub fn add(&mut self, line: impl Into<String>) {
        self.slots[self.cursor] = line.into();
        self.cursor = (self.cursor + 1) % self.capacity;
        if self.len < self.capacity {
            self.len += 1;
        }
    }

    /// Reads every record of the file into the buffer. Call it once, right
    /// after opening, so the stored lines come before anything typed later.
    pub fn load(&mut self) -> Result<usize, HistoryError> {
        let mut reader = BufReader::new(self.file.try_clone()?);
        let mut buf = Vec::new();
        let mut count = 0;
        while reader.read_until(b'\n', &mut buf)? != 0 {
            let record = buf.strip_suffix(b"\n").unwrap_or(&buf);
            self.add(String::from_utf8_lossy(record));
            count += 1;
            buf.clear();
        }
        log::debug!("loaded {} history records from {}", count, self.path.display());
        Ok(count)
    }

    /// Rewrites the file with the persistable entries, oldest first, and
    /// closes it.
    ///
    /// A write error stops the loop; whatever was buffered is still flushed
    /// and the first error is returned.
    pub fn save(self) -> Result<(), HistoryError> {
        if let Err(e) = self.rewind() {
            log::error!("history.save: {}", e);
            return Err(e.into());
        }
        self.write_entries(BufWriter::new(&self.file))
    }

    fn rewind(&self) -> io::Result<()> {
        (&self.file).seek(SeekFrom::Start(0))?;
        self.file.set_len(0)
    }

    fn write_entries<W: Write>(&self, mut out: W) -> Result<(), HistoryError> {
        let mut result: Result<(), HistoryError> = Ok(());
        for line in self.iter() {
            if line.starts_with(' ') {
                continue;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Err(e) = writeln!(out, "{}", line) {
                log::error!("history.save: {}", e);
                result = Err(e.into());
                break;
            }
        }
        if let Err(e) = out.flush() {
            log::error!("history.save: {}", e);
            if result.is_ok() {
                result = Err(e.into());
            }
        }
        result
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The `n`th surviving entry, counting from the oldest.
    pub fn get(&self, n: usize) -> Option<&str> {
        if n >= self.len {
            return None;
        }
        Some(self.slots[(self.oldest() + n) % self.capacity].as_str())
    }

    /// Surviving entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.len).filter_map(move |n| self.get(n))
    }

    fn oldest(&self) -> usize {
        (self.cursor + self.capacity - self.len) % self.capacity
    }
}

#[cfg(unix)]
fn open_history_file(path: &Path, mode: u32) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .mode(mode)
        .open(path)
}

#[cfg(not(unix))]
fn open_history_file(path: &Path, _mode: u32) -> std::io::Result<File> {
    OpenOptions::new().read(true).write(true).create(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scratch(capacity: usize) -> (TempDir, History) {
        let dir = TempDir::new().unwrap();
        let h = History::with_capacity(dir.path().join("history"), capacity).unwrap();
        (dir, h)
    }

    #[test]
    fn zero_capacity_is_rejected_before_io() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history");
        let err = History::with_capacity(&path, 0).unwrap_err();
        assert!(matches!(err, HistoryError::Size(0)));
        assert!(!path.exists());
    }

    #[test]
    fn oldest_entries_are_overwritten() {
        let (_dir, mut h) = scratch(3);
        for line in ["a", "b", "c", "d"] {
            h.add(line);
        }
        assert_eq!(h.len(), 3);
        assert_eq!(h.iter().collect::<Vec<_>>(), ["b", "c", "d"]);
        assert_eq!(h.get(0), Some("b"));
        assert_eq!(h.get(3), None);
    }

    #[test]
    fn length_grows_until_capacity() {
        let (_dir, mut h) = scratch(4);
        assert!(h.is_empty());
        h.add("x");
        h.add("y");
        assert_eq!(h.len(), 2);
        assert_eq!(h.iter().collect::<Vec<_>>(), ["x", "y"]);
        for _ in 0..10 {
            h.add("z");
        }
        assert_eq!(h.len(), h.capacity());
    }

    #[test]
    fn save_skips_private_and_blank_lines() {
        let (dir, mut h) = scratch(8);
        for line in ["ok", " secret", "  ", ""] {
            h.add(line);
        }
        h.save().unwrap();
        let saved = std::fs::read_to_string(dir.path().join("history")).unwrap();
        assert_eq!(saved, "ok\n");
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history");
        std::fs::write(&path, "one\ntwo\nthree\nfour\n").unwrap();

        let mut h = History::with_capacity(&path, 2).unwrap();
        assert_eq!(h.load().unwrap(), 4);
        assert_eq!(h.iter().collect::<Vec<_>>(), ["three", "four"]);
        h.save().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "three\nfour\n");
    }

    #[test]
    fn load_keeps_unterminated_last_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history");
        std::fs::write(&path, "ls\ncd /tmp").unwrap();

        let mut h = History::open(&path).unwrap();
        h.load().unwrap();
        h.add("pwd");
        assert_eq!(h.iter().collect::<Vec<_>>(), ["ls", "cd /tmp", "pwd"]);
    }

    #[test]
    fn load_replaces_invalid_utf8_and_keeps_going() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history");
        std::fs::write(&path, b"good\n\xff\xfe\nafter\n").unwrap();

        let mut h = History::open(&path).unwrap();
        assert_eq!(h.load().unwrap(), 3);
        assert_eq!(h.get(0), Some("good"));
        assert_eq!(h.get(1), Some("\u{fffd}\u{fffd}"));
        assert_eq!(h.get(2), Some("after"));
    }

    #[test]
    fn load_larger_than_capacity_keeps_the_tail() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history");
        let body: String = (0..100).map(|i| format!("cmd {i}\n")).collect();
        std::fs::write(&path, body).unwrap();

        let mut h = History::with_capacity(&path, 2).unwrap();
        assert_eq!(h.load().unwrap(), 100);
        assert_eq!(h.iter().collect::<Vec<_>>(), ["cmd 98", "cmd 99"]);
    }

    /// Accepts `room` bytes, then fails every write.
    struct ShortWriter {
        data: Vec<u8>,
        room: usize,
        flushes: usize,
        fail_flush: bool,
    }

    impl ShortWriter {
        fn new(room: usize) -> Self {
            Self {
                data: Vec::new(),
                room,
                flushes: 0,
                fail_flush: false,
            }
        }
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.room == 0 {
                return Err(io::Error::new(io::ErrorKind::Other, "no space left"));
            }
            let n = buf.len().min(self.room);
            self.data.extend_from_slice(&buf[..n]);
            self.room -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            if self.fail_flush {
                return Err(io::Error::new(io::ErrorKind::Other, "flush failed"));
            }
            Ok(())
        }
    }

    #[test]
    fn write_failure_stops_early_but_still_flushes() {
        let (_dir, mut h) = scratch(4);
        for line in ["one", "two", "three"] {
            h.add(line);
        }
        let mut out = ShortWriter::new(6);
        let err = h.write_entries(&mut out).unwrap_err();

        assert!(matches!(&err, HistoryError::Io(e) if e.to_string() == "no space left"));
        assert_eq!(out.data, b"one\ntw");
        assert_eq!(out.flushes, 1);
    }

    #[test]
    fn flush_failure_is_reported() {
        let (_dir, mut h) = scratch(4);
        h.add("one");
        let mut out = ShortWriter::new(usize::MAX);
        out.fail_flush = true;
        let err = h.write_entries(&mut out).unwrap_err();

        assert!(matches!(&err, HistoryError::Io(e) if e.to_string() == "flush failed"));
        assert_eq!(out.data, b"one\n");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn rewind_failure_is_returned() {
        // /dev/full opens fine but cannot be truncated
        let mut h = History::open("/dev/full").unwrap();
        h.add("ok");
        assert!(matches!(h.save(), Err(HistoryError::Io(_))));
    }

    #[cfg(unix)]
    #[test]
    fn new_file_gets_configured_mode() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history");
        let _h = History::open(&path).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
