// util.rs

use std::io::Write;

/// Writes `prefix` + `s` + `\r\n`, so the line lands at column zero even when
/// the terminal is in raw mode.
pub fn write_crlf_ignore_broken_pipe<W: Write>(mut w: W, prefix: &str, s: &str) -> std::io::Result<()> {
    match write!(w, "{}{}\r\n", prefix, s).and_then(|_| w.flush()) {
        Err(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
