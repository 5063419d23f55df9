use std::io::{self, Write};

/// Writes `msg` followed by a newline to standard error.
///
/// Write failures are ignored; the caller gets no error back.
pub fn say(msg: &str) {
    let _ = try_say(msg);
}

/// Like [`say`], but reports write failures.
pub fn try_say(msg: &str) -> io::Result<()> {
    let mut stderr = io::stderr().lock();
    say_to(&mut stderr, msg)
}

/// Writes `msg` followed by a newline to `out`, then flushes.
///
/// The message is written verbatim; embedded newlines are not escaped.
pub fn say_to<W: Write + ?Sized>(out: &mut W, msg: &str) -> io::Result<()> {
    out.write_all(msg.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_single_newline() {
        let mut buf = Vec::new();
        say_to(&mut buf, "hello").unwrap();
        assert_eq!(buf, b"hello\n");
    }

    #[test]
    fn test_empty_message() {
        let mut buf = Vec::new();
        say_to(&mut buf, "").unwrap();
        assert_eq!(buf, b"\n");
    }

    #[test]
    fn test_embedded_newline_is_kept() {
        let mut buf = Vec::new();
        say_to(&mut buf, "line1\nline2").unwrap();
        assert_eq!(buf, b"line1\nline2\n");
    }

    #[test]
    fn test_say_does_not_panic() {
        say("");
        say("from the unit tests");
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_say_to_reports_write_failure() {
        let err = say_to(&mut Closed, "lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
