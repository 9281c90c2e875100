//! # Line Reader
//!
//! Reads one line at a time from any `BufRead` source: menu files at
//! startup, stdin during the session.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  source bytes          read_line() returns                              │
//! │  ────────────          ───────────────────                              │
//! │  "add A001 2\n" ─────► Some(Line { "add A001 2", terminated: true })    │
//! │  "\n"           ─────► Some(Line { "",           terminated: true })    │
//! │  "quit"  (EOF)  ─────► Some(Line { "quit",       terminated: false })   │
//! │  (EOF)          ─────► None                                             │
//! │                                                                         │
//! │  Never reads past the '\n' that ends the current line.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead};

/// One line of input, without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    /// False when the line was cut short by end of input.
    pub terminated: bool,
}

/// Line-at-a-time reader with an optional length cap.
#[derive(Debug)]
pub struct LineReader<R> {
    source: R,
    max_chars: Option<usize>,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(source: R) -> Self {
        LineReader {
            source,
            max_chars: None,
            buf: Vec::new(),
        }
    }

    /// Keeps at most `max` characters of each line. The rest of the line is
    /// still consumed.
    pub fn with_max_chars(mut self, max: usize) -> Self {
        self.max_chars = Some(max);
        self
    }

    /// Reads the next line, or `None` at end of input.
    ///
    /// A trailing `\r` is dropped along with the `\n`. Invalid UTF-8 is
    /// replaced, not rejected.
    pub fn read_line(&mut self) -> io::Result<Option<Line>> {
        self.buf.clear();
        if self.source.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }

        let terminated = self.buf.last() == Some(&b'\n');
        if terminated {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        let mut text = String::from_utf8_lossy(&self.buf).into_owned();
        if let Some(max) = self.max_chars {
            if let Some((cut, _)) = text.char_indices().nth(max) {
                text.truncate(cut);
            }
        }

        Ok(Some(Line { text, terminated }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader(input: &str) -> LineReader<Cursor<Vec<u8>>> {
        LineReader::new(Cursor::new(input.as_bytes().to_vec()))
    }

    fn line(text: &str, terminated: bool) -> Option<Line> {
        Some(Line {
            text: text.to_string(),
            terminated,
        })
    }

    #[test]
    fn test_reads_line_by_line() {
        let mut r = reader("first\n\nthird");
        assert_eq!(r.read_line().unwrap(), line("first", true));
        assert_eq!(r.read_line().unwrap(), line("", true));
        assert_eq!(r.read_line().unwrap(), line("third", false));
        assert_eq!(r.read_line().unwrap(), None);
        assert_eq!(r.read_line().unwrap(), None);
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(reader("").read_line().unwrap(), None);
    }

    #[test]
    fn test_strips_crlf() {
        let mut r = reader("A001 Drinks 150 Cola\r\nnext\n");
        assert_eq!(r.read_line().unwrap(), line("A001 Drinks 150 Cola", true));
        assert_eq!(r.read_line().unwrap(), line("next", true));
    }

    #[test]
    fn test_does_not_consume_past_line() {
        let mut source = Cursor::new(b"one\ntwo\n".to_vec());
        {
            let mut r = LineReader::new(&mut source);
            assert_eq!(r.read_line().unwrap(), line("one", true));
        }
        let mut rest = String::new();
        source.read_line(&mut rest).unwrap();
        assert_eq!(rest, "two\n");
    }

    #[test]
    fn test_max_chars_truncates_and_resyncs() {
        let mut r = reader("abcdefgh\nxy\n").with_max_chars(3);
        assert_eq!(r.read_line().unwrap(), line("abc", true));
        assert_eq!(r.read_line().unwrap(), line("xy", true));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut r = LineReader::new(Cursor::new(vec![b'a', 0xff, b'b', b'\n']));
        assert_eq!(r.read_line().unwrap(), line("a\u{fffd}b", true));
    }
}
