//! # Menu File Loader
//!
//! Fills a [`Menu`] from one or more menu files.
//!
//! ## Load Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  for each path (in argument order):                                     │
//! │                                                                         │
//! │    File::open ──── fails ──► MenuLoadError::Open     "Can't open file"  │
//! │        │                                                                │
//! │        ▼                                                                │
//! │    LineReader::read_line until None                                     │
//! │        │                                                                │
//! │        ├── blank line ──► skip                                          │
//! │        ├── parse_record ── fails ──► MenuLoadError::Invalid             │
//! │        └── Menu::insert ── duplicate ──► MenuLoadError::Invalid         │
//! │                                                                         │
//! │  Any error is fatal: the session never starts on a partial menu.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use kiosk_core::menu::{is_blank_record, parse_record};
use kiosk_core::{Menu, ValidationError};
use thiserror::Error;
use tracing::debug;

use crate::input::LineReader;

/// Fatal menu loading errors.
///
/// The `Display` text is the exact diagnostic printed on stderr; the
/// details are kept for logging.
#[derive(Debug, Error)]
pub enum MenuLoadError {
    #[error("Can't open file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid menu file: {}", path.display())]
    Invalid {
        path: PathBuf,
        /// 1-based line number of the offending record.
        line: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Can't read file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Loads every file into one new menu.
pub fn load_menu<P: AsRef<Path>>(paths: &[P]) -> Result<Menu, MenuLoadError> {
    let mut menu = Menu::new();
    for path in paths {
        load_menu_file(path.as_ref(), &mut menu)?;
    }
    Ok(menu)
}

/// Loads one menu file into `menu`, returning the number of items added.
pub fn load_menu_file(path: &Path, menu: &mut Menu) -> Result<usize, MenuLoadError> {
    let file = File::open(path).map_err(|source| MenuLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let added = load_menu_from(BufReader::new(file), path, menu)?;
    debug!(path = %path.display(), items = added, "Menu file loaded");
    Ok(added)
}

/// Loads menu records from any reader. `path` is only used in errors.
pub fn load_menu_from<R: BufRead>(
    reader: R,
    path: &Path,
    menu: &mut Menu,
) -> Result<usize, MenuLoadError> {
    let mut lines = LineReader::new(reader);
    let mut line_no = 0;
    let mut added = 0;

    while let Some(line) = lines.read_line().map_err(|source| MenuLoadError::Read {
        path: path.to_path_buf(),
        source,
    })? {
        line_no += 1;
        if is_blank_record(&line.text) {
            continue;
        }

        parse_record(&line.text)
            .and_then(|item| menu.insert(item))
            .map_err(|source| {
                debug!(
                    path = %path.display(),
                    line = line_no,
                    error = %source,
                    "Rejected menu record"
                );
                MenuLoadError::Invalid {
                    path: path.to_path_buf(),
                    line: line_no,
                    source,
                }
            })?;
        added += 1;
    }

    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn load(text: &str) -> Result<Menu, MenuLoadError> {
        let mut menu = Menu::new();
        load_menu_from(Cursor::new(text.as_bytes()), Path::new("test.txt"), &mut menu)?;
        Ok(menu)
    }

    #[test]
    fn test_loads_every_field() {
        let menu = load("A001 Drinks 150 Cola\nB001 Snacks 99 Potato Chips\n").unwrap();

        let chips = menu.find("B001").unwrap();
        assert_eq!(chips.name(), "Potato Chips");
        assert_eq!(chips.category(), "Snacks");
        assert_eq!(chips.cost().cents(), 99);
        assert_eq!(menu.len(), 2);
    }

    #[test]
    fn test_skips_blank_lines_and_missing_final_newline() {
        let menu = load("\nA001 Drinks 150 Cola\n\r\nB001 Snacks 99 Chips").unwrap();
        assert_eq!(menu.len(), 2);
    }

    #[test]
    fn test_whitespace_only_line_is_invalid() {
        let err = load("A001 Drinks 150 Cola\n   \t \nB001 Snacks 99 Chips\n").unwrap_err();
        match &err {
            MenuLoadError::Invalid { line, source, .. } => {
                assert_eq!(*line, 2);
                assert_eq!(*source, ValidationError::Required { field: "id" });
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "Invalid menu file: test.txt");
    }

    #[test]
    fn test_reports_line_number() {
        let err = load("A001 Drinks 150 Cola\n\nB01 Snacks 99 Chips\n").unwrap_err();
        match err {
            MenuLoadError::Invalid { line, path, .. } => {
                assert_eq!(line, 3);
                assert_eq!(path, PathBuf::from("test.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_id_is_invalid() {
        let err = load("A001 Drinks 150 Cola\nA001 Drinks 175 Root Beer\n").unwrap_err();
        assert!(matches!(
            err,
            MenuLoadError::Invalid {
                source: ValidationError::Duplicate { .. },
                ..
            }
        ));
        assert_eq!(err.to_string(), "Invalid menu file: test.txt");
    }

    #[test]
    fn test_missing_file() {
        let err = load_menu(&["/definitely/not/here/menu.txt"]).unwrap_err();
        assert!(matches!(err, MenuLoadError::Open { .. }));
        assert_eq!(
            err.to_string(),
            "Can't open file: /definitely/not/here/menu.txt"
        );
    }
}
