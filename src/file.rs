// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Targets listed in a comma-separated file.
//!
//! Each row holds `address[,password[,alias]]`. Rows with any other number
//! of fields are ignored.

use std::{fs::File, io, path::Path};

use tracing::debug;

use crate::{
    error::{self, CsvError, Error},
    target::TargetSet
};

/// Loads targets from the comma-separated file at `path`.
///
/// The whole file is decoded before any row is interpreted, so a decoding
/// failure never yields a partial result. The file handle is released on
/// every return path.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be opened and [`Error::Parse`]
/// when the contents are not valid CSV.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use redis_discovery::load_redis_file;
///
/// # fn example() -> Result<(), redis_discovery::Error> {
/// let set = load_redis_file(Path::new("/etc/redis_exporter/targets.csv"))?;
/// println!("loaded {} targets", set.len());
/// # Ok(())
/// # }
/// ```
pub fn load_redis_file(path: &Path) -> Result<TargetSet, Error> {
    let file = File::open(path).map_err(|source| error::io_error(path, source))?;
    let set = parse_redis_csv(file).map_err(|source| error::parse_error(path, source))?;
    debug!("loaded {} targets from {}", set.len(), path.display());
    Ok(set)
}

/// Interprets comma-separated rows read from `reader`.
///
/// Quoting follows RFC 4180: a quote may only open a field, close it, or be
/// doubled inside a quoted field.
///
/// # Errors
///
/// Returns [`CsvError::Quote`] for malformed quoting and
/// [`CsvError::Decode`] when the input cannot be read or is not UTF-8.
pub fn parse_redis_csv<R: io::Read>(mut reader: R) -> Result<TargetSet, CsvError> {
    let mut contents = Vec::new();
    reader
        .read_to_end(&mut contents)
        .map_err(csv::Error::from)?;
    check_quoting(&contents)?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(contents.as_slice());

    let records = csv_reader
        .records()
        .collect::<Result<Vec<csv::StringRecord>, csv::Error>>()?;

    let mut set = TargetSet::new();
    for record in &records {
        match record.len() {
            3 => set.push(&record[0], &record[1], &record[2]),
            2 => set.push(&record[0], &record[1], ""),
            1 => set.push(&record[0], "", ""),
            skipped => debug!("skipping row with {skipped} fields")
        }
    }

    Ok(set)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    Start,
    Unquoted,
    Quoted,
    QuoteInQuoted
}

/// Rejects input the CSV reader would otherwise accept leniently.
fn check_quoting(contents: &[u8]) -> Result<(), CsvError> {
    let mut state = Field::Start;
    let mut line = 1u64;

    for &byte in contents {
        state = match (state, byte) {
            (Field::Quoted, b'"') => Field::QuoteInQuoted,
            (Field::Quoted, _) => Field::Quoted,
            (Field::QuoteInQuoted, b'"') => Field::Quoted,
            (Field::Start, b'"') => Field::Quoted,
            (Field::Unquoted, b'"') => {
                return Err(CsvError::Quote {
                    line,
                    reason: "bare quote in unquoted field"
                });
            }
            (_, b',') => Field::Start,
            (_, b'\n') => Field::Start,
            (Field::QuoteInQuoted, b'\r') => Field::Unquoted,
            (Field::QuoteInQuoted, _) => {
                return Err(CsvError::Quote {
                    line,
                    reason: "unexpected text after closing quote"
                });
            }
            (_, _) => Field::Unquoted
        };
        if byte == b'\n' {
            line += 1;
        }
    }

    if state == Field::Quoted {
        return Err(CsvError::Quote {
            line,
            reason: "unterminated quoted field"
        });
    }
    Ok(())
}
