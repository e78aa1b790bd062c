//! Text format for lists of intervals: one interval per line, written in the
//! usual notation, e.g.
//! ```text
//! [1, 3)
//! (4, 8.5]
//! ```
//! Blank lines are ignored.

use crate::errors::{Error, Result};
use crate::intervals::Interval;
use crate::numeric_sets::NumericSet;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Read all intervals, in the order they appear.
/// Lines that denote an empty interval (like `(3, 3)`) are skipped.  Any
/// other malformed line aborts the whole read.
pub fn read_intervals<T, R>(reader: R) -> Result<Vec<Interval<T>>>
where
    T: PartialOrd + Copy + FromStr,
    R: BufRead,
{
    let mut result = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Interval<T>>() {
            Ok(interval) => result.push(interval),
            Err(Error::Empty(content)) => {
                log::warn!("line {}: skipping empty interval {content}", idx + 1);
            }
            Err(e) => {
                return Err(Error::Parse {
                    line: idx + 1,
                    content: line,
                    source: Box::new(e),
                });
            }
        }
    }
    Ok(result)
}

/// Write one interval per line, each followed by a newline.
pub fn write_intervals<'a, T, W, I>(writer: W, intervals: I) -> Result<()>
where
    T: Display + 'a,
    W: Write,
    I: IntoIterator<Item = &'a Interval<T>>,
{
    let mut buf = BufWriter::new(writer);
    for interval in intervals {
        writeln!(buf, "{interval}")?;
    }
    buf.flush()?;
    Ok(())
}

impl<T: PartialOrd + Copy + FromStr> NumericSet<T> {
    /// Load a set from a file.  The intervals in the file do not need to be
    /// sorted or disjoint.
    pub fn read(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let intervals = read_intervals(BufReader::new(file))?;
        log::debug!("read {} interval(s) from {}", intervals.len(), path.display());
        Ok(intervals.into_iter().collect())
    }
}

impl<T: Display> NumericSet<T> {
    /// Save the set to a file, one interval per line in ascending order.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        write_intervals(file, self.intervals())?;
        log::debug!("saved {} interval(s) to {}", self.len(), path.display());
        Ok(())
    }
}
