use std::io::BufRead;

use crate::foundation::core::Coordinate;
use crate::foundation::error::{DlavidError, DlavidResult};

/// Parse one `"<int>, <int>"` line. Whitespace around either token is ignored.
///
/// `line_no` is only used to label errors.
pub fn parse_coordinate(line: &str, line_no: usize) -> DlavidResult<Coordinate> {
    let mut tokens = line.split(',');
    let (Some(x), Some(y), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(DlavidError::parse(
            line_no,
            format!("expected exactly two comma-separated integers, got '{}'", line.trim()),
        ));
    };

    let parse = |tok: &str, axis: &str| {
        let tok = tok.trim();
        tok.parse::<i64>().map_err(|e| {
            DlavidError::parse(line_no, format!("invalid {axis} component '{tok}': {e}"))
        })
    };

    Ok(Coordinate::new(parse(x, "x")?, parse(y, "y")?))
}

/// Lazy, single-pass stream of coordinates read from a text source.
///
/// Blank lines are skipped. The iterator yields the first parse or IO error it hits;
/// callers are expected to stop there.
pub struct CoordinateReader<R> {
    source: R,
    line_no: usize,
    buf: String,
}

impl<R: BufRead> CoordinateReader<R> {
    /// Wrap a buffered text source.
    pub fn new(source: R) -> Self {
        Self {
            source,
            line_no: 0,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> Iterator for CoordinateReader<R> {
    type Item = DlavidResult<Coordinate>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.source.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }
            self.line_no += 1;

            if self.buf.trim().is_empty() {
                continue;
            }
            return Some(parse_coordinate(&self.buf, self.line_no));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/reader.rs"]
mod tests;
