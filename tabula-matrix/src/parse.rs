//! Strict parser for the single-line matrix format
//!
//! Input is one line of bracketed rows joined by `", "`:
//!
//! ```text
//! [1 0 0], [0 1 0], [0 0 1]
//! ```
//!
//! Each row must match `"[" number (" " number)* "]"`, where a number is an
//! optional `-`, one or more ASCII digits, and an optional `.` followed by
//! one or more digits. Spacing is exact: one space between numbers, none
//! after `[` or before `]`.

use std::io::{self, BufRead};
use std::str::FromStr;
use std::sync::OnceLock;
use regex::Regex;
use tabula_core::{validate_shape, MatrixError, Result};
use crate::types::Matrix;

/// Separator between row tokens
const ROW_SEPARATOR: &str = ", ";

fn get_row_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\[-?[0-9]+(\.[0-9]+)?( -?[0-9]+(\.[0-9]+)?)*\]$").unwrap()
    })
}

/// Parse a matrix from one line of text
pub fn parse_matrix(line: &str) -> Result<Matrix> {
    let rows: Vec<&str> = line.split(ROW_SEPARATOR).collect();

    // Row grammar
    let regex = get_row_regex();
    for (i, row) in rows.iter().enumerate() {
        if !regex.is_match(row) {
            tracing::debug!(row = i, text = %row, "row does not match grammar");
            return Err(MatrixError::MalformedRow { row: i, text: row.to_string() });
        }
    }

    // Strip brackets; the grammar guarantees both are present
    let bodies: Vec<&str> = rows.iter().map(|row| &row[1..row.len() - 1]).collect();

    // Column consistency
    let cols = bodies.first().map_or(0, |body| body.split(' ').count());
    for (i, body) in bodies.iter().enumerate() {
        let found = body.split(' ').count();
        if found != cols {
            tracing::debug!(row = i, expected = cols, found, "column count differs");
            return Err(MatrixError::ColumnMismatch { row: i, expected: cols, found });
        }
    }

    // Value extraction
    let mut entries = Vec::with_capacity(bodies.len() * cols);
    for (i, body) in bodies.iter().enumerate() {
        for token in body.split(' ') {
            let val: f64 = token.parse().map_err(|_| MatrixError::MalformedRow {
                row: i,
                text: rows[i].to_string(),
            })?;
            entries.push(val);
        }
    }

    // Structural sanity check
    let shape = validate_shape(entries.len(), bodies.len(), cols).map_err(|_| {
        tracing::debug!(rows = bodies.len(), cols, "parsed rows do not form a matrix");
        MatrixError::MalformedRow { row: 0, text: line.to_string() }
    })?;

    tracing::trace!(%shape, "parsed matrix");
    Ok(Matrix::from_parts(entries, shape))
}

impl FromStr for Matrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        parse_matrix(s)
    }
}

impl Matrix {
    /// Replace this matrix with the one parsed from `line`.
    ///
    /// On failure the receiver is left unchanged.
    pub fn parse_into(&mut self, line: &str) -> Result<&mut Self> {
        let parsed = parse_matrix(line)?;
        *self = parsed;
        Ok(self)
    }

    /// Read exactly one line from `source` and parse it into this matrix.
    ///
    /// Only the line terminator (`\n` or `\r\n`) is stripped. End of input is
    /// reported as an `UnexpectedEof` I/O error.
    pub fn read_from<R: BufRead>(&mut self, source: &mut R) -> Result<&mut Self> {
        let mut line = String::new();
        let read = source.read_line(&mut line).map_err(|e| {
            tracing::debug!(error = %e, "failed to read matrix line");
            MatrixError::from(e)
        })?;
        if read == 0 {
            tracing::debug!("line source exhausted");
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no line to parse").into());
        }

        let line = line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(&line);
        self.parse_into(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tabula_core::Shape;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_parse_identity() {
        init_tracing();
        let m = parse_matrix("[1 0 0], [0 1 0], [0 0 1]").unwrap();
        assert_eq!(m.shape(), Shape::new(3, 3));
        assert_eq!(m, Matrix::identity(3).unwrap());
    }

    #[test]
    fn test_parse_decimals_and_negatives() {
        let m: Matrix = "[-1.5 2], [0.25 -10]".parse().unwrap();
        assert_eq!(m.as_slice(), &[-1.5, 2.0, 0.25, -10.0]);
    }

    #[test]
    fn test_parse_single_row_and_column() {
        let row = parse_matrix("[1 2 3 4]").unwrap();
        assert_eq!(row.shape(), Shape::new(1, 4));

        let col = parse_matrix("[1], [2], [3]").unwrap();
        assert_eq!(col.shape(), Shape::new(3, 1));
        assert_eq!(col.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_parse_malformed_rows() {
        init_tracing();
        let bad = [
            "[1.1.5]",
            "",
            "[]",
            "[1 2",
            "1 2]",
            "[1,2]",
            "[1  2]",
            "[ 1 2]",
            "[1 2 ]",
            "[1.]",
            "[.5]",
            "[+1]",
            "[1e5]",
            "[--1]",
            "[1 2],[3 4]",
            "[1 2],  [3 4]",
            "[1 2], [3 4], ",
            " [1 2]",
            "[1 2]\n",
            "[١]",
        ];
        for input in bad {
            assert!(
                matches!(parse_matrix(input), Err(MatrixError::MalformedRow { .. })),
                "expected MalformedRow for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_malformed_row_index() {
        match parse_matrix("[1 2], [3 4], [5 x]") {
            Err(MatrixError::MalformedRow { row, text }) => {
                assert_eq!(row, 2);
                assert_eq!(text, "[5 x]");
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_column_mismatch() {
        match parse_matrix("[-1 0 0], [-10 0]") {
            Err(MatrixError::ColumnMismatch { row, expected, found }) => {
                assert_eq!((row, expected, found), (1, 3, 2));
            }
            other => panic!("expected ColumnMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_grammar_checked_before_columns() {
        // Second row has both a grammar error and a different column count
        assert!(matches!(
            parse_matrix("[1 2 3], [4.4.4]"),
            Err(MatrixError::MalformedRow { row: 1, .. })
        ));
    }

    #[test]
    fn test_parse_negative_zero() {
        let m = parse_matrix("[-0 0]").unwrap();
        assert_eq!(m.to_string(), "[0 0]");
    }

    #[test]
    fn test_parse_into_replaces() {
        let mut m = Matrix::identity(2).unwrap();
        m.parse_into("[1 2 3], [4 5 6], [7 8 9]").unwrap();
        assert_eq!(m.shape(), Shape::new(3, 3));
        assert_eq!(m.get(2, 1), Some(8.0));
    }

    #[test]
    fn test_parse_into_failure_leaves_receiver() {
        let mut m = Matrix::identity(2).unwrap();
        assert!(m.parse_into("[1 2 3], [4 5]").is_err());
        assert!(m.parse_into("[1.1.5]").is_err());
        assert_eq!(m, Matrix::identity(2).unwrap());
    }

    #[test]
    fn test_read_from_consumes_one_line() {
        let mut source = Cursor::new("[1 2], [3 4]\n[5 6 7]\r\n");
        let mut m = Matrix::identity(1).unwrap();

        m.read_from(&mut source).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

        m.read_from(&mut source).unwrap();
        assert_eq!(m.shape(), Shape::new(1, 3));

        let err = m.read_from(&mut source).unwrap_err();
        match err {
            MatrixError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected Io, got {:?}", other),
        }
        assert_eq!(m.shape(), Shape::new(1, 3));
    }

    #[test]
    fn test_read_from_last_line_without_newline() {
        let mut source = Cursor::new("[9]");
        let mut m = Matrix::zeros(2, 2).unwrap();
        m.read_from(&mut source).unwrap();
        assert_eq!(m.as_slice(), &[9.0]);
    }
}
