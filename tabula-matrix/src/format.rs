//! Text formatting in the canonical bracketed row format

use std::fmt;
use std::io::Write;
use serde::{Deserialize, Serialize};
use tabula_core::Result;
use crate::types::Matrix;

/// How rows are joined when rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// One row per line (the canonical encoding)
    #[default]
    Lines,
    /// All rows on one line separated by `", "` (the parser's input form)
    Inline,
}

impl Layout {
    fn row_separator(self) -> &'static str {
        match self {
            Layout::Lines => "\n",
            Layout::Inline => ", ",
        }
    }
}

/// Write one entry; zeros of either sign print as `0`.
fn write_entry(f: &mut impl fmt::Write, val: f64) -> fmt::Result {
    if val == 0.0 {
        f.write_char('0')
    } else {
        write!(f, "{}", val)
    }
}

fn write_rows(f: &mut impl fmt::Write, matrix: &Matrix, layout: Layout) -> fmt::Result {
    for (i, row) in matrix.iter_rows().enumerate() {
        if i > 0 {
            f.write_str(layout.row_separator())?;
        }
        f.write_char('[')?;
        for (j, &val) in row.iter().enumerate() {
            if j > 0 {
                f.write_char(' ')?;
            }
            write_entry(f, val)?;
        }
        f.write_char(']')?;
    }
    Ok(())
}

impl Matrix {
    /// Render with the given row layout
    pub fn render(&self, layout: Layout) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = write_rows(&mut out, self, layout);
        out
    }

    /// Write the canonical encoding to a line sink
    pub fn write_to<W: Write>(&self, sink: &mut W) -> Result<()> {
        if let Err(e) = write!(sink, "{}", self) {
            tracing::debug!(error = %e, shape = %self.shape(), "failed to write matrix");
            return Err(e.into());
        }
        Ok(())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self, Layout::Lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::MatrixError;

    #[test]
    fn test_display_identity() {
        let m = Matrix::identity(3).unwrap();
        assert_eq!(m.to_string(), "[1 0 0]\n[0 1 0]\n[0 0 1]");
    }

    #[test]
    fn test_display_decimals_and_negatives() {
        let m = Matrix::new(vec![1.5, -2.25, 100.0, -0.125], 2, 2).unwrap();
        assert_eq!(m.to_string(), "[1.5 -2.25]\n[100 -0.125]");
    }

    #[test]
    fn test_display_negative_zero() {
        let m = Matrix::new(vec![-0.0, 0.0, -1.0], 1, 3).unwrap();
        let s = m.to_string();
        assert_eq!(s, "[0 0 -1]");
        assert!(!s.contains("-0 ") && !s.contains("[-0"));
    }

    #[test]
    fn test_display_single_column() {
        let m = Matrix::new(vec![1.0, 2.0, 3.0], 3, 1).unwrap();
        assert_eq!(m.to_string(), "[1]\n[2]\n[3]");
    }

    #[test]
    fn test_render_inline() {
        let m = Matrix::new(vec![1.0, 0.0, 0.0, 1.0], 2, 2).unwrap();
        assert_eq!(m.render(Layout::Inline), "[1 0], [0 1]");
        assert_eq!(m.render(Layout::Lines), m.to_string());
        assert_eq!(Layout::default(), Layout::Lines);
    }

    #[test]
    fn test_write_to() {
        let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
        let mut sink = Vec::new();
        m.write_to(&mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "[1 2]\n[3 4]");
    }

    #[test]
    fn test_write_to_failing_sink() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let m = Matrix::identity(2).unwrap();
        assert!(matches!(m.write_to(&mut Broken), Err(MatrixError::Io(_))));
    }
}
