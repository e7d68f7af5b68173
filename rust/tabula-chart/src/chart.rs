//! Fixed-width tabular layout of paired X/Y values.
//!
//! A [`Chart`] tiles `n` (x, y) pairs into a grid of `rows` x `columns`
//! tiles, each tile being an X cell followed by a Y cell. Values fill down
//! each column before moving to the next one, so the pair at flat index
//! `idx` lands in row `idx % rows`, column `idx / rows`:
//!
//! ```text
//! +--+---+--+---+
//! | 1|  1| 4| 16|
//! | 2|  4| 5| 25|
//! | 3|  9|  |   |
//! +--+---+--+---+
//! ```
//!
//! Tiles past the last value render as blanks of the column width.

use std::{
    fmt,
    io::{self, Write},
};

use itertools::Itertools;
use tabula_common::{Result, error::Error, verify_arg};
use tabula_sequence::Sequence;

use crate::options::ChartOptions;

/// Formatted text of one (x, y) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Cell {
    x: String,
    y: String,
}

/// An immutable, fully formatted chart, ready to render.
#[derive(Debug, Clone)]
pub struct Chart {
    rows: usize,
    columns: usize,
    x_width: usize,
    y_width: usize,
    border: String,
    cells: Vec<Cell>,
}

impl Chart {
    /// Builds a chart over `xs` and `ys`.
    ///
    /// Every value is formatted once here; column widths are the widest X
    /// and widest Y text across the whole data set, not per tile.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `xs` and `ys` differ in length.
    /// - `InvalidFormat` if a configured format does not apply to a value.
    /// - Any error either sequence reports for an index below its length.
    pub fn new(xs: &dyn Sequence, ys: &dyn Sequence, options: &ChartOptions) -> Result<Chart> {
        verify_arg!(ys, xs.len() == ys.len());

        let (rows, columns) = options.dimensions(xs.len());
        let cells = xs
            .iter_values()
            .zip(ys.iter_values())
            .map(|(x, y)| {
                Ok(Cell {
                    x: options.x_format.format(&x?)?,
                    y: options.y_format.format(&y?)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let x_width = cells.iter().map(|c| c.x.len()).max().unwrap_or(0);
        let y_width = cells.iter().map(|c| c.y.len()).max().unwrap_or(0);
        let border = border_line(x_width, y_width, columns);

        log::debug!(
            "chart: {} values in {rows} rows x {columns} columns, widths {x_width}/{y_width}",
            cells.len()
        );
        let capacity = rows.saturating_mul(columns);
        if capacity < cells.len() {
            log::warn!(
                "chart grid {rows}x{columns} shows only {capacity} of {} values",
                cells.len()
            );
        }

        Ok(Chart {
            rows,
            columns,
            x_width,
            y_width,
            border,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn x_width(&self) -> usize {
        self.x_width
    }

    pub fn y_width(&self) -> usize {
        self.y_width
    }

    /// The line drawn above and below the grid.
    pub fn border(&self) -> &str {
        &self.border
    }

    /// The number of (x, y) pairs charted.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Writes the chart to `w` and returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Stops at the first failed write and returns it as an `Io` error whose
    /// context records how many bytes had been written. Output already
    /// written stays written.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> Result<usize> {
        let mut out = CountingWriter { inner: w, count: 0 };
        let result = self.write_lines(&mut out);
        match result {
            Ok(()) => Ok(out.count),
            Err(e) => Err(Error::io(
                format!("chart render stopped after {} bytes", out.count),
                e,
            )),
        }
    }

    /// Writes the chart to standard output.
    pub fn write_to_stdout(&self) -> Result<usize> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        let n = self.write_to(&mut lock)?;
        lock.flush()?;
        Ok(n)
    }

    fn write_lines<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.border)?;
        for row in 0..self.rows {
            out.write_all(self.row_line(row).as_bytes())?;
        }
        writeln!(out, "{}", self.border)
    }

    /// Renders grid row `row`, including the trailing `|` and newline.
    fn row_line(&self, row: usize) -> String {
        let tile_width = self.x_width + self.y_width + 2;
        let mut line = String::with_capacity(tile_width * self.columns + 2);
        for col in 0..self.columns {
            let (x, y) = match self.cell(row, col) {
                Some(cell) => (cell.x.as_str(), cell.y.as_str()),
                None => ("", ""),
            };
            line.push('|');
            push_right_aligned(&mut line, x, self.x_width);
            line.push('|');
            push_right_aligned(&mut line, y, self.y_width);
        }
        line.push_str("|\n");
        line
    }

    /// The pair at `(row, col)`, or `None` for a blank tile.
    fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        let index = self.rows.checked_mul(col)?.checked_add(row)?;
        self.cells.get(index)
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.border)?;
        for row in 0..self.rows {
            f.write_str(&self.row_line(row))?;
        }
        writeln!(f, "{}", self.border)
    }
}

fn border_line(x_width: usize, y_width: usize, columns: usize) -> String {
    let tile = format!("+{}+{}", "-".repeat(x_width), "-".repeat(y_width));
    let mut border = std::iter::repeat_n(tile.as_str(), columns).join("");
    border.push('+');
    border
}

/// Pads by byte length: widths are measured in bytes, not display columns.
fn push_right_aligned(line: &mut String, text: &str, width: usize) {
    line.extend(std::iter::repeat_n(' ', width.saturating_sub(text.len())));
    line.push_str(text);
}

struct CountingWriter<'a, W: ?Sized> {
    inner: &'a mut W,
    count: usize,
}

impl<W: Write + ?Sized> Write for CountingWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
