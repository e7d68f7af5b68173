//! Command implementations for tabula-cmd

use anyhow::{Context, Result, bail};
use clap::Args;
use std::fs::File;
use std::io::BufWriter;
use tabula_chart::{Chart, ChartOptions, FormatSpec};
use tabula_sequence::Sequence;

pub mod floats;
pub mod ints;

/// Layout and formatting flags shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct TableArgs {
    /// Printf-style format for X cells (e.g. "%.2f")
    #[arg(long)]
    pub x_format: Option<FormatSpec>,

    /// Printf-style format for Y cells (e.g. "%.4f")
    #[arg(long)]
    pub y_format: Option<FormatSpec>,

    /// Fixed-point digits for X and Y, as "X,Y"; overridden by --x-format/--y-format
    #[arg(long, value_parser = parse_fraction_digits)]
    pub fraction_digits: Option<(usize, usize)>,

    /// Number of grid rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of grid columns
    #[arg(long)]
    pub columns: Option<usize>,

    /// Write the table to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

impl TableArgs {
    pub fn options(&self) -> ChartOptions {
        let mut options = ChartOptions::new();
        if let Some((x_digits, y_digits)) = self.fraction_digits {
            options = options.with_fraction_digits(x_digits, y_digits);
        }
        if let Some(spec) = &self.x_format {
            options = options.with_x_format(spec.clone());
        }
        if let Some(spec) = &self.y_format {
            options = options.with_y_format(spec.clone());
        }
        if let Some(rows) = self.rows {
            options = options.with_rows(rows);
        }
        if let Some(columns) = self.columns {
            options = options.with_columns(columns);
        }
        options
    }
}

/// Lays out `xs` against `ys` and writes the chart where `table` asks.
pub fn print_table(xs: &dyn Sequence, ys: &dyn Sequence, table: &TableArgs) -> Result<()> {
    let chart = Chart::new(xs, ys, &table.options()).context("Failed to lay out table")?;
    match &table.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Failed to create file: {path}"))?;
            let mut writer = BufWriter::new(file);
            let n = chart
                .write_to(&mut writer)
                .with_context(|| format!("Failed to write table to file: {path}"))?;
            writer
                .into_inner()
                .map_err(|e| e.into_error())
                .with_context(|| format!("Failed to flush file: {path}"))?;
            log::info!("wrote {n} bytes to {path}");
        }
        None => {
            chart
                .write_to_stdout()
                .context("Failed to write table to stdout")?;
        }
    }
    Ok(())
}

fn parse_fraction_digits(s: &str) -> Result<(usize, usize)> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected X,Y digit counts, got '{s}'");
    };
    let x = x.trim().parse().with_context(|| format!("bad X digits '{x}'"))?;
    let y = y.trim().parse().with_context(|| format!("bad Y digits '{y}'"))?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_sequence::IntSequence;
    use tabula_testkit::{read_temp_file, temp_file};

    #[test]
    fn test_parse_fraction_digits() {
        assert_eq!(parse_fraction_digits("3,4").unwrap(), (3, 4));
        assert_eq!(parse_fraction_digits(" 0 , 2 ").unwrap(), (0, 2));
        assert!(parse_fraction_digits("3").is_err());
        assert!(parse_fraction_digits("a,4").is_err());
    }

    #[test]
    fn test_explicit_formats_win() {
        let table = TableArgs {
            fraction_digits: Some((3, 4)),
            y_format: Some(FormatSpec::parse("%.1f").unwrap()),
            columns: Some(2),
            ..TableArgs::default()
        };
        let options = table.options();
        assert_eq!(options.x_format.as_str(), "%.3f");
        assert_eq!(options.y_format.as_str(), "%.1f");
        assert_eq!(options.columns, Some(2));
        assert_eq!(options.rows, None);
    }

    #[test]
    fn test_print_table_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("squares.txt");
        let table = TableArgs {
            output: Some(path.to_string_lossy().into_owned()),
            ..TableArgs::default()
        };
        let xs = IntSequence::new(1, 1, 10);
        let ys = xs.apply(|x| x * x);
        print_table(&xs, &ys, &table).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.len(), 108);
        assert!(text.starts_with("+--+---+\n| 1|  1|\n"));
    }

    #[test]
    fn test_print_table_reports_layout_errors() {
        let xs = IntSequence::new(1, 1, 3);
        let ys = IntSequence::new(1, 1, 2);
        let err = print_table(&xs, &ys, &TableArgs::default()).unwrap_err();
        assert!(err.to_string().contains("lay out"));
    }

    #[test]
    fn test_chart_matches_file_sink() {
        let xs = IntSequence::new(1, 1, 4);
        let ys = xs.apply(|x| x * x);
        let chart = Chart::new(&xs, &ys, &TableArgs::default().options()).unwrap();
        let mut file = temp_file();
        chart.write_to(&mut file).unwrap();
        assert_eq!(read_temp_file(&mut file), chart.to_string());
    }
}
