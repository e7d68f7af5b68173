//! Fixed-width ASCII charts of X/Y value pairs.
//!
//! ```
//! use tabula_chart::{Chart, ChartOptions};
//! use tabula_sequence::IntSequence;
//!
//! let xs = IntSequence::new(1, 1, 4);
//! let ys = xs.apply(|x| x * x);
//! let chart = Chart::new(&xs, &ys, &ChartOptions::new().with_columns(2)).unwrap();
//! assert_eq!(
//!     chart.to_string(),
//!     "+-+--+-+--+\n|1| 1|3| 9|\n|2| 4|4|16|\n+-+--+-+--+\n"
//! );
//! ```

pub mod chart;
pub mod format;
pub mod options;

pub use chart::Chart;
pub use format::FormatSpec;
pub use options::ChartOptions;
