//! Tailfeather Core Library
//!
//! Color assignment for delimited text, so repeated values in log-like output
//! keep a consistent color from line to line.
//!
//! # Architecture
//!
//! - [`FieldTracker`] assigns colors for one column from a fixed palette,
//!   evicting the oldest value once every palette color is in use
//! - [`ColumnSet`] holds one tracker per column and resets them all when the
//!   number of fields on a line changes
//! - [`Tokenizer`] splits lines using a [`LineFormat`]
//!
//! The library performs no I/O. Reading input, writing colored output and
//! terminal handling live in the application layer (tailfeather-cli).
//!
//! # Example Usage
//!
//! ```
//! use tailfeather_core::{Color, ColumnSet, LineFormat, Tokenizer};
//!
//! let tokenizer = Tokenizer::from_format(&LineFormat::default());
//! let mut columns = ColumnSet::new();
//!
//! for line in ["a b", "a b", "c b"] {
//!     let fields = tokenizer.split(line);
//!     let colors = columns.assign_line(&fields);
//!     assert_eq!(colors.len(), 2);
//! }
//!
//! assert_eq!(columns.column(0).unwrap().peek("c"), Some(Color::Magenta));
//! ```

// Public modules
pub mod columns;
pub mod config;
pub mod tokenizer;
pub mod tracker;
pub mod types;

// Re-export main types for convenience
pub use columns::ColumnSet;
pub use config::LineFormat;
pub use tokenizer::Tokenizer;
pub use tracker::FieldTracker;
pub use types::{Color, Result, TailfeatherError, PALETTE, PALETTE_SIZE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
