//! Line processing loop
//!
//! Reads one line at a time, splits it, picks colors and renders it before
//! reading the next. Nothing overlaps, so the only shared state is the column
//! set owned by [`Colorizer`].

use crate::render::Renderer;
use std::io::{self, BufRead, Write};
use tailfeather_core::{ColumnSet, LineFormat, Tokenizer};

/// Summary of a processing run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lines: u64,
    /// Field-count changes after the first line
    pub shape_changes: u64,
}

/// Drives input lines through the tokenizer, column trackers and renderer
pub struct Colorizer<W: Write> {
    tokenizer: Tokenizer,
    columns: ColumnSet,
    renderer: Renderer<W>,
}

impl<W: Write> Colorizer<W> {
    pub fn new(format: &LineFormat, out: W) -> Self {
        Self {
            tokenizer: Tokenizer::from_format(format),
            columns: ColumnSet::new(),
            renderer: Renderer::new(out, format),
        }
    }

    /// Color and render a single line (without its terminator)
    pub fn process_line(&mut self, line: &str) -> io::Result<()> {
        let fields = self.tokenizer.split(line);
        let colors = self.columns.assign_line(&fields);
        self.renderer.render_line(&fields, &colors)
    }

    /// Process every line of `input` until end of input.
    ///
    /// Lines may end in `\n` or `\r\n`; invalid UTF-8 is replaced rather than
    /// rejected so a stray byte never stops a log stream.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> io::Result<RunStats> {
        let mut buf = Vec::new();
        let mut lines = 0u64;

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = strip_line_ending(&buf);
            self.process_line(&String::from_utf8_lossy(line))?;
            lines += 1;
        }

        let stats = RunStats {
            lines,
            shape_changes: self.columns.rebuilds().saturating_sub(1),
        };
        log::debug!("Processed {} lines", stats.lines);
        Ok(stats)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.renderer.into_inner()
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
