//! Colored line output
//!
//! Writes each field in its assigned foreground color using crossterm. Every
//! line ends with a color reset, so stopping between lines never leaves the
//! terminal colored.

use crossterm::style::{Print, ResetColor};
use crossterm::{queue, Command};
use std::fmt;
use std::io::{self, Write};
use tailfeather_core::{Color, LineFormat};

/// Basic SGR foreground code (30-37) for a palette color
pub fn sgr_code(color: Color) -> u8 {
    match color {
        Color::White => 37,
        Color::Magenta => 35,
        Color::Cyan => 36,
        Color::Blue => 34,
        Color::Green => 32,
        Color::Yellow => 33,
        Color::Red => 31,
    }
}

/// Closest crossterm color, for consoles without ANSI support
#[cfg(windows)]
fn terminal_color(color: Color) -> crossterm::style::Color {
    use crossterm::style::Color as TermColor;

    match color {
        Color::White => TermColor::Grey,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Blue => TermColor::DarkBlue,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Red => TermColor::DarkRed,
    }
}

/// Sets the foreground to a palette color.
///
/// crossterm's own `SetForegroundColor` writes 256-color sequences; this keeps
/// to the eight basic colors so 8/16-color terminals render the same palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetFieldColor(pub Color);

impl Command for SetFieldColor {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b[{}m", sgr_code(self.0))
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        crossterm::style::SetForegroundColor(terminal_color(self.0)).execute_winapi()
    }
}

/// Writes colored fields to an output stream
pub struct Renderer<W: Write> {
    out: W,
    delimiter: String,
}

impl<W: Write> Renderer<W> {
    /// Create a renderer joining fields with the format's output delimiter
    pub fn new(out: W, format: &LineFormat) -> Self {
        Self {
            out,
            delimiter: format.output_delimiter.clone(),
        }
    }

    /// Write one line: each field in its color, delimiters between fields,
    /// then a color reset and a newline. The stream is flushed afterwards.
    pub fn render_line<S: AsRef<str>>(&mut self, fields: &[S], colors: &[Color]) -> io::Result<()> {
        debug_assert_eq!(fields.len(), colors.len());

        let last = fields.len().saturating_sub(1);
        for (i, (value, &color)) in fields.iter().zip(colors).enumerate() {
            queue!(self.out, SetFieldColor(color), Print(value.as_ref()))?;
            if i < last {
                queue!(self.out, Print(&self.delimiter))?;
            }
        }

        if !fields.is_empty() {
            queue!(self.out, ResetColor)?;
        }
        self.out.write_all(b"\n")?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
