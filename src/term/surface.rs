//! Output surface: styled line emission behind a narrow trait.
//!
//! A frame is a sequence of [`Line`]s; each line is a run of [`Span`]s
//! painted plain or inverse. [`AnsiSurface`] realizes the trait with
//! crossterm commands; tests substitute recording fakes.

use std::io::{self, Write};

use crossterm::QueueableCommand;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};

/// How a run of text is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Paint {
    #[default]
    Plain,
    /// Inverse video: foreground and background swapped.
    Inverse,
}

/// One styled run within a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub paint: Paint,
}

impl Span {
    pub fn raw(text: impl Into<String>) -> Self {
        Self { text: text.into(), paint: Paint::Plain }
    }

    pub fn inverse(text: impl Into<String>) -> Self {
        Self { text: text.into(), paint: Paint::Inverse }
    }
}

/// One output line, emitted atomically by [`Surface::write_line`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn raw(text: impl Into<String>) -> Self {
        Self { spans: vec![Span::raw(text)] }
    }

    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Concatenated text with styling stripped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Narrow output contract the widgets render against.
pub trait Surface {
    /// Clear the whole surface and home the cursor.
    fn clear(&mut self) -> io::Result<()>;

    /// Emit one line, styling included, and advance to the next.
    fn write_line(&mut self, line: &Line) -> io::Result<()>;

    /// Process-wide cursor visibility toggle. Takes effect immediately,
    /// not at the next frame flush.
    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Push any queued output to the device.
    fn flush(&mut self) -> io::Result<()>;
}

/// Crossterm-backed surface writing to `W`.
///
/// Lines end with `\r\n`: sessions run in raw mode, where `\n` alone does
/// not return the carriage.
#[derive(Debug)]
pub struct AnsiSurface<W: Write> {
    out: W,
}

impl AnsiSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

/// Stdout handles share one device; cloning just opens another handle.
impl Clone for AnsiSurface<io::Stdout> {
    fn clone(&self) -> Self {
        Self::stdout()
    }
}

impl<W: Write> AnsiSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Surface for AnsiSurface<W> {
    fn clear(&mut self) -> io::Result<()> {
        self.out.queue(Clear(ClearType::All))?;
        self.out.queue(MoveTo(0, 0))?;
        Ok(())
    }

    fn write_line(&mut self, line: &Line) -> io::Result<()> {
        for span in &line.spans {
            match span.paint {
                Paint::Plain => {
                    self.out.queue(Print(span.text.as_str()))?;
                }
                Paint::Inverse => {
                    self.out.queue(SetAttribute(Attribute::Reverse))?;
                    self.out.queue(Print(span.text.as_str()))?;
                    self.out.queue(SetAttribute(Attribute::NoReverse))?;
                }
            }
        }
        self.out.queue(Print("\r\n"))?;
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            self.out.queue(Show)?;
        } else {
            self.out.queue(Hide)?;
        }
        self.out.flush()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitted(f: impl FnOnce(&mut AnsiSurface<Vec<u8>>) -> io::Result<()>) -> String {
        let mut surface = AnsiSurface::new(Vec::new());
        f(&mut surface).unwrap();
        String::from_utf8(surface.out).unwrap()
    }

    #[test]
    fn plain_line_ends_with_crlf() {
        let out = emitted(|s| s.write_line(&Line::raw("hello")));
        assert_eq!(out, "hello\r\n");
    }

    #[test]
    fn inverse_span_is_wrapped_in_reverse_attributes() {
        let line = Line { spans: vec![Span::inverse("cell")] };
        let out = emitted(|s| s.write_line(&line));
        assert_eq!(out, "\u{1b}[7mcell\u{1b}[27m\r\n");
    }

    #[test]
    fn mixed_spans_only_style_the_inverse_run() {
        let line = Line {
            spans: vec![Span::raw("a"), Span::inverse("b"), Span::raw("c")],
        };
        let out = emitted(|s| s.write_line(&line));
        assert_eq!(out, "a\u{1b}[7mb\u{1b}[27mc\r\n");
    }

    #[test]
    fn clear_homes_the_cursor() {
        let out = emitted(|s| s.clear());
        assert_eq!(out, "\u{1b}[2J\u{1b}[1;1H");
    }

    #[test]
    fn cursor_visibility_uses_the_private_mode_toggles() {
        let hidden = emitted(|s| s.set_cursor_visible(false));
        let shown = emitted(|s| s.set_cursor_visible(true));
        assert_eq!(hidden, "\u{1b}[?25l");
        assert_eq!(shown, "\u{1b}[?25h");
    }

    #[test]
    fn line_text_strips_styling() {
        let line = Line {
            spans: vec![Span::raw("> "), Span::inverse("item"), Span::raw("  ")],
        };
        assert_eq!(line.text(), "> item  ");
    }

    #[test]
    fn empty_line_is_just_a_line_break() {
        let out = emitted(|s| s.write_line(&Line::default()));
        assert_eq!(out, "\r\n");
    }
}
