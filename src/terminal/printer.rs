use crate::ui::span::SpanLine;
use crate::ui::style::Color;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color as CrosstermColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Writes rendered frames to a terminal-like sink, one span line per row.
pub struct Printer<W: Write> {
    out: W,
    width: Option<u16>,
    styled: bool,
}

impl Printer<io::Stdout> {
    /// Stdout printer clipped to the current terminal width, when known.
    pub fn stdout() -> Self {
        let width = crossterm::terminal::size().ok().map(|(cols, _)| cols);
        Self::new(io::stdout()).with_width(width)
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            width: None,
            styled: true,
        }
    }

    pub fn with_width(mut self, width: Option<u16>) -> Self {
        self.width = width;
        self
    }

    /// Plain mode drops colors and attributes.
    pub fn plain(mut self) -> Self {
        self.styled = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_frame(&mut self, lines: &[SpanLine]) -> io::Result<()> {
        for line in lines {
            self.write_span_line(line)?;
            queue!(self.out, Print("\n"))?;
        }
        self.out.flush()
    }

    fn write_span_line(&mut self, line: &SpanLine) -> io::Result<()> {
        // Keep one cell free so a full-width line never wraps.
        let limit = self.width.map(|width| usize::from(width.max(2) - 1));
        let mut used = 0usize;
        for span in line {
            let text = match limit {
                Some(limit) if used >= limit => break,
                Some(limit) => clip_to_width(&span.text, limit - used),
                None => span.text.replace(['\n', '\r'], ""),
            };
            if text.is_empty() {
                continue;
            }
            used = used.saturating_add(UnicodeWidthStr::width(text.as_str()));

            if !self.styled {
                queue!(self.out, Print(text))?;
                continue;
            }
            if let Some(color) = span.style.color {
                queue!(self.out, SetForegroundColor(map_color(color)))?;
            }
            if let Some(background) = span.style.background {
                queue!(self.out, SetBackgroundColor(map_color(background)))?;
            }
            if span.style.bold {
                queue!(self.out, SetAttribute(Attribute::Bold))?;
            }
            if span.style.dim {
                queue!(self.out, SetAttribute(Attribute::Dim))?;
            }
            queue!(self.out, Print(text), ResetColor)?;
            if span.style.bold || span.style.dim {
                queue!(self.out, SetAttribute(Attribute::NormalIntensity))?;
            }
        }
        Ok(())
    }
}

pub fn map_color(color: Color) -> CrosstermColor {
    match color {
        Color::Reset => CrosstermColor::Reset,
        Color::Black => CrosstermColor::Black,
        Color::DarkGrey => CrosstermColor::DarkGrey,
        Color::Red => CrosstermColor::Red,
        Color::Green => CrosstermColor::Green,
        Color::Yellow => CrosstermColor::DarkYellow,
        Color::Blue => CrosstermColor::DarkBlue,
        Color::Magenta => CrosstermColor::DarkMagenta,
        Color::Cyan => CrosstermColor::DarkCyan,
        Color::White => CrosstermColor::White,
        Color::Rgb(r, g, b) => CrosstermColor::Rgb { r, g, b },
    }
}

fn clip_to_width(text: &str, max_width: usize) -> String {
    let mut used = 0usize;
    let mut out = String::new();
    for ch in text.chars().filter(|ch| !matches!(ch, '\n' | '\r')) {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(ch_width) > max_width {
            break;
        }
        out.push(ch);
        used = used.saturating_add(ch_width);
    }
    out
}
