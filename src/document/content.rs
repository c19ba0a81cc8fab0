//! Page content programs.
//!
//! A `ContentProgram` is a list of drawing operations for one page. Pages
//! are built as programs first and only encoded to content-stream bytes when
//! handed to the document writer.

use std::io::Write;

use crate::types::Colour;

/// A single drawing operation. Coordinates are in points from the bottom
/// left of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    FillColour(Colour),
    StrokeColour(Colour),
    LineWidth(f32),
    FillRect { x: f32, y: f32, w: f32, h: f32 },
    StrokeRect { x: f32, y: f32, w: f32, h: f32 },
    Text { x: f32, y: f32, size: f32, text: String },
    /// Draw a named image resource scaled into a rectangle.
    Image { name: String, x: f32, y: f32, w: f32, h: f32 },
}

/// Drawing operations for one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentProgram {
    ops: Vec<Op>,
}

impl ContentProgram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: Op) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn fill_colour(&mut self, colour: Colour) {
        self.push(Op::FillColour(colour));
    }

    pub fn stroke_colour(&mut self, colour: Colour) {
        self.push(Op::StrokeColour(colour));
    }

    pub fn line_width(&mut self, width: f32) {
        self.push(Op::LineWidth(width));
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push(Op::FillRect { x, y, w, h });
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.push(Op::StrokeRect { x, y, w, h });
    }

    pub fn text(&mut self, x: f32, y: f32, size: f32, text: impl Into<String>) {
        self.push(Op::Text {
            x,
            y,
            size,
            text: text.into(),
        });
    }

    /// Stack lines downwards from `(x, y)` with a fixed leading.
    pub fn text_lines<S: AsRef<str>>(
        &mut self,
        x: f32,
        y: f32,
        size: f32,
        leading: f32,
        lines: &[S],
    ) {
        for (i, line) in lines.iter().enumerate() {
            self.text(x, y - leading * i as f32, size, line.as_ref());
        }
    }

    pub fn image(&mut self, name: impl Into<String>, x: f32, y: f32, w: f32, h: f32) {
        self.push(Op::Image {
            name: name.into(),
            x,
            y,
            w,
            h,
        });
    }

    /// Names of every image resource the program draws.
    pub fn image_names(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Image { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Encode as content-stream bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.ops.len() * 32);
        for op in &self.ops {
            // Writing into a Vec cannot fail
            let _ = encode_op(&mut out, op);
        }
        out
    }
}

fn encode_op(out: &mut Vec<u8>, op: &Op) -> std::io::Result<()> {
    match op {
        Op::FillColour(c) => {
            let [r, g, b] = c.to_unit();
            writeln!(out, "{:.3} {:.3} {:.3} rg", r, g, b)
        }
        Op::StrokeColour(c) => {
            let [r, g, b] = c.to_unit();
            writeln!(out, "{:.3} {:.3} {:.3} RG", r, g, b)
        }
        Op::LineWidth(w) => writeln!(out, "{:.2} w", w),
        Op::FillRect { x, y, w, h } => writeln!(out, "{:.2} {:.2} {:.2} {:.2} re f", x, y, w, h),
        Op::StrokeRect { x, y, w, h } => writeln!(out, "{:.2} {:.2} {:.2} {:.2} re S", x, y, w, h),
        Op::Text { x, y, size, text } => {
            write!(out, "BT /F1 {:.2} Tf {:.2} {:.2} Td (", size, x, y)?;
            out.extend_from_slice(&encode_text(text));
            writeln!(out, ") Tj ET")
        }
        Op::Image { name, x, y, w, h } => {
            writeln!(out, "q {:.2} 0 0 {:.2} {:.2} {:.2} cm /{} Do Q", w, h, x, y, name)
        }
    }
}

/// Encode text as one byte per character, escaped for a string literal.
///
/// Printable ASCII and Latin-1 characters pass through as their code
/// point; anything else becomes `?`.
pub fn encode_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let code = ch as u32;
        let byte = match code {
            0x20..=0x7E | 0xA0..=0xFF => code as u8,
            _ => b'?',
        };
        if matches!(byte, b'(' | b')' | b'\\') {
            out.push(b'\\');
        }
        out.push(byte);
    }
    out
}
