//! Low-level document object writer.
//!
//! `DocumentBuilder` appends numbered objects to an in-memory buffer and
//! records each object's byte offset as it is written. `finish` emits the
//! shared objects (font, page tree, catalog), the cross-reference table and
//! the trailer.
//!
//! Object ids 1-3 are reserved for the page tree, font and catalog since
//! every page refers to them before they are written.

use std::io::Write;

/// Page tree object id.
pub const PAGES_ID: u32 = 1;

/// Helvetica font object id.
pub const FONT_ID: u32 = 2;

/// Catalog object id.
pub const CATALOG_ID: u32 = 3;

/// First id handed out for pages, contents and images.
const FIRST_FREE_ID: u32 = 4;

/// Page width in points (A4 portrait).
pub const PAGE_WIDTH: f32 = 595.28;

/// Page height in points (A4 portrait).
pub const PAGE_HEIGHT: f32 = 841.89;

/// Format header plus a binary comment so transfer tools treat the file as
/// binary.
const HEADER: &[u8] = b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n";

/// Builds a document one object at a time.
#[derive(Debug)]
pub struct DocumentBuilder {
    buf: Vec<u8>,
    offsets: Vec<(u32, usize)>,
    page_ids: Vec<u32>,
    next_id: u32,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        let mut buf = Vec::with_capacity(64 * 1024);
        buf.extend_from_slice(HEADER);
        Self {
            buf,
            offsets: Vec::new(),
            page_ids: Vec::new(),
            next_id: FIRST_FREE_ID,
        }
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Append a page with the given content stream. `images` maps resource
    /// names used by the content to image object ids. Returns the page id.
    pub fn add_page(&mut self, content: &[u8], images: &[(&str, u32)]) -> u32 {
        let content_id = self.alloc_id();
        self.write_stream(content_id, "", content);

        let mut resources = format!("/Font << /F1 {} 0 R >>", FONT_ID);
        if !images.is_empty() {
            resources.push_str(" /XObject <<");
            for (name, id) in images {
                resources.push_str(&format!(" /{} {} 0 R", name, id));
            }
            resources.push_str(" >>");
        }

        let page_id = self.alloc_id();
        let body = format!(
            "<< /Type /Page /Parent {} 0 R /MediaBox [0 0 {:.2} {:.2}] /Resources << {} >> /Contents {} 0 R >>",
            PAGES_ID, PAGE_WIDTH, PAGE_HEIGHT, resources, content_id
        );
        self.write_object(page_id, body.as_bytes());
        self.page_ids.push(page_id);
        page_id
    }

    /// Append an 8-bit RGB image. `samples` holds `width * height * 3` bytes
    /// in row-major order. Returns the image object id.
    pub fn add_image(&mut self, width: u32, height: u32, samples: &[u8]) -> u32 {
        let id = self.alloc_id();
        let dict = format!(
            "/Type /XObject /Subtype /Image /Width {} /Height {} /ColorSpace /DeviceRGB /BitsPerComponent 8 ",
            width, height
        );
        self.write_stream(id, &dict, samples);
        id
    }

    /// Write the shared objects, cross-reference table and trailer.
    pub fn finish(mut self) -> Vec<u8> {
        self.write_object(
            FONT_ID,
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
        );

        let kids = self
            .page_ids
            .iter()
            .map(|id| format!("{} 0 R", id))
            .collect::<Vec<_>>()
            .join(" ");
        let pages = format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids,
            self.page_ids.len()
        );
        self.write_object(PAGES_ID, pages.as_bytes());

        let catalog = format!("<< /Type /Catalog /Pages {} 0 R >>", PAGES_ID);
        self.write_object(CATALOG_ID, catalog.as_bytes());

        let size = self.next_id;
        let xref_offset = self.buf.len();
        self.offsets.sort_by_key(|&(id, _)| id);

        let mut out = self.buf;
        let _ = write!(out, "xref\n0 {}\n", size);
        out.extend_from_slice(b"0000000000 65535 f \n");
        for (_, offset) in &self.offsets {
            let _ = write!(out, "{:010} 00000 n \n", offset);
        }
        let _ = write!(
            out,
            "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            size, CATALOG_ID, xref_offset
        );
        out
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn write_object(&mut self, id: u32, body: &[u8]) {
        self.offsets.push((id, self.buf.len()));
        let _ = writeln!(self.buf, "{} 0 obj", id);
        self.buf.extend_from_slice(body);
        self.buf.extend_from_slice(b"\nendobj\n");
    }

    /// Write a stream object; `dict` holds extra dictionary entries placed
    /// before `/Length`.
    fn write_stream(&mut self, id: u32, dict: &str, data: &[u8]) {
        let mut body = Vec::with_capacity(data.len() + 128);
        let _ = write!(body, "<< {}/Length {} >>\nstream\n", dict, data.len());
        body.extend_from_slice(data);
        body.extend_from_slice(b"\nendstream");
        self.write_object(id, &body);
    }
}
