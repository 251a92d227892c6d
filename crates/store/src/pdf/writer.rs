//! PDF Writer
//!
//! This module handles the actual PDF file generation, including:
//! - Object numbering and cross-reference table
//! - File structure (header, body, xref, trailer)
//! - Flate compression of content streams
//!
//! Recorded documents are laid out in millimetres from the top-left corner;
//! PDF user space is in points from the bottom-left, so every position is
//! scaled and its y axis flipped on the way out.

use super::content::ContentStream;
use super::fonts::{create_standard_font_dict, StandardFont};
use super::objects::{PdfDictionary, PdfObject, PdfSerializer, PdfStream};
use super::options::PdfExportOptions;
use render_model::{Document, Page};
use std::io::{self, Write};
use thiserror::Error;

/// PDF version written in the file header
pub const PDF_VERSION: &str = "1.4";

/// Error type for PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Invalid document structure
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    /// Compression error
    #[error("Compression error: {0}")]
    Compression(String),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Low-level writer that tracks object offsets for the xref table
pub struct PdfWriter<W: Write> {
    writer: W,
    position: u64,
    /// (object number, byte offset)
    offsets: Vec<(u32, u64)>,
    next_obj_num: u32,
    compress: bool,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            position: 0,
            offsets: Vec::new(),
            next_obj_num: 1,
            compress: true,
        }
    }

    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.position += data.len() as u64;
        Ok(())
    }

    /// Reserve the next object number
    pub fn allocate_object(&mut self) -> u32 {
        let num = self.next_obj_num;
        self.next_obj_num += 1;
        num
    }

    /// Write the PDF header and binary marker comment
    pub fn write_header(&mut self) -> Result<()> {
        self.write_bytes(format!("%PDF-{PDF_VERSION}\n").as_bytes())?;
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])
    }

    /// Write an indirect object
    pub fn write_object(&mut self, obj_num: u32, object: &PdfObject) -> Result<()> {
        self.offsets.push((obj_num, self.position));

        let mut serializer = PdfSerializer::new(format!("{obj_num} 0 obj\n").into_bytes());
        serializer.write_object(object)?;
        let mut bytes = serializer.into_inner();
        bytes.extend_from_slice(b"\nendobj\n");
        self.write_bytes(&bytes)
    }

    /// Write a stream object, compressing it when enabled
    pub fn write_stream_object(&mut self, obj_num: u32, mut stream: PdfStream) -> Result<()> {
        if self.compress {
            stream = compress_stream(stream)?;
        }
        stream.dict.insert("Length", stream.data.len() as i64);
        self.write_object(obj_num, &PdfObject::Stream(stream))
    }

    /// Write the cross-reference table and trailer
    pub fn write_xref_and_trailer(&mut self, catalog_ref: u32, info_ref: u32) -> Result<()> {
        let xref_offset = self.position;
        let size = self.next_obj_num;

        let mut offsets = std::mem::take(&mut self.offsets);
        offsets.sort_by_key(|(num, _)| *num);

        let mut table = format!("xref\n0 {size}\n0000000000 65535 f \n");
        let mut expected = 1u32;
        for (obj_num, offset) in &offsets {
            while expected < *obj_num {
                table.push_str("0000000000 65535 f \n");
                expected += 1;
            }
            table.push_str(&format!("{offset:010} 00000 n \n"));
            expected = obj_num + 1;
        }
        while expected < size {
            table.push_str("0000000000 65535 f \n");
            expected += 1;
        }
        table.push_str("trailer\n");
        self.write_bytes(table.as_bytes())?;

        let mut trailer = PdfDictionary::new();
        trailer.insert("Size", size as i64);
        trailer.insert("Root", PdfObject::reference(catalog_ref));
        trailer.insert("Info", PdfObject::reference(info_ref));
        let mut serializer = PdfSerializer::new(Vec::new());
        serializer.write_object(&trailer.into())?;
        self.write_bytes(&serializer.into_inner())?;

        self.write_bytes(format!("\nstartxref\n{xref_offset}\n%%EOF\n").as_bytes())?;
        self.offsets = offsets;
        Ok(())
    }

    /// Flush and return the inner writer
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

fn compress_stream(mut stream: PdfStream) -> Result<PdfStream> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&stream.data)
        .map_err(|e| PdfError::Compression(e.to_string()))?;
    stream.data = encoder
        .finish()
        .map_err(|e| PdfError::Compression(e.to_string()))?;
    stream.dict.insert("Filter", PdfObject::name("FlateDecode"));
    Ok(stream)
}

const POINTS_PER_MM: f64 = 72.0 / 25.4;

/// Millimetres to points
fn pt(mm: f32) -> f64 {
    mm as f64 * POINTS_PER_MM
}

/// Content stream drawing every run of one page
fn render_page(page: &Page, page_height: f32) -> ContentStream {
    let mut content = ContentStream::new();
    if page.runs.is_empty() {
        return content;
    }

    content.begin_text();
    let mut current: Option<(StandardFont, f32)> = None;
    for run in &page.runs {
        let font = StandardFont::for_style(run.style);
        if current != Some((font, run.font_size)) {
            content.set_font(font.resource_name(), run.font_size as f64);
            current = Some((font, run.font_size));
        }
        content.set_text_position(pt(run.x), pt(page_height - run.y));
        content.show_text(&run.text);
    }
    content.end_text();
    content
}

/// Writes recorded documents as PDF files
pub struct PdfDocumentWriter {
    options: PdfExportOptions,
}

impl PdfDocumentWriter {
    pub fn new(options: PdfExportOptions) -> Self {
        Self { options }
    }

    /// Write a complete PDF document to a writer
    pub fn write<W: Write>(&self, document: &Document, writer: W) -> Result<()> {
        if document.pages.is_empty() {
            return Err(PdfError::InvalidDocument("No pages to export".to_string()));
        }
        if !(document.page_width > 0.0 && document.page_height > 0.0) {
            return Err(PdfError::InvalidDocument(format!(
                "page size {}x{}mm",
                document.page_width, document.page_height
            )));
        }

        let mut pdf = PdfWriter::new(writer);
        pdf.set_compression(self.options.compress);
        pdf.write_header()?;

        let catalog_ref = pdf.allocate_object();
        let pages_ref = pdf.allocate_object();
        let info_ref = pdf.allocate_object();
        let font_refs: Vec<(StandardFont, u32)> = StandardFont::ALL
            .into_iter()
            .map(|font| (font, pdf.allocate_object()))
            .collect();
        let page_refs: Vec<(u32, u32)> = document
            .pages
            .iter()
            .map(|_| (pdf.allocate_object(), pdf.allocate_object()))
            .collect();

        let mut catalog = PdfDictionary::typed("Catalog");
        catalog.insert("Pages", PdfObject::reference(pages_ref));
        pdf.write_object(catalog_ref, &catalog.into())?;

        let mut pages = PdfDictionary::typed("Pages");
        let kids: Vec<PdfObject> = page_refs.iter().map(|(p, _)| PdfObject::reference(*p)).collect();
        pages.insert("Kids", kids);
        pages.insert("Count", page_refs.len() as i64);
        pdf.write_object(pages_ref, &pages.into())?;

        pdf.write_object(info_ref, &self.info_dictionary().into())?;

        let mut font_resources = PdfDictionary::new();
        for (font, font_ref) in &font_refs {
            pdf.write_object(*font_ref, &create_standard_font_dict(*font).into())?;
            font_resources.insert(font.resource_name(), PdfObject::reference(*font_ref));
        }
        let mut resources = PdfDictionary::new();
        resources.insert("Font", font_resources);
        resources.insert("ProcSet", vec![PdfObject::name("PDF"), PdfObject::name("Text")]);

        let media_box: PdfObject = vec![
            PdfObject::Integer(0),
            PdfObject::Integer(0),
            PdfObject::Real(pt(document.page_width)),
            PdfObject::Real(pt(document.page_height)),
        ]
        .into();

        for (page, (page_ref, content_ref)) in document.pages.iter().zip(&page_refs) {
            let content = render_page(page, document.page_height);
            pdf.write_stream_object(*content_ref, PdfStream::new(content.into_bytes()))?;

            let mut page_dict = PdfDictionary::typed("Page");
            page_dict.insert("Parent", PdfObject::reference(pages_ref));
            page_dict.insert("MediaBox", media_box.clone());
            page_dict.insert("Contents", PdfObject::reference(*content_ref));
            page_dict.insert("Resources", resources.clone());
            pdf.write_object(*page_ref, &page_dict.into())?;
        }

        pdf.write_xref_and_trailer(catalog_ref, info_ref)?;
        pdf.finish()?;
        Ok(())
    }

    /// Write a complete PDF document to bytes
    pub fn write_to_bytes(&self, document: &Document) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write(document, &mut buffer)?;
        Ok(buffer)
    }

    fn info_dictionary(&self) -> PdfDictionary {
        use render_model::encode_text;

        let mut info = PdfDictionary::new();
        let fields = [
            ("Title", &self.options.title),
            ("Author", &self.options.author),
            ("Subject", &self.options.subject),
            ("Creator", &self.options.creator),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                info.insert(key, PdfObject::string(encode_text(value)));
            }
        }
        info.insert("Producer", PdfObject::string(encode_text("store PDF writer")));
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use render_model::{FontStyle, TextRun};

    fn run(text: &str, y: f32, style: FontStyle) -> TextRun {
        TextRun {
            text: text.to_string(),
            x: 20.0,
            y,
            font_size: 12.0,
            style,
        }
    }

    fn sample_document(pages: usize) -> Document {
        let mut doc = Document::new(210.0, 297.0);
        doc.pages.clear();
        for i in 0..pages {
            doc.pages.push(Page {
                runs: vec![
                    run(&format!("Page {}", i + 1), 20.0, FontStyle::Bold),
                    run("\u{2022} Item 1:", 27.0, FontStyle::Normal),
                ],
            });
        }
        doc
    }

    fn write_document(document: &Document, options: &PdfExportOptions) -> Result<Vec<u8>> {
        PdfDocumentWriter::new(options.clone()).write_to_bytes(document)
    }

    fn uncompressed() -> PdfExportOptions {
        PdfExportOptions::new().with_compression(false)
    }

    #[test]
    fn test_pdf_structure() {
        let bytes = write_document(&sample_document(1), &PdfExportOptions::default()).unwrap();
        let pdf = String::from_utf8_lossy(&bytes);

        assert!(pdf.starts_with("%PDF-1.4"));
        assert!(pdf.contains("/Type /Catalog"));
        assert!(pdf.contains("/Type /Pages"));
        assert!(pdf.contains("/Filter /FlateDecode"));
        assert!(pdf.contains("/BaseFont /Helvetica-Bold"));
        assert!(pdf.contains("startxref"));
        assert!(pdf.ends_with("%%EOF\n"));
    }

    #[test]
    fn test_page_count_matches_document() {
        let bytes = write_document(&sample_document(3), &uncompressed()).unwrap();
        let pdf = String::from_utf8_lossy(&bytes);
        assert!(pdf.contains("/Count 3"));
        assert_eq!(pdf.matches("/Type /Page ").count(), 3);
    }

    #[test]
    fn test_coordinates_are_flipped_points() {
        let bytes = write_document(&sample_document(1), &uncompressed()).unwrap();
        let pdf = String::from_utf8_lossy(&bytes);

        // x = 20mm, y = 297 - 20 = 277mm
        assert!(pdf.contains("1 0 0 1 56.6929 785.1969 Tm"));
        assert!(pdf.contains("/F2 12 Tf"));
        assert!(pdf.contains("/F1 12 Tf"));
        assert!(pdf.contains("(Page 1) Tj"));
        assert!(pdf.contains("(\\225 Item 1:) Tj"));
        assert!(pdf.contains("/MediaBox [0 0 595.2756 841.8898]"));
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let bytes = write_document(&sample_document(2), &uncompressed()).unwrap();
        let pdf = String::from_utf8_lossy(&bytes).into_owned();

        let xref_start = pdf.rfind("xref\n").unwrap();
        let entries: Vec<&str> = pdf[xref_start..]
            .lines()
            .skip(3)
            .take_while(|line| line.ends_with(" n "))
            .collect();
        assert_eq!(entries.len(), 3 + 2 + 2 * 2);
        for (i, entry) in entries.iter().enumerate() {
            let offset: usize = entry[..10].parse().unwrap();
            let header = format!("{} 0 obj", i + 1);
            assert!(bytes[offset..].starts_with(header.as_bytes()));
        }
    }

    #[test]
    fn test_metadata_in_info_dictionary() {
        let options = uncompressed().with_author("Solutions Team").with_subject("Acme Corp");
        let bytes = write_document(&sample_document(1), &options).unwrap();
        let pdf = String::from_utf8_lossy(&bytes);
        assert!(pdf.contains("/Author (Solutions Team)"));
        assert!(pdf.contains("/Subject (Acme Corp)"));
        assert!(pdf.contains("/Title (Onboarding Form)"));
    }

    #[test]
    fn test_empty_pages_error() {
        let mut doc = Document::new(210.0, 297.0);
        doc.pages.clear();
        assert!(matches!(
            write_document(&doc, &PdfExportOptions::default()),
            Err(PdfError::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_blank_page_is_still_written() {
        let doc = Document::new(210.0, 297.0);
        let bytes = write_document(&doc, &uncompressed()).unwrap();
        let pdf = String::from_utf8_lossy(&bytes);
        assert!(pdf.contains("/Count 1"));
        assert!(pdf.contains("/Length 0"));
    }
}
