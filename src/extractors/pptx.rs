//! PPTX slide-text extraction.
//!
//! Slides are resolved through `ppt/_rels/presentation.xml.rels` when
//! present, falling back to a sorted scan of `ppt/slides/slide*.xml`. For
//! each slide (1-indexed) a `Slide <n>:` header is emitted, followed by the
//! text of every shape that carries a text body, one shape per line, and a
//! blank line after the slide.

use std::{io::Read, path::Path};

use roxmltree::{Document, Node};
use zip::ZipArchive;

use crate::error::{Result, TextfallError};

const P_NAMESPACE: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const A_NAMESPACE: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

/// Extract slide texts with `Slide <n>:` headers.
pub fn extract_pptx(path: &Path) -> Result<String> {
    let mut container = PptxContainer::open(path)?;
    let slide_paths = container.slide_paths.clone();
    tracing::debug!(slide_count = slide_paths.len(), "loaded PPTX");

    let mut text = String::new();
    for (index, slide_path) in slide_paths.iter().enumerate() {
        let xml_data = container.read_file(slide_path)?;
        text.push_str(&format!("Slide {}:\n", index + 1));
        text.push_str(&slide_text(&xml_data)?);
        text.push('\n');
    }

    Ok(text)
}

struct PptxContainer {
    archive: ZipArchive<std::fs::File>,
    slide_paths: Vec<String>,
}

impl PptxContainer {
    fn open(path: &Path) -> Result<Self> {
        // IO errors must bubble up unchanged.
        let file = std::fs::File::open(path)?;

        let mut archive = match ZipArchive::new(file) {
            Ok(arc) => arc,
            Err(zip::result::ZipError::Io(io_err)) => return Err(io_err.into()),
            Err(e) => {
                return Err(TextfallError::parsing(format!(
                    "Failed to read PPTX archive (invalid format): {}",
                    e
                )));
            }
        };

        let slide_paths = find_slide_paths(&mut archive)?;
        Ok(Self {
            archive,
            slide_paths,
        })
    }

    fn read_file(&mut self, name: &str) -> Result<Vec<u8>> {
        match self.archive.by_name(name) {
            Ok(mut entry) => {
                let mut contents = Vec::new();
                entry.read_to_end(&mut contents)?;
                Ok(contents)
            }
            Err(zip::result::ZipError::FileNotFound) => Err(TextfallError::parsing(format!(
                "{} not found in archive",
                name
            ))),
            Err(zip::result::ZipError::Io(io_err)) => Err(io_err.into()),
            Err(e) => Err(TextfallError::parsing(format!("Zip error: {}", e))),
        }
    }
}

fn find_slide_paths(archive: &mut ZipArchive<std::fs::File>) -> Result<Vec<String>> {
    if let Ok(rels_data) = read_archive_entry(archive, "ppt/_rels/presentation.xml.rels") {
        if let Ok(paths) = parse_presentation_rels(&rels_data) {
            if !paths.is_empty() {
                return Ok(paths);
            }
        }
    }

    let mut slide_paths = Vec::new();
    for i in 0..archive.len() {
        if let Ok(entry) = archive.by_index(i) {
            let name = entry.name();
            if name.starts_with("ppt/slides/slide") && name.ends_with(".xml") {
                slide_paths.push(name.to_string());
            }
        }
    }

    slide_paths.sort();
    Ok(slide_paths)
}

fn read_archive_entry(archive: &mut ZipArchive<std::fs::File>, name: &str) -> Result<Vec<u8>> {
    let mut entry = match archive.by_name(name) {
        Ok(f) => f,
        Err(zip::result::ZipError::Io(io_err)) => return Err(io_err.into()),
        Err(e) => {
            return Err(TextfallError::parsing(format!(
                "Failed to read file from archive: {}",
                e
            )));
        }
    };
    let mut contents = Vec::new();
    entry.read_to_end(&mut contents)?;
    Ok(contents)
}

fn parse_presentation_rels(rels_data: &[u8]) -> Result<Vec<String>> {
    let xml_str = std::str::from_utf8(rels_data)
        .map_err(|e| TextfallError::parsing(format!("Invalid UTF-8 in presentation rels: {}", e)))?;

    let doc = Document::parse(xml_str)
        .map_err(|e| TextfallError::parsing(format!("Failed to parse presentation rels: {}", e)))?;

    let mut slide_paths = Vec::new();
    for node in doc.descendants() {
        if !node.has_tag_name("Relationship") {
            continue;
        }
        let rel_type = match node.attribute("Type") {
            Some(t) => t,
            None => continue,
        };
        if !rel_type.contains("slide") || rel_type.contains("slideMaster") {
            continue;
        }
        if let Some(target) = node.attribute("Target") {
            let normalized = target.strip_prefix('/').unwrap_or(target);
            let final_path = if normalized.starts_with("ppt/") {
                normalized.to_string()
            } else {
                format!("ppt/{}", normalized)
            };
            slide_paths.push(final_path);
        }
    }

    Ok(slide_paths)
}

/// Text of every text-bearing shape on one slide, one shape per line.
fn slide_text(xml_data: &[u8]) -> Result<String> {
    let xml_str = std::str::from_utf8(xml_data)
        .map_err(|_| TextfallError::parsing("Invalid UTF-8 in slide XML".to_string()))?;

    let doc = Document::parse(xml_str)
        .map_err(|e| TextfallError::parsing(format!("Failed to parse slide XML: {}", e)))?;

    let mut text = String::new();
    for sp_node in doc
        .descendants()
        .filter(|n| n.has_tag_name((P_NAMESPACE, "sp")))
    {
        if let Some(tx_body) = sp_node
            .children()
            .find(|n| n.has_tag_name((P_NAMESPACE, "txBody")))
        {
            text.push_str(&shape_text(&tx_body));
            text.push('\n');
        }
    }

    Ok(text)
}

/// Paragraph texts of one text body, joined with newlines.
fn shape_text(tx_body: &Node) -> String {
    let mut paragraphs = Vec::new();
    for p_node in tx_body
        .children()
        .filter(|n| n.has_tag_name((A_NAMESPACE, "p")))
    {
        let mut paragraph = String::new();
        for t_node in p_node
            .descendants()
            .filter(|n| n.has_tag_name((A_NAMESPACE, "t")))
        {
            if let Some(t) = t_node.text() {
                paragraph.push_str(t);
            }
        }
        paragraphs.push(paragraph);
    }
    paragraphs.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::{SimpleFileOptions, ZipWriter};

    /// Build a PPTX where each outer entry is a slide and each inner entry a
    /// text shape on that slide.
    fn write_pptx(path: &Path, slides: &[&[&str]]) {
        let file = std::fs::File::create(path).unwrap();
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default();

        zip.start_file("[Content_Types].xml", options).unwrap();
        zip.write_all(
            br#"<?xml version="1.0" encoding="UTF-8"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
</Types>"#,
        )
        .unwrap();

        let mut rels_xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        for i in 0..slides.len() {
            rels_xml.push_str(&format!(
                r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
                i + 1,
                i + 1
            ));
        }
        rels_xml.push_str("</Relationships>");
        zip.start_file("ppt/_rels/presentation.xml.rels", options)
            .unwrap();
        zip.write_all(rels_xml.as_bytes()).unwrap();

        for (i, shapes) in slides.iter().enumerate() {
            let mut sp_tree = String::new();
            for shape in shapes.iter() {
                sp_tree.push_str(&format!(
                    "<p:sp><p:txBody><a:p><a:r><a:t>{}</a:t></a:r></a:p></p:txBody></p:sp>",
                    shape
                ));
            }
            let slide_xml = format!(
                r#"<?xml version="1.0" encoding="UTF-8"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"
       xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
    <p:cSld><p:spTree>{}</p:spTree></p:cSld>
</p:sld>"#,
                sp_tree
            );
            zip.start_file(format!("ppt/slides/slide{}.xml", i + 1), options)
                .unwrap();
            zip.write_all(slide_xml.as_bytes()).unwrap();
        }

        zip.finish().unwrap();
    }

    #[test]
    fn test_slide_header_and_shape_lines() {
        let file = tempfile::Builder::new().suffix(".pptx").tempfile().unwrap();
        write_pptx(file.path(), &[&["Title", "Body"]]);

        let text = extract_pptx(file.path()).unwrap();
        assert!(text.contains("Slide 1:\nTitle\nBody\n\n"), "text was: {:?}", text);
    }

    #[test]
    fn test_slides_are_one_indexed_and_separated() {
        let file = tempfile::Builder::new().suffix(".pptx").tempfile().unwrap();
        write_pptx(file.path(), &[&["One"], &["Two"], &["Three"]]);

        let text = extract_pptx(file.path()).unwrap();
        assert!(text.contains("Slide 1:\nOne\n\n"));
        assert!(text.contains("Slide 2:\nTwo\n\n"));
        assert!(text.contains("Slide 3:\nThree\n\n"));
    }

    #[test]
    fn test_slide_without_shapes_still_gets_header() {
        let file = tempfile::Builder::new().suffix(".pptx").tempfile().unwrap();
        write_pptx(file.path(), &[&[]]);

        let text = extract_pptx(file.path()).unwrap();
        assert_eq!(text, "Slide 1:\n\n");
    }

    #[test]
    fn test_invalid_archive_is_parsing_error() {
        let file = tempfile::Builder::new().suffix(".pptx").tempfile().unwrap();
        std::fs::write(file.path(), b"not a pptx").unwrap();

        let result = extract_pptx(file.path());
        assert!(matches!(result, Err(TextfallError::Parsing { .. })));
    }
}
