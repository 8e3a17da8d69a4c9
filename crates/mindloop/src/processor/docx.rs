use std::io::{Cursor, Read, Seek};

use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, Event};
use quick_xml::Reader;

use crate::error::ProcessError;
use crate::processor::DocumentDecoder;

/// Reads the body text of an OOXML word-processing document.
pub struct DocxDecoder;

impl DocxDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocxDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentDecoder for DocxDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<String, ProcessError> {
        let _span = tracing::debug_span!("decoder.docx", bytes = bytes.len()).entered();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ProcessError::DocxProcessing(format!("Failed to open DOCX: {}", e)))?;

        extract_docx_text(&mut archive)
    }
}

fn extract_docx_text<R: Read + Seek>(
    archive: &mut zip::ZipArchive<R>,
) -> Result<String, ProcessError> {
    let mut document_xml = archive
        .by_name("word/document.xml")
        .map_err(|e| ProcessError::DocxProcessing(format!("Failed to find document.xml: {}", e)))?;

    let mut xml_content = String::new();
    document_xml
        .read_to_string(&mut xml_content)
        .map_err(|e| ProcessError::DocxProcessing(format!("Failed to read document.xml: {}", e)))?;

    parse_docx_xml(&xml_content)
}

/// Collects `w:t` runs, one line per `w:p` paragraph. Whitespace inside a
/// run is kept; whitespace between elements never reaches the output.
fn parse_docx_xml(xml: &str) -> Result<String, ProcessError> {
    let mut reader = Reader::from_str(xml);

    let mut text = String::new();
    let mut in_text_element = false;
    let mut in_paragraph = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text_element = true,
                b"p" => in_paragraph = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => {
                // <w:tab/> and <w:br/> separate words inside a run
                if in_paragraph && matches!(e.local_name().as_ref(), b"tab" | b"br") {
                    text.push(' ');
                }
            }
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"t" => in_text_element = false,
                b"p" => {
                    if in_paragraph {
                        text.push('\n');
                        in_paragraph = false;
                    }
                }
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text_element {
                    let decoded = e.decode().map_err(|e| {
                        ProcessError::DocxProcessing(format!("Invalid text encoding: {}", e))
                    })?;
                    text.push_str(&decoded);
                }
            }
            Ok(Event::GeneralRef(r)) => {
                if in_text_element {
                    push_entity(&mut text, &r)?;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ProcessError::DocxProcessing(format!(
                    "XML parsing error: {}",
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(text)
}

/// Resolves `&#NN;` and the predefined XML entities. Unknown named entities
/// are dropped.
fn push_entity(text: &mut String, reference: &BytesRef<'_>) -> Result<(), ProcessError> {
    let resolved = reference
        .resolve_char_ref()
        .map_err(|e| ProcessError::DocxProcessing(format!("Invalid character reference: {}", e)))?;
    if let Some(ch) = resolved {
        text.push(ch);
        return Ok(());
    }

    let name = reference
        .decode()
        .map_err(|e| ProcessError::DocxProcessing(format!("Invalid entity name: {}", e)))?;
    if let Some(value) = resolve_predefined_entity(&name) {
        text.push_str(value);
    }
    Ok(())
}
