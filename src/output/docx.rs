// src/output/docx.rs

//! The `.docx` backend.
//!
//! A document is assembled in memory as WordprocessingML and written as a zip
//! package on `save`. With a template, every package part except the body,
//! headers, footers and relationship parts is carried over unchanged, so the
//! template's styles, theme, settings and fonts apply to the output.

use super::xml::{self, Relationship};
use super::DocumentSink;
use crate::core_types::ParagraphStyle;
use crate::errors::{io_error_with_path, Error, Result};
use log::{debug, trace};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

const DOCUMENT_PART: &str = "word/document.xml";
const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";
const PACKAGE_RELS_PART: &str = "_rels/.rels";
const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
const HEADER_PART: &str = "word/header1.xml";
const STYLES_PART: &str = "word/styles.xml";
const HEADER_REL_ID: &str = "rId1";

const CT_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const CT_HEADER: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml";
const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_HEADER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header";

const DEFAULT_CONTENT_TYPES: &[(&str, &str)] = &[
    ("rels", "application/vnd.openxmlformats-package.relationships+xml"),
    ("xml", "application/xml"),
    ("png", "image/png"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("gif", "image/gif"),
    ("emf", "image/x-emf"),
    ("wmf", "image/x-wmf"),
];

/// A package part the backend knows how to register.
struct KnownPart {
    path: &'static str,
    content_type: &'static str,
    /// Relationship type from the main document, for parts under `word/`.
    document_rel: Option<&'static str>,
}

const KNOWN_PARTS: &[KnownPart] = &[
    KnownPart {
        path: STYLES_PART,
        content_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        document_rel: Some("http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles"),
    },
    KnownPart {
        path: "word/settings.xml",
        content_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml",
        document_rel: Some("http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings"),
    },
    KnownPart {
        path: "word/fontTable.xml",
        content_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.fontTable+xml",
        document_rel: Some("http://schemas.openxmlformats.org/officeDocument/2006/relationships/fontTable"),
    },
    KnownPart {
        path: "word/webSettings.xml",
        content_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.webSettings+xml",
        document_rel: Some("http://schemas.openxmlformats.org/officeDocument/2006/relationships/webSettings"),
    },
    KnownPart {
        path: "word/numbering.xml",
        content_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml",
        document_rel: Some("http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering"),
    },
    KnownPart {
        path: "word/theme/theme1.xml",
        content_type: "application/vnd.openxmlformats-officedocument.theme+xml",
        document_rel: Some("http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme"),
    },
    KnownPart {
        path: "word/footnotes.xml",
        content_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.footnotes+xml",
        document_rel: Some("http://schemas.openxmlformats.org/officeDocument/2006/relationships/footnotes"),
    },
    KnownPart {
        path: "word/endnotes.xml",
        content_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.endnotes+xml",
        document_rel: Some("http://schemas.openxmlformats.org/officeDocument/2006/relationships/endnotes"),
    },
    KnownPart {
        path: "word/stylesWithEffects.xml",
        content_type: "application/vnd.ms-word.stylesWithEffects+xml",
        document_rel: Some("http://schemas.microsoft.com/office/2007/relationships/stylesWithEffects"),
    },
    KnownPart {
        path: "docProps/core.xml",
        content_type: "application/vnd.openxmlformats-package.core-properties+xml",
        document_rel: None,
    },
    KnownPart {
        path: "docProps/app.xml",
        content_type: "application/vnd.openxmlformats-officedocument.extended-properties+xml",
        document_rel: None,
    },
];

fn known_part(path: &str) -> Option<&'static KnownPart> {
    KNOWN_PARTS.iter().find(|part| part.path == path)
}

/// Parts of a template that are regenerated rather than carried.
fn is_regenerated(name: &str) -> bool {
    name == DOCUMENT_PART
        || name == DOCUMENT_RELS_PART
        || name == CONTENT_TYPES_PART
        || is_header_or_footer(name)
        || name
            .strip_prefix("word/_rels/")
            .is_some_and(is_header_or_footer_rels)
}

fn is_header_or_footer(name: &str) -> bool {
    name.strip_prefix("word/")
        .is_some_and(|rest| (rest.starts_with("header") || rest.starts_with("footer")) && rest.ends_with(".xml"))
}

fn is_header_or_footer_rels(rest: &str) -> bool {
    (rest.starts_with("header") || rest.starts_with("footer")) && rest.ends_with(".xml.rels")
}

static SECTION_PROPERTIES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<w:sectPr(?:\s[^>]*[^/])?>(.*?)</w:sectPr>").expect("section pattern is valid")
});

static PAGE_SETUP_ELEMENTS: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        r"<w:pgSz\b[^>]*/>",
        r"<w:pgMar\b[^>]*/>",
        r"(?s)<w:cols\b(?:[^>]*/>|[^>]*[^/]>.*?</w:cols>)",
        r"<w:docGrid\b[^>]*/>",
    ]
    .map(|pattern| Regex::new(pattern).expect("page setup pattern is valid"))
});

/// Extracts page size, margins, columns and grid from the body's section.
///
/// Returns `None` when the document has no section with a page size.
fn extract_page_setup(document_xml: &str) -> Option<String> {
    let section = SECTION_PROPERTIES
        .captures_iter(document_xml)
        .last()
        .and_then(|caps| caps.get(1))?
        .as_str();
    if !PAGE_SETUP_ELEMENTS[0].is_match(section) {
        return None;
    }
    Some(
        PAGE_SETUP_ELEMENTS
            .iter()
            .filter_map(|element| element.find(section))
            .map(|m| m.as_str())
            .collect(),
    )
}

/// Creates the temporary file the package is written to before it is moved
/// into place. On Unix it is created with mode `0o666` so the process umask
/// decides the final permissions, as for any newly created file.
fn staging_file(parent: &Path) -> std::io::Result<NamedTempFile> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tempfile::Builder::new()
            .permissions(std::fs::Permissions::from_mode(0o666))
            .tempfile_in(parent)
    }
    #[cfg(not(unix))]
    {
        NamedTempFile::new_in(parent)
    }
}

/// The parts taken from a template package.
#[derive(Debug, Clone, Default)]
struct TemplateParts {
    /// Carried entries, in archive order.
    carried: Vec<(String, Vec<u8>)>,
    page_setup: Option<String>,
}

impl TemplateParts {
    fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| io_error_with_path(e, path))?;
        let mut archive = ZipArchive::new(file).map_err(|e| {
            Error::Backend(format!("Template {} is not a .docx package: {}", path.display(), e))
        })?;

        let mut parts = TemplateParts::default();
        let mut has_document = false;
        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            if entry.is_dir() {
                continue;
            }
            let name = entry.name().to_string();
            // The declared size comes from the archive and is not trusted.
            let mut data = Vec::new();
            entry.read_to_end(&mut data).map_err(|e| {
                Error::Backend(format!("Could not read {} from template: {}", name, e))
            })?;

            if name == DOCUMENT_PART {
                has_document = true;
                parts.page_setup = extract_page_setup(&String::from_utf8_lossy(&data));
            }
            if is_regenerated(&name) {
                trace!("Template part {} is regenerated", name);
            } else {
                parts.carried.push((name, data));
            }
        }

        if !has_document {
            return Err(Error::Backend(format!(
                "Template {} has no {}",
                path.display(),
                DOCUMENT_PART
            )));
        }
        debug!(
            "Loaded template {} ({} parts carried)",
            path.display(),
            parts.carried.len()
        );
        Ok(parts)
    }

    fn has(&self, name: &str) -> bool {
        self.carried.iter().any(|(carried, _)| carried == name)
    }
}

/// Builds a `.docx` document: one paragraph per source line, the title in the
/// default page header.
#[derive(Debug, Clone)]
pub struct DocxSink {
    header_style: ParagraphStyle,
    title: String,
    body: String,
    paragraphs: usize,
    template: Option<TemplateParts>,
}

impl DocxSink {
    /// A sink producing a document with built-in styles and A4 pages.
    pub fn new(header_style: ParagraphStyle) -> Self {
        Self {
            header_style,
            title: String::new(),
            body: String::new(),
            paragraphs: 0,
            template: None,
        }
    }

    /// A sink whose output carries the parts of the template at `path`.
    ///
    /// # Errors
    /// `Error::Io` if the template cannot be opened; `Error::Backend` if it is
    /// not a zip package or has no main document part.
    pub fn from_template(path: &Path, header_style: ParagraphStyle) -> Result<Self> {
        let template = TemplateParts::load(path)?;
        Ok(Self {
            template: Some(template),
            ..Self::new(header_style)
        })
    }

    /// Number of paragraphs appended so far.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs
    }

    fn carried(&self) -> &[(String, Vec<u8>)] {
        self.template
            .as_ref()
            .map(|t| t.carried.as_slice())
            .unwrap_or_default()
    }

    fn carries(&self, name: &str) -> bool {
        self.template.as_ref().is_some_and(|t| t.has(name))
    }

    /// Every part of the output package, generated parts first.
    fn package_parts(&self) -> Vec<(String, Vec<u8>)> {
        let page_setup = self
            .template
            .as_ref()
            .and_then(|t| t.page_setup.as_deref())
            .unwrap_or(xml::DEFAULT_PAGE_SETUP);

        let mut parts: Vec<(String, Vec<u8>)> = vec![
            (
                DOCUMENT_PART.to_string(),
                xml::document_part(&self.body, Some(HEADER_REL_ID), page_setup).into_bytes(),
            ),
            (
                HEADER_PART.to_string(),
                xml::header_part(&self.title, &self.header_style).into_bytes(),
            ),
        ];
        if !self.carries(STYLES_PART) {
            parts.push((
                STYLES_PART.to_string(),
                xml::styles_part(&self.header_style).into_bytes(),
            ));
        }
        if !self.carries(PACKAGE_RELS_PART) {
            parts.push((PACKAGE_RELS_PART.to_string(), self.package_rels().into_bytes()));
        }
        parts.extend(self.carried().iter().cloned());

        // Relationships and content types describe the final part list.
        let document_rels = self.document_rels(&parts);
        let content_types = content_types(&parts);
        parts.push((DOCUMENT_RELS_PART.to_string(), document_rels.into_bytes()));
        parts.insert(0, (CONTENT_TYPES_PART.to_string(), content_types.into_bytes()));
        parts
    }

    fn package_rels(&self) -> String {
        let mut relationships = vec![Relationship {
            id: "rId1",
            rel_type: REL_OFFICE_DOCUMENT,
            target: DOCUMENT_PART,
        }];
        if self.carries("docProps/core.xml") {
            relationships.push(Relationship {
                id: "rId2",
                rel_type: "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties",
                target: "docProps/core.xml",
            });
        }
        if self.carries("docProps/app.xml") {
            relationships.push(Relationship {
                id: "rId3",
                rel_type: "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties",
                target: "docProps/app.xml",
            });
        }
        xml::relationships_part(&relationships)
    }

    fn document_rels(&self, parts: &[(String, Vec<u8>)]) -> String {
        let related: Vec<(String, &str, &str)> = parts
            .iter()
            .filter_map(|(name, _)| {
                let rel_type = known_part(name)?.document_rel?;
                let target = name.strip_prefix("word/")?;
                Some((rel_type, target))
            })
            .enumerate()
            .map(|(i, (rel_type, target))| (format!("rId{}", i + 2), rel_type, target))
            .collect();

        let mut relationships = vec![Relationship {
            id: HEADER_REL_ID,
            rel_type: REL_HEADER,
            target: "header1.xml",
        }];
        relationships.extend(related.iter().map(|(id, rel_type, target)| Relationship {
            id: id.as_str(),
            rel_type,
            target,
        }));
        xml::relationships_part(&relationships)
    }
}

/// Content types: extension defaults plus an override per known XML part.
fn content_types(parts: &[(String, Vec<u8>)]) -> String {
    let overrides: Vec<(String, &str)> = parts
        .iter()
        .filter_map(|(name, _)| {
            let content_type = match name.as_str() {
                DOCUMENT_PART => CT_DOCUMENT,
                HEADER_PART => CT_HEADER,
                other => known_part(other)?.content_type,
            };
            Some((name.clone(), content_type))
        })
        .collect();
    xml::content_types_part(DEFAULT_CONTENT_TYPES, &overrides)
}

fn backend_write_error(part: &str, err: std::io::Error) -> Error {
    Error::Backend(format!("Failed to write {}: {}", part, err))
}

impl DocumentSink for DocxSink {
    fn begin(&mut self, title: &str) -> Result<()> {
        self.title = title.to_string();
        self.body.clear();
        self.paragraphs = 0;
        Ok(())
    }

    fn append_lines(
        &mut self,
        source_path: &Path,
        lines: &[String],
        style: &ParagraphStyle,
    ) -> Result<()> {
        let rpr = xml::run_properties(style);
        for line in lines {
            self.body.push_str(&xml::body_paragraph(line, style, &rpr));
        }
        self.paragraphs += lines.len();
        trace!("Appended {} lines from {}", lines.len(), source_path.display());
        Ok(())
    }

    fn save(&mut self, output_path: &Path) -> Result<()> {
        let parent = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = staging_file(parent).map_err(|e| io_error_with_path(e, parent))?;

        {
            let mut zip = ZipWriter::new(tmp.as_file_mut());
            let options =
                SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
            for (name, data) in self.package_parts() {
                zip.start_file(name.as_str(), options)?;
                zip.write_all(&data)
                    .map_err(|e| backend_write_error(&name, e))?;
            }
            zip.finish()?;
        }

        tmp.persist(output_path)
            .map_err(|e| io_error_with_path(e.error, output_path))?;
        debug!(
            "Wrote {} ({} paragraphs)",
            output_path.display(),
            self.paragraphs
        );
        Ok(())
    }
}
