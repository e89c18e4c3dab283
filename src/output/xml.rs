//! WordprocessingML fragments for the generated document parts.

use crate::core_types::ParagraphStyle;
use std::fmt::Write as _;

pub(super) const XML_DECLARATION: &str =
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
pub(super) const NS_W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub(super) const NS_R: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_PACKAGE_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

/// Escapes text for element content and attribute values.
///
/// Characters XML 1.0 cannot carry (most C0 controls, U+FFFE, U+FFFF) are dropped.
pub(crate) fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\t' | '\n' | '\r' => escaped.push(c),
            c if (c as u32) < 0x20 || c == '\u{FFFE}' || c == '\u{FFFF}' => {}
            c => escaped.push(c),
        }
    }
    escaped
}

/// Points to twentieths of a point (twips), the unit of `w:spacing`.
fn twips(points: f64) -> i64 {
    (points * 20.0).round() as i64
}

/// Points to half-points, the unit of `w:sz`.
fn half_points(points: f64) -> i64 {
    (points * 2.0).round() as i64
}

/// Run properties: the font for every script plus the size.
pub(super) fn run_properties(style: &ParagraphStyle) -> String {
    let font = escape(&style.font_name);
    let size = half_points(style.font_size);
    format!(
        r#"<w:rPr><w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:eastAsia="{font}" w:cs="{font}"/><w:sz w:val="{size}"/><w:szCs w:val="{size}"/></w:rPr>"#
    )
}

/// One run; tabs become `w:tab` elements between text pieces.
fn run(text: &str, rpr: &str) -> String {
    let mut xml = format!("<w:r>{}", rpr);
    for (i, piece) in text.split('\t').enumerate() {
        if i > 0 {
            xml.push_str("<w:tab/>");
        }
        if !piece.is_empty() || i == 0 {
            let _ = write!(xml, r#"<w:t xml:space="preserve">{}</w:t>"#, escape(piece));
        }
    }
    xml.push_str("</w:r>");
    xml
}

/// A body paragraph with exact line spacing and the given before/after spacing.
pub(super) fn body_paragraph(text: &str, style: &ParagraphStyle, rpr: &str) -> String {
    format!(
        r#"<w:p><w:pPr><w:spacing w:before="{}" w:after="{}" w:line="{}" w:lineRule="exact"/></w:pPr>{}</w:p>"#,
        twips(style.space_before),
        twips(style.space_after),
        twips(style.line_spacing),
        run(text, rpr)
    )
}

/// The default page header: one centered paragraph holding the title.
pub(super) fn header_part(title: &str, style: &ParagraphStyle) -> String {
    format!(
        r#"{XML_DECLARATION}<w:hdr xmlns:w="{NS_W}" xmlns:r="{NS_R}"><w:p><w:pPr><w:jc w:val="center"/></w:pPr>{}</w:p></w:hdr>"#,
        run(title, &run_properties(style))
    )
}

/// The main document part.
pub(super) fn document_part(body: &str, header_rel_id: Option<&str>, page_setup: &str) -> String {
    let header_reference = header_rel_id
        .map(|id| format!(r#"<w:headerReference w:type="default" r:id="{}"/>"#, id))
        .unwrap_or_default();
    // A body needs at least one paragraph before the section properties.
    let body = if body.is_empty() { "<w:p/>" } else { body };
    format!(
        r#"{XML_DECLARATION}<w:document xmlns:w="{NS_W}" xmlns:r="{NS_R}"><w:body>{body}<w:sectPr>{header_reference}{page_setup}</w:sectPr></w:body></w:document>"#
    )
}

/// A4 portrait with Word's default margins.
pub(super) const DEFAULT_PAGE_SETUP: &str = concat!(
    r#"<w:pgSz w:w="11906" w:h="16838"/>"#,
    r#"<w:pgMar w:top="1440" w:right="1800" w:bottom="1440" w:left="1800" w:header="851" w:footer="992" w:gutter="0"/>"#,
    r#"<w:cols w:space="425"/>"#,
    r#"<w:docGrid w:type="lines" w:linePitch="312"/>"#
);

/// Minimal style sheet used when no template is given.
pub(super) fn styles_part(style: &ParagraphStyle) -> String {
    format!(
        r#"{XML_DECLARATION}<w:styles xmlns:w="{NS_W}"><w:docDefaults><w:rPrDefault>{}</w:rPrDefault><w:pPrDefault><w:pPr/></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style></w:styles>"#,
        run_properties(style)
    )
}

/// A relationship entry for a `.rels` part.
pub(super) struct Relationship<'a> {
    pub id: &'a str,
    pub rel_type: &'a str,
    pub target: &'a str,
}

pub(super) fn relationships_part(relationships: &[Relationship<'_>]) -> String {
    let mut xml = format!(r#"{XML_DECLARATION}<Relationships xmlns="{NS_PACKAGE_RELS}">"#);
    for rel in relationships {
        let _ = write!(
            xml,
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            escape(rel.id),
            escape(rel.rel_type),
            escape(rel.target)
        );
    }
    xml.push_str("</Relationships>");
    xml
}

/// `[Content_Types].xml` from extension defaults and per-part overrides.
pub(super) fn content_types_part(defaults: &[(&str, &str)], overrides: &[(String, &str)]) -> String {
    let mut xml = format!(r#"{XML_DECLARATION}<Types xmlns="{NS_CONTENT_TYPES}">"#);
    for (extension, content_type) in defaults {
        let _ = write!(
            xml,
            r#"<Default Extension="{}" ContentType="{}"/>"#,
            extension, content_type
        );
    }
    for (part, content_type) in overrides {
        let _ = write!(
            xml,
            r#"<Override PartName="/{}" ContentType="{}"/>"#,
            escape(part),
            content_type
        );
    }
    xml.push_str("</Types>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
        assert_eq!(escape("x\u{0}\u{1b}y\tz"), "xy\tz");
        assert_eq!(escape("中文"), "中文");
    }

    #[test]
    fn test_units() {
        assert_eq!(twips(2.3), 46);
        assert_eq!(twips(10.5), 210);
        assert_eq!(twips(0.0), 0);
        assert_eq!(half_points(10.5), 21);
    }

    #[test]
    fn test_body_paragraph_spacing_and_font() {
        let style = ParagraphStyle::default();
        let xml = body_paragraph("x = 1", &style, &run_properties(&style));
        assert!(xml.contains(r#"<w:spacing w:before="0" w:after="46" w:line="210" w:lineRule="exact"/>"#));
        assert!(xml.contains(r#"w:eastAsia="宋体""#));
        assert!(xml.contains(r#"<w:sz w:val="21"/>"#));
        assert!(xml.contains(r#"<w:t xml:space="preserve">x = 1</w:t>"#));
    }

    #[test]
    fn test_tabs_become_tab_elements() {
        let xml = run("\tif x:", "");
        assert_eq!(
            xml,
            r#"<w:r><w:t xml:space="preserve"></w:t><w:tab/><w:t xml:space="preserve">if x:</w:t></w:r>"#
        );
    }

    #[test]
    fn test_header_is_centered() {
        let xml = header_part("Title & Co", &ParagraphStyle::default());
        assert!(xml.contains(r#"<w:jc w:val="center"/>"#));
        assert!(xml.contains("Title &amp; Co"));
    }

    #[test]
    fn test_empty_body_gets_a_paragraph() {
        let xml = document_part("", Some("rId1"), DEFAULT_PAGE_SETUP);
        assert!(xml.contains("<w:body><w:p/><w:sectPr>"));
        assert!(xml.contains(r#"<w:headerReference w:type="default" r:id="rId1"/>"#));
    }
}
