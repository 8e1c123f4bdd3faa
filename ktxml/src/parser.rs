//! Parsing of Android `values` resource files.
//!
//! Only `<dimen>`, `<color>` and `<style>` (with nested `<item>`) elements are
//! recognized; every other element is skipped. Element text is trimmed, and a
//! missing attribute reads as an empty string.

use std::{io::BufRead, path::Path};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use serde::Serialize;
use tracing::debug;

use crate::{
    error::Error,
    inherit::StyleFilter,
    traits::Parser,
    types::{RawColor, RawDimen, RawItem, RawResource, RawStyle},
};

/// Every recognized element of one resource document, grouped by tag in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceDocument {
    pub dimens: Vec<RawDimen>,
    pub colors: Vec<RawColor>,
    pub styles: Vec<RawStyle>,
}

impl Parser for ResourceDocument {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut document = ResourceDocument::default();
        // Enclosing elements (usually just `<resources>`) still waiting for their end tag.
        let mut open: Vec<String> = Vec::new();
        let mut has_root = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    has_root = true;
                    match e.name().as_ref() {
                        b"dimen" => {
                            let name = attribute(e, b"name")?;
                            let value = read_text(&mut xml_reader, "dimen")?;
                            document.dimens.push(RawDimen { name, value });
                        }
                        b"color" => {
                            let name = attribute(e, b"name")?;
                            let hex = read_text(&mut xml_reader, "color")?;
                            document.colors.push(RawColor { name, hex });
                        }
                        b"style" => {
                            let style = parse_style(e, &mut xml_reader)?;
                            document.styles.push(style);
                        }
                        other => open.push(String::from_utf8_lossy(other).into_owned()),
                    }
                }
                Ok(Event::End(_)) => {
                    open.pop();
                }
                Ok(Event::Empty(ref e)) => {
                    has_root = true;
                    match e.name().as_ref() {
                        b"dimen" => document.dimens.push(RawDimen {
                            name: attribute(e, b"name")?,
                            value: String::new(),
                        }),
                        b"color" => document.colors.push(RawColor {
                            name: attribute(e, b"name")?,
                            hex: String::new(),
                        }),
                        b"style" => document.styles.push(RawStyle {
                            name: attribute(e, b"name")?,
                            parent: parent_attribute(e)?,
                            items: Vec::new(),
                        }),
                        _ => {}
                    }
                }
                Ok(Event::Eof) => {
                    if let Some(tag) = open.last() {
                        return Err(Error::malformed(format!(
                            "unexpected end of document inside <{}>",
                            tag
                        )));
                    }
                    break;
                }
                Ok(_) => {}
                Err(e) => return Err(Error::XmlParse(e)),
            }
            buf.clear();
        }

        if !has_root {
            return Err(Error::malformed("document has no root element"));
        }

        debug!(
            "parsed {} dimens, {} colors, {} styles",
            document.dimens.len(),
            document.colors.len(),
            document.styles.len()
        );
        Ok(document)
    }
}

impl ResourceDocument {
    pub fn len(&self) -> usize {
        self.dimens.len() + self.colors.len() + self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies the document-wide policies in `options` (currently the style filter).
    pub fn apply(mut self, options: &ParseOptions) -> Self {
        if let Some(filter) = &options.style_filter {
            self.styles = filter.retain(self.styles);
        }
        self
    }

    /// Flattens the document: all dimens, then all colors, then all styles.
    pub fn into_raw_resources(self) -> Vec<RawResource> {
        self.dimens
            .into_iter()
            .map(RawResource::Dimen)
            .chain(self.colors.into_iter().map(RawResource::Color))
            .chain(self.styles.into_iter().map(RawResource::Style))
            .collect()
    }
}

/// Options for turning a resource document into raw resources.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// When set, styles not descending from the filter's root family are dropped.
    pub style_filter: Option<StyleFilter>,
}

impl ParseOptions {
    /// Creates default parse options (no style filtering).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the style inheritance filter.
    pub fn with_style_filter(mut self, style_filter: Option<StyleFilter>) -> Self {
        self.style_filter = style_filter;
        self
    }

    /// Enables style filtering rooted at `root`.
    pub fn with_style_root(self, root: impl Into<String>) -> Self {
        self.with_style_filter(Some(StyleFilter::new(root)))
    }
}

/// Parses an XML string into raw resources with default options.
pub fn parse_str(xml: &str) -> Result<Vec<RawResource>, Error> {
    parse_str_with_options(xml, &ParseOptions::default())
}

/// Parses an XML string into raw resources.
pub fn parse_str_with_options(xml: &str, options: &ParseOptions) -> Result<Vec<RawResource>, Error> {
    Ok(ResourceDocument::from_str(xml)?
        .apply(options)
        .into_raw_resources())
}

/// Parses an XML file into raw resources.
pub fn parse_file<P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> Result<Vec<RawResource>, Error> {
    Ok(ResourceDocument::read_from(path)?
        .apply(options)
        .into_raw_resources())
}

fn attribute(e: &BytesStart, key: &[u8]) -> Result<String, Error> {
    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|e| Error::MalformedInput(e.to_string()))?;
        if attr.key.as_ref() == key {
            return Ok(attr.unescape_value()?.to_string());
        }
    }
    Ok(String::new())
}

fn parent_attribute(e: &BytesStart) -> Result<Option<String>, Error> {
    let parent = attribute(e, b"parent")?;
    Ok(if parent.trim().is_empty() {
        None
    } else {
        Some(parent)
    })
}

fn parse_style<R: BufRead>(e: &BytesStart, xml_reader: &mut Reader<R>) -> Result<RawStyle, Error> {
    let name = attribute(e, b"name")?;
    let parent = parent_attribute(e)?;

    let mut items = Vec::new();
    let mut buf = Vec::new();
    let mut depth = 0usize;

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"item" => {
                let name = attribute(e, b"name")?;
                let reference = read_text(xml_reader, "item")?;
                items.push(RawItem { name, reference });
            }
            Ok(Event::Empty(ref e)) if e.name().as_ref() == b"item" => {
                items.push(RawItem::new(attribute(e, b"name")?, ""));
            }
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) if depth == 0 => break,
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Eof) => {
                return Err(Error::malformed(format!(
                    "unexpected end of document inside <style name=\"{}\">",
                    name
                )));
            }
            Ok(_) => {}
            Err(e) => return Err(Error::XmlParse(e)),
        }
        buf.clear();
    }

    Ok(RawStyle {
        name,
        parent,
        items,
    })
}

/// Collects the text content of the element whose start tag was just read,
/// consuming events up to and including its end tag.
fn read_text<R: BufRead>(xml_reader: &mut Reader<R>, tag: &str) -> Result<String, Error> {
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut depth = 0usize;

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Text(e)) => text.push_str(&e.unescape()?),
            Ok(Event::CData(e)) => text.push_str(&String::from_utf8_lossy(&e)),
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) if depth == 0 => break,
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Eof) => {
                return Err(Error::malformed(format!(
                    "unexpected end of document inside <{}>",
                    tag
                )));
            }
            Ok(_) => {}
            Err(e) => return Err(Error::XmlParse(e)),
        }
        buf.clear();
    }

    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimens() {
        let xml = r#"
        <resources>
            <dimen name="text_size_small">12sp</dimen>
            <dimen name="fab_margin">16dp</dimen>
            <dimen name="letter_spacing_normal">0.025</dimen>
        </resources>
        "#;
        let document = ResourceDocument::from_str(xml).unwrap();
        assert_eq!(document.dimens.len(), 3);
        assert_eq!(document.dimens[0].name, "text_size_small");
        assert_eq!(document.dimens[0].value, "12sp");
        assert_eq!(document.dimens[2].value, "0.025");
        assert!(document.colors.is_empty());
        assert!(document.styles.is_empty());
    }

    #[test]
    fn test_parse_colors_verbatim() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
        <resources>
            <color name="colorPrimary">#3F51B5</color>
            <color name="overlay">80FF4081</color>
        </resources>
        "#;
        let document = ResourceDocument::from_str(xml).unwrap();
        assert_eq!(
            document.colors,
            vec![
                RawColor {
                    name: "colorPrimary".to_string(),
                    hex: "#3F51B5".to_string()
                },
                RawColor {
                    name: "overlay".to_string(),
                    hex: "80FF4081".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_parse_style_items_in_order() {
        let xml = r#"
        <resources>
            <style name="TextAppearance.App.Body" parent="TextAppearance.AppCompat.Body1">
                <item name="android:textColor">@color/textColorPrimary</item>
                <item name="android:textSize">@dimen/font_size_large</item>
                <item name="android:textStyle">bold</item>
            </style>
        </resources>
        "#;
        let document = ResourceDocument::from_str(xml).unwrap();
        assert_eq!(document.styles.len(), 1);
        let style = &document.styles[0];
        assert_eq!(style.name, "TextAppearance.App.Body");
        assert_eq!(
            style.parent.as_deref(),
            Some("TextAppearance.AppCompat.Body1")
        );
        assert_eq!(
            style.items,
            vec![
                RawItem::new("android:textColor", "@color/textColorPrimary"),
                RawItem::new("android:textSize", "@dimen/font_size_large"),
                RawItem::new("android:textStyle", "bold"),
            ]
        );
    }

    #[test]
    fn test_blank_parent_is_absent() {
        let xml = r#"<resources><style name="A" parent=" "></style><style name="B"/></resources>"#;
        let document = ResourceDocument::from_str(xml).unwrap();
        assert_eq!(document.styles.len(), 2);
        assert_eq!(document.styles[0].parent, None);
        assert_eq!(document.styles[1].parent, None);
    }

    #[test]
    fn test_missing_attributes_read_as_empty() {
        let xml = r#"
        <resources>
            <dimen>4dp</dimen>
            <color name="empty"/>
            <style name="S"><item>@color/x</item><item name="android:textStyle"/></style>
        </resources>
        "#;
        let document = ResourceDocument::from_str(xml).unwrap();
        assert_eq!(document.dimens[0].name, "");
        assert_eq!(document.dimens[0].value, "4dp");
        assert_eq!(document.colors[0].hex, "");
        assert_eq!(document.styles[0].items[0].name, "");
        assert_eq!(document.styles[0].items[1].reference, "");
    }

    #[test]
    fn test_unrecognized_elements_ignored() {
        let xml = r#"
        <resources>
            <string name="app_name">Example</string>
            <integer name="columns">2</integer>
            <dimen name="gap">8dp</dimen>
        </resources>
        "#;
        let resources = parse_str(xml).unwrap();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].name(), "gap");
    }

    #[test]
    fn test_raw_resources_grouped_by_tag() {
        let xml = r#"
        <resources>
            <style name="S"/>
            <color name="c">#000000</color>
            <dimen name="d1">1dp</dimen>
            <dimen name="d2">2dp</dimen>
        </resources>
        "#;
        let names: Vec<String> = parse_str(xml)
            .unwrap()
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        assert_eq!(names, vec!["d1", "d2", "c", "S"]);
    }

    #[test]
    fn test_escaped_text_is_unescaped() {
        let xml = r#"<resources><style name="S"><item name="fontFamily">a &amp; b</item></style></resources>"#;
        let document = ResourceDocument::from_str(xml).unwrap();
        assert_eq!(document.styles[0].items[0].reference, "a & b");
    }

    #[test]
    fn test_mismatched_tags_fail() {
        let xml = r#"<resources><dimen name="a">1dp</color></resources>"#;
        let err = ResourceDocument::from_str(xml).unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_truncated_document_fails() {
        let xml = r#"<resources><style name="S"><item name="x">@color/a</item>"#;
        let err = ResourceDocument::from_str(xml).unwrap_err();
        assert!(err.is_malformed_input());
        assert!(err.to_string().contains("<style name=\"S\">"));
    }

    #[test]
    fn test_document_truncated_after_closed_element_fails() {
        let xml = r#"<resources><dimen name="a">1dp</dimen>"#;
        let err = parse_str(xml).unwrap_err();
        assert!(err.is_malformed_input());
        assert!(err.to_string().contains("inside <resources>"));
    }

    #[test]
    fn test_document_without_root_element_fails() {
        for xml in ["not xml at all", "", "<?xml version=\"1.0\"?>"] {
            let err = parse_str(xml).unwrap_err();
            assert!(err.is_malformed_input(), "unexpected error for {xml:?}: {err}");
        }
    }

    #[test]
    fn test_empty_resources_element() {
        let document = ResourceDocument::from_str("<resources/>").unwrap();
        assert!(document.is_empty());
        let document = ResourceDocument::from_bytes(b"<resources>\n</resources>").unwrap();
        assert_eq!(document.len(), 0);
    }

    #[test]
    fn test_style_filter_option() {
        let xml = r#"
        <resources>
            <style name="AppTheme" parent="Theme.AppCompat.Light"/>
            <style name="Headline" parent="TextAppearance.AppCompat.Headline"/>
        </resources>
        "#;
        let all = parse_str(xml).unwrap();
        assert_eq!(all.len(), 2);

        let options = ParseOptions::new().with_style_filter(Some(StyleFilter::default()));
        let filtered = parse_str_with_options(xml, &options).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name(), "Headline");
    }
}
