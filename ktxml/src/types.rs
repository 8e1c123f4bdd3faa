//! Core types for ktxml.
//!
//! The parser decodes XML into the raw model ([`RawResource`]); the mapper turns
//! raw records into the Kotlin model ([`TargetResource`]) consumed by the emitter.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::Serialize;

use crate::error::Error;

/// The three resource files understood by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Dimens,
    Colors,
    Styles,
}

impl ResourceKind {
    /// All kinds, in the order a full run processes them.
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Dimens,
        ResourceKind::Colors,
        ResourceKind::Styles,
    ];

    /// The conventional input file name inside the `values` directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            ResourceKind::Dimens => "dimens.xml",
            ResourceKind::Colors => "colors.xml",
            ResourceKind::Styles => "styles.xml",
        }
    }

    /// Suffix appended to the project name to form the generated object name.
    pub fn object_suffix(&self) -> &'static str {
        match self {
            ResourceKind::Dimens => "Dimens",
            ResourceKind::Colors => "Colors",
            ResourceKind::Styles => "Styles",
        }
    }

    /// Name of the generated Kotlin object, e.g. `ExampleColors`.
    pub fn object_name(&self, project_name: &str) -> String {
        format!("{}{}", project_name, self.object_suffix())
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Dimens => write!(f, "dimens"),
            ResourceKind::Colors => write!(f, "colors"),
            ResourceKind::Styles => write!(f, "styles"),
        }
    }
}

/// Accepts `dimens`, `colors`, `styles` and their singular forms, case-insensitively.
///
/// # Example
/// ```rust
/// use ktxml::types::ResourceKind;
/// use std::str::FromStr;
/// assert_eq!(ResourceKind::from_str("Colors").unwrap(), ResourceKind::Colors);
/// assert_eq!(ResourceKind::from_str("dimen").unwrap(), ResourceKind::Dimens);
/// assert!(ResourceKind::from_str("strings").is_err());
/// ```
impl FromStr for ResourceKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "dimens" | "dimen" => Ok(ResourceKind::Dimens),
            "colors" | "color" => Ok(ResourceKind::Colors),
            "styles" | "style" => Ok(ResourceKind::Styles),
            other => Err(Error::UnknownKind(other.to_string())),
        }
    }
}

/// A record read directly from XML. Names and values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawResource {
    Dimen(RawDimen),
    Color(RawColor),
    Style(RawStyle),
}

impl RawResource {
    pub fn name(&self) -> &str {
        match self {
            RawResource::Dimen(d) => &d.name,
            RawResource::Color(c) => &c.name,
            RawResource::Style(s) => &s.name,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            RawResource::Dimen(_) => ResourceKind::Dimens,
            RawResource::Color(_) => ResourceKind::Colors,
            RawResource::Style(_) => ResourceKind::Styles,
        }
    }
}

/// `<dimen name="...">18sp</dimen>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawDimen {
    pub name: String,
    /// Text content with the unit suffix still attached.
    pub value: String,
}

/// `<color name="...">#3F51B5</color>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawColor {
    pub name: String,
    pub hex: String,
}

/// `<style name="..." parent="...">` with its `<item>` children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawStyle {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    pub items: Vec<RawItem>,
}

/// `<item name="android:textSize">@dimen/font_size_large</item>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawItem {
    pub name: String,
    #[serde(rename = "ref")]
    pub reference: String,
}

impl RawItem {
    pub fn new(name: impl Into<String>, reference: impl Into<String>) -> Self {
        RawItem {
            name: name.into(),
            reference: reference.into(),
        }
    }
}

/// Unit attached to a generated dimension value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DimenUnit {
    /// Scale-independent pixels (`.sp`).
    Sp,
    /// Density-independent pixels (`.dp`).
    Dp,
    /// Plain float literal (`f`).
    Float,
    /// The value is a reference to another dimension and already carries its unit.
    Reference,
}

impl DimenUnit {
    /// The Kotlin token appended to the numeric literal.
    pub fn suffix(&self) -> &'static str {
        match self {
            DimenUnit::Sp => ".sp",
            DimenUnit::Dp => ".dp",
            DimenUnit::Float => "f",
            DimenUnit::Reference => "",
        }
    }
}

/// `val name = Color(0xFF3F51B5)` or, inside a style, `color = ExampleColors.primary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorResource {
    pub name: String,
    pub value: String,
}

/// `val name = 16.dp` or, inside a style, `fontSize = ExampleDimens.large`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimenResource {
    pub name: String,
    pub value: String,
    pub unit: DimenUnit,
}

impl DimenResource {
    /// The full Kotlin expression: numeric literal followed by the unit token.
    pub fn expression(&self) -> String {
        format!("{}{}", self.value, self.unit.suffix())
    }
}

/// A value emitted verbatim, such as `FontWeight.Bold`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiteralResource {
    pub name: String,
    pub value: String,
}

impl LiteralResource {
    pub fn is_font_weight(&self) -> bool {
        self.value.starts_with("FontWeight.")
    }
}

/// A `TextStyle(...)` definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleResource {
    pub name: String,
    /// Resolved items, in the order they appeared in the XML.
    pub items: Vec<StyleItem>,
}

impl StyleResource {
    pub fn uses_font_weight(&self) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, StyleItem::Literal(l) if l.is_font_weight()))
    }
}

/// One named argument of a generated `TextStyle(...)` call.
///
/// Styles never nest, so this is the subset of [`TargetResource`] that may appear
/// inside a [`StyleResource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StyleItem {
    Color(ColorResource),
    Dimen(DimenResource),
    Literal(LiteralResource),
}

impl StyleItem {
    pub fn name(&self) -> &str {
        match self {
            StyleItem::Color(c) => &c.name,
            StyleItem::Dimen(d) => &d.name,
            StyleItem::Literal(l) => &l.name,
        }
    }

    /// The Kotlin expression on the right-hand side of `name = ...`.
    pub fn expression(&self) -> String {
        match self {
            StyleItem::Color(c) => c.value.clone(),
            StyleItem::Dimen(d) => d.expression(),
            StyleItem::Literal(l) => l.value.clone(),
        }
    }
}

impl From<StyleItem> for TargetResource {
    fn from(value: StyleItem) -> Self {
        match value {
            StyleItem::Color(c) => TargetResource::Color(c),
            StyleItem::Dimen(d) => TargetResource::Dimen(d),
            StyleItem::Literal(l) => TargetResource::Literal(l),
        }
    }
}

/// A record ready for Kotlin emission. Names are already normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TargetResource {
    Color(ColorResource),
    Dimen(DimenResource),
    Style(StyleResource),
    Literal(LiteralResource),
}

impl TargetResource {
    pub fn name(&self) -> &str {
        match self {
            TargetResource::Color(c) => &c.name,
            TargetResource::Dimen(d) => &d.name,
            TargetResource::Style(s) => &s.name,
            TargetResource::Literal(l) => &l.name,
        }
    }
}
