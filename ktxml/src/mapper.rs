//! Mapping of raw XML records into Kotlin resources.
//!
//! Each resource kind has its own typed entry point ([`Mapper::map_dimens`],
//! [`Mapper::map_colors`], [`Mapper::map_styles`]). [`Mapper::map_all`] accepts a
//! mixed batch and dispatches on every record's variant.
//!
//! Style items are resolved against an ordered table of reference prefixes.
//! Items that match nothing are dropped and reported as [`Diagnostic`]s rather
//! than failing the batch.

use std::fmt::{Display, Formatter};

use serde::Serialize;
use tracing::warn;

use crate::{
    error::Error,
    naming::{capitalize, normalize},
    types::{
        ColorResource, DimenResource, DimenUnit, LiteralResource, RawColor, RawDimen, RawItem,
        RawResource, RawStyle, ResourceKind, StyleItem, StyleResource, TargetResource,
    },
};

/// Reference marker for colors, e.g. `@color/textColorPrimary`.
pub const COLOR_REFERENCE: &str = "@color/";
/// Reference marker for dimensions, e.g. `@dimen/font_size_large`.
pub const DIMEN_REFERENCE: &str = "@dimen/";

/// Text style keywords emitted as `FontWeight` constants.
const FONT_WEIGHT_KEYWORDS: [&str; 3] = ["bold", "italic", "normal"];

/// Platform attributes renamed to their `TextStyle` parameter. `None` drops the item.
const SEMANTIC_NAMES: [(&str, Option<&str>); 3] = [
    ("android:textSize", Some("fontSize")),
    ("android:textStyle", Some("fontWeight")),
    ("android:textColor", Some("color")),
];

type ReferenceResolver = fn(&str, String, &str) -> StyleItem;

/// Checked in order; the first matching prefix wins.
const REFERENCE_RESOLVERS: [(&str, ReferenceResolver); 2] = [
    (COLOR_REFERENCE, resolve_color_reference),
    (DIMEN_REFERENCE, resolve_dimen_reference),
];

fn resolve_color_reference(project_name: &str, field: String, target: &str) -> StyleItem {
    StyleItem::Color(ColorResource {
        name: field,
        value: format!(
            "{}.{}",
            ResourceKind::Colors.object_name(project_name),
            normalize(target)
        ),
    })
}

fn resolve_dimen_reference(project_name: &str, field: String, target: &str) -> StyleItem {
    StyleItem::Dimen(DimenResource {
        name: field,
        value: format!(
            "{}.{}",
            ResourceKind::Dimens.object_name(project_name),
            normalize(target)
        ),
        unit: DimenUnit::Reference,
    })
}

/// Why a style item was left out of the generated style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The item's value is neither a known reference nor a font weight keyword.
    UnsupportedReference,
}

/// A recoverable problem found while mapping a style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Raw name of the style containing the item.
    pub style: String,
    /// Raw name of the item.
    pub item: String,
    /// The value that could not be resolved.
    pub reference: String,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            DiagnosticKind::UnsupportedReference => write!(
                f,
                "unsupported reference '{}' for item '{}' in style '{}'",
                self.reference, self.item, self.style
            ),
        }
    }
}

/// Mapped styles together with the items that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleMapping {
    pub styles: Vec<StyleResource>,
    pub diagnostics: Vec<Diagnostic>,
}

/// The result of mapping a mixed batch, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MappedResources {
    pub dimens: Vec<DimenResource>,
    pub colors: Vec<ColorResource>,
    pub styles: Vec<StyleResource>,
    pub diagnostics: Vec<Diagnostic>,
}

impl MappedResources {
    /// All mapped resources as [`TargetResource`]s: dimens, then colors, then styles.
    pub fn into_target_resources(self) -> Vec<TargetResource> {
        self.dimens
            .into_iter()
            .map(TargetResource::Dimen)
            .chain(self.colors.into_iter().map(TargetResource::Color))
            .chain(self.styles.into_iter().map(TargetResource::Style))
            .collect()
    }
}

/// Maps raw resources for one project. The project name prefixes cross-references
/// such as `ExampleColors.primary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapper {
    project_name: String,
}

impl Mapper {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Maps dimensions. Dimensions cannot fail to map.
    pub fn map_dimens(&self, dimens: &[RawDimen]) -> Vec<DimenResource> {
        dimens.iter().map(map_dimen).collect()
    }

    /// Maps colors. A single malformed hex value fails the whole batch.
    pub fn map_colors(&self, colors: &[RawColor]) -> Result<Vec<ColorResource>, Error> {
        colors.iter().map(map_color).collect()
    }

    /// Maps styles, collecting a diagnostic for every item that is dropped.
    pub fn map_styles(&self, styles: &[RawStyle]) -> StyleMapping {
        let mut mapping = StyleMapping::default();
        for style in styles {
            let resource = self.map_style(style, &mut mapping.diagnostics);
            mapping.styles.push(resource);
        }
        mapping
    }

    /// Maps a batch that may mix kinds, keeping each kind in input order.
    pub fn map_all(&self, raws: Vec<RawResource>) -> Result<MappedResources, Error> {
        let mut mapped = MappedResources::default();
        for raw in raws {
            match raw {
                RawResource::Dimen(d) => mapped.dimens.push(map_dimen(&d)),
                RawResource::Color(c) => mapped.colors.push(map_color(&c)?),
                RawResource::Style(s) => {
                    let style = self.map_style(&s, &mut mapped.diagnostics);
                    mapped.styles.push(style);
                }
            }
        }
        Ok(mapped)
    }

    fn map_style(&self, style: &RawStyle, diagnostics: &mut Vec<Diagnostic>) -> StyleResource {
        let items = style
            .items
            .iter()
            .filter_map(|item| {
                let field = field_name(&item.name)?;
                let resolved = self.resolve_item(item, field);
                if resolved.is_none() {
                    warn!(
                        "Unsupported reference '{}' for '{}' in style '{}'",
                        item.reference, item.name, style.name
                    );
                    diagnostics.push(Diagnostic {
                        kind: DiagnosticKind::UnsupportedReference,
                        style: style.name.clone(),
                        item: item.name.clone(),
                        reference: item.reference.clone(),
                    });
                }
                resolved
            })
            .collect();

        StyleResource {
            name: normalize(&style.name),
            items,
        }
    }

    fn resolve_item(&self, item: &RawItem, field: String) -> Option<StyleItem> {
        for (prefix, resolve) in REFERENCE_RESOLVERS {
            if let Some(target) = item.reference.strip_prefix(prefix) {
                return Some(resolve(&self.project_name, field, target));
            }
        }

        if FONT_WEIGHT_KEYWORDS.contains(&item.reference.as_str()) {
            return Some(StyleItem::Literal(LiteralResource {
                name: field,
                value: format!("FontWeight.{}", capitalize(&item.reference)),
            }));
        }

        None
    }
}

/// The generated parameter name for a style item, or `None` when the item is dropped.
fn field_name(item_name: &str) -> Option<String> {
    match SEMANTIC_NAMES.iter().find(|(name, _)| *name == item_name) {
        Some((_, Some(semantic))) => Some(normalize(semantic)),
        Some((_, None)) => None,
        None => Some(normalize(item_name)),
    }
}

fn map_color(color: &RawColor) -> Result<ColorResource, Error> {
    let hex = color.hex.strip_prefix('#').unwrap_or(&color.hex);
    let is_hex = hex.chars().all(|c| c.is_ascii_hexdigit());
    let argb = match hex.chars().count() {
        6 if is_hex => format!("FF{}", hex),
        8 if is_hex => hex.to_string(),
        _ => {
            return Err(Error::InvalidColorFormat {
                name: color.name.clone(),
                hex: color.hex.clone(),
            });
        }
    };
    Ok(ColorResource {
        name: normalize(&color.name),
        value: format!("Color(0x{})", argb),
    })
}

fn map_dimen(dimen: &RawDimen) -> DimenResource {
    let (value, unit) = if let Some(value) = dimen.value.strip_suffix("sp") {
        (value, DimenUnit::Sp)
    } else if let Some(value) = dimen.value.strip_suffix("dp") {
        (value, DimenUnit::Dp)
    } else {
        (dimen.value.as_str(), DimenUnit::Float)
    };

    // Compose expects letter spacing in sp even when the XML value is unitless.
    let unit = if dimen.name.to_ascii_lowercase().contains("letter_spacing") {
        DimenUnit::Sp
    } else {
        unit
    };

    DimenResource {
        name: normalize(&dimen.name),
        value: value.to_string(),
        unit,
    }
}
