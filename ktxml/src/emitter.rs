//! Kotlin source emission for mapped resources.
//!
//! Each resource kind becomes one Kotlin `object` named `<Project><Kind>`, with one
//! `val` per resource in input order. The layout is fixed; downstream Compose code
//! compiles against these exact imports and names.

use indoc::indoc;

use crate::types::{ColorResource, DimenResource, ResourceKind, StyleResource};

const FONT_WEIGHT_IMPORT: &str = "import androidx.compose.ui.text.font.FontWeight\n";

/// Renders `<Project>Colors.kt`.
///
/// ```rust
/// use ktxml::{emitter::emit_colors, types::ColorResource};
/// let colors = vec![ColorResource { name: "accent".into(), value: "Color(0xFFFF4081)".into() }];
/// let source = emit_colors("com.example", "Example", &colors);
/// assert!(source.contains("object ExampleColors {\n    val accent = Color(0xFFFF4081)\n}"));
/// ```
pub fn emit_colors(package_name: &str, project_name: &str, colors: &[ColorResource]) -> String {
    let mut content = format!(
        indoc! {"
        package {}

        import androidx.compose.ui.graphics.Color

        object {} {{
        "},
        package_name,
        ResourceKind::Colors.object_name(project_name)
    );

    for color in colors {
        content.push_str(&format!("    val {} = {}\n", color.name, color.value));
    }

    content.push_str("}\n");
    content
}

/// Renders `<Project>Dimens.kt`.
pub fn emit_dimens(package_name: &str, project_name: &str, dimens: &[DimenResource]) -> String {
    let mut content = format!(
        indoc! {"
        package {}

        import androidx.compose.ui.unit.dp
        import androidx.compose.ui.unit.sp

        object {} {{
        "},
        package_name,
        ResourceKind::Dimens.object_name(project_name)
    );

    for dimen in dimens {
        content.push_str(&format!("    val {} = {}\n", dimen.name, dimen.expression()));
    }

    content.push_str("}\n");
    content
}

/// Renders `<Project>Styles.kt`, one `TextStyle` per style.
///
/// `FontWeight` is imported only when some style uses it. The sibling colors and
/// dimens objects are always imported since items refer to them by name.
pub fn emit_styles(package_name: &str, project_name: &str, styles: &[StyleResource]) -> String {
    let font_weight_import = if styles.iter().any(StyleResource::uses_font_weight) {
        FONT_WEIGHT_IMPORT
    } else {
        ""
    };

    let mut content = format!(
        indoc! {"
        package {package}

        {font_weight}import androidx.compose.ui.text.TextStyle
        import {package}.{colors}
        import {package}.{dimens}

        object {object} {{
        "},
        package = package_name,
        font_weight = font_weight_import,
        colors = ResourceKind::Colors.object_name(project_name),
        dimens = ResourceKind::Dimens.object_name(project_name),
        object = ResourceKind::Styles.object_name(project_name),
    );

    for style in styles {
        content.push_str(&format!("    val {} = TextStyle(\n", style.name));
        for item in &style.items {
            content.push_str(&format!("        {} = {},\n", item.name(), item.expression()));
        }
        content.push_str("    )\n\n");
    }

    content.push_str("}\n");
    content
}
