use indoc::indoc;
use ktxml::emitter::{emit_colors, emit_dimens, emit_styles};
use ktxml::{Generator, GeneratorConfig, Mapper, ResourceKind, parse_str};

const DIMENS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<resources>
    <dimen name="font_size_large">18sp</dimen>
    <dimen name="font_size_small">12sp</dimen>
    <dimen name="line_height_large">24sp</dimen>
    <dimen name="line_height_small">16sp</dimen>
    <dimen name="letter_spacing_normal">0.025</dimen>
    <dimen name="letter_spacing_large">0.05</dimen>
</resources>
"#;

const COLORS_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <color name="textColorPrimary">#000000</color>
    <color name="textColorSecondary">#808080</color>
    <color name="colorAccent">#FF4081</color>
    <color name="colorPrimary">#3F51B5</color>
</resources>
"#;

const STYLES_XML: &str = r#"
<resources>
    <style name="MyStyle">
        <item name="android:textColor">@color/textColorPrimary</item>
        <item name="android:textSize">@dimen/font_size_large</item>
        <item name="android:textStyle">bold</item>
        <item name="lineHeight">@dimen/line_height_large</item>
        <item name="android:letterSpacing">@dimen/letter_spacing_normal</item>
    </style>
    <style name="AnotherStyle">
        <item name="android:textColor">@color/textColorSecondary</item>
        <item name="android:textSize">@dimen/font_size_small</item>
        <item name="android:textStyle">italic</item>
        <item name="lineHeight">@dimen/line_height_small</item>
        <item name="android:letterSpacing">@dimen/letter_spacing_large</item>
    </style>
</resources>
"#;

fn generator() -> Generator {
    Generator::new(GeneratorConfig::new("NewExample", "com.org.newexample")).unwrap()
}

#[test]
fn test_dimens_pipeline() {
    let rendered = generator().render(ResourceKind::Dimens, DIMENS_XML).unwrap();
    let expected = indoc! {"
        package com.org.newexample

        import androidx.compose.ui.unit.dp
        import androidx.compose.ui.unit.sp

        object NewExampleDimens {
            val fontSizeLarge = 18.sp
            val fontSizeSmall = 12.sp
            val lineHeightLarge = 24.sp
            val lineHeightSmall = 16.sp
            val letterSpacingNormal = 0.025.sp
            val letterSpacingLarge = 0.05.sp
        }
    "};
    assert_eq!(rendered.source, expected);
}

#[test]
fn test_colors_pipeline() {
    let rendered = generator().render(ResourceKind::Colors, COLORS_XML).unwrap();
    let expected = indoc! {"
        package com.org.newexample

        import androidx.compose.ui.graphics.Color

        object NewExampleColors {
            val textColorPrimary = Color(0xFF000000)
            val textColorSecondary = Color(0xFF808080)
            val colorAccent = Color(0xFFFF4081)
            val colorPrimary = Color(0xFF3F51B5)
        }
    "};
    assert_eq!(rendered.source, expected);
}

#[test]
fn test_styles_pipeline() {
    let rendered = generator().render(ResourceKind::Styles, STYLES_XML).unwrap();
    let expected = indoc! {"
        package com.org.newexample

        import androidx.compose.ui.text.font.FontWeight
        import androidx.compose.ui.text.TextStyle
        import com.org.newexample.NewExampleColors
        import com.org.newexample.NewExampleDimens

        object NewExampleStyles {
            val myStyle = TextStyle(
                color = NewExampleColors.textColorPrimary,
                fontSize = NewExampleDimens.fontSizeLarge,
                fontWeight = FontWeight.Bold,
                lineHeight = NewExampleDimens.lineHeightLarge,
                letterSpacing = NewExampleDimens.letterSpacingNormal,
            )

            val anotherStyle = TextStyle(
                color = NewExampleColors.textColorSecondary,
                fontSize = NewExampleDimens.fontSizeSmall,
                fontWeight = FontWeight.Italic,
                lineHeight = NewExampleDimens.lineHeightSmall,
                letterSpacing = NewExampleDimens.letterSpacingLarge,
            )

        }
    "};
    assert_eq!(rendered.source, expected);
    assert!(rendered.diagnostics.is_empty());
}

#[test]
fn test_text_appearance_styles_without_font_weight() {
    let xml = r#"
    <resources>
        <style name="TextAppearance.AppCompat.Headline">
            <item name="android:textSize">@dimen/text_size_large</item>
            <item name="android:textColor">@color/textColorPrimary</item>
        </style>

        <style name="TextAppearance.AppCompat.Subhead">
            <item name="android:textSize">@dimen/text_size_medium</item>
            <item name="android:textColor">@color/textColorSecondary</item>
        </style>
    </resources>
    "#;
    let mapping = Mapper::new("Example").map_styles(
        &parse_str(xml)
            .unwrap()
            .into_iter()
            .filter_map(|raw| match raw {
                ktxml::RawResource::Style(style) => Some(style),
                _ => None,
            })
            .collect::<Vec<_>>(),
    );
    let source = emit_styles("com.org.example", "Example", &mapping.styles);
    let expected = indoc! {"
        package com.org.example

        import androidx.compose.ui.text.TextStyle
        import com.org.example.ExampleColors
        import com.org.example.ExampleDimens

        object ExampleStyles {
            val textAppearanceAppCompatHeadline = TextStyle(
                fontSize = ExampleDimens.textSizeLarge,
                color = ExampleColors.textColorPrimary,
            )

            val textAppearanceAppCompatSubhead = TextStyle(
                fontSize = ExampleDimens.textSizeMedium,
                color = ExampleColors.textColorSecondary,
            )

        }
    "};
    assert_eq!(source, expected);
}

#[test]
fn test_mixed_document_through_map_all() {
    let xml = r#"
    <resources>
        <dimen name="activity_horizontal_margin">16dp</dimen>
        <dimen name="text_size_small">12sp</dimen>
        <dimen name="unitless_margin">10</dimen>
        <color name="divider_color">#BDBDBD</color>
        <style name="Caption">
            <item name="android:textColor">@color/divider_color</item>
            <item name="android:fontFamily">sans-serif</item>
        </style>
    </resources>
    "#;
    let mapped = Mapper::new("Example").map_all(parse_str(xml).unwrap()).unwrap();

    let dimens = emit_dimens("com.org.example", "Example", &mapped.dimens);
    let vals: Vec<&str> = dimens.lines().filter(|l| l.contains(" val ")).collect();
    assert_eq!(
        vals,
        vec![
            "    val activityHorizontalMargin = 16.dp",
            "    val textSizeSmall = 12.sp",
            "    val unitlessMargin = 10f",
        ]
    );

    let colors = emit_colors("com.org.example", "Example", &mapped.colors);
    assert!(colors.contains("    val dividerColor = Color(0xFFBDBDBD)\n"));

    assert_eq!(mapped.styles[0].items.len(), 1);
    assert_eq!(mapped.diagnostics.len(), 1);
    assert_eq!(mapped.diagnostics[0].reference, "sans-serif");
}

#[test]
fn test_invalid_color_fails_whole_batch() {
    let xml = r#"
    <resources>
        <color name="ok">#000000</color>
        <color name="broken">#12345</color>
    </resources>
    "#;
    let err = generator().render(ResourceKind::Colors, xml).unwrap_err();
    assert!(matches!(err, ktxml::Error::InvalidColorFormat { .. }));
}

#[test]
fn test_malformed_xml_propagates() {
    let err = generator()
        .render(ResourceKind::Dimens, "<resources><dimen name=\"a\">1dp</resources>")
        .unwrap_err();
    assert!(err.is_malformed_input());
}

#[test]
fn test_output_is_stable_across_runs() {
    let generator = generator();
    for kind in ResourceKind::ALL {
        let xml = match kind {
            ResourceKind::Dimens => DIMENS_XML,
            ResourceKind::Colors => COLORS_XML,
            ResourceKind::Styles => STYLES_XML,
        };
        let first = generator.render(kind, xml).unwrap();
        for _ in 0..5 {
            assert_eq!(generator.render(kind, xml).unwrap(), first);
        }
    }
}
