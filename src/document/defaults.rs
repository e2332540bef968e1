//! Canonical default document shipped with the crate.
//!
//! This is the dashboard's theme configuration: the `silva` brand palette,
//! the dark surface colors, the Inter/Outfit font stacks and the neon/glass
//! shadows, with class-based dark-mode toggling.

use crate::document::types::{
    DarkMode, FontStack, HexColor, Palette, ShadeKey, ThemeDocument, ThemeExtend, ThemeSection,
};
use indexmap::IndexMap;

impl Default for ThemeDocument {
    fn default() -> Self {
        Self {
            content: vec!["./src/**/*.{html,js,py}".to_string()],
            dark_mode: DarkMode::Class,
            plugins: Vec::new(),
            theme: ThemeSection {
                extend: ThemeExtend {
                    font_family: default_font_families(),
                    colors: default_colors(),
                    box_shadow: default_box_shadows(),
                },
            },
        }
    }
}

fn default_font_families() -> IndexMap<String, FontStack> {
    [
        ("sans", vec!["Inter", "sans-serif"]),
        ("heading", vec!["Outfit", "sans-serif"]),
    ]
    .into_iter()
    .map(|(name, stack)| {
        (
            name.to_string(),
            stack.into_iter().map(str::to_string).collect(),
        )
    })
    .collect()
}

fn default_colors() -> IndexMap<String, Palette> {
    let silva: Palette = [
        (50, 0xECFDF5),
        (100, 0xD1FAE5),
        (200, 0xA7F3D0),
        (300, 0x6EE7B7),
        (400, 0x34D399),
        (500, 0x10B981),
        (600, 0x059669),
        (700, 0x047857),
        (800, 0x065F46),
        (900, 0x064E3B),
        (950, 0x022C22),
    ]
    .into_iter()
    .map(|(step, rgb)| (ShadeKey::Scale(step), HexColor::from_hex(rgb)))
    .collect();

    // Slate-based surfaces for the dark scheme
    let dark: Palette = [
        ("bg", 0x020617),
        ("surface", 0x0F172A),
        ("surface_light", 0x1E293B),
        ("border", 0x1E293B),
    ]
    .into_iter()
    .map(|(name, rgb)| (ShadeKey::Named(name.to_string()), HexColor::from_hex(rgb)))
    .collect();

    [("silva".to_string(), silva), ("dark".to_string(), dark)]
        .into_iter()
        .collect()
}

fn default_box_shadows() -> IndexMap<String, String> {
    [
        (
            "neon",
            r#"0 0 5px theme("colors.silva.400"), 0 0 20px theme("colors.silva.900")"#,
        ),
        ("glass", "0 4px 30px rgba(0, 0, 0, 0.1)"),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_some_eq;

    #[test]
    fn default_document_uses_class_dark_mode() {
        let doc = ThemeDocument::default();
        assert_eq!(doc.dark_mode, DarkMode::Class);
    }

    #[test]
    fn default_content_globs_cover_dashboard_sources() {
        let doc = ThemeDocument::default();
        assert_eq!(doc.content, vec!["./src/**/*.{html,js,py}".to_string()]);
    }

    #[test]
    fn silva_palette_spans_the_full_shade_scale() {
        let doc = ThemeDocument::default();
        let silva = &doc.theme.extend.colors["silva"];
        assert_eq!(silva.len(), 11);
        assert_some_eq!(doc.resolve("colors.silva.50"), "#ecfdf5");
        assert_some_eq!(doc.resolve("colors.silva.500"), "#10b981");
        assert_some_eq!(doc.resolve("colors.silva.950"), "#022c22");
    }

    #[test]
    fn dark_palette_uses_named_surface_keys() {
        let doc = ThemeDocument::default();
        let dark = &doc.theme.extend.colors["dark"];
        assert_eq!(dark.len(), 4);
        assert_some_eq!(doc.resolve("colors.dark.surface"), "#0f172a");
        assert_some_eq!(doc.resolve("colors.dark.border"), "#1e293b");
    }

    #[test]
    fn neon_shadow_references_silva_shades() {
        let doc = ThemeDocument::default();
        let neon = &doc.theme.extend.box_shadow["neon"];
        assert!(neon.contains(r#"theme("colors.silva.400")"#));
        assert!(neon.contains(r#"theme("colors.silva.900")"#));
    }
}
