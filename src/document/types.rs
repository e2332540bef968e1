use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display};
use std::str::FromStr;

/// A palette maps shade keys to hex colors, in authoring order.
pub type Palette = IndexMap<ShadeKey, HexColor>;

/// Ordered fallback list of font names for one semantic family.
pub type FontStack = Vec<String>;

/// Root theme configuration document consumed by the CSS generator.
///
/// Field names mirror the generator's schema exactly (`content`, `darkMode`,
/// `theme.extend.*`, `plugins`), so a serialized document is directly usable
/// by the external build tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDocument {
    /// Glob patterns identifying source files scanned for class usage.
    pub content: Vec<String>,
    #[serde(rename = "darkMode", default)]
    pub dark_mode: DarkMode,
    #[serde(default)]
    pub plugins: Vec<String>,
    #[serde(default)]
    pub theme: ThemeSection,
}

/// Dark-mode toggle strategy recognized by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Follow the OS preference via the `prefers-color-scheme` media query.
    #[default]
    Media,
    /// Toggle via a `dark` class on an ancestor element.
    Class,
    /// Toggle via a custom selector.
    Selector,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeSection {
    #[serde(default)]
    pub extend: ThemeExtend,
}

/// Token extensions merged into the generator's base design-token set.
///
/// These extend the base set rather than replace it, so an empty map simply
/// leaves the corresponding base tokens untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeExtend {
    #[serde(rename = "fontFamily", default)]
    pub font_family: IndexMap<String, FontStack>,
    #[serde(default)]
    pub colors: IndexMap<String, Palette>,
    #[serde(rename = "boxShadow", default)]
    pub box_shadow: IndexMap<String, String>,
}

/// Key within a palette: either a numeric shade step (50–950) or a named
/// entry such as `bg` or `surface`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShadeKey {
    Scale(u16),
    Named(String),
}

impl ShadeKey {
    /// Parse a raw map key. Purely numeric keys become scale steps,
    /// everything else is a named entry.
    pub fn parse(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(step) = raw.parse::<u16>() {
                return ShadeKey::Scale(step);
            }
        }
        ShadeKey::Named(raw.to_string())
    }
}

impl Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadeKey::Scale(step) => write!(f, "{step}"),
            ShadeKey::Named(name) => f.write_str(name),
        }
    }
}

impl Serialize for ShadeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ShadeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShadeKeyVisitor;

        impl Visitor<'_> for ShadeKeyVisitor {
            type Value = ShadeKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a shade step or named palette key")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ShadeKey, E> {
                Ok(ShadeKey::parse(v))
            }
        }

        deserializer.deserialize_str(ShadeKeyVisitor)
    }
}

/// A 6-digit RGB hex color, stored as parsed channels.
///
/// Accepts `#rrggbb` (leading `#` optional, case-insensitive) and always
/// serializes to canonical lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
        }
    }
}

impl FromStr for HexColor {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        // Byte-length check alone is not enough: slicing below must never
        // land inside a multibyte character.
        if hex.len() != 6 || !hex.is_ascii() {
            return Err("expected 6 hex digits");
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "invalid red component")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "invalid green component")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "invalid blue component")?;

        Ok(Self { r, g, b })
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexColorVisitor;

        impl Visitor<'_> for HexColorVisitor {
            type Value = HexColor;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 6-digit hex color string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<HexColor, E> {
                v.parse()
                    .map_err(|e| E::custom(format!("invalid hex color '{v}': {e}")))
            }
        }

        deserializer.deserialize_str(HexColorVisitor)
    }
}

impl ThemeDocument {
    /// Look up a color token by dot path, e.g. `colors.silva.400`.
    pub fn resolve_color(&self, path: &str) -> Option<HexColor> {
        let rest = path.strip_prefix("colors.")?;
        let (palette_name, shade) = rest.split_once('.')?;
        let palette = self.theme.extend.colors.get(palette_name)?;
        palette.get(&ShadeKey::parse(shade)).copied()
    }

    /// Resolve any extension token by dot path and render its value.
    ///
    /// Supported roots are `colors`, `fontFamily` and `boxShadow`.
    pub fn resolve(&self, path: &str) -> Option<String> {
        if let Some(color) = self.resolve_color(path) {
            return Some(color.to_string());
        }
        if let Some(family) = path.strip_prefix("fontFamily.") {
            return self
                .theme
                .extend
                .font_family
                .get(family)
                .map(|stack| stack.join(", "));
        }
        if let Some(shadow) = path.strip_prefix("boxShadow.") {
            return self.theme.extend.box_shadow.get(shadow).cloned();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_none, assert_ok_eq, assert_some_eq};

    #[test]
    fn hex_color_parses_with_and_without_hash() {
        assert_ok_eq!(
            "#10b981".parse::<HexColor>(),
            HexColor::from_rgb(0x10, 0xb9, 0x81)
        );
        assert_ok_eq!(
            "10B981".parse::<HexColor>(),
            HexColor::from_rgb(0x10, 0xb9, 0x81)
        );
    }

    #[test]
    fn hex_color_rejects_malformed_input() {
        assert_err!("#10b98".parse::<HexColor>());
        assert_err!("#10b9811".parse::<HexColor>());
        assert_err!("#10b98z".parse::<HexColor>());
        assert_err!("".parse::<HexColor>());
        // Only a single leading hash is part of the #rrggbb contract
        assert_err!("##10b981".parse::<HexColor>());
    }

    #[test]
    fn hex_color_rejects_multibyte_input_without_panicking() {
        // Six bytes but two characters - must be an error, not a slice panic
        assert_err!("€€".parse::<HexColor>());
        assert_err!("#€€".parse::<HexColor>());
        assert_err!("#10b9é".parse::<HexColor>());
    }

    #[test]
    fn hex_color_displays_canonical_lowercase() {
        let color: HexColor = "#ECFDF5".parse().unwrap();
        assert_eq!(color.to_string(), "#ecfdf5");
    }

    #[test]
    fn shade_key_distinguishes_scale_and_named() {
        assert_eq!(ShadeKey::parse("50"), ShadeKey::Scale(50));
        assert_eq!(ShadeKey::parse("950"), ShadeKey::Scale(950));
        assert_eq!(ShadeKey::parse("bg"), ShadeKey::Named("bg".to_string()));
        // Not representable as u16 - kept as a named key
        assert_eq!(
            ShadeKey::parse("99999"),
            ShadeKey::Named("99999".to_string())
        );
    }

    #[test]
    fn dark_mode_serializes_as_lowercase_strings() {
        assert_ok_eq!(serde_json::to_string(&DarkMode::Class), "\"class\"");
        assert_ok_eq!(serde_json::to_string(&DarkMode::Media), "\"media\"");
        assert_ok_eq!(serde_json::to_string(&DarkMode::Selector), "\"selector\"");
        assert_ok_eq!(
            serde_json::from_str::<DarkMode>("\"class\""),
            DarkMode::Class
        );
    }

    #[test]
    fn resolve_walks_extension_tokens() {
        let doc = ThemeDocument::default();
        assert_some_eq!(doc.resolve("colors.silva.400"), "#34d399");
        assert_some_eq!(doc.resolve("colors.dark.bg"), "#020617");
        assert_some_eq!(doc.resolve("fontFamily.sans"), "Inter, sans-serif");
        assert_some_eq!(doc.resolve("boxShadow.glass"), "0 4px 30px rgba(0, 0, 0, 0.1)");
        assert_none!(doc.resolve("colors.silva.475"));
        assert_none!(doc.resolve("spacing.4"));
    }

    #[test]
    fn partial_document_fills_defaults() {
        let doc: ThemeDocument =
            serde_json::from_str(r#"{ "content": ["./src/**/*.html"] }"#).unwrap();
        assert_eq!(doc.dark_mode, DarkMode::Media);
        assert!(doc.plugins.is_empty());
        assert!(doc.theme.extend.colors.is_empty());
    }
}
