use crate::document::types::{Palette, ShadeKey, ThemeDocument};
use crate::error::AppError;
use crate::validation::Validator;

/// Shade steps the generator's scale convention recognizes, lightest first.
const SCALE_STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Validation errors specific to theme document contents
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeValidationError {
    EmptyContent,
    InvalidGlob { pattern: String, reason: String },
    InvalidTokenName { name: String, reason: String },
    InvalidPalette { palette: String, reason: String },
    EmptyFontStack { family: String },
    MalformedShadow { shadow: String, reason: String },
    UnresolvedShadowReference { shadow: String, reference: String },
}

impl ThemeValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ThemeValidationError::EmptyContent => {
                "The 'content' list is empty.\n\n\
                At least one glob pattern is required so the generator knows \
                which source files to scan for class usage."
                    .to_string()
            }
            ThemeValidationError::InvalidGlob { pattern, reason } => {
                format!(
                    "Invalid content glob: '{}'\n\n\
                    Reason: {}\n\n\
                    Please use well-formed glob patterns (no whitespace, balanced braces).",
                    pattern, reason
                )
            }
            ThemeValidationError::InvalidTokenName { name, reason } => {
                format!(
                    "Invalid token name: '{}'\n\n\
                    Reason: {}\n\n\
                    Please use valid token names (alphanumeric, hyphens, underscores only).",
                    name, reason
                )
            }
            ThemeValidationError::InvalidPalette { palette, reason } => {
                format!(
                    "Invalid color palette: '{}'\n\n\
                    Reason: {}\n\n\
                    Shade steps must come from the 50-950 scale and run lightest to darkest.",
                    palette, reason
                )
            }
            ThemeValidationError::EmptyFontStack { family } => {
                format!(
                    "Font family '{}' has an empty fallback stack.\n\n\
                    Please list at least one font name.",
                    family
                )
            }
            ThemeValidationError::MalformedShadow { shadow, reason } => {
                format!(
                    "Malformed box shadow: '{}'\n\n\
                    Reason: {}",
                    shadow, reason
                )
            }
            ThemeValidationError::UnresolvedShadowReference { shadow, reference } => {
                format!(
                    "Box shadow '{}' references unknown token '{}'\n\n\
                    Please ensure every theme(\"…\") lookup points at a color \
                    defined in this document.",
                    shadow, reference
                )
            }
        }
    }
}

impl From<ThemeValidationError> for AppError {
    fn from(error: ThemeValidationError) -> Self {
        AppError::Validation(error.user_message())
    }
}

/// Validator for content glob patterns
pub struct ContentGlobValidator;

impl Validator<[String]> for ContentGlobValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &[String]) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err(ThemeValidationError::EmptyContent);
        }

        for pattern in input {
            if pattern.is_empty() {
                return Err(ThemeValidationError::InvalidGlob {
                    pattern: pattern.clone(),
                    reason: "Pattern cannot be empty".to_string(),
                });
            }

            if pattern.chars().any(char::is_whitespace) {
                return Err(ThemeValidationError::InvalidGlob {
                    pattern: pattern.clone(),
                    reason: "Pattern cannot contain whitespace".to_string(),
                });
            }

            check_braces(pattern).map_err(|reason| ThemeValidationError::InvalidGlob {
                pattern: pattern.clone(),
                reason,
            })?;
        }

        Ok(())
    }
}

/// Brace alternation groups must balance, and no alternative inside a group
/// may be empty (`{}`, `{html,}` and `{,js}` are all rejected).
fn check_braces(pattern: &str) -> Result<(), String> {
    // One entry per open group: length of the alternative currently
    // being scanned.
    let mut alternative_lens: Vec<usize> = Vec::new();

    for c in pattern.chars() {
        match c {
            '{' => alternative_lens.push(0),
            ',' => match alternative_lens.last_mut() {
                Some(len) if *len == 0 => {
                    return Err("Empty alternative in '{}' group".to_string());
                }
                Some(len) => *len = 0,
                // A comma outside any group is an ordinary character
                None => {}
            },
            '}' => {
                match alternative_lens.pop() {
                    None => return Err("Unmatched '}' in pattern".to_string()),
                    Some(0) => {
                        return Err("Empty alternative in '{}' group".to_string());
                    }
                    Some(_) => {}
                }
                // The closed group counts as content of the enclosing
                // alternative, if any
                if let Some(len) = alternative_lens.last_mut() {
                    *len += 1;
                }
            }
            _ => {
                if let Some(len) = alternative_lens.last_mut() {
                    *len += 1;
                }
            }
        }
    }

    if !alternative_lens.is_empty() {
        return Err("Unmatched '{' in pattern".to_string());
    }

    Ok(())
}

/// Validator for palette, font family and shadow token names
pub struct TokenNameValidator;

impl Validator<str> for TokenNameValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err(ThemeValidationError::InvalidTokenName {
                name: input.to_string(),
                reason: "Name cannot be empty".to_string(),
            });
        }

        if input.len() > 50 {
            return Err(ThemeValidationError::InvalidTokenName {
                name: input.to_string(),
                reason: "Name too long (max 50 characters)".to_string(),
            });
        }

        if !input
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ThemeValidationError::InvalidTokenName {
                name: input.to_string(),
                reason: "Name contains invalid characters (only alphanumeric, hyphens, and underscores allowed)".to_string(),
            });
        }

        if input.starts_with('-')
            || input.starts_with('_')
            || input.ends_with('-')
            || input.ends_with('_')
        {
            return Err(ThemeValidationError::InvalidTokenName {
                name: input.to_string(),
                reason: "Name cannot start or end with hyphens or underscores".to_string(),
            });
        }

        Ok(())
    }
}

/// Validator for a single color palette
pub struct PaletteValidator {
    palette_name: String,
}

impl PaletteValidator {
    pub fn new(palette_name: &str) -> Self {
        Self {
            palette_name: palette_name.to_string(),
        }
    }

    fn err(&self, reason: String) -> ThemeValidationError {
        ThemeValidationError::InvalidPalette {
            palette: self.palette_name.clone(),
            reason,
        }
    }
}

impl Validator<Palette> for PaletteValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &Palette) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err(self.err("Palette has no entries".to_string()));
        }

        let mut previous: Option<u16> = None;
        for key in input.keys() {
            let ShadeKey::Scale(step) = key else {
                continue;
            };

            if !SCALE_STEPS.contains(step) {
                return Err(self.err(format!("Shade step {step} is not on the 50-950 scale")));
            }

            if let Some(prev) = previous {
                if *step <= prev {
                    return Err(self.err(format!(
                        "Shade steps must ascend lightest to darkest ({step} follows {prev})"
                    )));
                }
            }
            previous = Some(*step);
        }

        Ok(())
    }
}

/// Validator for box-shadow expressions and their `theme("…")` references
pub struct ShadowValidator;

impl Validator<ThemeDocument> for ShadowValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &ThemeDocument) -> Result<(), Self::Error> {
        for (name, expression) in &input.theme.extend.box_shadow {
            let references = theme_references(expression).map_err(|reason| {
                ThemeValidationError::MalformedShadow {
                    shadow: name.clone(),
                    reason,
                }
            })?;

            for reference in references {
                if !reference.starts_with("colors.") {
                    return Err(ThemeValidationError::MalformedShadow {
                        shadow: name.clone(),
                        reason: format!(
                            "Token path '{reference}' must reference a color (colors.*)"
                        ),
                    });
                }

                if input.resolve_color(&reference).is_none() {
                    return Err(ThemeValidationError::UnresolvedShadowReference {
                        shadow: name.clone(),
                        reference,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Extract the token paths of every `theme("…")` lookup in a shadow expression.
fn theme_references(expression: &str) -> Result<Vec<String>, String> {
    let mut references = Vec::new();
    let mut rest = expression;

    while let Some(start) = rest.find("theme(") {
        let after = &rest[start + "theme(".len()..];
        let quote = match after.chars().next() {
            Some(c @ ('"' | '\'')) => c,
            _ => return Err("Expected a quoted token path after 'theme('".to_string()),
        };

        let inner = &after[1..];
        let end = inner
            .find(quote)
            .ok_or_else(|| "Unterminated token path in theme() lookup".to_string())?;
        let path = &inner[..end];
        if path.is_empty() {
            return Err("Empty token path in theme() lookup".to_string());
        }

        let tail = &inner[end + 1..];
        if !tail.starts_with(')') {
            return Err("Expected ')' after theme() token path".to_string());
        }

        references.push(path.to_string());
        rest = &tail[1..];
    }

    Ok(references)
}

/// Validator for a complete theme document
pub struct DocumentValidator;

impl Validator<ThemeDocument> for DocumentValidator {
    type Error = ThemeValidationError;

    fn validate(&self, input: &ThemeDocument) -> Result<(), Self::Error> {
        let glob_validator = ContentGlobValidator;
        let name_validator = TokenNameValidator;
        let shadow_validator = ShadowValidator;

        glob_validator.validate(&input.content)?;

        for (family, stack) in &input.theme.extend.font_family {
            name_validator.validate(family)?;
            if stack.is_empty() {
                return Err(ThemeValidationError::EmptyFontStack {
                    family: family.clone(),
                });
            }
        }

        for (palette_name, palette) in &input.theme.extend.colors {
            name_validator.validate(palette_name)?;
            PaletteValidator::new(palette_name).validate(palette)?;
        }

        for shadow_name in input.theme.extend.box_shadow.keys() {
            name_validator.validate(shadow_name)?;
        }
        shadow_validator.validate(input)?;

        Ok(())
    }
}
