//! # Theme Document Module
//!
//! Typed model of the theme configuration document consumed by the
//! utility-class CSS generator, together with its validators and a
//! filesystem loader.
//!
//! The document carries three things: `content` globs telling the generator
//! which source files to scan for class usage, a `darkMode` toggle strategy,
//! and `theme.extend` token maps (font stacks, color palettes with 50–950
//! shade scales, box shadows). Shadow expressions may look other tokens up
//! via `theme("colors.…")`, and validation checks those references resolve.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use themecfg::document::{DocumentLoader, DocumentValidator, ThemeDocument};
//! use themecfg::validation::Validator;
//!
//! let loader = DocumentLoader::new();
//! let document = match loader.find_document() {
//!     Some(path) => loader.load(&path)?,
//!     None => ThemeDocument::default(),
//! };
//!
//! DocumentValidator.validate(&document)?;
//! let accent = document.resolve("colors.silva.400");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The document is authored once and read at build time by the external
//! generator; nothing here mutates it after loading.

pub mod defaults;
pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{DocumentFormat, DocumentLoader};
pub use types::{DarkMode, FontStack, HexColor, Palette, ShadeKey, ThemeDocument};
pub use validation::{DocumentValidator, ThemeValidationError};
