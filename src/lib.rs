//! # themecfg
//!
//! Typed model, validator and CLI for a utility-class CSS generator's theme
//! configuration document. The library reproduces the generator's schema
//! exactly (`content`, `darkMode`, `theme.extend.fontFamily`,
//! `theme.extend.colors`, `theme.extend.boxShadow`, `plugins`) so documents
//! round-trip losslessly between Rust values, JSON and TOML.
//!
//! ## Modules
//!
//! - [`document`] - Document model, defaults, validation and filesystem loader
//! - [`error`] - Error types shared across the crate
//! - [`logger`] - Logging configuration
//! - [`validation`] - The `Validator` trait implemented by all checks

pub mod document;
pub mod error;
pub mod logger;
pub mod validation;

// Re-export commonly used types for easier access
pub use document::{DocumentFormat, DocumentLoader, DocumentValidator, ThemeDocument};
pub use error::{AppError, AppResult};
pub use validation::Validator;
