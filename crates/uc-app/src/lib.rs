//! Shared application service layer for the unit converter.
//!
//! This crate provides a unified interface for both CLI and GUI frontends:
//! the category registry, the conversion invoker, banner formatting, the
//! form session and reference text.

pub mod config;
pub mod converter;
pub mod error;
pub mod form;
pub mod format;
pub mod reference;
pub mod registry;

// Re-export key types for convenience
pub use config::ConverterConfig;
pub use converter::{ConversionRequest, ConversionResult, Converter};
pub use error::{AppError, AppResult};
pub use form::{ConverterForm, FormInputs, render};
pub use format::{Banner, ConversionReport, INVALID_CONVERSION, format_input_value, render_banner};
pub use reference::{how_it_works, supported_units_reference};
pub use registry::{
    CategoryExample, UnitCategory, category_of, filter_units, list_categories, list_units,
    unit_info,
};
