use thiserror::Error;

use crate::units::Dimension;

pub type UcResult<T> = Result<T, UnitError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("Unknown unit '{unit}'")]
    UnknownUnit { unit: String },

    #[error("Cannot convert from {from} to {to}")]
    IncompatibleDimensions { from: Dimension, to: Dimension },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
