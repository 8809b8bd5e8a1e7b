//! uc-core: dimensional-analysis boundary for the unit converter.
//!
//! Contains:
//! - units (uom SI quantity types + the unit catalog)
//! - resolver (unit identifier -> quantity construction and conversion)
//! - error (shared error types)

pub mod error;
pub mod resolver;
pub mod units;

pub use error::{UcResult, UnitError};
pub use resolver::UnitResolver;
pub use units::{Dimension, Measure, Real, UNIT_CATALOG, Unit, UnitDef};
