//! Utility modules
//!
//! This module contains error types and result types.

pub mod error;

// Re-export commonly used items
pub use error::{
    ConversionError, ConversionOutput, ConversionResult, ConversionWarning, WarningKind,
};
