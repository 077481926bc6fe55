//! Error types.
//!
//! Tracking itself never fails; the only fallible surface is turning text
//! into a [`BarStyle`](crate::BarStyle).

use thiserror::Error;

/// Returned when a string names no known bar style.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseStyleError {
    /// Neither a style name, a fill glyph, nor an integer index.
    #[error("unknown bar style '{0}'")]
    Unknown(String),
}
