//! Defines [`GeoError`], representing all errors returned by this crate.

use std::borrow::Cow;
use std::fmt::Debug;

use thiserror::Error;

use crate::datatypes::Dimension;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoError {
    /// The byte order marker of a WKB header was neither 0 nor 1.
    #[error("Invalid WKB byte order: {0}")]
    InvalidByteOrder(u8),

    /// The buffer ended before a read could complete.
    #[error("Unexpected end of WKB buffer")]
    UnexpectedEof,

    /// The geometry type code is unknown or not supported by the codec.
    #[error("Unsupported WKB geometry type: {0}")]
    UnsupportedType(u32),

    /// A child geometry does not have the dimensionality of its parent.
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimensionality of the parent.
        expected: Dimension,
        /// Dimensionality of the offending child.
        found: Dimension,
    },

    /// A geometry could not be constructed because its structure is invalid.
    #[error("Invalid geometry: {0}")]
    StructuralInvariantViolation(Cow<'static, str>),

    /// Decoding recursed deeper than the configured limit.
    #[error("Maximum nesting depth of {0} exceeded")]
    MaxDepthExceeded(usize),

    /// A nested geometry has the wrong kind for its position.
    #[error("Unexpected geometry type: expected {expected}, found {found}")]
    UnexpectedGeometryType {
        /// Name of the accepted kind(s).
        expected: &'static str,
        /// Name of the kind that was found.
        found: &'static str,
    },

    /// Incorrect type was passed to a conversion.
    #[error("Incorrect type passed to operation: {0}")]
    IncorrectType(Cow<'static, str>),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

impl GeoError {
    pub(crate) fn invalid(msg: impl Into<Cow<'static, str>>) -> Self {
        GeoError::StructuralInvariantViolation(msg.into())
    }
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoError>;
