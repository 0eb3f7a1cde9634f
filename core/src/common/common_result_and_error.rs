// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::{error::Error,
          fmt::{Debug, Display, Formatter, Result}};

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`] wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`CommonError`] and any other type of error.
///
/// # Example
///
/// ```
/// use tintshade_core::{CommonError, CommonErrorType, CommonResult, RgbColor};
///
/// pub fn try_from_hex(input: &str) -> CommonResult<RgbColor> {
///     match tintshade_core::hex_to_rgb(input) {
///         Ok(color) => Ok(color),
///         Err(_) => CommonError::new_error_result(
///             CommonErrorType::InvalidHexColorFormat,
///             &format!("Can't parse {input:?}"),
///         ),
///     }
/// }
/// ```
pub type CommonResult<T> = miette::Result<T>;

/// Common error struct. Read custom error docs
/// [here](https://learning-rust.github.io/docs/e7.custom_error_types.html).
#[derive(Debug, Clone)]
pub struct CommonError {
    pub error_type: CommonErrorType,
    pub error_message: Option<String>,
}

/// The kinds of [`CommonError`] raised in this workspace.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonErrorType {
    /// Reading requests or writing responses and swatches failed.
    IOError,
    /// A color isn't 6 hex digits w/ an optional leading `#`.
    InvalidHexColorFormat,
}

/// Implement [`Error`] trait.
impl Error for CommonError {}

/// So that [`miette::miette!`] keeps the concrete type, which allows
/// [`miette::Report::downcast_ref`] to find it again.
impl miette::Diagnostic for CommonError {}

/// Implement [`Display`] trait (needed by [`Error`] trait). This is the same as the
/// [`Debug`] implementation (which is derived above).
impl Display for CommonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { Debug::fmt(self, f) }
}

impl CommonError {
    /// Both [`CommonError::error_type`] and [`CommonError::error_message`] available.
    ///
    /// # Errors
    ///
    /// Always returns an error, that's the point.
    pub fn new_error_result<T>(err_type: CommonErrorType, msg: &str) -> CommonResult<T> {
        Err(miette::miette!(CommonError {
            error_type: err_type,
            error_message: Some(msg.to_string()),
        }))
    }

    /// Look inside a [`miette::Report`] for a [`CommonError`] and return its type, if
    /// there is one.
    #[must_use]
    pub fn try_get_error_type(report: &miette::Report) -> Option<CommonErrorType> {
        report
            .downcast_ref::<CommonError>()
            .map(|common_error| common_error.error_type)
    }

    /// Returns `true` if the `report` wraps a [`CommonError`] of the given type.
    #[must_use]
    pub fn is_error_type(report: &miette::Report, err_type: CommonErrorType) -> bool {
        Self::try_get_error_type(report) == Some(err_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_error_type_survives_report() {
        let result: CommonResult<()> = CommonError::new_error_result(
            CommonErrorType::InvalidHexColorFormat,
            "bad color",
        );
        let report = result.unwrap_err();
        assert!(CommonError::is_error_type(
            &report,
            CommonErrorType::InvalidHexColorFormat
        ));
        assert!(!CommonError::is_error_type(&report, CommonErrorType::IOError));
    }

    #[test]
    fn test_foreign_report_has_no_type() {
        let report = miette::miette!("not a common error");
        assert_eq2!(CommonError::try_get_error_type(&report), None);
    }
}
