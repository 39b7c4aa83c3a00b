//! Error taxonomy of the coordinate conversions.
//!
//! Every fallible function in this crate returns [`anyhow::Result`]. Rejected inputs are
//! wrapped as a [`MercatorError`], so callers can tell the two kinds apart:
//!
//! ```
//! use mercator_core::{MercatorError, lat_lon_to_meters};
//!
//! let err = lat_lon_to_meters(90.0, 0.0).unwrap_err();
//! assert!(matches!(err.downcast_ref::<MercatorError>(), Some(MercatorError::Domain(_))));
//! ```

use crate::MAX_ZOOM;
use anyhow::Result;
use std::fmt;

/// Reason a conversion refused its input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MercatorError {
	/// The input lies outside the mathematically valid range, e.g. a latitude of ±90°
	/// or a coordinate that is `NaN` or infinite.
	Domain(String),
	/// The caller broke the calling contract, e.g. a zoom level above [`MAX_ZOOM`]
	/// or a tile index outside the grid of its zoom level.
	Contract(String),
}

impl MercatorError {
	/// Returns the description without the kind prefix.
	#[must_use]
	pub fn message(&self) -> &str {
		match self {
			MercatorError::Domain(msg) | MercatorError::Contract(msg) => msg,
		}
	}
}

impl fmt::Display for MercatorError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			MercatorError::Domain(msg) => write!(f, "domain error: {msg}"),
			MercatorError::Contract(msg) => write!(f, "contract error: {msg}"),
		}
	}
}

impl std::error::Error for MercatorError {}

/// Returns early with a [`MercatorError::Domain`] if the condition is false.
///
/// Works like [`anyhow::ensure!`], but keeps the error kind inspectable.
#[macro_export]
macro_rules! ensure_domain {
	($cond:expr, $($arg:tt)+) => {
		if !$cond {
			return ::core::result::Result::Err($crate::MercatorError::Domain(::std::format!($($arg)+)).into());
		}
	};
}

/// Returns early with a [`MercatorError::Contract`] if the condition is false.
#[macro_export]
macro_rules! ensure_contract {
	($cond:expr, $($arg:tt)+) => {
		if !$cond {
			return ::core::result::Result::Err($crate::MercatorError::Contract(::std::format!($($arg)+)).into());
		}
	};
}

pub(crate) fn check_finite(name: &str, value: f64) -> Result<()> {
	ensure_domain!(value.is_finite(), "{name} ({value}) must be a finite number");
	Ok(())
}

/// Checks that `output`, computed from the argument `name`, did not overflow.
pub(crate) fn check_converted(name: &str, input: f64, output: f64) -> Result<()> {
	ensure_domain!(output.is_finite(), "{name} ({input}) converts outside the finite range");
	Ok(())
}

pub(crate) fn check_zoom(zoom: u8) -> Result<()> {
	ensure_contract!(zoom <= MAX_ZOOM, "zoom ({zoom}) must be <= {MAX_ZOOM}");
	Ok(())
}

/// Checks the zoom level and that both indices lie in `[0, 2^zoom - 1]`.
pub(crate) fn check_tile(tx: i64, ty: i64, zoom: u8) -> Result<()> {
	check_zoom(zoom)?;
	let max = (1i64 << zoom) - 1;
	ensure_contract!((0..=max).contains(&tx), "tx ({tx}) out of bounds for zoom {zoom}");
	ensure_contract!((0..=max).contains(&ty), "ty ({ty}) out of bounds for zoom {zoom}");
	Ok(())
}
