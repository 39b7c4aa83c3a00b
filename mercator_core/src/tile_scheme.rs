//! Remapping between tile row conventions.
//!
//! TMS counts tile rows from the bottom of the extent, the "Google" (XYZ) scheme used by most
//! web map clients counts them from the top. Columns are the same in both. The flip is its own
//! inverse, but [`google_tile`] and [`tms_tile`] are kept apart so call sites state the
//! direction they convert in.
//!
//! # Examples
//!
//! ```
//! use mercator_core::{google_tile, tms_tile};
//!
//! let (gx, gy) = google_tile(1009, 382, 10).unwrap();
//! assert_eq!((gx, gy), (1009, 641));
//! assert_eq!(tms_tile(gx, gy, 10).unwrap(), (1009, 382));
//! ```

use crate::error::check_tile;
use anyhow::Result;

/// Converts TMS tile coordinates to Google tile coordinates.
///
/// The coordinate origin moves from the bottom-left to the top-left corner of the extent.
pub fn google_tile(tx: i64, ty: i64, zoom: u8) -> Result<(i64, i64)> {
	check_tile(tx, ty, zoom)?;
	Ok((tx, max_index(zoom) - ty))
}

/// Converts Google tile coordinates to TMS tile coordinates.
///
/// The coordinate origin moves from the top-left to the bottom-left corner of the extent.
pub fn tms_tile(tx: i64, ty: i64, zoom: u8) -> Result<(i64, i64)> {
	check_tile(tx, ty, zoom)?;
	Ok((tx, -(ty - max_index(zoom))))
}

/// Returns the Microsoft quadkey of a TMS tile.
///
/// One digit per zoom level, most significant level first. Each digit is
/// `x_bit + 2 * y_bit` of the tile in the top-left (Google) row convention. Zoom 0 yields
/// an empty key.
///
/// ```
/// use mercator_core::quad_key;
///
/// assert_eq!(quad_key(3, 5, 3).unwrap(), "031");
/// assert_eq!(quad_key(0, 0, 0).unwrap(), "");
/// ```
pub fn quad_key(tx: i64, ty: i64, zoom: u8) -> Result<String> {
	let (gx, gy) = google_tile(tx, ty, zoom)?;
	Ok((1..=zoom)
		.rev()
		.map(|level| {
			let mask = 1i64 << (level - 1);
			let mut digit = b'0';
			if gx & mask != 0 {
				digit += 1;
			}
			if gy & mask != 0 {
				digit += 2;
			}
			char::from(digit)
		})
		.collect())
}

fn max_index(zoom: u8) -> i64 {
	(1i64 << zoom) - 1
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{MAX_ZOOM, MercatorError};
	use rstest::rstest;

	#[rstest]
	#[case(0, 0, 0, (0, 0))]
	#[case(0, 0, 1, (0, 1))]
	#[case(1, 1, 1, (1, 0))]
	#[case(3, 2, 3, (3, 5))]
	#[case(1009, 382, 10, (1009, 641))]
	fn google_tile_flips_rows(#[case] tx: i64, #[case] ty: i64, #[case] zoom: u8, #[case] expected: (i64, i64)) {
		assert_eq!(google_tile(tx, ty, zoom).unwrap(), expected);
		assert_eq!(tms_tile(expected.0, expected.1, zoom).unwrap(), (tx, ty));
	}

	#[test]
	fn tms_tile_inverts_google_tile() {
		for zoom in 0..=18u8 {
			let max = max_index(zoom);
			let samples = [0, 1, max / 3, max / 2, max - 1, max];
			let samples: Vec<i64> = samples.into_iter().filter(|t| (0..=max).contains(t)).collect();
			for &tx in &samples {
				for &ty in &samples {
					let (gx, gy) = google_tile(tx, ty, zoom).unwrap();
					assert_eq!(tms_tile(gx, gy, zoom).unwrap(), (tx, ty));
				}
			}
		}
	}

	#[test]
	fn tms_tile_inverts_google_tile_exhaustively_at_low_zoom() {
		for zoom in 0..=5u8 {
			let max = max_index(zoom);
			for tx in 0..=max {
				for ty in 0..=max {
					let (gx, gy) = google_tile(tx, ty, zoom).unwrap();
					assert_eq!(tms_tile(gx, gy, zoom).unwrap(), (tx, ty));
				}
			}
		}
	}

	#[test]
	fn highest_zoom_is_supported() {
		let max = max_index(MAX_ZOOM);
		assert_eq!(google_tile(max, 0, MAX_ZOOM).unwrap(), (max, max));
	}

	#[rstest]
	#[case(0, 1, 0)]
	#[case(-1, 0, 2)]
	#[case(0, 4, 2)]
	#[case(0, 0, 31)]
	fn rejects_tiles_outside_the_grid(#[case] tx: i64, #[case] ty: i64, #[case] zoom: u8) {
		for result in [google_tile(tx, ty, zoom), tms_tile(tx, ty, zoom)] {
			let err = result.unwrap_err();
			assert!(matches!(err.downcast_ref::<MercatorError>(), Some(MercatorError::Contract(_))));
		}
	}

	#[rstest]
	#[case(0, 0, 0, "")]
	#[case(0, 1, 1, "0")]
	#[case(1, 1, 1, "1")]
	#[case(0, 0, 1, "2")]
	#[case(1, 0, 1, "3")]
	#[case(3, 5, 3, "031")]
	#[case(1009, 382, 10, "3131110003")]
	fn quad_keys(#[case] tx: i64, #[case] ty: i64, #[case] zoom: u8, #[case] expected: &str) {
		assert_eq!(quad_key(tx, ty, zoom).unwrap(), expected);
	}

	#[test]
	fn quad_key_rejects_tiles_outside_the_grid() {
		assert!(quad_key(2, 0, 1).is_err());
	}
}
