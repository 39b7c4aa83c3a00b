//! Spherical Mercator projection between WGS84 degrees and EPSG:3857 meters.
//!
//! Both directions are independent of zoom level and tile size.
//!
//! # Examples
//!
//! ```
//! use mercator_core::{lat_lon_to_meters, meters_to_lat_lon};
//!
//! let (mx, my) = lat_lon_to_meters(52.520008, 13.404954).unwrap();
//! let (lat, lon) = meters_to_lat_lon(mx, my).unwrap();
//! assert!((lat - 52.520008).abs() < 1e-9);
//! assert!((lon - 13.404954).abs() < 1e-9);
//! ```

use crate::{
	ORIGIN_SHIFT, ensure_domain,
	error::{check_converted, check_finite},
};
use anyhow::Result;
use std::f64::consts::PI;

/// Converts a WGS84 `lat`/`lon` in degrees to Spherical Mercator `(mx, my)` in meters.
///
/// Longitude is not range-checked, values beyond ±180° extrapolate linearly.
///
/// # Errors
///
/// Returns a [`MercatorError::Domain`](crate::MercatorError::Domain) if either value is not
/// finite, if `lat` is not strictly within `(-90, 90)` (the projection diverges at the poles),
/// or if `lon` is so large that `mx` overflows.
pub fn lat_lon_to_meters(lat: f64, lon: f64) -> Result<(f64, f64)> {
	check_finite("lat", lat)?;
	check_finite("lon", lon)?;
	ensure_domain!(
		(-90.0..90.0).contains(&lat) && lat != -90.0,
		"lat ({lat}) must be within (-90, 90)"
	);

	let mx = lon * ORIGIN_SHIFT / 180.0;
	check_converted("lon", lon, mx)?;
	let my = ((90.0 + lat) * PI / 360.0).tan().ln() / (PI / 180.0);
	Ok((mx, my * ORIGIN_SHIFT / 180.0))
}

/// Converts Spherical Mercator `(mx, my)` in meters to WGS84 `(lat, lon)` in degrees.
///
/// Defined for all finite input. The latitude approaches ±90° as `my` grows, so points beyond
/// the square extent still yield a latitude, just a heavily compressed one.
pub fn meters_to_lat_lon(mx: f64, my: f64) -> Result<(f64, f64)> {
	check_finite("mx", mx)?;
	check_finite("my", my)?;

	let lon = mx / ORIGIN_SHIFT * 180.0;
	let lat = my / ORIGIN_SHIFT * 180.0;
	let lat = 180.0 / PI * (2.0 * (lat * PI / 180.0).exp().atan() - PI / 2.0);
	Ok((lat, lon))
}
