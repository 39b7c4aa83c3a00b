//! Geographic and Web Mercator constants of the global tile pyramid.

use std::f64::consts::PI;

/// WGS84 semi-major axis (equatorial radius) in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Edge length of a tile in pixels.
pub const TILE_SIZE: u16 = 256;

/// Meters per pixel at zoom level 0, measured at the equator (2 * PI * EARTH_RADIUS / 256).
pub const INITIAL_RESOLUTION: f64 = 2.0 * PI * EARTH_RADIUS / 256.0;

/// Half the width (and height) of the projected extent in meters.
///
/// Mercator x and y both lie within `[-ORIGIN_SHIFT, ORIGIN_SHIFT]`, about ±20037508.34 m.
pub const ORIGIN_SHIFT: f64 = PI * EARTH_RADIUS;

/// Highest zoom level accepted by the pixel and tile conversions.
pub const MAX_ZOOM: u8 = 30;

/// Latitude in degrees at which the Mercator y coordinate reaches `ORIGIN_SHIFT`.
///
/// Equals `atan(sinh(PI))` in degrees.
pub const MAX_LAT: f64 = 85.051_128_779_806_59;
