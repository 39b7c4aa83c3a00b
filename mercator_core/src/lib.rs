//! Coordinate conversions for the Web Mercator (EPSG:3857 / EPSG:900913) tile pyramid.
//!
//! Converts between four coordinate spaces:
//! - WGS84 latitude/longitude in degrees
//! - Spherical Mercator meters
//! - pixel coordinates within the raster of a zoom level
//! - tile indices, in TMS (bottom-left origin) or Google (top-left origin) row order
//!
//! All functions are pure. Invalid input is rejected with a [`MercatorError`] instead of
//! leaking `NaN` into later steps.
//!
//! # Examples
//!
//! ```
//! use mercator_core::*;
//!
//! let (mx, my) = lat_lon_to_meters(-41.29, 174.8).unwrap();
//! let (tx, ty) = meters_to_tile(mx, my, 10).unwrap();
//! assert_eq!((tx, ty), (1009, 382));
//!
//! let (gx, gy) = google_tile(tx, ty, 10).unwrap();
//! assert_eq!((gx, gy), (1009, 641));
//!
//! let (min_lat, min_lon, max_lat, max_lon) = tile_lat_lon_bounds(tx, ty, 10).unwrap();
//! assert!(min_lat <= -41.29 && -41.29 <= max_lat);
//! assert!(min_lon <= 174.8 && 174.8 <= max_lon);
//! ```

mod constants;
pub use constants::*;

mod error;
pub use error::MercatorError;

mod grid;
pub use grid::*;

mod projection;
pub use projection::*;

mod tile_scheme;
pub use tile_scheme::*;

mod tile_size;
pub use tile_size::*;
