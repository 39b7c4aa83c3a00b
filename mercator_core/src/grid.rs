//! Pixel and tile arithmetic of the global Web Mercator pyramid.
//!
//! The pyramid covers the square extent `[-ORIGIN_SHIFT, ORIGIN_SHIFT]²`. At zoom level `z`
//! it is a raster of `tile_size * 2^z` pixels per side, cut into `2^z × 2^z` tiles. Pixel and
//! tile rows count upwards from the bottom-left corner (TMS).
//!
//! [`GlobalMercator`] carries the tile size. The free functions at the bottom of this module
//! use the default 256 px grid.
//!
//! # Examples
//!
//! ```
//! use mercator_core::{GlobalMercator, TileSize};
//!
//! let grid = GlobalMercator::new(TileSize::Size512);
//! assert_eq!(grid.pixels_to_tile(512.0, 513.0).unwrap(), (0, 1));
//! ```

use crate::{
	EARTH_RADIUS, MAX_ZOOM, ORIGIN_SHIFT, TileSize, ensure_domain,
	error::{check_converted, check_finite, check_tile, check_zoom},
	meters_to_lat_lon,
};
use anyhow::Result;
use log::trace;
use std::{f64::consts::PI, fmt::Debug};

/// A Web Mercator tile pyramid with a fixed tile size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GlobalMercator {
	tile_size: TileSize,
}

impl GlobalMercator {
	pub fn new(tile_size: TileSize) -> Self {
		trace!("creating global mercator grid with {tile_size:?}");
		GlobalMercator { tile_size }
	}

	pub fn tile_size(&self) -> TileSize {
		self.tile_size
	}

	/// Meters per pixel at zoom level 0.
	pub fn initial_resolution(&self) -> f64 {
		2.0 * PI * EARTH_RADIUS / self.tile_size.as_f64()
	}

	/// Resolution in meters per pixel at `zoom`, measured at the equator.
	///
	/// Halves with every zoom level.
	pub fn resolution(&self, zoom: u8) -> Result<f64> {
		check_zoom(zoom)?;
		Ok(self.initial_resolution() / 2f64.powi(i32::from(zoom)))
	}

	/// Converts pixel coordinates at `zoom` to Mercator meters.
	pub fn pixels_to_meters(&self, px: f64, py: f64, zoom: u8) -> Result<(f64, f64)> {
		check_finite("px", px)?;
		check_finite("py", py)?;
		let res = self.resolution(zoom)?;
		let (mx, my) = (px * res - ORIGIN_SHIFT, py * res - ORIGIN_SHIFT);
		check_converted("px", px, mx)?;
		check_converted("py", py, my)?;
		Ok((mx, my))
	}

	/// Converts Mercator meters to pixel coordinates at `zoom`.
	///
	/// The result is real-valued. Points inside the extent map to `[0, tile_size * 2^zoom]`.
	pub fn meters_to_pixels(&self, mx: f64, my: f64, zoom: u8) -> Result<(f64, f64)> {
		check_finite("mx", mx)?;
		check_finite("my", my)?;
		let res = self.resolution(zoom)?;
		let (px, py) = ((mx + ORIGIN_SHIFT) / res, (my + ORIGIN_SHIFT) / res);
		check_converted("mx", mx, px)?;
		check_converted("my", my, py)?;
		Ok((px, py))
	}

	/// Returns the TMS tile containing the given pixel coordinates.
	///
	/// Computed as `ceil(p / tile_size) - 1`, so a pixel exactly on a tile edge belongs to the
	/// tile left of / below it: `256.0` is in tile 0, `256.0001` in tile 1. In consequence the
	/// origin pixel `0.0` yields index `-1`. Indices are not checked against any zoom level.
	pub fn pixels_to_tile(&self, px: f64, py: f64) -> Result<(i64, i64)> {
		check_finite("px", px)?;
		check_finite("py", py)?;
		let size = self.tile_size.as_f64();
		Ok((tile_index(px, size), tile_index(py, size)))
	}

	/// Returns the TMS tile containing the Mercator point at `zoom`.
	pub fn meters_to_tile(&self, mx: f64, my: f64, zoom: u8) -> Result<(i64, i64)> {
		let (px, py) = self.meters_to_pixels(mx, my, zoom)?;
		self.pixels_to_tile(px, py)
	}

	/// Moves the pixel origin from the bottom-left to the top-left corner of the raster.
	pub fn pixels_to_raster(&self, px: f64, py: f64, zoom: u8) -> Result<(f64, f64)> {
		check_finite("px", px)?;
		check_finite("py", py)?;
		check_zoom(zoom)?;
		let map_size = self.tile_size.as_f64() * 2f64.powi(i32::from(zoom));
		Ok((px, map_size - py))
	}

	/// Returns the Mercator extent `(min_x, min_y, max_x, max_y)` of a TMS tile.
	pub fn tile_bounds(&self, tx: i64, ty: i64, zoom: u8) -> Result<(f64, f64, f64, f64)> {
		check_tile(tx, ty, zoom)?;
		let size = i64::from(self.tile_size.size());
		let (min_x, min_y) = self.pixels_to_meters((tx * size) as f64, (ty * size) as f64, zoom)?;
		let (max_x, max_y) = self.pixels_to_meters(((tx + 1) * size) as f64, ((ty + 1) * size) as f64, zoom)?;
		Ok((min_x, min_y, max_x, max_y))
	}

	/// Returns the WGS84 extent of a TMS tile as `(min_lat, min_lon, max_lat, max_lon)`.
	///
	/// Note the order: latitude comes first in each corner. `min_lat` is the southern edge
	/// (row `ty`), `max_lat` the northern edge (row `ty + 1`).
	pub fn tile_lat_lon_bounds(&self, tx: i64, ty: i64, zoom: u8) -> Result<(f64, f64, f64, f64)> {
		let (min_x, min_y, max_x, max_y) = self.tile_bounds(tx, ty, zoom)?;
		let (min_lat, min_lon) = meters_to_lat_lon(min_x, min_y)?;
		let (max_lat, max_lon) = meters_to_lat_lon(max_x, max_y)?;
		Ok((min_lat, min_lon, max_lat, max_lon))
	}

	/// Returns the highest zoom level whose resolution is not finer than `pixel_size`.
	///
	/// This is the zoom to scale a raster of the given meters-per-pixel down to without losing
	/// detail. Pixel sizes coarser than zoom 0 yield 0, sizes finer than [`MAX_ZOOM`] yield
	/// [`MAX_ZOOM`].
	pub fn zoom_for_pixel_size(&self, pixel_size: f64) -> Result<u8> {
		check_finite("pixel_size", pixel_size)?;
		ensure_domain!(pixel_size > 0.0, "pixel_size ({pixel_size}) must be > 0");

		for zoom in 0..=MAX_ZOOM {
			if pixel_size > self.resolution(zoom)? {
				let zoom = zoom.saturating_sub(1);
				trace!("pixel size {pixel_size} maps to zoom {zoom}");
				return Ok(zoom);
			}
		}
		Ok(MAX_ZOOM)
	}
}

impl Debug for GlobalMercator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "GlobalMercator({})", self.tile_size.size())
	}
}

fn tile_index(p: f64, tile_size: f64) -> i64 {
	((p / tile_size).ceil() as i64).saturating_sub(1)
}

/// [`GlobalMercator::resolution`] on the 256 px grid.
pub fn resolution(zoom: u8) -> Result<f64> {
	GlobalMercator::default().resolution(zoom)
}

/// [`GlobalMercator::pixels_to_meters`] on the 256 px grid.
pub fn pixels_to_meters(px: f64, py: f64, zoom: u8) -> Result<(f64, f64)> {
	GlobalMercator::default().pixels_to_meters(px, py, zoom)
}

/// [`GlobalMercator::meters_to_pixels`] on the 256 px grid.
pub fn meters_to_pixels(mx: f64, my: f64, zoom: u8) -> Result<(f64, f64)> {
	GlobalMercator::default().meters_to_pixels(mx, my, zoom)
}

/// [`GlobalMercator::pixels_to_tile`] on the 256 px grid.
///
/// ```
/// use mercator_core::pixels_to_tile;
///
/// assert_eq!(pixels_to_tile(256.0, 256.0).unwrap(), (0, 0));
/// assert_eq!(pixels_to_tile(256.0001, 256.0001).unwrap(), (1, 1));
/// ```
pub fn pixels_to_tile(px: f64, py: f64) -> Result<(i64, i64)> {
	GlobalMercator::default().pixels_to_tile(px, py)
}

/// [`GlobalMercator::meters_to_tile`] on the 256 px grid.
pub fn meters_to_tile(mx: f64, my: f64, zoom: u8) -> Result<(i64, i64)> {
	GlobalMercator::default().meters_to_tile(mx, my, zoom)
}

/// [`GlobalMercator::pixels_to_raster`] on the 256 px grid.
pub fn pixels_to_raster(px: f64, py: f64, zoom: u8) -> Result<(f64, f64)> {
	GlobalMercator::default().pixels_to_raster(px, py, zoom)
}

/// [`GlobalMercator::tile_bounds`] on the 256 px grid.
pub fn tile_bounds(tx: i64, ty: i64, zoom: u8) -> Result<(f64, f64, f64, f64)> {
	GlobalMercator::default().tile_bounds(tx, ty, zoom)
}

/// [`GlobalMercator::tile_lat_lon_bounds`] on the 256 px grid.
pub fn tile_lat_lon_bounds(tx: i64, ty: i64, zoom: u8) -> Result<(f64, f64, f64, f64)> {
	GlobalMercator::default().tile_lat_lon_bounds(tx, ty, zoom)
}

/// [`GlobalMercator::zoom_for_pixel_size`] on the 256 px grid.
pub fn zoom_for_pixel_size(pixel_size: f64) -> Result<u8> {
	GlobalMercator::default().zoom_for_pixel_size(pixel_size)
}
