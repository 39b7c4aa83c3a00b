use crate::{MercatorError, TILE_SIZE};
use anyhow::{Result, bail};
use std::{fmt::Debug, str::FromStr};

/// Edge length of the square tiles a [`GlobalMercator`](crate::GlobalMercator) grid is cut into.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileSize {
	#[default]
	Size256,
	Size512,
}

impl TileSize {
	pub fn new(size: u16) -> Result<Self> {
		match size {
			256 => Ok(Self::Size256),
			512 => Ok(Self::Size512),
			_ => bail!(MercatorError::Contract(format!(
				"tile size ({size}) is not supported, use 256 or 512"
			))),
		}
	}

	/// Returns the size of the tile in pixels.
	pub fn size(&self) -> u16 {
		match self {
			TileSize::Size256 => TILE_SIZE,
			TileSize::Size512 => 2 * TILE_SIZE,
		}
	}

	pub(crate) fn as_f64(&self) -> f64 {
		f64::from(self.size())
	}
}

impl TryFrom<u16> for TileSize {
	type Error = anyhow::Error;

	fn try_from(size: u16) -> Result<Self> {
		TileSize::new(size)
	}
}

impl FromStr for TileSize {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		let Ok(size) = s.trim().parse::<u16>() else {
			bail!(MercatorError::Contract(format!("tile size ({s:?}) is not a number")));
		};
		TileSize::new(size)
	}
}

impl Debug for TileSize {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "TileSize({})", self.size())
	}
}
