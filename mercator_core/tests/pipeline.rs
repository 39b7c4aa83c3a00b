use anyhow::Result;
use approx::assert_abs_diff_eq;
use mercator_core::*;
use rstest::rstest;

const ZOOM: u8 = 10;

#[test]
fn wellington_forward_and_back() -> Result<()> {
	let (lat, lon) = (-41.29, 174.8);

	let (mx, my) = lat_lon_to_meters(lat, lon)?;
	assert_abs_diff_eq!(mx, 19_458_646.990_664, epsilon = 0.1);
	assert_abs_diff_eq!(my, -5_055_211.159_994, epsilon = 0.1);

	let (tx, ty) = meters_to_tile(mx, my, ZOOM)?;
	assert_eq!((tx, ty), (1009, 382));

	let (gx, gy) = google_tile(tx, ty, ZOOM)?;
	assert_eq!((gx, gy), (tx, 1023 - ty));
	assert_eq!(tms_tile(gx, gy, ZOOM)?, (tx, ty));

	let (min_lat, min_lon, max_lat, max_lon) = tile_lat_lon_bounds(tx, ty, ZOOM)?;
	assert!(min_lat <= lat && lat <= max_lat, "{min_lat} <= {lat} <= {max_lat}");
	assert!(min_lon <= lon && lon <= max_lon, "{min_lon} <= {lon} <= {max_lon}");
	Ok(())
}

#[test]
fn listed_wellington_meters_land_one_row_north() -> Result<()> {
	// (19467315.0, -5010071.6) is not what lat_lon_to_meters(-41.29, 174.8) yields; its tile
	// lies one row north of the point and does not contain it.
	let (tx, ty) = meters_to_tile(19_467_315.0, -5_010_071.6, ZOOM)?;
	assert_eq!((tx, ty), (1009, 383));

	let (min_lat, _, max_lat, _) = tile_lat_lon_bounds(tx, ty, ZOOM)?;
	assert!(!(min_lat..=max_lat).contains(&-41.29), "{min_lat}..={max_lat}");

	let (mx, my) = lat_lon_to_meters(-41.29, 174.8)?;
	assert_eq!(meters_to_tile(mx, my, ZOOM)?, (1009, 382));
	Ok(())
}

#[test]
fn resolution_at_zoom_0() -> Result<()> {
	assert_abs_diff_eq!(resolution(0)?, 156_543.03, epsilon = 0.01);
	Ok(())
}

#[test]
fn single_tile_at_zoom_0_is_its_own_flip() -> Result<()> {
	assert_eq!(google_tile(0, 0, 0)?, (0, 0));
	assert_eq!(tms_tile(0, 0, 0)?, (0, 0));
	Ok(())
}

#[rstest]
#[case(52.520008, 13.404954, 12)]
#[case(-33.8688, 151.2093, 7)]
#[case(40.7128, -74.006, 16)]
#[case(0.1, 0.1, 0)]
#[case(-84.9, -179.9, 18)]
fn point_lies_in_the_bounds_of_its_tile(#[case] lat: f64, #[case] lon: f64, #[case] zoom: u8) -> Result<()> {
	let (mx, my) = lat_lon_to_meters(lat, lon)?;
	let (tx, ty) = meters_to_tile(mx, my, zoom)?;

	let (min_x, min_y, max_x, max_y) = tile_bounds(tx, ty, zoom)?;
	assert!(min_x <= mx && mx <= max_x);
	assert!(min_y <= my && my <= max_y);

	let (min_lat, min_lon, max_lat, max_lon) = tile_lat_lon_bounds(tx, ty, zoom)?;
	assert!(min_lat <= lat && lat <= max_lat);
	assert!(min_lon <= lon && lon <= max_lon);
	Ok(())
}

#[test]
fn tile_bounds_round_trip_through_pixels() -> Result<()> {
	let (min_x, min_y, max_x, max_y) = tile_bounds(5, 9, 4)?;
	let (px, py) = meters_to_pixels(min_x, min_y, 4)?;
	assert_abs_diff_eq!(px, 5.0 * 256.0, epsilon = 1e-6);
	assert_abs_diff_eq!(py, 9.0 * 256.0, epsilon = 1e-6);
	let (px, py) = meters_to_pixels(max_x, max_y, 4)?;
	assert_abs_diff_eq!(px, 6.0 * 256.0, epsilon = 1e-6);
	assert_abs_diff_eq!(py, 10.0 * 256.0, epsilon = 1e-6);
	Ok(())
}

#[test]
fn grid_with_512_px_tiles_keeps_tile_extents() -> Result<()> {
	let grid = GlobalMercator::new(TileSize::new(512)?);
	let (mx, my) = lat_lon_to_meters(48.8566, 2.3522)?;
	assert_eq!(grid.meters_to_tile(mx, my, 11)?, meters_to_tile(mx, my, 11)?);
	assert_eq!(grid.zoom_for_pixel_size(1000.0)?, zoom_for_pixel_size(1000.0)? - 1);
	Ok(())
}

#[test]
fn errors_carry_their_kind() {
	let err = lat_lon_to_meters(-90.0, 0.0).unwrap_err();
	assert!(matches!(err.downcast_ref::<MercatorError>(), Some(MercatorError::Domain(_))));
	assert_eq!(err.to_string(), "domain error: lat (-90) must be within (-90, 90)");

	let err = meters_to_tile(0.0, 0.0, MAX_ZOOM + 1).unwrap_err();
	assert!(matches!(err.downcast_ref::<MercatorError>(), Some(MercatorError::Contract(_))));
}
