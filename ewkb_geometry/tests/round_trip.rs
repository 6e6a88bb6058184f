//! Integration tests that encode geometries and read the bytes back.
//!
//! The decoder below reads the byte layout on its own and shares no code with the encoder.

use anyhow::{Result, bail, ensure};
use byteorder::{LE, ReadBytesExt};
use ewkb_geometry::{
	EwkbConfig, EwkbEncoder, EwkbError, Geometry, GeometryTrait, GeometryType, LineStringGeometry,
	MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry, PointGeometry, PolygonGeometry, SridPolicy,
	encode, encode_hex,
	ewkb::{DIMENSION_FLAG, EwkbMode},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::io::Cursor;

/// Minimal reader for little-endian 2D (E)WKB, independent of the encoder.
fn decode(bytes: &[u8]) -> Result<Geometry> {
	let mut cursor = Cursor::new(bytes);
	let geometry = read_geometry(&mut cursor)?;
	ensure!(
		cursor.position() == bytes.len() as u64,
		"{} trailing bytes",
		bytes.len() as u64 - cursor.position()
	);
	Ok(geometry)
}

fn read_geometry(cursor: &mut Cursor<&[u8]>) -> Result<Geometry> {
	ensure!(cursor.read_u8()? == 1, "expected little-endian byte-order mark");
	let raw_type = cursor.read_u32::<LE>()?;
	let srid = if raw_type & DIMENSION_FLAG != 0 {
		Some(cursor.read_u32::<LE>()?)
	} else {
		None
	};

	let mut geometry = match GeometryType::try_from(raw_type & !DIMENSION_FLAG)? {
		GeometryType::Point => Geometry::Point(read_point(cursor)?),
		GeometryType::LineString => Geometry::LineString(read_line_string(cursor)?),
		GeometryType::Polygon => Geometry::Polygon(read_polygon(cursor)?),
		GeometryType::MultiPoint => Geometry::MultiPoint(MultiPointGeometry::from(read_elements(cursor, |g| {
			match g {
				Geometry::Point(p) => Ok(p),
				other => bail!("unexpected {other:?} in MultiPoint"),
			}
		})?)),
		GeometryType::MultiLineString => {
			Geometry::MultiLineString(MultiLineStringGeometry::from(read_elements(cursor, |g| match g {
				Geometry::LineString(l) => Ok(l),
				other => bail!("unexpected {other:?} in MultiLineString"),
			})?))
		}
		GeometryType::MultiPolygon => Geometry::MultiPolygon(MultiPolygonGeometry::from(read_elements(cursor, |g| {
			match g {
				Geometry::Polygon(p) => Ok(p),
				other => bail!("unexpected {other:?} in MultiPolygon"),
			}
		})?)),
		GeometryType::Collection => bail!("collections have no body"),
	};
	geometry.set_srid(srid);
	Ok(geometry)
}

fn read_point(cursor: &mut Cursor<&[u8]>) -> Result<PointGeometry> {
	let x = cursor.read_f64::<LE>()?;
	let y = cursor.read_f64::<LE>()?;
	Ok(PointGeometry::from([x, y]))
}

fn read_line_string(cursor: &mut Cursor<&[u8]>) -> Result<LineStringGeometry> {
	let count = cursor.read_u32::<LE>()?;
	let points = (0..count)
		.map(|_| -> Result<[f64; 2]> { Ok([cursor.read_f64::<LE>()?, cursor.read_f64::<LE>()?]) })
		.collect::<Result<Vec<_>>>()?;
	Ok(LineStringGeometry::from(points))
}

fn read_polygon(cursor: &mut Cursor<&[u8]>) -> Result<PolygonGeometry> {
	let count = cursor.read_u32::<LE>()?;
	let rings = (0..count)
		.map(|_| read_line_string(cursor))
		.collect::<Result<Vec<_>>>()?;
	Ok(PolygonGeometry::from(rings))
}

fn read_elements<T>(cursor: &mut Cursor<&[u8]>, extract: impl Fn(Geometry) -> Result<T>) -> Result<Vec<T>> {
	let count = cursor.read_u32::<LE>()?;
	(0..count).map(|_| extract(read_geometry(cursor)?)).collect()
}

fn square(x0: f64, y0: f64, size: f64) -> Vec<[f64; 2]> {
	vec![
		[x0, y0],
		[x0 + size, y0],
		[x0 + size, y0 + size],
		[x0, y0 + size],
		[x0, y0],
	]
}

fn samples() -> Vec<Geometry> {
	vec![
		Geometry::new_point([13.404954, 52.520008]),
		Geometry::new_point([-0.5, 1e-300]).with_srid(4326),
		Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.5]]),
		Geometry::new_line_string::<f64>(vec![]).with_srid(3857),
		Geometry::new_polygon(vec![square(0.0, 0.0, 10.0), square(2.0, 2.0, 3.0)]),
		Geometry::new_polygon(vec![square(-180.0, -90.0, 1.0)]).with_srid(4326),
		Geometry::new_multi_point(vec![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]),
		Geometry::new_multi_line_string(vec![vec![[0.0, 0.0], [1.0, 1.0]], vec![[2.0, 2.0], [3.0, 3.0]]]).with_srid(2056),
		Geometry::new_multi_polygon(vec![vec![square(0.0, 0.0, 1.0)], vec![square(5.0, 5.0, 2.0), square(5.5, 5.5, 0.5)]]),
		Geometry::new_multi_polygon::<f64>(vec![]),
	]
}

#[test]
fn round_trip_all_kinds() -> Result<()> {
	for geometry in samples() {
		let blob = encode(&geometry)?;
		assert_eq!(decode(blob.as_slice())?, geometry);
	}
	Ok(())
}

#[test]
fn round_trip_elements_with_own_srid() -> Result<()> {
	let mut multi = MultiPointGeometry::from(vec![
		PointGeometry::from([1.0, 2.0]).with_srid(4326),
		PointGeometry::from([3.0, 4.0]),
	]);
	multi.srid = Some(3857);
	let geometry = Geometry::MultiPoint(multi);
	assert_eq!(decode(encode(&geometry)?.as_slice())?, geometry);
	Ok(())
}

#[test]
fn deterministic() -> Result<()> {
	for geometry in samples() {
		assert_eq!(encode(&geometry)?, encode(&geometry.clone())?);
	}
	Ok(())
}

#[rstest]
#[case(Geometry::new_point([1.0, 2.0]), 21)]
#[case(Geometry::new_point([1.0, 2.0]).with_srid(4326), 25)]
#[case(Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 1.0]]), 41)]
#[case(Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 1.0]]).with_srid(4326), 45)]
#[case(Geometry::new_multi_point(vec![[1.0, 2.0]]), 5 + 4 + 21)]
fn known_lengths(#[case] geometry: Geometry, #[case] len: u64) -> Result<()> {
	assert_eq!(encode(&geometry)?.len(), len);
	Ok(())
}

#[test]
fn length_laws() -> Result<()> {
	for geometry in samples() {
		let mode = EwkbMode::for_srid(geometry.srid());
		let header = mode.header_len();
		let len = encode(&geometry)?.as_slice().len();
		let expected = match &geometry {
			Geometry::Point(_) => header + 16,
			Geometry::LineString(l) => header + 4 + 16 * l.points.len(),
			Geometry::Polygon(p) => header + 4 + p.rings.iter().map(|r| 4 + 16 * r.points.len()).sum::<usize>(),
			Geometry::MultiPoint(m) => header + 4 + 21 * m.points.len(),
			Geometry::MultiLineString(m) => header + 4 + m.line_strings.iter().map(|l| 9 + 16 * l.points.len()).sum::<usize>(),
			Geometry::MultiPolygon(m) => {
				let polygons: usize = m
					.polygons
					.iter()
					.map(|p| 9 + p.rings.iter().map(|r| 4 + 16 * r.points.len()).sum::<usize>())
					.sum();
				header + 4 + polygons
			}
			other => panic!("unexpected sample {other:?}"),
		};
		assert_eq!(len, expected, "length of {geometry:?}");
	}
	Ok(())
}

#[test]
fn line_string_and_multi_point_differ() -> Result<()> {
	let coordinates = vec![[1.0, 2.0], [3.0, 4.0]];
	let line = encode(&Geometry::new_line_string(coordinates.clone()))?;
	let multi = encode(&Geometry::new_multi_point(coordinates))?;
	assert_eq!(line.len(), 5 + 4 + 2 * 16);
	assert_eq!(multi.len(), 5 + 4 + 2 * 21);
	assert_eq!(&line.as_slice()[5..9], &multi.as_slice()[5..9]);
	Ok(())
}

#[test]
fn concrete_point_bytes() -> Result<()> {
	let blob = encode(&Geometry::new_point([1.5, 2.5]))?;
	assert_eq!(
		blob.as_slice().to_vec(),
		vec![
			0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00,
			0x00, 0x04, 0x40
		]
	);
	assert_eq!(blob.as_hex(), "01 01 00 00 00 00 00 00 00 00 00 f8 3f 00 00 00 00 00 00 04 40");
	Ok(())
}

#[rstest]
#[case(None, None)]
#[case(Some(0), None)]
#[case(Some(1), Some(1))]
#[case(Some(4326), Some(4326))]
#[case(Some(u32::MAX), Some(u32::MAX))]
fn mode_selection(#[case] srid: Option<u32>, #[case] written: Option<u32>) -> Result<()> {
	let mut geometry = Geometry::new_point([7.0, 8.0]);
	geometry.set_srid(srid);
	let bytes = encode(&geometry)?.into_vec();
	let raw_type = u32::from_le_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]);
	match written {
		None => {
			assert_eq!(raw_type, 1);
			assert_eq!(bytes.len(), 21);
		}
		Some(srid) => {
			assert_eq!(raw_type, 1 | DIMENSION_FLAG);
			assert_eq!(u32::from_le_bytes([bytes[5], bytes[6], bytes[7], bytes[8]]), srid);
			assert_eq!(bytes.len(), 25);
		}
	}
	Ok(())
}

#[test]
fn collection_is_rejected() {
	let collection = Geometry::new_collection(vec![Geometry::new_point([1.0, 2.0])]).with_srid(4326);
	let err = encode(&collection).unwrap_err();
	assert_eq!(
		err.downcast_ref::<EwkbError>(),
		Some(&EwkbError::UnsupportedSpatialInterface {
			type_name: "GeometryCollection".to_string()
		})
	);
}

#[test]
fn unknown_kind_is_rejected() {
	let err = encode_hex(&Geometry::new_unknown("Triangle")).unwrap_err();
	assert_eq!(err.to_string(), "unsupported spatial type: Triangle");
}

#[test]
fn per_geometry_policy() -> Result<()> {
	let geometry = Geometry::new_multi_line_string(vec![vec![[0.0, 0.0], [1.0, 1.0]]]).with_srid(4326);
	let Geometry::MultiLineString(decoded) = decode(encode(&geometry)?.as_slice())? else {
		panic!("expected a MultiLineString")
	};
	assert_eq!(decoded.srid(), Some(4326));
	assert_eq!(decoded.line_strings[0].srid(), None);
	Ok(())
}

#[test]
fn inherit_from_container_policy() -> Result<()> {
	let encoder = EwkbEncoder::new(EwkbConfig::default().with_srid_policy(SridPolicy::InheritFromContainer));
	let geometry = Geometry::new_multi_polygon(vec![vec![square(0.0, 0.0, 1.0)], vec![square(3.0, 3.0, 1.0)]]).with_srid(4326);
	let blob = encoder.encode(&geometry)?;
	let Geometry::MultiPolygon(decoded) = decode(blob.as_slice())? else {
		panic!("expected a MultiPolygon")
	};
	assert_eq!(decoded.srid(), Some(4326));
	for polygon in &decoded.polygons {
		assert_eq!(polygon.srid(), Some(4326));
	}
	assert_eq!(blob.len(), encode(&geometry)?.len() + 2 * 4);
	Ok(())
}

#[test]
fn encode_hex_matches_bytes() -> Result<()> {
	for geometry in samples() {
		let hex = encode_hex(&geometry)?;
		assert_eq!(hex, encode(&geometry)?.as_hex_upper());
		assert_eq!(hex.len() as u64, 2 * encode(&geometry)?.len());
		assert!(hex.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
	}
	Ok(())
}

#[test]
fn concurrent_encoding() -> Result<()> {
	let encoder = &EwkbEncoder::default();
	let geometries = &samples();
	let expected = geometries.iter().map(encode).collect::<Result<Vec<_>>>()?;

	std::thread::scope(|scope| {
		let handles: Vec<_> = (0..8)
			.map(|_| scope.spawn(move || geometries.iter().map(|g| encoder.encode(g)).collect::<Result<Vec<_>>>()))
			.collect();
		for handle in handles {
			let blobs = handle.join().expect("encoder thread panicked")?;
			assert_eq!(blobs, expected);
		}
		Ok(())
	})
}
