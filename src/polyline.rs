//! Encoded polyline format (the compact textual form used by directions
//! APIs): latitude/longitude deltas scaled by 1e5, sign folded into the
//! low bit, emitted as 5-bit chunks over an ASCII alphabet shifted by 63.

use crate::coordinate::Coordinate;

const CHUNK_CONTINUATION: i64 = 0x20;
const ALPHABET_OFFSET: u8 = 63;
const SCALE: f64 = 1e5;

#[derive(Debug, PartialEq)]
pub enum PolylineError {
    /// The string ended in the middle of a chunked value.
    Truncated { offset: usize },
    /// A byte outside the shifted alphabet.
    InvalidByte { byte: u8, offset: usize },
}

impl std::fmt::Display for PolylineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolylineError::Truncated { offset } => {
                write!(f, "polyline truncated mid-value at byte {offset}")
            }
            PolylineError::InvalidByte { byte, offset } => {
                write!(f, "invalid polyline byte {byte:#04x} at offset {offset}")
            }
        }
    }
}

impl std::error::Error for PolylineError {}

/// Decodes an encoded polyline into its coordinate sequence.
///
/// An empty string decodes to an empty sequence. Truncated or
/// out-of-alphabet input is rejected rather than yielding a partial
/// final point.
pub fn decode_polyline(encoded: &str) -> Result<Vec<Coordinate>, PolylineError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut offset = 0;
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;

    while offset < bytes.len() {
        lat += decode_value(bytes, &mut offset)?;
        lon += decode_value(bytes, &mut offset)?;
        points.push(Coordinate::new(lat as f64 / SCALE, lon as f64 / SCALE));
    }

    Ok(points)
}

fn decode_value(bytes: &[u8], offset: &mut usize) -> Result<i64, PolylineError> {
    let mut result: i64 = 0;
    let mut shift = 0;

    loop {
        let Some(&byte) = bytes.get(*offset) else {
            return Err(PolylineError::Truncated { offset: *offset });
        };
        if !(ALPHABET_OFFSET..=126).contains(&byte) {
            return Err(PolylineError::InvalidByte {
                byte,
                offset: *offset,
            });
        }
        *offset += 1;

        let chunk = (byte - ALPHABET_OFFSET) as i64;
        result |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk < CHUNK_CONTINUATION {
            break;
        }
    }

    // Low bit carries the sign: odd means one's complement.
    if result & 1 != 0 {
        Ok(!(result >> 1))
    } else {
        Ok(result >> 1)
    }
}

/// Encodes a coordinate sequence into the compact polyline form.
/// Inverse of [`decode_polyline`] up to the 1e-5 grid.
pub fn encode_polyline(points: &[Coordinate]) -> String {
    let mut encoded = String::new();
    let mut prev_lat: i64 = 0;
    let mut prev_lon: i64 = 0;

    for point in points {
        let lat = (point.latitude * SCALE).round() as i64;
        let lon = (point.longitude * SCALE).round() as i64;
        encode_value(lat - prev_lat, &mut encoded);
        encode_value(lon - prev_lon, &mut encoded);
        prev_lat = lat;
        prev_lon = lon;
    }

    encoded
}

fn encode_value(delta: i64, out: &mut String) {
    let mut value = delta << 1;
    if delta < 0 {
        value = !value;
    }
    while value >= CHUNK_CONTINUATION {
        out.push(((CHUNK_CONTINUATION | (value & 0x1f)) as u8 + ALPHABET_OFFSET) as char);
        value >>= 5;
    }
    out.push((value as u8 + ALPHABET_OFFSET) as char);
}

/// Decodes a polyline and brackets it with caller-supplied endpoints,
/// used when a live GPS fix is more accurate than the API's encoded
/// ends. Decoded points keep their order in between.
pub fn with_precise_ends(
    encoded: &str,
    start: Coordinate,
    end: Coordinate,
) -> Result<Vec<Coordinate>, PolylineError> {
    let decoded = decode_polyline(encoded)?;
    let mut points = Vec::with_capacity(decoded.len() + 2);
    points.push(start);
    points.extend(decoded);
    points.push(end);
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Reference example from the format's documentation.
    const FIXTURE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    fn fixture_points() -> Vec<Coordinate> {
        vec![
            Coordinate::new(38.5, -120.2),
            Coordinate::new(40.7, -120.95),
            Coordinate::new(43.252, -126.453),
        ]
    }

    #[test]
    fn empty_string_decodes_to_empty_sequence() {
        assert_eq!(decode_polyline("").unwrap(), Vec::new());
    }

    #[test]
    fn decodes_reference_fixture() {
        let decoded = decode_polyline(FIXTURE).unwrap();
        assert_eq!(decoded.len(), 3);
        for (got, want) in decoded.iter().zip(fixture_points()) {
            assert!((got.latitude - want.latitude).abs() < 1e-5);
            assert!((got.longitude - want.longitude).abs() < 1e-5);
        }
    }

    #[test]
    fn encodes_reference_fixture() {
        assert_eq!(encode_polyline(&fixture_points()), FIXTURE);
    }

    #[test]
    fn round_trip_stays_on_grid() {
        let points = vec![
            Coordinate::new(5.6037, -0.1870),
            Coordinate::new(5.60391, -0.18655),
            Coordinate::new(5.60414, -0.18602),
        ];
        let decoded = decode_polyline(&encode_polyline(&points)).unwrap();
        assert_eq!(decoded.len(), points.len());
        for (got, want) in decoded.iter().zip(&points) {
            assert!((got.latitude - want.latitude).abs() < 1e-5);
            assert!((got.longitude - want.longitude).abs() < 1e-5);
        }
    }

    #[test]
    fn truncated_input_is_rejected() {
        // Continuation bit set on the final byte.
        let err = decode_polyline("_p~iF~ps|U_").unwrap_err();
        assert!(matches!(err, PolylineError::Truncated { .. }));
    }

    #[test]
    fn out_of_alphabet_byte_is_rejected() {
        let err = decode_polyline("_p~iF \t").unwrap_err();
        assert!(matches!(err, PolylineError::InvalidByte { .. }));
    }

    #[test]
    fn precise_ends_bracket_decoded_points() {
        let start = Coordinate::new(38.50001, -120.20002);
        let end = Coordinate::new(43.25199, -126.45301);
        let points = with_precise_ends(FIXTURE, start, end).unwrap();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], start);
        assert_eq!(points[4], end);
        assert!((points[1].latitude - 38.5).abs() < 1e-5);
        assert!((points[3].longitude + 126.453).abs() < 1e-5);
    }
}
