use geo_types::{Coord, LineString};

use crate::error::ProviderError;

/// Decodes an encoded polyline (https://developers.google.com/maps/documentation/utilities/polylinealgorithm).
///
/// Encoded pairs are (latitude, longitude); the returned line string is
/// (longitude, latitude) so it can go straight into GeoJSON.
pub fn decode(encoded: &str, precision: u32) -> Result<LineString<f64>, ProviderError> {
    let factor = 10_f64.powi(precision as i32);
    let bytes = encoded.as_bytes();

    let mut coords: Vec<Coord<f64>> = Vec::with_capacity(bytes.len() / 4);
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;

    while index < bytes.len() {
        lat += next_delta(bytes, &mut index)?;
        lon += next_delta(bytes, &mut index)?;

        coords.push(Coord {
            x: lon as f64 / factor,
            y: lat as f64 / factor,
        });
    }

    Ok(LineString::new(coords))
}

fn next_delta(bytes: &[u8], index: &mut usize) -> Result<i64, ProviderError> {
    let mut result: i64 = 0;
    let mut shift = 0;

    loop {
        let byte = *bytes.get(*index).ok_or_else(|| {
            ProviderError::MalformedResponse(String::from("Truncated polyline"))
        })?;
        *index += 1;

        if !(63..127).contains(&byte) || shift > 60 {
            return Err(ProviderError::MalformedResponse(format!(
                "Invalid polyline character at {}",
                *index - 1
            )));
        }

        let chunk = (byte - 63) as i64;
        result |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk < 0x20 {
            break;
        }
    }

    Ok(if result & 1 == 1 {
        !(result >> 1)
    } else {
        result >> 1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_reference_polyline() {
        // Reference example from the polyline algorithm documentation
        let line = decode("_p~iF~ps|U_ulLnnqC_mqNvxq`@", 5).unwrap();
        let coords: Vec<(f64, f64)> = line.coords().map(|c| (c.x, c.y)).collect();

        assert_eq!(
            coords,
            vec![(-120.2, 38.5), (-120.95, 40.7), (-126.453, 43.252)]
        );
    }

    #[test]
    fn test_decode_precision_6() {
        // (lat 38.5, lon -120.2) at precision 6
        let line = decode("_izlhA~rlgdF", 6).unwrap();
        let coord = line.coords().next().unwrap();

        assert!((coord.x - -120.2).abs() < 1e-9);
        assert!((coord.y - 38.5).abs() < 1e-9);
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("", 5).unwrap().coords().count(), 0);
    }

    #[test]
    fn test_decode_truncated() {
        assert!(matches!(
            decode("_p~iF", 5),
            Err(ProviderError::MalformedResponse(_))
        ));
    }
}
