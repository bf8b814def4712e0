//! Geographic coordinate tuples

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Longitude, latitude and an optional altitude.
///
/// Altitude presence is tracked on its own since 0.0 is a valid altitude.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: Option<f64>,
}

impl Coordinate {
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: None,
        }
    }

    pub const fn with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: Some(altitude),
        }
    }

    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Altitude, or 0.0 when absent
    pub fn altitude(&self) -> f64 {
        self.altitude.unwrap_or(0.0)
    }

    pub const fn has_altitude(&self) -> bool {
        self.altitude.is_some()
    }

    pub fn set_altitude(&mut self, altitude: f64) {
        self.altitude = Some(altitude);
    }

    pub fn clear_altitude(&mut self) {
        self.altitude = None;
    }
}

impl fmt::Display for Coordinate {
    /// `lon,lat` or `lon,lat,alt`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.longitude, self.latitude)?;
        if let Some(altitude) = self.altitude {
            write!(f, ",{altitude}")?;
        }
        Ok(())
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::invalid_value("coordinates", s);
        let mut parts = s.split(',');
        let mut next = || -> Result<Option<f64>> {
            parts
                .next()
                .map(|part| part.trim().parse::<f64>().map_err(|_| invalid()))
                .transpose()
        };

        let longitude = next()?.ok_or_else(invalid)?;
        let latitude = next()?.ok_or_else(invalid)?;
        let altitude = next()?;
        if next()?.is_some() {
            return Err(invalid());
        }

        Ok(Self {
            longitude,
            latitude,
            altitude,
        })
    }
}

/// Ordered coordinate list as held by `<coordinates>`
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates(Vec<Coordinate>);

impl Coordinates {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn add_latlng(&mut self, latitude: f64, longitude: f64) {
        self.0.push(Coordinate::new(longitude, latitude));
    }

    pub fn add_latlngalt(&mut self, latitude: f64, longitude: f64, altitude: f64) {
        self.0
            .push(Coordinate::with_altitude(longitude, latitude, altitude));
    }

    pub fn add_coordinate(&mut self, coordinate: Coordinate) {
        self.0.push(coordinate);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Coordinate> {
        self.0.get(index)
    }

    /// Coordinate at `index`, or an out-of-range error
    pub fn coordinates_array_at(&self, index: usize) -> Result<Coordinate> {
        self.0
            .get(index)
            .copied()
            .ok_or_else(|| Error::out_of_range(index, self.0.len()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.0.iter()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl From<Vec<Coordinate>> for Coordinates {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        Self(coordinates)
    }
}

impl FromIterator<Coordinate> for Coordinates {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Coordinates {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Coordinates {
    /// Tuples separated by a single space
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coordinate) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{coordinate}")?;
        }
        Ok(())
    }
}

impl FromStr for Coordinates {
    type Err = Error;

    /// Whitespace separated `lon,lat[,alt]` tuples. Whitespace next to a
    /// comma belongs to the tuple, so `15.1 , -24.2` is one coordinate.
    fn from_str(s: &str) -> Result<Self> {
        tuples(s)
            .iter()
            .map(|tuple| {
                tuple
                    .parse::<Coordinate>()
                    .map_err(|_| Error::invalid_value("coordinates", tuple))
            })
            .collect()
    }
}

/// Groups whitespace separated tokens into comma-joined tuples
fn tuples(s: &str) -> Vec<String> {
    let mut tuples: Vec<String> = Vec::new();
    for token in s.split_ascii_whitespace() {
        match tuples.last_mut() {
            Some(last) if last.ends_with(',') || token.starts_with(',') => last.push_str(token),
            _ => tuples.push(token.to_string()),
        }
    }
    tuples
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn test_two_and_three_argument_construction() {
        let flat = Coordinate::new(-122.0, 37.0);
        assert!(!flat.has_altitude());
        assert!((flat.longitude() - -122.0).abs() < EPSILON);
        assert!((flat.latitude() - 37.0).abs() < EPSILON);

        let high = Coordinate::with_altitude(-122.0, 37.0, 0.0);
        assert!(high.has_altitude());
        assert!(high.altitude().abs() < EPSILON);
    }

    #[test]
    fn test_parse_tuples() -> Result<()> {
        let coords: Coordinates = "  1.2,3.4,5.6\n\t9.8,7.6 ".parse()?;
        assert_eq!(coords.len(), 2);
        assert_eq!(coords.get(0), Some(&Coordinate::with_altitude(1.2, 3.4, 5.6)));
        assert_eq!(coords.get(1), Some(&Coordinate::new(9.8, 7.6)));
        assert_eq!(coords.to_string(), "1.2,3.4,5.6 9.8,7.6");
        Ok(())
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for bad in ["1,abc", "1", "1,2,3,4", "1,,2"] {
            assert!(bad.parse::<Coordinates>().is_err(), "{bad:?}");
        }
        let err = "0,0 north,south".parse::<Coordinates>();
        assert!(matches!(err, Err(ref e) if e.to_string().contains("north,south")));
    }

    #[test]
    fn test_parse_space_around_comma() -> Result<()> {
        let coords: Coordinates = "15.10, -24.20".parse()?;
        assert_eq!(coords.len(), 1);
        assert_eq!(coords.get(0), Some(&Coordinate::new(15.10, -24.20)));

        let coords: Coordinates = "15.11 , -24.25".parse()?;
        assert_eq!(coords.get(0), Some(&Coordinate::new(15.11, -24.25)));

        let coords: Coordinates = "1,2 ,3   4 ,5, 6\n7,8".parse()?;
        assert_eq!(coords.to_string(), "1,2,3 4,5,6 7,8");
        Ok(())
    }

    #[test]
    fn test_parse_exponent() -> Result<()> {
        let coords: Coordinates = "1E-02, 2E-02".parse()?;
        let first = coords.coordinates_array_at(0)?;
        assert!((first.longitude() - 0.01).abs() < EPSILON);
        assert!((first.latitude() - 0.02).abs() < EPSILON);
        assert!(!first.has_altitude());
        Ok(())
    }

    #[test]
    fn test_parse_rejects_junk_with_spaced_commas() {
        for bad in ["this will not parse correctly", "0 , foo", "bar, 0", "1, 2,"] {
            assert!(bad.parse::<Coordinates>().is_err(), "{bad:?}");
        }
    }

    #[test]
    fn test_empty_text_is_empty_list() -> Result<()> {
        let coords: Coordinates = " \n ".parse()?;
        assert!(coords.is_empty());
        assert_eq!(coords.to_string(), "");
        Ok(())
    }

    #[test]
    fn test_latlng_argument_order() -> Result<()> {
        let mut coords = Coordinates::new();
        coords.add_latlng(1.0, 2.0);
        coords.add_latlngalt(3.0, 4.0, 5.0);
        assert_eq!(coords.to_string(), "2,1 4,3,5");
        assert!(coords.coordinates_array_at(1)?.has_altitude());
        assert!(coords.coordinates_array_at(2).is_err());
        Ok(())
    }
}
