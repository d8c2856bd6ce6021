//! GeoJSON rendering of stored locations (RFC 7946 shape)

use serde::Serialize;

use super::Location;

/// `{"type": "FeatureCollection", "features": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

/// A single point feature
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub properties: FeatureProperties,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureProperties {
    pub id: i32,
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Coordinates are `[longitude, latitude]`
    Point { coordinates: [f64; 2] },
}

impl From<Location> for Feature {
    fn from(loc: Location) -> Self {
        Self {
            properties: FeatureProperties {
                id: loc.id,
                name: loc.name,
                category: loc.category,
            },
            geometry: Geometry::Point {
                coordinates: [loc.longitude, loc.latitude],
            },
        }
    }
}

impl FeatureCollection {
    pub fn from_locations(locations: Vec<Location>) -> Self {
        Self {
            features: locations.into_iter().map(Feature::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn location(id: i32, latitude: f64, longitude: f64) -> Location {
        Location {
            id,
            name: format!("point-{}", id),
            category: "Park".into(),
            latitude,
            longitude,
        }
    }

    #[test]
    fn coordinates_are_lon_lat() {
        let samples = [(40.0, -73.0), (-33.86, 151.2), (0.0, 0.0), (89.9, -179.9)];
        for (i, (lat, lon)) in samples.into_iter().enumerate() {
            let feature = Feature::from(location(i as i32, lat, lon));
            assert_eq!(feature.geometry, Geometry::Point { coordinates: [lon, lat] });
        }
    }

    #[test]
    fn serializes_feature_collection() {
        let collection = FeatureCollection::from_locations(vec![location(1, 40.0, -73.0)]);
        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "properties": {"id": 1, "name": "point-1", "category": "Park"},
                    "geometry": {"type": "Point", "coordinates": [-73.0, 40.0]}
                }]
            })
        );
    }

    #[test]
    fn empty_collection() {
        let value = serde_json::to_value(FeatureCollection::from_locations(vec![])).unwrap();
        assert_eq!(value, json!({"type": "FeatureCollection", "features": []}));
    }
}
