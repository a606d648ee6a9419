//! USGS GeoJSON feed parsing

use anyhow::Result;
use serde::Deserialize;

use crate::quake::Quake;

#[derive(Deserialize, Debug)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Deserialize, Debug)]
struct Feature {
    properties: Properties,
}

#[derive(Deserialize, Debug)]
struct Properties {
    mag: Option<f64>,
    place: Option<String>,
    time: i64,
}

impl From<Properties> for Quake {
    fn from(p: Properties) -> Self {
        Quake::new(p.mag.unwrap_or_default(), p.place.unwrap_or_default(), p.time)
    }
}

/// Extracts one [`Quake`] per feature, in feed order.
pub fn extract_quakes(input: &str) -> Result<Vec<Quake>> {
    let collection: FeatureCollection = serde_json::from_str(input)?;

    Ok(collection
        .features
        .into_iter()
        .map(|f| f.properties.into())
        .collect())
}

#[test]
fn test_extract_quakes() {
    let feed = r#"{"type":"FeatureCollection","metadata":{"count":2},"features":[
        {"type":"Feature","properties":{"mag":7.2,"place":"88km N of Yelizovo, Russia","time":1454124312220,"tsunami":0},"id":"us20004vvx"},
        {"type":"Feature","properties":{"mag":6.1,"place":"Pacific-Antarctic Ridge","time":1453777820750},"id":"us20004uks"}
    ]}"#;
    let quakes = extract_quakes(feed).unwrap();
    assert_eq!(
        quakes,
        vec![
            Quake::new(7.2, "88km N of Yelizovo, Russia", 1454124312220),
            Quake::new(6.1, "Pacific-Antarctic Ridge", 1453777820750),
        ]
    );
}

#[test]
fn test_extract_quakes_nulls() {
    let feed = r#"{"features":[{"properties":{"mag":null,"place":null,"time":0}}]}"#;
    assert_eq!(extract_quakes(feed).unwrap(), vec![Quake::new(0.0, "", 0)]);
}

#[test]
fn test_extract_quakes_empty() {
    assert!(extract_quakes(r#"{"type":"FeatureCollection"}"#)
        .unwrap()
        .is_empty());
}

#[test]
fn test_extract_quakes_malformed() {
    assert!(extract_quakes("{\"features\": [").is_err());
    assert!(extract_quakes(r#"{"features":[{"properties":{"mag":1.0}}]}"#).is_err());
}
