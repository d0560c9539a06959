use serde_json::{Map, Value};
use survey::{PointRecord, PointStore};

/// Builds a GeoJSON FeatureCollection from the live points of a store.
///
/// Tombstoned slots are skipped. Property order matches the capture form
/// (theme, comment, residency, age, gender, transport); coordinates are
/// `[lng, lat]` per GeoJSON, with no precision rounding.
pub fn feature_collection(store: &PointStore) -> Value {
    let mut root = Map::new();
    root.insert(
        "type".to_string(),
        Value::String("FeatureCollection".to_string()),
    );

    let features: Vec<Value> = store
        .iter_live()
        .map(|(_, record)| feature(record))
        .collect();
    root.insert("features".to_string(), Value::Array(features));
    Value::Object(root)
}

pub fn feature(record: &PointRecord) -> Value {
    let mut obj = Map::new();
    obj.insert("type".to_string(), Value::String("Feature".to_string()));
    obj.insert("properties".to_string(), Value::Object(properties(record)));
    obj.insert("geometry".to_string(), geometry(record));
    Value::Object(obj)
}

fn properties(record: &PointRecord) -> Map<String, Value> {
    let attrs = &record.attributes;
    let mut props = Map::new();
    props.insert(
        "theme".to_string(),
        Value::String(attrs.theme.as_str().to_string()),
    );
    props.insert("comment".to_string(), Value::String(attrs.comment.clone()));
    props.insert(
        "residency".to_string(),
        Value::String(attrs.residency.clone()),
    );
    props.insert("age".to_string(), Value::String(attrs.age.clone()));
    props.insert("gender".to_string(), Value::String(attrs.gender.clone()));
    props.insert(
        "transport".to_string(),
        Value::String(attrs.transport.clone()),
    );
    props
}

fn geometry(record: &PointRecord) -> Value {
    let mut obj = Map::new();
    obj.insert("type".to_string(), Value::String("Point".to_string()));
    obj.insert(
        "coordinates".to_string(),
        Value::Array(vec![
            Value::from(record.position.lng_deg),
            Value::from(record.position.lat_deg),
        ]),
    );
    Value::Object(obj)
}

pub fn to_geojson_string(store: &PointStore) -> Result<String, serde_json::Error> {
    serde_json::to_string(&feature_collection(store))
}

/// Pretty-printed with 2-space indentation, as the exported file expects.
pub fn to_geojson_string_pretty(store: &PointStore) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&feature_collection(store))
}
