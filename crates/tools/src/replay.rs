use std::path::{Path, PathBuf};

use collector::{EXPORT_CONFIRMATION, Field, FormFields, PointCollector};
use foundation::geo::LatLng;
use serde::Deserialize;
use survey::PointId;
use tracing::{info, warn};

use crate::headless::{DirExportSink, HeadlessForm, HeadlessMap};

/// Recorded survey session: form edits, map clicks, deletions, exports.
#[derive(Debug, Deserialize)]
pub struct SessionScript {
    pub events: Vec<SessionEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    Form { field: String, value: String },
    Click { lat: f64, lng: f64 },
    Delete { index: u32 },
    Export,
}

#[derive(Debug, Default)]
pub struct ReplaySummary {
    pub captured: usize,
    pub rejected: usize,
    pub deleted: usize,
    pub exports: Vec<PathBuf>,
}

/// Drives a session script through the collector end to end, standing in
/// for the browser interaction loop. Participant-facing notices surface
/// as log lines instead of modal alerts.
pub fn run_session(script: &SessionScript, out_dir: &Path) -> Result<ReplaySummary, String> {
    let mut points = PointCollector::new();
    let mut map = HeadlessMap::new();
    let mut form = HeadlessForm::new();
    let mut sink = DirExportSink::new(out_dir);
    let mut summary = ReplaySummary::default();

    for event in &script.events {
        match event {
            SessionEvent::Form { field, value } => {
                let Some(field) = Field::from_name(field) else {
                    return Err(format!("unknown form field: {field}"));
                };
                form.set_value(field, value);
            }
            SessionEvent::Click { lat, lng } => {
                match points.capture_click(&mut map, &mut form, LatLng::new(*lat, *lng)) {
                    Ok(id) => {
                        info!(index = id.index(), "point captured");
                        summary.captured += 1;
                    }
                    Err(err) => {
                        warn!("{}", err.user_notice());
                        summary.rejected += 1;
                    }
                }
            }
            SessionEvent::Delete { index } => {
                if points.delete_point(&mut map, PointId(*index)) {
                    summary.deleted += 1;
                } else {
                    warn!(index = *index, "delete ignored: no live point at index");
                }
            }
            SessionEvent::Export => match points.export_data(&mut map, &mut form, &mut sink) {
                Ok(receipt) => {
                    info!(
                        features = receipt.feature_count,
                        file = %receipt.file_name,
                        "{EXPORT_CONFIRMATION}"
                    );
                }
                Err(err) => warn!("{}", err.user_notice()),
            },
        }
    }

    info!(remaining = map.marker_count(), "replay finished");
    for placed in map.markers() {
        tracing::debug!(
            lat = placed.at.lat_deg,
            lng = placed.at.lng_deg,
            color = placed.color,
            radius = placed.radius,
            has_popup = placed.popup.is_some(),
            "marker left on map"
        );
    }

    summary.exports = sink.written().to_vec();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::{SessionScript, run_session};

    fn parse(script: &str) -> SessionScript {
        serde_json::from_str(script).expect("valid session script")
    }

    #[test]
    fn replay_captures_deletes_and_exports() {
        let script = parse(
            r#"{
              "events": [
                {"type": "form", "field": "theme", "value": "safe"},
                {"type": "form", "field": "comment", "value": "nice"},
                {"type": "click", "lat": 47.07, "lng": 15.44},
                {"type": "form", "field": "theme", "value": "heated"},
                {"type": "click", "lat": 47.08, "lng": 15.45},
                {"type": "delete", "index": 0},
                {"type": "export"}
              ]
            }"#,
        );

        let dir = tempfile::tempdir().expect("tempdir");
        let summary = run_session(&script, dir.path()).expect("replay succeeds");

        assert_eq!(summary.captured, 2);
        assert_eq!(summary.rejected, 0);
        assert_eq!(summary.deleted, 1);
        assert_eq!(summary.exports.len(), 1);

        let contents = std::fs::read_to_string(&summary.exports[0]).expect("read export");
        let doc: serde_json::Value = serde_json::from_str(&contents).expect("valid geojson");
        assert_eq!(doc["type"], "FeatureCollection");
        let features = doc["features"].as_array().expect("features");
        assert_eq!(features.len(), 1);
        assert_eq!(features[0]["geometry"]["coordinates"][0].as_f64(), Some(15.45));
        assert_eq!(features[0]["geometry"]["coordinates"][1].as_f64(), Some(47.08));
        assert_eq!(features[0]["properties"]["theme"], "heated");
        assert_eq!(features[0]["properties"]["comment"], "");
    }

    #[test]
    fn clicks_without_a_theme_are_rejected_not_fatal() {
        let script = parse(
            r#"{
              "events": [
                {"type": "click", "lat": 47.0, "lng": 15.0},
                {"type": "export"}
              ]
            }"#,
        );

        let dir = tempfile::tempdir().expect("tempdir");
        let summary = run_session(&script, dir.path()).expect("replay succeeds");

        assert_eq!(summary.captured, 0);
        assert_eq!(summary.rejected, 1);
        // Empty export produces no file.
        assert!(summary.exports.is_empty());
    }

    #[test]
    fn unknown_form_field_aborts_the_replay() {
        let script = parse(
            r#"{"events": [{"type": "form", "field": "postcode", "value": "8010"}]}"#,
        );

        let dir = tempfile::tempdir().expect("tempdir");
        let err = run_session(&script, dir.path()).expect_err("unknown field");
        assert!(err.contains("postcode"));
    }
}
