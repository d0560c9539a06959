use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use collector::{ExportSink, Field, FormFields, MapView, MarkerStyle, SaveError};
use foundation::geo::LatLng;
use foundation::handles::Handle;
use formats::ExportFile;
use survey::MarkerHandle;

/// In-memory stand-in for the browser map surface.
#[derive(Debug, Default)]
pub struct HeadlessMap {
    next: u32,
    markers: HashMap<MarkerHandle, PlacedMarker>,
}

#[derive(Debug, Clone)]
pub struct PlacedMarker {
    pub at: LatLng,
    pub color: &'static str,
    pub radius: f64,
    pub popup: Option<String>,
}

impl HeadlessMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Markers still attached to the map, in no particular order.
    pub fn markers(&self) -> impl Iterator<Item = &PlacedMarker> {
        self.markers.values()
    }
}

impl MapView for HeadlessMap {
    fn add_marker(&mut self, at: LatLng, style: &MarkerStyle) -> MarkerHandle {
        let handle = MarkerHandle(Handle::new(self.next, 0));
        self.next += 1;
        self.markers.insert(
            handle,
            PlacedMarker {
                at,
                color: style.color,
                radius: style.radius,
                popup: None,
            },
        );
        tracing::debug!(
            lat = at.lat_deg,
            lng = at.lng_deg,
            color = style.color,
            "marker added"
        );
        handle
    }

    fn remove_marker(&mut self, marker: MarkerHandle) {
        self.markers.remove(&marker);
    }

    fn attach_popup(&mut self, marker: MarkerHandle, html: &str, _open_immediately: bool) {
        if let Some(placed) = self.markers.get_mut(&marker) {
            placed.popup = Some(html.to_string());
        }
    }
}

/// In-memory form controls.
#[derive(Debug, Default)]
pub struct HeadlessForm {
    values: HashMap<Field, String>,
}

impl HeadlessForm {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormFields for HeadlessForm {
    fn value(&self, field: Field) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn set_value(&mut self, field: Field, value: &str) {
        self.values.insert(field, value.to_string());
    }
}

/// Saves export files into an output directory, standing in for the
/// browser download.
#[derive(Debug)]
pub struct DirExportSink {
    out_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl DirExportSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            written: Vec::new(),
        }
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ExportSink for DirExportSink {
    fn save(&mut self, file: &ExportFile) -> Result<(), SaveError> {
        fs::create_dir_all(&self.out_dir)
            .map_err(|e| SaveError(format!("create {:?}: {e}", self.out_dir)))?;
        let path = self.out_dir.join(&file.name);
        fs::write(&path, &file.contents).map_err(|e| SaveError(format!("write {path:?}: {e}")))?;
        self.written.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::DirExportSink;
    use collector::ExportSink;
    use formats::ExportFile;
    use foundation::time::Timestamp;

    #[test]
    fn sink_writes_the_file_under_the_output_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut sink = DirExportSink::new(dir.path());

        let file = ExportFile::geojson("{\"type\": \"FeatureCollection\"}".to_string(), Timestamp(42));
        sink.save(&file).expect("save succeeds");

        assert_eq!(sink.written().len(), 1);
        let path = &sink.written()[0];
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("ppgis_urban_experience_42.geojson")
        );
        let contents = std::fs::read_to_string(path).expect("read back");
        assert_eq!(contents, "{\"type\": \"FeatureCollection\"}");
    }

    #[test]
    fn sink_reports_unwritable_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A file where the output directory should be.
        let blocked = dir.path().join("not-a-dir");
        std::fs::write(&blocked, "x").expect("write blocker");

        let mut sink = DirExportSink::new(&blocked);
        let file = ExportFile::geojson("{}".to_string(), Timestamp(1));
        assert!(sink.save(&file).is_err());
        assert!(sink.written().is_empty());
    }
}
