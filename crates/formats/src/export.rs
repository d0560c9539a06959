use foundation::time::Timestamp;

pub const EXPORT_FILE_PREFIX: &str = "ppgis_urban_experience";
pub const EXPORT_MIME_TYPE: &str = "application/json";

/// A fully serialized export, ready to hand to a save sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl ExportFile {
    /// Names the file with the fixed survey prefix plus the epoch-millis
    /// timestamp of the export.
    pub fn geojson(contents: String, at: Timestamp) -> Self {
        Self {
            name: format!("{EXPORT_FILE_PREFIX}_{}.geojson", at.millis()),
            mime_type: EXPORT_MIME_TYPE,
            contents,
        }
    }
}
