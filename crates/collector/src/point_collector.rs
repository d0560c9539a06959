use std::fmt;

use foundation::geo::LatLng;
use foundation::time::Timestamp;
use formats::ExportFile;
use survey::{PointAttributes, PointId, PointRecord, PointStore, SessionPhase, Theme};

use crate::host::{ExportSink, Field, FormFields, MapView, SaveError};
use crate::popup::popup_html;
use crate::symbology::marker_style;

/// Notice shown to the participant after a completed download.
pub const EXPORT_CONFIRMATION: &str = "Thank you! Your points have been downloaded.";

/// Capture rejected before any state was touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    ThemeRequired,
}

impl CaptureError {
    /// Exact notice shown to the participant.
    pub fn user_notice(&self) -> &'static str {
        match self {
            CaptureError::ThemeRequired => "Please select a theme before clicking on the map.",
        }
    }
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::ThemeRequired => write!(f, "theme required"),
        }
    }
}

impl std::error::Error for CaptureError {}

/// Export failure. `NoPoints` and `InProgress` leave all state unchanged;
/// `Save` leaves the collected points intact so the participant can retry.
#[derive(Debug)]
pub enum ExportError {
    NoPoints,
    InProgress,
    NotStarted,
    Serialize(serde_json::Error),
    Save(SaveError),
}

impl ExportError {
    pub fn user_notice(&self) -> &'static str {
        match self {
            ExportError::NoPoints => "No points to download!",
            ExportError::InProgress => "An export is already in progress.",
            ExportError::NotStarted => "No export in progress.",
            ExportError::Serialize(_) | ExportError::Save(_) => {
                "Download failed. Your points are still on the map."
            }
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::NoPoints => write!(f, "no live points to export"),
            ExportError::InProgress => write!(f, "an export is already in progress"),
            ExportError::NotStarted => write!(f, "no export in progress"),
            ExportError::Serialize(err) => write!(f, "serialize geojson: {err}"),
            ExportError::Save(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ExportError {}

/// Outcome of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub file_name: String,
    pub feature_count: usize,
}

#[derive(Debug)]
struct PendingExport {
    file_name: String,
    feature_count: usize,
}

/// Drives the full point lifecycle: capture, delete, export, reset.
///
/// The collector owns the captured points; the map surface, the form
/// controls and the save target stay on the host side behind the `host`
/// traits, so the core never touches a global document or window.
#[derive(Debug, Default)]
pub struct PointCollector {
    store: PointStore,
    pending: Option<PendingExport>,
}

impl PointCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_points(&self) -> usize {
        self.store.live_len()
    }

    pub fn point(&self, id: PointId) -> Option<&PointRecord> {
        self.store.get(id)
    }

    pub fn phase(&self) -> SessionPhase {
        if self.pending.is_some() {
            SessionPhase::Exporting
        } else {
            SessionPhase::Collecting
        }
    }

    /// Handles a map click: reads the form, validates the theme, renders a
    /// styled marker with its popup, and appends the point to the store.
    ///
    /// Only the comment field is cleared afterwards; demographic fields
    /// persist for the next capture on purpose.
    pub fn capture_click<M, F>(
        &mut self,
        map: &mut M,
        form: &mut F,
        at: LatLng,
    ) -> Result<PointId, CaptureError>
    where
        M: MapView,
        F: FormFields,
    {
        let raw_theme = form.value(Field::Theme);
        let Some(theme) = Theme::parse(&raw_theme) else {
            return Err(CaptureError::ThemeRequired);
        };

        let attributes = PointAttributes {
            comment: form.value(Field::Comment),
            residency: form.value(Field::Residency),
            age: form.value(Field::Age),
            gender: form.value(Field::Gender),
            transport: form.value(Field::Transport),
            theme,
        };

        let style = marker_style(&attributes.theme);
        let marker = map.add_marker(at, &style);

        // The popup bakes in the slot index at creation time; the store
        // never compacts, so the affordance stays valid after deletions.
        let id = self.store.next_id();
        let html = popup_html(&attributes.theme, &attributes.comment, id);
        map.attach_popup(marker, &html, false);

        self.store.insert(PointRecord {
            attributes,
            position: at,
            marker,
        });

        form.clear(Field::Comment);
        Ok(id)
    }

    /// Tombstones the point and detaches its marker.
    ///
    /// Unknown and already-deleted ids are a no-op; returns whether a
    /// point was actually deleted.
    pub fn delete_point<M: MapView>(&mut self, map: &mut M, id: PointId) -> bool {
        match self.store.remove(id) {
            Some(marker) => {
                map.remove_marker(marker);
                true
            }
            None => false,
        }
    }

    /// Serializes the live points and opens an export.
    ///
    /// The session stays in the `Exporting` phase until the host reports
    /// the save outcome via [`finish_export`](Self::finish_export); a
    /// second `begin_export` in that window fails with `InProgress`.
    pub fn begin_export(&mut self) -> Result<ExportFile, ExportError> {
        if self.pending.is_some() {
            return Err(ExportError::InProgress);
        }

        let feature_count = self.store.live_len();
        if feature_count == 0 {
            return Err(ExportError::NoPoints);
        }

        let payload =
            formats::to_geojson_string_pretty(&self.store).map_err(ExportError::Serialize)?;
        let file = ExportFile::geojson(payload, Timestamp::now());

        self.pending = Some(PendingExport {
            file_name: file.name.clone(),
            feature_count,
        });
        Ok(file)
    }

    /// Completes the export opened by [`begin_export`](Self::begin_export).
    ///
    /// A successful save resets the session exactly once: every live
    /// marker is removed, the store is emptied and all form fields are
    /// cleared, demographics included. A failed save leaves everything in
    /// place for a retry.
    pub fn finish_export<M, F>(
        &mut self,
        map: &mut M,
        form: &mut F,
        saved: Result<(), SaveError>,
    ) -> Result<ExportReceipt, ExportError>
    where
        M: MapView,
        F: FormFields,
    {
        let Some(pending) = self.pending.take() else {
            return Err(ExportError::NotStarted);
        };

        match saved {
            Ok(()) => {
                self.reset(map, form);
                Ok(ExportReceipt {
                    file_name: pending.file_name,
                    feature_count: pending.feature_count,
                })
            }
            Err(err) => Err(ExportError::Save(err)),
        }
    }

    /// Synchronous begin-save-finish convenience for hosts whose sink
    /// completes inline (filesystem, tests).
    pub fn export_data<M, F, S>(
        &mut self,
        map: &mut M,
        form: &mut F,
        sink: &mut S,
    ) -> Result<ExportReceipt, ExportError>
    where
        M: MapView,
        F: FormFields,
        S: ExportSink,
    {
        let file = self.begin_export()?;
        let saved = sink.save(&file);
        self.finish_export(map, form, saved)
    }

    fn reset<M: MapView, F: FormFields>(&mut self, map: &mut M, form: &mut F) {
        for marker in self.store.drain_markers() {
            map.remove_marker(marker);
        }
        for field in Field::ALL {
            form.clear(field);
        }
    }
}
