pub mod host;
pub mod point_collector;
pub mod popup;
pub mod symbology;

pub use point_collector::{
    CaptureError, EXPORT_CONFIRMATION, ExportError, ExportReceipt, PointCollector,
};
pub use host::{ExportSink, Field, FormFields, MapView, SaveError};
pub use symbology::{MarkerStyle, marker_style};

use foundation::geo::LatLng;

/// Default framing of the survey map (Graz city centre).
pub const DEFAULT_VIEW: LatLng = LatLng::new(47.0707, 15.4395);
pub const DEFAULT_ZOOM: u32 = 13;
