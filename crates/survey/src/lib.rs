pub mod point;
pub mod session;
pub mod store;

pub use point::{MarkerHandle, PointAttributes, PointRecord, Theme};
pub use session::SessionPhase;
pub use store::{PointId, PointStore};
