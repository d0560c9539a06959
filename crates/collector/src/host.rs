use std::fmt;

use foundation::geo::LatLng;
use formats::ExportFile;
use survey::MarkerHandle;

use crate::symbology::MarkerStyle;

/// Form controls read on every capture.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Theme,
    Comment,
    Residency,
    Age,
    Gender,
    Transport,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Theme,
        Field::Comment,
        Field::Residency,
        Field::Age,
        Field::Gender,
        Field::Transport,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Theme => "theme",
            Field::Comment => "comment",
            Field::Residency => "residency",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::Transport => "transport",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Interactive map surface hosting the visual markers.
///
/// The host owns the click loop and calls into the collector from its
/// click callback; the collector only adds, decorates and removes markers.
pub trait MapView {
    fn add_marker(&mut self, at: LatLng, style: &MarkerStyle) -> MarkerHandle;
    fn remove_marker(&mut self, marker: MarkerHandle);
    fn attach_popup(&mut self, marker: MarkerHandle, html: &str, open_immediately: bool);
}

/// Labeled input controls whose current values are read synchronously on
/// each capture.
pub trait FormFields {
    fn value(&self, field: Field) -> String;
    fn set_value(&mut self, field: Field, value: &str);

    fn clear(&mut self, field: Field) {
        self.set_value(field, "");
    }
}

/// Receives the serialized export file.
///
/// A sink returning `Ok` confirms the file reached the participant; that
/// completion is what drives the session reset.
pub trait ExportSink {
    fn save(&mut self, file: &ExportFile) -> Result<(), SaveError>;
}

/// Failure reported by an `ExportSink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveError(pub String);

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "save failed: {}", self.0)
    }
}

impl std::error::Error for SaveError {}

#[cfg(test)]
mod tests {
    use super::Field;

    #[test]
    fn field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("postcode"), None);
    }
}
