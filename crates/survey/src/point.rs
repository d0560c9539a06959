use foundation::geo::LatLng;
use foundation::handles::Handle;

/// Visual marker owned by a captured point for its whole lifetime.
///
/// Used only to detach the marker from the map surface again; no two live
/// points ever share one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub Handle);

impl MarkerHandle {
    pub fn index(&self) -> u32 {
        self.0.index()
    }
}

/// Experience theme attached to every captured point.
///
/// The four known themes drive marker symbology. Unknown non-empty values
/// are carried verbatim and styled with the defaults; an empty value is
/// rejected before capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Theme {
    Safe,
    Stressful,
    Heated,
    Cool,
    Other(String),
}

impl Theme {
    /// Parses a raw form value. Empty input yields `None`.
    pub fn parse(raw: &str) -> Option<Theme> {
        match raw {
            "" => None,
            "safe" => Some(Theme::Safe),
            "stressful" => Some(Theme::Stressful),
            "heated" => Some(Theme::Heated),
            "cool" => Some(Theme::Cool),
            other => Some(Theme::Other(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Theme::Safe => "safe",
            Theme::Stressful => "stressful",
            Theme::Heated => "heated",
            Theme::Cool => "cool",
            Theme::Other(raw) => raw,
        }
    }

    /// Popup label: the uppercased theme string, raw for unknown themes.
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

/// Form values snapshotted at capture time.
///
/// Only the theme is interpreted; the remaining fields are free-form
/// strings passed through verbatim to the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointAttributes {
    pub theme: Theme,
    pub comment: String,
    pub residency: String,
    pub age: String,
    pub gender: String,
    pub transport: String,
}

/// One captured click. Immutable after creation; a record is only ever
/// replaced wholesale by a tombstone.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    pub attributes: PointAttributes,
    pub position: LatLng,
    pub marker: MarkerHandle,
}

#[cfg(test)]
mod tests {
    use super::Theme;

    #[test]
    fn parse_maps_known_themes_and_rejects_empty() {
        assert_eq!(Theme::parse("safe"), Some(Theme::Safe));
        assert_eq!(Theme::parse("stressful"), Some(Theme::Stressful));
        assert_eq!(Theme::parse("heated"), Some(Theme::Heated));
        assert_eq!(Theme::parse("cool"), Some(Theme::Cool));
        assert_eq!(Theme::parse(""), None);
    }

    #[test]
    fn unknown_themes_are_carried_verbatim() {
        let theme = Theme::parse("windy").expect("non-empty theme");
        assert_eq!(theme, Theme::Other("windy".to_string()));
        assert_eq!(theme.as_str(), "windy");
        assert_eq!(theme.label(), "WINDY");
    }

    #[test]
    fn known_theme_labels_are_uppercased() {
        assert_eq!(Theme::Safe.label(), "SAFE");
        assert_eq!(Theme::Heated.label(), "HEATED");
    }
}
