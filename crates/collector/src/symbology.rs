use survey::Theme;

pub const DEFAULT_RADIUS: f64 = 6.0;
pub const DEFAULT_COLOR: &str = "gray";

/// Circle-marker styling resolved from a point's theme.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub radius: f64,
    pub weight: f64,
    pub fill_opacity: f64,
}

impl MarkerStyle {
    pub const fn new(color: &'static str, radius: f64) -> Self {
        Self {
            color,
            radius,
            weight: 2.0,
            fill_opacity: 0.7,
        }
    }
}

/// Resolves the marker style for a theme.
///
/// Unknown themes fall back to the default color and radius.
pub fn marker_style(theme: &Theme) -> MarkerStyle {
    match theme {
        Theme::Safe => MarkerStyle::new("green", DEFAULT_RADIUS),
        Theme::Stressful => MarkerStyle::new("red", DEFAULT_RADIUS),
        Theme::Heated => MarkerStyle::new("orange", DEFAULT_RADIUS),
        Theme::Cool => MarkerStyle::new("blue", DEFAULT_RADIUS),
        Theme::Other(_) => MarkerStyle::new(DEFAULT_COLOR, DEFAULT_RADIUS),
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_COLOR, DEFAULT_RADIUS, marker_style};
    use survey::Theme;

    #[test]
    fn known_themes_map_to_their_colors() {
        assert_eq!(marker_style(&Theme::Safe).color, "green");
        assert_eq!(marker_style(&Theme::Stressful).color, "red");
        assert_eq!(marker_style(&Theme::Heated).color, "orange");
        assert_eq!(marker_style(&Theme::Cool).color, "blue");
    }

    #[test]
    fn unknown_theme_falls_back_to_defaults() {
        let style = marker_style(&Theme::Other("windy".to_string()));
        assert_eq!(style.color, DEFAULT_COLOR);
        assert_eq!(style.radius, DEFAULT_RADIUS);
        assert_eq!(style.weight, 2.0);
        assert_eq!(style.fill_opacity, 0.7);
    }
}
