//! Theme colors
//!
//! Light and dark color schemes for the tab shell and the feed. The floating
//! bell button always uses the light icon gray, whatever the active scheme.

use serde::{Deserialize, Serialize};

/// Color value (hex or rgba string)
pub type Color = String;

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeName {
    /// Get the color scheme name
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Semantic colors for one scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Scheme this palette belongs to
    pub name: ThemeName,
    /// Body text
    pub text: Color,
    /// Screen background
    pub background: Color,
    /// Accent for links, active tabs and header borders
    pub tint: Color,
    /// Secondary icon color
    pub icon: Color,
    /// Floating action button fill
    pub fab_background: Color,
    /// Panel edge border
    pub panel_border: Color,
    /// List separator
    pub separator: Color,
}

impl Theme {
    /// Light palette
    pub fn light() -> Self {
        Self {
            name: ThemeName::Light,
            text: "#11181C".into(),
            background: "#FFFFFF".into(),
            tint: "#0A7EA4".into(),
            icon: "#687076".into(),
            fab_background: "#687076".into(),
            panel_border: "#CCCCCC".into(),
            separator: "#EEEEEE".into(),
        }
    }

    /// Dark palette
    pub fn dark() -> Self {
        Self {
            name: ThemeName::Dark,
            text: "#ECEDEE".into(),
            background: "#151718".into(),
            tint: "#FFFFFF".into(),
            icon: "#9BA1A6".into(),
            fab_background: "#687076".into(),
            panel_border: "#CCCCCC".into(),
            separator: "#EEEEEE".into(),
        }
    }

    /// Palette for a scheme
    pub fn get(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => Self::light(),
            ThemeName::Dark => Self::dark(),
        }
    }

    /// Whether this is a dark scheme
    pub fn is_dark(&self) -> bool {
        self.name == ThemeName::Dark
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_name_parse() {
        assert_eq!("dark".parse::<ThemeName>(), Ok(ThemeName::Dark));
        assert_eq!("LIGHT".parse::<ThemeName>(), Ok(ThemeName::Light));
        assert!("dim".parse::<ThemeName>().is_err());
    }

    #[test]
    fn test_fab_keeps_light_gray() {
        assert_eq!(Theme::light().fab_background, Theme::dark().fab_background);
        assert_eq!(Theme::light().fab_background, Theme::light().icon);
    }

    #[test]
    fn test_get_matches_name() {
        assert!(Theme::get(ThemeName::Dark).is_dark());
        assert!(!Theme::default().is_dark());
        assert_eq!(Theme::get(ThemeName::Light).name.color_scheme(), "light");
    }
}
