/// Display theme declared per section via `data-theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Lenient parse of a `data-theme` attribute value. Anything that is not
    /// exactly `"light"` falls back to dark, matching the page default.
    pub fn from_attr(value: &str) -> Self {
        if value == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_light_and_falls_back_to_dark() {
        assert_eq!(Theme::from_attr("light"), Theme::Light);
        assert_eq!(Theme::from_attr("dark"), Theme::Dark);
        assert_eq!(Theme::from_attr(""), Theme::Dark);
        assert_eq!(Theme::from_attr("Light"), Theme::Dark);
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }
}
