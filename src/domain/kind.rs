use std::fmt;

/// The scaffold variants a component directory can be created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Index and component files only.
    Basic,
    /// Adds a CSS module stylesheet.
    WithStyle,
    /// Adds a CSS module stylesheet and a Storybook story.
    WithStyleAndStory,
}

impl Kind {
    /// All available kinds in order.
    pub const ALL: [Kind; 3] = [Kind::Basic, Kind::WithStyle, Kind::WithStyleAndStory];

    /// Canonical argument name for this kind.
    pub fn arg_name(&self) -> &'static str {
        match self {
            Kind::Basic => "basic",
            Kind::WithStyle => "with-style",
            Kind::WithStyleAndStory => "with-style-and-story",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Kind::Basic => "Basic",
            Kind::WithStyle => "With CSS Module",
            Kind::WithStyleAndStory => "With CSS Module and Storybook",
        }
    }

    /// Parse a kind from a command-line or config value.
    pub fn from_arg(value: &str) -> Option<Kind> {
        match value.trim().to_lowercase().replace('_', "-").as_str() {
            "basic" => Some(Kind::Basic),
            "with-style" => Some(Kind::WithStyle),
            "with-style-and-story" => Some(Kind::WithStyleAndStory),
            _ => None,
        }
    }

    /// Description of the files this kind produces.
    pub fn description(&self) -> &'static str {
        match self {
            Kind::Basic => "Index and component files only.",
            Kind::WithStyle => "Index and component files plus a CSS module stylesheet.",
            Kind::WithStyleAndStory => {
                "Index and component files plus a CSS module stylesheet and a Storybook story."
            }
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_arg_roundtrips() {
        for kind in Kind::ALL {
            assert_eq!(Kind::from_arg(kind.arg_name()), Some(kind));
        }
    }

    #[test]
    fn kind_from_arg_accepts_underscores() {
        assert_eq!(Kind::from_arg("with_style"), Some(Kind::WithStyle));
        assert_eq!(Kind::from_arg("WITH_STYLE_AND_STORY"), Some(Kind::WithStyleAndStory));
    }

    #[test]
    fn kind_from_arg_rejects_unknown_values() {
        assert_eq!(Kind::from_arg("fancy"), None);
        assert_eq!(Kind::from_arg(""), None);
    }

    #[test]
    fn all_kinds_have_descriptions() {
        for kind in Kind::ALL {
            assert!(!kind.description().is_empty());
            assert!(!kind.display_name().is_empty());
        }
    }
}
