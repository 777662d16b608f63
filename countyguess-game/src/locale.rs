//! Two-valued locale flag consumed by the resolver.
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ga,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Ga];

    /// BCP-47 language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ga => "ga",
        }
    }

    /// Parse a language code, ignoring case and any region suffix (`ga-IE`).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "ga" => Some(Self::Ga),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_irish(self) -> bool {
        matches!(self, Self::Ga)
    }

    /// The other locale; used by the header toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ga,
            Self::Ga => Self::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
