use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::view::application::domain::ViewError;

/// The five interchangeable designs. Wire ids are `option1`..`option5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum ThemeId {
    #[serde(rename = "option1")]
    MinimalistCorporate,
    #[serde(rename = "option2")]
    CreativeTech,
    #[serde(rename = "option3")]
    ExecutivePremium,
    #[serde(rename = "option4")]
    ModernPortfolio,
    #[serde(rename = "option5")]
    PhotoHero,
}

impl ThemeId {
    pub const ALL: [ThemeId; 5] = [
        ThemeId::MinimalistCorporate,
        ThemeId::CreativeTech,
        ThemeId::ExecutivePremium,
        ThemeId::ModernPortfolio,
        ThemeId::PhotoHero,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::MinimalistCorporate => "option1",
            ThemeId::CreativeTech => "option2",
            ThemeId::ExecutivePremium => "option3",
            ThemeId::ModernPortfolio => "option4",
            ThemeId::PhotoHero => "option5",
        }
    }

    pub fn info(&self) -> &'static ThemeInfo {
        let index = Self::ALL
            .iter()
            .position(|theme| theme == self)
            .unwrap_or_default();
        &THEME_CATALOG[index]
    }
}

impl Default for ThemeId {
    fn default() -> Self {
        ThemeId::CreativeTech
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ViewError::UnknownTheme(wanted.to_string()))
    }
}

/// Showcase card content for one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ThemeInfo {
    pub id: ThemeId,
    #[schema(value_type = String, example = "Creative Tech")]
    pub name: &'static str,
    #[schema(value_type = String)]
    pub description: &'static str,
    #[schema(value_type = Vec<String>)]
    pub features: &'static [&'static str],
}

/// Ordered like [`ThemeId::ALL`].
pub static THEME_CATALOG: [ThemeInfo; 5] = [
    ThemeInfo {
        id: ThemeId::MinimalistCorporate,
        name: "Minimalist Corporate",
        description: "Clean, professional, corporate style with elegant typography and monochrome palette",
        features: &["Clean Typography", "Professional Layout", "Minimal Colors", "Corporate Feel"],
    },
    ThemeInfo {
        id: ThemeId::CreativeTech,
        name: "Creative Tech",
        description: "Bold, modern with tech elements, dynamic interactions, and vibrant design",
        features: &["Tech Imagery", "Dynamic Elements", "Modern Design", "Interactive UI"],
    },
    ThemeInfo {
        id: ThemeId::ExecutivePremium,
        name: "Executive Premium",
        description: "Luxury dark theme, sophisticated design for senior executive profiles",
        features: &["Dark Premium Theme", "Gold Accents", "Executive Style", "Luxury Feel"],
    },
    ThemeInfo {
        id: ThemeId::ModernPortfolio,
        name: "Modern Portfolio",
        description: "Contemporary design with gradient accents and emphasis on projects",
        features: &["Gradient Design", "Project Focus", "Modern UI", "Clean Layout"],
    },
    ThemeInfo {
        id: ThemeId::PhotoHero,
        name: "Photo Hero",
        description: "Personal brand layout led by a large portrait hero and bold red accents",
        features: &["Portrait Hero", "Personal Brand", "Bold Accents", "Service Focus"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        assert_eq!("option1".parse::<ThemeId>().unwrap(), ThemeId::MinimalistCorporate);
        assert_eq!(" OPTION5 ".parse::<ThemeId>().unwrap(), ThemeId::PhotoHero);
    }

    #[test]
    fn test_parse_unknown_id() {
        let err = "option9".parse::<ThemeId>().unwrap_err();
        assert_eq!(err, ViewError::UnknownTheme("option9".to_string()));
    }

    #[test]
    fn test_default_is_creative_tech() {
        assert_eq!(ThemeId::default(), ThemeId::CreativeTech);
        assert_eq!(ThemeId::default().as_str(), "option2");
    }

    #[test]
    fn test_catalog_matches_ids() {
        for theme in ThemeId::ALL {
            assert_eq!(theme.info().id, theme);
            assert_eq!(theme.info().features.len(), 4);
        }
    }

    #[test]
    fn test_serde_uses_wire_ids() {
        assert_eq!(
            serde_json::to_string(&ThemeId::ExecutivePremium).unwrap(),
            "\"option3\""
        );
        let parsed: ThemeId = serde_json::from_str("\"option4\"").unwrap();
        assert_eq!(parsed, ThemeId::ModernPortfolio);
    }
}
