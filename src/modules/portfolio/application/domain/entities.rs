use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Wire shape of `GET /api/portfolio`. Image fields are camelCase on the wire.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    /// Social profile identifier, e.g. `linkedin.com/in/someone`.
    pub linkedin: String,
    pub hero_image: String,
}

impl PersonalInfo {
    /// First word of the name, used by themes that show a short brand mark.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }

    pub fn linkedin_url(&self) -> String {
        if self.linkedin.starts_with("http://") || self.linkedin.starts_with("https://") {
            self.linkedin.clone()
        } else {
            format!("https://{}", self.linkedin)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutInfo {
    pub title: String,
    pub description: String,
    pub background_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Experience {
    pub title: String,
    pub company: String,
    /// Employment type, e.g. `Contract` or `Full-time`.
    #[serde(rename = "type")]
    pub employment_type: String,
    pub period: String,
    pub location: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub technologies: Vec<String>,
    pub image: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortfolioData {
    pub personal: PersonalInfo,
    pub about: AboutInfo,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
}
