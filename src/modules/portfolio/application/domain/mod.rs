pub mod entities;
mod static_dataset;

pub use entities::{AboutInfo, Experience, PersonalInfo, PortfolioData, Project, SkillCategory};
pub use static_dataset::static_portfolio;
