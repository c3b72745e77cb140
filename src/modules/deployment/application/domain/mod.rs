mod deployment_mode;

pub use deployment_mode::{DeploymentInputs, DeploymentMode};
