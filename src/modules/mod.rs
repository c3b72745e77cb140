pub mod admin;
pub mod deployment;
pub mod portfolio;
pub mod view;
