mod view_store;

pub use view_store::{ViewConfig, ViewSnapshot, ViewStore};
