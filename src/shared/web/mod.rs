mod render;

pub use render::{render, see_other};
