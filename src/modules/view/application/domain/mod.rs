mod location;
mod theme;
mod view_state;

pub use location::Location;
pub use theme::{ThemeId, ThemeInfo, THEME_CATALOG};
pub use view_state::{ViewAction, ViewError, ViewState};
