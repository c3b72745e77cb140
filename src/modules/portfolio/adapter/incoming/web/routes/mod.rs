mod get_portfolio;

pub use get_portfolio::{__path_get_portfolio_handler, get_portfolio_handler};
