mod resolve_portfolio_service;

pub use resolve_portfolio_service::ResolvePortfolioService;
