mod portfolio_api_http;

pub use portfolio_api_http::PortfolioApiHttp;
