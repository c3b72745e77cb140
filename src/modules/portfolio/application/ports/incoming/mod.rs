mod resolve_portfolio_use_case;

pub use resolve_portfolio_use_case::{
    DataOrigin, ResolvePortfolioUseCase, ResolvedPortfolio, ResolvedPortfolioResponse,
};
