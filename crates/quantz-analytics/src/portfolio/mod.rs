//! Portfolio construction from the covariance structure of asset returns.
//!
//! - **PCA**: Principal components ranked by explained variance
//! - **Eigenportfolio**: Long-only weights from the dominant component
//! - **Returns**: Weighted portfolio return series

mod eigenportfolio;
mod pca;
mod returns;

pub use eigenportfolio::{
    eigenportfolio, eigenportfolio_analysis, EigenPortfolio, ZERO_VARIANCE_TOLERANCE,
};
pub use pca::{principal_components, top_principal_components, PrincipalComponents};
pub use returns::portfolio_returns;
