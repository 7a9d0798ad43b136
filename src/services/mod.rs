pub mod upstream_client;
pub mod price_history_service;
pub mod api_service;

pub use upstream_client::{FetchError, UpstreamClient};
pub use price_history_service::{PriceHistoryService, PriceServiceError};
pub use api_service::ApiService;
