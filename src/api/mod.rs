pub mod handlers;
pub mod routes;

pub use routes::create_router;

use crate::services::PriceHistoryService;
use std::sync::Arc;

#[derive(Clone)]
pub struct ApiState {
    pub price_service: Arc<PriceHistoryService>,
}

impl ApiState {
    pub fn new(price_service: PriceHistoryService) -> Self {
        Self {
            price_service: Arc::new(price_service),
        }
    }
}
