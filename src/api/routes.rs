use super::{handlers, ApiState};
use crate::config::{Config, CorsConfig};
use anyhow::anyhow;
use axum::{http::HeaderValue, routing::get, Router};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub fn create_router(state: ApiState, config: &Config) -> anyhow::Result<Router> {
    let static_dir = Path::new(&config.server.static_dir);

    let router = Router::new()
        // Price routes
        .route("/historic_price", get(handlers::get_historic_price))
        .route("/data", get(handlers::get_price_data))

        // Frontend
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))

        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.cors)?),
        )
        .with_state(state);

    Ok(router)
}

/// 带凭证时不能使用通配符，方法和请求头改为镜像请求
fn cors_layer(cors: &CorsConfig) -> anyhow::Result<CorsLayer> {
    if cors.is_permissive() {
        return Ok(CorsLayer::permissive());
    }

    let origins = cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| anyhow!("CORS来源 {} 无效: {}", origin, e))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_rejects_invalid_origin() {
        let cors = CorsConfig {
            allowed_origins: vec!["http://localhost:3000\n".to_string()],
        };
        assert!(cors_layer(&cors).is_err());
    }

    #[test]
    fn test_cors_layer_accepts_origin_list() {
        let cors = CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string(), "http://127.0.0.1:5500".to_string()],
        };
        assert!(cors_layer(&cors).is_ok());
    }
}
