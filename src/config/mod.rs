use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BIRDEYE_API_URL: &str = "https://public-api.birdeye.so/defi/history_price";
pub const DEFAULT_CHAIN: &str = "solana";
pub const DEFAULT_CORS_ORIGINS: &str =
    "http://127.0.0.1:5500,http://localhost:5500,http://localhost:3000";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 前端静态文件目录，`/` 返回其中的 index.html
    pub static_dir: String,
}

/// 上游价格历史接口配置，构造 UpstreamClient 时注入
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    pub api_url: String,
    /// 缺失时不提前校验，由上游返回 401/403
    pub api_key: Option<String>,
    pub chain: String,
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BIRDEYE_API_URL.to_string(),
            api_key: None,
            chain: DEFAULT_CHAIN.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// 为空表示允许任意来源
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let _ = dotenv::dotenv().ok();

        let upstream = UpstreamConfig {
            api_url: env_var_or_default("BIRDEYE_API_URL", DEFAULT_BIRDEYE_API_URL.to_string())?,
            api_key: optional_env_var("BIRDEYE_API_KEY"),
            chain: env_var_or_default("BIRDEYE_CHAIN", DEFAULT_CHAIN.to_string())?,
            timeout_secs: env_var_or_default("UPSTREAM_TIMEOUT_SECS", 30)?,
        };

        if upstream.api_key.is_none() {
            Self::print_config_help();
        }

        let origins: String = env_var_or_default("CORS_ALLOWED_ORIGINS", DEFAULT_CORS_ORIGINS.to_string())?;

        Ok(Config {
            server: ServerConfig {
                host: env_var_or_default("SERVER_HOST", "0.0.0.0".to_string())?,
                port: env_var_or_default("SERVER_PORT", 8000)?,
                static_dir: env_var_or_default("STATIC_DIR", "frontend".to_string())?,
            },
            upstream,
            cors: CorsConfig {
                allowed_origins: parse_origins(&origins),
            },
        })
    }

    fn print_config_help() {
        tracing::warn!("⚠️ 未配置 BIRDEYE_API_KEY，上游请求将被拒绝");
        println!("\n🔧 配置指南");
        println!("{}", "=".repeat(50));
        println!("[必需配置]");
        println!("BIRDEYE_API_KEY=<your key>\n");

        println!("[可选配置]");
        println!("BIRDEYE_API_URL={}", DEFAULT_BIRDEYE_API_URL);
        println!("BIRDEYE_CHAIN={}", DEFAULT_CHAIN);
        println!("UPSTREAM_TIMEOUT_SECS=30");
        println!("SERVER_HOST=0.0.0.0");
        println!("SERVER_PORT=8000");
        println!("STATIC_DIR=frontend");
        println!("CORS_ALLOWED_ORIGINS={}", DEFAULT_CORS_ORIGINS);
        println!("{}", "=".repeat(50));
    }
}

/// 逗号分隔的来源列表，`*` 表示允许任意来源
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.iter().any(|origin| origin == "*") {
        Vec::new()
    } else {
        origins
    }
}

fn env_var_or_default<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val.parse().map_err(|e| anyhow::anyhow!("配置 {} 解析失败: {}", key, e)),
        Err(_) => Ok(default),
    }
}

fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|val| !val.trim().is_empty())
}
