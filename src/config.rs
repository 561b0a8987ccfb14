use std::net::SocketAddr;

use crate::error::ConfigError;

const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 从环境变量 (及 .env) 读取的启动配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 未设置时使用内存存储
    pub database_url: Option<String>,
    pub server_addr: SocketAddr,
    pub db_max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let raw_addr = lookup("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.into());
        let server_addr = raw_addr
            .parse()
            .map_err(|_| ConfigError::Invalid { key: "SERVER_ADDR", value: raw_addr.clone() })?;

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", value: raw }),
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self { database_url, server_addr, db_max_connections })
    }
}
