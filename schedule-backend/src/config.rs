// src/config.rs
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for {name}: '{value}'")]
    Invalid { name: String, value: String },
}

/// 保存先バックエンドの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Memory,
    Local,
    Database,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "local" => Ok(StorageBackend::Local),
            "database" => Ok(StorageBackend::Database),
            _ => Err(format!(
                "Invalid storage backend: '{s}'. Valid backends are: memory, local, database"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub storage_backend: StorageBackend,
    /// database バックエンドでのみ必須
    pub database_url: Option<String>,
    pub local_store_dir: PathBuf,
    pub allow_overlap: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(raw) => raw
                .parse::<StorageBackend>()
                .map_err(|_| ConfigError::Invalid {
                    name: "STORAGE_BACKEND".to_string(),
                    value: raw.clone(),
                })?,
            Err(_) => StorageBackend::Memory,
        };

        let database_url = env::var("DATABASE_URL").ok();
        if storage_backend == StorageBackend::Database && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL".to_string()));
        }

        let local_store_dir =
            PathBuf::from(env::var("LOCAL_STORE_DIR").unwrap_or_else(|_| "./data".to_string()));

        let allow_overlap = match env::var("ALLOW_OVERLAP") {
            Ok(raw) => raw.parse::<bool>().map_err(|_| ConfigError::Invalid {
                name: "ALLOW_OVERLAP".to_string(),
                value: raw.clone(),
            })?,
            Err(_) => true,
        };

        Ok(Config {
            server_addr,
            storage_backend,
            database_url,
            local_store_dir,
            allow_overlap,
        })
    }
}
