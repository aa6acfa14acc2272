use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub bank: BankConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BankConfig {
    pub base_url: String,
    pub proxy_user: String,
    /// Genus type id of the projects bank, percent-encoded
    pub bank_genus: String,
    pub bank_name: String,
    /// Suffix of every user id written to the bank
    pub user_realm: String,
    /// Username used when a request carries no user header
    pub default_user: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl ApiConfig {
    /// Load configuration, lowest precedence first: built-in defaults,
    /// `sln-api.toml` in the current directory, `<config_dir>/sln/api.toml`,
    /// the explicit file (if any), then `SLN_API__SECTION__KEY` variables.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("bank.base_url", "http://localhost:8000")?
            .set_default("bank.proxy_user", "sln-proxy")?
            .set_default(
                "bank.bank_genus",
                "assessment-bank-genus%3Asln-project-bank%40ODL.MIT.EDU",
            )?
            .set_default("bank.bank_name", "StarLogo Nova projects")?
            .set_default("bank.user_realm", "ODL.MIT.EDU")?
            .set_default("bank.default_user", "anonymous")?
            .set_default("bank.timeout_secs", 30)?
            .set_default("logging.level", "info")?
            .set_default("cors.allowed_origins", vec!["http://localhost:3000"])?;

        if let Ok(current_dir) = env::current_dir() {
            builder =
                builder.add_source(File::from(current_dir.join("sln-api.toml")).required(false));
        }

        if let Some(config_path) = get_user_config_path() {
            builder = builder.add_source(File::from(config_path).required(false));
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::Message(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path.to_path_buf()));
        }

        builder = builder.add_source(
            Environment::with_prefix("SLN_API")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("cors.allowed_origins")
                .try_parsing(true),
        );

        let config: ApiConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bank.base_url.trim().is_empty() {
            return Err(ConfigError::Message("bank.base_url cannot be empty".to_string()));
        }
        if self.bank.user_realm.trim().is_empty() {
            return Err(ConfigError::Message("bank.user_realm cannot be empty".to_string()));
        }
        if self.bank.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "bank.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.cors.allowed_origins.iter().any(|origin| origin.trim() == "*") {
            return Err(ConfigError::Message(
                "cors.allowed_origins must list origins explicitly, \"*\" is not accepted"
                    .to_string(),
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn get_user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sln/api.toml"))
}
