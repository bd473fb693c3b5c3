//! Connection settings loaded with `confy` and resolved against the server
//! flags of each command.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::ServerArgs;
use crate::error::{AppTrustError, Result};

pub const APP_NAME: &str = "apptrust";
pub const CONFIG_NAME: &str = "config";

/// Overrides the JFrog home directory holding `security/certs`
pub const JFROG_HOME_ENV: &str = "JFROG_CLI_HOME_DIR";

/// A JFrog platform the CLI can talk to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server_id: String,
    pub url: String,
    pub user: String,
    pub password: String,
    pub access_token: String,
    pub insecure_tls: bool,
    pub client_cert_path: Option<PathBuf>,
    pub client_cert_key_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub default_server: Option<String>,
    pub servers: Vec<ServerConfig>,
    pub certs_dir: Option<PathBuf>,
    pub http_retries: u32,
    pub http_retry_wait_ms: u64,
    pub request_timeout_secs: Option<u64>,
    pub dial_timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_server: None,
            servers: Vec::new(),
            certs_dir: None,
            http_retries: 1,
            http_retry_wait_ms: 0,
            request_timeout_secs: None,
            dial_timeout_secs: None,
        }
    }
}

/// Transport tuning handed to the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub retries: u32,
    pub retry_wait_ms: u64,
    pub request_timeout_secs: Option<u64>,
    pub dial_timeout_secs: Option<u64>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        let config = Config::default();
        config.http_settings()
    }
}

/// Everything needed to open a connection to one platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerDetails {
    pub server_id: String,
    /// Always ends with `/`
    pub url: String,
    pub user: String,
    pub access_token: String,
    pub insecure_tls: bool,
    pub client_cert_path: Option<PathBuf>,
    pub client_cert_key_path: Option<PathBuf>,
    pub certs_dir: Option<PathBuf>,
    pub http: HttpSettings,
}

impl Config {
    /// Loads `path` when given, the platform config file otherwise.
    ///
    /// An explicit path must exist. A missing or unresolvable platform file
    /// yields the defaults. Nothing is ever written.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if !path.is_file() => Err(AppTrustError::config(format!(
                "configuration file not found: {}",
                path.display()
            ))),
            Some(path) => Ok(confy::load_path(path)?),
            None => match confy::get_configuration_file_path(APP_NAME, CONFIG_NAME) {
                Ok(path) => Self::load_existing(&path),
                Err(err) => {
                    log::debug!("No configuration directory: {err}");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Reads `path` if it exists, the defaults otherwise.
    pub fn load_existing(path: &Path) -> Result<Self> {
        if !path.is_file() {
            log::debug!("No configuration file at {}", path.display());
            return Ok(Self::default());
        }
        Ok(confy::load_path(path)?)
    }

    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            retries: self.http_retries,
            retry_wait_ms: self.http_retry_wait_ms,
            request_timeout_secs: self.request_timeout_secs,
            dial_timeout_secs: self.dial_timeout_secs,
        }
    }

    pub fn certs_dir(&self) -> Option<PathBuf> {
        self.certs_dir.clone().or_else(default_certs_dir)
    }

    /// Resolves the server a command talks to.
    ///
    /// `--url` bypasses the configured servers entirely. Otherwise the server
    /// is picked by `--server-id`, then `default_server`, then by being the
    /// only one configured. `--user` and `--access-token` override what the
    /// configuration holds.
    pub fn server_details(&self, args: &ServerArgs) -> Result<ServerDetails> {
        let mut server = match &args.url {
            Some(url) => ServerConfig {
                url: url.clone(),
                ..Default::default()
            },
            None => self.find_server(args.server_id.as_deref())?.clone(),
        };

        if let Some(user) = &args.user {
            server.user = user.clone();
        }
        if let Some(token) = &args.access_token {
            server.access_token = token.clone();
        }

        let url = server.url.trim();
        if url.is_empty() {
            return Err(AppTrustError::config(
                "the JFrog platform URL is mandatory: pass --url or configure a server",
            ));
        }
        if server.access_token.is_empty() && !server.password.is_empty() {
            return Err(AppTrustError::config(
                "basic authentication is not supported: provide an access token",
            ));
        }
        if server.access_token.is_empty() {
            log::warn!("No access token provided, requests will be sent anonymously");
        }

        let url = if url.ends_with('/') {
            url.to_string()
        } else {
            format!("{url}/")
        };

        Ok(ServerDetails {
            server_id: server.server_id,
            url,
            user: server.user,
            access_token: server.access_token,
            insecure_tls: server.insecure_tls,
            client_cert_path: server.client_cert_path,
            client_cert_key_path: server.client_cert_key_path,
            certs_dir: self.certs_dir(),
            http: self.http_settings(),
        })
    }

    fn find_server(&self, server_id: Option<&str>) -> Result<&ServerConfig> {
        match server_id.or(self.default_server.as_deref()) {
            Some(id) => self
                .servers
                .iter()
                .find(|server| server.server_id == id)
                .ok_or_else(|| AppTrustError::config(format!("server '{id}' is not configured"))),
            None => match self.servers.as_slice() {
                [only] => Ok(only),
                [] => Err(AppTrustError::config(
                    "no server configured: pass --url or add a server to the configuration file",
                )),
                _ => Err(AppTrustError::config(
                    "several servers are configured: pass --server-id or set default_server",
                )),
            },
        }
    }
}

/// `$JFROG_CLI_HOME_DIR/security/certs`, or `~/.jfrog/security/certs`.
pub fn default_certs_dir() -> Option<PathBuf> {
    let home = match std::env::var_os(JFROG_HOME_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => directories::BaseDirs::new()?.home_dir().join(".jfrog"),
    };
    Some(home.join("security").join("certs"))
}
