use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Scheme and host of the server; the port comes from `[server]`.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_server_url() -> String {
    "http://localhost".to_string()
}

fn default_timeout_ms() -> u64 {
    2000
}
