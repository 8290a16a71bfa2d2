use std::{path::PathBuf, time::Duration};

/// Node the script talks to (Ganache's default RPC port).
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:7545";
/// Network id Ganache registers deployments under.
pub const DEFAULT_NETWORK_ID: &str = "5777";
/// Truffle build output, relative to the working directory.
pub const DEFAULT_ARTIFACT_PATH: &str = "build/contracts/SimpleStorage.json";
/// Value written by `set`.
pub const DEFAULT_STORED_VALUE: u64 = 150;
/// Receipt polling interval; a local node mines instantly.
pub const LOCAL_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Script configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptConfig {
    pub endpoint: String,
    pub artifact_path: PathBuf,
    pub network_id: String,
    pub value: u64,
    pub poll_interval: Duration,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            artifact_path: PathBuf::from(DEFAULT_ARTIFACT_PATH),
            network_id: DEFAULT_NETWORK_ID.to_string(),
            value: DEFAULT_STORED_VALUE,
            poll_interval: LOCAL_POLL_INTERVAL,
        }
    }
}
