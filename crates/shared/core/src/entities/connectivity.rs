use serde::{Deserialize, Serialize};

/// Connection state of a gateway as seen by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConnectivityStatus {
    Connected,
    #[default]
    Disconnected,
}

impl ConnectivityStatus {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectivityStatus::Connected)
    }
}
