use crate::config::tron_address;

/// Wallet connection state
#[derive(Clone, Debug, Default, PartialEq)]
pub enum WalletState {
    #[default]
    Disconnected,
    Connecting,
    Connected {
        /// Base58check address (`T...`)
        address: String,
        /// Full node host reported by TronLink
        node: Option<String>,
    },
}

impl WalletState {
    /// Check if wallet is connected
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    /// Network name derived from the full node host, if known
    pub fn network_name(&self) -> Option<&'static str> {
        match self {
            WalletState::Connected {
                node: Some(node), ..
            } => Some(network_name(node)),
            _ => None,
        }
    }

    /// Format address for display (T12345...wxyz)
    pub fn display_name(&self) -> String {
        match self {
            WalletState::Connected { address, .. } if address.len() >= tron_address::FULL_LEN => {
                format!(
                    "{}...{}",
                    &address[..tron_address::PREFIX_LEN],
                    &address[address.len() - tron_address::SUFFIX_LEN..]
                )
            }
            WalletState::Connected { address, .. } => address.clone(),
            WalletState::Connecting => "connecting...".to_string(),
            WalletState::Disconnected => "guest".to_string(),
        }
    }
}

/// Map a TronGrid host to its network name
fn network_name(node: &str) -> &'static str {
    if node.contains("shasta") {
        "Shasta"
    } else if node.contains("nile") {
        "Nile"
    } else if node.contains("trongrid.io") {
        "Mainnet"
    } else {
        "Custom"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "TLa2f6VPqDgRE67v1736s7bJ8Ray5wYjU7";

    #[test]
    fn test_disconnected_state() {
        let state = WalletState::Disconnected;
        assert!(!state.is_connected());
        assert_eq!(state.network_name(), None);
        assert_eq!(state.display_name(), "guest");
    }

    #[test]
    fn test_connecting_state() {
        let state = WalletState::Connecting;
        assert!(!state.is_connected());
        assert_eq!(state.display_name(), "connecting...");
    }

    #[test]
    fn test_connected_full_address() {
        let state = WalletState::Connected {
            address: ADDRESS.to_string(),
            node: Some("https://api.trongrid.io".to_string()),
        };
        assert!(state.is_connected());
        assert_eq!(state.network_name(), Some("Mainnet"));
        assert_eq!(state.display_name(), "TLa2f6...YjU7");
    }

    #[test]
    fn test_connected_testnets() {
        let shasta = WalletState::Connected {
            address: ADDRESS.to_string(),
            node: Some("https://api.shasta.trongrid.io".to_string()),
        };
        assert_eq!(shasta.network_name(), Some("Shasta"));

        let nile = WalletState::Connected {
            address: ADDRESS.to_string(),
            node: Some("https://nile.trongrid.io".to_string()),
        };
        assert_eq!(nile.network_name(), Some("Nile"));
    }

    #[test]
    fn test_connected_short_address() {
        let state = WalletState::Connected {
            address: "T123".to_string(),
            node: None,
        };
        assert!(state.is_connected());
        assert_eq!(state.network_name(), None);
        assert_eq!(state.display_name(), "T123");
    }

    #[test]
    fn test_default() {
        assert_eq!(WalletState::default(), WalletState::Disconnected);
    }
}
