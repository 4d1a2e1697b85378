//! Wallet sessions for the voting walkthrough.
//!
//! The interface drives wallets through the narrow [Provider] surface:
//! connection status, the active account, the connectors on offer, and
//! connect/disconnect. [Simulated] stands in for a real wallet, deriving a
//! stable address per connector from a seeded key so no browser extension
//! or network is involved.

use commonware_cryptography::{ed25519, PrivateKeyExt, Signer};
use commonware_utils::hex;

/// Bytes of public key material used to form an address (40 hex characters).
const ADDRESS_LEN: usize = 20;

/// A wallet connector a user can open a session through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connector {
    /// Stable identifier passed to [Provider::connect].
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
}

/// Connectors offered by the simulated wallet.
pub const CONNECTORS: &[Connector] = &[
    Connector {
        id: "browser",
        name: "Browser Wallet",
    },
    Connector {
        id: "walletconnect",
        name: "WalletConnect",
    },
];

/// The wallet capabilities the interface consumes.
pub trait Provider {
    /// Whether a session is active.
    fn connected(&self) -> bool;

    /// The active account address, if connected.
    fn account(&self) -> Option<&str>;

    /// Connectors available to open a session through.
    fn connectors(&self) -> &[Connector];

    /// Open a session through the connector with `id`.
    ///
    /// Unknown ids and connects while already connected are ignored.
    fn connect(&mut self, id: &str);

    /// End the active session, if any.
    fn disconnect(&mut self);
}

/// An in-process wallet with deterministic accounts.
///
/// Each connector's address is derived from an ed25519 key seeded by the
/// wallet seed and the connector's position, so the same seed always
/// produces the same addresses.
pub struct Simulated {
    accounts: Vec<String>,
    active: Option<usize>,
}

impl Simulated {
    /// Create a wallet whose accounts are derived from `seed`.
    pub fn new(seed: u64) -> Self {
        let accounts = (0..CONNECTORS.len() as u64)
            .map(|index| {
                let key = ed25519::PrivateKey::from_seed(seed + index).public_key();
                let bytes: &[u8] = key.as_ref();
                format!("0x{}", hex(&bytes[..ADDRESS_LEN]))
            })
            .collect();
        Self {
            accounts,
            active: None,
        }
    }
}

impl Provider for Simulated {
    fn connected(&self) -> bool {
        self.active.is_some()
    }

    fn account(&self) -> Option<&str> {
        self.active.map(|index| self.accounts[index].as_str())
    }

    fn connectors(&self) -> &[Connector] {
        CONNECTORS
    }

    fn connect(&mut self, id: &str) {
        if self.active.is_some() {
            return;
        }
        self.active = CONNECTORS.iter().position(|connector| connector.id == id);
    }

    fn disconnect(&mut self) {
        self.active = None;
    }
}

/// Shorten an address for display: the first six characters, an ellipsis,
/// and the last four. Addresses too short to shorten pass through.
pub fn truncated(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}
