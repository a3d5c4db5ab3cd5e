//! Crypto wallet extension name → ecosystem.

use crate::lookup::{longest_substring_match, Lookup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalletEcosystem {
    Ethereum,
    Solana,
    Bitcoin,
    MultiChain,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletEntry {
    pub pattern: &'static str,
    pub ecosystem: WalletEcosystem,
}

impl WalletEntry {
    pub fn is_solana_family(&self) -> bool {
        self.ecosystem == WalletEcosystem::Solana
    }
}

const fn wallet(pattern: &'static str, ecosystem: WalletEcosystem) -> WalletEntry {
    WalletEntry { pattern, ecosystem }
}

use WalletEcosystem::*;

pub static WALLET_TABLE: &[WalletEntry] = &[
    wallet("metamask", Ethereum),
    wallet("rabby", Ethereum),
    wallet("rainbow", Ethereum),
    wallet("coinbase", MultiChain),
    wallet("trust", MultiChain),
    wallet("brave wallet", MultiChain),
    wallet("exodus", MultiChain),
    wallet("okx", MultiChain),
    wallet("phantom", Solana),
    wallet("solflare", Solana),
    wallet("backpack", Solana),
    wallet("glow", Solana),
    wallet("unisat", Bitcoin),
    wallet("xverse", Bitcoin),
    wallet("leather", Bitcoin),
];

pub static DEFAULT_WALLET: WalletEntry = wallet("unrecognized wallet", Unknown);

pub fn lookup(name: &str) -> Lookup<WalletEntry> {
    match longest_substring_match(name, WALLET_TABLE, |e| e.pattern) {
        Some(entry) => Lookup::hit(entry, entry.pattern),
        None => Lookup::miss(&DEFAULT_WALLET, DEFAULT_WALLET.pattern),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solana_wallets_are_flagged() {
        assert!(lookup("Phantom").entry.is_solana_family());
        assert!(lookup("Solflare Wallet").entry.is_solana_family());
        assert!(!lookup("MetaMask").entry.is_solana_family());
    }

    #[test]
    fn unknown_wallet_has_unknown_ecosystem() {
        let miss = lookup("HomebrewVault");
        assert!(!miss.matched);
        assert_eq!(miss.entry.ecosystem, WalletEcosystem::Unknown);
    }
}
