//! Validation rules that gate enabling a feature until its prerequisite
//! configuration is in place. Checks run locally; a rejected toggle never
//! reaches the provider.

use thiserror::Error;

use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    GristBackup,
    Kraken,
    Hyperliquid,
    Lighter,
    OnChainEvm,
    OnChainBitcoin,
    OnChainSolana,
    PendleMarkets,
    PendlePositions,
    Prices,
    Stocks,
}

/// Static messages surfaced inline next to the rejected toggle.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateError {
    #[error("backup path must point to a file (at least 3 characters, including an extension)")]
    BackupPathInvalid,

    #[error("Kraken API key and secret are both required")]
    KrakenCredentialsMissing,

    #[error("CoinStats API key is required for on-chain balance jobs")]
    CoinStatsKeyMissing,

    #[error("TwelveData API key is required for the stock feed")]
    TwelveDataKeyMissing,
}

/// Check whether `feature` may transition to enabled under `settings`.
pub fn validate_enable(settings: &Settings, feature: Feature) -> Result<(), GateError> {
    match feature {
        Feature::GristBackup => {
            let path = settings.grist.backup_path.trim();
            if path.is_empty() || path.len() < 3 || !path.contains('.') {
                return Err(GateError::BackupPathInvalid);
            }
        }
        Feature::Kraken => {
            let kraken = &settings.exchanges.kraken;
            if kraken.api_key.trim().is_empty() || kraken.api_secret.trim().is_empty() {
                return Err(GateError::KrakenCredentialsMissing);
            }
        }
        Feature::OnChainEvm | Feature::OnChainBitcoin | Feature::OnChainSolana => {
            if settings.onchain.coinstats_api_key.trim().is_empty() {
                return Err(GateError::CoinStatsKeyMissing);
            }
        }
        Feature::Stocks => {
            if settings.feeds.stocks.twelve_data_api_key.trim().is_empty() {
                return Err(GateError::TwelveDataKeyMissing);
            }
        }
        // No prerequisites.
        Feature::Hyperliquid
        | Feature::Lighter
        | Feature::PendleMarkets
        | Feature::PendlePositions
        | Feature::Prices => {}
    }
    Ok(())
}

pub(crate) fn enabled_flag_mut(settings: &mut Settings, feature: Feature) -> &mut bool {
    match feature {
        Feature::GristBackup => &mut settings.grist.enabled,
        Feature::Kraken => &mut settings.exchanges.kraken.enabled,
        Feature::Hyperliquid => &mut settings.exchanges.hyperliquid.enabled,
        Feature::Lighter => &mut settings.exchanges.lighter.enabled,
        Feature::OnChainEvm => &mut settings.onchain.evm.enabled,
        Feature::OnChainBitcoin => &mut settings.onchain.bitcoin.enabled,
        Feature::OnChainSolana => &mut settings.onchain.solana.enabled,
        Feature::PendleMarkets => &mut settings.pendle.markets.enabled,
        Feature::PendlePositions => &mut settings.pendle.positions.enabled,
        Feature::Prices => &mut settings.feeds.prices.enabled,
        Feature::Stocks => &mut settings.feeds.stocks.enabled,
    }
}
