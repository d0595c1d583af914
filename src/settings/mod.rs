//! Settings model and the store that reconciles local edits against the
//! provider's persisted copy.
//!
//! The provider only supports full-object load/replace, so the store keeps
//! the last payload it knows to be persisted and compares against it to
//! decide whether a manual save is needed. Feature toggles bypass that flow:
//! a valid toggle persists immediately (see [`gate`]).

pub mod gate;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{Result, WatchError};
use crate::provider::JobProvider;

pub use gate::{Feature, GateError};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Toggle {
    pub enabled: bool,
    pub interval: i64,
}

impl Toggle {
    fn off(interval: i64) -> Self {
        Self {
            enabled: false,
            interval,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletJobs {
    pub hyperliquid: bool,
    pub lighter: bool,
    pub pendle: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Wallet {
    pub label: String,
    pub address: String,
    /// "evm", "solana" or "bitcoin".
    #[serde(rename = "type")]
    pub wallet_type: String,
    pub jobs: WalletJobs,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PendleSettings {
    pub markets: Toggle,
    pub positions: Toggle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KrakenSettings {
    pub enabled: bool,
    pub interval: i64,
    pub api_key: String,
    pub api_secret: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExchangeSettings {
    pub kraken: KrakenSettings,
    pub hyperliquid: Toggle,
    pub lighter: Toggle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnChainSettings {
    /// Shared across the EVM, Bitcoin and Solana balance jobs.
    pub coinstats_api_key: String,
    pub evm: Toggle,
    pub bitcoin: Toggle,
    pub solana: Toggle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GristSettings {
    pub enabled: bool,
    pub interval: i64,
    pub api_key: String,
    pub document_id: String,
    pub backup_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceFeedSettings {
    pub enabled: bool,
    pub interval: i64,
    pub coingecko_api_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockFeedSettings {
    pub enabled: bool,
    pub interval: i64,
    pub twelve_data_api_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedSettings {
    pub prices: PriceFeedSettings,
    pub stocks: StockFeedSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub wallets: Vec<Wallet>,
    pub pendle: PendleSettings,
    pub exchanges: ExchangeSettings,
    pub onchain: OnChainSettings,
    pub grist: GristSettings,
    /// Wire name kept for compatibility with the provider's payload.
    #[serde(rename = "settings")]
    pub feeds: FeedSettings,
}

impl Default for Settings {
    /// First-run defaults; intervals are in seconds.
    fn default() -> Self {
        Self {
            wallets: Vec::new(),
            pendle: PendleSettings {
                markets: Toggle::off(600),
                positions: Toggle::off(600),
            },
            exchanges: ExchangeSettings {
                kraken: KrakenSettings {
                    interval: 600,
                    ..KrakenSettings::default()
                },
                hyperliquid: Toggle::off(300),
                lighter: Toggle::off(300),
            },
            onchain: OnChainSettings {
                coinstats_api_key: String::new(),
                evm: Toggle::off(1800),
                bitcoin: Toggle::off(10800),
                solana: Toggle::off(1800),
            },
            grist: GristSettings {
                interval: 7200,
                ..GristSettings::default()
            },
            feeds: FeedSettings {
                prices: PriceFeedSettings {
                    interval: 600,
                    ..PriceFeedSettings::default()
                },
                stocks: StockFeedSettings {
                    interval: 600,
                    ..StockFeedSettings::default()
                },
            },
        }
    }
}

/// Why a feature toggle was not applied.
#[derive(Error, Debug)]
pub enum ToggleError {
    /// Prerequisites failed local validation; nothing was changed and no
    /// remote call was made.
    #[error("{0}")]
    Invalid(#[from] GateError),

    /// The toggle was applied locally but persisting it failed.
    #[error(transparent)]
    Save(#[from] WatchError),
}

/// Local settings plus the last copy known to be persisted remotely.
#[derive(Debug)]
pub struct SettingsStore {
    current: Settings,
    last_saved: Settings,
}

impl SettingsStore {
    pub fn new(loaded: Settings) -> Self {
        Self {
            last_saved: loaded.clone(),
            current: loaded,
        }
    }

    pub async fn load(provider: &dyn JobProvider) -> Result<Self> {
        Ok(Self::new(provider.load_settings().await?))
    }

    pub fn current(&self) -> &Settings {
        &self.current
    }

    /// Mutable access for non-toggle edits. These only mark the store dirty;
    /// they reach the provider on the next explicit [`save`](Self::save).
    pub fn edit(&mut self) -> &mut Settings {
        &mut self.current
    }

    /// Gates the manual save action in the settings view.
    pub fn has_unsaved_changes(&self) -> bool {
        self.current != self.last_saved
    }

    pub async fn save(&mut self, provider: &dyn JobProvider) -> Result<()> {
        provider.save_settings(&self.current).await?;
        self.last_saved = self.current.clone();
        Ok(())
    }

    /// Flip a feature toggle.
    ///
    /// Enabling validates the feature's prerequisites first and rejects
    /// locally on failure; disabling is always permitted. A successful flip
    /// persists the whole settings object immediately and reconciles the
    /// last-saved copy.
    pub async fn set_enabled(
        &mut self,
        feature: Feature,
        enabled: bool,
        provider: &dyn JobProvider,
    ) -> std::result::Result<(), ToggleError> {
        if enabled {
            gate::validate_enable(&self.current, feature)?;
        }
        *gate::enabled_flag_mut(&mut self.current, feature) = enabled;
        self.save(provider).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_run_defaults() {
        let settings = Settings::default();

        assert!(settings.wallets.is_empty());
        assert_eq!(settings.pendle.markets, Toggle::off(600));
        assert_eq!(settings.pendle.positions, Toggle::off(600));

        assert!(!settings.exchanges.kraken.enabled);
        assert_eq!(settings.exchanges.kraken.interval, 600);
        assert_eq!(settings.exchanges.hyperliquid, Toggle::off(300));
        assert_eq!(settings.exchanges.lighter, Toggle::off(300));

        assert_eq!(settings.onchain.evm, Toggle::off(1800));
        assert_eq!(settings.onchain.bitcoin, Toggle::off(10800));
        assert_eq!(settings.onchain.solana, Toggle::off(1800));

        assert!(!settings.grist.enabled);
        assert_eq!(settings.grist.interval, 7200);

        assert!(!settings.feeds.prices.enabled);
        assert_eq!(settings.feeds.prices.interval, 600);
        assert!(!settings.feeds.stocks.enabled);
        assert_eq!(settings.feeds.stocks.interval, 600);
    }

    #[test]
    fn nothing_is_enabled_by_default() {
        let settings = Settings::default();
        for feature in [
            Feature::GristBackup,
            Feature::Kraken,
            Feature::Hyperliquid,
            Feature::Lighter,
            Feature::OnChainEvm,
            Feature::OnChainBitcoin,
            Feature::OnChainSolana,
            Feature::PendleMarkets,
            Feature::PendlePositions,
            Feature::Prices,
            Feature::Stocks,
        ] {
            let mut copy = settings.clone();
            assert!(!*gate::enabled_flag_mut(&mut copy, feature));
        }
    }
}
