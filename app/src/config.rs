use {
    crate::error::AppError,
    cosmzone_coins::DecCoins,
    serde::{Deserialize, Serialize},
    std::{fs, path::Path},
};

pub const DEFAULT_CONFIG_FILENAME: &str = "app.toml";

/// Node-local settings, read from `<home>/config/app.toml`.
///
/// Unknown keys are ignored so the file can be shared with other services.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AppConfig {
    /// Per-gas minimum prices for mempool admission, e.g.
    /// `"0.0001uatom,0.01stake"`. Empty disables the check.
    pub minimum_gas_prices: String,
    /// Stop processing blocks after this height; 0 disables.
    pub halt_height: u64,
    /// Heights whose scheduled upgrade is skipped instead of executed.
    pub unsafe_skip_upgrades: Vec<u64>,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|source| AppError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, AppError> {
        let config: Self = toml::from_str(raw)?;
        config.min_gas_prices()?;
        Ok(config)
    }

    pub fn min_gas_prices(&self) -> Result<DecCoins, AppError> {
        Ok(self.minimum_gas_prices.parse()?)
    }
}
