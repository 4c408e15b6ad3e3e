use {
    cosmzone_ante::AnteError, cosmzone_coins::CoinError, cosmzone_tax::TaxError,
    cosmzone_upgrades::UpgradeError, std::path::PathBuf, thiserror::Error,
};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid minimum-gas-prices: {0}")]
    MinGasPrices(#[from] CoinError),

    #[error(transparent)]
    Ante(#[from] AnteError),

    #[error(transparent)]
    Tax(#[from] TaxError),

    #[error(transparent)]
    Upgrade(#[from] UpgradeError),

    #[error("halt height {halt_height} reached, refusing block {height}")]
    HaltHeightReached { halt_height: u64, height: u64 },
}
