use {
    crate::{config::AppConfig, error::AppError},
    cosmzone_ante::{AnteDecorator, AnteHandler, Context, Tx, ValidateBasicDecorator},
    cosmzone_coins::DecCoins,
    cosmzone_tax::{Keeper, MempoolFeeDecorator, TaxParams},
    cosmzone_upgrades::{
        read_upgrade_info_from_disk, register_upgrade_handlers, Plan, StoreUpgrades,
        UpgradeKeeper, VersionMap,
    },
    log::{info, warn},
    std::{
        fmt,
        path::{Path, PathBuf},
        sync::Arc,
    },
};

/// Consensus versions of the modules this binary ships.
pub fn module_versions() -> VersionMap {
    [("ante", 1), ("tax", 1), ("upgrade", 1)]
        .into_iter()
        .map(|(name, version)| (name.to_string(), version))
        .collect()
}

/// The ante chain every transaction passes through, composed once.
pub fn new_ante_handler(tax_keeper: Arc<Keeper>) -> AnteHandler {
    let decorators: Vec<Box<dyn AnteDecorator>> = vec![
        Box::new(ValidateBasicDecorator),
        Box::new(MempoolFeeDecorator::new(tax_keeper)),
    ];
    AnteHandler::new(decorators)
}

pub struct App {
    chain_id: String,
    home: PathBuf,
    config: AppConfig,
    min_gas_prices: DecCoins,
    height: u64,
    tax_keeper: Arc<Keeper>,
    ante_handler: AnteHandler,
    upgrade_keeper: UpgradeKeeper,
    store_upgrades: Option<StoreUpgrades>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("chain_id", &self.chain_id)
            .field("home", &self.home)
            .field("config", &self.config)
            .field("height", &self.height)
            .field("ante_handler_len", &self.ante_handler.len())
            .field("upgrade_keeper", &self.upgrade_keeper)
            .field("store_upgrades", &self.store_upgrades)
            .finish()
    }
}

impl App {
    /// Build the application resuming after block `height`.
    ///
    /// Upgrade info is read from `<home>/data` exactly once here. When it
    /// names a release this binary knows, due at the block right after
    /// `height`, the plan is re-armed so the handler runs at that block.
    pub fn new(
        chain_id: impl Into<String>,
        home: impl Into<PathBuf>,
        config: AppConfig,
        genesis: &TaxParams,
        height: u64,
    ) -> Result<Self, AppError> {
        let chain_id = chain_id.into();
        let home = home.into();
        let min_gas_prices = config.min_gas_prices()?;

        let tax_keeper = Arc::new(Keeper::new(genesis)?);
        let ante_handler = new_ante_handler(Arc::clone(&tax_keeper));

        let upgrade_info = read_upgrade_info_from_disk(&home)?;
        let mut upgrade_keeper = UpgradeKeeper::new(
            config.unsafe_skip_upgrades.iter().copied(),
            module_versions(),
        )
        .with_home(&home);
        let store_upgrades = register_upgrade_handlers(&mut upgrade_keeper, &upgrade_info, height);
        if store_upgrades.is_some() {
            let plan = Plan {
                name: upgrade_info.name.clone(),
                height: upgrade_info.height,
                info: upgrade_info.info.clone(),
            };
            upgrade_keeper.schedule_upgrade(plan, height)?;
        }

        info!(
            "app started: chain_id={chain_id} height={height} minimum-gas-prices={min_gas_prices} \
             fee_rate={}",
            genesis.fee_rate.percent()
        );
        Ok(Self {
            chain_id,
            home,
            config,
            min_gas_prices,
            height,
            tax_keeper,
            ante_handler,
            upgrade_keeper,
            store_upgrades,
        })
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn tax_keeper(&self) -> &Keeper {
        &self.tax_keeper
    }

    pub fn upgrade_keeper(&self) -> &UpgradeKeeper {
        &self.upgrade_keeper
    }

    pub fn upgrade_keeper_mut(&mut self) -> &mut UpgradeKeeper {
        &mut self.upgrade_keeper
    }

    /// Store upgrades to mount for the upgrade recorded on disk at start-up.
    pub fn store_upgrades(&self) -> Option<&StoreUpgrades> {
        self.store_upgrades.as_ref()
    }

    fn context(&self, check_tx: bool) -> Context {
        Context::new(self.chain_id.as_str(), self.height)
            .with_check_tx(check_tx)
            .with_min_gas_prices(self.min_gas_prices.clone())
    }

    /// Mempool admission.
    pub fn check_tx(&self, tx: &dyn Tx) -> Result<Context, AppError> {
        Ok(self.ante_handler.handle(self.context(true), tx, false)?)
    }

    /// Gas estimation; the fee check is skipped.
    pub fn simulate_tx(&self, tx: &dyn Tx) -> Result<Context, AppError> {
        Ok(self.ante_handler.handle(self.context(true), tx, true)?)
    }

    /// Block inclusion; the fee check is skipped.
    pub fn deliver_tx(&self, tx: &dyn Tx) -> Result<Context, AppError> {
        Ok(self.ante_handler.handle(self.context(false), tx, false)?)
    }

    pub fn begin_block(&mut self, height: u64) -> Result<(), AppError> {
        let halt_height = self.config.halt_height;
        if halt_height > 0 && height > halt_height {
            warn!("halt height {halt_height} reached, refusing block {height}");
            return Err(AppError::HaltHeightReached {
                halt_height,
                height,
            });
        }
        self.upgrade_keeper.begin_block(height)?;
        self.height = height;
        Ok(())
    }
}
