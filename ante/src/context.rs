use cosmzone_coins::DecCoins;

/// How a transaction is being evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExecMode {
    /// The node is deciding whether to hold the tx in its local mempool.
    PoolAdmission,
    /// The tx is being executed as part of a block.
    Inclusion,
    /// Dry run (gas estimation, inspection); no side effects.
    Simulation,
}

impl ExecMode {
    /// Derive the mode from the context's check flag and the `simulate`
    /// argument handed to every decorator. Simulation wins over both.
    pub fn from_flags(check_tx: bool, simulate: bool) -> Self {
        if simulate {
            Self::Simulation
        } else if check_tx {
            Self::PoolAdmission
        } else {
            Self::Inclusion
        }
    }
}

/// Per-check view of the chain and the node handed to each ante decorator.
///
/// A context is cheap to clone and immutable from a decorator's point of
/// view; decorators that need to change it return an updated copy built with
/// the `with_*` methods.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    chain_id: String,
    block_height: u64,
    check_tx: bool,
    min_gas_prices: DecCoins,
}

impl Context {
    pub fn new(chain_id: impl Into<String>, block_height: u64) -> Self {
        Self {
            chain_id: chain_id.into(),
            block_height,
            ..Self::default()
        }
    }

    pub fn with_block_height(mut self, block_height: u64) -> Self {
        self.block_height = block_height;
        self
    }

    pub fn with_check_tx(mut self, check_tx: bool) -> Self {
        self.check_tx = check_tx;
        self
    }

    /// Node-local minimum gas prices; not part of consensus state.
    pub fn with_min_gas_prices(mut self, min_gas_prices: DecCoins) -> Self {
        self.min_gas_prices = min_gas_prices;
        self
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// Height whose committed state this check reads.
    pub fn block_height(&self) -> u64 {
        self.block_height
    }

    pub fn is_check_tx(&self) -> bool {
        self.check_tx
    }

    pub fn min_gas_prices(&self) -> &DecCoins {
        &self.min_gas_prices
    }

    pub fn exec_mode(&self, simulate: bool) -> ExecMode {
        ExecMode::from_flags(self.check_tx, simulate)
    }
}
