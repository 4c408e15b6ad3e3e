use {
    crate::{error::TaxError, params::TaxParams},
    cosmzone_ante::Context,
    log::info,
    std::{
        collections::BTreeMap,
        sync::{Arc, PoisonError, RwLock},
    },
};

/// Read access to the tax parameters committed at a context's height.
pub trait ParamStore: Send + Sync {
    fn params(&self, ctx: &Context) -> Result<TaxParams, TaxError>;
}

impl<T: ParamStore + ?Sized> ParamStore for Arc<T> {
    fn params(&self, ctx: &Context) -> Result<TaxParams, TaxError> {
        (**self).params(ctx)
    }
}

/// Height-versioned storage of the tax module's params.
///
/// Each governance update is recorded, borsh-encoded, at the height it takes
/// effect. A read for height `h` decodes the entry with the greatest height
/// `<= h`, so a single check never mixes values from two heights and older
/// heights keep answering with what was committed then.
#[derive(Debug, Default)]
pub struct Keeper {
    store: RwLock<BTreeMap<u64, Vec<u8>>>,
}

impl Keeper {
    /// Create a keeper whose genesis (height 0) params are `genesis`.
    pub fn new(genesis: &TaxParams) -> Result<Self, TaxError> {
        let keeper = Self::default();
        keeper.set_params(0, genesis)?;
        Ok(keeper)
    }

    /// Record `params` as effective from `height` onward.
    ///
    /// Heights below the newest recorded entry are already committed and
    /// cannot be rewritten.
    pub fn set_params(&self, height: u64, params: &TaxParams) -> Result<(), TaxError> {
        params.validate()?;
        let bytes = borsh::to_vec(params).map_err(|err| TaxError::ParamsCodec(err.to_string()))?;
        let mut store = self.store.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(&latest) = store.keys().next_back() {
            if height < latest {
                return Err(TaxError::ParamsHeightCommitted { height, latest });
            }
        }
        store.insert(height, bytes);
        drop(store);
        info!(
            "tax params updated: height={height} fee_rate={}",
            params.fee_rate.percent()
        );
        Ok(())
    }

    /// Params in effect at `height`.
    pub fn params_at(&self, height: u64) -> Result<TaxParams, TaxError> {
        let store = self.store.read().unwrap_or_else(PoisonError::into_inner);
        let (_, bytes) = store
            .range(..=height)
            .next_back()
            .ok_or(TaxError::ParamsNotFound { height })?;
        let params: TaxParams =
            borsh::from_slice(bytes).map_err(|err| TaxError::ParamsCodec(err.to_string()))?;
        params.validate()?;
        Ok(params)
    }
}

impl ParamStore for Keeper {
    fn params(&self, ctx: &Context) -> Result<TaxParams, TaxError> {
        self.params_at(ctx.block_height())
    }
}
