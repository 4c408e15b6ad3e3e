use {
    crate::{
        error::UpgradeError,
        keeper::{UpgradeKeeper, VersionMap},
        plan::{Plan, UpgradeInfo},
    },
    log::info,
    serde::{Deserialize, Serialize},
};

pub const V0_1_43: &str = "v0.1.43";
pub const V0_1_44: &str = "v0.1.44";
pub const V0_2_0: &str = "v0.2.0";
pub const V0_5_2: &str = "v0.5.2";

/// Store keys mounted alongside an upgrade.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreUpgrades {
    pub added: Vec<String>,
}

impl StoreUpgrades {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
    }
}

/// A release this binary knows how to upgrade into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Upgrade {
    pub name: &'static str,
    pub store_upgrades: StoreUpgrades,
}

impl Upgrade {
    const fn new(name: &'static str) -> Self {
        Self {
            name,
            store_upgrades: StoreUpgrades { added: Vec::new() },
        }
    }
}

/// Every release, oldest first.
pub fn upgrades() -> Vec<Upgrade> {
    vec![
        Upgrade::new(V0_1_43),
        Upgrade::new(V0_1_44),
        Upgrade::new(V0_2_0),
        Upgrade::new(V0_5_2),
    ]
}

fn noop_handler(
    name: &'static str,
) -> impl Fn(&Plan, VersionMap) -> Result<VersionMap, UpgradeError> + Send + Sync + 'static {
    move |plan, from_versions| {
        info!(
            "Upgrade handler execution: name={name} height={}",
            plan.height
        );
        Ok(from_versions)
    }
}

/// Register a handler for every known release and return the store upgrades
/// to mount for the upgrade recorded in `upgrade_info`.
///
/// Store upgrades only apply when the recorded upgrade is the very next block
/// after `last_height`; older or future info mounts nothing.
pub fn register_upgrade_handlers(
    keeper: &mut UpgradeKeeper,
    upgrade_info: &UpgradeInfo,
    last_height: u64,
) -> Option<StoreUpgrades> {
    let releases = upgrades();
    for upgrade in &releases {
        keeper.set_upgrade_handler(upgrade.name, noop_handler(upgrade.name));
    }

    if upgrade_info.is_empty()
        || keeper.is_skip_height(upgrade_info.height)
        || last_height.checked_add(1) != Some(upgrade_info.height)
    {
        return None;
    }
    releases
        .into_iter()
        .find(|upgrade| upgrade.name == upgrade_info.name)
        .map(|upgrade| {
            info!(
                "mounting store upgrades for {} at height {}",
                upgrade.name, upgrade_info.height
            );
            upgrade.store_upgrades
        })
}
