//! Versioned, one-shot chain upgrades.
//!
//! An [`UpgradeKeeper`] holds at most one pending [`Plan`]. When a block at or
//! past the plan's height begins, the handler registered under the plan's
//! name runs exactly once; a binary that lacks the handler halts with
//! [`UpgradeError::UpgradeNeeded`] and records the plan on disk so the next
//! binary can pick it up via [`read_upgrade_info_from_disk`].
//!
//! ```
//! use cosmzone_upgrades::{Plan, UpgradeKeeper, VersionMap};
//!
//! let mut keeper = UpgradeKeeper::new([], VersionMap::new());
//! keeper.set_upgrade_handler("v0.5.2", |_plan, versions| Ok(versions));
//! keeper.schedule_upgrade(Plan::new("v0.5.2", 10), 1).unwrap();
//!
//! keeper.begin_block(10).unwrap();
//! assert_eq!(keeper.done_height("v0.5.2"), Some(10));
//! assert!(keeper.upgrade_plan().is_none());
//! ```

mod error;
mod keeper;
mod plan;
mod registry;

pub use {
    error::UpgradeError,
    keeper::{UpgradeHandler, UpgradeKeeper, VersionMap},
    plan::{
        dump_upgrade_info_to_disk, read_upgrade_info_from_disk, upgrade_info_path, Plan,
        UpgradeInfo, UPGRADE_INFO_FILENAME,
    },
    registry::{
        register_upgrade_handlers, upgrades, StoreUpgrades, Upgrade, V0_1_43, V0_1_44, V0_2_0,
        V0_5_2,
    },
};
