use {
    crate::{
        error::UpgradeError,
        plan::{dump_upgrade_info_to_disk, Plan},
    },
    log::{error, info},
    std::{
        collections::{BTreeMap, BTreeSet, HashMap},
        fmt,
        path::PathBuf,
    },
};

/// Consensus version of every module, keyed by module name.
pub type VersionMap = BTreeMap<String, u64>;

/// Migration body for a named upgrade: receives the plan and the version map
/// in force before the upgrade and returns the map to record afterwards.
pub type UpgradeHandler =
    Box<dyn Fn(&Plan, VersionMap) -> Result<VersionMap, UpgradeError> + Send + Sync>;

/// Tracks the pending upgrade plan and runs each registered handler at most
/// once, when the plan's height is reached.
pub struct UpgradeKeeper {
    home: Option<PathBuf>,
    skip_heights: BTreeSet<u64>,
    handlers: HashMap<String, UpgradeHandler>,
    plan: Option<Plan>,
    done: BTreeMap<String, u64>,
    module_versions: VersionMap,
}

impl fmt::Debug for UpgradeKeeper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpgradeKeeper")
            .field("home", &self.home)
            .field("skip_heights", &self.skip_heights)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .field("plan", &self.plan)
            .field("done", &self.done)
            .field("module_versions", &self.module_versions)
            .finish()
    }
}

impl UpgradeKeeper {
    pub fn new(skip_heights: impl IntoIterator<Item = u64>, module_versions: VersionMap) -> Self {
        Self {
            home: None,
            skip_heights: skip_heights.into_iter().collect(),
            handlers: HashMap::new(),
            plan: None,
            done: BTreeMap::new(),
            module_versions,
        }
    }

    /// Node home directory; a halt for a missing handler writes the plan
    /// under `<home>/data`.
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    /// Register (or replace) the handler for the upgrade called `name`.
    pub fn set_upgrade_handler<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&Plan, VersionMap) -> Result<VersionMap, UpgradeError> + Send + Sync + 'static,
    {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    pub fn has_handler(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn is_skip_height(&self, height: u64) -> bool {
        self.skip_heights.contains(&height)
    }

    pub fn upgrade_plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Height at which `name` was applied, if it ever was.
    pub fn done_height(&self, name: &str) -> Option<u64> {
        self.done.get(name).copied()
    }

    pub fn module_version_map(&self) -> &VersionMap {
        &self.module_versions
    }

    /// Schedule `plan`, replacing any plan already pending.
    pub fn schedule_upgrade(&mut self, plan: Plan, current_height: u64) -> Result<(), UpgradeError> {
        plan.validate_basic()?;
        if plan.height <= current_height {
            return Err(UpgradeError::PlanInPast {
                name: plan.name,
                height: plan.height,
                current: current_height,
            });
        }
        if let Some(height) = self.done_height(&plan.name) {
            return Err(UpgradeError::AlreadyApplied {
                name: plan.name,
                height,
            });
        }
        if let Some(previous) = &self.plan {
            info!("replacing pending upgrade {} with {}", previous.name, plan.name);
        }
        info!("scheduled upgrade {} at height {}", plan.name, plan.height);
        self.plan = Some(plan);
        Ok(())
    }

    pub fn clear_upgrade_plan(&mut self) {
        self.plan = None;
    }

    /// Run the upgrade machinery for the block at `height`.
    pub fn begin_block(&mut self, height: u64) -> Result<(), UpgradeError> {
        let Some(plan) = self.plan.clone() else {
            return Ok(());
        };

        if !plan.should_execute(height) {
            if self.has_handler(&plan.name) {
                error!(
                    "BINARY UPDATED BEFORE TRIGGER! UPGRADE \"{}\" - in binary but not executed on chain",
                    plan.name
                );
                return Err(UpgradeError::BinaryUpdatedBeforeTrigger { name: plan.name });
            }
            return Ok(());
        }

        if self.is_skip_height(plan.height) {
            info!("UPGRADE \"{}\" SKIPPED at height: {}", plan.name, plan.height);
            self.plan = None;
            return Ok(());
        }

        if !self.has_handler(&plan.name) {
            if let Some(home) = &self.home {
                dump_upgrade_info_to_disk(home, &plan)?;
            }
            error!("UPGRADE \"{}\" NEEDED at height: {}", plan.name, plan.height);
            return Err(UpgradeError::UpgradeNeeded {
                name: plan.name,
                height: plan.height,
            });
        }

        self.apply_upgrade(height, &plan)
    }

    /// Run the handler for `plan` and record it as done at `height`.
    pub fn apply_upgrade(&mut self, height: u64, plan: &Plan) -> Result<(), UpgradeError> {
        if let Some(done) = self.done_height(&plan.name) {
            return Err(UpgradeError::AlreadyApplied {
                name: plan.name.clone(),
                height: done,
            });
        }
        let handler = self
            .handlers
            .get(&plan.name)
            .ok_or_else(|| UpgradeError::NoHandler(plan.name.clone()))?;

        let updated = handler(plan, self.module_versions.clone())?;
        self.module_versions = updated;
        self.done.insert(plan.name.clone(), height);
        self.plan = None;
        info!("applied upgrade {} at height {height}", plan.name);
        Ok(())
    }
}
