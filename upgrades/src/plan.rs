use {
    crate::error::UpgradeError,
    log::info,
    serde::{Deserialize, Serialize},
    std::{
        fs,
        io::ErrorKind,
        path::{Path, PathBuf},
    },
};

/// File, under `<home>/data`, recording the upgrade the node halted for.
pub const UPGRADE_INFO_FILENAME: &str = "upgrade-info.json";

/// A governance-approved upgrade, due at `height`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub height: u64,
    #[serde(default)]
    pub info: String,
}

impl Plan {
    pub fn new(name: impl Into<String>, height: u64) -> Self {
        Self {
            name: name.into(),
            height,
            info: String::new(),
        }
    }

    pub fn validate_basic(&self) -> Result<(), UpgradeError> {
        if self.name.is_empty() {
            return Err(UpgradeError::InvalidPlan("name cannot be empty".to_string()));
        }
        if self.height == 0 {
            return Err(UpgradeError::InvalidPlan("height must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Whether the plan is due at `block_height`.
    pub fn should_execute(&self, block_height: u64) -> bool {
        self.height > 0 && self.height <= block_height
    }
}

/// The upgrade name and height persisted when a node halts for an upgrade.
///
/// Read once at start-up by the next binary; an absent file means no upgrade
/// is pending.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeInfo {
    pub name: String,
    pub height: u64,
    #[serde(default)]
    pub info: String,
}

impl UpgradeInfo {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl From<&Plan> for UpgradeInfo {
    fn from(plan: &Plan) -> Self {
        Self {
            name: plan.name.clone(),
            height: plan.height,
            info: plan.info.clone(),
        }
    }
}

pub fn upgrade_info_path(home: &Path) -> PathBuf {
    home.join("data").join(UPGRADE_INFO_FILENAME)
}

pub fn read_upgrade_info_from_disk(home: &Path) -> Result<UpgradeInfo, UpgradeError> {
    let path = upgrade_info_path(home);
    match fs::read(&path) {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(UpgradeInfo::default()),
        Err(err) => Err(err.into()),
    }
}

pub fn dump_upgrade_info_to_disk(home: &Path, plan: &Plan) -> Result<(), UpgradeError> {
    let path = upgrade_info_path(home);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let bytes = serde_json::to_vec(&UpgradeInfo::from(plan))?;
    fs::write(&path, bytes)?;
    info!(
        "wrote upgrade info for {} at height {} to {}",
        plan.name,
        plan.height,
        path.display()
    );
    Ok(())
}
