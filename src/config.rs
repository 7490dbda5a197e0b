//! Configuration loading and rule list path resolution.
//!
//! The rule lists live in a `rule/` folder beneath the install root, which is
//! the parent of the directory holding the executable. `MergeArgs` may
//! override the root or either list; relative list paths are resolved against
//! the root.
//!
//! Overrides are layered as defaults < configuration file < environment <
//! command line. Configuration files are TOML: `RULE_MERGE_CONFIG_PATH` names
//! one explicitly, otherwise `~/.rule_merge.toml`,
//! `$XDG_CONFIG_HOME/rule_merge/config.toml` and `./.rule_merge.toml` are
//! tried in that order, later files taking precedence.

use crate::cli_args::MergeArgs;
use crate::error::MergeError;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use log::debug;
use std::path::{Path, PathBuf};
use xdg::BaseDirectories;

/// Prefix of the environment variables mirroring `MergeArgs` fields.
pub const ENV_PREFIX: &str = "RULE_MERGE_";
/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "RULE_MERGE_CONFIG_PATH";
const CONFIG_STEM: &str = "rule_merge";

/// Folder beneath the install root holding the rule lists.
pub const RULE_DIR: &str = "rule";
/// Default file name of the target list.
pub const TARGET_LIST: &str = "Custom_Direct.list";
/// Default file name of the merge-source list.
pub const MERGE_LIST: &str = "Custom_Direct_Merge.list";

/// Resolved locations of the lists used by a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulePaths {
    pub target: PathBuf,
    pub merge: PathBuf,
}

impl RulePaths {
    /// Default layout beneath `root`.
    #[must_use]
    pub fn under(root: &Path) -> Self {
        let dir = root.join(RULE_DIR);
        Self {
            target: dir.join(TARGET_LIST),
            merge: dir.join(MERGE_LIST),
        }
    }

    /// Apply `args` on top of the default layout.
    ///
    /// `install_root` is only consulted when `args.root` is unset.
    ///
    /// # Errors
    ///
    /// Propagates the error from `install_root` when it is needed and fails.
    pub fn resolve<F>(args: &MergeArgs, install_root: F) -> Result<Self, MergeError>
    where
        F: FnOnce() -> Result<PathBuf, MergeError>,
    {
        let root = match &args.root {
            Some(root) => root.clone(),
            None => install_root()?,
        };
        let defaults = Self::under(&root);
        let paths = Self {
            target: args
                .target
                .as_deref()
                .map_or(defaults.target, |p| root.join(p)),
            merge: args
                .merge
                .as_deref()
                .map_or(defaults.merge, |p| root.join(p)),
        };
        debug!(
            "target list: {}, merge list: {}",
            paths.target.display(),
            paths.merge.display()
        );
        Ok(paths)
    }
}

/// Install root derived from the running executable.
///
/// # Errors
///
/// Returns [`MergeError::InstallRoot`] when the executable path is
/// unavailable and [`MergeError::NoInstallRoot`] when it has no grandparent.
pub fn install_root() -> Result<PathBuf, MergeError> {
    let exe = std::env::current_exe().map_err(MergeError::InstallRoot)?;
    match root_of(&exe) {
        Some(root) => Ok(root.to_path_buf()),
        None => Err(MergeError::NoInstallRoot(exe)),
    }
}

fn root_of(exe: &Path) -> Option<&Path> {
    exe.parent()?.parent()
}

/// Layer configuration files and `RULE_MERGE_*` environment variables
/// beneath the parsed command line.
///
/// # Errors
///
/// Returns [`MergeError::Config`] when `RULE_MERGE_CONFIG_PATH` names a
/// missing file, or a configuration source cannot be parsed or merged.
pub fn load(cli: &MergeArgs) -> Result<MergeArgs, MergeError> {
    layered(cli, &config_files()?, ENV_PREFIX)
}

fn config_files() -> Result<Vec<PathBuf>, MergeError> {
    let Some(explicit) = std::env::var_os(CONFIG_PATH_VAR) else {
        return Ok(discovered_files());
    };
    let path = PathBuf::from(explicit);
    if !path.is_file() {
        let msg = format!("config file {} not found", path.display());
        return Err(MergeError::Config(Box::new(figment::Error::from(msg))));
    }
    Ok(vec![path])
}

fn discovered_files() -> Vec<PathBuf> {
    let dotfile = format!(".{CONFIG_STEM}.toml");
    let mut paths = Vec::new();
    if let Some(home) = std::env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(&dotfile));
    }
    if let Some(path) = BaseDirectories::with_prefix(CONFIG_STEM).find_config_file("config.toml") {
        paths.push(path);
    }
    // Absolute, so figment does not search parent directories for it.
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(dotfile));
    }
    paths
}

fn layered(
    cli: &MergeArgs,
    files: &[PathBuf],
    env_prefix: &str,
) -> Result<MergeArgs, MergeError> {
    let mut fig = Figment::new();
    for path in files {
        debug!("configuration candidate: {}", path.display());
        fig = fig.merge(Toml::file(path));
    }
    fig.merge(Env::prefixed(env_prefix).ignore(&["config_path"]))
        .merge(Serialized::defaults(cli))
        .extract()
        .map_err(|err| MergeError::Config(Box::new(err)))
}
