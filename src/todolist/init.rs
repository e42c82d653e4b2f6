use crate::api::{TodoApi, TodoPaths};
use crate::config::TodoConfig;
use crate::error::{Result, TodoError};
use crate::persistence::PersistenceGateway;
use crate::store::fs::FileStore;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DATA_DIR_NAME: &str = ".todo";
pub const HOME_ENV: &str = "TODOLIST_HOME";

pub struct TodoContext {
    pub api: TodoApi<FileStore>,
    pub config: TodoConfig,
}

/// Walk up from cwd looking for a directory that holds a `.todo` folder.
/// Stops at the home directory or the filesystem root.
pub fn find_project_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(DATA_DIR_NAME).is_dir() {
            return Some(current);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// Resolve where the slot and config live.
///
/// `home_override` (normally `TODOLIST_HOME`) wins over everything else.
pub fn resolve_data_dir(
    cwd: &Path,
    use_global: bool,
    home_override: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = home_override {
        return Ok(dir);
    }

    if use_global {
        let proj_dirs = ProjectDirs::from("com", "todolist", "todolist").ok_or_else(|| {
            TodoError::Store("Could not determine the global data directory".to_string())
        })?;
        return Ok(proj_dirs.data_dir().to_path_buf());
    }

    Ok(find_project_root(cwd)
        .unwrap_or_else(|| cwd.to_path_buf())
        .join(DATA_DIR_NAME))
}

pub fn initialize(cwd: &Path, use_global: bool) -> Result<TodoContext> {
    let home_override = std::env::var_os(HOME_ENV).map(PathBuf::from);
    let data_dir = resolve_data_dir(cwd, use_global, home_override)?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    let config = match TodoConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "could not read config, using defaults");
            TodoConfig::default()
        }
    };

    let gateway = PersistenceGateway::new(FileStore::new(data_dir.clone()))
        .with_key(&config.slot_key)
        .with_pretty(config.pretty);
    let api = TodoApi::open(gateway, TodoPaths { data_dir });

    Ok(TodoContext { api, config })
}
