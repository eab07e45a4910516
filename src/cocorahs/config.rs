//! # Configuration
//!
//! Every input the reporter needs can come from several places. They are
//! resolved in priority order:
//!
//! 1. **Command line**: `--station IL-PR-1`, the precipitation argument, ...
//! 2. **Environment**: `COCORAHS_STATION`, `COCORAHS_USERNAME`, ...
//! 3. **Config file**: the `[CoCoRaHS]` section of `config.ini`.
//! 4. **Prompt**: username and password are asked for interactively.
//!
//! Steps 1–3 live here as plain functions over plain data: [`load_defaults`]
//! reads the file into a map and [`Settings`] walks the chain. Prompting is
//! left to the CLI.
//!
//! ## Config File
//!
//! The file lives at `<user config dir>/cocorahs/config.ini` (for example
//! `~/.config/cocorahs/config.ini` on Linux) unless `--config` or
//! `COCORAHS_CONFIG` names another one. A missing default file is not an
//! error; a file named explicitly must exist.
//!
//! ```ini
//! [CoCoRaHS]
//! station = IL-PR-1
//! username = observer
//! ```
//!
//! Keys are case-insensitive and `-` is treated as `_`.

use crate::error::{CocorahsError, Result};
use directories::BaseDirs;
use ini::{Ini, ParseOption};
use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Prefix for environment variable overrides (`COCORAHS_STATION`, ...).
pub const ENV_PREFIX: &str = "COCORAHS";

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV_VAR: &str = "COCORAHS_CONFIG";

/// Section of `config.ini` holding the defaults.
pub const CONFIG_SECTION: &str = "CoCoRaHS";

const APP_DIR: &str = "cocorahs";
const CONFIG_FILENAME: &str = "config.ini";

/// Default values read from the config file, keyed by option name.
pub type Defaults = BTreeMap<String, String>;

/// The per-user config file location, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.config_dir().join(APP_DIR).join(CONFIG_FILENAME))
}

/// A config file location and whether the user named it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub explicit: bool,
}

impl ConfigFile {
    /// Reads the defaults. Only the per-user default may be absent; a file
    /// named by `--config` or `COCORAHS_CONFIG` must exist.
    pub fn load(&self) -> Result<Defaults> {
        if self.explicit && !self.path.exists() {
            return Err(CocorahsError::Config {
                path: self.path.clone(),
                message: "file not found".to_string(),
            });
        }
        load_defaults(&self.path)
    }
}

/// Picks the config file: explicit flag, then `COCORAHS_CONFIG`, then the
/// per-user default.
pub fn locate_config(flag: Option<PathBuf>, env_value: Option<OsString>) -> Option<ConfigFile> {
    match flag.or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from)) {
        Some(path) => Some(ConfigFile {
            path,
            explicit: true,
        }),
        None => default_config_path().map(|path| ConfigFile {
            path,
            explicit: false,
        }),
    }
}

/// Reads the `[CoCoRaHS]` section of an INI file.
///
/// Returns an empty map when the file does not exist or has no such section.
pub fn load_defaults<P: AsRef<Path>>(path: P) -> Result<Defaults> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Defaults::new());
    }

    // Passwords may hold backslashes and quotes; read values verbatim.
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..Default::default()
    };
    let ini = Ini::load_from_file_opt(path, options).map_err(|e| CocorahsError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(ini
        .section(Some(CONFIG_SECTION))
        .map(|section| {
            section
                .iter()
                .map(|(key, value)| (normalize_key(key), value.trim().to_string()))
                .collect()
        })
        .unwrap_or_default())
}

fn non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace('-', "_")
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Flag,
    Env,
    Config,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Flag => write!(f, "command line"),
            Source::Env => write!(f, "environment"),
            Source::Config => write!(f, "config file"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub value: String,
    pub source: Source,
}

/// Flag > environment > config file, over a snapshot of the environment.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    env: HashMap<String, String>,
    defaults: Defaults,
}

impl Settings {
    pub fn new<I>(env: I, defaults: Defaults) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            env: env.into_iter().collect(),
            defaults,
        }
    }

    /// Settings over the current process environment.
    pub fn from_process_env(defaults: Defaults) -> Self {
        let env = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
        Self::new(env, defaults)
    }

    /// `station` → `COCORAHS_STATION`.
    pub fn env_var_name(option: &str) -> String {
        format!("{}_{}", ENV_PREFIX, option.to_uppercase().replace('-', "_"))
    }

    /// The highest-priority non-empty value for `option`.
    pub fn resolve(&self, option: &str, flag: Option<String>) -> Option<Resolved> {
        if let Some(value) = flag.filter(|v| non_empty(v)) {
            return Some(Resolved {
                value,
                source: Source::Flag,
            });
        }
        if let Some(value) = self.env.get(&Self::env_var_name(option)).filter(|v| non_empty(v)) {
            return Some(Resolved {
                value: value.clone(),
                source: Source::Env,
            });
        }
        self.defaults
            .get(&normalize_key(option))
            .filter(|v| non_empty(v))
            .map(|value| Resolved {
                value: value.clone(),
                source: Source::Config,
            })
    }

    /// Like [`Settings::resolve`], keeping only the value.
    pub fn value(&self, option: &str, flag: Option<String>) -> Option<String> {
        self.resolve(option, flag).map(|r| r.value)
    }
}
