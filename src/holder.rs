//! Process-wide publication of the store configuration.
//!
//! A [`Holder`] is a once-settable cell with a single unset -> set
//! transition: [`Holder::install`] publishes the record, [`Holder::get`]
//! returns the shared reference, and there is no reset or update path.
//! Module-level [`install`] and [`get`] operate on the one process-wide
//! holder that consumers read.

use once_cell::sync::OnceCell;
use thiserror::Error;

use crate::config::AppConfig;

/// Error returned when publishing the configuration fails.
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("configuration is already installed")]
    AlreadyInstalled,
}

/// Once-settable slot for one immutable [`AppConfig`].
#[derive(Debug, Default)]
pub struct Holder {
    cell: OnceCell<AppConfig>,
}

impl Holder {
    pub const fn new() -> Self {
        Holder {
            cell: OnceCell::new(),
        }
    }

    /// Publish the configuration, returning the shared reference.
    ///
    /// Fails if a configuration was already installed; the first record
    /// stays in place untouched.
    pub fn install(&self, config: AppConfig) -> Result<&AppConfig, InstallError> {
        self.cell
            .try_insert(config)
            .map_err(|_| InstallError::AlreadyInstalled)
    }

    /// The installed configuration, or `None` if no install happened yet.
    ///
    /// Every call returns a reference to the same record; readers need no
    /// synchronization since nothing writes after installation.
    pub fn get(&self) -> Option<&AppConfig> {
        self.cell.get()
    }
}

static GLOBAL: Holder = Holder::new();

/// Publish the configuration process-wide.
pub fn install(config: AppConfig) -> Result<&'static AppConfig, InstallError> {
    GLOBAL.install(config)
}

/// The process-wide configuration, if installed.
pub fn get() -> Option<&'static AppConfig> {
    GLOBAL.get()
}
