//! Web Storage (`localStorage` / `sessionStorage`) of the current page

use crate::codec::{data, Data};
use crate::driver::WebDriver;
use crate::error::Result;
use crate::wire::Command;

/// Which storage area to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Local,
    Session,
}

struct Endpoints {
    get: Command,
    set: Command,
    remove: Command,
    keys: Command,
    clear: Command,
    size: Command,
}

static LOCAL: Endpoints = Endpoints {
    get: Command::GET_LOCAL_STORAGE_ITEM,
    set: Command::SET_LOCAL_STORAGE_ITEM,
    remove: Command::REMOVE_LOCAL_STORAGE_ITEM,
    keys: Command::GET_LOCAL_STORAGE_KEYS,
    clear: Command::CLEAR_LOCAL_STORAGE,
    size: Command::GET_LOCAL_STORAGE_SIZE,
};

static SESSION: Endpoints = Endpoints {
    get: Command::GET_SESSION_STORAGE_ITEM,
    set: Command::SET_SESSION_STORAGE_ITEM,
    remove: Command::REMOVE_SESSION_STORAGE_ITEM,
    keys: Command::GET_SESSION_STORAGE_KEYS,
    clear: Command::CLEAR_SESSION_STORAGE,
    size: Command::GET_SESSION_STORAGE_SIZE,
};

impl StorageKind {
    fn endpoints(self) -> &'static Endpoints {
        match self {
            StorageKind::Local => &LOCAL,
            StorageKind::Session => &SESSION,
        }
    }
}

/// Key/value storage of the current browsing context
#[derive(Debug, Clone, Copy)]
pub struct WebStorage<'a> {
    driver: &'a WebDriver,
    kind: StorageKind,
}

impl<'a> WebStorage<'a> {
    pub(crate) fn new(driver: &'a WebDriver, kind: StorageKind) -> Self {
        Self { driver, kind }
    }

    pub fn kind(&self) -> StorageKind {
        self.kind
    }

    /// Value stored under `key`, `None` if unset
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.driver
            .execute(&self.kind.endpoints().get, data([("key", key.into())]))?
            .into_typed()
    }

    pub fn set(&self, key: &str, value: &str) -> Result<&Self> {
        self.driver.execute(
            &self.kind.endpoints().set,
            data([("key", key.into()), ("value", value.into())]),
        )?;
        Ok(self)
    }

    pub fn remove(&self, key: &str) -> Result<&Self> {
        self.driver
            .execute(&self.kind.endpoints().remove, data([("key", key.into())]))?;
        Ok(self)
    }

    pub fn keys(&self) -> Result<Vec<String>> {
        self.driver
            .execute(&self.kind.endpoints().keys, Data::new())?
            .into_typed()
    }

    pub fn clear(&self) -> Result<&Self> {
        self.driver
            .execute(&self.kind.endpoints().clear, Data::new())?;
        Ok(self)
    }

    /// Number of stored items
    pub fn size(&self) -> Result<usize> {
        self.driver
            .execute(&self.kind.endpoints().size, Data::new())?
            .into_typed()
    }
}
