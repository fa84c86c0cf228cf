//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-03
// Version : 0.1.0
// License : Mulan PSL v2
//
// Preference store

use sled::{Db, Subscriber, Tree};
use serde::{Serialize, Deserialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use dirs::config_dir;
use bincode::serde::{decode_from_slice, encode_to_vec};
use bincode::config::standard;

use crate::history::HistoryEntry;
use crate::pools::{CharPool, PoolId};

/// Preference key holding the last-used password length.
pub const KEY_LENGTH: &str = "password.length";
/// Key prefix shared by the four character-pool preferences.
pub const CHARPOOL_PREFIX: &str = "charpool.";
/// Fallback when no length preference is stored.
pub const DEFAULT_LENGTH: i64 = 18;

#[derive(Debug)]
pub enum PrefError {
    SledError(sled::Error),
    EncodeError(bincode::error::EncodeError),
    DecodeError(bincode::error::DecodeError),
    Utf8Error(std::string::FromUtf8Error),
    ConfigDirError(String),
}

impl fmt::Display for PrefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefError::SledError(e) => write!(f, "Store error: {}", e),
            PrefError::EncodeError(e) => write!(f, "Encode error: {}", e),
            PrefError::DecodeError(e) => write!(f, "Decode error: {}", e),
            PrefError::Utf8Error(e) => write!(f, "Invalid UTF-8 in stored preference: {}", e),
            PrefError::ConfigDirError(msg) => write!(f, "Config directory error: {}", msg),
        }
    }
}

impl std::error::Error for PrefError {}

// 导出/导入的偏好文件格式
#[derive(Debug, Serialize, Deserialize)]
pub struct PoolPrefs {
    /// Configured characters, None means the built-in default set.
    pub characters: Option<String>,
    pub enabled: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PrefsFile {
    pub digits: PoolPrefs,
    pub upper: PoolPrefs,
    pub lower: PoolPrefs,
    pub special: PoolPrefs,
    pub length: i64,
}

/// Key/value preference store backed by sled. Preferences are UTF-8
/// strings, history entries are bincode encoded under monotonic keys.
pub struct PrefStore {
    db: Db,
    prefs: Tree,
    history: Tree,
}

impl PrefStore {
    const PREFS_TREE: &'static str = "prefs";
    const HISTORY_TREE: &'static str = "history";

    pub fn open(path: &Path) -> Result<Self, PrefError> {
        let db = sled::open(path).map_err(PrefError::SledError)?;
        let prefs = db.open_tree(Self::PREFS_TREE).map_err(PrefError::SledError)?;
        let history = db.open_tree(Self::HISTORY_TREE).map_err(PrefError::SledError)?;
        Ok(PrefStore { db, prefs, history })
    }

    /// Open the store under the user configuration directory.
    pub fn open_default() -> Result<Self, PrefError> {
        let dir = default_store_dir()?;
        fs::create_dir_all(&dir)
            .map_err(|e| PrefError::ConfigDirError(format!("Failed to create config directory: {}", e)))?;
        Self::open(&dir.join("prefs"))
    }

    pub fn get_str(&self, key: &str) -> Result<Option<String>, PrefError> {
        match self.prefs.get(key).map_err(PrefError::SledError)? {
            Some(value) => {
                let s = String::from_utf8(value.to_vec()).map_err(PrefError::Utf8Error)?;
                Ok(Some(s))
            }
            None => Ok(None),
        }
    }

    pub fn put_str(&self, key: &str, value: &str) -> Result<(), PrefError> {
        self.prefs.insert(key, value.as_bytes()).map_err(PrefError::SledError)?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<(), PrefError> {
        self.prefs.remove(key).map_err(PrefError::SledError)?;
        Ok(())
    }

    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool, PrefError> {
        match self.get_str(key)? {
            Some(s) => Ok(s == "true"),
            None => Ok(default),
        }
    }

    pub fn put_bool(&self, key: &str, value: bool) -> Result<(), PrefError> {
        self.put_str(key, if value { "true" } else { "false" })
    }

    /// Stored length preference, falling back to the default when the key
    /// is missing or the stored value does not parse as a number.
    pub fn get_length(&self) -> Result<i64, PrefError> {
        match self.get_str(KEY_LENGTH)? {
            Some(s) => Ok(s.trim().parse().unwrap_or(DEFAULT_LENGTH)),
            None => Ok(DEFAULT_LENGTH),
        }
    }

    pub fn put_length(&self, length: i64) -> Result<(), PrefError> {
        self.put_str(KEY_LENGTH, &length.to_string())
    }

    /// Resolve the character pool of a category: the stored string when
    /// the key is set (an explicitly empty string gives an empty pool),
    /// the built-in default set otherwise.
    pub fn load_pool(&self, id: PoolId) -> Result<CharPool, PrefError> {
        match self.get_str(&id.pool_key())? {
            Some(s) => Ok(CharPool::from_chars(&s)),
            None => Ok(CharPool::default_for(id)),
        }
    }

    /// Change notification over the four character-pool keys.
    pub fn watch_pools(&self) -> Subscriber {
        self.prefs.watch_prefix(CHARPOOL_PREFIX)
    }

    // 历史记录的持久化

    pub fn load_history(&self) -> Result<Vec<HistoryEntry>, PrefError> {
        let mut entries = Vec::new();
        for item in self.history.iter() {
            let (_key, value) = item.map_err(PrefError::SledError)?;
            let (entry, _): (HistoryEntry, usize) =
                decode_from_slice(&value, standard()).map_err(PrefError::DecodeError)?;
            entries.push(entry);
        }
        Ok(entries)
    }

    pub fn append_history(&self, entry: &HistoryEntry) -> Result<(), PrefError> {
        // Monotonic ids keep the tree in generation order
        let id = self.db.generate_id().map_err(PrefError::SledError)?;
        let data = encode_to_vec(entry, standard()).map_err(PrefError::EncodeError)?;
        self.history.insert(id.to_be_bytes(), data).map_err(PrefError::SledError)?;
        Ok(())
    }

    pub fn clear_history(&self) -> Result<(), PrefError> {
        self.history.clear().map_err(PrefError::SledError)?;
        Ok(())
    }

    // 偏好的导出与导入

    pub fn export_prefs(&self) -> Result<PrefsFile, PrefError> {
        Ok(PrefsFile {
            digits: self.pool_prefs(PoolId::Digits)?,
            upper: self.pool_prefs(PoolId::Upper)?,
            lower: self.pool_prefs(PoolId::Lower)?,
            special: self.pool_prefs(PoolId::Special)?,
            length: self.get_length()?,
        })
    }

    pub fn import_prefs(&self, prefs: &PrefsFile) -> Result<(), PrefError> {
        self.apply_pool_prefs(PoolId::Digits, &prefs.digits)?;
        self.apply_pool_prefs(PoolId::Upper, &prefs.upper)?;
        self.apply_pool_prefs(PoolId::Lower, &prefs.lower)?;
        self.apply_pool_prefs(PoolId::Special, &prefs.special)?;
        self.put_length(prefs.length)
    }

    fn pool_prefs(&self, id: PoolId) -> Result<PoolPrefs, PrefError> {
        Ok(PoolPrefs {
            characters: self.get_str(&id.pool_key())?,
            enabled: self.get_bool(&id.enabled_key(), true)?,
        })
    }

    fn apply_pool_prefs(&self, id: PoolId, prefs: &PoolPrefs) -> Result<(), PrefError> {
        match &prefs.characters {
            Some(s) => self.put_str(&id.pool_key(), s)?,
            None => self.remove(&id.pool_key())?,
        }
        self.put_bool(&id.enabled_key(), prefs.enabled)
    }
}

/// 获取配置目录
pub fn default_store_dir() -> Result<PathBuf, PrefError> {
    match config_dir() {
        Some(path) => Ok(path.join("rpawogen")),
        None => Err(PrefError::ConfigDirError(
            "Could not determine configuration directory".to_string(),
        )),
    }
}
