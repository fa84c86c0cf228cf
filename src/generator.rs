//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use std::fmt;
use std::time::Duration;

use rand::Rng;
use rand::rngs::OsRng;
use sled::{Event, Subscriber};
use zxcvbn::zxcvbn;
use zxcvbn::Score;

use crate::history::PasswordHistory;
use crate::pools::{normalize_length, CharPool, PoolId};
use crate::prefstore::{PrefError, PrefStore};

/// Which pools take part in generation, plus the requested length.
/// Flags load from the preference store; command-line overrides only
/// change the in-memory copy.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub digits: bool,
    pub upper: bool,
    pub lower: bool,
    pub special: bool,
    pub length: i64,
}

impl GeneratorConfig {
    pub fn is_enabled(&self, id: PoolId) -> bool {
        match id {
            PoolId::Digits => self.digits,
            PoolId::Upper => self.upper,
            PoolId::Lower => self.lower,
            PoolId::Special => self.special,
        }
    }

    pub fn set_enabled(&mut self, id: PoolId, enabled: bool) {
        match id {
            PoolId::Digits => self.digits = enabled,
            PoolId::Upper => self.upper = enabled,
            PoolId::Lower => self.lower = enabled,
            PoolId::Special => self.special = enabled,
        }
    }
}

#[derive(Debug)]
pub enum GenError {
    /// A pool is enabled but its character string is empty.
    EmptyPool(PoolId),
    StoreError(PrefError),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::EmptyPool(id) => write!(
                f,
                "Character pool '{}' is enabled but empty, check the charpool preferences",
                id.name()
            ),
            GenError::StoreError(e) => write!(f, "Preference store error: {}", e),
        }
    }
}

impl std::error::Error for GenError {}

/// Host interface receiving the chosen password.
pub trait PasswordInsert {
    fn insert_password(&mut self, password: &str);
}

/// Generates random passwords from the enabled character pools and keeps
/// the history of generated passwords. The four pools reload whenever
/// their preference keys change in the store.
pub struct PasswordGenerator<'a> {
    store: &'a PrefStore,
    pools: [CharPool; 4],
    config: GeneratorConfig,
    history: PasswordHistory,
    watcher: Subscriber,
}

impl<'a> PasswordGenerator<'a> {
    pub fn new(store: &'a PrefStore) -> Result<Self, GenError> {
        // Subscribe before the initial load so no change can slip between
        let watcher = store.watch_pools();
        let pools = [
            store.load_pool(PoolId::Digits).map_err(GenError::StoreError)?,
            store.load_pool(PoolId::Upper).map_err(GenError::StoreError)?,
            store.load_pool(PoolId::Lower).map_err(GenError::StoreError)?,
            store.load_pool(PoolId::Special).map_err(GenError::StoreError)?,
        ];
        let config = GeneratorConfig {
            digits: store.get_bool(&PoolId::Digits.enabled_key(), true).map_err(GenError::StoreError)?,
            upper: store.get_bool(&PoolId::Upper.enabled_key(), true).map_err(GenError::StoreError)?,
            lower: store.get_bool(&PoolId::Lower.enabled_key(), true).map_err(GenError::StoreError)?,
            special: store.get_bool(&PoolId::Special.enabled_key(), true).map_err(GenError::StoreError)?,
            length: store.get_length().map_err(GenError::StoreError)?,
        };
        let history = PasswordHistory::from_entries(
            store.load_history().map_err(GenError::StoreError)?,
        );
        Ok(PasswordGenerator { store, pools, config, history, watcher })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut GeneratorConfig {
        &mut self.config
    }

    pub fn history(&self) -> &PasswordHistory {
        &self.history
    }

    pub fn pool(&self, id: PoolId) -> &CharPool {
        &self.pools[id as usize]
    }

    /// Drain pending preference change events and reload affected pools.
    /// Pools stay untouched between reloads.
    pub fn refresh_pools(&mut self) -> Result<(), GenError> {
        while let Ok(event) = self.watcher.next_timeout(Duration::ZERO) {
            let key = match &event {
                Event::Insert { key, .. } => key,
                Event::Remove { key } => key,
            };
            let key = String::from_utf8_lossy(key).to_string();
            if let Some(id) = PoolId::from_pool_key(&key) {
                self.pools[id as usize] =
                    self.store.load_pool(id).map_err(GenError::StoreError)?;
            }
        }
        Ok(())
    }

    /// Generate one password of the requested length.
    ///
    /// The length is normalized to [4, 256] first. Returns Ok(None) when
    /// no pool is enabled (history unchanged). An enabled pool with no
    /// characters aborts with `GenError::EmptyPool`, discarding the
    /// partial password.
    pub fn generate(&mut self, requested: i64) -> Result<Option<String>, GenError> {
        self.refresh_pools()?;

        let length = normalize_length(requested);
        self.store.put_length(length as i64).map_err(GenError::StoreError)?;
        self.config.length = length as i64;

        // Enabled pools in fixed enumeration order
        let enabled: Vec<PoolId> = PoolId::ALL
            .iter()
            .copied()
            .filter(|id| self.config.is_enabled(*id))
            .collect();
        if enabled.is_empty() {
            return Ok(None);
        }

        let mut rng = OsRng;
        let mut chars: Vec<char> = Vec::with_capacity(length);
        while chars.len() < length {
            // Pools are picked uniformly, so a two-character special pool
            // contributes as often as the full lowercase alphabet.
            let id = enabled[rng.gen_range(0..enabled.len())];
            let c = self.pools[id as usize]
                .choose(&mut rng)
                .ok_or(GenError::EmptyPool(id))?;
            chars.push(c);
        }

        let password: String = chars.into_iter().collect();
        if let Some(entry) = self.history.append(&password) {
            self.store.append_history(entry).map_err(GenError::StoreError)?;
        }
        Ok(Some(password))
    }

    /// The current password, generating one with the stored preferences
    /// when the history is still empty.
    pub fn current_or_generate(&mut self) -> Result<Option<String>, GenError> {
        if self.history.is_empty() {
            let length = self.config.length;
            self.generate(length)?;
        }
        Ok(self.history.current().map(|s| s.to_string()))
    }

    /// Deliver the current password to the host. Returns false when no
    /// pool is enabled and nothing could be delivered.
    pub fn insert_into(&mut self, target: &mut dyn PasswordInsert) -> Result<bool, GenError> {
        match self.current_or_generate()? {
            Some(password) => {
                target.insert_password(&password);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Clear the history, in memory and in the store.
    pub fn reset_history(&mut self) -> Result<(), GenError> {
        self.history.clear();
        self.store.clear_history().map_err(GenError::StoreError)
    }
}

/// zxcvbn 评分
pub fn assess_password_strength(password: &str) -> (String, u8, String) {
    let strength_result = zxcvbn(password, &[]);
    let score = strength_result.score();
    let feedback = strength_result.feedback().map_or_else(
        || String::new(),
        |f| f.suggestions().iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ")
    );

    let rating = match score {
        Score::Zero => "极弱",
        Score::One => "弱",
        Score::Two => "中等",
        Score::Three => "强",
        Score::Four => "极强",
        _ => "未知",
    }.to_string();

    (rating, score as u8, feedback)
}
