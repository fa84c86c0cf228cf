//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-02
// Version : 0.1.0
// License : Mulan PSL v2
//
// Character pools

use rand::Rng;
use rand::seq::SliceRandom;

/// 字符池类别，固定枚举顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolId {
    Digits,
    Upper,
    Lower,
    Special,
}

impl PoolId {
    /// Enumeration order used everywhere pools are listed.
    pub const ALL: [PoolId; 4] = [PoolId::Digits, PoolId::Upper, PoolId::Lower, PoolId::Special];

    pub fn name(&self) -> &'static str {
        match self {
            PoolId::Digits => "digits",
            PoolId::Upper => "upper",
            PoolId::Lower => "lower",
            PoolId::Special => "special",
        }
    }

    /// Preference key holding the pool character string
    pub fn pool_key(&self) -> String {
        format!("charpool.{}", self.name())
    }

    /// Preference key holding the enabled flag
    pub fn enabled_key(&self) -> String {
        format!("enabled.{}", self.name())
    }

    pub fn from_name(name: &str) -> Option<PoolId> {
        match name.trim().to_lowercase().as_str() {
            "digits" | "digit" => Some(PoolId::Digits),
            "upper" | "uppercase" => Some(PoolId::Upper),
            "lower" | "lowercase" => Some(PoolId::Lower),
            "special" => Some(PoolId::Special),
            _ => None,
        }
    }

    pub fn from_pool_key(key: &str) -> Option<PoolId> {
        PoolId::from_name(key.strip_prefix("charpool.")?)
    }

    /// 默认字符集
    pub fn default_chars(&self) -> &'static str {
        match self {
            PoolId::Digits => "0123456789",
            PoolId::Upper => "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            PoolId::Lower => "abcdefghijklmnopqrstuvwxyz",
            PoolId::Special => "!@#$%^&*()_+-=[]{}|;:,.<>?~",
        }
    }
}

/// An ordered character pool. Order and duplicates are kept exactly as
/// configured, no deduplication and no printability filtering.
#[derive(Debug, Clone)]
pub struct CharPool {
    chars: Vec<char>,
}

impl CharPool {
    pub fn from_chars(s: &str) -> Self {
        CharPool { chars: s.chars().collect() }
    }

    pub fn default_for(id: PoolId) -> Self {
        CharPool::from_chars(id.default_chars())
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Uniform pick with the caller's random source, None when empty.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Option<char> {
        self.chars.choose(rng).copied()
    }
}

/// Clamp a requested length into the supported range [4, 256].
/// Negative input counts by its absolute value, never an error.
pub fn normalize_length(requested: i64) -> usize {
    let length = requested.unsigned_abs().min(256);
    length.max(4) as usize
}

/// 可打印字符检查
///
/// Used by the `check` command to inspect configured pools. Generation
/// itself never filters on printability.
pub fn is_printable_char(c: char) -> bool {
    !c.is_control() && !('\u{FFF0}'..='\u{FFFF}').contains(&c)
}
