use std::fs;

use crate::pools::{normalize_length, PoolId};
use crate::prefstore::{PrefStore, PrefsFile};

pub fn show(store: &PrefStore) -> Result<(), String> {
    println!("{:<8} | {:<4} | {:<4} | {}", "类别", "启用", "数量", "字符集");
    println!("{}", "-".repeat(70));
    for id in PoolId::ALL {
        let enabled = store
            .get_bool(&id.enabled_key(), true)
            .map_err(|e| format!("Failed to read preferences: {}", e))?;
        let stored = store
            .get_str(&id.pool_key())
            .map_err(|e| format!("Failed to read preferences: {}", e))?;
        let (chars, source) = match stored {
            Some(s) => (s, "custom"),
            None => (id.default_chars().to_string(), "default"),
        };
        println!(
            "{:<8} | {:<4} | {:<4} | {} ({})",
            id.name(),
            if enabled { "yes" } else { "no" },
            chars.chars().count(),
            chars,
            source
        );
    }
    let length = store
        .get_length()
        .map_err(|e| format!("Failed to read preferences: {}", e))?;
    println!("\nPassword length: {}", length);
    Ok(())
}

pub fn set_pool(store: &PrefStore, category: &str, characters: &str) -> Result<(), String> {
    let id = parse_category(category)?;
    store
        .put_str(&id.pool_key(), characters)
        .map_err(|e| format!("Failed to store pool characters: {}", e))?;
    if characters.is_empty() {
        println!(
            "⚠️ Pool '{}' is now empty; generation will warn while it stays enabled.",
            id.name()
        );
    } else {
        println!(
            "Pool '{}' set to {} characters.",
            id.name(),
            characters.chars().count()
        );
    }
    Ok(())
}

pub fn set_enabled(store: &PrefStore, category: &str, enabled: bool) -> Result<(), String> {
    let id = parse_category(category)?;
    store
        .put_bool(&id.enabled_key(), enabled)
        .map_err(|e| format!("Failed to store enabled flag: {}", e))?;
    println!(
        "Pool '{}' {}.",
        id.name(),
        if enabled { "enabled" } else { "disabled" }
    );
    Ok(())
}

pub fn set_length(store: &PrefStore, length: i64) -> Result<(), String> {
    let normalized = normalize_length(length);
    store
        .put_length(normalized as i64)
        .map_err(|e| format!("Failed to store length: {}", e))?;
    if normalized as i64 != length {
        println!("Length {} clamped to {}.", length, normalized);
    } else {
        println!("Default password length set to {}.", normalized);
    }
    Ok(())
}

pub fn export_prefs(store: &PrefStore, path: &str) -> Result<(), String> {
    let prefs = store
        .export_prefs()
        .map_err(|e| format!("Failed to read preferences: {}", e))?;
    let file = fs::File::create(path)
        .map_err(|e| format!("Failed to create export file: {}", e))?;
    serde_json::to_writer_pretty(file, &prefs)
        .map_err(|e| format!("Failed to write export file: {}", e))?;
    println!("Preferences exported to {}", path);
    Ok(())
}

pub fn import_prefs(store: &PrefStore, path: &str) -> Result<(), String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read import file: {}", e))?;
    let prefs: PrefsFile = serde_json::from_str(&data)
        .map_err(|e| format!("Invalid preference file format: {}", e))?;
    store
        .import_prefs(&prefs)
        .map_err(|e| format!("Failed to store preferences: {}", e))?;
    println!("Preferences imported from {}", path);
    Ok(())
}

fn parse_category(category: &str) -> Result<PoolId, String> {
    PoolId::from_name(category).ok_or(format!(
        "Unknown pool category '{}'. Expected one of: digits, upper, lower, special",
        category
    ))
}
