use crate::pools::{is_printable_char, PoolId};
use crate::prefstore::PrefStore;

/// Inspect the configured character pools: an enabled pool must not be
/// empty, and non-printable characters usually mean a broken preference.
pub fn check_pools(store: &PrefStore) -> Result<(), String> {
    let mut problems = 0;

    for id in PoolId::ALL {
        let enabled = store
            .get_bool(&id.enabled_key(), true)
            .map_err(|e| format!("Failed to read preferences: {}", e))?;
        let pool = store
            .load_pool(id)
            .map_err(|e| format!("Failed to load pool: {}", e))?;

        if enabled && pool.is_empty() {
            println!("⚠️ {}: enabled but empty", id.name());
            problems += 1;
            continue;
        }

        let non_printable: Vec<char> = pool
            .chars()
            .iter()
            .copied()
            .filter(|c| !is_printable_char(*c))
            .collect();
        if !non_printable.is_empty() {
            println!(
                "⚠️ {}: contains non-printable characters: {:?}",
                id.name(),
                non_printable
            );
            problems += 1;
        } else {
            println!(
                "{}: ok ({} characters, {})",
                id.name(),
                pool.len(),
                if enabled { "enabled" } else { "disabled" }
            );
        }
    }

    if problems == 0 {
        println!("All character pools look good.");
    }
    Ok(())
}
