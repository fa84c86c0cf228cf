use crate::history::PasswordHistory;
use crate::prefstore::PrefStore;

pub fn show_history(store: &PrefStore) -> Result<(), String> {
    let entries = store
        .load_history()
        .map_err(|e| format!("Failed to load history: {}", e))?;
    let history = PasswordHistory::from_entries(entries);

    if history.is_empty() {
        println!("No passwords generated yet.");
        return Ok(());
    }

    println!("{:<4} | {:<19} | {}", "序号", "创建时间", "密码");
    println!("{}", "-".repeat(60));
    for (i, entry) in history.iter().enumerate() {
        println!(
            "{:<4} | {:<19} | {}",
            i,
            entry.created_at.format("%Y-%m-%d %H:%M:%S"),
            entry.password
        );
    }

    Ok(())
}

pub fn reset_history(store: &PrefStore) -> Result<(), String> {
    store
        .clear_history()
        .map_err(|e| format!("Failed to clear history: {}", e))?;
    println!("Password history cleared.");
    Ok(())
}
