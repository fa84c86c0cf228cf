use crate::generator::{GenError, PasswordGenerator};
use crate::prefstore::PrefStore;
use crate::setclip;

/// Copy the current password to the clipboard, generating one first when
/// the history is still empty.
pub fn copy_current(store: &PrefStore, clear_after: u64) -> Result<(), String> {
    let mut generator = PasswordGenerator::new(store)
        .map_err(|e| format!("Failed to initialize generator: {}", e))?;

    match generator.current_or_generate() {
        Ok(Some(password)) => {
            setclip::copy_to_clipboard(&password, clear_after)
                .map_err(|e| format!("Failed to copy to clipboard: {}", e))?;
            println!(
                "Password copied to clipboard, cleared in {} seconds if unchanged.",
                clear_after
            );
            Ok(())
        }
        Ok(None) => {
            println!("No character pool is enabled, nothing to copy.");
            Ok(())
        }
        Err(GenError::EmptyPool(id)) => {
            eprintln!(
                "⚠️ Warning: character pool '{}' is enabled but empty, check the charpool preferences.",
                id.name()
            );
            Ok(())
        }
        Err(e) => Err(format!("Failed to copy password: {}", e)),
    }
}
