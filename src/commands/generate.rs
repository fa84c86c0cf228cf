use crate::generator::{assess_password_strength, GenError, PasswordGenerator};
use crate::pools::PoolId;
use crate::prefstore::PrefStore;
use crate::setclip;

pub fn generate_password(
    store: &PrefStore,
    length: Option<i64>,
    no_digits: bool,
    no_uppercase: bool,
    no_lowercase: bool,
    no_special: bool,
    copy: bool,
) -> Result<(), String> {
    let mut generator = PasswordGenerator::new(store)
        .map_err(|e| format!("Failed to initialize generator: {}", e))?;

    // One-shot overrides, the stored enabled flags stay untouched
    if no_digits {
        generator.config_mut().set_enabled(PoolId::Digits, false);
    }
    if no_uppercase {
        generator.config_mut().set_enabled(PoolId::Upper, false);
    }
    if no_lowercase {
        generator.config_mut().set_enabled(PoolId::Lower, false);
    }
    if no_special {
        generator.config_mut().set_enabled(PoolId::Special, false);
    }

    let requested = length.unwrap_or(generator.config().length);
    match generator.generate(requested) {
        Ok(Some(password)) => {
            println!("Generated password: {}", password);
            let (rating, score, feedback) = assess_password_strength(&password);
            println!("Password strength: {} (score: {}/4)", rating, score);
            if !feedback.is_empty() {
                println!("Suggestions: {}", feedback);
            }
            if copy {
                setclip::copy_to_clipboard(&password, setclip::DEFAULT_CLEAR_SECS)
                    .map_err(|e| format!("Failed to copy to clipboard: {}", e))?;
                println!(
                    "Copied to clipboard, cleared in {} seconds if unchanged.",
                    setclip::DEFAULT_CLEAR_SECS
                );
            }
            Ok(())
        }
        Ok(None) => {
            println!("No character pool is enabled, nothing generated.");
            Ok(())
        }
        Err(GenError::EmptyPool(id)) => {
            eprintln!(
                "⚠️ Warning: character pool '{}' is enabled but empty, check the charpool preferences.",
                id.name()
            );
            Ok(())
        }
        Err(e) => Err(format!("Failed to generate password: {}", e)),
    }
}
