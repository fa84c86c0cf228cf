//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-05
// Version : 0.1.0
// License : Mulan PSL v2
//
// A random password generator with persistent preferences.

use clap::{Parser, Subcommand};

use rpawogen::commands;
use rpawogen::prefstore::PrefStore;
use rpawogen::setclip;

#[derive(Debug, Parser)]
#[command(name = "rpawogen")]
#[command(about = "A random password generator with persistent preferences", long_about = None)]
enum Cli {
    /// Generate a new random password
    Gen(GenArgs),

    /// Show previously generated passwords, most recent first
    History,

    /// Clear the password history
    Reset,

    /// Copy the current password to the system clipboard
    Copy(CopyArgs),

    /// Print the current password for the host application
    Insert,

    /// Inspect or change generator preferences
    Config(ConfigArgs),

    /// Check the configured character pools
    Check,
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password (defaults to the stored preference)
    #[arg(short, long)]
    length: Option<i64>,

    /// Exclude digits for this run only
    #[arg(long, default_value_t = false)]
    no_digits: bool,

    /// Exclude uppercase letters for this run only
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters for this run only
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude special characters for this run only
    #[arg(long, default_value_t = false)]
    no_special: bool,

    /// Copy the generated password to the clipboard
    #[arg(short, long, default_value_t = false)]
    copy: bool,
}

#[derive(Debug, Parser)]
struct CopyArgs {
    /// Seconds before the clipboard is cleared again
    #[arg(short = 't', long, default_value_t = setclip::DEFAULT_CLEAR_SECS)]
    clear_after: u64,
}

#[derive(Debug, Parser)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Show the current generator preferences
    Show,

    /// Set the character pool of a category (digits, upper, lower, special)
    Pool {
        category: String,
        characters: String,
    },

    /// Enable a character pool
    Enable { category: String },

    /// Disable a character pool
    Disable { category: String },

    /// Set the default password length
    Length { length: i64 },

    /// Export preferences to a JSON file
    Export { path: String },

    /// Import preferences from a JSON file
    Import { path: String },
}

fn main() -> Result<(), String> {
    // The clipboard clear daemon re-runs this binary without arguments
    if setclip::maybe_run_clear_daemon().map_err(|e| e.to_string())? {
        return Ok(());
    }

    let cli = Cli::parse();
    let store = PrefStore::open_default().map_err(|e| e.to_string())?;

    match cli {
        Cli::Gen(args) => commands::generate::generate_password(
            &store,
            args.length,
            args.no_digits,
            args.no_uppercase,
            args.no_lowercase,
            args.no_special,
            args.copy,
        ),
        Cli::History => commands::history::show_history(&store),
        Cli::Reset => commands::history::reset_history(&store),
        Cli::Copy(args) => commands::clip::copy_current(&store, args.clear_after),
        Cli::Insert => commands::insert::insert_current(&store),
        Cli::Config(args) => match args.action {
            ConfigAction::Show => commands::config::show(&store),
            ConfigAction::Pool { category, characters } => {
                commands::config::set_pool(&store, &category, &characters)
            }
            ConfigAction::Enable { category } => {
                commands::config::set_enabled(&store, &category, true)
            }
            ConfigAction::Disable { category } => {
                commands::config::set_enabled(&store, &category, false)
            }
            ConfigAction::Length { length } => commands::config::set_length(&store, length),
            ConfigAction::Export { path } => commands::config::export_prefs(&store, &path),
            ConfigAction::Import { path } => commands::config::import_prefs(&store, &path),
        },
        Cli::Check => commands::check::check_pools(&store),
    }
}
