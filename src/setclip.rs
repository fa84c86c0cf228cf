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
// Clipboard handler

use arboard::Clipboard;
use std::{env, process, thread, time::Duration};

const DAEMON_ENV: &str = "RPAWOGEN_CLIP_DAEMON";
const SECRET_ENV: &str = "RPAWOGEN_CLIP_SECRET";
const DELAY_ENV: &str = "RPAWOGEN_CLIP_DELAY";

/// Default seconds before the clipboard is cleared again.
pub const DEFAULT_CLEAR_SECS: u64 = 30;

/// Place a password on the system clipboard and spawn the clear daemon.
pub fn copy_to_clipboard(secret: &str, clear_after: u64) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = Clipboard::new()?;
    ctx.set_text(secret)?;
    spawn_clear_daemon(secret, clear_after)
}

/// Daemon entry point, checked at program start before argument parsing.
/// Returns true when this process ran as the clear daemon.
pub fn maybe_run_clear_daemon() -> Result<bool, Box<dyn std::error::Error>> {
    if env::var(DAEMON_ENV).is_err() {
        return Ok(false);
    }
    let secret = env::var(SECRET_ENV).map_err(|_| "Clipboard daemon started without a secret")?;
    let wait = env::var(DELAY_ENV)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_CLEAR_SECS);
    clear_task(&secret, wait)?;
    Ok(true)
}

// 重新启动自身作为守护进程，在延迟后清空剪贴板
fn spawn_clear_daemon(secret: &str, clear_after: u64) -> Result<(), Box<dyn std::error::Error>> {
    let exe_path = env::current_exe()?;

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let mut cmd = process::Command::new(exe_path);
        cmd.env(DAEMON_ENV, "1")
            .env(SECRET_ENV, secret)
            .env(DELAY_ENV, clear_after.to_string())
            .stderr(process::Stdio::inherit())
            .process_group(0);
        cmd.spawn()?;
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        let mut cmd = process::Command::new(exe_path);
        cmd.env(DAEMON_ENV, "1")
            .env(SECRET_ENV, secret)
            .env(DELAY_ENV, clear_after.to_string())
            .stderr(process::Stdio::inherit())
            .creation_flags(0x08000000); // CREATE_NO_WINDOW
        cmd.spawn()?;
    }

    Ok(())
}

fn clear_task(secret: &str, wait: u64) -> Result<(), Box<dyn std::error::Error>> {
    thread::sleep(Duration::from_secs(wait));

    let mut ctx = match Clipboard::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("[clip daemon] Clipboard init failed: {}", e);
            return Ok(());
        }
    };

    // Only clear when the clipboard still holds our password
    let current_content = ctx.get_text().unwrap_or_else(|_| String::new());
    if current_content == secret {
        if let Err(e) = ctx.set_text("") {
            eprintln!("[clip daemon] Failed to clear clipboard: {}", e);
        }
    }

    Ok(())
}
