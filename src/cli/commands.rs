use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::{
    app::{get_config_dir, init_config, Config},
    constants::LOCAL_CONFIG_PATH,
    tui::format_count,
    validation::validate,
    waitlist::WaitlistStore,
};

/// Write the default configuration file
pub fn init() -> Result<bool> {
    println!("Initializing waitlist configuration...");
    let (path, created) = init_config()?;
    if created {
        println!("Created default configuration at: {}", path.display());
    } else {
        println!("Configuration already exists at: {}", path.display());
    }
    Ok(true)
}

/// Print the number of enrolled emails
pub fn show_count(store: &WaitlistStore) -> Result<bool> {
    println!("{}", store.current_count());
    Ok(true)
}

/// Print whether `candidate` is on the waitlist. Fails on an invalid address.
pub fn check_email(store: &WaitlistStore, candidate: &str) -> Result<bool> {
    let email = match validate(candidate) {
        Ok(email) => email,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red(), e);
            return Ok(false);
        }
    };

    if store.is_member(&email) {
        println!("{} {} is on the waitlist", "[OK]".green(), email);
    } else {
        println!("{} {} is not on the waitlist", "[--]".yellow(), email);
    }
    Ok(true)
}

/// Print every enrolled email in signup order
pub fn list_members(store: &WaitlistStore) -> Result<bool> {
    for email in store.members() {
        println!("{}", email);
    }
    Ok(true)
}

/// Show version information
pub fn show_version() -> Result<bool> {
    println!("waitlist v{}", env!("CARGO_PKG_VERSION"));
    println!("   Collect, validate and deduplicate email signups");
    Ok(true)
}

/// Show configuration and storage status
///
/// `config_source` is the file passed with `--config`, if any.
pub fn show_status(
    config: &Config,
    config_source: Option<&Path>,
    storage_path: Option<&Path>,
    store: &WaitlistStore,
) -> Result<bool> {
    println!("Waitlist Status:");
    println!();
    println!("  {}", describe_config_source(config_source));

    match storage_path {
        Some(path) if path.exists() => println!("  [OK] Storage: {}", path.display()),
        Some(path) => println!("  [OK] Storage: {} (not created yet)", path.display()),
        None => println!("  [OK] Storage: in memory"),
    }

    println!("  Variant: {}", config.ui.variant);
    println!("  Submit latency: {}ms", config.submission.latency_ms);
    println!("  Signups: {}", format_count(store.current_count()).as_str().green());
    println!();
    Ok(true)
}

/// Status line for the configuration files in effect
fn describe_config_source(explicit: Option<&Path>) -> String {
    if let Some(path) = explicit {
        return format!("[OK] Configuration: {} (--config)", path.display());
    }

    let mut found = Vec::new();
    match get_config_dir() {
        Ok(dir) => {
            let global = dir.join("config.toml");
            if global.exists() {
                found.push(global);
            }
        }
        Err(e) => return format!("[ERROR] Configuration: {}", e),
    }
    let local = PathBuf::from(LOCAL_CONFIG_PATH);
    if local.exists() {
        found.push(local);
    }

    if found.is_empty() {
        "[WARNING] Configuration: Not found (using defaults)".to_string()
    } else {
        let paths: Vec<String> = found.iter().map(|p| p.display().to_string()).collect();
        format!("[OK] Configuration: {}", paths.join(", "))
    }
}
