//! Build script for the folder-to-playlist CLI.
//!
//! Copies the configuration template from the crate root into the user's
//! local data directory so that a freshly built binary finds a ready-to-edit
//! example next to where it expects the real `config.json`.
//!
//! # File Operations
//!
//! ## Source Location
//! The script looks for `config.example.json` in the crate root directory
//! (where Cargo.toml resides).
//!
//! ## Destination Location
//! The template is copied to the platform-specific local data directory:
//! - Linux: `~/.local/share/spofolcli/config.example.json`
//! - macOS: `~/Library/Application Support/spofolcli/config.example.json`
//! - Windows: `%LOCALAPPDATA%/spofolcli/config.example.json`
//!
//! # Error Handling Strategy
//!
//! - **Missing template**: issues a cargo warning but continues the build
//! - **Directory creation failures**: returns an error (critical)
//! - **File copy failures**: returns an error (critical)

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Re-run if the template changes
    println!("cargo:rerun-if-changed=config.example.json");

    // Where to copy FROM (crate root)
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template_path = manifest_dir.join("config.example.json");

    // Compute target dir (your local data dir) and ensure it exists
    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spofolcli");
    fs::create_dir_all(&out_dir)?; // <-- create the actual directory, not only its parent

    // Only copy if the source exists; otherwise warn instead of failing
    if template_path.is_file() {
        let contents = fs::read_to_string(&template_path)?;
        fs::write(out_dir.join("config.example.json"), contents)?;
    } else {
        println!(
            "cargo:warning=config.example.json not found at {}",
            template_path.display()
        );
    }

    Ok(())
}
