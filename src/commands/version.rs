//! Version command implementation

use crate::config;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("fm2pm {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!();
    println!("Defaults:");
    match config::default_local_repository() {
        Ok(path) => println!("  Local repository: {}", path.display()),
        Err(e) => println!("  Local repository: unavailable ({e})"),
    }

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
