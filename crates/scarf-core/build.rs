//! Records the version of the compiler building this crate, for the
//! `runtime=` field of the user-agent.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let Ok(output) = Command::new(rustc).arg("--version").output() else {
        return;
    };
    if !output.status.success() {
        return;
    }

    // `rustc 1.82.0 (f6e511eec 2024-10-15)` -> `1.82.0`
    let text = String::from_utf8_lossy(&output.stdout);
    if let Some(version) = text.split_whitespace().nth(1) {
        println!("cargo:rustc-env=SCARF_RUSTC_VERSION={version}");
    }
}
