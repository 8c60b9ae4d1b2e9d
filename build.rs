use std::process::Command;

fn main() {
    // FIRTA_PLAN_VERSION: release builds may inject this at build time.
    // Falls back to CARGO_PKG_VERSION (from Cargo.toml) for local builds.
    let version = std::env::var("FIRTA_PLAN_VERSION")
        .unwrap_or_else(|_| std::env::var("CARGO_PKG_VERSION").unwrap_or_default());
    println!("cargo:rustc-env=FIRTA_PLAN_VERSION={version}");

    // FIRTA_PLAN_COMMIT: falls back to `git rev-parse --short HEAD`,
    // or "unknown" outside a git checkout.
    let commit = std::env::var("FIRTA_PLAN_COMMIT").unwrap_or_else(|_| {
        let output = Command::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .output();
        match output {
            Ok(o) if o.status.success() => {
                String::from_utf8_lossy(&o.stdout).trim().to_string()
            }
            _ => "unknown".to_string(),
        }
    });
    println!("cargo:rustc-env=FIRTA_PLAN_COMMIT={commit}");

    println!("cargo:rerun-if-env-changed=FIRTA_PLAN_VERSION");
    println!("cargo:rerun-if-env-changed=FIRTA_PLAN_COMMIT");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
