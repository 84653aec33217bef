//! Stamps the binary with the commit and date it was built from.
//!
//! Both values are exported as `rustc-env` variables and read with `env!` in
//! `src/build_info.rs`. CI may pin them through `VOYAGE_COMMIT` and
//! `VOYAGE_BUILD_DATE`.

use std::env;
use std::process::Command;

fn git_short_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    let hash = hash.trim();
    (!hash.is_empty()).then(|| hash.to_owned())
}

fn main() {
    let commit = env::var("VOYAGE_COMMIT")
        .ok()
        .or_else(git_short_hash)
        .unwrap_or_else(|| "unknown".to_owned());
    let date = env::var("VOYAGE_BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().date_naive().to_string());

    println!("cargo:rustc-env=VOYAGE_COMMIT={commit}");
    println!("cargo:rustc-env=VOYAGE_BUILD_DATE={date}");

    for watched in [".git/HEAD", ".git/refs/heads"] {
        println!("cargo:rerun-if-changed={watched}");
    }
    println!("cargo:rerun-if-env-changed=VOYAGE_COMMIT");
    println!("cargo:rerun-if-env-changed=VOYAGE_BUILD_DATE");
}
