//! Compile-time build information.

/// Short git hash, or "unknown" outside a checkout.
pub const BUILD_COMMIT: &str = env!("VOYAGE_COMMIT");
/// UTC build date, `YYYY-MM-DD`.
pub const BUILD_DATE: &str = env!("VOYAGE_BUILD_DATE");

/// One-line version banner printed by `voyage --version`.
pub fn version_line() -> String {
    format!("voyage {} ({})", BUILD_DATE, BUILD_COMMIT)
}
