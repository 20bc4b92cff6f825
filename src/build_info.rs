//! Build information module
//!
//! Version and build metadata embedded by `build.rs`.

use serde::Serialize;

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build information reported by `calc_status` and the startup banner
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    /// 0 when built without the build script's metadata
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: VERSION,
            build_number: parse_build_number(option_env!("EXCHANGE_BUILD_NUMBER")),
            build_timestamp: option_env!("EXCHANGE_BUILD_TIMESTAMP").unwrap_or("unknown"),
        }
    }
}

fn parse_build_number(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("===============================================");
    eprintln!("  Exchange Calculator {} (build {})", info.version, info.build_number);
    eprintln!("  Compiled: {}", info.build_timestamp);
    eprintln!("===============================================");
}
