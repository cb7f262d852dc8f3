/// Build version. `APP_VERSION` set at compile time takes precedence over the
/// package version.
pub const VERSION: &str = match option_env!("APP_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Line printed for `--version`.
pub fn version_line() -> String {
    format!("Server version: {VERSION}")
}
