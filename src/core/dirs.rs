use std::path::PathBuf;

const APP_DIR: &str = "gitsi";
const LOG_FILE: &str = "gitsi.log";

pub fn get_cache_directory() -> PathBuf {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CACHE_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".cache")),
        "macos" => dirs::home_dir()
            .unwrap_or_default()
            .join("Library/Caches"),
        _ => dirs::cache_dir().unwrap_or_default(),
    };

    base.join(APP_DIR)
}

/// Where debug logs go unless `--log-file` says otherwise
pub fn default_log_file() -> PathBuf {
    get_cache_directory().join(LOG_FILE)
}
