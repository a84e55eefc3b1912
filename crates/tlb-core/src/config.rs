use std::{env, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

/// Typed process-wide configuration, loaded once at startup and treated as
/// read-only for the process lifetime.
#[derive(Clone, Debug)]
pub struct Config {
    /// Telegram bot API token.
    pub telegram_bot_token: String,
    /// TeraBox `ndus` session cookie used to authenticate listing calls.
    pub ndus_cookie: String,

    /// Listing API base URL. Overridable so tests can point the client at a
    /// mock server.
    pub api_base: String,
    /// Hard cap for one listing request, transport included.
    pub list_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        let telegram_bot_token = env_str("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        if telegram_bot_token.trim().is_empty() {
            return Err(Error::Config(
                "TELEGRAM_BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let ndus_cookie = env_str("NDUS_COOKIE").unwrap_or_default();
        if ndus_cookie.trim().is_empty() {
            return Err(Error::Config(
                "NDUS_COOKIE environment variable is required".to_string(),
            ));
        }

        let api_base = env_str("TERABOX_API_BASE")
            .and_then(non_empty)
            .unwrap_or_else(|| "https://api.terabox.com".to_string());

        let list_timeout = Duration::from_millis(env_u64("LIST_TIMEOUT_MS").unwrap_or(10_000));

        Ok(Self {
            telegram_bot_token,
            ndus_cookie,
            api_base,
            list_timeout,
        })
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
