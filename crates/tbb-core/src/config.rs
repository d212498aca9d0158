use std::{env, fs, path::Path, time::Duration};

/// Typed configuration, loaded from the process environment.
///
/// The bot token is deliberately optional: its absence degrades every
/// oracle/delivery call to a reported failure instead of crashing the
/// process. Only the polling loop, which cannot function without it,
/// treats the missing token as a configuration error.
#[derive(Clone, Debug)]
pub struct Config {
    pub bot_token: Option<String>,

    /// Bounded wait applied to each outbound Telegram call.
    pub api_timeout: Duration,
}

impl Config {
    pub fn load() -> Self {
        load_dotenv_if_present(Path::new(".env"));

        let bot_token = env_str("TELEGRAM_BOT_TOKEN").and_then(non_empty);
        let api_timeout =
            Duration::from_millis(env_u64("TELEGRAM_API_TIMEOUT_MS").unwrap_or(30_000));

        Self {
            bot_token,
            api_timeout,
        }
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let Some((key, val)) = parse_env_line(raw) else {
            continue;
        };
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_env_line(raw: &str) -> Option<(String, String)> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (k, v) = line.split_once('=')?;
    let key = k.trim();
    if key.is_empty() {
        return None;
    }

    let mut val = v.trim().to_string();
    // Strip optional surrounding quotes.
    if val.len() >= 2
        && ((val.starts_with('"') && val.ends_with('"'))
            || (val.starts_with('\'') && val.ends_with('\'')))
    {
        val = val[1..val.len() - 1].to_string();
    }

    Some((key.to_string(), val))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_lines_parse_with_quotes_and_comments() {
        assert_eq!(
            parse_env_line("TELEGRAM_BOT_TOKEN=123:abc"),
            Some(("TELEGRAM_BOT_TOKEN".to_string(), "123:abc".to_string()))
        );
        assert_eq!(
            parse_env_line("  KEY = \"quoted value\" "),
            Some(("KEY".to_string(), "quoted value".to_string()))
        );
        assert_eq!(
            parse_env_line("KEY='single'"),
            Some(("KEY".to_string(), "single".to_string()))
        );
        assert_eq!(parse_env_line("# comment"), None);
        assert_eq!(parse_env_line(""), None);
        assert_eq!(parse_env_line("no-equals-sign"), None);
        assert_eq!(parse_env_line("=value"), None);
    }

    #[test]
    fn blank_token_counts_as_absent() {
        assert_eq!(non_empty("   ".to_string()), None);
        assert_eq!(non_empty("tok".to_string()), Some("tok".to_string()));
    }
}
