use crate::cli::Args;
use crate::error::InitError;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// One layer of settings. Fields left `None` fall through to the next layer.
///
/// Layers are merged per field with CLI > environment > config file; the
/// merge itself is pure so precedence is testable without touching the
/// process environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigLayer {
    pub url: Option<String>,
    pub port: Option<String>,
    pub token: Option<String>,
    pub capacity: Option<String>,
}

impl ConfigLayer {
    /// Settings given on the command line. A flag wins over the matching
    /// positional argument.
    pub fn from_args(args: &Args) -> Self {
        Self {
            url: args.url.clone().or_else(|| args.url_arg.clone()),
            port: args.port.clone().or_else(|| args.port_arg.clone()),
            token: args.token.clone().or_else(|| args.token_arg.clone()),
            capacity: args.capacity.clone().or_else(|| args.capacity_arg.clone()),
        }
    }

    /// Settings from the environment. Empty variables count as unset.
    pub fn from_env() -> Self {
        Self {
            url: env_first(&["GARAGE_URL", "API_URL"]),
            port: env_first(&["GARAGE_PORT", "API_PORT"]),
            token: env_first(&["GARAGE_TOKEN", "TOKEN"]),
            capacity: env_first(&["GARAGE_CAPACITY", "CAPACITY"]),
        }
    }

    /// Settings from the `[admin]` table of a Garage config file. A missing
    /// or unparseable file behaves as an empty layer. Capacity is never
    /// read from the file.
    pub fn from_file(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!("Config file {:?} not read: {}", path, err);
                return Self::default();
            }
        };
        let parsed: GarageConfigFile = match toml::from_str(&raw) {
            Ok(parsed) => parsed,
            Err(err) => {
                debug!("Config file {:?} not parsed: {}", path, err);
                return Self::default();
            }
        };
        let admin = parsed.admin;
        Self {
            url: admin.url,
            port: admin.port.map(|p| p.into_string()),
            token: admin.admin_token.or(admin.token),
            capacity: None,
        }
    }

    /// Fill any unset field from `fallback`.
    pub fn or(self, fallback: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            url: self.url.or(fallback.url),
            port: self.port.or(fallback.port),
            token: self.token.or(fallback.token),
            capacity: self.capacity.or(fallback.capacity),
        }
    }
}

fn env_first(names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
}

#[derive(Debug, Default, Deserialize)]
struct GarageConfigFile {
    #[serde(default)]
    admin: AdminSection,
}

#[derive(Debug, Default, Deserialize)]
struct AdminSection {
    url: Option<String>,
    port: Option<PortValue>,
    admin_token: Option<String>,
    token: Option<String>,
}

/// Garage config files write the port as an integer, but operators passing
/// one through CLI or env give a string. Accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PortValue {
    Num(u16),
    Str(String),
}

impl PortValue {
    fn into_string(self) -> String {
        match self {
            PortValue::Num(n) => n.to_string(),
            PortValue::Str(s) => s,
        }
    }
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Admin API base URL, scheme and port included.
    pub base_url: String,
    /// Optional bearer token for the admin API.
    pub token: Option<String>,
    /// Capacity assigned uniformly to every node, in bytes.
    pub capacity_bytes: u64,
}

impl RuntimeConfig {
    /// Resolve the full configuration for this invocation:
    /// CLI > environment > config file, per field.
    pub fn resolve(args: &Args) -> Result<Self, InitError> {
        let merged = ConfigLayer::from_args(args)
            .or(ConfigLayer::from_env())
            .or(ConfigLayer::from_file(&args.config_file));
        Self::from_layer(merged)
    }

    /// Validate a merged layer into usable settings.
    pub fn from_layer(layer: ConfigLayer) -> Result<Self, InitError> {
        let url = layer.url.ok_or_else(|| {
            InitError::ConfigMissing(
                "No URL/port provided. Provide via CLI, env vars, or the config file".to_string(),
            )
        })?;
        let capacity = layer.capacity.ok_or_else(|| {
            InitError::ConfigMissing("No capacity provided. Provide via CLI or env vars".to_string())
        })?;

        Ok(Self {
            base_url: assemble_url(&url, layer.port.as_deref()),
            token: layer.token,
            capacity_bytes: parse_capacity(&capacity)?,
        })
    }
}

/// Normalize a URL for the admin API: default the scheme to `http`,
/// override the port when one was resolved, default the path to `/`.
pub fn assemble_url(url: &str, port: Option<&str>) -> String {
    let with_scheme = if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{url}")
    };

    let (scheme, rest) = match with_scheme.split_once("://") {
        Some((scheme, rest)) => (scheme, rest),
        None => ("http", with_scheme.as_str()),
    };
    let (authority, path) = match rest.split_once('/') {
        Some((authority, path)) => (authority, format!("/{path}")),
        None => (rest, "/".to_string()),
    };

    let authority = match port {
        Some(port) => {
            let host = authority.split(':').next().unwrap_or(authority);
            format!("{host}:{port}")
        }
        None => authority.to_string(),
    };

    format!("{scheme}://{authority}{path}")
}

/// Parse a capacity string into bytes.
///
/// Accepts a number optionally followed by a unit K/M/G/T/P
/// (case-insensitive) and an optional trailing `B`, using binary (1024)
/// multiples: `"1K"` is 1024, `"1.5G"` is 1610612736.
pub fn parse_capacity(s: &str) -> Result<u64, InitError> {
    let invalid = |reason: &str| InitError::InvalidCapacity {
        value: s.to_string(),
        reason: reason.to_string(),
    };

    let mut body = s.trim();
    if let Some(stripped) = body.strip_suffix(['b', 'B']) {
        body = stripped;
    }

    let (num_str, unit) = match body.chars().last() {
        Some(c) if c.is_ascii_alphabetic() => {
            (body[..body.len() - 1].trim_end(), Some(c.to_ascii_uppercase()))
        }
        Some(_) => (body, None),
        None => return Err(invalid("empty capacity")),
    };

    // Digits with an optional fractional part only. Rejects signs and
    // exponents that f64 parsing would otherwise let through.
    let numeric_ok = match num_str.split_once('.') {
        None => !num_str.is_empty() && num_str.bytes().all(|b| b.is_ascii_digit()),
        Some((int, frac)) => {
            !int.is_empty()
                && !frac.is_empty()
                && int.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
    };
    if !numeric_ok {
        return Err(invalid(
            "expected a number optionally followed by unit K/M/G/T/P",
        ));
    }
    let value: f64 = num_str
        .parse()
        .map_err(|_| invalid("invalid numeric value"))?;

    let mult: u64 = match unit {
        None => 1,
        Some('K') => 1 << 10,
        Some('M') => 1 << 20,
        Some('G') => 1 << 30,
        Some('T') => 1 << 40,
        Some('P') => 1 << 50,
        Some(_) => return Err(invalid("unit must be one of K/M/G/T/P")),
    };

    Ok((value * mult as f64) as u64)
}
