use crate::core::errors::Result;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/*-------------------------------------------------------------------------------------------------
  Data Sources
-------------------------------------------------------------------------------------------------*/

/// One published IP ranges dataset. Cloudflare publishes separate IPv4 and IPv6 lists.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DataSource {
    Aws,
    CloudflareIpv4,
    CloudflareIpv6,
    ICloud,
    DigitalOcean,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Aws => write!(f, "aws"),
            DataSource::CloudflareIpv4 => write!(f, "cloudflare_ipv4"),
            DataSource::CloudflareIpv6 => write!(f, "cloudflare_ipv6"),
            DataSource::ICloud => write!(f, "icloud"),
            DataSource::DigitalOcean => write!(f, "digitalocean"),
        }
    }
}

/// Where to read one dataset from. A non-empty `local_file` takes precedence over the
/// `endpoint` URL.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SourceConfig<'c> {
    pub endpoint: &'c str,
    pub local_file: &'c str,
}

/*-------------------------------------------------------------------------------------------------
  Configuration
-------------------------------------------------------------------------------------------------*/

/// Per-dataset endpoint URLs and local file paths, stored as a flat TOML table.
///
/// ```toml
/// aws_endpoint = "https://ip-ranges.amazonaws.com/ip-ranges.json"
/// aws_local_file = ""
/// ```
///
/// Keys missing from the file take their default values.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    pub aws_endpoint: String,
    pub aws_local_file: String,
    pub cloudflare_ipv4_endpoint: String,
    pub cloudflare_ipv4_local_file: String,
    pub cloudflare_ipv6_endpoint: String,
    pub cloudflare_ipv6_local_file: String,
    pub icloud_endpoint: String,
    pub icloud_local_file: String,
    pub digitalocean_endpoint: String,
    pub digitalocean_local_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            aws_endpoint: "https://ip-ranges.amazonaws.com/ip-ranges.json".to_string(),
            aws_local_file: String::new(),
            cloudflare_ipv4_endpoint: "https://www.cloudflare.com/ips-v4/".to_string(),
            cloudflare_ipv4_local_file: String::new(),
            cloudflare_ipv6_endpoint: "https://www.cloudflare.com/ips-v6/".to_string(),
            cloudflare_ipv6_local_file: String::new(),
            icloud_endpoint: "https://mask-api.icloud.com/egress-ip-ranges.csv".to_string(),
            icloud_local_file: String::new(),
            digitalocean_endpoint: "https://digitalocean.com/geo/google.csv".to_string(),
            digitalocean_local_file: String::new(),
        }
    }
}

impl Config {
    /// The endpoint and local file configured for a dataset.
    pub fn source(&self, source: DataSource) -> SourceConfig<'_> {
        let (endpoint, local_file) = match source {
            DataSource::Aws => (&self.aws_endpoint, &self.aws_local_file),
            DataSource::CloudflareIpv4 => (
                &self.cloudflare_ipv4_endpoint,
                &self.cloudflare_ipv4_local_file,
            ),
            DataSource::CloudflareIpv6 => (
                &self.cloudflare_ipv6_endpoint,
                &self.cloudflare_ipv6_local_file,
            ),
            DataSource::ICloud => (&self.icloud_endpoint, &self.icloud_local_file),
            DataSource::DigitalOcean => {
                (&self.digitalocean_endpoint, &self.digitalocean_local_file)
            }
        };

        SourceConfig {
            endpoint: endpoint.trim(),
            local_file: local_file.trim(),
        }
    }

    /*-------------------------------------------------------------------------
      Load and Save
    -------------------------------------------------------------------------*/

    /// Parse a configuration from TOML text.
    pub fn parse(toml: &str) -> Result<Self> {
        toml::from_str(toml).map_err(|error| format!("Invalid configuration: {error}").into())
    }

    /// Load the configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let toml = fs::read_to_string(path).map_err(|error| {
            format!("Failed to read config file `{}`: {error}", path.display())
        })?;

        info!("Loaded configuration from: {:?}", path);
        Self::parse(&toml)
    }

    /// Load the configuration from a TOML file, first writing the default
    /// configuration to the file when it does not exist.
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found; creating default: {:?}", path);
            Config::default().save(path)?;
        }

        Self::load(path)
    }

    /// Write the configuration to a TOML file, creating parent directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, toml::to_string(self)?).map_err(|error| {
            format!("Failed to write config file `{}`: {error}", path.display()).into()
        })
    }
}

/*-------------------------------------------------------------------------------------------------
  Config File Location
-------------------------------------------------------------------------------------------------*/

/// Environment variable overriding the default config file path.
pub const CONFIG_ENV_VAR: &str = "CIPR_CONFIG";

/// Default config file path: `${HOME}/.config/cipr/cipr.toml`.
pub fn default_config_file() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or("Unable to determine the home directory")?;
    Ok(home_dir.join(".config").join("cipr").join("cipr.toml"))
}

/// Config file path from the `CIPR_CONFIG` environment variable when set, otherwise
/// the default path.
pub fn config_file() -> Result<PathBuf> {
    match env::var(CONFIG_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => {
            info!("Using {}: {}", CONFIG_ENV_VAR, value);
            Ok(PathBuf::from(value))
        }
        Ok(_) => default_config_file(),
        Err(env::VarError::NotPresent) => default_config_file(),
        Err(error) => {
            warn!("Invalid {}: {}", CONFIG_ENV_VAR, error);
            default_config_file()
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::log_error;
    use test_log::test;

    #[test]
    fn test_default_sources() {
        let config = Config::default();

        assert_eq!(
            config.source(DataSource::Aws),
            SourceConfig {
                endpoint: "https://ip-ranges.amazonaws.com/ip-ranges.json",
                local_file: "",
            }
        );
        assert_eq!(
            config.source(DataSource::CloudflareIpv6).endpoint,
            "https://www.cloudflare.com/ips-v6/"
        );
        assert_eq!(
            config.source(DataSource::DigitalOcean).endpoint,
            "https://digitalocean.com/geo/google.csv"
        );
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config = Config::parse(
            r#"
            icloud_local_file = "/tmp/egress-ip-ranges.csv"
            aws_endpoint = ""
            "#,
        )
        .unwrap();

        assert_eq!(
            config.source(DataSource::ICloud),
            SourceConfig {
                endpoint: "https://mask-api.icloud.com/egress-ip-ranges.csv",
                local_file: "/tmp/egress-ip-ranges.csv",
            }
        );
        assert_eq!(config.source(DataSource::Aws).endpoint, "");
        assert_eq!(
            config.source(DataSource::CloudflareIpv4),
            Config::default().source(DataSource::CloudflareIpv4)
        );
    }

    #[test]
    fn test_parse_invalid_config() {
        assert!(Config::parse("aws_endpoint = [").is_err());
    }

    #[test]
    fn test_load_or_create_writes_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cipr.toml");

        let config = Config::load_or_create(&path).inspect_err(log_error).unwrap();

        assert!(path.exists());
        assert_eq!(config, Config::default());
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cipr.toml");
        fs::write(&path, "aws_local_file = \"ip-ranges.json\"\n").unwrap();

        let config = Config::load_or_create(&path).unwrap();

        assert_eq!(config.source(DataSource::Aws).local_file, "ip-ranges.json");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(dir.path().join("missing.toml")).is_err());
    }
}
