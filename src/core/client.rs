use crate::core::config::{Config, DataSource};
use crate::core::errors::{Error, Result};
use log::info;
use std::fs;
use std::path::Path;

/*-------------------------------------------------------------------------------------------------
  Source Loader
-------------------------------------------------------------------------------------------------*/

/// Provides the raw text of a published IP ranges dataset.
pub trait SourceLoader {
    fn load(&self, source: DataSource) -> Result<String>;
}

/*-------------------------------------------------------------------------------------------------
  Source Override
-------------------------------------------------------------------------------------------------*/

/// Value of the source override that defers to the configuration.
pub const HOSTED: &str = "hosted";

/// Per-run replacement for the configured data source.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum SourceOverride {
    /// Use the endpoint or local file from the configuration.
    #[default]
    Hosted,
    /// Fetch every dataset from this URL.
    Url(String),
    /// Read every dataset from this file.
    File(String),
}

impl SourceOverride {
    /// Interpret a `--source` value: `hosted` (or blank) uses the configuration, values
    /// starting with `http://` or `https://` are URLs, and anything else is a file path.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(HOSTED) {
            SourceOverride::Hosted
        } else if value.starts_with("https://") || value.starts_with("http://") {
            SourceOverride::Url(value.to_string())
        } else {
            SourceOverride::File(value.to_string())
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Client
-------------------------------------------------------------------------------------------------*/

/// A client for retrieving published IP ranges from the configured local file, when
/// set, or from the configured endpoint URL.
///
/// ```
/// use cipr::{Client, Config, SourceOverride};
///
/// let client = Client::new(Config::default(), SourceOverride::Hosted);
/// assert_eq!(client.config().aws_endpoint, "https://ip-ranges.amazonaws.com/ip-ranges.json");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Client {
    config: Config,
    source_override: SourceOverride,
}

/*--------------------------------------------------------------------------------------
  Client Implementation
--------------------------------------------------------------------------------------*/

impl Client {
    pub fn new(config: Config, source_override: SourceOverride) -> Self {
        Self {
            config,
            source_override,
        }
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn source_override(&self) -> &SourceOverride {
        &self.source_override
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    /// Get the raw dataset from the configured local file or endpoint URL.
    fn get_configured(&self, source: DataSource) -> Result<String> {
        let source_config = self.config.source(source);

        if !source_config.local_file.is_empty() {
            get_from_file(source_config.local_file)
        } else if !source_config.endpoint.is_empty() {
            get_from_url(source_config.endpoint)
        } else {
            Err(format!(
                "No endpoint URL or local file configured for `{source}`; set \
                 `{source}_endpoint` or `{source}_local_file` in the config file"
            )
            .into())
        }
    }
}

impl SourceLoader for Client {
    fn load(&self, source: DataSource) -> Result<String> {
        match &self.source_override {
            SourceOverride::Hosted => self.get_configured(source),
            SourceOverride::Url(url) => get_from_url(url),
            SourceOverride::File(path) => get_from_file(path),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

/// Read a dataset from a local file.
fn get_from_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    info!("Fetching IP ranges from local file: {:?}", path);

    fs::read_to_string(path).map_err(|error| {
        format!("Error reading local file `{}`: {error}", path.display()).into()
    })
}

/// Fetch a dataset from a URL with a single blocking GET request.
fn get_from_url(url: &str) -> Result<String> {
    info!("Fetching IP ranges from endpoint: {}", url);

    reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|error| Error::from(format!("Error fetching from endpoint `{url}`: {error}")))
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
