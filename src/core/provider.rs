use crate::core::aws;
use crate::core::client::SourceLoader;
use crate::core::cloudflare::{self, CloudflareIpRange};
use crate::core::config::DataSource;
use crate::core::digitalocean;
use crate::core::errors::Result;
use crate::core::filter::Filter;
use crate::core::icloud;
use crate::core::ip_version::IpVersion;
use crate::core::record::{Attribute, IpRangeRecord};
use crate::core::render::{render, Verbosity};
use log::info;
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Provider
-------------------------------------------------------------------------------------------------*/

/// Publisher of an IP ranges dataset.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Provider {
    Aws,
    Cloudflare,
    ICloud,
    DigitalOcean,
}

impl Provider {
    /// Attributes carried by this provider's records, in rendered order.
    pub fn attributes(&self) -> &'static [Attribute] {
        match self {
            Provider::Aws => aws::AwsIpPrefix::ATTRIBUTES,
            Provider::Cloudflare => CloudflareIpRange::ATTRIBUTES,
            Provider::ICloud => icloud::ICloudIpRange::ATTRIBUTES,
            Provider::DigitalOcean => digitalocean::DigitalOceanIpRange::ATTRIBUTES,
        }
    }

    /// The IP versions queried, one pass each, for a requested IP version. iCloud is
    /// queried in a single pass; the other providers query IPv4 then IPv6.
    pub fn passes(&self, ip_version: IpVersion) -> Vec<IpVersion> {
        match self {
            Provider::ICloud => vec![ip_version],
            _ => ip_version.split(),
        }
    }

    /// Datasets to load for an IP version.
    pub fn data_sources(&self, ip_version: IpVersion) -> Vec<DataSource> {
        match self {
            Provider::Aws => vec![DataSource::Aws],
            Provider::Cloudflare => {
                let mut sources = Vec::new();
                if ip_version.includes_ipv4() {
                    sources.push(DataSource::CloudflareIpv4);
                }
                if ip_version.includes_ipv6() {
                    sources.push(DataSource::CloudflareIpv6);
                }
                sources
            }
            Provider::ICloud => vec![DataSource::ICloud],
            Provider::DigitalOcean => vec![DataSource::DigitalOcean],
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Aws => write!(f, "AWS"),
            Provider::Cloudflare => write!(f, "Cloudflare"),
            Provider::ICloud => write!(f, "iCloud Private Relay"),
            Provider::DigitalOcean => write!(f, "DigitalOcean"),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Query
-------------------------------------------------------------------------------------------------*/

/// One pass of the pipeline: a provider's dataset for one IP version, filtered and
/// rendered. The query's IP version replaces the filter's.
#[derive(Debug, Clone)]
pub struct Query {
    pub provider: Provider,
    pub ip_version: IpVersion,
    pub filter: Filter,
    pub verbosity: Verbosity,
}

/// Load, parse, filter, and render the IP ranges selected by a query.
pub fn run<L: SourceLoader + ?Sized>(loader: &L, query: &Query) -> Result<Vec<String>> {
    let filter = query.filter.with_ip_version(query.ip_version);

    info!(
        "Querying {} IP ranges ({}, verbosity {})",
        query.provider, query.ip_version, query.verbosity
    );

    match query.provider {
        Provider::Aws => {
            let json = loader.load(DataSource::Aws)?;
            let records = aws::parse(&json, query.ip_version)?;
            Ok(finish(&filter, records, query.verbosity))
        }
        Provider::Cloudflare => {
            let mut records = Vec::new();
            for source in query.provider.data_sources(query.ip_version) {
                records.extend(cloudflare::parse(&loader.load(source)?));
            }
            Ok(finish(&filter, records, query.verbosity))
        }
        Provider::ICloud => {
            let csv = loader.load(DataSource::ICloud)?;
            let records = icloud::parse(&csv)?;
            Ok(finish(&filter, records, query.verbosity))
        }
        Provider::DigitalOcean => {
            let csv = loader.load(DataSource::DigitalOcean)?;
            let records = digitalocean::parse(&csv)?;
            Ok(finish(&filter, records, query.verbosity))
        }
    }
}

fn finish<R: IpRangeRecord>(filter: &Filter, records: Vec<R>, verbosity: Verbosity) -> Vec<String> {
    let total = records.len();
    let matched = filter.apply(records);
    info!("Matched {} of {} IP ranges", matched.len(), total);

    render(&matched, verbosity)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
