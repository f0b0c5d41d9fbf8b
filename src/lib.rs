//! Query the published IP ranges of AWS, Cloudflare, iCloud Private Relay, and
//! DigitalOcean.
//!
//! Each query loads a provider's dataset (from a local file or its published endpoint),
//! parses it into records, keeps the records matching a [Filter], and renders one line
//! per record at the requested [Verbosity].
//!
//! ```no_run
//! use cipr::{Attribute, Client, Config, FilterBuilder, IpVersion, Provider, Query, Verbosity};
//!
//! let client = Client::new(Config::default(), Default::default());
//! let query = Query {
//!     provider: Provider::Aws,
//!     ip_version: IpVersion::Ipv4,
//!     filter: FilterBuilder::new()
//!         .attribute(Attribute::Region, ["us-east-1"])
//!         .attribute(Attribute::Service, ["EBS"])
//!         .build(),
//!     verbosity: Verbosity::Mini,
//! };
//!
//! for line in cipr::run(&client, &query)? {
//!     println!("{line}");
//! }
//! # Ok::<(), cipr::Error>(())
//! ```

mod core;

/*-------------------------------------------------------------------------------------------------
  Library Interface
-------------------------------------------------------------------------------------------------*/

pub use crate::core::aws::AwsIpPrefix;
pub use crate::core::client::{Client, SourceLoader, SourceOverride};
pub use crate::core::cloudflare::CloudflareIpRange;
pub use crate::core::config::{config_file, default_config_file, Config, DataSource};
pub use crate::core::digitalocean::DigitalOceanIpRange;
pub use crate::core::errors::{Error, Result};
pub use crate::core::filter::{parse_positional_filter, Filter, FilterBuilder};
pub use crate::core::icloud::ICloudIpRange;
pub use crate::core::ip_version::IpVersion;
pub use crate::core::provider::{run, Provider, Query};
pub use crate::core::record::{Attribute, IpRangeRecord};
pub use crate::core::render::{render, Verbosity, NO_DATA};
