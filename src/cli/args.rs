use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Query the published IP ranges of AWS, Cloudflare, iCloud Private Relay, and DigitalOcean.",
    long_about = None
)]
pub struct Args {
    /// Config file [default: ~/.config/cipr/cipr.toml, or $CIPR_CONFIG when set]
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Data source: `hosted` (configured endpoint or local file), a URL, or a file path
    #[arg(long, global = true, default_value = "hosted", value_name = "SOURCE")]
    pub source: String,

    /// Output detail: none, mini, or full (exact, lowercase) [default: none]
    #[arg(long = "verbose-mode", global = true, value_name = "MODE")]
    pub verbose_mode: Option<String>,

    /// Shorthand for `--verbose-mode full`; `-v` raises the log level, not the output detail
    #[arg(long, global = true)]
    pub full: bool,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    pub command: Command,
}

/*--------------------------------------------------------------------------------------
  Provider Subcommands
--------------------------------------------------------------------------------------*/

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Amazon Web Services IP prefixes
    #[command(name = "aws")]
    Aws(AwsArgs),

    /// Cloudflare IP ranges
    #[command(name = "cloudflare")]
    Cloudflare(IpVersionArgs),

    /// iCloud Private Relay egress IP ranges
    #[command(name = "icloud")]
    ICloud(ICloudArgs),

    /// DigitalOcean IP ranges
    #[command(name = "do", alias = "digitalocean")]
    DigitalOcean(DigitalOceanArgs),
}

#[derive(ClapArgs, Debug, Default)]
pub struct IpVersionArgs {
    /// Include IPv4 ranges
    #[arg(short = '4', long)]
    pub ipv4: bool,

    /// Include IPv6 ranges
    #[arg(short = '6', long)]
    pub ipv6: bool,
}

#[derive(ClapArgs, Debug, Default)]
pub struct AwsArgs {
    #[command(flatten)]
    pub ip_version: IpVersionArgs,

    /// Positional filter: region,service,network-border-group (empty values are ignored)
    #[arg(long, value_name = "FILTER")]
    pub filter: Option<String>,

    /// Include prefixes from these AWS Regions
    #[arg(long = "filter-region", value_delimiter = ',', value_name = "REGION")]
    pub regions: Vec<String>,

    /// Include prefixes used by these AWS Services
    #[arg(long = "filter-service", value_delimiter = ',', value_name = "SERVICE")]
    pub services: Vec<String>,

    /// Include prefixes from these Network Border Groups
    #[arg(
        long = "filter-network-border-group",
        value_delimiter = ',',
        value_name = "GROUP"
    )]
    pub network_border_groups: Vec<String>,
}

#[derive(ClapArgs, Debug, Default)]
pub struct ICloudArgs {
    #[command(flatten)]
    pub ip_version: IpVersionArgs,

    #[command(flatten)]
    pub location: LocationArgs,
}

#[derive(ClapArgs, Debug, Default)]
pub struct DigitalOceanArgs {
    #[command(flatten)]
    pub ip_version: IpVersionArgs,

    #[command(flatten)]
    pub location: LocationArgs,

    /// Include ranges with these ZIP codes
    #[arg(long = "filter-zip", value_delimiter = ',', value_name = "ZIP")]
    pub zips: Vec<String>,
}

/// Geolocation filters shared by the iCloud and DigitalOcean subcommands.
#[derive(ClapArgs, Debug, Default)]
pub struct LocationArgs {
    /// Include ranges from these countries
    #[arg(long = "filter-country", value_delimiter = ',', value_name = "COUNTRY")]
    pub countries: Vec<String>,

    /// Include ranges from these regions
    #[arg(long = "filter-region", value_delimiter = ',', value_name = "REGION")]
    pub regions: Vec<String>,

    /// Include ranges from these cities
    #[arg(long = "filter-city", value_delimiter = ',', value_name = "CITY")]
    pub cities: Vec<String>,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
