use crate::cli::args::{Args, AwsArgs, Command, IpVersionArgs, LocationArgs};
use cipr::{
    Attribute, Client, Config, Filter, FilterBuilder, IpVersion, Provider, Query, Result,
    SourceOverride, Verbosity,
};

/*-------------------------------------------------------------------------------------------------
  Core functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Build the data source client from CLI arguments
--------------------------------------------------------------------------------------*/

/// Load the config file named by `--config`, or the default config file (creating it
/// when missing), and apply the `--source` override.
pub fn build_client(args: &Args) -> Result<Client> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_create(cipr::config_file()?)?,
    };

    Ok(Client::new(config, SourceOverride::parse(&args.source)))
}

/*--------------------------------------------------------------------------------------
  Output verbosity from CLI arguments
--------------------------------------------------------------------------------------*/

pub fn verbosity(args: &Args) -> Verbosity {
    match (&args.verbose_mode, args.full) {
        (Some(mode), _) => Verbosity::parse(mode),
        (None, true) => Verbosity::Full,
        (None, false) => Verbosity::None,
    }
}

/*--------------------------------------------------------------------------------------
  Build queries from CLI arguments
--------------------------------------------------------------------------------------*/

/// One query per IP version pass of the selected provider.
pub fn build_queries(args: &Args) -> Result<Vec<Query>> {
    let (provider, ip_version, filter) = build_filter(&args.command)?;
    let verbosity = verbosity(args);

    Ok(provider
        .passes(ip_version)
        .into_iter()
        .map(|ip_version| Query {
            provider,
            ip_version,
            filter: filter.clone(),
            verbosity,
        })
        .collect())
}

/// The provider, requested IP version, and attribute filter selected by a subcommand.
pub fn build_filter(command: &Command) -> Result<(Provider, IpVersion, Filter)> {
    match command {
        Command::Aws(aws) => Ok((
            Provider::Aws,
            ip_version(&aws.ip_version),
            build_aws_filter(aws)?,
        )),
        Command::Cloudflare(cloudflare) => Ok((
            Provider::Cloudflare,
            ip_version(cloudflare),
            Filter::default(),
        )),
        Command::ICloud(icloud) => Ok((
            Provider::ICloud,
            ip_version(&icloud.ip_version),
            location_filter(&icloud.location).build(),
        )),
        Command::DigitalOcean(digitalocean) => Ok((
            Provider::DigitalOcean,
            ip_version(&digitalocean.ip_version),
            location_filter(&digitalocean.location)
                .attribute(Attribute::Zip, &digitalocean.zips)
                .build(),
        )),
    }
}

fn ip_version(args: &IpVersionArgs) -> IpVersion {
    IpVersion::from_flags(args.ipv4, args.ipv6)
}

fn build_aws_filter(args: &AwsArgs) -> Result<Filter> {
    let individual_flags = !args.regions.is_empty()
        || !args.services.is_empty()
        || !args.network_border_groups.is_empty();

    match &args.filter {
        Some(_) if individual_flags => Err("`--filter` cannot be combined with \
             `--filter-region`, `--filter-service`, or `--filter-network-border-group`"
            .into()),
        Some(filter) => Ok(FilterBuilder::new()
            .positional(filter, Provider::Aws.attributes())?
            .build()),
        None => Ok(FilterBuilder::new()
            .attribute(Attribute::Region, &args.regions)
            .attribute(Attribute::Service, &args.services)
            .attribute(Attribute::NetworkBorderGroup, &args.network_border_groups)
            .build()),
    }
}

fn location_filter(args: &LocationArgs) -> FilterBuilder {
    FilterBuilder::new()
        .attribute(Attribute::Country, &args.countries)
        .attribute(Attribute::Region, &args.regions)
        .attribute(Attribute::City, &args.cities)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
