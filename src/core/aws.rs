use crate::core::errors::Result;
use crate::core::ip_version::IpVersion;
use crate::core::json;
use crate::core::record::{Attribute, IpRangeRecord};
use log::info;

/*-------------------------------------------------------------------------------------------------
  AWS IP Prefix
-------------------------------------------------------------------------------------------------*/

/// AWS IP prefix record: the prefix and the region, service, and network border group
/// it is published under. A prefix used by several services appears once per service.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AwsIpPrefix {
    /// IPv4 or IPv6 prefix.
    pub prefix: String,

    /// AWS region the prefix is associated with.
    pub region: String,

    /// AWS service that uses the prefix.
    pub service: String,

    /// Network border group the prefix is associated with.
    pub network_border_group: String,
}

impl IpRangeRecord for AwsIpPrefix {
    const ADDRESS_LABEL: &'static str = "IP Prefix";

    const ATTRIBUTES: &'static [Attribute] = &[
        Attribute::Region,
        Attribute::Service,
        Attribute::NetworkBorderGroup,
    ];

    fn address(&self) -> &str {
        &self.prefix
    }

    fn attribute(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::Region => Some(&self.region),
            Attribute::Service => Some(&self.service),
            Attribute::NetworkBorderGroup => Some(&self.network_border_group),
            _ => None,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Parse AWS IP Ranges
-------------------------------------------------------------------------------------------------*/

/// Parse the AWS IP ranges JSON and return the prefixes for the requested IP version
/// in source order. IPv4 prefixes precede IPv6 prefixes when both are requested.
pub fn parse(json: &str, ip_version: IpVersion) -> Result<Vec<AwsIpPrefix>> {
    let json_ip_ranges = json::parse(json)?;

    info!(
        "AWS IP ranges sync token: {}, created: {}",
        json_ip_ranges.sync_token, json_ip_ranges.create_date
    );

    let mut aws_ip_prefixes = Vec::new();

    if ip_version.includes_ipv4() {
        aws_ip_prefixes.extend(json_ip_ranges.prefixes.iter().map(|prefix| AwsIpPrefix {
            prefix: prefix.ip_prefix.to_string(),
            region: prefix.region.to_string(),
            service: prefix.service.to_string(),
            network_border_group: prefix.network_border_group.to_string(),
        }));
    }

    if ip_version.includes_ipv6() {
        aws_ip_prefixes.extend(json_ip_ranges.ipv6_prefixes.iter().map(|prefix| {
            AwsIpPrefix {
                prefix: prefix.ipv6_prefix.to_string(),
                region: prefix.region.to_string(),
                service: prefix.service.to_string(),
                network_border_group: prefix.network_border_group.to_string(),
            }
        }));
    }

    Ok(aws_ip_prefixes)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
