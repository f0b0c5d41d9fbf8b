use crate::core::record::{Attribute, IpRangeRecord};

/*-------------------------------------------------------------------------------------------------
  Cloudflare IP Range
-------------------------------------------------------------------------------------------------*/

/// Cloudflare publishes bare CIDR lists (one for IPv4, one for IPv6) with no attributes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CloudflareIpRange {
    pub range: String,
}

impl IpRangeRecord for CloudflareIpRange {
    const ADDRESS_LABEL: &'static str = "Cloudflare IP";

    const ATTRIBUTES: &'static [Attribute] = &[];

    fn address(&self) -> &str {
        &self.range
    }

    fn attribute(&self, _attribute: Attribute) -> Option<&str> {
        None
    }
}

/*-------------------------------------------------------------------------------------------------
  Parse Cloudflare IP Ranges
-------------------------------------------------------------------------------------------------*/

/// Parse a newline-delimited list of ranges, skipping blank lines.
pub fn parse(text: &str) -> Vec<CloudflareIpRange> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| CloudflareIpRange {
            range: line.to_string(),
        })
        .collect()
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
