use crate::core::errors::Result;
use crate::core::record::{Attribute, IpRangeRecord};
use crate::core::rows;
use log::debug;

/*-------------------------------------------------------------------------------------------------
  DigitalOcean IP Range
-------------------------------------------------------------------------------------------------*/

/// DigitalOcean IP range from the published geofeed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DigitalOceanIpRange {
    pub range: String,
    pub country: String,
    pub region: String,
    pub city: String,
    pub zip: String,
}

impl IpRangeRecord for DigitalOceanIpRange {
    const ADDRESS_LABEL: &'static str = "IP Range";

    const ATTRIBUTES: &'static [Attribute] = &[
        Attribute::Country,
        Attribute::Region,
        Attribute::City,
        Attribute::Zip,
    ];

    fn address(&self) -> &str {
        &self.range
    }

    fn attribute(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::Country => Some(&self.country),
            Attribute::Region => Some(&self.region),
            Attribute::City => Some(&self.city),
            Attribute::Zip => Some(&self.zip),
            _ => None,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Parse DigitalOcean IP Ranges
-------------------------------------------------------------------------------------------------*/

/// Parse the geofeed CSV. The feed is read permissively: short rows keep their trailing
/// attributes empty, and only rows without an address are skipped.
pub fn parse(csv: &str) -> Result<Vec<DigitalOceanIpRange>> {
    let mut ip_ranges = Vec::new();

    for row in rows::read(csv)? {
        let range = rows::field(&row, 0);
        if range.is_empty() {
            debug!("Skipping DigitalOcean row without an address: {:?}", row);
            continue;
        }

        ip_ranges.push(DigitalOceanIpRange {
            range,
            country: rows::field(&row, 1),
            region: rows::field(&row, 2),
            city: rows::field(&row, 3),
            zip: rows::field(&row, 4),
        });
    }

    Ok(ip_ranges)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn test_digitalocean_ip_ranges() -> Vec<DigitalOceanIpRange> {
        [
            ("192.168.1.0/24", "US", "California", "San Francisco", "94107"),
            ("2607:f8b0:4005:805::200e", "US", "California", "Mountain View", "94043"),
            ("10.0.0.0/8", "US", "New York", "New York", "10001"),
            ("2001:4860:4860::8888", "US", "California", "Mountain View", "94043"),
        ]
        .into_iter()
        .map(|(range, country, region, city, zip)| DigitalOceanIpRange {
            range: range.to_string(),
            country: country.to_string(),
            region: region.to_string(),
            city: city.to_string(),
            zip: zip.to_string(),
        })
        .collect()
    }

    #[test]
    fn test_parse_geofeed() {
        let ip_ranges = parse(include_str!("../../tests/data/google.csv")).unwrap();

        assert_eq!(ip_ranges.len(), 5);
        assert_eq!(ip_ranges[..4], test_digitalocean_ip_ranges()[..]);
    }

    #[test]
    fn test_parse_short_row_keeps_empty_attributes() {
        let ip_ranges = parse("172.16.0.0/12,NL\n").unwrap();

        assert_eq!(ip_ranges.len(), 1);
        assert_eq!(ip_ranges[0].country, "NL");
        assert_eq!(ip_ranges[0].region, "");
        assert_eq!(ip_ranges[0].zip, "");
    }

    #[test]
    fn test_parse_skips_rows_without_address() {
        let ip_ranges = parse(",DE,Berlin,Berlin,10115\n").unwrap();
        assert!(ip_ranges.is_empty());
    }
}
