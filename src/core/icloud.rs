use crate::core::errors::Result;
use crate::core::record::{Attribute, IpRangeRecord};
use crate::core::rows;
use log::debug;

/*-------------------------------------------------------------------------------------------------
  iCloud Private Relay IP Range
-------------------------------------------------------------------------------------------------*/

/// iCloud Private Relay egress range and the location it is geolocated to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ICloudIpRange {
    pub range: String,
    pub country: String,
    pub region: String,
    pub city: String,
}

impl IpRangeRecord for ICloudIpRange {
    const ADDRESS_LABEL: &'static str = "IP Range";

    const ATTRIBUTES: &'static [Attribute] =
        &[Attribute::Country, Attribute::Region, Attribute::City];

    fn address(&self) -> &str {
        &self.range
    }

    fn attribute(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::Country => Some(&self.country),
            Attribute::Region => Some(&self.region),
            Attribute::City => Some(&self.city),
            _ => None,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Parse iCloud Private Relay IP Ranges
-------------------------------------------------------------------------------------------------*/

// range, country, region, city
const MIN_FIELDS: usize = 4;

/// Parse the egress IP ranges CSV. Rows with fewer than four fields are skipped.
pub fn parse(csv: &str) -> Result<Vec<ICloudIpRange>> {
    let mut ip_ranges = Vec::new();

    for row in rows::read(csv)? {
        if row.len() < MIN_FIELDS {
            debug!("Skipping short iCloud row: {:?}", row);
            continue;
        }

        ip_ranges.push(ICloudIpRange {
            range: rows::field(&row, 0),
            country: rows::field(&row, 1),
            region: rows::field(&row, 2),
            city: rows::field(&row, 3),
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

    pub(crate) fn test_icloud_ip_range(
        range: &str,
        country: &str,
        region: &str,
        city: &str,
    ) -> ICloudIpRange {
        ICloudIpRange {
            range: range.to_string(),
            country: country.to_string(),
            region: region.to_string(),
            city: city.to_string(),
        }
    }

    #[test]
    fn test_parse_skips_short_rows() {
        let ip_ranges = parse(include_str!("../../tests/data/egress-ip-ranges.csv")).unwrap();

        assert_eq!(ip_ranges.len(), 9);
        assert!(ip_ranges
            .iter()
            .all(|ip_range| ip_range.range != "104.28.129.25/32"));
    }

    #[test]
    fn test_parse_trims_fields() {
        let ip_ranges = parse("172.225.46.64/26, JP , JP-13 , Tokyo ,\n").unwrap();

        assert_eq!(
            ip_ranges,
            vec![test_icloud_ip_range("172.225.46.64/26", "JP", "JP-13", "Tokyo")]
        );
    }

    #[test]
    fn test_parse_accepts_rows_without_trailing_field() {
        let ip_ranges = parse("104.28.129.23/32,DE,DE-BE,Berlin\n").unwrap();

        assert_eq!(
            ip_ranges,
            vec![test_icloud_ip_range("104.28.129.23/32", "DE", "DE-BE", "Berlin")]
        );
    }
}
