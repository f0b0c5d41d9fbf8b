use crate::core::errors::Result;
use crate::core::ip_version::IpVersion;
use crate::core::record::{Attribute, IpRangeRecord};
use log::trace;
use std::collections::BTreeMap;

/*-------------------------------------------------------------------------------------------------
  FilterBuilder
-------------------------------------------------------------------------------------------------*/

/// Builder used to construct a [Filter] object with the desired filter parameters.
///
/// ```rust
/// use cipr::{Attribute, FilterBuilder, IpVersion};
///
/// let filter = FilterBuilder::new()
///     .ip_version(IpVersion::Ipv4)
///     .attribute(Attribute::Region, ["us-east-1"])
///     .attribute(Attribute::Service, ["EBS", "S3"])
///     .build();
///
/// assert_eq!(filter.ip_version(), IpVersion::Ipv4);
/// assert_eq!(filter.values(Attribute::Service).unwrap().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct FilterBuilder {
    ip_version: IpVersion,
    attributes: BTreeMap<Attribute, Vec<String>>,
}

/*--------------------------------------------------------------------------------------
  Filter Builder Implementation
--------------------------------------------------------------------------------------*/

impl FilterBuilder {
    /// Create a new [FilterBuilder]. By default both IP versions are included and no
    /// attribute is constrained.
    pub fn new() -> Self {
        Self::default()
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Include only records of this IP version.
    pub fn ip_version(mut self, ip_version: IpVersion) -> Self {
        self.ip_version = ip_version;
        self
    }

    /// Include records whose `attribute` equals one of `values`, ignoring case. Values
    /// are trimmed and blank values are discarded; repeated calls for the same
    /// attribute add to its list of accepted values.
    pub fn attribute<I, S>(mut self, attribute: Attribute, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = values
            .into_iter()
            .map(|value| value.as_ref().trim().to_lowercase())
            .filter(|value| !value.is_empty());

        let accepted = self.attributes.entry(attribute).or_default();
        accepted.extend(values);
        if accepted.is_empty() {
            self.attributes.remove(&attribute);
        }

        self
    }

    /// Add the constraints from a positional filter string such as
    /// `"us-east-1,EBS,"`; see [parse_positional_filter].
    pub fn positional(mut self, value: &str, attributes: &[Attribute]) -> Result<Self> {
        for (attribute, value) in parse_positional_filter(value, attributes)? {
            self = self.attribute(attribute, [value]);
        }
        Ok(self)
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    /// Build the [Filter] object with the provided filter parameters.
    pub fn build(self) -> Filter {
        Filter {
            ip_version: self.ip_version,
            attributes: self.attributes,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Filter
-------------------------------------------------------------------------------------------------*/

/// Filter used to include IP range records based on their IP version and attribute
/// values. Use the [FilterBuilder] to construct a [Filter] object.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Filter {
    /// Only include records of this IP version.
    ip_version: IpVersion,

    /// Accepted (lowercase) values per constrained attribute; never empty lists.
    attributes: BTreeMap<Attribute, Vec<String>>,
}

/*--------------------------------------------------------------------------------------
  Filter Implementation
--------------------------------------------------------------------------------------*/

impl Filter {
    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    pub fn ip_version(&self) -> IpVersion {
        self.ip_version
    }

    /// Accepted values for an attribute, or `None` when it is unconstrained.
    pub fn values(&self, attribute: Attribute) -> Option<&[String]> {
        self.attributes.get(&attribute).map(Vec::as_slice)
    }

    /// A copy of this filter restricted to a different IP version.
    pub fn with_ip_version(&self, ip_version: IpVersion) -> Filter {
        Filter {
            ip_version,
            ..self.clone()
        }
    }

    /*-------------------------------------------------------------------------
      Filter Functions
    -------------------------------------------------------------------------*/

    pub(crate) fn match_ip_version<R: IpRangeRecord>(&self, record: &R) -> bool {
        self.ip_version.matches(record.address())
    }

    pub(crate) fn match_attributes<R: IpRangeRecord>(&self, record: &R) -> bool {
        self.attributes.iter().all(|(attribute, accepted)| {
            match record.attribute(*attribute) {
                Some(value) => {
                    let value = value.to_lowercase();
                    accepted.iter().any(|accepted| *accepted == value)
                }
                None => {
                    trace!("Record has no `{attribute}` attribute");
                    false
                }
            }
        })
    }

    pub(crate) fn include_record<R: IpRangeRecord>(&self, record: &R) -> bool {
        self.match_ip_version(record) && self.match_attributes(record)
    }

    /// Keep the records this filter includes, preserving their order.
    pub fn apply<I, R>(&self, records: I) -> Vec<R>
    where
        I: IntoIterator<Item = R>,
        R: IpRangeRecord,
    {
        records
            .into_iter()
            .filter(|record| self.include_record(record))
            .collect()
    }
}

/*-------------------------------------------------------------------------------------------------
  Positional Filter String
-------------------------------------------------------------------------------------------------*/

/// Pair the comma-separated segments of `value` with `attributes` by position.
///
/// Segments are trimmed and empty segments leave their attribute unconstrained, so
/// `"us-east-1,,us-east-1-atl-1"` constrains the first and third attributes only.
/// Supplying more segments than there are attributes is an error.
pub fn parse_positional_filter(
    value: &str,
    attributes: &[Attribute],
) -> Result<Vec<(Attribute, String)>> {
    let segments: Vec<&str> = value.split(',').map(str::trim).collect();

    if segments.len() > attributes.len() {
        return Err(format!(
            "Invalid filter `{value}`: expected at most {} comma-separated values ({})",
            attributes.len(),
            attributes
                .iter()
                .map(Attribute::label)
                .collect::<Vec<_>>()
                .join(", ")
        )
        .into());
    }

    Ok(attributes
        .iter()
        .zip(segments)
        .filter(|(_, segment)| !segment.is_empty())
        .map(|(attribute, segment)| (*attribute, segment.to_string()))
        .collect())
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aws::tests::{test_aws_ip_prefix, TEST_JSON};
    use crate::core::aws::{self, AwsIpPrefix};
    use crate::core::cloudflare::CloudflareIpRange;
    use crate::core::digitalocean::tests::test_digitalocean_ip_ranges;
    use crate::core::icloud::tests::test_icloud_ip_range;
    use crate::core::icloud::ICloudIpRange;

    const AWS_ATTRIBUTES: &[Attribute] = &[
        Attribute::Region,
        Attribute::Service,
        Attribute::NetworkBorderGroup,
    ];

    fn addresses<R: IpRangeRecord>(records: &[R]) -> Vec<&str> {
        records.iter().map(|record| record.address()).collect()
    }

    fn test_icloud_ip_ranges() -> Vec<ICloudIpRange> {
        vec![
            test_icloud_ip_range("2a02:26f7:f6f9:800::/54", "US", "US-NY", "New York"),
            test_icloud_ip_range("2606:54c0:a620::/45", "US", "US-NY", "New York"),
            test_icloud_ip_range("104.28.129.23/32", "DE", "DE-BE", "Berlin"),
            test_icloud_ip_range("140.248.17.50/31", "DE", "DE-BE", "Berlin"),
            test_icloud_ip_range("172.224.240.128/27", "JP", "JP-13", "Tokyo"),
            test_icloud_ip_range("2a04:4e41:0030:0007::/64", "JP", "JP-13", "Tokyo"),
        ]
    }

    /*-------------------------------------------------------------------------
      Test Builder
    -------------------------------------------------------------------------*/

    #[test]
    fn test_builder_discards_blank_values() {
        let filter = FilterBuilder::new()
            .attribute(Attribute::Region, ["", "  "])
            .attribute(Attribute::City, [" Tokyo ", ""])
            .build();

        assert!(filter.values(Attribute::Region).is_none());
        assert_eq!(filter.values(Attribute::City).unwrap(), ["tokyo"]);
        assert_eq!(filter, FilterBuilder::new().attribute(Attribute::City, ["TOKYO"]).build());
    }

    #[test]
    fn test_builder_accumulates_values() {
        let filter = FilterBuilder::new()
            .attribute(Attribute::Country, ["US"])
            .attribute(Attribute::Country, ["DE"])
            .build();

        assert_eq!(filter.values(Attribute::Country).unwrap(), ["us", "de"]);
    }

    /*-------------------------------------------------------------------------
      Test Filter Semantics
    -------------------------------------------------------------------------*/

    #[test]
    fn test_empty_filter_keeps_all_records() {
        let records = aws::parse(TEST_JSON, IpVersion::Both).unwrap();
        let filtered = Filter::default().apply(records.clone());

        assert_eq!(filtered, records);
    }

    #[test]
    fn test_filter_region_and_service() {
        let records = aws::parse(TEST_JSON, IpVersion::Ipv4).unwrap();
        let filter = FilterBuilder::new()
            .attribute(Attribute::Region, ["us-east-1"])
            .attribute(Attribute::Service, ["EBS"])
            .build();

        let filtered = filter.apply(records);

        assert_eq!(
            filtered,
            vec![
                test_aws_ip_prefix("44.192.140.112/28", "us-east-1", "EBS", "us-east-1"),
                test_aws_ip_prefix("44.192.140.128/29", "us-east-1", "EBS", "us-east-1"),
                test_aws_ip_prefix("44.222.159.166/31", "us-east-1", "EBS", "us-east-1"),
                test_aws_ip_prefix("44.222.159.176/28", "us-east-1", "EBS", "us-east-1"),
            ]
        );
    }

    #[test]
    fn test_filter_ipv6_region_service_network_border_group() {
        let records = aws::parse(TEST_JSON, IpVersion::Ipv6).unwrap();
        let filter = FilterBuilder::new()
            .positional("eu-central-1,S3,eu-central-1", AWS_ATTRIBUTES)
            .unwrap()
            .build();

        let filtered = filter.apply(records);

        assert_eq!(
            addresses(&filtered),
            vec![
                "2a05:d070:4000::/40",
                "2a05:d079:4000::/40",
                "2a05:d034:4000::/40",
                "2a05:d07a:4000::/40",
                "2a05:d078:4000::/40",
                "2a05:d050:4000::/40",
            ]
        );
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let records = aws::parse(TEST_JSON, IpVersion::Both).unwrap();

        let lower = FilterBuilder::new()
            .attribute(Attribute::Region, ["us-east-1"])
            .attribute(Attribute::Service, ["ebs"])
            .build();
        let upper = FilterBuilder::new()
            .attribute(Attribute::Region, ["US-EAST-1"])
            .attribute(Attribute::Service, ["EBS"])
            .build();

        let lower_results: Vec<AwsIpPrefix> = lower.apply(records.clone());
        let upper_results: Vec<AwsIpPrefix> = upper.apply(records);

        assert_eq!(lower_results.len(), 4);
        assert_eq!(lower_results, upper_results);
    }

    #[test]
    fn test_filter_or_within_and_across_attributes() {
        let filter = FilterBuilder::new()
            .attribute(Attribute::Country, ["US", "DE", "JP"])
            .attribute(Attribute::City, ["Berlin", "Tokyo"])
            .build();

        let filtered = filter.apply(test_icloud_ip_ranges());

        assert_eq!(
            addresses(&filtered),
            vec![
                "104.28.129.23/32",
                "140.248.17.50/31",
                "172.224.240.128/27",
                "2a04:4e41:0030:0007::/64",
            ]
        );
    }

    #[test]
    fn test_filter_ip_version_prefilter() {
        let ipv4 = FilterBuilder::new()
            .ip_version(IpVersion::Ipv4)
            .attribute(Attribute::City, ["tokyo"])
            .build();
        let ipv6 = FilterBuilder::new()
            .ip_version(IpVersion::Ipv6)
            .attribute(Attribute::Country, ["us"])
            .build();

        assert_eq!(
            addresses(&ipv4.apply(test_icloud_ip_ranges())),
            vec!["172.224.240.128/27"]
        );
        assert_eq!(
            addresses(&ipv6.apply(test_icloud_ip_ranges())),
            vec!["2a02:26f7:f6f9:800::/54", "2606:54c0:a620::/45"]
        );
    }

    #[test]
    fn test_filter_zip() {
        let filter = FilterBuilder::new()
            .attribute(Attribute::Zip, ["94043"])
            .build();

        assert_eq!(
            addresses(&filter.apply(test_digitalocean_ip_ranges())),
            vec!["2607:f8b0:4005:805::200e", "2001:4860:4860::8888"]
        );
    }

    #[test]
    fn test_filter_no_matches_is_empty() {
        let filter = FilterBuilder::new()
            .attribute(Attribute::City, ["Atlantis"])
            .build();

        assert!(filter.apply(test_icloud_ip_ranges()).is_empty());
    }

    #[test]
    fn test_filter_unsupported_attribute_never_matches() {
        let filter = FilterBuilder::new()
            .attribute(Attribute::Service, ["EC2"])
            .build();
        let records = vec![CloudflareIpRange {
            range: "173.245.48.0/20".to_string(),
        }];

        assert!(filter.apply(records).is_empty());
    }

    /*-------------------------------------------------------------------------
      Test Positional Filter String
    -------------------------------------------------------------------------*/

    #[test]
    fn test_parse_positional_filter() {
        assert_eq!(
            parse_positional_filter("one,two,three", AWS_ATTRIBUTES).unwrap(),
            vec![
                (Attribute::Region, "one".to_string()),
                (Attribute::Service, "two".to_string()),
                (Attribute::NetworkBorderGroup, "three".to_string()),
            ]
        );
        assert_eq!(
            parse_positional_filter("one,two", AWS_ATTRIBUTES).unwrap(),
            vec![
                (Attribute::Region, "one".to_string()),
                (Attribute::Service, "two".to_string()),
            ]
        );
        assert_eq!(
            parse_positional_filter("single,", AWS_ATTRIBUTES).unwrap(),
            vec![(Attribute::Region, "single".to_string())]
        );
    }

    #[test]
    fn test_parse_positional_filter_empty_segments() {
        assert!(parse_positional_filter(",,", AWS_ATTRIBUTES).unwrap().is_empty());
        assert!(parse_positional_filter("", AWS_ATTRIBUTES).unwrap().is_empty());
        assert_eq!(
            parse_positional_filter(" , EBS ,", AWS_ATTRIBUTES).unwrap(),
            vec![(Attribute::Service, "EBS".to_string())]
        );
    }

    #[test]
    fn test_parse_positional_filter_too_many_segments() {
        assert!(parse_positional_filter("a,b,c,d", AWS_ATTRIBUTES).is_err());
    }
}
