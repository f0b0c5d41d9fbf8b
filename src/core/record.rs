use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Attribute
-------------------------------------------------------------------------------------------------*/

/// Filterable attribute of an IP range record.
#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Attribute {
    Region,
    Service,
    NetworkBorderGroup,
    Country,
    City,
    Zip,
}

impl Attribute {
    /// Label used for the attribute in `full` verbosity output.
    pub fn label(&self) -> &'static str {
        match self {
            Attribute::Region => "Region",
            Attribute::Service => "Service",
            Attribute::NetworkBorderGroup => "Network Border Group",
            Attribute::Country => "Country",
            Attribute::City => "City",
            Attribute::Zip => "ZIP",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/*-------------------------------------------------------------------------------------------------
  IP Range Record
-------------------------------------------------------------------------------------------------*/

/// Common access to the address and attributes of one provider's IP range record.
///
/// The filter engine and renderer are written once against this trait; each provider
/// declares its attributes in the order they are rendered.
pub trait IpRangeRecord {
    /// Label for the address in `full` verbosity output.
    const ADDRESS_LABEL: &'static str;

    /// Attributes carried by the record, in declared order.
    const ATTRIBUTES: &'static [Attribute];

    /// CIDR prefix or single address.
    fn address(&self) -> &str;

    /// Value of an attribute, or `None` when the record type does not carry it.
    fn attribute(&self, attribute: Attribute) -> Option<&str>;

    /// Attribute values in declared order.
    fn attribute_values(&self) -> Vec<&str> {
        Self::ATTRIBUTES
            .iter()
            .map(|attribute| self.attribute(*attribute).unwrap_or_default())
            .collect()
    }
}
