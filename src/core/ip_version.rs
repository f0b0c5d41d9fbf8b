use std::fmt;

/*-------------------------------------------------------------------------------------------------
  IP Version
-------------------------------------------------------------------------------------------------*/

/// IP version (IPv4, IPv6, or both) used to select the IP ranges included in a query.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum IpVersion {
    Ipv4,
    Ipv6,
    #[default]
    Both,
}

impl IpVersion {
    /// Build an [IpVersion] from a pair of include flags. Setting neither flag, or both
    /// flags, includes both IP versions.
    pub fn from_flags(ipv4: bool, ipv6: bool) -> Self {
        match (ipv4, ipv6) {
            (true, false) => IpVersion::Ipv4,
            (false, true) => IpVersion::Ipv6,
            _ => IpVersion::Both,
        }
    }

    pub fn includes_ipv4(&self) -> bool {
        match self {
            IpVersion::Ipv4 | IpVersion::Both => true,
            IpVersion::Ipv6 => false,
        }
    }

    pub fn includes_ipv6(&self) -> bool {
        match self {
            IpVersion::Ipv6 | IpVersion::Both => true,
            IpVersion::Ipv4 => false,
        }
    }

    /// Check whether a textual address belongs to this IP version. IPv4 addresses are
    /// recognized by a `.` and IPv6 addresses by a `:`; anything else (header rows,
    /// comments) matches no version.
    pub fn matches(&self, address: &str) -> bool {
        (self.includes_ipv4() && address.contains('.'))
            || (self.includes_ipv6() && address.contains(':'))
    }

    /// Split this IP version into the individual versions processed one after another.
    pub fn split(&self) -> Vec<IpVersion> {
        match self {
            IpVersion::Both => vec![IpVersion::Ipv4, IpVersion::Ipv6],
            single => vec![*single],
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::Ipv4 => write!(f, "ipv4"),
            IpVersion::Ipv6 => write!(f, "ipv6"),
            IpVersion::Both => write!(f, "both"),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
