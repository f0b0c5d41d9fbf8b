use crate::core::record::IpRangeRecord;
use log::warn;
use std::fmt;

/*-------------------------------------------------------------------------------------------------
  Verbosity
-------------------------------------------------------------------------------------------------*/

/// Output detail level used when rendering IP range records.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum Verbosity {
    /// Address only.
    #[default]
    None,
    /// Address and attribute values, comma-separated.
    Mini,
    /// Labeled address and attributes.
    Full,
}

impl Verbosity {
    /// Parse a verbosity name. Names are matched exactly; anything else, including a
    /// differently cased name, falls back to [Verbosity::None].
    pub fn parse(value: &str) -> Self {
        match value {
            "none" => Verbosity::None,
            "mini" => Verbosity::Mini,
            "full" => Verbosity::Full,
            _ => {
                warn!("Unrecognized verbosity `{value}`; using `none`");
                Verbosity::None
            }
        }
    }
}

impl From<&str> for Verbosity {
    fn from(value: &str) -> Self {
        Verbosity::parse(value)
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verbosity::None => write!(f, "none"),
            Verbosity::Mini => write!(f, "mini"),
            Verbosity::Full => write!(f, "full"),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Render
-------------------------------------------------------------------------------------------------*/

/// Line rendered in place of an empty record set.
pub const NO_DATA: &str = "No IP ranges to display.";

/// Render one output line per record; an empty record set renders as a single
/// [NO_DATA] line.
pub fn render<R: IpRangeRecord>(records: &[R], verbosity: Verbosity) -> Vec<String> {
    if records.is_empty() {
        return vec![NO_DATA.to_string()];
    }

    records
        .iter()
        .map(|record| render_record(record, verbosity))
        .collect()
}

fn render_record<R: IpRangeRecord>(record: &R, verbosity: Verbosity) -> String {
    match verbosity {
        Verbosity::None => record.address().to_string(),
        Verbosity::Mini => std::iter::once(record.address())
            .chain(record.attribute_values())
            .collect::<Vec<&str>>()
            .join(","),
        Verbosity::Full => std::iter::once(format!("{}: {}", R::ADDRESS_LABEL, record.address()))
            .chain(
                R::ATTRIBUTES
                    .iter()
                    .zip(record.attribute_values())
                    .map(|(attribute, value)| format!("{}: {}", attribute.label(), value)),
            )
            .collect::<Vec<String>>()
            .join(", "),
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
