use cipr::{Query, NO_DATA};
use log::{info, warn};

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Run Summary
--------------------------------------------------------------------------------------*/

pub fn run_summary(queries: &[Query], lines: &[String]) {
    let Some(first) = queries.first() else {
        warn!("No queries were run");
        return;
    };

    let count_matches = lines.iter().filter(|line| *line != NO_DATA).count();
    let passes = queries
        .iter()
        .map(|query| query.ip_version.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    info!(
        "Displayed {count_matches} {} IP range(s) in {} pass(es) ({passes}) at verbosity `{}`",
        first.provider,
        queries.len(),
        first.verbosity
    );
}
