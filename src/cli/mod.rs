/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Modules
-------------------------------------------------------------------------------------------------*/

mod args;
mod core;

pub mod log;
pub mod output;

/*--------------------------------------------------------------------------------------
  CLI Module Interface
--------------------------------------------------------------------------------------*/

pub use self::args::Args;
pub use self::core::{build_client, build_queries};

use cipr::Result;

/// Run every IP version pass of the selected provider, printing the rendered lines
/// of each pass in order.
pub fn run(args: &Args) -> Result<()> {
    let queries = build_queries(args)?;
    let client = build_client(args)?;

    let mut printed = Vec::new();
    for query in &queries {
        let lines = cipr::run(&client, query)?;
        output::lines(&lines)?;
        printed.extend(lines);
    }

    log::run_summary(&queries, &printed);
    Ok(())
}
