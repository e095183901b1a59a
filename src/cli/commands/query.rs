//! Query command implementation

use tracing::{debug, info};

use super::shared::{load_catalog, make_sink};
use crate::Result;
use crate::cli::args::QueryArgs;
use crate::config::Config;

/// Query command runner
///
/// A selection that matches nothing is shown through the sink, naming the
/// selection, then returned as an error so the process exits non-zero.
pub async fn run_query(args: &QueryArgs, config: &Config) -> Result<()> {
    debug!("Query arguments: {:?}", args);

    let (service, _report) = load_catalog(config).await?;
    let mut sink = make_sink(args.format, config);

    match service.query(&args.category, args.location.as_deref()) {
        Ok(result) => {
            info!(
                "Aggregated {} data points for '{}' ({})",
                result.statistics.data_points, result.category, result.location
            );
            sink.render(&result)
        }
        Err(e) if e.is_no_match() => {
            sink.render_error(&e.to_string())?;
            Err(e)
        }
        Err(e) => Err(e),
    }
}
