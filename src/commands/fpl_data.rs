//! Dump the raw `bootstrap-static` payload.

use crate::Result;

use super::common::{build_data_source, print_json, report_cache_status, SourceOptions};

pub async fn handle_fpl_data(verbose: bool, source: SourceOptions) -> Result<()> {
    let source = build_data_source(&source)?;

    let (raw, status) = source.raw_season_data().await?;
    report_cache_status(verbose, "Season data", status)?;

    print_json(&raw)
}
