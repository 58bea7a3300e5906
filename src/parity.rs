//! The comparison pipeline: discover catalogues, load peer records, then for
//! every record of the implementation under test run the conformance suite
//! and diff against each peer. Report output goes to stdout; per-record and
//! per-peer failures are reported inline and never halt the run.

use crate::config::RunConfig;
use crate::diff::{self, Diff};
use crate::ets::TestSuite;
use crate::{catalogue, record};
use anyhow::Result;
use tracing::{info, warn};

pub fn run(config: &RunConfig) -> Result<()> {
    let mut catalogues = catalogue::discover(&config.root, &config.centre_id)?;
    catalogue::load_peer_records(&config.root, &mut catalogues.peers)?;

    if catalogues.iut.is_none() || catalogues.peers.is_empty() {
        warn!("nothing to compare");
    }

    match &catalogues.iut {
        Some(iut) => println!("IUT: {iut}"),
        None => println!("IUT: none"),
    }
    println!("Other GDCs: {}", serde_json::to_string(&catalogues.peers)?);

    let Some(iut) = &catalogues.iut else {
        return Ok(());
    };

    for path in catalogue::json_files(&config.root.join(iut))? {
        info!(file = %path.display(), "checking");
        let data = record::normalize(catalogue::read_record(&path)?);

        if let Err(err) = TestSuite::new(&data).run_tests() {
            println!("ERROR on {}: {err}", path.display());
            continue;
        }
        let id = match record::record_id(&data) {
            Some(id) => id,
            // Unreachable once the identifier test has passed.
            None => continue,
        };

        for (peer, records) in &catalogues.peers {
            let Some(raw) = records.get(id) else {
                println!("ERROR: NOT in {peer}");
                continue;
            };
            let peer_data = record::normalize(raw.clone());
            let divergence = diff::diff(&data, &peer_data);
            if !divergence.is_empty() {
                print_diff(&divergence, config.compact)?;
            }
        }
    }

    Ok(())
}

fn print_diff(divergence: &Diff, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(divergence)?
    } else {
        serde_json::to_string_pretty(divergence)?
    };
    println!("{rendered}");
    Ok(())
}
