//! Check-run orchestration: fan-out, classification, collation
//!
//! One call to [`run_check`] is one complete run. The expected outcome
//! count is fixed before any lookup is dispatched, so late enumeration can
//! never race with completions. Lookups for all eligible items run
//! concurrently; each completion is classified into exactly one [`Outcome`]
//! and folded into the run with the same bookkeeping as the immediately
//! classified items. Lookup failures never abort the run.

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, info, warn};

use crate::catalog::{CatalogError, CatalogLookup, CatalogResponse};
use crate::check::compare::is_outdated;
use crate::check::outcome::Outcome;
use crate::check::run::CheckRun;
use crate::host::InstalledItem;

/// Classify one completed lookup, first match wins:
/// catalog says unavailable, then unusable version, then version compare.
fn classify(item: InstalledItem, result: Result<CatalogResponse, CatalogError>) -> Outcome {
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            warn!(item = %item.name, "Catalog lookup failed: {}", e);
            return Outcome::TransportError(item);
        }
    };

    if response.is_resource_unavailable() {
        return Outcome::CatalogUnavailable(item);
    }

    let Some(latest) = response.data.filter(|data| !data.version.is_empty()) else {
        return Outcome::DetailsUnavailable(item);
    };

    if is_outdated(&item.version, &latest.version) {
        return Outcome::Outdated { item, latest };
    }

    Outcome::UpToDate(item)
}

/// Run one complete check over the given installed items.
///
/// Returns the finalized run; the returned [`CheckRun`] is always complete,
/// even when every lookup failed or there was nothing to check.
pub async fn run_check<C: CatalogLookup + ?Sized>(
    catalog: &C,
    items: &[InstalledItem],
) -> CheckRun {
    let (immediate, eligible): (Vec<_>, Vec<_>) = items
        .iter()
        .filter(|item| !item.core)
        .cloned()
        .partition(|item| item.resource_id == 0);

    // Fixed before anything is dispatched; never recomputed.
    let expected = immediate.len() + eligible.len();
    let mut run = CheckRun::new(expected);

    info!(
        expected,
        eligible = eligible.len(),
        "Starting update check"
    );

    if expected == 0 {
        return run;
    }

    let mut finalized = false;
    for item in immediate {
        debug!(item = %item.name, "No catalog identifier, skipping lookup");
        finalized |= run.record(Outcome::MissingIdentifier(item));
    }

    let mut lookups: FuturesUnordered<_> = eligible
        .into_iter()
        .map(|item| async move {
            let result = catalog.lookup(item.resource_id).await;
            classify(item, result)
        })
        .collect();

    while let Some(outcome) = lookups.next().await {
        finalized |= run.record(outcome);
    }

    debug_assert!(finalized && run.is_complete());
    info!(received = run.received(), "Update check complete");
    run
}
