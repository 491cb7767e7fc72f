//! Input loading for the CLI: the case file and the kind catalog.

use std::path::Path;

use anyhow::{Context, Result, bail};
use mts_model::{BatchLoadDetail, Case, KindCatalog};
use tracing::{debug, info};

/// Load a case exported as JSON.
pub fn load_case(path: &Path) -> Result<Case> {
    let case = Case::load(path).with_context(|| format!("load case {}", path.display()))?;
    info!(
        case = %case.name,
        batch_loads = case.batch_loads.len(),
        "loaded case"
    );
    Ok(case)
}

/// Load the kind catalog at `path`, or the built-in catalog when `None`.
pub fn load_kinds(path: Option<&Path>) -> Result<KindCatalog> {
    let catalog = match path {
        Some(path) => {
            KindCatalog::load(path).with_context(|| format!("load kinds {}", path.display()))?
        }
        None => KindCatalog::builtin().context("load built-in kinds")?,
    };
    debug!(kinds = catalog.len(), "loaded kind catalog");
    Ok(catalog)
}

/// Batch loads of `case` to act on: all of them, or only `batch` when given.
pub fn select_batch_loads<'a>(
    case: &'a Case,
    batch: Option<&str>,
) -> Result<Vec<&'a BatchLoadDetail>> {
    let Some(batch) = batch else {
        return Ok(case.batch_loads.iter().collect());
    };
    let selected: Vec<_> = case
        .batch_loads
        .iter()
        .filter(|batch_load| batch_load.batch_id == batch)
        .collect();
    if selected.is_empty() {
        bail!("batch load {batch} not found in case {}", case.name);
    }
    Ok(selected)
}
