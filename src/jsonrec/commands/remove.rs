use crate::commands::CmdOutput;
use crate::error::Result;
use crate::store::RecordStore;

/// Drop every record whose id equals `id` and persist what is left.
///
/// All matches go in a single pass, so records next to a removed one are
/// still examined. Survivors keep their relative order.
#[tracing::instrument(level = "debug", skip(store))]
pub fn run<S: RecordStore>(store: &mut S, id: &str) -> Result<CmdOutput> {
    let mut records = store.load()?;
    let before = records.len();

    records.retain(|r| r.id != id);

    let removed = before - records.len();
    if removed == 0 {
        return Ok(CmdOutput::NotFound(id.to_string()));
    }

    tracing::debug!(removed, remaining = records.len(), "removed records");
    store.persist(&records)?;
    Ok(CmdOutput::Collection(records))
}
