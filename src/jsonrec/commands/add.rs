use crate::commands::CmdOutput;
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Append the record encoded in `item` unless its id is already stored.
///
/// The store is loaded before `item` is parsed, so a missing backing file is
/// created even when the item turns out to be malformed.
#[tracing::instrument(level = "debug", skip(store))]
pub fn run<S: RecordStore>(store: &mut S, item: &str) -> Result<CmdOutput> {
    let mut records = store.load()?;
    let record: Record = serde_json::from_str(item)?;

    if records.iter().any(|r| r.id == record.id) {
        tracing::debug!(id = %record.id, "duplicate id, nothing written");
        return Ok(CmdOutput::AlreadyExists(record.id));
    }

    records.push(record);
    store.persist(&records)?;
    Ok(CmdOutput::Collection(records))
}
