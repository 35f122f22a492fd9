use crate::commands::CmdOutput;
use crate::error::Result;
use crate::store::RecordStore;

/// First record whose id equals `id`, or [`CmdOutput::Empty`] when none does.
#[tracing::instrument(level = "debug", skip(store))]
pub fn run<S: RecordStore>(store: &mut S, id: &str) -> Result<CmdOutput> {
    let records = store.load()?;

    Ok(records
        .into_iter()
        .find(|r| r.id == id)
        .map(CmdOutput::Record)
        .unwrap_or(CmdOutput::Empty))
}
