use jsonrec::commands::CmdOutput;
use jsonrec::error::Result;
use jsonrec::store::encode;

/// Bytes written to stdout for a command's output. No trailing newline is added.
pub fn render(output: CmdOutput) -> Result<Vec<u8>> {
    match output {
        CmdOutput::Raw(bytes) => Ok(bytes),
        CmdOutput::Collection(records) => encode(&records),
        CmdOutput::Record(record) => Ok(serde_json::to_vec(&record)?),
        CmdOutput::AlreadyExists(id) => {
            Ok(format!("Item with id {} already exists", id).into_bytes())
        }
        CmdOutput::NotFound(id) => Ok(format!("Item with id {} not found", id).into_bytes()),
        CmdOutput::Empty => Ok(Vec::new()),
    }
}
