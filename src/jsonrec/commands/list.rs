use crate::commands::CmdOutput;
use crate::error::Result;
use crate::store::RecordStore;

/// Pass-through read: the stored bytes are returned without being parsed.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run<S: RecordStore>(store: &mut S) -> Result<CmdOutput> {
    Ok(CmdOutput::Raw(store.read_raw()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn fresh_store_lists_nothing_and_is_created() {
        let mut store = InMemoryStore::new();
        let out = run(&mut store).unwrap();
        assert_eq!(out, CmdOutput::Raw(Vec::new()));
        assert_eq!(store.contents(), Some(&b""[..]));
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn returns_bytes_verbatim() {
        let pretty = "[\n  {\"id\": \"1\", \"email\": \"a@b.com\", \"age\": 30}\n]\n";
        let mut store = InMemoryStore::with_bytes(pretty);
        assert_eq!(run(&mut store).unwrap(), CmdOutput::Raw(pretty.into()));
    }

    #[test]
    fn does_not_validate_contents() {
        let mut store = InMemoryStore::with_bytes("not json at all");
        assert_eq!(
            run(&mut store).unwrap(),
            CmdOutput::Raw(b"not json at all".to_vec())
        );
    }
}
