use crate::model::Record;

pub mod add;
pub mod find;
pub mod list;
pub mod remove;

/// What a command produced.
///
/// Commands never format output themselves. The binary turns a `CmdOutput`
/// into the bytes written to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmdOutput {
    /// The backing file's bytes, untouched.
    Raw(Vec<u8>),
    /// The whole collection after a successful mutation.
    Collection(Vec<Record>),
    /// A single matching record.
    Record(Record),
    /// An add was refused because the id is taken. Storage is unchanged.
    AlreadyExists(String),
    /// A remove matched nothing. Storage is unchanged.
    NotFound(String),
    /// A lookup matched nothing.
    Empty,
}
