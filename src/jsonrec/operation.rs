//! Static tables of the recognized flags and operations.
//!
//! Each [`Operation`] carries the list of flags it needs. Both tables are
//! fixed at compile time; nothing here is mutated at runtime.

use crate::error::RecError;
use std::fmt;
use std::str::FromStr;

/// A named command-line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Flag {
    Operation,
    FileName,
    Item,
    Id,
}

impl Flag {
    /// The flag as spelled on the command line, without leading dashes.
    pub fn name(&self) -> &'static str {
        match self {
            Flag::Operation => "operation",
            Flag::FileName => "fileName",
            Flag::Item => "item",
            Flag::Id => "id",
        }
    }

    pub fn all() -> &'static [Flag] {
        &[Flag::Operation, Flag::FileName, Flag::Item, Flag::Id]
    }

    pub fn for_name(name: &str) -> Option<Self> {
        Flag::all().iter().copied().find(|flag| flag.name() == name)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Add,
    FindById,
    Remove,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Add => "add",
            Operation::FindById => "findById",
            Operation::Remove => "remove",
        }
    }

    /// Flags that must be present for this operation, in the order they are checked.
    pub fn required_flags(&self) -> &'static [Flag] {
        match self {
            Operation::List => &[Flag::FileName],
            Operation::Add => &[Flag::FileName, Flag::Item],
            Operation::FindById => &[Flag::FileName, Flag::Id],
            Operation::Remove => &[Flag::FileName, Flag::Id],
        }
    }

    pub fn all() -> &'static [Operation] {
        &[
            Operation::Add,
            Operation::List,
            Operation::FindById,
            Operation::Remove,
        ]
    }
}

impl FromStr for Operation {
    type Err = RecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::all()
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| RecError::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
