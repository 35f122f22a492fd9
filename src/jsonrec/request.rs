//! # Argument Validation
//!
//! Raw command-line input arrives as [`Arguments`]: one optional value per
//! [`Flag`]. [`validate`] turns it into a [`Request`], which carries exactly
//! the inputs its operation needs. Past this point nothing looks flags up by
//! name or checks for their presence again.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the operation flag is present
//! 2. the operation name is recognized
//! 3. the operation's required flags are present, in table order

use crate::error::{RecError, Result};
use crate::operation::{Flag, Operation};
use std::path::{Path, PathBuf};

/// The flags supplied on the command line.
///
/// Empty values are treated as absent, so `-id ""` is the same as leaving
/// `-id` out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    operation: Option<String>,
    file_name: Option<String>,
    item: Option<String>,
    id: Option<String>,
}

impl Arguments {
    pub fn new(
        operation: Option<String>,
        file_name: Option<String>,
        item: Option<String>,
        id: Option<String>,
    ) -> Self {
        Self {
            operation: non_empty(operation),
            file_name: non_empty(file_name),
            item: non_empty(item),
            id: non_empty(id),
        }
    }

    pub fn with(mut self, flag: Flag, value: impl Into<String>) -> Self {
        let value = non_empty(Some(value.into()));
        match flag {
            Flag::Operation => self.operation = value,
            Flag::FileName => self.file_name = value,
            Flag::Item => self.item = value,
            Flag::Id => self.id = value,
        }
        self
    }

    pub fn get(&self, flag: Flag) -> Option<&str> {
        match flag {
            Flag::Operation => self.operation.as_deref(),
            Flag::FileName => self.file_name.as_deref(),
            Flag::Item => self.item.as_deref(),
            Flag::Id => self.id.as_deref(),
        }
    }

    /// The flags that were actually supplied, in table order.
    pub fn supplied(&self) -> Vec<Flag> {
        Flag::all()
            .iter()
            .copied()
            .filter(|flag| self.get(*flag).is_some())
            .collect()
    }

    fn require(&self, flag: Flag) -> Result<&str> {
        self.get(flag).ok_or(RecError::MissingFlag(flag))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A validated invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List { file: PathBuf },
    Add { file: PathBuf, item: String },
    FindById { file: PathBuf, id: String },
    Remove { file: PathBuf, id: String },
}

impl Request {
    pub fn operation(&self) -> Operation {
        match self {
            Request::List { .. } => Operation::List,
            Request::Add { .. } => Operation::Add,
            Request::FindById { .. } => Operation::FindById,
            Request::Remove { .. } => Operation::Remove,
        }
    }

    pub fn file(&self) -> &Path {
        match self {
            Request::List { file }
            | Request::Add { file, .. }
            | Request::FindById { file, .. }
            | Request::Remove { file, .. } => file,
        }
    }
}

pub fn validate(args: &Arguments) -> Result<Request> {
    let operation: Operation = args.require(Flag::Operation)?.parse()?;

    for flag in operation.required_flags() {
        args.require(*flag)?;
    }

    let file = PathBuf::from(args.require(Flag::FileName)?);
    let request = match operation {
        Operation::List => Request::List { file },
        Operation::Add => Request::Add {
            file,
            item: args.require(Flag::Item)?.to_string(),
        },
        Operation::FindById => Request::FindById {
            file,
            id: args.require(Flag::Id)?.to_string(),
        },
        Operation::Remove => Request::Remove {
            file,
            id: args.require(Flag::Id)?.to_string(),
        },
    };

    tracing::debug!(operation = %operation, file = %request.file().display(), "validated request");
    Ok(request)
}
