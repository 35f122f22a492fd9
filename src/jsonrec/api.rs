//! # API Facade
//!
//! The single entry point for running an operation. [`perform`] is the whole
//! pipeline: validate the arguments, bind a [`FileStore`] to the requested
//! file, and dispatch to the command.
//!
//! [`RecApi`] is generic over [`RecordStore`] so dispatch can be tested
//! against an [`InMemoryStore`](crate::store::memory::InMemoryStore) without
//! touching the filesystem. Command logic is tested in `commands/*.rs`, not
//! here.

use crate::commands::{self, CmdOutput};
use crate::error::Result;
use crate::request::{validate, Arguments, Request};
use crate::store::fs::FileStore;
use crate::store::RecordStore;

pub struct RecApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> RecApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list(&mut self) -> Result<CmdOutput> {
        commands::list::run(&mut self.store)
    }

    pub fn add(&mut self, item: &str) -> Result<CmdOutput> {
        commands::add::run(&mut self.store, item)
    }

    pub fn find_by_id(&mut self, id: &str) -> Result<CmdOutput> {
        commands::find::run(&mut self.store, id)
    }

    pub fn remove(&mut self, id: &str) -> Result<CmdOutput> {
        commands::remove::run(&mut self.store, id)
    }

    /// Run the command named by `request` against this API's store.
    ///
    /// The store is not re-bound to `request.file()`; callers pick the store.
    pub fn dispatch(&mut self, request: &Request) -> Result<CmdOutput> {
        match request {
            Request::List { .. } => self.list(),
            Request::Add { item, .. } => self.add(item),
            Request::FindById { id, .. } => self.find_by_id(id),
            Request::Remove { id, .. } => self.remove(id),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

/// Validate `args` and run the requested operation against its backing file.
pub fn perform(args: &Arguments) -> Result<CmdOutput> {
    let request = validate(args)?;
    let mut api = RecApi::new(FileStore::new(request.file()));
    api.dispatch(&request)
}
