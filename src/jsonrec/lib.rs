//! # jsonrec Architecture
//!
//! jsonrec keeps a list of records (`id`, `email`, `age`) in a single JSON
//! file and runs exactly one operation per invocation: `list`, `add`,
//! `findById` or `remove`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, cli/)                         │
//! │  - Collects flags, sets up logging, renders output          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Arguments
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, request.rs)                             │
//! │  - Validates Arguments into a Request                       │
//! │  - Binds the store to the requested file and dispatches     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  Request
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - list / add / find / remove over the in-memory collection │
//! │  - Returns CmdOutput, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invocation Lifecycle
//!
//! parse → validate → dispatch → read file → mutate in memory → write file.
//! The file is read once; `add` and `remove` write it once at the end of a
//! successful run. Nothing survives between invocations except the file.
//! There is no locking, so two mutating invocations racing on one file can
//! lose an update.
//!
//! ## "Not found" outcomes
//!
//! A duplicate id on `add` and a missing id on `remove` are not errors: they
//! come back as [`CmdOutput::AlreadyExists`](commands::CmdOutput::AlreadyExists)
//! and [`CmdOutput::NotFound`](commands::CmdOutput::NotFound) and leave the
//! file untouched. A miss on `findById` is [`CmdOutput::Empty`](commands::CmdOutput::Empty).
//!
//! ## Module Overview
//!
//! - [`api`]: the pipeline entry point ([`api::perform`]) and dispatcher
//! - [`request`]: typed arguments and the validator
//! - [`operation`]: static flag and operation tables
//! - [`commands`]: one module per operation
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: the [`model::Record`] type
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod operation;
pub mod request;
pub mod store;
