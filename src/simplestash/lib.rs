//! # Simplestash Architecture
//!
//! Simplestash is a **UI-agnostic link stash library** with a thin CLI client.
//! It records short text labels mapped to URLs, persists them to a single
//! YAML file in the user's home directory, and offers retrieval (list,
//! interactive copy-to-clipboard).
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                               │
//! │  - Parses the one verb, drives prompts, formats output       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes  │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                          │
//! │  - Thin facade over commands                                 │
//! │  - Returns structured Result types                           │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                               │
//! │  - Pure business logic: add, list, copy                      │
//! │  - No I/O assumptions whatsoever                             │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                      │
//! │  - Abstract StoreBackend trait                               │
//! │  - FileStore (production), InMemoryStore (testing)           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code takes regular Rust
//! arguments, returns regular Rust types (`Result<CmdResult>`), never writes
//! to stdout/stderr, never calls `std::process::exit`, and never assumes a
//! terminal environment. The interactive pieces (line input for `new`, the
//! single-choice menu for `cp`) are injected: `new` feeds a line iterator
//! through [`parser::first_valid_record`], and `cp` takes any
//! [`selector::Selector`] implementation.
//!
//! ## Execution model
//!
//! One process runs exactly one verb end-to-end and exits. Single-threaded,
//! synchronous, no background work. The store file is rewritten in full
//! after a fully-validated in-memory mutation; concurrent invocations are
//! not guarded against (last save wins).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each verb
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`LinkStore`, `LinkRecord`)
//! - [`parser`]: The `#label:url` line parser and re-prompt loop driver
//! - [`selector`]: Single-choice selection over stored labels
//! - [`config`]: File path resolution (`StashPaths`)
//! - [`logging`]: Best-effort append-only log file sink
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod parser;
pub mod selector;
pub mod store;
