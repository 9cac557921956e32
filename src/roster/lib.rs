//! # Roster Architecture
//!
//! Roster is a **UI-agnostic student record library** with a small CLI on top. It
//! validates student records, keeps them in insertion order, and mirrors the whole
//! set to local storage after every change.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, renders tables                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and the edit session                      │
//! │  - Normalizes inputs (index strings → DisplayIndex)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, session.rs, validation.rs)   │
//! │  - Validation, add/edit/delete transitions                  │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StudentStore over a StorageBackend                       │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Records and Positions
//!
//! A [`model::Student`] is only created from a [`model::StudentDraft`] that passed
//! [`validation::validate`]. Student IDs are unique and are the identity of a
//! record; list positions are not. Positions are shown to users as 1-based
//! [`index::DisplayIndex`] values and are re-derived after every mutation.
//!
//! ## Testing Strategy
//!
//! 1. **Commands**: unit tests against `InMemoryStore`, where most testing lives.
//! 2. **Store**: persistence, degraded loads and writes via `MemBackend`; the
//!    filesystem backend in `tests/`.
//! 3. **CLI**: end-to-end runs of the binary with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`session`]: Edit session state machine
//! - [`validation`]: Field rules and input filters
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Student`, `StudentDraft`, `Field`)
//! - [`index`]: Display indexes
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod session;
pub mod store;
pub mod validation;
