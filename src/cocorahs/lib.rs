//! # cocorahs
//!
//! File a daily precipitation report with CoCoRaHS (the Community
//! Collaborative Rain, Hail and Snow network) from the command line.
//!
//! The crate is a small library with a thin CLI on top. Everything that
//! talks to the terminal lives in the binary's `cli` module; the library
//! never prints, prompts or exits.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints, picks the exit code   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Station resolution, report submission, outcome messages  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Signs requests with the account credentials              │
//! │  - `get_identity`, `new_report`                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transport Layer (transport/)                               │
//! │  - `Transport` trait                                        │
//! │  - HttpTransport (production), MemoryTransport (testing)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Strategy
//!
//! Commands and the API client are tested against `MemoryTransport`, which
//! records every request and replays canned JSON bodies, so no test needs the
//! network. Input precedence is tested through [`config::Settings`] with an
//! explicit environment snapshot. Binary-level tests in `tests/` run the
//! real executable against a local stub server.
//!
//! ## Module Overview
//!
//! - [`api`]: The credential-signing API client
//! - [`commands`]: Station selection and report submission
//! - [`transport`]: HTTP seam and its implementations
//! - [`model`]: Request/response types (`Observation`, `Station`, ...)
//! - [`config`]: Config file defaults and input precedence
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod transport;
