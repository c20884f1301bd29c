//! # abook Architecture
//!
//! abook is an address-book assistant: it keeps contacts (a name, phone
//! numbers, an optional birthday) on disk and answers free-text commands such
//! as `add Ann 1234567890` or `days Ann`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Read loop, prompt, colored output, logging bootstrap     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ line
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs) + Dispatch (dispatch.rs)                      │
//! │  - Alias table → (Command, args)                            │
//! │  - Errors → user-facing guidance text                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - read book → operate → write book if changed              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Book + Model (book.rs, model.rs)  /  Storage (store/)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence per command
//!
//! There is no long-lived book in memory. Every command reads the whole book
//! from its store and, if it changed anything, writes the whole book back.
//! Two processes sharing a data file therefore see last-writer-wins
//! behavior; nothing locks the file.
//!
//! ## Module Overview
//!
//! - [`api`]: facade taking raw input lines
//! - [`dispatch`]: command table and alias resolution
//! - [`commands`]: one module per command
//! - [`book`]: the address book and its pagination
//! - [`model`]: validated fields and contact records
//! - [`store`]: storage trait, file and in-memory stores
//! - [`config`]: `config.json` in the data directory
//! - [`logging`]: file logging setup
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;
