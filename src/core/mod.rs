//! # Core Application Logic
//!
//! This module contains Taskdeck's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │  Auth API  │
//!          │  Adapter   │                │  (reqwest  │
//!          │ (ratatui)  │                │  or demo)  │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`store`]: Ordered todo collection
//! - [`filter`] / [`reorder`]: Pure list transforms
//! - [`auth`]: Session state machine and route guard
//! - [`validation`]: Form checks

pub mod action;
pub mod auth;
pub mod config;
pub mod filter;
pub mod reorder;
pub mod state;
pub mod store;
pub mod todo;
pub mod validation;
