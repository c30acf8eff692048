//! # Core Browsing Logic
//!
//! This module contains Marquee's catalog engine.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • catalog (records)    │
//!                    │  • filter / rail        │
//!                    │  • selection / viewport │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O*. No UI. Pure.  │
//!                    └───────────┬─────────────┘
//!                                │
//!                     ┌──────────┴──────────┐
//!                     ▼                     ▼
//!              ┌────────────┐        ┌────────────┐
//!              │    TUI     │        │    Web     │
//!              │  Adapter   │        │  Adapter   │
//!              │ (ratatui)  │        │  (future)  │
//!              └────────────┘        └────────────┘
//! ```
//!
//! *`catalog` and `config` read files at startup; everything that runs
//! per-event is pure.
//!
//! ## Modules
//!
//! - [`catalog`]: records, validation, the immutable store
//! - [`filter`]: query + category filtering
//! - [`rail`]: featured/trending/new rail selection
//! - [`selection`]: the open/closed detail-view state machine
//! - [`viewport`]: the desktop/mobile breakpoint
//! - [`state`]: the `App` struct — all browsing state in one place
//! - [`action`]: the `Action` enum — everything that can happen
//! - [`config`]: settings, theme, write-through persistence

pub mod action;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod rail;
pub mod selection;
pub mod state;
pub mod viewport;
