//! # CLI Module
//!
//! This module provides the command-line interface layer for Spanacli, a
//! Spotify API client that summarizes the tracks of a playlist. It implements
//! the user-facing commands and coordinates between the API client, the
//! flattening and normalization stages, and the final presentation.
//!
//! ## Commands
//!
//! - [`analyze`] - Runs the full pipeline for one playlist: authentication,
//!   paginated id fetch, batched detail fetch, normalization, and the
//!   summary table printout.
//!
//! ## Architecture Design
//!
//! The CLI layer owns all user interaction (status lines, spinners, the
//! summary table) and delegates the actual work:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Pipeline Stages (table / prep / analysis)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Library code propagates typed [`crate::Error`] values; only `main`
//! terminates the process on failure.

mod analyze;

pub use analyze::analyze;
