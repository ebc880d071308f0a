//! # CLI Module
//!
//! This module implements the user-facing command of the folder-to-playlist
//! tool. It coordinates the token cache, the Spotify API layer, and the
//! filename matching helpers into one run.
//!
//! ## Overview
//!
//! The single command, [`sync`], walks a local song folder and builds a
//! Spotify playlist from the files it can match:
//!
//! 1. **Authentication Check**: use the cached token while it is fresh;
//!    regenerate it from an authorization code otherwise
//! 2. **Profile Resolution**: resolve the user the playlist belongs to
//! 3. **Playlist Acquisition**: reuse the first playlist whose name matches
//!    exactly, create a public one if none does (skipped in preview mode)
//! 4. **Matching**: normalize each filename into a query, honor the skip
//!    list, search the catalog and keep the first result per file
//! 5. **Commit**: one batched add-tracks call with everything that matched
//!
//! ## Error Handling Philosophy
//!
//! Failures that invalidate the whole run (missing config, unreachable
//! profile, playlist listing/creation, the batched add) abort immediately
//! with a diagnostic. A file that matches nothing is only a miss: it is
//! reported and the pipeline continues with the remaining files.
//!
//! ## Preview Mode
//!
//! `--preview` performs everything up to and including the per-file search
//! but never mutates remote state; the would-be playlist is rendered as a
//! table so the operator can inspect matches before committing.

mod sync;

pub use sync::sync;
