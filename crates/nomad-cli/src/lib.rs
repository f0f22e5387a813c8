//! nomad-cli
//! =========
//!
//! Command-line interface for the `nomad-core` city filtering library.
//!
//! The binary (`nomad`) is the primary deliverable; the library target holds
//! the argument definitions and the command runner so they can be tested.
//!
//! Quick start
//! -----------
//!
//! ```text
//! nomad stats
//! nomad regions
//! nomad list "regions=seoul,jeju&speed=100&sort=cheap"
//! nomad query update "sort=cost" --speed 0 --search 강릉
//! nomad query reset "search=jeju&lang=ko"
//! nomad favorite toggle jeju
//! nomad list --favorites
//! nomad profile set-name Mina
//! ```
//!
//! Favorites, bookmarks, event participation and the profile live in a JSON
//! file store (`--store`, default `.nomad/store.json`).
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod logging;
pub mod run;

pub use run::run;
