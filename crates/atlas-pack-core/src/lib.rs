//! Core library for laying out rectangular items across fixed-size atlas pages.
//!
//! - Engine: free-region tracking with best-short-side-fit placement and
//!   guillotine splits; pages fill one at a time with carry-over.
//! - Pipeline: `pack` takes declared item dimensions and returns page layouts
//!   plus explicit oversized/dropped reporting. Pixel data never enters the
//!   crate; callers map `item_id` back to their own assets.
//! - Background: `PackRequest`/`PackJob` run the same engine on a worker
//!   thread behind a serializable message-passing boundary.
//!
//! Quick example:
//! ```
//! use atlas_pack_core::{PackItem, pack};
//! # fn main() -> Result<(), atlas_pack_core::PackError> {
//! let items = vec![PackItem::new(1, 100, 100), PackItem::new(2, 100, 100)];
//! let out = pack(&items, 200, 0)?;
//! assert_eq!(out.pages.len(), 1);
//! assert_eq!(out.pages[0].efficiency_percent, 50.0);
//! # Ok(()) }
//! ```

pub mod background;
pub mod error;
pub mod model;
mod packer;
pub mod pipeline;

pub use background::*;
pub use error::*;
pub use model::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `atlas_pack_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::background::{PackJob, PackRequest, PackResponse};
    pub use crate::error::{PackError, Result};
    pub use crate::model::{AtlasPage, PackItem, PackOutput, PackStats, Placement};
    pub use crate::pipeline::pack;
}
