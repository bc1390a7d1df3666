//! Layout module for tracking UI component regions
//!
//! The renderer records where the input, the clear button and the dropdown
//! were drawn in `LayoutRegions`; `region_at()` maps a pointer position back
//! to the component under it.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
