//! Theme access for components.
//!
//! The token registry, bridge and theme schema live in `swatch_theme` and are
//! re-exported here. This module adds the shared [`ThemeHandle`] and the
//! enums components use to pick theme fields.

pub use swatch_theme::*;

mod handle;
pub use handle::*;

mod kinds;
pub use kinds::*;
