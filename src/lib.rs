//! Themed, stateful controls driven by one variant resolver.
//!
//! Every control builds a [`resolver::StyleSpec`], resolves it into exactly
//! one [`resolver::ResolvedStyle`] and lays that out as a
//! [`primitives::Element`] tree, reading concrete values from a
//! [`theme::ThemeObject`] built by the design-token bridge.

pub mod primitives;

pub mod extensions;

pub mod resolver;

pub mod components;

pub mod theme;

mod utils;
pub use utils::ElementId;

mod init;
pub use init::*;
