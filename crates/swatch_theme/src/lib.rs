//! Design tokens and the bridge that turns them into a component framework theme.
//!
//! A [`TokenMap`] holds named indirections (`var(--color-primary-blue)`),
//! never literal values. [`ThemeBridge`] assigns each of them to exactly one
//! field of a [`ThemeObject`]: palette, type scale, spacing, shadows and
//! per-primitive style overrides.

pub mod catalog;
pub use catalog::{FontWeight, PaletteRole, TypeLevel};

mod tokens;
pub use tokens::*;

mod schema;
pub use schema::*;

mod bridge;
pub use bridge::ThemeBridge;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod deserializers;

mod overrides;
