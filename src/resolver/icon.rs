#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use serde::Serialize;

use super::Size;

/// Icon size buckets, smallest first.
///
/// Requested sizes are bucketed rather than passed through, so nearby
/// requests can land on the same bucket.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[func(pub fn as_str(&self) -> &'static str)]
#[func(pub fn px(&self) -> u16)]
#[func(pub fn max_px(&self) -> f32)]
pub enum IconBucket {
    #[serde(rename = "sm")]
    #[assoc(as_str = "sm")]
    #[assoc(px = 14)]
    #[assoc(max_px = 14.)]
    Sm,
    #[serde(rename = "md")]
    #[assoc(as_str = "md")]
    #[assoc(px = 18)]
    #[assoc(max_px = 18.)]
    Md,
    #[serde(rename = "lg")]
    #[assoc(as_str = "lg")]
    #[assoc(px = 20)]
    #[assoc(max_px = 20.)]
    Lg,
    #[serde(rename = "xl")]
    #[assoc(as_str = "xl")]
    #[assoc(px = 24)]
    #[assoc(max_px = 24.)]
    Xl,
    #[serde(rename = "2xl")]
    #[assoc(as_str = "2xl")]
    #[assoc(px = 32)]
    #[assoc(max_px = f32::INFINITY)]
    Xxl,
}

impl IconBucket {
    pub const ALL: [IconBucket; 5] = [
        IconBucket::Sm,
        IconBucket::Md,
        IconBucket::Lg,
        IconBucket::Xl,
        IconBucket::Xxl,
    ];

    /// First bucket whose upper bound holds `px`.
    pub fn from_px(px: f32) -> Self {
        Self::ALL
            .into_iter()
            .find(|bucket| px <= bucket.max_px())
            .unwrap_or(IconBucket::Xxl)
    }

    /// Bucket for an optional pixel hint, defaulting to the control size's
    /// icon. A NaN hint counts as no hint.
    pub fn for_control(size: Size, hint: Option<f32>) -> Self {
        match hint {
            Some(px) if !px.is_nan() => Self::from_px(px),
            _ => Self::from_px(size.icon_px()),
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}
