use crate::{
    primitives::{Element, span},
    resolver::{IconBucket, Kind},
    theme::{ThemeObject, ThemePaletteKind},
};

/// Loading indicator. Takes its colour from the palette role of the owning
/// control's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spinner {
    kind: Kind,
    size: IconBucket,
    on_fill: bool,
}

impl Spinner {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            size: IconBucket::Md,
            on_fill: false,
        }
    }

    pub fn size(mut self, size: IconBucket) -> Self {
        self.size = size;
        self
    }

    /// Draws the spinner on a filled surface of its kind, using the
    /// contrast colour instead of the main one.
    pub fn on_fill(mut self, on_fill: bool) -> Self {
        self.on_fill = on_fill;
        self
    }

    pub fn render(&self, theme: &ThemeObject) -> Element {
        let palette = ThemePaletteKind::from(self.kind).resolve(theme);
        let color = if self.on_fill {
            &palette.contrast_text
        } else {
            &palette.main
        };
        let px = format!("{}px", self.size.px());

        span()
            .class("sw-spinner")
            .class(format!("sw-spinner--{}", self.size.as_str()))
            .attr("aria-hidden", "true")
            .style("width", px.clone())
            .style("height", px)
            .style("color", color.as_str())
    }
}
