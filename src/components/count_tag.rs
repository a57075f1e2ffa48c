use crate::{
    primitives::{Element, span},
    resolver::{ContentSpec, ControlBase, Kind, ResolvedStyle, Size, StyleSpec, resolve},
};

/// A small pill showing a count, optionally capped (`99+`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountTag {
    count: u64,
    cap: Option<u64>,
    kind: Kind,
    size: Size,
}

impl CountTag {
    pub fn new(count: u64) -> Self {
        Self {
            count,
            cap: None,
            kind: Kind::Ghost,
            size: Size::Small,
        }
    }

    /// Counts above `cap` display as `{cap}+`.
    pub fn cap(mut self, cap: u64) -> Self {
        self.cap = Some(cap);
        self
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn display_text(&self) -> String {
        match self.cap {
            Some(cap) if self.count > cap => format!("{cap}+"),
            _ => self.count.to_string(),
        }
    }

    pub fn style_spec(&self) -> StyleSpec {
        StyleSpec::new().kind(self.kind).size(self.size)
    }

    pub fn resolve(&self) -> ResolvedStyle {
        resolve(
            ControlBase::CountTag,
            &self.style_spec(),
            &ContentSpec::new().label(self.display_text()),
        )
    }

    pub fn render(&self) -> Element {
        let resolved = self.resolve();

        span()
            .classes(resolved.classes().classes())
            .attr("data-count", self.count.to_string())
            .text(self.display_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap() {
        assert_eq!(CountTag::new(7).cap(99).display_text(), "7");
        assert_eq!(CountTag::new(99).cap(99).display_text(), "99");
        assert_eq!(CountTag::new(100).cap(99).display_text(), "99+");
        assert_eq!(CountTag::new(12_000).display_text(), "12000");
    }

    #[test]
    fn test_render_keeps_exact_count() {
        let element = CountTag::new(250).cap(99).kind(Kind::Info).render();

        assert_eq!(element.text_value(), Some("99+"));
        assert_eq!(element.attribute("data-count"), Some("250"));
        assert!(element.has_class("sw-count-tag--kind-info"));
        assert!(element.has_class("sw-count-tag--size-small"));
    }
}
