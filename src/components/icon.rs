use crate::{
    primitives::{Element, span},
    resolver::{IconBucket, IconName},
    theme::TokenRef,
};

/// A named icon at a bucketed size. Decorative: hidden from assistive
/// technology, since the owning control carries the accessible name.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    name: IconName,
    size: IconBucket,
    color: Option<TokenRef>,
}

impl Icon {
    pub fn new(name: impl Into<IconName>) -> Self {
        Self {
            name: name.into(),
            size: IconBucket::Md,
            color: None,
        }
    }

    pub fn size(mut self, size: IconBucket) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: TokenRef) -> Self {
        self.color = Some(color);
        self
    }

    pub fn name(&self) -> &IconName {
        &self.name
    }

    pub fn render(&self) -> Element {
        let px = format!("{}px", self.size.px());

        span()
            .class("sw-icon")
            .class(format!("sw-icon--{}", self.size.as_str()))
            .attr("data-icon", self.name.as_str())
            .attr("aria-hidden", "true")
            .style("width", px.clone())
            .style("height", px)
            .when_some(self.color.as_ref(), |this, color| this.style("color", color.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_render() {
        let element = Icon::new("bell").size(IconBucket::Xl).render();

        assert!(element.has_class("sw-icon--xl"));
        assert_eq!(element.attribute("data-icon"), Some("bell"));
        assert_eq!(element.attribute("aria-hidden"), Some("true"));
        assert_eq!(element.style_value("width"), Some("24px"));
        assert_eq!(element.style_value("color"), None);
    }
}
