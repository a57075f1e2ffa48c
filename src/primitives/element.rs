use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    ElementId,
    theme::{StyleRules, StyleValue},
};

/// A renderer-agnostic node: tag, id, classes, attributes, inline style,
/// text and children.
///
/// Components produce these trees; hosts map them onto whatever renders them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    tag: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<ElementId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    classes: Vec<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    attributes: IndexMap<String, String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    style: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Element>,
}

pub fn div() -> Element {
    Element::new("div")
}

pub fn span() -> Element {
    Element::new("span")
}

pub fn button() -> Element {
    Element::new("button")
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    pub fn id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    /// Sets an attribute, replacing any previous value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets the attribute when `value` is some, removes it otherwise.
    pub fn attr_opt(mut self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        let name = name.into();
        match value {
            Some(value) => {
                self.attributes.insert(name, value.into());
            }
            None => {
                self.attributes.shift_remove(&name);
            }
        }
        self
    }

    /// Sets a boolean attribute when `enabled`, removes it otherwise.
    pub fn flag(mut self, name: impl Into<String>, enabled: bool) -> Self {
        let name = name.into();
        if enabled {
            self.attributes.insert(name, String::new());
        } else {
            self.attributes.shift_remove(&name);
        }
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    /// Applies the flat entries of theme style rules as inline style.
    /// Nested selector blocks are left to the host.
    pub fn style_rules(mut self, rules: &StyleRules) -> Self {
        for (property, value) in rules.iter() {
            if let StyleValue::Value(value) = value {
                self.style.insert(css_property(property), value.clone());
            }
        }
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn when(self, condition: bool, then: impl FnOnce(Self) -> Self) -> Self {
        if condition { then(self) } else { self }
    }

    pub fn when_some<T>(self, option: Option<T>, then: impl FnOnce(Self, T) -> Self) -> Self {
        match option {
            Some(value) => then(self, value),
            None => self,
        }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn element_id(&self) -> Option<&ElementId> {
        self.id.as_ref()
    }

    pub fn class_list(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn text_value(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn child_elements(&self) -> &[Element] {
        &self.children
    }

    /// Text of this node and all descendants, depth first.
    pub fn text_content(&self) -> String {
        let mut content = String::new();
        self.walk(&mut |element| {
            if let Some(text) = &element.text {
                content.push_str(text);
            }
        });
        content
    }

    /// First node (self included) matching `predicate`, depth first.
    pub fn find(&self, predicate: impl Fn(&Element) -> bool) -> Option<&Element> {
        self.find_inner(&predicate)
    }

    fn find_inner(&self, predicate: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if predicate(self) {
            return Some(self);
        }

        self.children
            .iter()
            .find_map(|child| child.find_inner(predicate))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(|element| element.id.as_ref().is_some_and(|own| own.as_str() == id))
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.find(|element| element.has_class(class))
    }

    /// Every node (self included) matching `predicate`, depth first.
    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_into(&predicate, &mut found);
        found
    }

    fn collect_into<'a>(&'a self, predicate: &dyn Fn(&Element) -> bool, found: &mut Vec<&'a Element>) {
        if predicate(self) {
            found.push(self);
        }

        for child in &self.children {
            child.collect_into(predicate, found);
        }
    }

    fn walk(&self, visit: &mut dyn FnMut(&Element)) {
        visit(self);

        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// `borderRadius` -> `border-radius`.
fn css_property(name: &str) -> String {
    let mut property = String::with_capacity(name.len() + 2);

    for char in name.chars() {
        if char.is_ascii_uppercase() {
            property.push('-');
            property.push(char.to_ascii_lowercase());
        } else {
            property.push(char);
        }
    }

    property
}
