#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

use crate::{
    ElementId,
    components::{Icon, Spinner},
    primitives::{Element, div, span},
    resolver::{
        AccessibleName, ContentSpec, ControlBase, EffectiveState, IconName, InteractionState,
        Kind, ResolvedStyle, Size, StyleSpec, Width, resolve,
    },
    theme::{ThemeObject, ThemePaletteKind, ThemeSurfaceKind},
};

/// Validation status shown by an [`Input`].
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[func(pub fn kind(&self) -> Kind)]
pub enum InputStatus {
    #[assoc(kind = Kind::Error)]
    Error,
    #[assoc(kind = Kind::Warning)]
    Warning,
    #[assoc(kind = Kind::Success)]
    Success,
    #[assoc(kind = Kind::Info)]
    Info,
}

/// A labelled single-line text field.
///
/// The value is controlled: [`Input::input`] reports edits through
/// `on_input` and the caller feeds the new value back in.
pub struct Input {
    id: ElementId,
    style: StyleSpec,
    label: Option<String>,
    aria_label: Option<String>,
    value: String,
    placeholder: Option<String>,
    helper_text: Option<String>,
    status: Option<InputStatus>,
    leading_icon: Option<IconName>,
    trailing_icon: Option<IconName>,
    on_input: Option<Box<dyn Fn(&str) + 'static>>,
}

impl Input {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            style: StyleSpec::default(),
            label: None,
            aria_label: None,
            value: String::new(),
            placeholder: None,
            helper_text: None,
            status: None,
            leading_icon: None,
            trailing_icon: None,
            on_input: None,
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.style.size = size;
        self
    }

    pub fn requested_state(mut self, state: InteractionState) -> Self {
        self.style.requested_state = state;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.style.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.style.disabled = disabled;
        self
    }

    pub fn w_full(mut self) -> Self {
        self.style.width = Width::Full;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.style.class_name = Some(class_name.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = Some(aria_label.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    pub fn status(mut self, status: InputStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn leading_icon(mut self, icon: impl Into<IconName>) -> Self {
        self.leading_icon = Some(icon.into());
        self
    }

    pub fn trailing_icon(mut self, icon: impl Into<IconName>) -> Self {
        self.trailing_icon = Some(icon.into());
        self
    }

    pub fn on_input(mut self, on_input: impl Fn(&str) + 'static) -> Self {
        self.on_input = Some(Box::new(on_input));
        self
    }

    pub fn current_value(&self) -> &str {
        &self.value
    }

    /// The status kind colours the control; without a status it is primary.
    pub fn style_spec(&self) -> StyleSpec {
        let mut spec = self.style.clone();
        spec.kind = self.status.map(|status| status.kind()).unwrap_or_default();
        spec
    }

    pub fn content(&self) -> ContentSpec {
        ContentSpec {
            label: self.label.clone(),
            aria_label: self.aria_label.clone(),
            leading_icon: self.leading_icon.clone(),
            trailing_icon: self.trailing_icon.clone(),
            ..ContentSpec::default()
        }
    }

    pub fn resolve(&self) -> ResolvedStyle {
        resolve(ControlBase::Input, &self.style_spec(), &self.content())
    }

    /// Delivers an edit. Returns whether `on_input` ran.
    pub fn input(&self, value: &str) -> bool {
        let effective_state = self.resolve().effective_state();

        if !effective_state.accepts_input() {
            tracing::trace!(id = %self.id, state = %effective_state, "input ignored");
            return false;
        }

        if let Some(on_input) = &self.on_input {
            (on_input)(value);
        }

        true
    }

    /// Unlike buttons, a loading input keeps its leading icon and only swaps
    /// the trailing icon for the spinner, so the layout is built here rather
    /// than taken from [`ResolvedStyle::slots`]. Icons take the status colour.
    pub fn render(&self, theme: &ThemeObject) -> Element {
        let resolved = self.resolve();
        let state = resolved.effective_state();
        let field_id = self.id.with_suffix("field");
        let helper_id = self.id.with_suffix("helper");
        let status_color = self
            .status
            .map(|status| ThemePaletteKind::from(status.kind()).resolve(theme).main.clone());
        let icon = |name: &IconName| {
            let icon = Icon::new(name.clone()).size(resolved.icon_size());
            match &status_color {
                Some(color) => icon.color(color.clone()),
                None => icon,
            }
            .render()
        };

        // A visible label names the field through `for`; the resolved name
        // only needs an attribute when it differs from it.
        let aria_label = match resolved.accessible_name() {
            AccessibleName::Label(name)
                if self.label.as_deref().map(str::trim) == Some(name.as_str()) =>
            {
                None
            }
            name => name.as_str(),
        };

        let label = self.label.as_ref().map(|label| {
            Element::new("label")
                .class("sw-input__label")
                .attr("for", field_id.as_str())
                .text(label.as_str())
        });

        let field = Element::new("input")
            .id(&field_id)
            .class("sw-input__control")
            .attr("type", "text")
            .attr("value", self.value.as_str())
            .attr_opt("placeholder", self.placeholder.as_deref())
            .attr_opt("aria-label", aria_label)
            .attr_opt(
                "aria-describedby",
                self.helper_text.as_ref().map(|_| helper_id.to_string()),
            )
            .attr_opt(
                "aria-invalid",
                (self.status == Some(InputStatus::Error)).then_some("true"),
            )
            .attr_opt("aria-busy", (state == EffectiveState::Loading).then_some("true"))
            .flag("readonly", state == EffectiveState::Loading)
            .flag("disabled", state == EffectiveState::Disabled);

        let trailing = if state == EffectiveState::Loading {
            Some(
                Spinner::new(self.style_spec().kind)
                    .size(resolved.icon_size())
                    .render(theme),
            )
        } else {
            self.trailing_icon.as_ref().map(|name| icon(name))
        };

        let helper_color = status_color
            .as_ref()
            .unwrap_or_else(|| ThemeSurfaceKind::TextSecondary.resolve(theme));

        let helper = self.helper_text.as_ref().map(|helper_text| {
            span()
                .id(&helper_id)
                .class("sw-input__helper")
                .style("color", helper_color.as_str())
                .text(helper_text.as_str())
        });

        let control = div()
            .class("sw-input__field")
            .when_some(theme.component("MuiOutlinedInput"), |this, input| {
                match input.rules("root") {
                    Some(rules) => this.style_rules(rules),
                    None => this,
                }
            })
            .when_some(self.leading_icon.as_ref(), |this, name| this.child(icon(name)))
            .child(field)
            .when_some(trailing, |this, trailing| this.child(trailing));

        div()
            .id(&self.id)
            .classes(resolved.classes().classes())
            .attr("data-state", state.as_str())
            .attr_opt("data-status", self.status.map(|status| status.kind().as_str()))
            .when_some(label, |this, label| this.child(label))
            .child(control)
            .when_some(helper, |this, helper| this.child(helper))
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use crate::{
        resolver::{Defect, LOADING_LABEL},
        theme::ThemeHandle,
    };

    use super::*;

    fn recording_input(edits: &Rc<RefCell<Vec<String>>>) -> Input {
        let edits = edits.clone();
        Input::new("email")
            .label("Email")
            .on_input(move |value| edits.borrow_mut().push(value.to_string()))
    }

    #[test]
    fn test_input_reports_edits() {
        let edits = Rc::new(RefCell::new(Vec::new()));

        assert!(recording_input(&edits).input("a@b.c"));
        assert_eq!(*edits.borrow(), ["a@b.c"]);
    }

    #[test]
    fn test_input_short_circuits_when_not_accepting() {
        let edits = Rc::new(RefCell::new(Vec::new()));

        assert!(!recording_input(&edits).disabled(true).input("x"));
        assert!(!recording_input(&edits).loading(true).input("y"));
        assert!(edits.borrow().is_empty());
    }

    #[test]
    fn test_label_association() {
        let handle = ThemeHandle::builtin().unwrap();
        let element = Input::new("email")
            .label("Email")
            .placeholder("you@example.com")
            .render(handle.theme());

        let label = element.find(|element| element.tag() == "label").unwrap();
        assert_eq!(label.attribute("for"), Some("email-field"));

        let field = element.find_by_id("email-field").unwrap();
        assert_eq!(field.tag(), "input");
        assert_eq!(field.attribute("placeholder"), Some("you@example.com"));
        assert!(
            !field.has_attribute("aria-label"),
            "The visible label already names the field"
        );
    }

    #[test]
    fn test_status_colours_and_describes() {
        let handle = ThemeHandle::builtin().unwrap();
        let input = Input::new("name")
            .label("Name")
            .helper_text("Required")
            .status(InputStatus::Error);
        let element = input.render(handle.theme());

        assert!(element.has_class("sw-input--kind-error"));
        assert_eq!(element.attribute("data-status"), Some("error"));

        let field = element.find_by_id("name-field").unwrap();
        assert_eq!(field.attribute("aria-invalid"), Some("true"));
        assert_eq!(field.attribute("aria-describedby"), Some("name-helper"));

        let helper = element.find_by_id("name-helper").unwrap();
        assert_eq!(helper.style_value("color"), Some("var(--color-error-red)"));
    }

    #[test]
    fn test_status_colours_icons() {
        let handle = ThemeHandle::builtin().unwrap();
        let icon_color = |input: Input| {
            input
                .render(handle.theme())
                .find(|element| element.attribute("data-icon") == Some("mail"))
                .and_then(|icon| icon.style_value("color"))
                .map(str::to_string)
        };

        let plain = Input::new("email").label("Email").leading_icon("mail");
        assert_eq!(icon_color(plain), None);

        let warned = Input::new("email")
            .label("Email")
            .leading_icon("mail")
            .status(InputStatus::Warning);
        assert_eq!(
            icon_color(warned).as_deref(),
            Some("var(--color-warning-amber)")
        );
    }

    #[test]
    fn test_loading_replaces_trailing_icon() {
        let handle = ThemeHandle::builtin().unwrap();
        let element = Input::new("search")
            .aria_label("Search")
            .leading_icon("search")
            .trailing_icon("close")
            .loading(true)
            .render(handle.theme());

        assert!(element.find_by_class("sw-spinner").is_some());
        assert!(
            element
                .find(|element| element.attribute("data-icon") == Some("close"))
                .is_none()
        );
        assert!(
            element
                .find(|element| element.attribute("data-icon") == Some("search"))
                .is_some()
        );

        let field = element.find_by_id("search-field").unwrap();
        assert_eq!(field.attribute("aria-label"), Some(LOADING_LABEL));
        assert!(field.has_attribute("readonly"));
    }

    #[test]
    fn test_unlabelled_input_is_flagged() {
        assert!(
            Input::new("anon")
                .resolve()
                .has_defect(Defect::MissingAccessibleName)
        );
    }

    #[test]
    fn test_field_picks_up_outlined_input_override() {
        let handle = ThemeHandle::builtin().unwrap();
        let element = Input::new("city").label("City").render(handle.theme());

        let field = element.find_by_class("sw-input__field").unwrap();
        assert_eq!(field.style_value("border-radius"), Some("var(--radius-md)"));
    }
}
