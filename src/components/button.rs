use indexmap::IndexMap;

use crate::{
    ElementId,
    components::{Icon, OnClickFn, Spinner},
    extensions::click_behavior::{ClickBehavior, ClickBehaviorExt, ClickEvent},
    primitives::{Element, button, span},
    resolver::{
        ContentSpec, ControlBase, EffectiveState, IconName, InteractionState, Kind,
        ResolvedStyle, Size, SlotLayout, StyleSpec, Width, resolve,
    },
    theme::ThemeObject,
};

/// A themed button: label between optional leading and trailing icons, or a
/// single icon, or a spinner while loading.
pub struct Button {
    id: ElementId,
    style: StyleSpec,
    content: ContentSpec,
    attributes: IndexMap<String, String>,
    on_click: Option<OnClickFn>,
    click_behavior: ClickBehavior,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            style: StyleSpec::default(),
            content: ContentSpec::default(),
            attributes: IndexMap::new(),
            on_click: None,
            click_behavior: ClickBehavior::default(),
        }
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.style.kind = kind;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.style.size = size;
        self
    }

    /// Forces an interaction state, mostly for previews and tests.
    pub fn requested_state(mut self, state: InteractionState) -> Self {
        self.style.requested_state = state;
        self
    }

    pub fn outline(mut self, outline: bool) -> Self {
        self.style.outline = outline;
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

    pub fn icon_only(mut self, icon_only: bool) -> Self {
        self.style.icon_only = icon_only;
        self
    }

    pub fn w_full(mut self) -> Self {
        self.style.width = Width::Full;
        self
    }

    pub fn w_auto(mut self) -> Self {
        self.style.width = Width::Auto;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.style.class_name = Some(class_name.into());
        self
    }

    /// Replaces every style axis at once, e.g. with props read from JSON.
    pub fn style_props(mut self, style: StyleSpec) -> Self {
        self.style = style;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content.label = Some(text.into());
        self
    }

    pub fn aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.content.aria_label = Some(aria_label.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<IconName>) -> Self {
        self.content.icon = Some(icon.into());
        self
    }

    pub fn leading_icon(mut self, icon: impl Into<IconName>) -> Self {
        self.content.leading_icon = Some(icon.into());
        self
    }

    pub fn trailing_icon(mut self, icon: impl Into<IconName>) -> Self {
        self.content.trailing_icon = Some(icon.into());
        self
    }

    pub fn icon_size(mut self, px: f32) -> Self {
        self.content.icon_size = Some(px);
        self
    }

    /// Passes an attribute through to the rendered element. Computed
    /// attributes (`class`, `aria-*` the button sets, `disabled`) win.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn on_click(mut self, on_click: impl Fn(&ClickEvent) + 'static) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    pub fn element_id(&self) -> &ElementId {
        &self.id
    }

    pub fn style_spec(&self) -> &StyleSpec {
        &self.style
    }

    pub fn content(&self) -> &ContentSpec {
        &self.content
    }

    pub fn resolve(&self) -> ResolvedStyle {
        resolve(ControlBase::Button, &self.style, &self.content)
    }

    /// Delivers a click. The handler only runs while the button accepts
    /// input; returns whether it did.
    pub fn click(&self, event: &mut ClickEvent) -> bool {
        let effective_state = self.resolve().effective_state();

        if !effective_state.accepts_input() {
            tracing::trace!(id = %self.id, state = %effective_state, "button click ignored");
            return false;
        }

        self.click_behavior.apply(event);

        if let Some(on_click) = &self.on_click {
            (on_click)(event);
        }

        true
    }

    pub fn render(&self, theme: &ThemeObject) -> Element {
        let resolved = self.resolve();
        let passthrough = self
            .attributes
            .iter()
            .filter(|(name, _)| name.as_str() != "class");

        passthrough
            .fold(button(), |this, (name, value)| this.attr(name, value))
            .apply_control(&self.id, &self.style, &resolved, theme)
    }
}

impl ClickBehaviorExt for Button {
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior {
        &mut self.click_behavior
    }
}

/// Lays out a resolved button-like control. Shared by every control whose
/// click target renders as a button.
pub(crate) trait ButtonElement: Sized {
    fn apply_control(
        self,
        id: &ElementId,
        spec: &StyleSpec,
        resolved: &ResolvedStyle,
        theme: &ThemeObject,
    ) -> Self;
}

impl ButtonElement for Element {
    fn apply_control(
        self,
        id: &ElementId,
        spec: &StyleSpec,
        resolved: &ResolvedStyle,
        theme: &ThemeObject,
    ) -> Element {
        let state = resolved.effective_state();
        let icon = |name: &IconName| Icon::new(name.clone()).size(resolved.icon_size()).render();

        let this = self
            .id(id)
            .classes(resolved.classes().classes())
            .attr("type", "button")
            .attr("data-state", state.as_str())
            .attr_opt("aria-label", resolved.accessible_name().as_str())
            .attr_opt(
                "aria-busy",
                (state == EffectiveState::Loading).then_some("true"),
            )
            .attr_opt(
                "aria-disabled",
                (state == EffectiveState::Loading).then_some("true"),
            )
            .flag("disabled", state == EffectiveState::Disabled);

        match resolved.slots() {
            SlotLayout::Spinner => this.child(
                Spinner::new(spec.kind)
                    .size(resolved.icon_size())
                    .on_fill(!spec.outline && spec.kind != Kind::Ghost)
                    .render(theme),
            ),
            SlotLayout::IconOnly { icon: name } => {
                this.when_some(name.as_ref(), |this, name| this.child(icon(name)))
            }
            SlotLayout::Labeled {
                leading,
                label,
                trailing,
            } => this
                .when_some(leading.as_ref(), |this, name| this.child(icon(name)))
                .when_some(label.as_ref(), |this, label| {
                    this.child(span().class("sw-button__label").text(label.as_str()))
                })
                .when_some(trailing.as_ref(), |this, name| this.child(icon(name))),
        }
    }
}
