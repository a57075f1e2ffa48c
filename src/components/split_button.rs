use crate::{
    ElementId,
    components::{
        ButtonElement, OnClickFn,
        menu::{Menu, MenuError, MenuItem, MenuState},
    },
    extensions::click_behavior::{ClickBehavior, ClickBehaviorExt, ClickEvent},
    primitives::{Element, button, div},
    resolver::{
        ContentSpec, ControlBase, IconName, Kind, ResolvedStyle, Size, StyleSpec, Width, resolve,
    },
    theme::ThemeObject,
};

pub const OPEN_MENU_LABEL: &str = "Open menu";
pub const CLOSE_MENU_LABEL: &str = "Close menu";

/// Click targets of a [`SplitButton`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitButtonTarget {
    Primary,
    /// The disclosure toggle that opens and closes the menu.
    Toggle,
    Item(String),
}

/// A primary action next to a menu toggle.
///
/// The two halves are separate click targets with their own disabled flags.
/// Both go through the same state precedence, and the control-wide
/// `disabled`/`loading` flags apply to both.
pub struct SplitButton {
    id: ElementId,
    style: StyleSpec,
    content: ContentSpec,
    primary_disabled: bool,
    toggle_disabled: bool,
    toggle_icon: IconName,
    on_click: Option<OnClickFn>,
    click_behavior: ClickBehavior,
    menu: Menu,
}

impl SplitButton {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            style: StyleSpec::default(),
            content: ContentSpec::default(),
            primary_disabled: false,
            toggle_disabled: false,
            toggle_icon: IconName::from("chevron-down"),
            on_click: None,
            click_behavior: ClickBehavior::default(),
            menu: Menu::default(),
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

    pub fn outline(mut self, outline: bool) -> Self {
        self.style.outline = outline;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.style.loading = loading;
        self
    }

    /// Disables both targets.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.style.disabled = disabled;
        self
    }

    pub fn primary_disabled(mut self, disabled: bool) -> Self {
        self.primary_disabled = disabled;
        self
    }

    pub fn toggle_disabled(mut self, disabled: bool) -> Self {
        self.toggle_disabled = disabled;
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

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content.label = Some(text.into());
        self
    }

    pub fn aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.content.aria_label = Some(aria_label.into());
        self
    }

    pub fn leading_icon(mut self, icon: impl Into<IconName>) -> Self {
        self.content.leading_icon = Some(icon.into());
        self
    }

    pub fn toggle_icon(mut self, icon: impl Into<IconName>) -> Self {
        self.toggle_icon = icon.into();
        self
    }

    pub fn item(mut self, item: MenuItem) -> Self {
        self.menu.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = MenuItem>) -> Self {
        for item in items {
            self.menu.push(item);
        }
        self
    }

    /// Controls the open state. Toggling then only calls `on_open_change`.
    pub fn open(mut self, open: bool) -> Self {
        self.menu.set_controlled(open);
        self
    }

    /// Keeps the open state in `state`, which outlives renders.
    pub fn menu_state(mut self, state: MenuState) -> Self {
        self.menu.set_state(state);
        self
    }

    pub fn on_open_change(mut self, on_open_change: impl Fn(bool) + 'static) -> Self {
        self.menu.set_on_open_change(on_open_change);
        self
    }

    pub fn on_select(mut self, on_select: impl Fn(&str) + 'static) -> Self {
        self.menu.set_on_select(on_select);
        self
    }

    pub fn on_click(mut self, on_click: impl Fn(&ClickEvent) + 'static) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    pub fn is_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn style_spec(&self) -> &StyleSpec {
        &self.style
    }

    pub fn primary_spec(&self) -> StyleSpec {
        let mut spec = self.style.clone();
        spec.disabled |= self.primary_disabled;
        spec.class_name = None;
        spec
    }

    pub fn toggle_spec(&self) -> StyleSpec {
        let mut spec = self.style.clone();
        spec.disabled |= self.toggle_disabled;
        spec.icon_only = true;
        spec.width = Width::Auto;
        spec.class_name = None;
        spec
    }

    fn toggle_content(&self) -> ContentSpec {
        let label = if self.is_open() {
            CLOSE_MENU_LABEL
        } else {
            OPEN_MENU_LABEL
        };

        ContentSpec::new()
            .icon(self.toggle_icon.clone())
            .aria_label(label)
    }

    /// The group as a whole.
    pub fn resolve(&self) -> ResolvedStyle {
        resolve(ControlBase::SplitButton, &self.style, &self.content)
    }

    pub fn resolve_primary(&self) -> ResolvedStyle {
        resolve(ControlBase::Button, &self.primary_spec(), &self.content)
    }

    pub fn resolve_toggle(&self) -> ResolvedStyle {
        resolve(
            ControlBase::SplitButtonToggle,
            &self.toggle_spec(),
            &self.toggle_content(),
        )
    }

    /// Delivers a click to one target. Returns whether the target accepted
    /// it; clicks on disabled targets and disabled items are ignored.
    pub fn click(
        &self,
        target: SplitButtonTarget,
        event: &mut ClickEvent,
    ) -> Result<bool, MenuError> {
        match target {
            SplitButtonTarget::Primary => {
                if !self.resolve_primary().accepts_input() {
                    return Ok(false);
                }

                self.click_behavior.apply(event);

                if let Some(on_click) = &self.on_click {
                    (on_click)(event);
                }

                Ok(true)
            }
            SplitButtonTarget::Toggle => {
                if !self.resolve_toggle().accepts_input() {
                    return Ok(false);
                }

                self.menu.toggle(event);
                Ok(true)
            }
            SplitButtonTarget::Item(id) => {
                self.menu.item(&id)?;

                if !self.resolve_toggle().accepts_input() {
                    return Ok(false);
                }

                self.menu.select(&id, event)
            }
        }
    }

    pub fn render(&self, theme: &ThemeObject) -> Element {
        let group = self.resolve();
        let primary_spec = self.primary_spec();
        let toggle_spec = self.toggle_spec();
        let menu_id = self.id.with_suffix("menu");
        let open = self.is_open();

        let primary = button().apply_control(
            &self.id.with_suffix("primary"),
            &primary_spec,
            &self.resolve_primary(),
            theme,
        );

        let toggle = button()
            .apply_control(
                &self.id.with_suffix("toggle"),
                &toggle_spec,
                &self.resolve_toggle(),
                theme,
            )
            .attr("aria-haspopup", "menu")
            .attr("aria-expanded", open.to_string())
            .attr_opt("aria-controls", open.then(|| menu_id.to_string()));

        div()
            .id(&self.id)
            .classes(group.classes().classes())
            .attr("role", "group")
            .attr_opt("aria-label", group.accessible_name().as_str())
            .child(primary)
            .child(toggle)
            .when(open, |this| this.child(self.menu.render(&menu_id, theme)))
    }
}

impl ClickBehaviorExt for SplitButton {
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior {
        &mut self.click_behavior
    }
}
