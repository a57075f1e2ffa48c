use std::{cell::Cell, rc::Rc};

use thiserror::Error;

use crate::{
    ElementId,
    components::{Icon, OnClickFn},
    extensions::click_behavior::{ClickBehavior, ClickEvent},
    primitives::{Element, div, span},
    resolver::{
        ContentSpec, ControlBase, IconName, Kind, ResolvedStyle, Size, StyleSpec, resolve,
    },
    theme::ThemeObject,
};

/// Open/closed state of a menu that the caller does not control.
///
/// Clones share the same state. Defaults to closed.
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    open: Rc<Cell<bool>>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn set_open(&self, open: bool) {
        self.open.set(open);
    }
}

/// One entry of a control's menu.
pub struct MenuItem {
    id: String,
    label: String,
    icon: Option<IconName>,
    kind: Kind,
    disabled: bool,
    on_click: Option<OnClickFn>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            kind: Kind::Ghost,
            disabled: false,
            on_click: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<IconName>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, on_click: impl Fn(&ClickEvent) + 'static) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn style_spec(&self) -> StyleSpec {
        StyleSpec::new()
            .kind(self.kind)
            .size(Size::Small)
            .disabled(self.disabled)
    }

    pub fn resolve(&self) -> ResolvedStyle {
        let mut content = ContentSpec::new().label(self.label.clone());
        content.leading_icon = self.icon.clone();

        resolve(ControlBase::MenuItem, &self.style_spec(), &content)
    }

    pub(crate) fn render(&self, menu_id: &ElementId) -> Element {
        let resolved = self.resolve();

        div()
            .id(menu_id.with_suffix(&self.id))
            .classes(resolved.classes().classes())
            .attr("role", "menuitem")
            .attr("data-item", self.id.as_str())
            .attr_opt("aria-disabled", self.disabled.then_some("true"))
            .when_some(self.icon.clone(), |this, icon| {
                this.child(Icon::new(icon).size(resolved.icon_size()).render())
            })
            .child(span().class("sw-menu-item__label").text(self.label.as_str()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("A menu item with id `{0}` doesn't exist.")]
    UnknownItem(String),
}

enum MenuOpen {
    Controlled(bool),
    Uncontrolled(MenuState),
}

/// Items plus open state, shared by the controls that own a menu.
pub(crate) struct Menu {
    items: Vec<MenuItem>,
    open: MenuOpen,
    on_open_change: Option<Box<dyn Fn(bool) + 'static>>,
    on_select: Option<Box<dyn Fn(&str) + 'static>>,
    click_behavior: ClickBehavior,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            open: MenuOpen::Uncontrolled(MenuState::new()),
            on_open_change: None,
            on_select: None,
            click_behavior: ClickBehavior::default(),
        }
    }
}

impl Menu {
    pub(crate) fn push(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The caller owns the open state; the menu only reports requested changes.
    pub(crate) fn set_controlled(&mut self, open: bool) {
        self.open = MenuOpen::Controlled(open);
    }

    pub(crate) fn set_state(&mut self, state: MenuState) {
        self.open = MenuOpen::Uncontrolled(state);
    }

    pub(crate) fn set_on_open_change(&mut self, on_open_change: impl Fn(bool) + 'static) {
        self.on_open_change = Some(Box::new(on_open_change));
    }

    pub(crate) fn set_on_select(&mut self, on_select: impl Fn(&str) + 'static) {
        self.on_select = Some(Box::new(on_select));
    }

    pub(crate) fn is_open(&self) -> bool {
        match &self.open {
            MenuOpen::Controlled(open) => *open,
            MenuOpen::Uncontrolled(state) => state.is_open(),
        }
    }

    pub(crate) fn set_open(&self, open: bool) {
        if self.is_open() == open {
            return;
        }

        if let MenuOpen::Uncontrolled(state) = &self.open {
            state.set_open(open);
        }

        tracing::trace!(open, "menu open state changed");

        if let Some(on_open_change) = &self.on_open_change {
            (on_open_change)(open);
        }
    }

    pub(crate) fn toggle(&self, event: &mut ClickEvent) {
        self.click_behavior.apply(event);
        self.set_open(!self.is_open());
    }

    pub(crate) fn item(&self, id: &str) -> Result<&MenuItem, MenuError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or_else(|| MenuError::UnknownItem(id.to_string()))
    }

    /// Activates an item and closes the menu. Disabled items, and items of
    /// a closed menu, are ignored.
    pub(crate) fn select(&self, id: &str, event: &mut ClickEvent) -> Result<bool, MenuError> {
        let item = self.item(id)?;

        if item.disabled || !self.is_open() {
            tracing::trace!(item = id, open = self.is_open(), "menu item click ignored");
            return Ok(false);
        }

        self.click_behavior.apply(event);

        if let Some(on_click) = &item.on_click {
            (on_click)(event);
        }

        if let Some(on_select) = &self.on_select {
            (on_select)(id);
        }

        self.set_open(false);

        Ok(true)
    }

    pub(crate) fn render(&self, id: &ElementId, theme: &ThemeObject) -> Element {
        let menu = theme.component("MuiMenu");

        div()
            .id(id)
            .class("sw-menu")
            .attr("role", "menu")
            .when_some(menu.and_then(|menu| menu.rules("paper")), |this, rules| {
                this.style_rules(rules)
            })
            .when_some(menu.and_then(|menu| menu.rules("list")), |this, rules| {
                this.style_rules(rules)
            })
            .children(self.items.iter().map(|item| item.render(id)))
    }
}
