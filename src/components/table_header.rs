use crate::{
    ElementId,
    components::{
        Button, ButtonElement, CountTag, OnClickFn,
        menu::{Menu, MenuError, MenuItem, MenuState},
    },
    extensions::click_behavior::{ClickBehavior, ClickEvent},
    primitives::{Element, button, div, span},
    resolver::{
        ContentSpec, ControlBase, IconName, Kind, ResolvedStyle, Size, StyleSpec, Width,
        effective_state, resolve,
    },
    theme::{ThemeObject, ThemeSurfaceKind, ThemeTextKind, TypeStyle},
};

use super::split_button::{CLOSE_MENU_LABEL, OPEN_MENU_LABEL};

/// Click targets of a [`TableHeader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderTarget {
    Title,
    MenuToggle,
    MenuItem(String),
    /// An action button, by position.
    Action(usize),
}

/// Header above a table: title, count tag, subtext, a group of action
/// buttons and an optional menu.
///
/// Each part is its own click target. A header-level `on_click` sees a click
/// only when the target let it propagate: the title does by default, actions
/// and the menu stop it.
pub struct TableHeader {
    id: ElementId,
    title: String,
    count: Option<CountTag>,
    subtext: Option<String>,
    size: Size,
    width: Width,
    class_name: Option<String>,
    actions: Vec<Button>,
    menu: Menu,
    menu_icon: IconName,
    menu_disabled: bool,
    title_click_behavior: ClickBehavior,
    on_title_click: Option<OnClickFn>,
    on_click: Option<OnClickFn>,
}

impl TableHeader {
    pub fn new(id: impl Into<ElementId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            count: None,
            subtext: None,
            size: Size::Default,
            width: Width::Full,
            class_name: None,
            actions: Vec::new(),
            menu: Menu::default(),
            menu_icon: IconName::from("more-vertical"),
            menu_disabled: false,
            title_click_behavior: ClickBehavior::PASSTHROUGH,
            on_title_click: None,
            on_click: None,
        }
    }

    pub fn count(mut self, count: u64) -> Self {
        self.count = Some(CountTag::new(count));
        self
    }

    pub fn count_tag(mut self, count_tag: CountTag) -> Self {
        self.count = Some(count_tag);
        self
    }

    pub fn subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn w_auto(mut self) -> Self {
        self.width = Width::Auto;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn action(mut self, action: Button) -> Self {
        self.actions.push(action);
        self
    }

    pub fn menu_item(mut self, item: MenuItem) -> Self {
        self.menu.push(item);
        self
    }

    pub fn menu_icon(mut self, icon: impl Into<IconName>) -> Self {
        self.menu_icon = icon.into();
        self
    }

    pub fn menu_disabled(mut self, disabled: bool) -> Self {
        self.menu_disabled = disabled;
        self
    }

    pub fn menu_open(mut self, open: bool) -> Self {
        self.menu.set_controlled(open);
        self
    }

    pub fn menu_state(mut self, state: MenuState) -> Self {
        self.menu.set_state(state);
        self
    }

    pub fn on_menu_open_change(mut self, on_open_change: impl Fn(bool) + 'static) -> Self {
        self.menu.set_on_open_change(on_open_change);
        self
    }

    pub fn on_menu_select(mut self, on_select: impl Fn(&str) + 'static) -> Self {
        self.menu.set_on_select(on_select);
        self
    }

    pub fn on_title_click(mut self, on_title_click: impl Fn(&ClickEvent) + 'static) -> Self {
        self.on_title_click = Some(Box::new(on_title_click));
        self
    }

    /// Stops title clicks from reaching the header-level handler.
    pub fn stop_title_propagation(mut self) -> Self {
        self.title_click_behavior.allow_propagation = false;
        self
    }

    /// Runs for clicks that no target stopped.
    pub fn on_click(mut self, on_click: impl Fn(&ClickEvent) + 'static) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    pub fn has_menu(&self) -> bool {
        !self.menu.is_empty()
    }

    /// A disabled toggle keeps the menu closed, even when it is controlled open.
    pub fn is_menu_open(&self) -> bool {
        self.has_menu() && self.menu_accepts_input() && self.menu.is_open()
    }

    fn menu_accepts_input(&self) -> bool {
        effective_state(&self.menu_toggle_spec()).accepts_input()
    }

    pub fn style_spec(&self) -> StyleSpec {
        let mut spec = StyleSpec::new().kind(Kind::Ghost).size(self.size).width(self.width);
        spec.class_name = self.class_name.clone();
        spec
    }

    pub fn resolve(&self) -> ResolvedStyle {
        resolve(
            ControlBase::TableHeader,
            &self.style_spec(),
            &ContentSpec::new().label(self.title.clone()),
        )
    }

    fn menu_toggle_spec(&self) -> StyleSpec {
        StyleSpec::new()
            .kind(Kind::Ghost)
            .size(self.size)
            .icon_only(true)
            .disabled(self.menu_disabled)
    }

    pub fn resolve_menu_toggle(&self) -> ResolvedStyle {
        let label = if self.is_menu_open() {
            CLOSE_MENU_LABEL
        } else {
            OPEN_MENU_LABEL
        };

        resolve(
            ControlBase::Button,
            &self.menu_toggle_spec(),
            &ContentSpec::new()
                .icon(self.menu_icon.clone())
                .aria_label(label),
        )
    }

    /// Routes a click to its target, then to the header-level handler when
    /// the target accepted it without stopping propagation.
    pub fn click(&self, target: HeaderTarget, event: &mut ClickEvent) -> Result<bool, MenuError> {
        let accepted = match &target {
            HeaderTarget::Title => {
                self.title_click_behavior.apply(event);

                if let Some(on_title_click) = &self.on_title_click {
                    (on_title_click)(event);
                }

                true
            }
            HeaderTarget::MenuToggle => {
                if self.has_menu() && self.menu_accepts_input() {
                    self.menu.toggle(event);
                    true
                } else {
                    false
                }
            }
            HeaderTarget::MenuItem(id) => {
                self.menu.item(id)?;

                if self.menu_accepts_input() {
                    self.menu.select(id, event)?
                } else {
                    false
                }
            }
            HeaderTarget::Action(index) => match self.actions.get(*index) {
                Some(action) => action.click(event),
                None => {
                    tracing::warn!(id = %self.id, index, "click on a missing header action");
                    false
                }
            },
        };

        tracing::trace!(id = %self.id, ?target, accepted, "table header click");

        if accepted
            && !event.is_propagation_stopped()
            && let Some(on_click) = &self.on_click
        {
            (on_click)(event);
        }

        Ok(accepted)
    }

    pub fn render(&self, theme: &ThemeObject) -> Element {
        let resolved = self.resolve();
        let menu_id = self.id.with_suffix("menu");
        let open = self.is_menu_open();

        let title = span()
            .id(self.id.with_suffix("title"))
            .class("sw-table-header__title")
            .attr("role", "heading")
            .typography(ThemeTextKind::Title.resolve(theme))
            .style("color", ThemeSurfaceKind::TextPrimary.resolve(theme).as_str())
            .text(self.title.as_str());

        let heading = div()
            .class("sw-table-header__heading")
            .child(title)
            .when_some(self.count.as_ref(), |this, count| this.child(count.render()));

        let subtext = self.subtext.as_ref().map(|subtext| {
            span()
                .class("sw-table-header__subtext")
                .typography(ThemeTextKind::Caption.resolve(theme))
                .style(
                    "color",
                    ThemeSurfaceKind::TextSecondary.resolve(theme).as_str(),
                )
                .text(subtext.as_str())
        });

        let menu_toggle = self.has_menu().then(|| {
            button()
                .apply_control(
                    &self.id.with_suffix("menu-toggle"),
                    &self.menu_toggle_spec(),
                    &self.resolve_menu_toggle(),
                    theme,
                )
                .attr("aria-haspopup", "menu")
                .attr("aria-expanded", open.to_string())
                .attr_opt("aria-controls", open.then(|| menu_id.to_string()))
        });

        let actions = div()
            .class("sw-table-header__actions")
            .attr("role", "group")
            .children(self.actions.iter().map(|action| action.render(theme)))
            .when_some(menu_toggle, |this, toggle| this.child(toggle))
            .when(open, |this| this.child(self.menu.render(&menu_id, theme)));

        div()
            .id(&self.id)
            .classes(resolved.classes().classes())
            .style(
                "border-bottom-color",
                ThemeSurfaceKind::Divider.resolve(theme).as_str(),
            )
            .child(heading)
            .when_some(subtext, |this, subtext| this.child(subtext))
            .child(actions)
    }
}

trait TypographyElement {
    fn typography(self, style: &TypeStyle) -> Self;
}

impl TypographyElement for Element {
    fn typography(self, style: &TypeStyle) -> Self {
        self.style("font-family", style.font_family.as_str())
            .style("font-size", style.font_size.as_str())
            .style("font-weight", style.font_weight.as_str())
            .style("line-height", style.line_height.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use crate::theme::ThemeHandle;

    use super::*;

    struct Counters {
        title: Rc<Cell<u32>>,
        header: Rc<Cell<u32>>,
        action: Rc<Cell<u32>>,
        item: Rc<Cell<u32>>,
    }

    fn header() -> (TableHeader, Counters) {
        let counters = Counters {
            title: Rc::new(Cell::new(0)),
            header: Rc::new(Cell::new(0)),
            action: Rc::new(Cell::new(0)),
            item: Rc::new(Cell::new(0)),
        };

        let bump = |counter: &Rc<Cell<u32>>| {
            let counter = counter.clone();
            move |_event: &ClickEvent| counter.set(counter.get() + 1)
        };

        let header = TableHeader::new("users", "Users")
            .count_tag(CountTag::new(1_204).cap(999))
            .subtext("Everyone with access to this workspace")
            .action(Button::new("invite").text("Invite").on_click(bump(&counters.action)))
            .action(Button::new("remove").text("Remove").disabled(true))
            .menu_item(MenuItem::new("export", "Export").on_click(bump(&counters.item)))
            .on_title_click(bump(&counters.title))
            .on_click(bump(&counters.header));

        (header, counters)
    }

    #[test]
    fn test_title_click_reaches_header() {
        let (header, counters) = header();

        assert_eq!(header.click(HeaderTarget::Title, &mut ClickEvent::new()), Ok(true));
        assert_eq!(counters.title.get(), 1);
        assert_eq!(counters.header.get(), 1, "Title clicks propagate by default");
    }

    #[test]
    fn test_title_propagation_can_be_stopped() {
        let (header, counters) = header();
        let header = header.stop_title_propagation();

        header.click(HeaderTarget::Title, &mut ClickEvent::new()).unwrap();
        assert_eq!(counters.title.get(), 1);
        assert_eq!(counters.header.get(), 0);
    }

    #[test]
    fn test_action_click_does_not_reach_header() {
        let (header, counters) = header();

        assert_eq!(header.click(HeaderTarget::Action(0), &mut ClickEvent::new()), Ok(true));
        assert_eq!(counters.action.get(), 1);
        assert_eq!(counters.header.get(), 0);
        assert_eq!(counters.title.get(), 0);
    }

    #[test]
    fn test_disabled_and_missing_actions() {
        let (header, counters) = header();

        assert_eq!(header.click(HeaderTarget::Action(1), &mut ClickEvent::new()), Ok(false));
        assert_eq!(header.click(HeaderTarget::Action(9), &mut ClickEvent::new()), Ok(false));
        assert_eq!(counters.header.get(), 0, "Ignored clicks never reach the header");
    }

    #[test]
    fn test_menu_targets() {
        let (header, counters) = header();
        let header = header.menu_state(MenuState::new());

        assert_eq!(header.click(HeaderTarget::MenuToggle, &mut ClickEvent::new()), Ok(true));
        assert!(header.is_menu_open());

        assert_eq!(
            header.click(HeaderTarget::MenuItem("export".into()), &mut ClickEvent::new()),
            Ok(true)
        );
        assert_eq!(counters.item.get(), 1);
        assert!(!header.is_menu_open());
        assert_eq!(counters.header.get(), 0, "Menu clicks stop propagation");

        assert_eq!(
            header.click(HeaderTarget::MenuItem("import".into()), &mut ClickEvent::new()),
            Err(MenuError::UnknownItem("import".to_string()))
        );
    }

    #[test]
    fn test_disabled_menu_ignores_item_clicks() {
        let (header, counters) = header();
        let header = header.menu_disabled(true).menu_open(true);

        assert!(!header.is_menu_open());
        assert_eq!(header.click(HeaderTarget::MenuToggle, &mut ClickEvent::new()), Ok(false));
        assert_eq!(
            header.click(HeaderTarget::MenuItem("export".into()), &mut ClickEvent::new()),
            Ok(false)
        );
        assert_eq!(counters.item.get(), 0);
        assert_eq!(counters.header.get(), 0);

        assert_eq!(
            header.click(HeaderTarget::MenuItem("import".into()), &mut ClickEvent::new()),
            Err(MenuError::UnknownItem("import".to_string()))
        );

        let handle = ThemeHandle::builtin().unwrap();
        let element = header.render(handle.theme());
        assert!(element.find_by_id("users-menu").is_none());

        let toggle = element.find_by_id("users-menu-toggle").unwrap();
        assert!(toggle.has_attribute("disabled"));
        assert_eq!(toggle.attribute("aria-expanded"), Some("false"));
    }

    #[test]
    fn test_header_without_menu_ignores_toggle() {
        let header = TableHeader::new("plain", "Plain");

        assert!(!header.has_menu());
        assert_eq!(header.click(HeaderTarget::MenuToggle, &mut ClickEvent::new()), Ok(false));
    }

    #[test]
    fn test_render() {
        let handle = ThemeHandle::builtin().unwrap();
        let (header, _counters) = header();
        let element = header.render(handle.theme());

        assert!(element.has_class("sw-table-header--full-width"));

        let title = element.find_by_id("users-title").unwrap();
        assert_eq!(title.text_value(), Some("Users"));
        assert_eq!(title.style_value("font-size"), Some("var(--font-size-h6)"));

        let count = element.find_by_class("sw-count-tag").unwrap();
        assert_eq!(count.text_value(), Some("999+"));

        let subtext = element.find_by_class("sw-table-header__subtext").unwrap();
        assert_eq!(
            subtext.style_value("color"),
            Some("var(--color-text-secondary)")
        );

        assert!(element.find_by_id("invite").is_some());
        assert!(element.find_by_id("remove").unwrap().has_attribute("disabled"));

        let toggle = element.find_by_id("users-menu-toggle").unwrap();
        assert_eq!(toggle.attribute("aria-label"), Some(OPEN_MENU_LABEL));
        assert!(element.find_by_id("users-menu").is_none());
    }
}
