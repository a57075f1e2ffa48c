use crate::extensions::click_behavior::ClickEvent;

/// Click handler stored by components.
pub type OnClickFn = Box<dyn Fn(&ClickEvent) + 'static>;

mod button;
pub use button::Button;
pub(crate) use button::ButtonElement;

mod count_tag;
pub use count_tag::*;

mod icon;
pub use icon::*;

mod input;
pub use input::*;

mod menu;
pub use menu::{MenuError, MenuItem, MenuState};

mod spinner;
pub use spinner::*;

mod split_button;
pub use split_button::*;

mod table_header;
pub use table_header::*;
