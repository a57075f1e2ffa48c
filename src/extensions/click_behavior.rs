/// A click delivered to a control.
///
/// Handlers see the event after the control has applied its
/// [`ClickBehavior`], so parents can check whether propagation was stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickEvent {
    propagation_stopped: bool,
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Settings that control click event behavior.
///
/// By default, click handlers stop propagation and prevent the default
/// action. This struct allows components to opt out of this behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickBehavior {
    /// If true, propagation will NOT be stopped.
    pub allow_propagation: bool,
    /// If true, the default action will NOT be prevented.
    pub allow_default: bool,
}

impl ClickBehavior {
    /// Lets both propagation and the default action through.
    pub const PASSTHROUGH: ClickBehavior = ClickBehavior {
        allow_propagation: true,
        allow_default: true,
    };

    /// Applies the click behavior settings to the event.
    pub fn apply(&self, event: &mut ClickEvent) {
        if !self.allow_default {
            event.prevent_default();
        }
        if !self.allow_propagation {
            event.stop_propagation();
        }
    }
}

/// A trait for components that support controlling click event behavior.
pub trait ClickBehaviorExt: Sized {
    /// Returns a mutable reference to the click behavior settings.
    fn click_behavior_mut(&mut self) -> &mut ClickBehavior;

    /// Allows the click event to propagate to parent elements.
    fn allow_click_propagation(mut self) -> Self {
        self.click_behavior_mut().allow_propagation = true;
        self
    }

    /// Allows the default behavior for the click event.
    fn allow_default_click_behaviour(mut self) -> Self {
        self.click_behavior_mut().allow_default = true;
        self
    }

    /// Stops the click event at this element.
    fn stop_click_propagation(mut self) -> Self {
        self.click_behavior_mut().allow_propagation = false;
        self
    }
}
