#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use serde::Serialize;
use smallvec::SmallVec;

use super::{EffectiveState, IconBucket, IconName, Kind, Size};

/// Accessible name every loading control announces.
pub const LOADING_LABEL: &str = "Loading...";

/// Which control family a class list belongs to.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
#[func(pub fn marker(&self) -> &'static str)]
pub enum ControlBase {
    #[assoc(marker = "sw-button")]
    Button,
    #[assoc(marker = "sw-split-button")]
    SplitButton,
    #[assoc(marker = "sw-split-button-toggle")]
    SplitButtonToggle,
    #[assoc(marker = "sw-menu-item")]
    MenuItem,
    #[assoc(marker = "sw-table-header")]
    TableHeader,
    #[assoc(marker = "sw-count-tag")]
    CountTag,
    #[assoc(marker = "sw-input")]
    Input,
}

/// One entry of a [`ClassList`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "token", content = "value", rename_all = "kebab-case")]
pub enum ClassToken {
    Base,
    Size(Size),
    Kind(Kind),
    State(EffectiveState),
    Outline,
    IconOnly,
    FullWidth,
    /// Caller-supplied, emitted verbatim.
    Extra(String),
}

impl ClassToken {
    pub fn to_class(&self, base: ControlBase) -> String {
        let marker = base.marker();

        match self {
            ClassToken::Base => marker.to_string(),
            ClassToken::Size(size) => format!("{marker}--size-{}", size.as_str()),
            ClassToken::Kind(kind) => format!("{marker}--kind-{}", kind.as_str()),
            ClassToken::State(state) => format!("{marker}--state-{}", state.as_str()),
            ClassToken::Outline => format!("{marker}--outline"),
            ClassToken::IconOnly => format!("{marker}--icon-only"),
            ClassToken::FullWidth => format!("{marker}--full-width"),
            ClassToken::Extra(extra) => extra.clone(),
        }
    }
}

/// Ordered style classes. Later entries override earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClassList {
    base: ControlBase,
    tokens: SmallVec<[ClassToken; 8]>,
}

impl ClassList {
    pub(crate) fn new(base: ControlBase) -> Self {
        let mut tokens = SmallVec::new();
        tokens.push(ClassToken::Base);
        Self { base, tokens }
    }

    pub(crate) fn push(&mut self, token: ClassToken) {
        self.tokens.push(token);
    }

    pub fn base(&self) -> ControlBase {
        self.base
    }

    pub fn tokens(&self) -> &[ClassToken] {
        &self.tokens
    }

    pub fn contains(&self, token: &ClassToken) -> bool {
        self.tokens.contains(token)
    }

    pub fn classes(&self) -> impl Iterator<Item = String> + '_ {
        self.tokens.iter().map(|token| token.to_class(self.base))
    }

    /// Space-separated, ready for a `class` attribute.
    pub fn to_class_string(&self) -> String {
        self.classes().collect::<Vec<_>>().join(" ")
    }
}

/// The name assistive technology announces for a control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "source", content = "name", rename_all = "kebab-case")]
pub enum AccessibleName {
    Label(String),
    /// The control is loading; the name is [`LOADING_LABEL`].
    Loading,
    /// Nothing labels the control.
    Missing,
}

impl AccessibleName {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AccessibleName::Label(label) => Some(label),
            AccessibleName::Loading => Some(LOADING_LABEL),
            AccessibleName::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, AccessibleName::Missing)
    }
}

/// Which child slots a control populates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "layout", rename_all = "kebab-case")]
pub enum SlotLayout {
    /// Only the loading indicator; label and icons are replaced.
    Spinner,
    /// A single icon slot, possibly empty.
    IconOnly { icon: Option<IconName> },
    Labeled {
        leading: Option<IconName>,
        label: Option<String>,
        trailing: Option<IconName>,
    },
}

/// A defect in the requested control, surfaced instead of masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Defect {
    /// Icon-only control without an icon; it renders empty.
    EmptyIconSlot,
    /// No label and no accessible label.
    MissingAccessibleName,
}

/// Everything a control needs to render one state. Derived fresh per render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStyle {
    pub(crate) effective_state: EffectiveState,
    pub(crate) classes: ClassList,
    pub(crate) icon_size: IconBucket,
    pub(crate) accessible_name: AccessibleName,
    pub(crate) slots: SlotLayout,
    pub(crate) defects: SmallVec<[Defect; 2]>,
}

impl ResolvedStyle {
    pub fn effective_state(&self) -> EffectiveState {
        self.effective_state
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn icon_size(&self) -> IconBucket {
        self.icon_size
    }

    pub fn accessible_name(&self) -> &AccessibleName {
        &self.accessible_name
    }

    pub fn slots(&self) -> &SlotLayout {
        &self.slots
    }

    pub fn defects(&self) -> &[Defect] {
        &self.defects
    }

    pub fn has_defect(&self, defect: Defect) -> bool {
        self.defects.contains(&defect)
    }

    pub fn is_well_formed(&self) -> bool {
        self.defects.is_empty()
    }

    pub fn accepts_input(&self) -> bool {
        self.effective_state.accepts_input()
    }
}
