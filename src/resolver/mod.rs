//! Variant and state resolution shared by every control.
//!
//! [`resolve`] turns a declarative [`StyleSpec`] plus its [`ContentSpec`]
//! into exactly one [`ResolvedStyle`]. It is pure: the same input always
//! yields the same output, and nothing is cached between renders.

mod deserializers;
pub use deserializers::WireEnum;

mod icon;
pub use icon::*;

mod resolved;
pub use resolved::*;

mod style;
pub use style::*;

use smallvec::SmallVec;

/// Applies state precedence: `disabled` > `loading` > requested state > default.
///
/// A requested `loading` or `disabled` without the matching flag contradicts
/// the flags, which win, so it resolves to [`EffectiveState::Default`].
pub fn effective_state(spec: &StyleSpec) -> EffectiveState {
    if spec.disabled {
        return EffectiveState::Disabled;
    }

    if spec.loading {
        return EffectiveState::Loading;
    }

    match spec.requested_state {
        InteractionState::Hover => EffectiveState::Hover,
        InteractionState::Clicked => EffectiveState::Clicked,
        InteractionState::Focused => EffectiveState::Focused,
        InteractionState::Default | InteractionState::Loading | InteractionState::Disabled => {
            EffectiveState::Default
        }
    }
}

pub fn resolve(base: ControlBase, spec: &StyleSpec, content: &ContentSpec) -> ResolvedStyle {
    let effective_state = effective_state(spec);
    let mut defects = SmallVec::new();

    let accessible_name = if effective_state == EffectiveState::Loading {
        AccessibleName::Loading
    } else {
        match non_blank(&content.aria_label).or_else(|| non_blank(&content.label)) {
            Some(name) => AccessibleName::Label(name.to_string()),
            None => {
                defects.push(Defect::MissingAccessibleName);
                AccessibleName::Missing
            }
        }
    };

    let slots = if effective_state == EffectiveState::Loading {
        SlotLayout::Spinner
    } else if spec.icon_only {
        if content.icon.is_none() {
            defects.push(Defect::EmptyIconSlot);
        }
        SlotLayout::IconOnly {
            icon: content.icon.clone(),
        }
    } else {
        SlotLayout::Labeled {
            leading: content.leading_icon.clone(),
            label: non_blank(&content.label).map(str::to_string),
            trailing: content.trailing_icon.clone(),
        }
    };

    let resolved = ResolvedStyle {
        effective_state,
        classes: compose_classes(base, spec, effective_state),
        icon_size: IconBucket::for_control(spec.size, content.icon_size),
        accessible_name,
        slots,
        defects,
    };

    tracing::trace!(
        control = base.marker(),
        state = %effective_state,
        classes = %resolved.classes.to_class_string(),
        "resolved control style"
    );

    if !resolved.defects.is_empty() {
        tracing::warn!(
            control = base.marker(),
            defects = ?resolved.defects,
            "control resolved with defects"
        );
    }

    resolved
}

/// Class order is fixed so later classes can override earlier ones.
fn compose_classes(base: ControlBase, spec: &StyleSpec, state: EffectiveState) -> ClassList {
    let mut classes = ClassList::new(base);

    classes.push(ClassToken::Size(spec.size));
    classes.push(ClassToken::Kind(spec.kind));
    classes.push(ClassToken::State(state));

    if spec.outline {
        classes.push(ClassToken::Outline);
    }

    if spec.icon_only {
        classes.push(ClassToken::IconOnly);
    }

    if spec.width == Width::Full {
        classes.push(ClassToken::FullWidth);
    }

    if let Some(extra) = non_blank(&spec.class_name) {
        classes.push(ClassToken::Extra(extra.to_string()));
    }

    classes
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    fn random_spec(rng: &mut StdRng) -> (StyleSpec, ContentSpec) {
        let spec = StyleSpec {
            kind: Kind::ALL[rng.random_range(0..Kind::ALL.len())],
            size: Size::ALL[rng.random_range(0..Size::ALL.len())],
            requested_state: InteractionState::ALL
                [rng.random_range(0..InteractionState::ALL.len())],
            outline: rng.random(),
            loading: rng.random(),
            disabled: rng.random(),
            icon_only: rng.random(),
            width: Width::ALL[rng.random_range(0..Width::ALL.len())],
            class_name: rng.random_bool(0.3).then(|| "extra".to_string()),
        };

        let content = ContentSpec {
            label: rng.random_bool(0.7).then(|| "Save".to_string()),
            aria_label: rng.random_bool(0.2).then(|| "Save draft".to_string()),
            icon: rng.random_bool(0.5).then(|| IconName::from("floppy")),
            leading_icon: rng.random_bool(0.3).then(|| IconName::from("plus")),
            trailing_icon: rng.random_bool(0.3).then(|| IconName::from("chevron-down")),
            icon_size: rng.random_bool(0.3).then(|| rng.random_range(8.0..40.0)),
        };

        (spec, content)
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1_000 {
            let (spec, content) = random_spec(&mut rng);
            assert_eq!(
                resolve(ControlBase::Button, &spec, &content),
                resolve(ControlBase::Button, &spec, &content),
                "{spec:?}"
            );
        }
    }

    #[test]
    fn test_precedence_holds_for_all_specs() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..1_000 {
            let (spec, content) = random_spec(&mut rng);
            let resolved = resolve(ControlBase::Button, &spec, &content);

            if spec.disabled {
                assert_eq!(resolved.effective_state(), EffectiveState::Disabled, "{spec:?}");
            } else if spec.loading {
                assert_eq!(resolved.effective_state(), EffectiveState::Loading, "{spec:?}");
                assert_eq!(resolved.accessible_name(), &AccessibleName::Loading);
                assert_eq!(resolved.slots(), &SlotLayout::Spinner);
            } else {
                assert!(resolved.accepts_input(), "{spec:?}");
            }
        }
    }

    #[test]
    fn test_disabled_beats_loading_and_requested_state() {
        let spec = StyleSpec::new()
            .disabled(true)
            .loading(true)
            .requested_state(InteractionState::Focused);

        assert_eq!(effective_state(&spec), EffectiveState::Disabled);
    }

    #[test]
    fn test_contradictory_requested_state_yields_to_flags() {
        assert_eq!(
            effective_state(&StyleSpec::new().requested_state(InteractionState::Disabled)),
            EffectiveState::Default
        );
        assert_eq!(
            effective_state(&StyleSpec::new().requested_state(InteractionState::Loading)),
            EffectiveState::Default
        );
        assert_eq!(
            effective_state(&StyleSpec::new().requested_state(InteractionState::Clicked)),
            EffectiveState::Clicked
        );
    }

    #[test]
    fn test_class_order() {
        let spec = StyleSpec::new()
            .kind(Kind::Warning)
            .size(Size::Large)
            .requested_state(InteractionState::Hover)
            .outline(true)
            .icon_only(true)
            .width(Width::Full)
            .class_name(" toolbar ");
        let content = ContentSpec::new().icon("bell").aria_label("Alerts");
        let resolved = resolve(ControlBase::Button, &spec, &content);

        assert_eq!(
            resolved.classes().to_class_string(),
            "sw-button sw-button--size-large sw-button--kind-warning sw-button--state-hover \
             sw-button--outline sw-button--icon-only sw-button--full-width toolbar"
        );
    }

    #[test]
    fn test_minimal_class_list() {
        let resolved = resolve(
            ControlBase::Input,
            &StyleSpec::new().class_name("   "),
            &ContentSpec::new().label("Email"),
        );

        assert_eq!(
            resolved.classes().tokens(),
            [
                ClassToken::Base,
                ClassToken::Size(Size::Default),
                ClassToken::Kind(Kind::Primary),
                ClassToken::State(EffectiveState::Default),
            ],
            "Blank extra classes are dropped"
        );
    }

    #[test]
    fn test_loading_overrides_label() {
        let resolved = resolve(
            ControlBase::Button,
            &StyleSpec::new().loading(true),
            &ContentSpec::new().label("Submit").aria_label("Submit form"),
        );

        assert_eq!(resolved.accessible_name().as_str(), Some(LOADING_LABEL));
        assert!(resolved.is_well_formed());
    }

    #[test]
    fn test_aria_label_takes_priority() {
        let resolved = resolve(
            ControlBase::Button,
            &StyleSpec::new(),
            &ContentSpec::new().label("Save").aria_label("Save document"),
        );

        assert_eq!(
            resolved.accessible_name(),
            &AccessibleName::Label("Save document".to_string())
        );
    }

    #[test]
    fn test_icon_only_without_label_is_flagged() {
        let resolved = resolve(
            ControlBase::Button,
            &StyleSpec::new().icon_only(true),
            &ContentSpec::new().icon("trash"),
        );

        assert!(resolved.accessible_name().is_missing());
        assert!(resolved.has_defect(Defect::MissingAccessibleName));
        assert!(!resolved.has_defect(Defect::EmptyIconSlot));
    }

    #[test]
    fn test_loading_icon_only_shows_spinner_only() {
        let resolved = resolve(
            ControlBase::Button,
            &StyleSpec::new().icon_only(true).loading(true),
            &ContentSpec::new().icon("trash"),
        );

        assert_eq!(resolved.slots(), &SlotLayout::Spinner);
        assert!(
            resolved.classes().contains(&ClassToken::IconOnly),
            "Icon-only is still a style axis while loading"
        );
    }

    #[test]
    fn test_labeled_layout_keeps_icon_slots() {
        let resolved = resolve(
            ControlBase::Button,
            &StyleSpec::new(),
            &ContentSpec::new()
                .label("Next")
                .leading_icon("arrow-left")
                .trailing_icon("arrow-right"),
        );

        assert_eq!(
            resolved.slots(),
            &SlotLayout::Labeled {
                leading: Some(IconName::from("arrow-left")),
                label: Some("Next".to_string()),
                trailing: Some(IconName::from("arrow-right")),
            }
        );
    }
}
