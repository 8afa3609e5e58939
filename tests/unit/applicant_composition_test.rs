// Tests for applicant count adjustment and onshore status transitions
//
// Covers:
// - Decrementing below zero is a no-op
// - The primary headcount is fixed at one
// - Moving a group offshore clears its prior visa, and moving it back
//   onshore does not restore the old selection
// - Any sequence of operations keeps the group invariants

use proptest::prelude::*;

use visafee::applicants::{
    ApplicantCategory, ApplicantComposition, PriorVisa, PriorVisaSelection,
};

#[derive(Debug, Clone)]
enum Operation {
    Increment(ApplicantCategory),
    Decrement(ApplicantCategory),
    SetOnshore(ApplicantCategory, bool),
    SelectPriorVisa(ApplicantCategory, PriorVisaSelection),
}

fn category_strategy() -> impl Strategy<Value = ApplicantCategory> {
    prop::sample::select(ApplicantCategory::ALL.to_vec())
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        category_strategy().prop_map(Operation::Increment),
        category_strategy().prop_map(Operation::Decrement),
        (category_strategy(), any::<bool>()).prop_map(|(c, on)| Operation::SetOnshore(c, on)),
        (
            category_strategy(),
            prop::sample::select(vec!["none", "500", "417", "600", "unknown"])
        )
            .prop_map(|(c, code)| Operation::SelectPriorVisa(c, PriorVisaSelection::parse(code))),
    ]
}

fn apply(composition: &mut ApplicantComposition, operation: &Operation) {
    match operation {
        Operation::Increment(category) => composition.increment(*category),
        Operation::Decrement(category) => composition.decrement(*category),
        Operation::SetOnshore(category, onshore) => composition.set_onshore(*category, *onshore),
        Operation::SelectPriorVisa(category, selection) => {
            composition.select_prior_visa(*category, *selection)
        }
    }
}

proptest! {
    #[test]
    fn test_invariants_hold_after_any_operations(
        operations in prop::collection::vec(operation_strategy(), 0..60)
    ) {
        let mut composition = ApplicantComposition::new();
        for operation in &operations {
            apply(&mut composition, operation);

            prop_assert_eq!(composition.primary().count(), 1);
            for category in ApplicantCategory::ALL {
                let group = composition.group(category);
                if !group.is_onshore() {
                    prop_assert!(
                        group.prior_visa().is_none(),
                        "Offshore {} group kept prior visa {} after {:?}",
                        category, group.prior_visa(), operation
                    );
                }
            }
        }
    }

    #[test]
    fn test_counts_track_increments_minus_clamped_decrements(
        steps in prop::collection::vec(any::<bool>(), 0..40)
    ) {
        let mut composition = ApplicantComposition::new();
        let mut expected: u32 = 0;

        for increment in steps {
            if increment {
                composition.increment(ApplicantCategory::Dependent);
                expected += 1;
            } else {
                composition.decrement(ApplicantCategory::Dependent);
                expected = expected.saturating_sub(1);
            }
            prop_assert_eq!(composition.dependent().count(), expected);
        }
    }
}

#[test]
fn test_decrement_at_zero_is_noop() {
    let mut composition = ApplicantComposition::new();
    composition.decrement(ApplicantCategory::Secondary);
    composition.decrement(ApplicantCategory::Dependent);

    assert_eq!(composition.secondary().count(), 0);
    assert_eq!(composition.dependent().count(), 0);
    assert_eq!(composition.total_applicants(), 1);
}

#[test]
fn test_toggle_offshore_then_onshore_resets_selection() {
    let mut composition = ApplicantComposition::new();
    composition.set_onshore(ApplicantCategory::Secondary, true);
    composition.select_prior_visa(ApplicantCategory::Secondary, PriorVisa::Student.into());
    assert_eq!(
        composition.secondary().prior_visa(),
        PriorVisaSelection::Held(PriorVisa::Student)
    );

    composition.set_onshore(ApplicantCategory::Secondary, false);
    composition.set_onshore(ApplicantCategory::Secondary, true);

    assert!(composition.secondary().is_onshore());
    assert_eq!(composition.secondary().prior_visa(), PriorVisaSelection::None);
}

#[test]
fn test_categories_are_independent() {
    let mut composition = ApplicantComposition::new()
        .with_onshore(ApplicantCategory::Primary, PriorVisa::Visitor)
        .with_onshore(ApplicantCategory::Dependent, PriorVisa::Student);

    composition.set_onshore(ApplicantCategory::Dependent, false);

    assert_eq!(
        composition.primary().prior_visa(),
        PriorVisaSelection::Held(PriorVisa::Visitor)
    );
    assert_eq!(composition.dependent().prior_visa(), PriorVisaSelection::None);
}
