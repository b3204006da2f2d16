//! Property-based tests for PersistentStack.
//!
//! These tests verify the LIFO and persistence properties of the stack
//! against a `Vec` reference model driven by generated action sequences.

use batchq::persistent::PersistentStack;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// An abstract stack action: insert a value or remove the top.
#[derive(Debug, Clone)]
enum StackAction {
    Push(i32),
    Pop,
}

fn stack_action_strategy() -> impl Strategy<Value = StackAction> {
    prop_oneof![
        2 => any::<i32>().prop_map(StackAction::Push),
        1 => Just(StackAction::Pop),
    ]
}

/// Generates a `PersistentStack<i32>` with up to `max_size` elements.
fn persistent_stack_strategy(max_size: usize) -> impl Strategy<Value = PersistentStack<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size).prop_map(|elements| {
        let mut stack = PersistentStack::new();
        for element in elements {
            stack = stack.push(element);
        }
        stack
    })
}

/// Generates a small `PersistentStack<i32>` for faster tests.
fn small_stack() -> impl Strategy<Value = PersistentStack<i32>> {
    persistent_stack_strategy(20)
}

/// Pops every element, collecting peeked values in removal order.
fn drain(mut stack: PersistentStack<i32>) -> Vec<i32> {
    let mut observed = Vec::with_capacity(stack.len());
    while let Ok(top) = stack.peek() {
        observed.push(*top);
        stack = stack.pop().unwrap();
    }
    observed
}

proptest! {
    // =========================================================================
    // Basic Properties
    // =========================================================================

    #[test]
    fn prop_is_empty_matches_len_zero(stack in small_stack()) {
        prop_assert_eq!(stack.is_empty(), stack.len() == 0);
    }

    #[test]
    fn prop_push_increases_len_by_one(stack in small_stack(), element: i32) {
        let new_stack = stack.push(element);
        prop_assert_eq!(new_stack.len(), stack.len() + 1);
    }

    #[test]
    fn prop_push_puts_element_on_top(stack in small_stack(), element: i32) {
        let new_stack = stack.push(element);
        prop_assert_eq!(new_stack.peek(), Ok(&element));
    }

    #[test]
    fn prop_pop_decreases_len_by_one(
        stack in small_stack().prop_filter("non-empty", |stack| !stack.is_empty())
    ) {
        let popped = stack.pop().unwrap();
        prop_assert_eq!(popped.len(), stack.len() - 1);
    }

    #[test]
    fn prop_pop_inverts_push(stack in small_stack(), element: i32) {
        let popped = stack.push(element).pop().unwrap();
        prop_assert_eq!(popped, stack);
    }

    #[test]
    fn prop_pop_and_peek_fail_only_on_empty(stack in small_stack()) {
        prop_assert_eq!(stack.pop().is_err(), stack.is_empty());
        prop_assert_eq!(stack.peek().is_err(), stack.is_empty());
    }

    #[test]
    fn prop_uncons_agrees_with_peek_and_pop(
        stack in small_stack().prop_filter("non-empty", |stack| !stack.is_empty())
    ) {
        let (top, rest) = stack.uncons().unwrap();
        prop_assert_eq!(stack.peek(), Ok(top));
        prop_assert_eq!(&rest, &stack.pop().unwrap());
    }

    // =========================================================================
    // LIFO against a Vec model
    // =========================================================================

    #[test]
    fn prop_action_sequence_matches_vec_model(
        actions in prop::collection::vec(stack_action_strategy(), 0..64)
    ) {
        let mut stack = PersistentStack::new();
        let mut model: Vec<i32> = Vec::new();

        for action in actions {
            match action {
                StackAction::Push(value) => {
                    stack = stack.push(value);
                    model.push(value);
                }
                StackAction::Pop => {
                    // Removal fails exactly when the model is empty
                    match stack.pop() {
                        Ok(popped) => {
                            prop_assert!(model.pop().is_some());
                            stack = popped;
                        }
                        Err(_) => prop_assert!(model.is_empty()),
                    }
                }
            }
            prop_assert_eq!(stack.len(), model.len());
            prop_assert_eq!(stack.peek().ok(), model.last());
        }
    }

    #[test]
    fn prop_drain_observes_reverse_insertion_order(
        elements in prop::collection::vec(any::<i32>(), 0..32)
    ) {
        let mut stack = PersistentStack::new();
        for element in &elements {
            stack = stack.push(*element);
        }
        let mut expected = elements;
        expected.reverse();
        prop_assert_eq!(drain(stack), expected);
    }

    // =========================================================================
    // Persistence Properties
    // =========================================================================

    #[test]
    fn prop_push_preserves_original(stack in small_stack(), element: i32) {
        let before = drain(stack.clone());
        let _derived = stack.push(element);
        prop_assert_eq!(drain(stack), before);
    }

    #[test]
    fn prop_pop_preserves_original(
        stack in small_stack().prop_filter("non-empty", |stack| !stack.is_empty())
    ) {
        let before = drain(stack.clone());
        let _derived = stack.pop().unwrap();
        prop_assert_eq!(drain(stack), before);
    }

    #[test]
    fn prop_branching_children_are_independent(
        stack in small_stack(),
        first: i32,
        second: i32
    ) {
        prop_assume!(first != second);
        let left = stack.push(first);
        let right = stack.push(second);

        let shared = drain(stack);
        let left_elements = drain(left);
        let right_elements = drain(right);

        prop_assert_eq!(left_elements[0], first);
        prop_assert_eq!(right_elements[0], second);
        // Both children reproduce the shared prefix
        prop_assert_eq!(&left_elements[1..], shared.as_slice());
        prop_assert_eq!(&right_elements[1..], shared.as_slice());
    }

    // =========================================================================
    // Reverse Properties
    // =========================================================================

    #[test]
    fn prop_reverse_reverse_is_identity(stack in small_stack()) {
        prop_assert_eq!(stack.reverse().reverse(), stack);
    }

    #[test]
    fn prop_reverse_preserves_length(stack in small_stack()) {
        prop_assert_eq!(stack.reverse().len(), stack.len());
    }
}
