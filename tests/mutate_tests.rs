//! In-place replace/remove tests

use seqalg::{remove_if, replace_if, Found};

fn is_even(n: &i32) -> bool {
    n % 2 == 0
}

#[test]
fn test_replace_if_first_match_only() {
    let mut even = vec![2, 4, 6];
    let found = replace_if(&mut even, 48, is_even);
    assert_eq!(found.into_pair(), (0, true));
    assert_eq!(even, vec![48, 4, 6]);
}

#[test]
fn test_replace_if_later_position() {
    let mut values = [1, 3, 8, 10];
    assert_eq!(replace_if(&mut values, 0, is_even), Found::at(2));
    assert_eq!(values, [1, 3, 0, 10]);
}

#[test]
fn test_replace_if_no_match_leaves_sequence() {
    let mut odd = vec![1, 3, 5, 7, 9];
    let found = replace_if(&mut odd, 5, is_even);
    assert_eq!(found.into_pair(), (-1, false));
    assert_eq!(odd, vec![1, 3, 5, 7, 9]);
}

#[test]
fn test_replace_if_empty() {
    let mut empty: Vec<String> = Vec::new();
    assert_eq!(replace_if(&mut empty, "x".to_string(), |_| true), Found::NONE);
    assert!(empty.is_empty());
}

#[test]
fn test_replace_if_without_equality() {
    // Element type has no PartialEq.
    struct Slot(u32);

    let mut slots = vec![Slot(1), Slot(2), Slot(3)];
    let found = replace_if(&mut slots, Slot(20), |s| s.0 == 2);
    assert_eq!(found, Found::at(1));
    assert_eq!(slots.iter().map(|s| s.0).collect::<Vec<_>>(), vec![1, 20, 3]);
}

#[test]
fn test_remove_if_index_zero() {
    let mut even = vec![2, 4, 6];
    let found = remove_if(&mut even, is_even);
    assert_eq!(found.into_pair(), (0, true));
    assert_eq!(even, vec![4, 6]);
}

#[test]
fn test_remove_if_middle() {
    let mut values = vec![1, 3, 4, 5, 6];
    assert_eq!(remove_if(&mut values, is_even), Found::at(2));
    assert_eq!(values, vec![1, 3, 5, 6]);
}

#[test]
fn test_remove_if_last() {
    let mut values = vec![1, 3, 5, 8];
    assert_eq!(remove_if(&mut values, is_even), Found::at(3));
    assert_eq!(values, vec![1, 3, 5]);
}

#[test]
fn test_remove_if_single_element() {
    let mut values = vec![2];
    assert_eq!(remove_if(&mut values, is_even), Found::at(0));
    assert!(values.is_empty());
}

#[test]
fn test_remove_if_no_match_leaves_sequence() {
    let mut odd = vec![1, 3, 5, 7, 9];
    assert_eq!(remove_if(&mut odd, is_even).into_pair(), (-1, false));
    assert_eq!(odd, vec![1, 3, 5, 7, 9]);

    let mut empty: Vec<i32> = Vec::new();
    assert_eq!(remove_if(&mut empty, is_even), Found::NONE);
    assert!(empty.is_empty());
}

#[test]
fn test_remove_if_removes_one_per_call() {
    let mut values = vec![2, 2, 2];
    assert_eq!(remove_if(&mut values, is_even), Found::at(0));
    assert_eq!(values, vec![2, 2]);
    assert_eq!(remove_if(&mut values, is_even), Found::at(0));
    assert_eq!(remove_if(&mut values, is_even), Found::at(0));
    assert_eq!(remove_if(&mut values, is_even), Found::NONE);
    assert!(values.is_empty());
}

#[test]
fn test_remove_if_owned_strings() {
    let mut words: Vec<String> = ["keep", "drop", "keep", "drop"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(remove_if(&mut words, |w| w == "drop"), Found::at(1));
    assert_eq!(words, vec!["keep", "keep", "drop"]);
}
