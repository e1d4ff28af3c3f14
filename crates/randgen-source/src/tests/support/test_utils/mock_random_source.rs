// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::SourceError;
use crate::support::test_utils::{MockRandomSource, MockRandomSourceBehaviour};
use crate::traits::RandomSource;

#[test]
fn test_mock_random_source_always_lowest() {
    let mock = MockRandomSource::new(MockRandomSourceBehaviour::AlwaysLowest);

    assert!(!mock.next_bool());
    assert_eq!(mock.next_i64(-3, 9), Ok(-3));
    assert_eq!(mock.next_f64(1.5, 2.5), Ok(1.5));
    assert_eq!(mock.next_index(62), Ok(0));
}

#[test]
fn test_mock_random_source_always_highest() {
    let mock = MockRandomSource::new(MockRandomSourceBehaviour::AlwaysHighest);

    assert!(mock.next_bool());
    assert_eq!(mock.next_i64(-3, 9), Ok(8));
    assert_eq!(mock.next_index(62), Ok(61));

    let x = mock.next_f64(0.0, 1.0).expect("Failed to next_f64(0, 1)");
    assert!(x < 1.0);
    assert_eq!(x, 1.0 - f64::EPSILON / 2.0);

    let y = mock.next_f64(-2.0, 0.0).expect("Failed to next_f64(-2, 0)");
    assert!(y < 0.0);

    let z = mock.next_f64(-4.0, -1.0).expect("Failed to next_f64(-4, -1)");
    assert!(z < -1.0 && z > -1.000_001);
}

#[test]
fn test_mock_random_source_validates_ranges_like_thread_source() {
    let lowest = MockRandomSource::new(MockRandomSourceBehaviour::AlwaysLowest);
    let highest = MockRandomSource::new(MockRandomSourceBehaviour::AlwaysHighest);

    assert_eq!(lowest.next_i64(3, 3), Err(SourceError::EmptyRange));
    assert_eq!(highest.next_i64(3, 3), Err(SourceError::EmptyRange));
    assert_eq!(lowest.next_f64(1.0, 1.0), Err(SourceError::EmptyRange));
    assert_eq!(highest.next_index(0), Err(SourceError::EmptyRange));
}

#[test]
fn test_mock_random_source_fail_at_next() {
    let mock = MockRandomSource::new(MockRandomSourceBehaviour::FailAtNext);

    assert_eq!(mock.next_i64(0, 10), Err(SourceError::EmptyRange));
    assert_eq!(mock.next_f64(0.0, 1.0), Err(SourceError::EmptyRange));
    assert_eq!(mock.next_index(62), Err(SourceError::EmptyRange));
}

#[test]
fn test_mock_random_source_change_behaviour() {
    let mut mock = MockRandomSource::new(MockRandomSourceBehaviour::None);

    // First works
    assert!(mock.next_i64(0, 10).is_ok());

    // Change behaviour
    mock.change_behaviour(MockRandomSourceBehaviour::FailAtNext);

    // Now fails
    assert!(mock.next_i64(0, 10).is_err());

    // Change back
    mock.change_behaviour(MockRandomSourceBehaviour::None);

    // Works again
    assert!(mock.next_i64(0, 10).is_ok());
}
