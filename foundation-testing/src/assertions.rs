// Test assertions for lang stores and recorded logs

use crate::MockPlatform;
use std::collections::BTreeSet;

/// Assert that `keys` is exactly `expected`, ignoring order.
///
/// ```
/// use foundation_testing::assert_keys;
///
/// assert_keys(["b", "a"], &["a", "b"]);
/// ```
pub fn assert_keys<'a>(keys: impl IntoIterator<Item = &'a str>, expected: &[&str]) {
    let actual: BTreeSet<&str> = keys.into_iter().collect();
    let expected: BTreeSet<&str> = expected.iter().copied().collect();
    assert_eq!(
        actual, expected,
        "Expected keys {:?}, got {:?}",
        expected, actual
    );
}

/// Assert that some recorded line contains `needle`.
pub fn assert_logged(platform: &MockPlatform, needle: &str) {
    let lines = platform.lines();
    assert!(
        lines.iter().any(|line| line.message.contains(needle)),
        "Expected a log line containing '{}', got {:?}",
        needle,
        lines
    );
}

/// Assert that no recorded line contains `needle`.
pub fn assert_not_logged(platform: &MockPlatform, needle: &str) {
    let lines = platform.lines();
    assert!(
        !lines.iter().any(|line| line.message.contains(needle)),
        "Expected no log line containing '{}', got {:?}",
        needle,
        lines
    );
}

/// Assert that some warning contains `needle`.
pub fn assert_warned(platform: &MockPlatform, needle: &str) {
    let warnings = platform.warnings();
    assert!(
        warnings.iter().any(|line| line.contains(needle)),
        "Expected a warning containing '{}', got {:?}",
        needle,
        warnings
    );
}
