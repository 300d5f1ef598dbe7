//! Input validation rules shared by the services.

use crate::db::{PRIORITY_DEFAULT, PRIORITY_MAX, PRIORITY_MIN, PROJECT_TITLE_MAX_CHARS};

/// Something a caller may hand in as a todo priority.
///
/// Integers pass through, strings must parse as an integer, and an absent
/// value falls back to the default priority.
pub trait PriorityValue {
    /// The integer this value denotes, or `None` if it is not an integer.
    fn as_priority(&self) -> Option<i64>;
}

impl PriorityValue for i64 {
    fn as_priority(&self) -> Option<i64> {
        Some(*self)
    }
}

impl PriorityValue for i32 {
    fn as_priority(&self) -> Option<i64> {
        Some(i64::from(*self))
    }
}

impl PriorityValue for str {
    fn as_priority(&self) -> Option<i64> {
        self.trim().parse().ok()
    }
}

impl PriorityValue for &str {
    fn as_priority(&self) -> Option<i64> {
        (**self).as_priority()
    }
}

impl PriorityValue for String {
    fn as_priority(&self) -> Option<i64> {
        self.as_str().as_priority()
    }
}

impl<T: PriorityValue> PriorityValue for Option<T> {
    fn as_priority(&self) -> Option<i64> {
        match self {
            Some(value) => value.as_priority(),
            None => Some(PRIORITY_DEFAULT),
        }
    }
}

/// The priority in range, or `None` if the value is not an accepted priority.
pub fn checked_priority<P: PriorityValue + ?Sized>(value: &P) -> Option<i64> {
    value
        .as_priority()
        .filter(|p| (PRIORITY_MIN..=PRIORITY_MAX).contains(p))
}

/// Non-empty after trimming.
pub fn is_non_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Non-blank, and at most 200 characters once trimmed.
pub fn is_valid_project_title(title: &str) -> bool {
    let trimmed = title.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= PROJECT_TITLE_MAX_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_priority_integers() {
        for p in 1..=5i64 {
            assert_eq!(checked_priority(&p), Some(p));
        }
        assert_eq!(checked_priority(&0i64), None);
        assert_eq!(checked_priority(&6i32), None);
    }

    #[test]
    fn test_checked_priority_strings() {
        assert_eq!(checked_priority("2"), Some(2));
        assert_eq!(checked_priority(" 4 "), Some(4));
        assert_eq!(checked_priority(&"5".to_string()), Some(5));
        assert_eq!(checked_priority("two"), None);
        assert_eq!(checked_priority("2.5"), None);
        assert_eq!(checked_priority(""), None);
        assert_eq!(checked_priority("-3"), None);
    }

    #[test]
    fn test_checked_priority_absent_uses_default() {
        assert_eq!(checked_priority(&None::<i64>), Some(PRIORITY_DEFAULT));
        assert_eq!(checked_priority(&Some("1")), Some(1));
        assert_eq!(checked_priority(&Some("x")), None);
    }

    #[test]
    fn test_project_title_length_counts_trimmed_chars() {
        let max = "a".repeat(200);
        assert!(is_valid_project_title(&max));
        assert!(is_valid_project_title(&format!("   {}   ", max)));
        assert!(!is_valid_project_title(&"a".repeat(201)));
        // Multi-byte characters count once each.
        assert!(is_valid_project_title(&"é".repeat(200)));
    }

    #[test]
    fn test_blank_values() {
        assert!(!is_non_blank(""));
        assert!(!is_non_blank(" \t\n"));
        assert!(is_non_blank(" x "));
        assert!(!is_valid_project_title("   "));
    }
}
