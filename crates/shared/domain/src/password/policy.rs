//! Password policy enforcement for new passwords.
//!
//! Rules run in a fixed order and stop at the first failure:
//! length floor, length ceiling, printable characters, complexity,
//! deny-list, sequential/repeating heuristics.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use unicode_general_category::{get_general_category, GeneralCategory};

use super::patterns::{has_repeating_run, has_sequential_run};
use crate::constants::{COMMON_PASSWORDS, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::error::{DomainResult, PasswordError};

/// Policy shared by [`validate_password`] and [`crate::Password::new`].
static DEFAULT_POLICY: Lazy<PasswordPolicy> = Lazy::new(PasswordPolicy::default);

/// Immutable, case-insensitive set of known-weak passwords.
#[derive(Debug, Clone)]
pub struct DenyList {
    entries: HashSet<String>,
}

impl DenyList {
    /// Build a deny-list from arbitrary entries. Entries are lowercased.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|entry| entry.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Exact match after lowercasing `candidate`.
    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.contains(&candidate.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DenyList {
    fn default() -> Self {
        Self::new(COMMON_PASSWORDS)
    }
}

/// Validates candidate plaintexts against the ordered rule pipeline.
#[derive(Debug, Clone, Default)]
pub struct PasswordPolicy {
    deny_list: DenyList,
}

impl PasswordPolicy {
    /// Creates a policy that rejects the given deny-list.
    pub fn new(deny_list: DenyList) -> Self {
        Self { deny_list }
    }

    /// The shared policy backed by the built-in deny-list.
    pub fn shared() -> &'static PasswordPolicy {
        &DEFAULT_POLICY
    }

    pub fn deny_list(&self) -> &DenyList {
        &self.deny_list
    }

    /// Validates a password against every rule.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or the error of the first rule that failed.
    pub fn validate(&self, plaintext: &str) -> DomainResult<()> {
        let length = plaintext.chars().count();
        if length < MIN_PASSWORD_LENGTH {
            return Err(PasswordError::too_short());
        }

        if length > MAX_PASSWORD_LENGTH {
            return Err(PasswordError::too_long());
        }

        if !plaintext.chars().all(is_printable) {
            return Err(PasswordError::invalid_chars());
        }

        // Complexity is reported before commonness so the caller gets
        // actionable feedback for e.g. "password".
        if !CharacterClasses::of(plaintext).is_complete() {
            return Err(PasswordError::too_weak());
        }

        if self.deny_list.contains(plaintext) {
            return Err(PasswordError::common());
        }

        if has_sequential_run(plaintext) || has_repeating_run(plaintext) {
            return Err(PasswordError::common());
        }

        Ok(())
    }
}

/// Validates `plaintext` against the shared default policy.
pub fn validate_password(plaintext: &str) -> DomainResult<()> {
    PasswordPolicy::shared().validate(plaintext)
}

#[derive(Debug, Default)]
struct CharacterClasses {
    upper: bool,
    lower: bool,
    number: bool,
    special: bool,
}

impl CharacterClasses {
    fn of(plaintext: &str) -> Self {
        let mut classes = Self::default();
        for c in plaintext.chars() {
            let category = get_general_category(c);
            if category == GeneralCategory::UppercaseLetter {
                classes.upper = true;
            } else if category == GeneralCategory::LowercaseLetter {
                classes.lower = true;
            } else if c.is_numeric() {
                classes.number = true;
            } else if is_punctuation_or_symbol(c) {
                classes.special = true;
            }
        }
        classes
    }

    fn is_complete(&self) -> bool {
        self.upper && self.lower && self.number && self.special
    }
}

/// Letters, marks, numbers, punctuation, symbols and the ASCII space.
fn is_printable(c: char) -> bool {
    use GeneralCategory::*;

    c == ' '
        || matches!(
            get_general_category(c),
            UppercaseLetter
                | LowercaseLetter
                | TitlecaseLetter
                | ModifierLetter
                | OtherLetter
                | NonspacingMark
                | SpacingMark
                | EnclosingMark
                | DecimalNumber
                | LetterNumber
                | OtherNumber
        )
        || is_punctuation_or_symbol(c)
}

fn is_punctuation_or_symbol(c: char) -> bool {
    use GeneralCategory::*;

    matches!(
        get_general_category(c),
        ConnectorPunctuation
            | DashPunctuation
            | OpenPunctuation
            | ClosePunctuation
            | InitialPunctuation
            | FinalPunctuation
            | OtherPunctuation
            | MathSymbol
            | CurrencySymbol
            | ModifierSymbol
            | OtherSymbol
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PasswordErrorKind;

    fn kind_of(result: DomainResult<()>) -> Option<PasswordErrorKind> {
        result.err().map(|e| e.kind())
    }

    #[test]
    fn test_accepts_minimum_valid_password() {
        assert!(validate_password("Abc123!@").is_ok());
        assert!(validate_password("MySecure123!").is_ok());
        assert!(validate_password("Test123!@#$%").is_ok());
    }

    #[test]
    fn test_length_counts_code_points() {
        // 7 code points, 14 bytes
        assert_eq!(
            kind_of(validate_password("Ää1!ßéö")),
            Some(PasswordErrorKind::TooShort)
        );
        // 128 code points of multi-byte text is within the ceiling
        let at_ceiling = format!("Ä1!{}", "é".repeat(125));
        assert_ne!(
            kind_of(validate_password(&at_ceiling)),
            Some(PasswordErrorKind::TooLong)
        );
    }

    #[test]
    fn test_length_ceiling() {
        let too_long = format!("{}bc123!@", "A".repeat(MAX_PASSWORD_LENGTH + 1));
        assert_eq!(kind_of(validate_password(&too_long)), Some(PasswordErrorKind::TooLong));
    }

    #[test]
    fn test_rejects_control_and_format_characters() {
        assert_eq!(
            kind_of(validate_password("Test123!\x00\x01")),
            Some(PasswordErrorKind::InvalidChars)
        );
        assert_eq!(
            kind_of(validate_password("Test123!\t@")),
            Some(PasswordErrorKind::InvalidChars)
        );
        // zero width space is a format character
        assert_eq!(
            kind_of(validate_password("Test12\u{200B}3!@")),
            Some(PasswordErrorKind::InvalidChars)
        );
    }

    #[test]
    fn test_space_is_printable() {
        assert!(validate_password("My Secure 123!").is_ok());
    }

    #[test]
    fn test_complexity_classes() {
        for candidate in ["abc123!@", "ABC123!@", "Abcdef!@", "Abc12345", "AbcDefGh", "12345678"] {
            assert_eq!(
                kind_of(validate_password(candidate)),
                Some(PasswordErrorKind::TooWeak),
                "{candidate}"
            );
        }
    }

    #[test]
    fn test_unicode_special_characters_count() {
        // '«' is initial punctuation, '€' a currency symbol
        assert!(validate_password("Tëst123«x").is_ok());
        assert!(validate_password("Price19€ok").is_ok());
    }

    #[test]
    fn test_case_classes_require_cased_letters() {
        // circled A is a symbol, roman eight a number, ordinal a an other-letter
        for candidate in ["\u{24B6}qwer1!z", "\u{2167}qwer!1z", "QWER19!\u{00AA}"] {
            assert_eq!(
                kind_of(validate_password(candidate)),
                Some(PasswordErrorKind::TooWeak),
                "{candidate}"
            );
        }
    }

    #[test]
    fn test_complexity_reported_before_deny_list() {
        assert_eq!(kind_of(validate_password("password")), Some(PasswordErrorKind::TooWeak));
        assert_eq!(kind_of(validate_password("Password123")), Some(PasswordErrorKind::TooWeak));
    }

    #[test]
    fn test_custom_deny_list_is_case_insensitive() {
        let policy = PasswordPolicy::new(DenyList::new(["Corp#2024Pw"]));

        assert_eq!(
            kind_of(policy.validate("cORP#2024pW")),
            Some(PasswordErrorKind::Common)
        );
        assert!(PasswordPolicy::default().validate("cORP#2024pW").is_ok());
    }

    #[test]
    fn test_default_deny_list() {
        let deny_list = DenyList::default();

        assert_eq!(deny_list.len(), COMMON_PASSWORDS.len());
        assert!(deny_list.contains("LetMeIn"));
        assert!(deny_list.contains("TRUSTNO1"));
        assert!(!deny_list.contains("letmein!"));
    }

    #[test]
    fn test_heuristics_report_common() {
        for candidate in ["Test1234!", "Abcdef1!", "Test4321!", "Test1111!", "Aaaaa123!", "Test123!!!!"] {
            assert_eq!(
                kind_of(validate_password(candidate)),
                Some(PasswordErrorKind::Common),
                "{candidate}"
            );
        }
    }
}
