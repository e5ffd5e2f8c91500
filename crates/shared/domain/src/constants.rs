//! Domain-level constants.
//!
//! These constants define the password policy and hashing parameters.

// =============================================================================
// Policy
// =============================================================================

/// Minimum password length, in code points
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length, in code points
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Length of the window examined by the sequential and repeating run detectors
pub const PATTERN_RUN_LENGTH: usize = 4;

/// Built-in deny-list of well-known breached passwords (lowercase)
pub const COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "123456789", "12345678", "12345",
    "1234567", "password123", "admin", "qwerty", "abc123",
    "letmein", "monkey", "1234567890", "dragon", "111111",
    "baseball", "iloveyou", "trustno1", "sunshine", "master",
    "welcome", "shadow", "ashley", "football", "jesus",
    "michael", "ninja", "mustang", "password1",
];

// =============================================================================
// Hashing
// =============================================================================

/// bcrypt work factor used for every new hash
pub const BCRYPT_COST: u32 = 12;

// =============================================================================
// Presentation
// =============================================================================

/// Sentinel rendered in place of a password in logs, `Display` and `Debug`
pub const REDACTED: &str = "[PROTECTED]";
