//! Shared constant values for test fixtures.

/// Password hash stored on every fixture user.
///
/// Placeholder value used when inserting user records. Not a real credential.
pub static TEST_PASSWORD: &str = "$2b$12$fixture.password.hash";
