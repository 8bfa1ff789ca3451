use rand::{distr::Alphanumeric, Rng};

/// Generates a random alphanumeric token for email verification and password
/// reset links.
pub fn generate_token(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
