//! Random token generation for link ids and fallback short URLs.

/// Length of random bytes behind a link id (64 bits of entropy).
const LINK_ID_BYTES: usize = 8;

/// Length of random bytes behind a fallback shortener token.
const FALLBACK_TOKEN_BYTES: usize = 4;

/// Generates a link id: 8 cryptographically random bytes, hex-encoded to
/// 16 lowercase characters.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_link_id() -> String {
    let mut buffer = [0u8; LINK_ID_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    hex::encode(buffer)
}

/// Generates the random suffix for fabricated `demo_` short URLs.
pub fn generate_fallback_token() -> String {
    let mut buffer = [0u8; FALLBACK_TOKEN_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    hex::encode(buffer)
}

/// Returns true when `id` has the shape of a generated link id.
pub fn is_link_id(id: &str) -> bool {
    id.len() == LINK_ID_BYTES * 2
        && id
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
