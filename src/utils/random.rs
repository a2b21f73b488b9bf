use rand::RngCore;

pub fn fill_random_bytes(buffer: &mut [u8]) {
    rand::rng().fill_bytes(buffer);
}

/// Lowercase hex string built from `length` random bytes.
pub fn generate_hex_token(length: usize) -> String {
    let mut bytes = vec![0u8; length];
    fill_random_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_token_has_two_chars_per_byte() {
        let token = generate_hex_token(16);
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn tokens_differ() {
        assert_ne!(generate_hex_token(16), generate_hex_token(16));
    }
}
