/// Compare the submitted password with the configured shared secret in
/// constant time.
///
/// The portal authenticates every account against one shared secret; the
/// comparison still avoids leaking a prefix-match through timing.
pub fn verify_secret(provided: &str, expected: &str) -> bool {
    provided.as_bytes().len() == expected.as_bytes().len()
        && provided
            .as_bytes()
            .iter()
            .zip(expected.as_bytes().iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
