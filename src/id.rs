//! Task ID generation.
//!
//! IDs look like `T7QK`: a fixed `T` followed by three uppercase base-36
//! characters. The generator does not know which IDs are taken; callers that
//! care about collisions check against the loaded list.

use uuid::Uuid;

/// Prefix every task ID starts with
pub const ID_PREFIX: char = 'T';

/// Number of random characters after the prefix
pub const ID_RANDOM_LEN: usize = 3;

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Source of fresh task IDs.
pub trait IdGenerator {
    fn generate(&mut self) -> String;
}

/// Draws IDs from the random bits of a v4 UUID.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&mut self) -> String {
        generate_id()
    }
}

/// Generate a new task ID.
pub fn generate_id() -> String {
    let bytes = Uuid::new_v4().into_bytes();
    let mut id = String::with_capacity(1 + ID_RANDOM_LEN);
    id.push(ID_PREFIX);
    // Bytes 0..3 of a v4 UUID carry no version/variant bits.
    for byte in &bytes[..ID_RANDOM_LEN] {
        id.push(ALPHABET[usize::from(*byte) % ALPHABET.len()] as char);
    }
    id
}

/// Check that `id` has the shape produced by [`generate_id`].
pub fn is_valid_id(id: &str) -> bool {
    let mut chars = id.chars();
    if chars.next() != Some(ID_PREFIX) {
        return false;
    }
    let rest: Vec<char> = chars.collect();
    rest.len() == ID_RANDOM_LEN
        && rest
            .iter()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
}
