//! Book identifier generation.
//!
//! # Invariants
//! - Generated ids are exactly `BOOK_ID_LEN` characters long.
//! - Every character comes from the URL-safe alphabet `A-Za-z0-9-_`.
//! - Every position is drawn uniformly from all 64 characters.

use crate::model::book::BookId;
use uuid::Uuid;

/// Length of every generated book id.
pub const BOOK_ID_LEN: usize = 16;

const URL_SAFE_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// UUID byte whose high nibble is the fixed version `4`.
/// Byte 8 carries the variant in its top two bits only, so its low six stay random.
const VERSION_BYTE: usize = 6;

/// Produces opaque unique identifiers.
pub trait IdGenerator {
    fn generate(&self) -> BookId;
}

/// Random generator drawing from v4 UUID entropy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn generate(&self) -> BookId {
        let id = std::iter::repeat_with(|| Uuid::new_v4().into_bytes())
            .flat_map(|bytes| {
                bytes
                    .into_iter()
                    .enumerate()
                    .filter(|(index, _)| *index != VERSION_BYTE)
                    .map(|(_, byte)| byte)
            })
            .take(BOOK_ID_LEN)
            .map(|byte| URL_SAFE_ALPHABET[usize::from(byte & 0x3f)] as char)
            .collect::<String>();
        BookId::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::{IdGenerator, RandomIdGenerator, BOOK_ID_LEN, URL_SAFE_ALPHABET};
    use std::collections::HashSet;

    #[test]
    fn generated_ids_have_fixed_length_and_url_safe_chars() {
        let id = RandomIdGenerator.generate();
        assert_eq!(id.as_str().len(), BOOK_ID_LEN);
        assert!(id
            .as_str()
            .bytes()
            .all(|byte| URL_SAFE_ALPHABET.contains(&byte)));
    }

    #[test]
    fn generated_ids_do_not_repeat_in_small_batches() {
        let ids: HashSet<_> = (0..1_000).map(|_| RandomIdGenerator.generate()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn every_position_uses_more_than_sixteen_characters() {
        let ids: Vec<_> = (0..2_000).map(|_| RandomIdGenerator.generate()).collect();

        for position in 0..BOOK_ID_LEN {
            let seen: HashSet<u8> = ids
                .iter()
                .map(|id| id.as_str().as_bytes()[position])
                .collect();
            assert!(seen.len() > 16, "position {position} saw {} chars", seen.len());
        }
    }
}
