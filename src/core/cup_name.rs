//! Cup-name codec
//!
//! Maps a cup index to a region's cup name and back. Indices inside the
//! region's base list use the list directly (index 0 is the smallest cup).
//! Past the end of the list, names are synthesized as `<n><Letter>`: the
//! alphabet restarts at `A` and `n` counts how many times it has wrapped,
//! so the first name after the list is `1A`, then `1B` ... `1Z`, `2A`, ...

const ALPHABET_LEN: usize = 26;

/// Cup name for `index` using `names` as the region's base list
pub fn encode(index: usize, names: &[&str]) -> String {
    if let Some(name) = names.get(index) {
        return (*name).to_string();
    }

    let beyond = index - names.len();
    let letter = (b'A' + (beyond % ALPHABET_LEN) as u8) as char;
    let number = beyond / ALPHABET_LEN + 1;
    format!("{}{}", number, letter)
}

/// Cup index for `name` using `names` as the region's base list
///
/// Unknown or malformed names decode to 0, the smallest cup. Callers that
/// need to tell "smallest cup" apart from "not a cup" should check
/// [`is_known`] first.
pub fn decode(name: &str, names: &[&str]) -> usize {
    if let Some(index) = names.iter().position(|n| *n == name) {
        return index;
    }

    let extended = parse_extended(name).and_then(|(number, letter)| {
        (number - 1)
            .checked_mul(ALPHABET_LEN)?
            .checked_add(names.len() + (letter - b'A') as usize)
    });

    match extended {
        Some(index) => index,
        None => {
            tracing::debug!(cup = name, "unrecognized cup name, using smallest cup");
            0
        }
    }
}

/// Whether `name` is either a base name or a well-formed synthesized name
pub fn is_known(name: &str, names: &[&str]) -> bool {
    names.contains(&name) || parse_extended(name).is_some()
}

/// Split `<digits><LETTERS>` into the wrap count and its first letter
///
/// Only the first letter is significant; trailing letters are accepted and
/// ignored. A wrap count of zero has no encoding and is rejected.
fn parse_extended(name: &str) -> Option<(usize, u8)> {
    let split = name.find(|c: char| !c.is_ascii_digit())?;
    let (digits, letters) = name.split_at(split);
    if digits.is_empty() || !letters.bytes().all(|b| b.is_ascii_uppercase()) {
        return None;
    }

    let number: usize = digits.parse().ok()?;
    if number == 0 {
        return None;
    }
    Some((number, letters.as_bytes()[0]))
}
