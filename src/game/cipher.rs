//! Atbash over the Hebrew alphabet: the first letter swaps with the last,
//! the second with the second to last, and so on. Applying it twice gives
//! the original text back.

const ALEPH_TO_TAV: [char; 22] = [
    'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט', 'י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ', 'ק',
    'ר', 'ש', 'ת',
];

fn mirror(c: char) -> char {
    match ALEPH_TO_TAV.iter().position(|&l| l == c) {
        Some(idx) => ALEPH_TO_TAV[ALEPH_TO_TAV.len() - 1 - idx],
        None => c,
    }
}

/// Encode (or decode) `text`; characters outside the alphabet pass through.
pub fn atbash(text: &str) -> String {
    text.chars().map(mirror).collect()
}
