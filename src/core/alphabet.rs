//! The guessable alphabet

/// Letters offered on the on-screen keyboard, in display order
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Normalize a key press into a guessable letter
///
/// Returns the lowercase letter if `key` is in the alphabet (either case), `None` otherwise.
///
/// # Examples
/// ```
/// use hangman::core::alphabet::parse_letter;
///
/// assert_eq!(parse_letter('Q'), Some('q'));
/// assert_eq!(parse_letter('7'), None);
/// ```
#[must_use]
pub fn parse_letter(key: char) -> Option<char> {
    let letter = key.to_ascii_lowercase();
    ALPHABET.contains(&letter).then_some(letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_ordered_and_complete() {
        assert_eq!(ALPHABET.len(), 26);
        assert!(ALPHABET.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ALPHABET[0], 'a');
        assert_eq!(ALPHABET[25], 'z');
    }

    #[test]
    fn parse_letter_lowercases() {
        assert_eq!(parse_letter('a'), Some('a'));
        assert_eq!(parse_letter('A'), Some('a'));
        assert_eq!(parse_letter('Z'), Some('z'));
    }

    #[test]
    fn parse_letter_rejects_non_letters() {
        assert_eq!(parse_letter('1'), None);
        assert_eq!(parse_letter(' '), None);
        assert_eq!(parse_letter('-'), None);
        assert_eq!(parse_letter('é'), None);
    }
}
