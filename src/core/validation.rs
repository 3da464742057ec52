//! Letter validation against the target word

/// Reveal every slot whose letter matches `guess`
///
/// The guess is compared case-insensitively; `target` is expected to be lowercase already.
/// Slots that don't match are left untouched. Returns `true` if at least one position matched.
///
/// # Examples
/// ```
/// use hangman::core::validation::reveal_letter;
///
/// let mut slots = vec![None; 3];
/// assert!(reveal_letter("cat", &mut slots, 'C'));
/// assert_eq!(slots, vec![Some('c'), None, None]);
/// ```
pub fn reveal_letter(target: &str, slots: &mut [Option<char>], guess: char) -> bool {
    let guess = guess.to_ascii_lowercase();
    let mut found = false;

    for (slot, letter) in slots.iter_mut().zip(target.chars()) {
        if letter == guess {
            *slot = Some(letter);
            found = true;
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_single_match() {
        let mut slots = vec![None; 3];
        assert!(reveal_letter("cat", &mut slots, 'c'));
        assert_eq!(slots, vec![Some('c'), None, None]);
    }

    #[test]
    fn reveals_every_occurrence() {
        let mut slots = vec![None; 6];
        assert!(reveal_letter("banana", &mut slots, 'a'));
        assert_eq!(
            slots,
            vec![None, Some('a'), None, Some('a'), None, Some('a')]
        );
    }

    #[test]
    fn miss_leaves_slots_unchanged() {
        let mut slots = vec![Some('c'), None, None];
        assert!(!reveal_letter("cat", &mut slots, 'z'));
        assert_eq!(slots, vec![Some('c'), None, None]);
    }

    #[test]
    fn guess_is_case_insensitive() {
        let mut slots = vec![None; 3];
        assert!(reveal_letter("cat", &mut slots, 'T'));
        assert_eq!(slots, vec![None, None, Some('t')]);
    }

    #[test]
    fn other_revealed_slots_are_preserved() {
        let mut slots = vec![Some('c'), None, Some('t')];
        assert!(reveal_letter("cat", &mut slots, 'a'));
        assert_eq!(slots, vec![Some('c'), Some('a'), Some('t')]);
    }

    #[test]
    fn repeated_hit_is_still_a_hit() {
        let mut slots = vec![Some('c'), None, None];
        assert!(reveal_letter("cat", &mut slots, 'c'));
        assert_eq!(slots, vec![Some('c'), None, None]);
    }

    #[test]
    fn only_matching_positions_change() {
        let target = "mississippi";
        for letter in ['m', 'i', 's', 'p'] {
            let mut slots = vec![None; target.len()];
            reveal_letter(target, &mut slots, letter);
            for (slot, ch) in slots.iter().zip(target.chars()) {
                if ch == letter {
                    assert_eq!(*slot, Some(ch));
                } else {
                    assert_eq!(*slot, None);
                }
            }
        }
    }

    #[test]
    fn empty_target_never_matches() {
        let mut slots: Vec<Option<char>> = Vec::new();
        assert!(!reveal_letter("", &mut slots, 'a'));
    }
}
