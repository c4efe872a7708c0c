use std::collections::HashSet;
use std::sync::LazyLock;

use crate::errors::ParseError;
use crate::letter::Letter;

// Lithuanian letter tables
pub const DEFAULT_VOWELS: &str = "AĄEĘĖIĮYOUŲŪ";
pub const DEFAULT_CONSONANTS: &str = "BCČDFGHJKLMNPRSŠTVZŽ";

static LITHUANIAN: LazyLock<Alphabet> = LazyLock::new(|| Alphabet {
    vowels: DEFAULT_VOWELS.chars().collect(),
    consonants: DEFAULT_CONSONANTS.chars().collect(),
});

/// The two disjoint symbol tables a puzzle's words are written in.
///
/// Every concrete [`Letter`] in a pool word is looked up here: first among the
/// vowels, then among the consonants. Lookup is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    vowels: HashSet<char>,
    consonants: HashSet<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        LITHUANIAN.clone()
    }
}

impl Alphabet {
    /// Build an alphabet from the characters of `vowels` and `consonants`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidAlphabet`] if either table is empty, contains
    /// whitespace, or shares a character with the other table.
    pub fn new(vowels: &str, consonants: &str) -> Result<Self, Box<ParseError>> {
        let vowels: HashSet<char> = vowels.chars().collect();
        let consonants: HashSet<char> = consonants.chars().collect();

        let invalid = |reason: String| Box::new(ParseError::InvalidAlphabet { reason });

        if vowels.is_empty() {
            return Err(invalid("empty vowel alphabet".to_string()));
        }
        if consonants.is_empty() {
            return Err(invalid("empty consonant alphabet".to_string()));
        }
        if let Some(c) = vowels.iter().chain(&consonants).find(|c| c.is_whitespace()) {
            return Err(invalid(format!("whitespace {c:?} cannot be a letter")));
        }
        let mut shared: Vec<char> = vowels.intersection(&consonants).copied().collect();
        if !shared.is_empty() {
            shared.sort_unstable();
            let shared: String = shared.into_iter().collect();
            return Err(invalid(format!("'{shared}' in both vowels and consonants")));
        }

        Ok(Alphabet { vowels, consonants })
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }

    pub fn is_consonant(&self, c: char) -> bool {
        self.consonants.contains(&c)
    }

    /// Parse one concrete letter.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidLetter`] naming `c` if it is in neither table.
    pub fn letter(&self, c: char) -> Result<Letter, Box<ParseError>> {
        if self.is_vowel(c) {
            Ok(Letter::Vowel(Some(c)))
        } else if self.is_consonant(c) {
            Ok(Letter::Consonant(Some(c)))
        } else {
            Err(Box::new(ParseError::InvalidLetter { invalid_char: c }))
        }
    }

    pub fn len(&self) -> usize {
        self.vowels.len() + self.consonants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let alphabet = Alphabet::default();
        assert_eq!(DEFAULT_VOWELS.chars().count(), 12);
        assert_eq!(DEFAULT_CONSONANTS.chars().count(), 20);
        assert_eq!(alphabet.len(), 32);
        assert!(alphabet.is_vowel('Ė'));
        assert!(alphabet.is_consonant('Ž'));
    }

    #[test]
    fn test_default_vowel_consonant_mutual_exclusivity() {
        let alphabet = Alphabet::default();
        for c in DEFAULT_VOWELS.chars().chain(DEFAULT_CONSONANTS.chars()) {
            assert_ne!(
                alphabet.is_vowel(c),
                alphabet.is_consonant(c),
                "char '{}' should be either vowel or consonant, not both or neither",
                c
            );
        }
    }

    #[test]
    fn test_letter_lookup() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.letter('Ą').unwrap(), Letter::Vowel(Some('Ą')));
        assert_eq!(alphabet.letter('Š').unwrap(), Letter::Consonant(Some('Š')));
    }

    #[test]
    fn test_letter_lookup_is_case_sensitive() {
        let alphabet = Alphabet::default();
        let err = alphabet.letter('a').unwrap_err();
        assert!(matches!(*err, ParseError::InvalidLetter { invalid_char: 'a' }));
    }

    #[test]
    fn test_letters_outside_tables_rejected() {
        let alphabet = Alphabet::default();
        // W, Q and X are not part of the Lithuanian alphabet
        for c in ['W', 'Q', 'X', '1', '@'] {
            assert!(alphabet.letter(c).is_err(), "'{c}' should be rejected");
        }
    }

    #[test]
    fn test_custom_alphabet() {
        let alphabet = Alphabet::new("AEIOU", "BCDFGHJKLMNPQRSTVWXYZ").unwrap();
        assert_eq!(alphabet.letter('W').unwrap(), Letter::Consonant(Some('W')));
        assert!(alphabet.letter('Ą').is_err());
    }

    #[test]
    fn test_overlapping_alphabet_rejected() {
        let err = Alphabet::new("AEY", "BY").unwrap_err();
        assert_eq!(err.code(), "E008");
        assert!(err.to_string().contains("'Y'"));
    }

    #[test]
    fn test_empty_or_whitespace_alphabet_rejected() {
        assert!(Alphabet::new("", "B").is_err());
        assert!(Alphabet::new("A", "").is_err());
        assert!(Alphabet::new("A E", "B").is_err());
    }
}
