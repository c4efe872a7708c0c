//! Letters, words and category patterns.
//!
//! A [`Letter`] is either a vowel or a consonant. Concrete letters carry their
//! symbol; *placeholders* carry none and stand for "any letter of this category".
//! A [`Word`] is a sequence of letters: pool words are fully concrete, slot
//! patterns are made entirely of placeholders.

use std::fmt::{self, Display, Formatter};

use nom::{
    branch::alt,
    character::complete::char,
    combinator::{all_consuming, value},
    multi::many1,
    IResult, Parser,
};

use crate::alphabet::Alphabet;
use crate::errors::ParseError;

/// Pattern character meaning "a vowel goes here".
pub const VOWEL_PATTERN_CHAR: char = 'O';
/// Pattern character meaning "a consonant goes here".
pub const CONSONANT_PATTERN_CHAR: char = 'X';

const VOWEL_PLACEHOLDER_GLYPH: char = '_';
const CONSONANT_PLACEHOLDER_GLYPH: char = '-';

/// One cell's worth of content.
///
/// The derived `PartialEq` is strict identity. Use [`Letter::matches`] for the
/// looser relation in which a placeholder equals any letter of its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    Vowel(Option<char>),
    Consonant(Option<char>),
}

impl Letter {
    pub const VOWEL_PLACEHOLDER: Letter = Letter::Vowel(None);
    pub const CONSONANT_PLACEHOLDER: Letter = Letter::Consonant(None);

    pub fn is_vowel(&self) -> bool {
        matches!(self, Letter::Vowel(_))
    }

    pub fn is_consonant(&self) -> bool {
        matches!(self, Letter::Consonant(_))
    }

    /// The concrete symbol, or `None` for a placeholder.
    pub fn symbol(&self) -> Option<char> {
        match *self {
            Letter::Vowel(symbol) | Letter::Consonant(symbol) => symbol,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.symbol().is_none()
    }

    pub fn same_category(&self, other: &Letter) -> bool {
        match (self, other) {
            (Letter::Vowel(_), Letter::Vowel(_)) | (Letter::Consonant(_), Letter::Consonant(_)) => true,
            (Letter::Vowel(_), Letter::Consonant(_)) | (Letter::Consonant(_), Letter::Vowel(_)) => false,
        }
    }

    /// Structural equality: categories must agree; symbols are compared only
    /// when both sides are concrete.
    pub fn matches(&self, other: &Letter) -> bool {
        match (self, other) {
            (Letter::Vowel(a), Letter::Vowel(b)) | (Letter::Consonant(a), Letter::Consonant(b)) => {
                match (a, b) {
                    (Some(a), Some(b)) => a == b,
                    _ => true,
                }
            }
            (Letter::Vowel(_), Letter::Consonant(_)) | (Letter::Consonant(_), Letter::Vowel(_)) => false,
        }
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            Letter::Vowel(Some(c)) | Letter::Consonant(Some(c)) => c,
            Letter::Vowel(None) => VOWEL_PLACEHOLDER_GLYPH,
            Letter::Consonant(None) => CONSONANT_PLACEHOLDER_GLYPH,
        };
        write!(f, "{c}")
    }
}

/// An ordered sequence of letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Word {
    letters: Vec<Letter>,
}

impl Word {
    pub fn new(letters: Vec<Letter>) -> Self {
        Word { letters }
    }

    /// Parse a pool word, every character of which must be in `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidLetter`] for the first character outside both tables.
    pub fn parse_concrete(token: &str, alphabet: &Alphabet) -> Result<Word, Box<ParseError>> {
        token
            .chars()
            .map(|c| alphabet.letter(c))
            .collect::<Result<Vec<_>, _>>()
            .map(Word::new)
    }

    /// Parse a category pattern such as `XOXOX`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidPatternChar`] naming the first character that is
    /// neither [`VOWEL_PATTERN_CHAR`] nor [`CONSONANT_PATTERN_CHAR`].
    pub fn parse_pattern(token: &str) -> Result<Word, Box<ParseError>> {
        match all_consuming(pattern_letters).parse(token) {
            Ok((_, letters)) => Ok(Word::new(letters)),
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
                // the unconsumed input starts at the offending character
                let invalid_char = e.input.chars().next().unwrap_or(' ');
                Err(Box::new(ParseError::InvalidPatternChar { invalid_char }))
            }
            Err(nom::Err::Incomplete(_)) => Err(Box::new(ParseError::InvalidPatternChar { invalid_char: ' ' })),
        }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Letter> {
        self.letters.iter()
    }

    /// True if both words have the same length and the same category at every position.
    pub fn same_shape(&self, other: &Word) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a.same_category(b))
    }
}

impl FromIterator<Letter> for Word {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        Word::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a Letter;
    type IntoIter = std::slice::Iter<'a, Letter>;

    fn into_iter(self) -> Self::IntoIter {
        self.letters.iter()
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|letter| write!(f, "{letter}"))
    }
}

fn pattern_letters(input: &str) -> IResult<&str, Vec<Letter>> {
    many1(alt((
        value(Letter::VOWEL_PLACEHOLDER, char(VOWEL_PATTERN_CHAR)),
        value(Letter::CONSONANT_PLACEHOLDER, char(CONSONANT_PATTERN_CHAR)),
    )))
    .parse(input)
}
