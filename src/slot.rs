use std::fmt::{self, Display, Formatter};

use crate::errors::ParseError;
use crate::letter::{Letter, Word};

/// Grid coordinate; `x` grows rightward, `y` grows downward. Either may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub fn new(x: i64, y: i64) -> Self {
        Coord { x, y }
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Top to bottom (`ttb`)
    Down,
    /// Left to right (`ltr`)
    Right,
}

impl Direction {
    pub const DOWN_TOKEN: &'static str = "ttb";
    pub const RIGHT_TOKEN: &'static str = "ltr";

    /// Coordinate of the `i`-th cell of a slot anchored at `anchor`, or `None`
    /// if it does not fit in an `i64`.
    fn step(self, anchor: Coord, i: usize) -> Option<Coord> {
        let i = i64::try_from(i).ok()?;
        match self {
            Direction::Down => Some(Coord::new(anchor.x, anchor.y.checked_add(i)?)),
            Direction::Right => Some(Coord::new(anchor.x.checked_add(i)?, anchor.y)),
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Direction::Down => Self::DOWN_TOKEN,
            Direction::Right => Self::RIGHT_TOKEN,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A grid coordinate paired with the letter (usually a placeholder) expected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub coord: Coord,
    pub letter: Letter,
}

/// A word-shaped location on the grid: contiguous cells along one direction,
/// each constraining the category of the letter placed there.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot {
    direction: Direction,
    cells: Vec<Cell>,
}

impl Slot {
    /// Lay `pattern` out from `anchor` along `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::SlotOutOfRange`] if a cell's coordinate would overflow.
    pub fn new(direction: Direction, anchor: Coord, pattern: &Word) -> Result<Self, Box<ParseError>> {
        let cells = pattern
            .iter()
            .enumerate()
            .map(|(i, &letter)| direction.step(anchor, i).map(|coord| Cell { coord, letter }))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                Box::new(ParseError::SlotOutOfRange {
                    anchor: anchor.to_string(),
                    len: pattern.len(),
                })
            })?;

        Ok(Slot { direction, cells })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// First cell's coordinate, or `None` for an empty slot.
    pub fn anchor(&self) -> Option<Coord> {
        self.cells.first().map(|cell| cell.coord)
    }

    pub fn pattern(&self) -> Word {
        self.cells.iter().map(|cell| cell.letter).collect()
    }

    /// Does `word` fit this slot's category pattern? Concrete symbols are ignored.
    pub fn matches(&self, word: &Word) -> bool {
        self.len() == word.len()
            && self.cells.iter().zip(word).all(|(cell, letter)| cell.letter.same_category(letter))
    }

    /// Pool words that fit this slot, with their pool indices, in pool order.
    pub fn candidates<'a>(&'a self, pool: &'a [Word]) -> impl Iterator<Item = (usize, &'a Word)> + 'a {
        pool.iter().enumerate().filter(|(_, word)| self.matches(word))
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let pattern: String = self
            .cells
            .iter()
            .map(|cell| match cell.letter {
                Letter::Vowel(_) => crate::letter::VOWEL_PATTERN_CHAR,
                Letter::Consonant(_) => crate::letter::CONSONANT_PATTERN_CHAR,
            })
            .collect();
        match self.anchor() {
            Some(anchor) => write!(f, "{} {} {}", self.direction, anchor, pattern),
            None => write!(f, "{} (empty)", self.direction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;

    fn pattern(s: &str) -> Word {
        Word::parse_pattern(s).unwrap()
    }

    fn word(s: &str) -> Word {
        Word::parse_concrete(s, &Alphabet::default()).unwrap()
    }

    fn coords(slot: &Slot) -> Vec<(i64, i64)> {
        slot.cells().iter().map(|c| (c.coord.x, c.coord.y)).collect()
    }

    #[test]
    fn test_rightward_geometry() {
        let slot = Slot::new(Direction::Right, Coord::new(2, 3), &pattern("XOX")).unwrap();
        assert_eq!(coords(&slot), vec![(2, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn test_downward_geometry() {
        let slot = Slot::new(Direction::Down, Coord::new(4, 0), &pattern("OXXO")).unwrap();
        assert_eq!(coords(&slot), vec![(4, 0), (4, 1), (4, 2), (4, 3)]);
        assert_eq!(slot.len(), 4);
        assert_eq!(slot.anchor(), Some(Coord::new(4, 0)));
    }

    #[test]
    fn test_cells_carry_pattern_letters() {
        let slot = Slot::new(Direction::Right, Coord::new(0, 0), &pattern("OX")).unwrap();
        assert_eq!(slot.cells()[0].letter, Letter::VOWEL_PLACEHOLDER);
        assert_eq!(slot.cells()[1].letter, Letter::CONSONANT_PLACEHOLDER);
        assert_eq!(slot.pattern(), pattern("OX"));
    }

    #[test]
    fn test_matches_requires_equal_length() {
        let slot = Slot::new(Direction::Right, Coord::new(0, 0), &pattern("XOX")).unwrap();
        assert!(slot.matches(&word("NET")));
        assert!(!slot.matches(&word("NAMAS")));
        assert!(!slot.matches(&word("NE")));
    }

    #[test]
    fn test_matches_compares_categories_only() {
        let slot = Slot::new(Direction::Down, Coord::new(0, 0), &pattern("XOX")).unwrap();
        assert!(slot.matches(&word("SES")));
        assert!(slot.matches(&word("ŽUV")));
        assert!(!slot.matches(&word("ANT")));
    }

    #[test]
    fn test_candidates_in_pool_order() {
        let slot = Slot::new(Direction::Right, Coord::new(0, 0), &pattern("OX")).unwrap();
        let pool = vec![word("AŠ"), word("NE"), word("UŽ"), word("AR")];
        let found: Vec<(usize, String)> = slot.candidates(&pool).map(|(i, w)| (i, w.to_string())).collect();
        assert_eq!(found, vec![(0, "AŠ".to_string()), (2, "UŽ".to_string()), (3, "AR".to_string())]);
    }

    #[test]
    fn test_negative_anchor() {
        let slot = Slot::new(Direction::Right, Coord::new(-1, -2), &pattern("OXO")).unwrap();
        assert_eq!(coords(&slot), vec![(-1, -2), (0, -2), (1, -2)]);
        assert_eq!(slot.to_string(), "ltr (-1,-2) OXO");
    }

    #[test]
    fn test_overflowing_slot_rejected() {
        let err = Slot::new(Direction::Right, Coord::new(i64::MAX, 0), &pattern("OX")).unwrap_err();
        assert!(matches!(*err, ParseError::SlotOutOfRange { len: 2, .. }));

        let err = Slot::new(Direction::Down, Coord::new(0, i64::MAX - 1), &pattern("XOX")).unwrap_err();
        assert_eq!(err.code(), "E009");

        // the last cell may sit exactly on the limit
        let slot = Slot::new(Direction::Down, Coord::new(0, i64::MAX - 1), &pattern("XO")).unwrap();
        assert_eq!(slot.cells()[1].coord, Coord::new(0, i64::MAX));
    }

    #[test]
    fn test_display() {
        let slot = Slot::new(Direction::Right, Coord::new(0, 2), &pattern("XOXOX")).unwrap();
        assert_eq!(slot.to_string(), "ltr (0,2) XOXOX");
        assert_eq!(Direction::Down.to_string(), "ttb");
    }
}
