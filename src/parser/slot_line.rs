use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{all_consuming, value},
    IResult, Parser,
};

use crate::errors::ParseError;
use crate::letter::Word;
use crate::slot::{Coord, Direction, Slot};

/// Number of whitespace-separated fields on a slot line.
const SLOT_LINE_FIELDS: usize = 4;

fn direction(input: &str) -> IResult<&str, Direction> {
    alt((
        value(Direction::Down, tag(Direction::DOWN_TOKEN)),
        value(Direction::Right, tag(Direction::RIGHT_TOKEN)),
    ))
    .parse(input)
}

/// Parse a direction token: `ttb` or `ltr`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidDirection`] for any other token.
pub fn parse_direction(token: &str) -> Result<Direction, Box<ParseError>> {
    all_consuming(direction)
        .parse(token)
        .map(|(_, dir)| dir)
        .map_err(|_| Box::new(ParseError::InvalidDirection { token: token.to_string() }))
}

/// Parse an integer coordinate. Negative values are allowed.
///
/// # Errors
///
/// Returns [`ParseError::InvalidCoordinate`] if `token` is not an `i64`.
pub fn parse_coordinate(token: &str) -> Result<i64, Box<ParseError>> {
    token.parse::<i64>().map_err(|source| {
        Box::new(ParseError::InvalidCoordinate {
            token: token.to_string(),
            source,
        })
    })
}

/// Parse `direction x y pattern` into a [`Slot`].
///
/// # Errors
///
/// Returns the first failing field's error, [`ParseError::WrongFieldCount`]
/// if the line does not have exactly four fields, or
/// [`ParseError::SlotOutOfRange`] if the slot's cells overflow the coordinate range.
pub fn parse_slot_line(line: &str) -> Result<Slot, Box<ParseError>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[dir, x, y, pattern] = fields.as_slice() else {
        return Err(Box::new(ParseError::WrongFieldCount {
            expected: SLOT_LINE_FIELDS,
            found: fields.len(),
        }));
    };

    let direction = parse_direction(dir)?;
    let anchor = Coord::new(parse_coordinate(x)?, parse_coordinate(y)?);
    let pattern = Word::parse_pattern(pattern)?;

    Slot::new(direction, anchor, &pattern)
}
