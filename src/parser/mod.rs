pub mod puzzle_file;
pub mod slot_line;

// Re-export the public API so call sites can use `parser::Puzzle` directly.
pub use puzzle_file::Puzzle;
pub use slot_line::{parse_coordinate, parse_direction, parse_slot_line};
