use crate::slot::Coord;
use crate::state::{Grid, PuzzleState};

const EMPTY_CELL: &str = "   ";

/// Render a grid as rows of fixed-width cells: `[X]` where a letter is placed,
/// three spaces elsewhere. The rectangle spans from `(0,0)` to the largest
/// occupied `x` and `y`; every row ends with a newline. Cells at a negative
/// coordinate fall outside the rectangle and are not drawn.
///
/// An empty grid renders as the empty string.
pub fn render_grid(grid: &Grid) -> String {
    let (Some(max_x), Some(max_y)) = (
        grid.keys().map(|coord| coord.x).max(),
        grid.keys().map(|coord| coord.y).max(),
    ) else {
        return String::new();
    };

    let mut out = String::new();
    for y in 0..=max_y {
        for x in 0..=max_x {
            match grid.get(&Coord::new(x, y)) {
                Some(letter) => out.push_str(&format!("[{letter}]")),
                None => out.push_str(EMPTY_CELL),
            }
        }
        out.push('\n');
    }
    out
}

/// Render every solution, separated by a blank line.
pub fn render_solutions(solutions: &[PuzzleState]) -> String {
    solutions
        .iter()
        .map(PuzzleState::to_visual)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letter::Letter;

    fn grid(cells: &[(i64, i64, Letter)]) -> Grid {
        cells.iter().map(|&(x, y, letter)| (Coord::new(x, y), letter)).collect()
    }

    #[test]
    fn test_single_row() {
        let g = grid(&[(0, 0, Letter::Vowel(Some('A'))), (1, 0, Letter::Consonant(Some('B')))]);
        assert_eq!(render_grid(&g), "[A][B]\n");
    }

    #[test]
    fn test_gaps_render_as_blanks() {
        let g = grid(&[
            (0, 0, Letter::Consonant(Some('N'))),
            (2, 0, Letter::Vowel(Some('E'))),
            (0, 1, Letter::Vowel(Some('Ū'))),
        ]);
        assert_eq!(render_grid(&g), "[N]   [E]\n[Ū]      \n");
    }

    #[test]
    fn test_bounding_box_starts_at_origin() {
        let g = grid(&[(1, 1, Letter::Vowel(Some('O')))]);
        assert_eq!(render_grid(&g), "      \n   [O]\n");
    }

    #[test]
    fn test_placeholders_render_as_glyphs() {
        let g = grid(&[(0, 0, Letter::VOWEL_PLACEHOLDER), (1, 0, Letter::CONSONANT_PLACEHOLDER)]);
        assert_eq!(render_grid(&g), "[_][-]\n");
    }

    #[test]
    fn test_negative_cells_not_drawn() {
        let g = grid(&[
            (-1, 0, Letter::Consonant(Some('N'))),
            (0, 0, Letter::Vowel(Some('A'))),
            (0, -1, Letter::Vowel(Some('E'))),
        ]);
        assert_eq!(render_grid(&g), "[A]\n");
    }

    #[test]
    fn test_only_negative_cells() {
        // no row reaches y = 0
        let g = grid(&[(0, -1, Letter::Vowel(Some('A')))]);
        assert_eq!(render_grid(&g), "");

        // rows exist but no column reaches x = 0
        let g = grid(&[(-2, 1, Letter::Vowel(Some('A')))]);
        assert_eq!(render_grid(&g), "\n\n");
    }

    #[test]
    fn test_empty_grid() {
        assert_eq!(render_grid(&Grid::new()), "");
    }

    #[test]
    fn test_render_solutions_blank_line_between() {
        let a = PuzzleState::new(vec![], vec![]);
        assert_eq!(render_solutions(&[]), "");
        assert_eq!(render_solutions(&[a.clone(), a]), "\n");
    }
}
