use alloc::string::String;
use core::fmt::{self, Write};

use crate::*;

/// Writes one line per row, one symbol per cell, every row terminated by a newline.
pub fn write_field<W: Write>(field: &Minefield, out: &mut W) -> fmt::Result {
    for row in field.rows() {
        for cell in row {
            out.write_char(cell.symbol())?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

pub fn render(field: &Minefield) -> String {
    let (width, height) = field.size();
    let mut out = String::with_capacity((usize::from(width) + 1) * usize::from(height));
    // writing into a String never fails
    let _ = write_field(field, &mut out);
    out
}

impl fmt::Display for Minefield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_field(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn single_mine_renders_as_m() {
        let field = Minefield::from_mine_coords((1, 1), &[(0, 0)]).unwrap();

        assert_eq!(render(&field), "M\n");
    }

    #[test]
    fn empty_row_renders_as_dots() {
        let field = Minefield::from_mine_coords((3, 1), &[]).unwrap();

        assert_eq!(render(&field), "...\n");
    }

    #[test]
    fn rows_are_rendered_top_to_bottom() {
        let field = Minefield::from_mine_coords((4, 3), &[(0, 0), (3, 2)]).unwrap();

        assert_eq!(render(&field), "M1..\n1111\n..1M\n");
    }

    #[test]
    fn full_field_is_only_mines() {
        let field = Placement::Rejection.generate(5, FieldConfig::new((4, 2), 8).unwrap());
        let text = render(&field);

        assert_eq!(text, "MMMM\nMMMM\n");
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn rendering_is_deterministic() {
        let field = Placement::Shuffle.generate(11, FieldConfig::new((10, 6), 15).unwrap());

        assert_eq!(render(&field), render(&field));
        assert_eq!(field.to_string(), render(&field));
    }

    #[test]
    fn generated_field_without_mines_has_no_m() {
        let field = Placement::Rejection.generate(9, FieldConfig::new((7, 5), 0).unwrap());

        assert!(!render(&field).contains('M'));
    }
}
