//! Grid rendering: column sizing, cell padding and border composition.
//!
//! A bordered table renders as
//!
//! ```text
//! +------+-----+
//! | Name | Age |
//! +------+-----+
//! | Bob  | 30  |
//! +------+-----+
//! ```
//!
//! Bordered cells are padded to two columns more than the widest value in
//! their column, by alignment: centered cells get a space on each side, left
//! and right aligned cells sit against the opposite border. Without borders
//! every boundary glyph becomes a single space and the separator lines are
//! dropped.

use std::borrow::Cow;

use crate::column::{Align, Column};
use crate::header::Header;
use crate::options::TableOptions;
use crate::row::{Cell, Row};
use crate::table::Table;
use crate::width::display_width;

/// Renders `table` into lines, top border first.
pub fn to_lines(table: &Table) -> Vec<String> {
    render_lines(table.columns(), table.row_records(), table.options())
}

pub(crate) fn render_lines(header: &Header, rows: &[Row], options: &TableOptions) -> Vec<String> {
    if header.is_empty() {
        return Vec::new();
    }

    let grid = Grid::new(header, rows, options);
    let widths = grid.column_widths();
    let painter = LinePainter {
        widths: &widths,
        options,
    };

    let mut lines = Vec::with_capacity(grid.rows.len() + 4);
    if options.border {
        lines.push(painter.separator());
    }
    lines.push(painter.content(
        grid.columns
            .iter()
            .map(|c| (c.name(), c.width(), c.align())),
    ));
    if options.border {
        lines.push(painter.separator());
    }
    for row in &grid.rows {
        lines.push(painter.content(
            row.iter()
                .zip(&grid.columns)
                .map(|(cell, column)| (cell.as_str(), cell.width(), column.align())),
        ));
    }
    if options.border {
        lines.push(painter.separator());
    }
    lines
}

/// The columns and cells that end up on screen, including the row number
/// column when sequencing is on.
struct Grid<'a> {
    columns: Vec<Cow<'a, Column>>,
    rows: Vec<Vec<Cow<'a, Cell>>>,
}

impl<'a> Grid<'a> {
    fn new(header: &'a Header, rows: &'a [Row], options: &TableOptions) -> Self {
        let mut columns: Vec<Cow<'a, Column>> = header.iter().map(Cow::Borrowed).collect();
        let mut body: Vec<Vec<Cow<'a, Cell>>> = rows
            .iter()
            .map(|row| row.cells().iter().map(Cow::Borrowed).collect())
            .collect();

        if options.sequence {
            let mode = header.width_mode();
            columns.insert(
                0,
                Cow::Owned(Column::new(options.sequence_title.as_str(), mode)),
            );
            for (i, row) in body.iter_mut().enumerate() {
                row.insert(0, Cow::Owned(Cell::new((i + 1).to_string(), mode)));
            }
        }

        Grid {
            columns,
            rows: body,
        }
    }

    /// Widest of the column name and every cell, per column.
    fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.width())
                    .fold(column.width(), usize::max)
            })
            .collect()
    }
}

struct LinePainter<'a> {
    widths: &'a [usize],
    options: &'a TableOptions,
}

impl LinePainter<'_> {
    fn separator(&self) -> String {
        let glyphs = &self.options.glyphs;
        let mut line = String::new();
        line.push(glyphs.joint);
        for &width in self.widths {
            line.extend(std::iter::repeat_n(glyphs.horizontal, width + 2));
            line.push(glyphs.joint);
        }
        line
    }

    fn content<'s>(&self, cells: impl Iterator<Item = (&'s str, usize, Align)>) -> String {
        let (boundary, extra) = if self.options.border {
            (self.options.glyphs.vertical, 2)
        } else {
            (' ', 0)
        };
        let mut line = String::new();
        line.push(boundary);
        for ((text, text_width, align), &width) in cells.zip(self.widths) {
            line.push_str(&pad_aligned(text, text_width, width + extra, align, ' '));
            line.push(boundary);
        }
        line
    }
}

/// Pads `text` (already measured as `text_width`) to `target` columns.
///
/// Centering puts the odd column of filler on the right. Text at or beyond
/// `target` is returned unchanged, never truncated.
pub fn pad_aligned(text: &str, text_width: usize, target: usize, align: Align, fill: char) -> String {
    if text_width >= target {
        return text.to_string();
    }
    let gap = target - text_width;
    let (left, right) = match align {
        Align::Left => (0, gap),
        Align::Right => (gap, 0),
        Align::Center => (gap / 2, gap - gap / 2),
    };

    let mut out = String::with_capacity(text.len() + gap * fill.len_utf8());
    out.extend(std::iter::repeat_n(fill, left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(fill, right));
    out
}

/// Right-aligns `s` in `width` columns, measuring it with the Han rule of
/// [`display_width`].
///
/// ```rust
/// use standout_table::pad_left;
///
/// assert_eq!(pad_left("年龄", 6), "  年龄");
/// assert_eq!(pad_left("27", 4), "  27");
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    pad_aligned(s, display_width(s), width, Align::Right, ' ')
}

/// Left-aligns `s` in `width` columns. Kana and Hangul count as one column
/// each here; use [`pad_aligned`] with a [`crate::display_width_with`]
/// measurement for other rules.
pub fn pad_right(s: &str, width: usize) -> String {
    pad_aligned(s, display_width(s), width, Align::Left, ' ')
}

/// Centers `s` in `width` columns. An odd leftover column goes on the right,
/// the same split the bordered grid uses for its header cells.
///
/// ```rust
/// use standout_table::pad_center;
///
/// assert_eq!(pad_center("男", 4), " 男 ");
/// assert_eq!(pad_center("男", 5), " 男  ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    pad_aligned(s, display_width(s), width, Align::Center, ' ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::BorderGlyphs;
    use crate::row::RowInput;

    fn sample() -> Table {
        let mut table = Table::new(["Name", "Age"]).unwrap();
        table
            .add_row(RowInput::named([("Name", "Bob"), ("Age", "30")]))
            .unwrap();
        table
    }

    #[test]
    fn pad_center_even_and_odd() {
        assert_eq!(pad_aligned("ab", 2, 6, Align::Center, ' '), "  ab  ");
        assert_eq!(pad_aligned("ab", 2, 5, Align::Center, ' '), " ab  ");
        assert_eq!(pad_aligned("a", 1, 2, Align::Center, '-'), "a-");
    }

    #[test]
    fn pad_left_and_right_alignment() {
        assert_eq!(pad_aligned("ab", 2, 5, Align::Left, ' '), "ab   ");
        assert_eq!(pad_aligned("ab", 2, 5, Align::Right, ' '), "   ab");
    }

    #[test]
    fn pad_never_truncates() {
        assert_eq!(pad_aligned("abcdef", 6, 3, Align::Center, ' '), "abcdef");
        assert_eq!(pad_aligned("abc", 3, 3, Align::Right, ' '), "abc");
    }

    #[test]
    fn pad_uses_display_width() {
        assert_eq!(pad_center("中", 4), " 中 ");
        assert_eq!(pad_right("中文", 6), "中文  ");
        assert_eq!(pad_left("中文", 3), "中文");
        assert_eq!(pad_left("年龄", 6), "  年龄");
        assert_eq!(pad_center("男", 5), " 男  ");
        assert_eq!(pad_right("！？", 5), "！？ ");
    }

    #[test]
    fn bordered_name_age_scenario() {
        let lines = to_lines(&sample());
        assert_eq!(
            lines,
            vec![
                "+------+-----+",
                "| Name | Age |",
                "+------+-----+",
                "| Bob  | 30  |",
                "+------+-----+",
            ]
        );
    }

    #[test]
    fn unbordered_uses_spaces_only() {
        let mut table = sample();
        table.disable_border();
        let lines = to_lines(&table);
        assert_eq!(lines, vec![" Name Age ", " Bob  30  "]);
        assert!(lines.iter().all(|l| !l.contains('+') && !l.contains('|')));
    }

    #[test]
    fn wide_cell_widens_header() {
        let mut table = Table::new(["ID"]).unwrap();
        table.add_row_from_values(["abcdef"]).unwrap();
        let lines = to_lines(&table);
        assert_eq!(lines[0], "+--------+");
        assert_eq!(lines[1], "|   ID   |");
        assert_eq!(lines[3], "| abcdef |");
    }

    #[test]
    fn alignment_applies_to_header_and_cells() {
        let mut table = Table::new(["Name", "Score"]).unwrap();
        table.add_row_from_values(["Alexander", "7"]).unwrap();
        table.set_column_align("Name", Align::Left).unwrap();
        table.set_column_align("Score", Align::Right).unwrap();
        let lines = to_lines(&table);
        assert_eq!(lines[1], "|Name       |  Score|");
        assert_eq!(lines[3], "|Alexander  |      7|");
    }

    #[test]
    fn left_and_right_cells_touch_the_border() {
        let mut table = sample();
        table.set_column_align("Name", Align::Left).unwrap();
        table.set_column_align("Age", Align::Right).unwrap();
        let lines = to_lines(&table);
        assert_eq!(lines[1], "|Name  |  Age|");
        assert_eq!(lines[3], "|Bob   |   30|");

        table.disable_border();
        assert_eq!(to_lines(&table), vec![" Name Age ", " Bob   30 "]);
    }

    #[test]
    fn cjk_columns_measure_double() {
        let mut table = Table::new(["姓名", "年龄"]).unwrap();
        table.add_row_from_values(["张三", "27"]).unwrap();
        let lines = to_lines(&table);
        assert_eq!(lines[0], "+------+------+");
        assert_eq!(lines[1], "| 姓名 | 年龄 |");
        assert_eq!(lines[3], "| 张三 |  27  |");
    }

    #[test]
    fn empty_table_renders_header_only() {
        let table = Table::new(["a", "b"]).unwrap();
        let lines = to_lines(&table);
        assert_eq!(lines, vec!["+---+---+", "| a | b |", "+---+---+", "+---+---+"]);
    }

    #[test]
    fn no_columns_render_nothing() {
        let mut table = sample();
        table.clear();
        assert!(to_lines(&table).is_empty());
    }

    #[test]
    fn a_dash_cell_is_plain_data() {
        let mut table = Table::new(["x"]).unwrap();
        table.add_row_from_values(["-"]).unwrap();
        let lines = to_lines(&table);
        assert_eq!(lines[3], "| - |");
    }

    #[test]
    fn sequence_column_is_prepended() {
        let mut table = Table::new(["Name"]).unwrap();
        table.add_row_from_values(["Ann"]).unwrap();
        table.add_row_from_values(["Bo"]).unwrap();
        table.enable_sequence().unwrap();
        let lines = to_lines(&table);
        assert_eq!(
            lines,
            vec![
                "+-----+------+",
                "| Seq | Name |",
                "+-----+------+",
                "|  1  | Ann  |",
                "|  2  |  Bo  |",
                "+-----+------+",
            ]
        );
        // Rendering does not touch the table itself
        assert_eq!(table.header(), vec!["Name"]);
    }

    #[test]
    fn custom_glyphs() {
        let options = TableOptions::default().glyphs(BorderGlyphs {
            horizontal: '=',
            vertical: ':',
            joint: '#',
        });
        let mut table = Table::with_options(["a"], options).unwrap();
        table.add_row_from_values(["b"]).unwrap();
        let lines = to_lines(&table);
        assert_eq!(lines, vec!["#===#", ": a :", "#===#", ": b :", "#===#"]);
    }
}
