//! Character grid with a y-axis gutter.
//!
//! Each row is a label gutter followed by cells: cell 0 is the axis tick,
//! cell `x + 1` is data column `x`. Labels are padded to a common width so
//! the axis stays straight:
//!
//! * every label narrower than `offset` is right-aligned against the tick;
//! * otherwise labels are padded to the widest one and `offset - 2` blanks
//!   separate them from the tick (the layout of the classic `{:8.2f} ` chart).

use unicode_width::UnicodeWidthStr;

use crate::{
    core::{color::AnsiCode, config::Config},
    render::scale::Scale,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cell {
    Blank,
    Glyph(char),
    Painted(char, AnsiCode),
}

pub(crate) struct Canvas {
    gutters: Vec<String>,
    cells: Vec<Vec<Cell>>,
    axis_column: usize,
}

fn pad_left(label: &str, cols: usize) -> String {
    let pad = cols.saturating_sub(label.width());
    format!("{}{label}", " ".repeat(pad))
}

impl Canvas {
    /// Allocate `scale.rows + 1` rows for `data_columns` columns and paint the
    /// y-axis: labels plus a tick per row, the zero tick on the row for 0.
    pub fn new(scale: &Scale, config: &Config, data_columns: usize) -> Self {
        let labels: Vec<String> = (0..=scale.rows)
            .map(|row| config.format.apply_at(scale.label_value(row), row))
            .collect();
        let widest = labels.iter().map(|l| l.width()).max().unwrap_or(0);
        let offset = config.offset;

        let gutters: Vec<String> = labels
            .iter()
            .map(|label| {
                if widest < offset {
                    pad_left(label, offset - 1)
                } else {
                    format!("{}{}", pad_left(label, widest), " ".repeat(offset - 2))
                }
            })
            .collect();
        let axis_column = gutters.first().map_or(0, |g| g.width());

        let mut cells = vec![vec![Cell::Blank; data_columns + 1]; scale.rows + 1];
        let zero_row = scale.zero_row();
        for (row, line) in cells.iter_mut().enumerate() {
            line[0] = Cell::Glyph(if zero_row == Some(row) {
                config.symbols.zero_tick()
            } else {
                config.symbols.tick()
            });
        }

        Self {
            gutters,
            cells,
            axis_column,
        }
    }

    /// Display column of the tick, i.e. the gutter width.
    #[inline]
    pub fn axis_column(&self) -> usize {
        self.axis_column
    }

    /// Replace the tick on `row`.
    #[inline]
    pub fn set_tick(&mut self, row: usize, glyph: char) {
        if let Some(line) = self.cells.get_mut(row) {
            line[0] = Cell::Glyph(glyph);
        }
    }

    /// Write `glyph` into data column `x`, overwriting whatever is there.
    #[inline]
    pub fn put(&mut self, row: usize, x: usize, glyph: char, color: Option<AnsiCode>) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|line| line.get_mut(x + 1)) {
            *cell = match color {
                Some(c) => Cell::Painted(glyph, c),
                None => Cell::Glyph(glyph),
            };
        }
    }

    /// Serialise top to bottom, right-trimming each row.
    pub fn into_lines(self) -> Vec<String> {
        let reset = AnsiCode::reset();
        self.gutters
            .into_iter()
            .zip(self.cells)
            .map(|(mut line, cells)| {
                for cell in cells {
                    match cell {
                        Cell::Blank => line.push(' '),
                        Cell::Glyph(g) => line.push(g),
                        Cell::Painted(g, c) => {
                            line.push_str(c.as_str());
                            line.push(g);
                            line.push_str(reset.as_str());
                        }
                    }
                }
                line.truncate(line.trim_end().len());
                line
            })
            .collect()
    }
}
