use std::fmt::Display;
use std::io::Write;

use crate::{render::Render, Align, Section, TableParams, Widths};

/// Formatting for [`print_line`] and [`print_block`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFormat {
    pub edge_color: String,
    pub data_color: String,
    pub style: String,
    /// Only used for the first row of a block
    pub header_style: String,
    pub centered: bool,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self {
            edge_color: "36".into(),
            data_color: "35".into(),
            style: String::new(),
            header_style: "4;".into(),
            centered: false,
        }
    }
}

impl LineFormat {
    fn params(&self, widths: Widths) -> TableParams {
        let align = if self.centered {
            Align::Center
        } else {
            Align::Left
        };

        let mut params = TableParams::new();
        params.widths = widths;

        let theme = &mut params.theme;
        theme.edge.set_color(&*self.edge_color);
        theme.edge.set_style("");

        theme.header.paint.set_color(&*self.data_color);
        theme.header.paint.set_style(&*self.header_style);
        theme.header.align = align;

        theme.data.paint.set_color(&*self.data_color);
        theme.data.paint.set_style(&*self.style);
        theme.data.align = align;

        params
    }
}

/// Prints one row, one column per cell, with no top or bottom border.
pub fn print_line<T>(
    cells: &[T],
    widths: impl Into<Widths>,
    format: &LineFormat,
) -> crate::Result<()>
where
    T: Display,
{
    write_line(&mut std::io::stdout().lock(), cells, widths, format)
}

pub fn write_line<T>(
    writer: &mut dyn Write,
    cells: &[T],
    widths: impl Into<Widths>,
    format: &LineFormat,
) -> crate::Result<()>
where
    T: Display,
{
    if cells.is_empty() {
        return Ok(());
    }

    let mut params = format.params(widths.into());
    params.row(Section::Data, cells);
    params.build().render(writer)
}

/// Prints the first row as a header and the rest as data.
///
/// Short rows are padded with empty cells, so a missing cell never shifts
/// the ones after it. Nothing is printed for zero rows.
pub fn print_block<R, T>(
    rows: &[R],
    widths: impl Into<Widths>,
    format: &LineFormat,
) -> crate::Result<()>
where
    R: AsRef<[T]>,
    T: Display,
{
    write_block(&mut std::io::stdout().lock(), rows, widths, format)
}

pub fn write_block<R, T>(
    writer: &mut dyn Write,
    rows: &[R],
    widths: impl Into<Widths>,
    format: &LineFormat,
) -> crate::Result<()>
where
    R: AsRef<[T]>,
    T: Display,
{
    let (header, data) = match rows.split_first() {
        Some(split) => split,
        None => return Ok(()),
    };

    let count = rows.iter().map(|row| row.as_ref().len()).max().unwrap_or(0);
    let padded = |row: &R| {
        row.as_ref()
            .iter()
            .map(ToString::to_string)
            .chain(std::iter::repeat_with(String::new))
            .take(count)
            .collect::<Vec<_>>()
    };

    let mut params = format.params(widths.into());
    params.row(Section::Header, padded(header));
    for row in data {
        params.row(Section::Data, padded(row));
    }
    params.build().render(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line(cells: &[&str], widths: impl Into<Widths>, format: &LineFormat) -> String {
        let mut out = Vec::new();
        write_line(&mut out, cells, widths, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn block(rows: &[Vec<String>], widths: impl Into<Widths>, format: &LineFormat) -> String {
        let mut out = Vec::new();
        write_block(&mut out, rows, widths, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn line_bytes() {
        let out = line(&["a", "b"], 3usize, &LineFormat::default());
        let expected = concat!(
            "\x1b[0m\x1b[36m┃\x1b[0m",
            "\x1b[35ma  \x1b[0m\x1b[36m┃\x1b[0m",
            "\x1b[0m\x1b[35mb  \x1b[0m\x1b[36m┃\x1b[0m\n"
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn line_with_style_and_widths() {
        let format = LineFormat {
            style: "1;".into(),
            centered: true,
            ..LineFormat::default()
        };
        let out = line(&["ab", "c"], vec![4usize, 3], &format);
        assert!(out.contains("\x1b[1;35m ab "));
        assert!(out.contains("\x1b[1;35m c "));
    }

    #[test]
    fn line_accepts_any_display() {
        let mut out = Vec::new();
        write_line(&mut out, &[&123 as &dyn Display, &45.67, &true], 8usize, &LineFormat::default())
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        for needle in ["123", "45.67", "true"] {
            assert!(out.contains(needle));
        }
    }

    #[test]
    fn empty_inputs_print_nothing() {
        assert_eq!(line(&[], 3usize, &LineFormat::default()), "");
        assert_eq!(block(&[], Widths::Auto, &LineFormat::default()), "");
    }

    #[test]
    fn block_header_uses_header_style() {
        let rows = vec![
            vec!["H1".to_string(), "H2".to_string()],
            vec!["D1".to_string(), "D2".to_string()],
        ];
        let format = LineFormat {
            header_style: "1;4;".into(),
            ..LineFormat::default()
        };
        let out = block(&rows, Widths::Auto, &format);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\x1b[1;4;35mH1"));
        assert!(lines[1].contains("\x1b[35mD1"));
        assert!(!lines[1].contains("1;4;"));
    }

    #[test]
    fn block_single_row_is_just_a_header() {
        let rows = vec![vec!["Only".to_string(), "Row".to_string()]];
        let out = block(&rows, Widths::Auto, &LineFormat::default());
        assert_eq!(out.lines().count(), 1);
        assert!(out.contains("\x1b[4;35mOnly"));
    }
}
