use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use super::{Glyphs, Render, SectionFormat, Theme, RESET};
use crate::{params::Column, string::pad, Error, Section};

/// A reconciled table, ready to be drawn. Build one with [`crate::TableParams::build`].
#[derive(Debug, Clone)]
pub struct Table {
    sections: BTreeMap<Section, Vec<Column>>,
    order: Vec<Section>,
    widths: Vec<usize>,
    theme: Theme,
    glyphs: Glyphs,
    no_border: bool,
}

impl Table {
    pub(crate) fn new(
        sections: BTreeMap<Section, Vec<Column>>,
        order: Vec<Section>,
        widths: Vec<usize>,
        theme: Theme,
        glyphs: Glyphs,
        no_border: bool,
    ) -> Self {
        Self {
            sections,
            order,
            widths,
            theme,
            glyphs,
            no_border,
        }
    }

    fn check(&self) -> crate::Result<()> {
        if let Some(section) = self
            .order
            .iter()
            .find(|section| !self.sections.contains_key(*section))
        {
            return Err(Error::Inconsistent(format!(
                "{} was ordered but never accumulated",
                section.keyword()
            )));
        }

        for (section, columns) in &self.sections {
            if columns.len() != self.widths.len() {
                return Err(Error::Inconsistent(format!(
                    "{} has {} columns, expected {}",
                    section.keyword(),
                    columns.len(),
                    self.widths.len()
                )));
            }

            let rows = columns.first().map_or(0, Vec::len);
            if columns.iter().any(|column| column.len() != rows) {
                return Err(Error::Inconsistent(format!(
                    "{} has columns of uneven height",
                    section.keyword()
                )));
            }
        }

        Ok(())
    }

    fn border(&self, (left, right, junction): (char, char, char)) -> String {
        let mut line = self.theme.edge.escape();
        if !self.no_border {
            line.push(left);
        }
        for (n, width) in self.widths.iter().enumerate() {
            if n > 0 {
                line.push(junction);
            }
            line.extend(std::iter::repeat(self.glyphs.horizontal).take(*width));
        }
        if !self.no_border {
            line.push(right);
        }
        line.push_str(RESET);
        line.push('\n');
        line
    }

    fn lines<'a>(
        &'a self,
        columns: &'a [Column],
        format: &'a SectionFormat,
    ) -> impl Iterator<Item = String> + 'a {
        let edge = self.theme.edge.escape();
        let paint = format.paint.escape();
        let bar = self.glyphs.vertical;
        let rows = columns.first().map_or(0, Vec::len);

        (0..rows).map(move |row| {
            let mut line = String::new();
            if !self.no_border {
                line.push_str(&edge);
                line.push(bar);
            }

            let last = columns.len().saturating_sub(1);
            for (n, (column, width)) in columns.iter().zip(&self.widths).enumerate() {
                let text = column.get(row).map_or("", String::as_str);
                line.push_str(&paint);
                line.push_str(&pad(text, *width, format.align));
                if n < last || !self.no_border {
                    line.push_str(&edge);
                    line.push(bar);
                }
                line.push_str(RESET);
            }

            line.push('\n');
            line
        })
    }
}

/// Rows given to a repeated `header` or `data` section are merged into that
/// section, and all of them render once, where the section first appeared.
/// Borders render every time. So `top data a bottom top data b bottom` draws
/// both rows in the first box, followed by an empty second one.
impl Render for Table {
    fn render(&self, writer: &mut dyn Write) -> crate::Result<()> {
        self.check()?;

        // merged content renders once, where its kind first appeared
        let mut drawn = BTreeSet::new();

        for &section in &self.order {
            let format = match section {
                Section::Top => {
                    writer.write_all(self.border(self.glyphs.top()).as_bytes())?;
                    continue;
                }
                Section::Bottom => {
                    writer.write_all(self.border(self.glyphs.bottom()).as_bytes())?;
                    continue;
                }
                Section::Header => &self.theme.header,
                Section::Data => &self.theme.data,
            };

            if !drawn.insert(section) {
                continue;
            }

            for line in self.lines(&self.sections[&section], format) {
                writer.write_all(line.as_bytes())?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, TableParams};
    use pretty_assertions::assert_eq;

    fn render(tokens: &[&str]) -> String {
        TableParams::parse(tokens)
            .unwrap()
            .build()
            .render_to_string()
            .unwrap()
    }

    #[test]
    fn border_line() {
        let out = render(&["-size", "3", "-ce", "31", "top", "-cc", "2"]);
        assert_eq!(out, "\x1b[0m\x1b[31m┏━━━┳━━━┓\x1b[0m\n");

        let out = render(&["-size", "2", "-ce", "31", "-nb", "bottom", "-cc", "3"]);
        assert_eq!(out, "\x1b[0m\x1b[31m━━┻━━┻━━\x1b[0m\n");
    }

    #[test]
    fn content_line() {
        let out = render(&["-size", "3", "-ce", "1", "-cd", "2", "data", "a", "b"]);
        let edge = "\x1b[0m\x1b[1m";
        let data = "\x1b[0m\x1b[2m";
        let expected = format!(
            "{edge}┃{data}a  {edge}┃{RESET}{data}b  {edge}┃{RESET}\n",
            edge = edge,
            data = data,
            RESET = RESET
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn no_border_keeps_inner_bars() {
        let out = render(&["-nb", "-size", "1", "-ce", "1", "-cd", "2", "data", "a", "b"]);
        assert_eq!(
            out,
            "\x1b[0m\x1b[2ma\x1b[0m\x1b[1m┃\x1b[0m\x1b[0m\x1b[2mb\x1b[0m\n"
        );
    }

    #[test]
    fn alignment() {
        let out = render(&["-size", "5", "-fdr", "data", "ab"]);
        assert!(out.contains("   ab"));

        let out = render(&["-size", "5", "-fdc", "data", "ab"]);
        assert!(out.contains(" ab  "));
    }

    #[test]
    fn stacked_rows() {
        let out = render(&["data", "a", ":b", ":c"]);
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn repeated_content_renders_once() {
        let out = render(&["top", "data", "a", "bottom", "data", "b", "top"]);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains('┏'));
        assert!(lines[1].contains('a'));
        assert!(lines[2].contains('b'));
        assert!(lines[3].contains('┗'));
        assert!(lines[4].contains('┏'));
    }

    #[test]
    fn render_is_idempotent() {
        let table = TableParams::parse(["top", "header", "H", "data", "D", ":E", "bottom"])
            .unwrap()
            .build();
        assert_eq!(
            table.render_to_string().unwrap(),
            table.render_to_string().unwrap()
        );
    }

    #[test]
    fn inconsistent_tables_render_nothing() {
        let table = Table::new(
            BTreeMap::from([(Section::Data, vec![vec!["a".to_string()]])]),
            vec![Section::Data],
            vec![],
            Theme::default(),
            Glyphs::default(),
            false,
        );
        let mut out = Vec::new();
        let err = table.render(&mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RenderConsistency);
        assert!(out.is_empty());

        let table = Table::new(
            BTreeMap::new(),
            vec![Section::Header],
            vec![],
            Theme::default(),
            Glyphs::default(),
            false,
        );
        assert!(table.render_to_string().is_err());
    }
}
