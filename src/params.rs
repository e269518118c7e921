use std::collections::BTreeMap;
use std::fmt::Display;

use crate::{
    render::{Glyphs, Table, Theme},
    string::{char_len, Align},
    Error, Result, Warning,
};

/// One stacked column of cell text
pub type Column = Vec<String>;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Top,
    Header,
    Data,
    Bottom,
}

impl Section {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "top" => Self::Top,
            "header" => Self::Header,
            "data" => Self::Data,
            "bottom" => Self::Bottom,
            _ => return None,
        })
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Header => "header",
            Self::Data => "data",
            Self::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widths {
    /// Every column gets the same width
    Fixed(usize),
    /// A width per column index. Indices past the end are auto-sized
    PerColumn(Vec<usize>),
    /// Longest cell in the column, across all sections, plus [`Widths::AUTO_PADDING`]
    Auto,
}

impl Widths {
    pub const AUTO_PADDING: usize = 2;
    pub const DEFAULT: Self = Self::Fixed(19);
    /// Largest width (and column count) accepted from the outside
    pub const MAX: usize = u16::MAX as usize;

    /// `-1` is auto, anything else must be between 0 and [`Widths::MAX`]
    pub fn from_size(size: i64) -> Option<Self> {
        match size {
            -1 => Some(Self::Auto),
            n => usize::try_from(n)
                .ok()
                .filter(|&n| n <= Self::MAX)
                .map(Self::Fixed),
        }
    }
}

impl Default for Widths {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<usize> for Widths {
    fn from(width: usize) -> Self {
        Self::Fixed(width)
    }
}

impl From<Vec<usize>> for Widths {
    fn from(widths: Vec<usize>) -> Self {
        Self::PerColumn(widths)
    }
}

impl From<&[usize]> for Widths {
    fn from(widths: &[usize]) -> Self {
        Self::PerColumn(widths.to_vec())
    }
}

/// Every option flag the token stream understands
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Opt {
    EdgeColor,
    DataColor,
    HeaderColor,
    DataStyle,
    HeaderStyle,
    EdgeGlyphs,
    Size,
    ColumnCount,
    HeaderAlign(Align),
    DataAlign(Align),
    NoBorder,
    Help,
}

impl Opt {
    pub fn from_flag(flag: &str) -> Option<Self> {
        use Align::*;
        Some(match flag {
            "-ce" => Self::EdgeColor,
            "-cd" => Self::DataColor,
            "-ch" => Self::HeaderColor,
            "-fd" => Self::DataStyle,
            "-fh" => Self::HeaderStyle,
            "-fe" => Self::EdgeGlyphs,
            "-size" => Self::Size,
            "-cc" => Self::ColumnCount,
            "-fhc" => Self::HeaderAlign(Center),
            "-fhl" => Self::HeaderAlign(Left),
            "-fhr" => Self::HeaderAlign(Right),
            "-fdc" => Self::DataAlign(Center),
            "-fdl" => Self::DataAlign(Left),
            "-fdr" => Self::DataAlign(Right),
            "-nb" => Self::NoBorder,
            "-h" | "--help" => Self::Help,
            _ => return None,
        })
    }

    pub const fn flag(self) -> &'static str {
        use Align::*;
        match self {
            Self::EdgeColor => "-ce",
            Self::DataColor => "-cd",
            Self::HeaderColor => "-ch",
            Self::DataStyle => "-fd",
            Self::HeaderStyle => "-fh",
            Self::EdgeGlyphs => "-fe",
            Self::Size => "-size",
            Self::ColumnCount => "-cc",
            Self::HeaderAlign(Center) => "-fhc",
            Self::HeaderAlign(Left) => "-fhl",
            Self::HeaderAlign(Right) => "-fhr",
            Self::DataAlign(Center) => "-fdc",
            Self::DataAlign(Left) => "-fdl",
            Self::DataAlign(Right) => "-fdr",
            Self::NoBorder => "-nb",
            Self::Help => "-h",
        }
    }

    pub const fn takes_value(self) -> bool {
        !matches!(
            self,
            Self::HeaderAlign(..) | Self::DataAlign(..) | Self::NoBorder | Self::Help
        )
    }
}

enum Token<'a> {
    Section(Section),
    Flag(&'a str),
    Continuation(&'a str),
    EmptyColumn,
    Item(&'a str),
}

impl<'a> Token<'a> {
    fn classify(token: &'a str) -> Self {
        if let Some(section) = Section::from_keyword(token) {
            return Self::Section(section);
        }
        match token {
            " " => Self::EmptyColumn,
            s if s.starts_with('-') => Self::Flag(s),
            s => match s.strip_prefix(':') {
                Some(rest) => Self::Continuation(rest),
                None => Self::Item(s),
            },
        }
    }
}

/// The accumulated description of a table, built up from a token stream or
/// through the row builder, then turned into a [`Table`] for rendering.
#[derive(Debug, Clone)]
pub struct TableParams {
    columns: BTreeMap<Section, Vec<Column>>,
    order: Vec<Section>,

    current: Option<Section>,
    cursor: Option<usize>,

    pub widths: Widths,
    pub column_count: Option<usize>,
    pub theme: Theme,
    pub glyphs: Glyphs,
    pub no_border: bool,
    pub help: bool,

    warnings: Vec<Warning>,
}

impl Default for TableParams {
    fn default() -> Self {
        Self::new()
    }
}

impl TableParams {
    pub fn new() -> Self {
        Self {
            columns: BTreeMap::new(),
            order: Vec::new(),
            current: None,
            cursor: None,
            widths: Widths::DEFAULT,
            column_count: None,
            theme: Theme::default(),
            glyphs: Glyphs::default(),
            no_border: false,
            help: false,
            warnings: Vec::new(),
        }
    }

    /// Parses a full token stream and reconciles the result.
    ///
    /// # Errors
    /// Sequence errors (a leading non-section token, or a continuation with
    /// no open column) and argument errors (a missing or unusable option
    /// value) abort the parse.
    pub fn parse<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut this = Self::new();
        this.feed(tokens)?;
        this.reconcile();
        Ok(this)
    }

    /// Like [`TableParams::parse`], but the environment is turned into leading
    /// option tokens first so anything in `args` overrides it.
    pub fn from_env_and_args<E, K, V, I, S>(env: E, args: I) -> Result<Self>
    where
        E: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = crate::config::env_tokens(env)
            .into_iter()
            .chain(args.into_iter().map(|s| s.as_ref().to_string()));
        Self::parse(tokens)
    }

    /// Consumes more tokens. This does not reconcile.
    pub fn feed<I, S>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens.into_iter().collect::<Vec<_>>();
        let mut iter = tokens.iter().map(S::as_ref).peekable();

        while let Some(token) = iter.next() {
            log::trace!("token: {:?}", token);
            match Token::classify(token) {
                Token::Flag(flag) => match Opt::from_flag(flag) {
                    Some(opt) if opt.takes_value() => {
                        let value = iter.next().ok_or_else(|| Error::MissingValue {
                            option: flag.to_string(),
                        })?;
                        self.apply(opt, value)?
                    }
                    Some(opt) => self.apply(opt, "")?,
                    None => {
                        // an unknown flag takes its value with it, unless the next token
                        // clearly isn't one
                        if let Some(next) = iter.peek() {
                            let keep = matches!(
                                Token::classify(next),
                                Token::Section(..) | Token::Flag(..)
                            );
                            if !keep {
                                iter.next();
                            }
                        }
                        self.warn(Warning::UnknownOption {
                            option: flag.to_string(),
                        })
                    }
                },

                Token::Section(section) => {
                    self.section(section);
                }

                _ if self.current.is_none() => {
                    return Err(Error::FirstTokenNotSection {
                        token: token.to_string(),
                    })
                }

                Token::Continuation(text) => self.continue_column(text).map_err(|_| {
                    Error::ContinuationWithoutColumn {
                        token: token.to_string(),
                    }
                })?,
                Token::EmptyColumn => self.push_cell(String::new()),
                Token::Item(text) => self.push_cell(text.to_string()),
            }
        }

        Ok(())
    }

    fn apply(&mut self, opt: Opt, value: &str) -> Result<()> {
        match opt {
            Opt::EdgeColor => self.theme.edge.set_color(value),
            Opt::DataColor => self.theme.data.paint.set_color(value),
            Opt::HeaderColor => self.theme.header.paint.set_color(value),
            Opt::DataStyle => self.theme.data.paint.set_style(value),
            Opt::HeaderStyle => self.theme.header.paint.set_style(value),
            Opt::EdgeGlyphs => match value.parse() {
                Ok(glyphs) => self.glyphs = glyphs,
                Err(..) => self.warn(Warning::InvalidGlyphs {
                    value: value.to_string(),
                }),
            },
            Opt::Size => {
                self.widths = value
                    .parse()
                    .ok()
                    .and_then(Widths::from_size)
                    .ok_or_else(|| {
                        Error::invalid_value(opt.flag(), value, "expected -1 or 0 to 65535")
                    })?
            }
            Opt::ColumnCount => {
                let count = value
                    .parse()
                    .ok()
                    .filter(|&n: &usize| n <= Widths::MAX)
                    .ok_or_else(|| Error::invalid_value(opt.flag(), value, "expected 0 to 65535"))?;
                self.column_count = Some(count)
            }
            Opt::HeaderAlign(align) => self.theme.header.align = align,
            Opt::DataAlign(align) => self.theme.data.align = align,
            Opt::NoBorder => self.no_border = true,
            Opt::Help => self.help = true,
        }
        Ok(())
    }

    fn warn(&mut self, warning: Warning) {
        log::warn!("{}", warning);
        self.warnings.push(warning)
    }

    /// Opens `section`, merging with any columns it already has. Cells that
    /// follow start again at the first column.
    pub fn section(&mut self, section: Section) -> &mut Self {
        log::trace!("section: {}", section.keyword());
        self.current = Some(section);
        self.order.push(section);
        self.columns.entry(section).or_default();
        self.cursor = None;
        self
    }

    /// Adds one row of cells to `section`, one cell per column.
    ///
    /// This opens the section if it isn't the current one. Columns the row
    /// doesn't reach get an empty cell, so later rows stay lined up.
    pub fn row<I, T>(&mut self, section: Section, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        if self.current != Some(section) {
            self.section(section);
        }

        let columns = self.current_columns();
        let height = columns.iter().map(Vec::len).max().unwrap_or(0);
        columns
            .iter_mut()
            .for_each(|column| column.resize(height, String::new()));

        let mut count = 0;
        for cell in cells {
            if count >= columns.len() {
                columns.push(vec![String::new(); height]);
            }
            columns[count].push(cell.to_string());
            count += 1;
        }

        columns
            .iter_mut()
            .for_each(|column| column.resize(height + 1, String::new()));

        self.cursor = count.checked_sub(1);
        self
    }

    fn current_columns(&mut self) -> &mut Vec<Column> {
        let section = self.current.unwrap_or(Section::Data);
        self.columns.entry(section).or_default()
    }

    fn push_cell(&mut self, text: String) {
        let cursor = self.cursor.map_or(0, |n| n + 1);
        self.cursor = Some(cursor);

        let columns = self.current_columns();
        if cursor >= columns.len() {
            columns.push(Column::new());
        }
        columns[cursor].push(text)
    }

    fn continue_column(&mut self, text: &str) -> std::result::Result<(), ()> {
        let cursor = self.cursor.ok_or(())?;
        let column = self.current_columns().get_mut(cursor).ok_or(())?;
        column.push(text.to_string());
        Ok(())
    }

    /// Pads every section out to the same column count, and every column in a
    /// section out to that section's tallest column. Running it again changes nothing.
    pub fn reconcile(&mut self) {
        let found = self.columns.values().map(Vec::len).max().unwrap_or(0);
        let count = match self.column_count {
            Some(requested) if requested < found => {
                self.warn(Warning::ColumnCountTooSmall { requested, found });
                found
            }
            Some(requested) => requested,
            None => found,
        };
        if count > 0 {
            self.column_count = Some(count);
        }

        for (section, columns) in &mut self.columns {
            if columns.len() < count {
                log::debug!(
                    "padding {} from {} to {} columns",
                    section.keyword(),
                    columns.len(),
                    count
                );
                columns.resize_with(count, Column::new);
            }

            let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
            for column in columns.iter_mut().filter(|c| c.len() < rows) {
                log::debug!("padding a {} column to {} rows", section.keyword(), rows);
                column.resize(rows, String::new());
            }
        }
    }

    /// The effective width for each column index. Every section shares these,
    /// so borders line up.
    pub fn effective_widths(&self) -> Vec<usize> {
        let count = self.column_count.unwrap_or(0);
        (0..count)
            .map(|index| match &self.widths {
                Widths::Fixed(width) => *width,
                Widths::PerColumn(widths) => widths
                    .get(index)
                    .copied()
                    .unwrap_or_else(|| self.auto_width(index)),
                Widths::Auto => self.auto_width(index),
            })
            .collect()
    }

    fn auto_width(&self, index: usize) -> usize {
        self.columns
            .values()
            .filter_map(|columns| columns.get(index))
            .flatten()
            .map(|cell| char_len(cell))
            .max()
            .unwrap_or(0)
            + Widths::AUTO_PADDING
    }

    pub fn columns(&self, section: Section) -> Option<&[Column]> {
        self.columns.get(&section).map(Vec::as_slice)
    }

    /// Sections in the order they were opened
    pub fn order(&self) -> &[Section] {
        &self.order
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Reconciles, then freezes everything into a [`Table`]
    pub fn build(mut self) -> Table {
        self.reconcile();
        let widths = self.effective_widths();
        Table::new(
            self.columns,
            self.order,
            widths,
            self.theme,
            self.glyphs,
            self.no_border,
        )
    }
}
