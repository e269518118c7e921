/// The eight characters used to draw the table's edges
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub vertical: char,
    pub horizontal: char,

    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,

    pub top_junction: char,
    pub bottom_junction: char,
}

impl Glyphs {
    pub const HEAVY: Self = Self::from_array(['┃', '━', '┏', '┓', '┗', '┛', '┳', '┻']);
    pub const LIGHT: Self = Self::from_array(['│', '─', '┌', '┐', '└', '┘', '┬', '┴']);
    pub const DOUBLE: Self = Self::from_array(['║', '═', '╔', '╗', '╚', '╝', '╦', '╩']);
    pub const ROUNDED: Self = Self::from_array(['│', '─', '╭', '╮', '╰', '╯', '┬', '┴']);
    pub const DASHED: Self = Self::from_array(['┆', '┄', '┌', '┐', '└', '┘', '┬', '┴']);
    pub const HEAVY_DASHED: Self = Self::from_array(['┇', '┉', '┏', '┓', '┗', '┛', '┳', '┻']);

    pub const PRESETS: [(&'static str, Self); 6] = [
        ("heavy", Self::HEAVY),
        ("light", Self::LIGHT),
        ("double", Self::DOUBLE),
        ("rounded", Self::ROUNDED),
        ("dashed", Self::DASHED),
        ("heavy dashed", Self::HEAVY_DASHED),
    ];

    const fn from_array(glyphs: [char; 8]) -> Self {
        Self {
            vertical: glyphs[0],
            horizontal: glyphs[1],
            top_left: glyphs[2],
            top_right: glyphs[3],
            bottom_left: glyphs[4],
            bottom_right: glyphs[5],
            top_junction: glyphs[6],
            bottom_junction: glyphs[7],
        }
    }

    /// Corners and junction for a border line: `(left, right, junction)`
    pub const fn top(&self) -> (char, char, char) {
        (self.top_left, self.top_right, self.top_junction)
    }

    pub const fn bottom(&self) -> (char, char, char) {
        (self.bottom_left, self.bottom_right, self.bottom_junction)
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::HEAVY
    }
}

impl std::str::FromStr for Glyphs {
    type Err = anyhow::Error;

    /// Takes the first 8 characters. Anything after that is ignored.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let mut chars = s.chars();
        let mut glyphs = [' '; 8];
        for (n, slot) in glyphs.iter_mut().enumerate() {
            *slot = match chars.next() {
                Some(ch) => ch,
                None => anyhow::bail!("expected 8 edge characters, found {}", n),
            };
        }
        Ok(Self::from_array(glyphs))
    }
}

impl std::fmt::Display for Glyphs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        [
            self.vertical,
            self.horizontal,
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
            self.top_junction,
            self.bottom_junction,
        ]
        .iter()
        .try_for_each(|ch| write!(f, "{}", ch))
    }
}
