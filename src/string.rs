#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl std::str::FromStr for Align {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        Ok(match s {
            "left" | "l" => Self::Left,
            "center" | "centre" | "c" => Self::Center,
            "right" | "r" => Self::Right,
            align => anyhow::bail!(
                "invalid alignment: {}. supported alignments: [left | center | right]",
                align
            ),
        })
    }
}

/// Number of characters in `s`. This is what widths are measured in, not display columns.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Pads `input` with spaces out to `width` characters. Text that is already as
/// wide (or wider) is returned as-is, never truncated.
pub fn pad(input: &str, width: usize, align: Align) -> String {
    let len = char_len(input);
    let fill = width.saturating_sub(len);
    let (left, right) = match align {
        Align::Left => (0, fill),
        Align::Right => (fill, 0),
        Align::Center => (fill / 2, fill - fill / 2),
    };

    let mut out = String::with_capacity(input.len() + fill);
    out.extend(std::iter::repeat(' ').take(left));
    out.push_str(input);
    out.extend(std::iter::repeat(' ').take(right));
    out
}
