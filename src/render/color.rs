use std::borrow::Cow;

pub const RESET: &str = "\x1b[0m";

/// Builds the escape sequence for an SGR `color` code with an optional `style`
/// prefix (e.g. `"1;4;"`). The sequence always starts with a reset so nothing
/// bleeds in from a previous segment. Neither part is validated.
///
/// Without a color this is just the reset.
pub fn ansi_color_code(color: Option<&str>, style: &str) -> String {
    match color {
        Some(color) => format!("{RESET}\x1b[{style}{color}m"),
        None => RESET.to_string(),
    }
}

pub const fn reset_color() -> &'static str {
    RESET
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorStyle {
    pub color: Option<Cow<'static, str>>,
    pub style: Cow<'static, str>,
}

impl ColorStyle {
    pub const fn new(color: &'static str) -> Self {
        Self {
            color: Some(Cow::Borrowed(color)),
            style: Cow::Borrowed(""),
        }
    }

    pub const fn styled(color: &'static str, style: &'static str) -> Self {
        Self {
            color: Some(Cow::Borrowed(color)),
            style: Cow::Borrowed(style),
        }
    }

    pub fn escape(&self) -> String {
        ansi_color_code(self.color.as_deref(), &self.style)
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = Some(Cow::Owned(color.into()))
    }

    pub fn set_style(&mut self, style: impl Into<String>) {
        self.style = Cow::Owned(style.into())
    }
}

impl Default for ColorStyle {
    fn default() -> Self {
        Self {
            color: None,
            style: Cow::Borrowed(""),
        }
    }
}
