use super::ColorStyle;
use crate::string::Align;

/// Colors and alignment for the cells of a content section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionFormat {
    pub paint: ColorStyle,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub edge: ColorStyle,
    pub header: SectionFormat,
    pub data: SectionFormat,
}

impl Theme {
    pub const STANDARD: Self = Self {
        edge: ColorStyle::new("93"),
        header: SectionFormat {
            paint: ColorStyle::styled("104", "1;3;4;"),
            align: Align::Center,
        },
        data: SectionFormat {
            paint: ColorStyle::new("96"),
            align: Align::Left,
        },
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_independent_copies() {
        let mut a = Theme::default();
        a.header.paint.set_color("31");
        a.data.align = Align::Right;

        let b = Theme::default();
        assert_eq!(b, Theme::STANDARD);
        assert_eq!(b.header.paint.escape(), "\x1b[0m\x1b[1;3;4;104m");
        assert_eq!(b.data.align, Align::Left);
    }
}
