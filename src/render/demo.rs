use std::io::Write;

use super::{Glyphs, Render};
use crate::{Section, TableParams, Widths};

pub struct Demo;

impl Demo {
    /// Draws a small table once for every glyph preset
    pub fn show_off(writer: &mut dyn Write) -> crate::Result<()> {
        Glyphs::PRESETS
            .iter()
            .enumerate()
            .try_for_each(|(n, (name, glyphs))| {
                if n > 0 {
                    writeln!(writer)?;
                }

                let mut params = TableParams::new();
                params.glyphs = *glyphs;
                params.widths = Widths::Auto;
                params
                    .section(Section::Top)
                    .row(Section::Header, ["preset", "glyphs"])
                    .row(Section::Data, [*name, "-fe"])
                    .row(Section::Data, ["", &*glyphs.to_string()])
                    .section(Section::Bottom);

                params.build().render(writer)
            })
    }
}
