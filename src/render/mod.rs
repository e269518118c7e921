use std::io::Write;

mod color;
pub use color::{ansi_color_code, reset_color, ColorStyle, RESET};

mod theme;
pub use theme::{SectionFormat, Theme};

mod style;
pub use style::Glyphs;

mod table;
pub use table::Table;

mod demo;
pub use demo::Demo;

pub trait Render {
    fn render(&self, writer: &mut dyn Write) -> crate::Result<()>;

    /// Renders into a `String`, mostly useful for tests
    fn render_to_string(&self) -> crate::Result<String> {
        let mut out = Vec::new();
        self.render(&mut out)?;
        String::from_utf8(out).map_err(|err| crate::Error::Inconsistent(err.to_string()))
    }
}
