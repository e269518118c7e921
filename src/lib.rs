mod args;
pub use args::{Args, BlockArgs, Command, LineArgs};

mod config;
pub use config::{env_tokens, Colors, Config, Layout, Styles, ENV_PREFIX};

mod error;
pub use error::{Error, ErrorKind, Result, Warning};

mod params;
pub use params::{Column, Opt, Section, TableParams, Widths};

mod print;
pub use print::{print_block, print_line, write_block, write_line, LineFormat};

mod render;
pub use render::{
    ansi_color_code, reset_color, ColorStyle, Demo, Glyphs, Render, SectionFormat, Table, Theme,
    RESET,
};

mod string;
pub use string::Align;
