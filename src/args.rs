use std::ffi::OsString;

use anyhow::Context as _;

use crate::{LineFormat, Widths};

#[derive(Debug)]
pub enum Command {
    Line(LineArgs),
    Block(BlockArgs),
    /// A raw `top|header|data|bottom` token stream
    Table(Vec<String>),
    Demo,
}

#[derive(Debug)]
pub struct LineArgs {
    pub cells: Vec<String>,
    pub widths: Widths,
    pub format: LineFormat,
}

#[derive(Debug)]
pub struct BlockArgs {
    pub rows: Vec<Vec<String>>,
    pub widths: Widths,
    pub format: LineFormat,
}

#[derive(Debug)]
pub struct Args {
    pub command: Command,
}

impl Args {
    pub fn parse() -> anyhow::Result<Self> {
        Self::parse_from(std::env::args_os().skip(1).collect())
    }

    pub fn parse_from(args: Vec<OsString>) -> anyhow::Result<Self> {
        let mut args = pico_args::Arguments::from_vec(args);

        if args.contains(["-h", "--help"]) {
            Self::print_long_help();
            std::process::exit(0);
        }

        if args.contains(["-v", "--version"]) {
            Self::print_version();
            std::process::exit(0);
        }

        if args.contains("--print-default-config") {
            println!("{}", crate::Config::default_formatted_toml());
            std::process::exit(0)
        }

        if args.contains("--print-config-path") {
            println!(
                "{}",
                crate::Config::get_config_path()
                    .with_context(|| "your system does not have a configuration directory")?
                    .to_string_lossy()
            );
            std::process::exit(0)
        }

        if args.contains("--demo") {
            return Ok(Self {
                command: Command::Demo,
            });
        }

        let subcommand = args.subcommand()?;
        let mut rest = args
            .finish()
            .into_iter()
            .map(|s| s.to_string_lossy().to_string())
            .collect::<Vec<_>>();

        let command = match subcommand.as_deref() {
            Some("line") => Command::Line(Self::parse_line(rest)?),
            Some("block") => Command::Block(Self::parse_block(rest)?),
            _ => {
                if let Some(head) = subcommand {
                    rest.insert(0, head)
                }
                Command::Table(rest)
            }
        };

        Ok(Self { command })
    }

    fn parse_line(rest: Vec<String>) -> anyhow::Result<LineArgs> {
        let (format, widths, cells) = Self::parse_flags(rest, Widths::Fixed(25), false)?;
        anyhow::ensure!(!cells.is_empty(), "line needs at least one column value");
        Ok(LineArgs {
            cells,
            widths,
            format,
        })
    }

    fn parse_block(rest: Vec<String>) -> anyhow::Result<BlockArgs> {
        let (format, widths, rows) = Self::parse_flags(rest, Widths::Auto, true)?;
        anyhow::ensure!(!rows.is_empty(), "block needs at least one row after --rows");
        let rows = rows
            .iter()
            .map(|row| row.split_whitespace().map(ToString::to_string).collect())
            .collect();
        Ok(BlockArgs {
            rows,
            widths,
            format,
        })
    }

    // the flags here are single-dash words like `-c1`, and `-sz` takes `-1`,
    // neither of which pico_args will accept
    fn parse_flags(
        rest: Vec<String>,
        mut widths: Widths,
        block: bool,
    ) -> anyhow::Result<(LineFormat, Widths, Vec<String>)> {
        let mut format = LineFormat::default();
        let mut positional = Vec::new();
        let mut saw_rows = false;

        let mut iter = rest.into_iter();
        while let Some(arg) = iter.next() {
            let mut value = || {
                iter.next()
                    .with_context(|| format!("{} requires a value", arg))
            };

            match arg.as_str() {
                "-c1" | "--color1" => format.edge_color = value()?,
                "-c2" | "--color2" => format.data_color = value()?,
                "-fmt" | "--format" => format.style = value()?,
                "-fmt-header" | "--format-header" if block => format.header_style = value()?,
                "-sz" | "--colsize" => {
                    let size = value()?;
                    widths = size
                        .parse()
                        .ok()
                        .and_then(Widths::from_size)
                        .with_context(|| format!("invalid column size: {}", size))?
                }
                "-centered" => format.centered = true,
                "--rows" if block => saw_rows = true,
                flag if Self::is_flag(flag) => anyhow::bail!("unknown flag: {}", flag),
                _ if block && !saw_rows => anyhow::bail!("rows must follow --rows"),
                _ => positional.push(arg),
            }
        }

        if block {
            anyhow::ensure!(saw_rows, "block requires --rows");
        }

        Ok((format, widths, positional))
    }

    fn is_flag(arg: &str) -> bool {
        arg.strip_prefix('-')
            .and_then(|s| s.chars().next())
            .filter(|c| !c.is_ascii_digit())
            .is_some()
    }

    pub fn print_usage() {
        eprintln!("{}", include_str!("../assets/short_help.txt"));
    }

    pub fn print_long_help() {
        Self::print_version();
        println!();
        println!("{}", include_str!("../assets/short_help.txt"));
        println!("{}", include_str!("../assets/long_help.txt"));
    }

    fn print_version() {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    }
}
