use std::path::PathBuf;

use anyhow::Context as _;

use crate::{Align, Opt};

pub const ENV_PREFIX: &str = "CLITABLE_";

/// Defaults read from `config.toml`. Every key is optional, and set keys turn
/// into option tokens placed ahead of the environment and the real arguments.
#[derive(Default, Debug, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub colors: Colors,
    pub styles: Styles,
    pub layout: Layout,
}

#[derive(Default, Debug, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Colors {
    pub edge: Option<String>,
    pub header: Option<String>,
    pub data: Option<String>,
}

#[derive(Default, Debug, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Styles {
    pub header: Option<String>,
    pub data: Option<String>,
}

#[derive(Default, Debug, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    pub glyphs: Option<String>,
    pub size: Option<i64>,
    pub column_count: Option<usize>,
    pub header_align: Option<Align>,
    pub data_align: Option<Align>,
    pub no_border: Option<bool>,
}

impl Config {
    const APPLICATION: &'static str = "clitable";

    const DEFAULT_CONFIG: &'static str = r##"
# every key is optional. environment variables (CLITABLE_<option>) and
# command line options take precedence over these

[colors]
# any SGR color code, e.g. 31 for red or 104 for a bright blue background
edge         = "93"
header       = "104"
data         = "96"

[styles]
# SGR codes placed before the color, each ending with a ';'
header       = "1;3;4;"
data         = ""

[layout]
# vertical, horizontal, top-left, top-right, bottom-left, bottom-right,
# top junction, bottom junction
# some others: "│─┌┐└┘┬┴", "║═╔╗╚╝╦╩", "│─╭╮╰╯┬┴", "┆┄┌┐└┘┬┴", "┇┉┏┓┗┛┳┻"
glyphs       = "┃━┏┓┗┛┳┻"
# -1 sizes each column to its longest cell
size         = 19
header_align = "center"
data_align   = "left"
no_border    = false
"##;

    pub fn get_config_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|f| f.join("config.toml"))
    }

    pub fn get_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|f| f.join(Self::APPLICATION))
    }

    pub const fn default_formatted_toml() -> &'static str {
        Self::DEFAULT_CONFIG
    }

    /// Loads the config file, if there is one
    pub fn load() -> anyhow::Result<Self> {
        let path = match Self::get_config_path() {
            Some(path) if path.is_file() => path,
            _ => return Ok(Self::default()),
        };

        let data = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        Self::from_toml(&data).with_context(|| format!("invalid toml in {}", path.display()))
    }

    pub fn from_toml(data: &str) -> anyhow::Result<Self> {
        toml::from_str(data).map_err(Into::into)
    }

    pub fn to_tokens(&self) -> Vec<String> {
        let Self {
            colors,
            styles,
            layout,
        } = self;

        let mut tokens = Vec::new();
        let mut push = |opt: Opt, value: Option<String>| {
            if let Some(value) = value {
                tokens.push(opt.flag().to_string());
                if opt.takes_value() {
                    tokens.push(value);
                }
            }
        };

        push(Opt::EdgeColor, colors.edge.clone());
        push(Opt::HeaderColor, colors.header.clone());
        push(Opt::DataColor, colors.data.clone());
        push(Opt::HeaderStyle, styles.header.clone());
        push(Opt::DataStyle, styles.data.clone());
        push(Opt::EdgeGlyphs, layout.glyphs.clone());
        push(Opt::Size, layout.size.map(|n| n.to_string()));
        push(Opt::ColumnCount, layout.column_count.map(|n| n.to_string()));
        if let Some(align) = layout.header_align {
            push(Opt::HeaderAlign(align), Some(String::new()));
        }
        if let Some(align) = layout.data_align {
            push(Opt::DataAlign(align), Some(String::new()));
        }
        if layout.no_border == Some(true) {
            push(Opt::NoBorder, Some(String::new()));
        }

        tokens
    }
}

/// Turns `CLITABLE_<name>=value` pairs into `-<name> value` tokens, sorted by
/// name. Anything without the prefix is skipped.
///
/// Switches (like `nb`) don't take a value, and are left out when set to
/// `0`, `false` or nothing.
pub fn env_tokens<I, K, V>(vars: I) -> Vec<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut vars = vars
        .into_iter()
        .filter_map(|(key, value)| {
            let name = key.as_ref().strip_prefix(ENV_PREFIX)?.to_lowercase();
            Some((name, value.into()))
        })
        .collect::<Vec<_>>();
    vars.sort_by(|(left, _), (right, _)| left.cmp(right));

    let mut tokens = Vec::with_capacity(vars.len() * 2);
    for (name, value) in vars {
        let flag = format!("-{}", name);
        match Opt::from_flag(&flag) {
            Some(Opt::Help) => continue,
            Some(opt) if !opt.takes_value() => {
                if matches!(value.trim(), "" | "0" | "false") {
                    continue;
                }
                tokens.push(flag)
            }
            _ => {
                tokens.push(flag);
                tokens.push(value)
            }
        }
    }
    tokens
}
