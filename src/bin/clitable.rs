use std::io::Write;

use clitable::*;
use yansi::Paint;

fn try_enable_colors() {
    if std::env::var("NO_COLOR").is_ok() || (cfg!(windows) && !Paint::enable_windows_ascii()) {
        Paint::disable();
    } else {
        Paint::enable();
    }
}

fn report_warnings(warnings: &[Warning]) {
    for warning in warnings {
        eprintln!("{} {}", Paint::yellow("warning:").bold(), warning);
    }
}

fn render_table(out: &mut dyn Write, tokens: Vec<String>) -> anyhow::Result<()> {
    let config = Config::load()?;

    // later tokens win: config file, then environment, then arguments
    let mut all = config.to_tokens();
    all.extend(env_tokens(std::env::vars()));
    all.extend(tokens);

    let params = TableParams::parse(all)?;
    report_warnings(params.warnings());

    if params.help {
        Args::print_long_help();
        return Ok(());
    }

    if params.order().is_empty() {
        Args::print_usage();
        std::process::exit(1)
    }

    log::trace!("rendering {:?}", params.order());
    params.build().render(out).map_err(Into::into)
}

fn run() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_some() {
        alto_logger::init_alt_term_logger()?;
    }

    let args = Args::parse()?;

    let out = std::io::stdout();
    let mut out = out.lock();

    match args.command {
        Command::Line(LineArgs {
            cells,
            widths,
            format,
        }) => write_line(&mut out, &cells, widths, &format)?,
        Command::Block(BlockArgs {
            rows,
            widths,
            format,
        }) => write_block(&mut out, &rows, widths, &format)?,
        Command::Table(tokens) => render_table(&mut out, tokens)?,
        Command::Demo => Demo::show_off(&mut out)?,
    }

    Ok(())
}

fn main() {
    try_enable_colors();

    if let Err(err) = run() {
        eprintln!(
            "{} {:#} (try running: {} --help)",
            Paint::red("error:").bold(),
            err,
            env!("CARGO_BIN_NAME")
        );
        std::process::exit(1)
    }
}
