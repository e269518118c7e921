use clitable::{
    write_block, write_line, Error, ErrorKind, LineFormat, Render, TableParams, Widths,
};
use pretty_assertions::assert_eq;

fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            chars.by_ref().find(|&c| c == 'm');
            continue;
        }
        out.push(ch);
    }
    out
}

fn line(cells: &[&str], widths: Widths) -> String {
    let mut out = Vec::new();
    write_line(&mut out, cells, widths, &LineFormat::default()).unwrap();
    String::from_utf8(out).unwrap()
}

fn block(rows: &[&[&str]], widths: Widths, format: &LineFormat) -> String {
    let mut out = Vec::new();
    write_block(&mut out, rows, widths, format).unwrap();
    String::from_utf8(out).unwrap()
}

fn table(tokens: &[&str]) -> String {
    TableParams::parse(tokens)
        .unwrap()
        .build()
        .render_to_string()
        .unwrap()
}

#[test]
fn line_pads_to_width() {
    let out = line(&["a", "b"], Widths::Fixed(3));
    let plain = strip_ansi(&out);
    assert_eq!(plain, "┃a  ┃b  ┃\n");
    assert!(!plain.contains("┃aaa"));
}

#[test]
fn line_has_one_segment_per_cell() {
    for cells in [&["x"][..], &["x", "y"], &["1", "2", "3", "4"]] {
        let out = line(cells, Widths::Fixed(5));
        assert!(out.ends_with('\n'));
        assert_eq!(out.lines().count(), 1);
        assert_eq!(strip_ansi(&out).matches('┃').count(), cells.len() + 1);
    }
}

#[test]
fn block_auto_size() {
    let out = block(
        &[&["H1", "H2"], &["x", "yy"]],
        Widths::Auto,
        &LineFormat::default(),
    );
    let plain = strip_ansi(&out);
    assert_eq!(plain, "┃H1  ┃H2  ┃\n┃x   ┃yy  ┃\n");
}

#[test]
fn block_auto_size_lines_share_a_length() {
    let out = block(
        &[
            &["Name", "Age", "City"],
            &["Jonathan", "25", "Berlin"],
            &["Jane", "101", "Rome"],
        ],
        Widths::Auto,
        &LineFormat::default(),
    );
    let lengths = strip_ansi(&out)
        .lines()
        .map(|line| line.chars().count())
        .collect::<Vec<_>>();
    assert_eq!(lengths.len(), 3);
    assert!(lengths.iter().all(|&len| len == lengths[0]));
    // (8 + 2) + (3 + 2) + (6 + 2) + 4 bars
    assert_eq!(lengths[0], 27);
}

#[test]
fn block_ragged_rows_dont_shift() {
    let out = block(
        &[&["A", "B", "C"], &["1"], &["x", "y", "z"]],
        Widths::Fixed(2),
        &LineFormat::default(),
    );
    assert_eq!(
        strip_ansi(&out),
        "┃A ┃B ┃C ┃\n┃1 ┃  ┃  ┃\n┃x ┃y ┃z ┃\n"
    );
}

#[test]
fn block_centered() {
    let format = LineFormat {
        centered: true,
        ..LineFormat::default()
    };
    let out = block(&[&["Header"], &["Data"]], Widths::Fixed(9), &format);
    assert_eq!(strip_ansi(&out), "┃ Header  ┃\n┃  Data   ┃\n");
}

#[test]
fn no_border_has_no_bars() {
    let out = table(&["-nb", "data", "Q"]);
    assert!(!out.contains('┃'));
    assert!(out.contains('Q'));
    assert!(out.ends_with('\n'));
}

#[test]
fn full_table_order() {
    let out = table(&[
        "-size", "4", "top", "-cc", "2", "header", "H1", "data", "D1", "bottom",
    ]);
    let plain = strip_ansi(&out);
    let lines = plain.lines().collect::<Vec<_>>();
    assert_eq!(
        lines,
        [
            "┏━━━━┳━━━━┓",
            "┃ H1 ┃    ┃",
            "┃D1  ┃    ┃",
            "┗━━━━┻━━━━┛",
        ]
    );
}

#[test]
fn auto_size_keeps_borders_aligned() {
    let out = table(&[
        "-size", "-1", "top", "header", "id", "name", "data", "1", "a much longer name",
        ":short", "bottom",
    ]);
    let plain = strip_ansi(&out);
    let lengths = plain
        .lines()
        .map(|line| line.chars().count())
        .collect::<Vec<_>>();
    assert_eq!(lengths.len(), 5);
    assert!(lengths.iter().all(|&len| len == lengths[0]), "{}", plain);
}

#[test]
fn custom_glyphs_and_colors() {
    let out = table(&[
        "-fe", "║═╔╗╚╝╦╩", "-ce", "31", "-cd", "32", "top", "data", "x", "bottom",
    ]);
    assert!(out.contains("\x1b[31m╔"));
    assert!(out.contains("\x1b[32mx"));
    assert!(out.contains('╝'));
    assert!(!out.contains('┃'));
}

#[test]
fn header_defaults() {
    let out = table(&["-size", "6", "header", "ab"]);
    assert!(out.contains("\x1b[0m\x1b[1;3;4;104m  ab  "));
    assert!(out.starts_with("\x1b[0m\x1b[93m┃"));
}

#[test]
fn parse_errors_print_nothing() {
    let err = TableParams::parse(["data", "a", "-size"]).unwrap_err();
    assert!(matches!(err, Error::MissingValue { .. }));
    assert_eq!(err.kind(), ErrorKind::Argument);

    let err = TableParams::parse([":a"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Sequence);
}

#[test]
fn rendering_twice_is_identical() {
    let table = TableParams::parse(["top", "header", "a", "b", "data", "c", ":d", "bottom"])
        .unwrap()
        .build();

    let mut first = Vec::new();
    let mut second = Vec::new();
    table.render(&mut first).unwrap();
    table.render(&mut second).unwrap();
    assert_eq!(first, second);
}
