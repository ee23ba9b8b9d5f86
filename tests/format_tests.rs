use sini::{from_str, to_string, to_string_with_options, QuoteStyle, Sini, WriteOptions};

fn normalize(text: &str) -> String {
    to_string(&from_str(text).unwrap())
}

#[test]
fn test_default_section_has_no_header() {
    let text = normalize("a = 1\n");
    assert_eq!(text, "a=1\n\n");
    assert!(!text.contains('['));
}

#[test]
fn test_blank_line_after_every_section() {
    assert_eq!(
        normalize("a=1\n[A]\nb=2\n[B]\n[C]\nc=3"),
        "a=1\n\n[A]\nb=2\n\n[B]\n\n[C]\nc=3\n\n"
    );
}

#[test]
fn test_no_spaces_around_separator() {
    assert_eq!(normalize("  key   =   value  \n"), "key=value\n\n");
}

#[test]
fn test_interior_whitespace_stays_bare() {
    assert_eq!(normalize("msg = hello   world\n"), "msg=hello   world\n\n");
}

#[test]
fn test_quoted_without_edge_whitespace_is_unquoted() {
    assert_eq!(normalize("g  =\"as123df\"\n"), "g=as123df\n\n");
    assert_eq!(normalize("g = 'as123df'\n"), "g=as123df\n\n");
}

#[test]
fn test_edge_whitespace_is_double_quoted() {
    assert_eq!(normalize("e='  asdf  '\n"), "e=\"  asdf  \"\n\n");
    assert_eq!(normalize("e=' x'\n"), "e=\" x\"\n\n");
    assert_eq!(normalize("e='\tx'\n"), "e=\"\tx\"\n\n");
}

#[test]
fn test_quote_leading_values_are_quoted() {
    let once = normalize("k = \"'x'\"\n");
    assert_eq!(once, "k=\"'x'\"\n\n");
    assert_eq!(normalize(&once), once);

    let once = normalize("k = '\"x'\n");
    assert_eq!(once, "k=\"\"x\"\n\n");
    assert_eq!(from_str(&once).unwrap()[""].get_str("k"), Some("\"x"));
    assert_eq!(normalize(&once), once);

    let mut sini = Sini::new();
    sini.add_section("A").set("a", "'x'").set("b", "'").set("c", "it's");
    let text = to_string(&sini);
    assert_eq!(text, "[A]\na=\"'x'\"\nb=\"'\"\nc=it's\n\n");
    assert_eq!(from_str(&text).unwrap(), sini);
}

#[test]
fn test_empty_and_blank_values() {
    assert_eq!(normalize("a =\nb = ''\nc = '   '\n"), "a=\nb=\nc=\"   \"\n\n");
}

#[test]
fn test_first_seen_order_not_alphabetical() {
    assert_eq!(
        normalize("[b]\nz=1\ny=2\n[a]\nx=3\n"),
        "[b]\nz=1\ny=2\n\n[a]\nx=3\n\n"
    );
}

#[test]
fn test_default_section_moves_first() {
    let mut sini = Sini::new();
    sini.add_section("A").set("x", 1);
    sini.add_section("").set("y", 2);

    let text = to_string(&sini);
    assert_eq!(text, "y=2\n\n[A]\nx=1\n\n");
    assert_eq!(normalize(&text), text);
}

#[test]
fn test_canonical_text_is_fixed_point() {
    let canonical = "c=42\na=b\n\n[section1]\ne=\"  asdf  \"\ng=as123df\n\n";
    assert_eq!(normalize(canonical), canonical);

    let messy = "c=\t42\n a = b \n\n[section1]\n  e='  asdf  '\ng  =\"as123df\"\n\n";
    let once = normalize(messy);
    assert_eq!(once, canonical);
    assert_eq!(normalize(&once), once);
}

#[test]
fn test_section_names_are_verbatim() {
    assert_eq!(normalize("[ spaced name ]\nk=v\n"), "[ spaced name ]\nk=v\n\n");
}

#[test]
fn test_single_quote_style_reparses() {
    let sini = from_str("a = \"  x  \"\n").unwrap();
    let text = to_string_with_options(&sini, WriteOptions::new().with_quote(QuoteStyle::Single));
    assert_eq!(text, "a='  x  '\n\n");
    assert_eq!(from_str(&text).unwrap(), sini);
}

#[test]
fn test_structural_errors() {
    assert!(from_str("[unterminated\n").unwrap_err().is_parse());
    assert!(from_str("no separator\n").unwrap_err().is_parse());
    assert!(from_str("a = 'open\n").unwrap_err().is_parse());
    assert!(from_str("a = 'mismatched\"\n").unwrap_err().is_parse());
}

#[test]
fn test_error_reports_line() {
    let err = from_str("a=1\n\n[A]\nb=2\noops\n").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("line 5"), "{msg}");
    assert!(msg.contains("missing key/value separator"), "{msg}");
    assert!(msg.contains("oops"), "{msg}");
}
