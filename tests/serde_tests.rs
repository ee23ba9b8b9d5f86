use serde_json::json;
use sini::{from_str, Section, Sini};

#[test]
fn test_document_to_json() {
    let sini = from_str("b = 2\na = 1\n[server]\nhost = example.com\n").unwrap();

    let value = serde_json::to_value(&sini).unwrap();
    assert_eq!(
        value,
        json!({
            "": { "b": "2", "a": "1" },
            "server": { "host": "example.com" }
        })
    );
}

#[test]
fn test_json_preserves_order() {
    let sini = from_str("[zeta]\nz = 1\na = 2\n[alpha]\n").unwrap();

    let json = serde_json::to_string(&sini).unwrap();
    assert_eq!(json, r#"{"zeta":{"z":"1","a":"2"},"alpha":{}}"#);
}

#[test]
fn test_document_from_json() {
    let json = r#"{"":{"foo":"  horse  "},"A":{"c":"4.5","b":"x"}}"#;
    let sini: Sini = serde_json::from_str(json).unwrap();

    assert_eq!(sini["A"].get::<f64>("c").unwrap(), 4.5);
    assert_eq!(sini.to_string(), "foo=\"  horse  \"\n\n[A]\nc=4.5\nb=x\n\n");
}

#[test]
fn test_section_from_json_rejects_non_strings() {
    let result: Result<Section, _> = serde_json::from_str(r#"{"port": 8080}"#);
    assert!(result.is_err());

    let result: Result<Sini, _> = serde_json::from_str(r#"["not", "a", "map"]"#);
    assert!(result.is_err());
}

#[test]
fn test_json_roundtrip() {
    let sini = from_str("x = 1\n[A]\ny = ' two '\n[B]\n").unwrap();

    let json = serde_json::to_string(&sini).unwrap();
    let sini_back: Sini = serde_json::from_str(&json).unwrap();

    assert_eq!(sini, sini_back);
    assert_eq!(sini.to_string(), sini_back.to_string());
}
