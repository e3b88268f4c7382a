use super::{RouteTemplate, Segment, TemplateErrorKind};

fn lit(s: &str) -> Segment {
    Segment::Literal(s.to_string())
}

fn key(s: &str) -> Segment {
    Segment::Placeholder(s.to_string())
}

#[test]
fn test_plain_literal() {
    let t = RouteTemplate::parse("about/team").unwrap();
    assert_eq!(t.segments(), [lit("about/team")]);
    assert!(t.placeholders().is_empty());
}

#[test]
fn test_outer_slashes_are_dropped() {
    let t = RouteTemplate::parse("/blog/<id>(/edit)/").unwrap();
    assert_eq!(
        t.segments(),
        [lit("blog/"), key("id"), Segment::Optional(vec![lit("/edit")])]
    );
    assert_eq!(t.as_str(), "/blog/<id>(/edit)/");
    assert!(RouteTemplate::parse("/").unwrap().segments().is_empty());
}

#[test]
fn test_nested_optional_groups() {
    let t = RouteTemplate::parse("(<controller>(/<action>(/<id>)))").unwrap();
    assert_eq!(
        t.segments(),
        [Segment::Optional(vec![
            key("controller"),
            Segment::Optional(vec![
                lit("/"),
                key("action"),
                Segment::Optional(vec![lit("/"), key("id")]),
            ]),
        ])]
    );
    assert_eq!(t.placeholders(), ["controller", "action", "id"]);
    assert!(t.has_placeholder("action"));
    assert!(!t.has_placeholder("format"));
}

#[test]
fn test_literal_and_placeholder_mix() {
    let t = RouteTemplate::parse("blog/<year>-<month>(.<format>)").unwrap();
    assert_eq!(
        t.segments(),
        [
            lit("blog/"),
            key("year"),
            lit("-"),
            key("month"),
            Segment::Optional(vec![lit("."), key("format")]),
        ]
    );
}

#[test]
fn test_empty_template() {
    let t = RouteTemplate::parse("").unwrap();
    assert!(t.segments().is_empty());
}

#[test]
fn test_unclosed_group_reports_opening_offset() {
    let err = RouteTemplate::parse("a(/<b>(/<c>)").unwrap_err();
    assert_eq!(err.kind, TemplateErrorKind::UnclosedGroup);
    assert_eq!(err.position, 1);
}

#[test]
fn test_stray_close_paren() {
    let err = RouteTemplate::parse("a/<b>)").unwrap_err();
    assert_eq!(err.kind, TemplateErrorKind::UnexpectedGroupClose);
    assert_eq!(err.position, 5);
}

#[test]
fn test_placeholder_errors() {
    assert_eq!(
        RouteTemplate::parse("a/<id").unwrap_err().kind,
        TemplateErrorKind::UnterminatedPlaceholder
    );
    assert_eq!(
        RouteTemplate::parse("a/<>").unwrap_err().kind,
        TemplateErrorKind::EmptyPlaceholder
    );
    assert_eq!(
        RouteTemplate::parse("a/<i(d>)").unwrap_err().kind,
        TemplateErrorKind::InvalidPlaceholderChar('(')
    );
    assert_eq!(
        RouteTemplate::parse("a>b").unwrap_err().kind,
        TemplateErrorKind::UnexpectedPlaceholderClose
    );
    assert_eq!(
        RouteTemplate::parse("<id>/<id>").unwrap_err().kind,
        TemplateErrorKind::DuplicatePlaceholder("id".to_string())
    );
}

#[test]
fn test_display_round_trips_source() {
    let src = "media(/<file>)";
    let t: RouteTemplate = src.parse().unwrap();
    assert_eq!(t.to_string(), src);
    assert_eq!(t.as_str(), src);
}

#[test]
fn test_error_display_mentions_template() {
    let err = RouteTemplate::parse("(oops").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("unclosed optional group"));
    assert!(msg.contains("(oops"));
}
