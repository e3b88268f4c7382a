use super::*;
use crate::route::{HostPolicy, MethodConstraint, Params};
use http::Method;
use std::path::Path;

const YAML: &str = r#"
base_path: /app
routes:
  - name: media
    uri: "media(/<file>)"
    regex:
      file: ".+"
    defaults:
      controller: Media
      action: serve
      method: [GET, HEAD]
  - name: archive
    uri: "archive/<year>(/<page>)"
    constraints:
      year: "[0-9]{4}"
    defaults:
      controller: Archive
      page: 1
      cached: true
  - name: youtube
    uri: "watch(/<v>)"
    defaults:
      host: www.youtube.com
  - name: default
    uri: "(<controller>(/<action>(/<id>)))"
    defaults:
      controller: Welcome
      action: index
      host: false
  - name: default
    uri: "ignored"
"#;

#[test]
fn test_format_from_path() {
    assert_eq!(RoutesFormat::from_path(Path::new("r.yaml")), RoutesFormat::Yaml);
    assert_eq!(RoutesFormat::from_path(Path::new("r.yml")), RoutesFormat::Yaml);
    assert_eq!(RoutesFormat::from_path(Path::new("r.toml")), RoutesFormat::Toml);
    assert_eq!(RoutesFormat::from_path(Path::new("r.json")), RoutesFormat::Json);
    assert_eq!(RoutesFormat::from_path(Path::new("routes")), RoutesFormat::Json);
}

#[test]
fn test_parse_yaml() {
    let config = parse_routes(YAML, RoutesFormat::Yaml).unwrap();
    assert_eq!(config.base_path, "/app");
    assert_eq!(config.routes.len(), 5);
    assert_eq!(config.routes[1].regex["year"], "[0-9]{4}");
    assert_eq!(config.routes[1].defaults["page"], DefaultValue::Int(1));
    assert_eq!(config.routes[3].defaults["host"], DefaultValue::Bool(false));
}

#[test]
fn test_build_table_keeps_order_and_first_duplicate() {
    let table = parse_routes(YAML, RoutesFormat::Yaml)
        .unwrap()
        .build_table(HostPolicy::default())
        .unwrap();
    assert_eq!(table.names(), vec!["media", "archive", "youtube", "default"]);
    assert_eq!(
        table.get("default").unwrap().template().as_str(),
        "(<controller>(/<action>(/<id>)))"
    );
    assert_eq!(table.base_path(), "/app");
}

#[test]
fn test_defaults_conversion() {
    let table = parse_routes(YAML, RoutesFormat::Yaml)
        .unwrap()
        .build_table(HostPolicy::default())
        .unwrap();

    let media = table.get("media").unwrap();
    assert_eq!(
        media.method_constraint(),
        &MethodConstraint::Set(vec![Method::GET, Method::HEAD])
    );
    assert_eq!(media.defaults().action.as_deref(), Some("serve"));

    let archive = table.get("archive").unwrap();
    assert_eq!(archive.defaults().get("page"), Some("1"));
    assert_eq!(archive.defaults().get("cached"), Some("true"));

    assert!(table.get("youtube").unwrap().is_external());
    assert!(!table.get("default").unwrap().is_external());
}

#[test]
fn test_loaded_table_dispatches() {
    let table = parse_routes(YAML, RoutesFormat::Yaml)
        .unwrap()
        .build_table(HostPolicy::default())
        .unwrap();

    let m = table.dispatch("/media/css/site.css", Some(&Method::GET)).unwrap();
    assert_eq!(&*m.name, "media");
    assert_eq!(m.get_param("file"), Some("css/site.css"));

    let m = table.dispatch("/media/css/site.css", Some(&Method::POST));
    assert!(m.is_none());

    let m = table.dispatch("archive/2019", None).unwrap();
    assert_eq!(&*m.name, "archive");
    assert_eq!(m.get_param("page"), Some("1"));

    let m = table.dispatch("archive/19", None).unwrap();
    assert_eq!(&*m.name, "default");
    assert_eq!(m.get_param("controller"), Some("Archive"));
    assert_eq!(m.get_param("action"), Some("19"));

    let mut p = Params::new();
    p.insert("v".into(), "dQw4w9WgXcQ".into());
    assert_eq!(
        table.url("youtube", &p).unwrap(),
        "http://www.youtube.com/watch/dQw4w9WgXcQ"
    );
}

#[test]
fn test_parse_toml_and_json() {
    let toml = r#"
base_path = ""

[[routes]]
name = "api"
uri = "api/<version>(/<resource>)"
regex = { version = "v[0-9]+" }
defaults = { method = "GET|POST", resource = "index" }
"#;
    let config = parse_routes(toml, RoutesFormat::Toml).unwrap();
    let route = config.routes[0].to_definition().unwrap();
    assert_eq!(
        route.method_constraint(),
        &MethodConstraint::Set(vec![Method::GET, Method::POST])
    );
    assert!(route.matches("api/v2", Some(&Method::POST)).is_some());
    assert!(route.matches("api/2", Some(&Method::POST)).is_none());

    let json = r#"{"routes":[{"name":"home","uri":"","defaults":{"controller":"Home"}}]}"#;
    let config = parse_routes(json, RoutesFormat::Json).unwrap();
    assert_eq!(config.routes[0].name, "home");
    assert_eq!(config.base_path, "");
}

#[test]
fn test_invalid_entries_are_rejected() {
    let bad_template = r#"{"routes":[{"name":"x","uri":"(<a>"}]}"#;
    let err = parse_routes(bad_template, RoutesFormat::Json)
        .unwrap()
        .build_table(HostPolicy::default())
        .unwrap_err();
    assert!(format!("{err:#}").contains("route 'x' has an invalid template"));

    let bad_method = r#"{"routes":[{"name":"x","uri":"a","defaults":{"method":"G(ET"}}]}"#;
    assert!(parse_routes(bad_method, RoutesFormat::Json)
        .unwrap()
        .build_table(HostPolicy::default())
        .is_err());

    let bad_host = r#"{"routes":[{"name":"x","uri":"a","defaults":{"host":true}}]}"#;
    assert!(parse_routes(bad_host, RoutesFormat::Json)
        .unwrap()
        .build_table(HostPolicy::default())
        .is_err());

    let bad_list = r#"{"routes":[{"name":"x","uri":"a","defaults":{"tags":["a","b"]}}]}"#;
    assert!(parse_routes(bad_list, RoutesFormat::Json)
        .unwrap()
        .build_table(HostPolicy::default())
        .is_err());
}
