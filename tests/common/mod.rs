#![allow(dead_code)]

pub mod temp_files {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Creates a routes file that is removed when the handle is dropped.
    /// The extension selects the parser.
    pub fn create_temp_routes(content: &str, ext: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("uriroute_test_")
            .suffix(&format!(".{}", ext))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    pub fn create_temp_yaml(content: &str) -> NamedTempFile {
        create_temp_routes(content, "yaml")
    }

    pub fn create_temp_toml(content: &str) -> NamedTempFile {
        create_temp_routes(content, "toml")
    }

    pub fn create_temp_json(content: &str) -> NamedTempFile {
        create_temp_routes(content, "json")
    }
}

pub mod fixtures {
    use uriroute::{Defaults, Params, RouteDefinition, RouteTable};

    /// The routes every application-style test starts from.
    pub const ROUTES_YAML: &str = r#"
base_path: /app
routes:
  - name: media
    uri: "media(/<file>)"
    regex:
      file: ".+"
    defaults:
      controller: media
      action: serve
      file: ""
  - name: youtube
    uri: "watch(/<v>)"
    defaults:
      host: www.youtube.com
  - name: api
    uri: "api/<version>/<resource>(.<format>)"
    regex:
      version: "v[0-9]+"
      format: "json|xml"
    defaults:
      format: json
      method: [GET, HEAD]
  - name: default
    uri: "(<controller>(/<action>(/<id>)))"
    defaults:
      controller: Welcome
      action: index
"#;

    pub fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    pub fn default_table() -> RouteTable {
        let mut table = RouteTable::new();
        table.register(
            "default",
            RouteDefinition::new("(<controller>(/<action>(/<id>)))")
                .unwrap()
                .with_defaults(Defaults::new().with("controller", "Welcome").action("index")),
        );
        table
    }
}
