use http::Method;
use std::sync::Arc;
use uriroute::{
    Defaults, FilterOutcome, MethodConstraint, Params, RouteDefinition, RouteError, RouteTable,
};

mod common;
use common::fixtures::{default_table, params};

fn assert_route_match(table: &RouteTable, method: Option<Method>, path: &str, expected: &str) {
    match table.dispatch(path, method.as_ref()) {
        Some(matched) => assert_eq!(
            &*matched.name, expected,
            "{:?} {} matched the wrong route",
            method, path
        ),
        None => panic!("{:?} {} did not match (expected {})", method, path, expected),
    }
}

fn application_table() -> RouteTable {
    let mut table = RouteTable::new();
    table.register(
        "login",
        RouteDefinition::new("login")
            .unwrap()
            .with_method(MethodConstraint::One(Method::POST))
            .with_defaults(Defaults::new().with("controller", "session").action("create")),
    );
    table.register(
        "article",
        RouteDefinition::with_constraints(
            "articles/<year>(/<slug>)",
            params(&[("year", "[0-9]{4}")]),
        )
        .unwrap()
        .with_defaults(Defaults::new().with("controller", "articles").action("show")),
    );
    table.register(
        "default",
        RouteDefinition::new("(<controller>(/<action>(/<id>)))")
            .unwrap()
            .with_defaults(Defaults::new().with("controller", "Welcome").action("index")),
    );
    table
}

#[test]
fn test_application_routes_in_priority_order() {
    let table = application_table();
    assert_route_match(&table, Some(Method::POST), "/login", "login");
    assert_route_match(&table, Some(Method::GET), "/login", "default");
    assert_route_match(&table, None, "/articles/2024/hello-world", "article");
    assert_route_match(&table, None, "/articles/2024", "article");
    assert_route_match(&table, None, "/articles/latest", "default");
    assert_route_match(&table, None, "/", "default");
}

#[test]
fn test_match_reports_route_and_params() {
    let table = application_table();

    let matched = table.dispatch("/articles/2024/hello-world/", None).unwrap();
    assert_eq!(matched.get_param("year"), Some("2024"));
    assert_eq!(matched.get_param("slug"), Some("hello-world"));
    assert_eq!(matched.get_param("controller"), Some("Articles"));
    assert_eq!(matched.get_param("action"), Some("show"));
    assert!(Arc::ptr_eq(&matched.route, table.get("article").unwrap()));

    let matched = table.dispatch("/user profile/edit/12", None).unwrap();
    assert_eq!(&*matched.name, "default");
    assert_eq!(matched.get_param("controller"), Some("User_Profile"));
    assert_eq!(matched.get_param("id"), Some("12"));
}

#[test]
fn test_no_route_for_too_many_segments() {
    let table = application_table();
    assert!(table.dispatch("/a/b/c/d", None).is_none());
    assert!(table.dispatch("/articles/2024/x/y", None).is_none());
}

#[test]
fn test_match_then_generate_round_trip() {
    let mut table = application_table();
    let names: Vec<String> = table.names().into_iter().map(str::to_string).collect();
    for name in &names {
        table
            .update(name, |route| route.with_canonicalizer(None))
            .unwrap();
    }

    for path in ["blog/show/7", "articles/2024/hello-world", "articles/2024", "blog"] {
        let matched = table.dispatch(path, None).unwrap();
        let generated = table.uri(&matched.name, &matched.params).unwrap();
        let rematched = table.dispatch(&generated, None).unwrap();
        assert_eq!(generated, path);
        assert_eq!(rematched.name, matched.name, "{} -> {}", path, generated);
        assert_eq!(rematched.params, matched.params, "{} -> {}", path, generated);
    }
}

#[test]
fn test_canonicalised_controller_does_not_round_trip_by_default() {
    let table = application_table();
    let matched = table.dispatch("blog", None).unwrap();
    assert_eq!(matched.get_param("controller"), Some("Blog"));
    assert_eq!(table.uri(&matched.name, &matched.params).unwrap(), "Blog");
}

#[test]
fn test_generate_collapses_default_groups() {
    let table = default_table();
    assert_eq!(table.uri("default", &Params::new()).unwrap(), "");
    assert_eq!(
        table.uri("default", &params(&[("controller", "blog")])).unwrap(),
        "blog"
    );
    assert_eq!(
        table
            .uri("default", &params(&[("controller", "blog"), ("action", "index")]))
            .unwrap(),
        "blog"
    );
    assert_eq!(
        table
            .uri("default", &params(&[("controller", "blog"), ("id", "7")]))
            .unwrap(),
        "blog/index/7"
    );
}

#[test]
fn test_generate_errors() {
    let table = application_table();
    assert_eq!(
        table.uri("missing", &Params::new()),
        Err(RouteError::UnknownRoute {
            name: "missing".to_string()
        })
    );
    let err = table.uri("article", &Params::new()).unwrap_err();
    assert_eq!(
        err,
        RouteError::MissingParameter {
            param: "year".to_string()
        }
    );
    assert_eq!(err.to_string(), "required route parameter not passed: year");
}

#[test]
fn test_filters_on_registered_route() {
    let mut table = application_table();
    table
        .set_filters(
            "article",
            vec![Arc::new(|_: &RouteDefinition, params: &Params, _: &str| {
                if params.get("year").map(String::as_str) < Some("2000") {
                    FilterOutcome::Veto
                } else {
                    let mut params = params.clone();
                    params.insert("archive".to_string(), "false".to_string());
                    FilterOutcome::Rewrite(params)
                }
            })],
        )
        .unwrap();

    let matched = table.dispatch("articles/2024", None).unwrap();
    assert_eq!(&*matched.name, "article");
    assert_eq!(matched.get_param("archive"), Some("false"));

    // vetoed, so the catch-all takes it
    let matched = table.dispatch("articles/1999", None).unwrap();
    assert_eq!(&*matched.name, "default");
    assert_eq!(matched.get_param("action"), Some("1999"));
}

#[test]
fn test_name_of_registered_route() {
    let table = application_table();
    let route = table.get("login").unwrap();
    assert_eq!(table.name_of(route), Some("login"));

    let stranger = RouteDefinition::new("login").unwrap();
    assert_eq!(table.name_of(&stranger), None);
}
