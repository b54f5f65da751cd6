//! Verify the films client against JSON test vectors in `test-vectors/`.
//!
//! Each case gives a simulated response, and either the movies it should
//! parse to or the error kind it should fail with, plus the view the
//! resulting state renders as. Comparing parsed JSON avoids false negatives
//! from field ordering.

use films_core::{render, FetchError, FetchState, FilmsClient, HttpMethod, HttpResponse, Movie, View};

const BASE_URL: &str = "http://localhost:3000";

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        other => panic!("unknown method: {other}"),
    }
}

fn view_name(view: View<'_>) -> &'static str {
    match view {
        View::Loading => "loading",
        View::Error(_) => "error",
        View::Empty => "empty",
        View::List(_) => "list",
    }
}

#[test]
fn films_test_vectors() {
    let raw = include_str!("../../test-vectors/films.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = FilmsClient::new(BASE_URL);
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_list_films();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert!(req.body.is_none(), "{name}: body should be None");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };
        let result = c.parse_list_films(response);

        let state = match result {
            Ok(movies) => {
                assert!(case.get("expected_error").is_none(), "{name}: expected an error");
                let expected: Vec<Movie> = serde_json::from_value(case["expected_result"].clone()).unwrap();
                assert_eq!(movies, expected, "{name}: parsed result");
                FetchState::default().begin().succeed(movies)
            }
            Err(err) => {
                let expected_error = case["expected_error"].as_str().unwrap_or_else(|| panic!("{name}: unexpected error {err}"));
                match expected_error {
                    "Http" => assert!(matches!(err, FetchError::Http { .. }), "{name}: expected Http"),
                    "Deserialization" => {
                        assert!(matches!(err, FetchError::Deserialization(_)), "{name}: expected Deserialization")
                    }
                    other => panic!("{name}: unknown expected_error: {other}"),
                }
                FetchState::default().begin().fail(err.to_string())
            }
        };

        assert_eq!(view_name(render(&state)), case["expected_view"].as_str().unwrap(), "{name}: view");
    }
}
