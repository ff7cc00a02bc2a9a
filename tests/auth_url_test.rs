use rstest::rstest;
use std::collections::HashMap;
use strava_connect::oauth::authorization_url;
use strava_connect::Config;
use url::Url;

fn query_of(raw: &str) -> (Url, Vec<(String, String)>) {
    let url = Url::parse(raw).expect("authorization URL should parse");
    let pairs = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    (url, pairs)
}

#[test]
fn test_auth_url_has_exactly_six_params() {
    let config = Config::default();
    let (url, pairs) = query_of(&authorization_url(&config, Some("x")));

    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("www.strava.com"));
    assert_eq!(url.path(), "/oauth/authorize");

    let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "client_id",
            "response_type",
            "redirect_uri",
            "approval_prompt",
            "scope",
            "state"
        ]
    );

    let params: HashMap<_, _> = pairs.into_iter().collect();
    assert_eq!(params["client_id"], config.client_id);
    assert_eq!(params["response_type"], "code");
    assert_eq!(params["redirect_uri"], config.redirect_uri);
    assert_eq!(params["approval_prompt"], "force");
    assert_eq!(params["scope"], config.scopes);
    assert_eq!(params["state"], "x");
}

#[test]
fn test_auth_url_percent_encodes_values() {
    let raw = authorization_url(&Config::default(), Some("x"));

    assert!(raw.contains("redirect_uri=https%3A%2F%2Fstrava-jerome.web.app%2Fcallback.html"));
    assert!(raw.contains("scope=read_all%2Cactivity%3Aread_all"));
}

#[test]
fn test_auth_url_is_pure() {
    let config = Config::default();
    assert_eq!(
        authorization_url(&config, Some("x")),
        authorization_url(&config, Some("x"))
    );
    assert_eq!(
        authorization_url(&config, None),
        authorization_url(&config, Some("friends_invite"))
    );
}

#[rstest]
#[case::template(Config::template(), 3)]
#[case::defaults(Config::default(), 0)]
#[case::client_id_only(Config { client_id: "VOTRE_CLIENT_ID_STRAVA".to_string(), ..Config::default() }, 1)]
#[case::ngrok_only(Config { api_base_url: "https://VOTRE-NGROK-URL.ngrok-free.app".to_string(), ..Config::default() }, 1)]
fn test_validate_counts(#[case] config: Config, #[case] expected: usize) {
    let errors = config.validate();
    assert_eq!(errors.len(), expected, "errors: {:?}", errors);
    assert_eq!(errors, config.validate());
}
