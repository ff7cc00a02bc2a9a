use anyhow::{bail, Result};
use reqwest::Method;
use strava_connect::{api_call, strava_auth_url, validate_config, ApiCallOptions};

const USAGE: &str = "usage: strava-connect [auth-url [STATE] | validate | call ENDPOINT [METHOD]]";

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("auth-url");

    match command {
        "auth-url" => {
            warn_on_placeholders();
            println!("{}", strava_auth_url(args.get(1).map(String::as_str)));
        }
        "validate" => {
            let errors = validate_config();
            if errors.is_empty() {
                println!("Configuration OK");
            } else {
                for error in &errors {
                    println!("{}", error);
                }
                bail!("{} configuration error(s)", errors.len());
            }
        }
        "call" => {
            let Some(endpoint) = args.get(1) else {
                bail!(USAGE);
            };
            warn_on_placeholders();

            let mut options = ApiCallOptions::new();
            if let Some(method) = args.get(2) {
                options = options.method(Method::from_bytes(method.to_uppercase().as_bytes())?);
            }

            let data = api_call(endpoint, Some(options)).await?;
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        _ => bail!(USAGE),
    }

    Ok(())
}

fn warn_on_placeholders() {
    for error in validate_config() {
        log::warn!("{}", error);
    }
}
