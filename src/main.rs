// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! movierama-client CLI
//!
//! Small command-line front end over the library, handy for poking the API.

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use movierama_client::{
    get_parameter_by_name, try_parse_jwt, ApiClient, ClientConfig, CookieJar, CookieStore,
    PageLocation,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("movierama_client=info".parse().unwrap()),
        )
        .init();

    let mut args: Vec<String> = env::args().collect();
    let cookie = take_option(&mut args, "--cookie");

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "fetch" => {
            if args.len() < 3 {
                eprintln!("Usage: movierama-client fetch <path> [method] [body] [--cookie <string>]");
                return ExitCode::from(1);
            }
            let method = args.get(3).map(String::as_str).unwrap_or("GET");
            fetch(&args[2], method, args.get(4).cloned(), cookie.as_deref()).await
        }
        "login" => {
            if args.len() < 4 {
                eprintln!("Usage: movierama-client login <username> <password>");
                return ExitCode::from(1);
            }
            login(&args[2], &args[3]).await
        }
        "jwt" => {
            if args.len() < 3 {
                eprintln!("Usage: movierama-client jwt <token>");
                return ExitCode::from(1);
            }
            decode_jwt(&args[2])
        }
        "param" => {
            if args.len() < 4 {
                eprintln!("Usage: movierama-client param <url> <name>");
                return ExitCode::from(1);
            }
            param(&args[2], &args[3])
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("movierama-client {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

/// Remove `--flag <value>` from the argument list
fn take_option(args: &mut Vec<String>, flag: &str) -> Option<String> {
    let idx = args.iter().position(|a| a == flag)?;
    if idx + 1 >= args.len() {
        args.remove(idx);
        return None;
    }
    let value = args.remove(idx + 1);
    args.remove(idx);
    Some(value)
}

fn print_usage() {
    println!(
        r#"movierama-client - MovieRama API helper

USAGE:
    movierama-client <COMMAND> [OPTIONS]

COMMANDS:
    fetch <path> [method] [body]    Call the API and print the JSON result
    login <username> <password>     Obtain a token and print its claims
    jwt <token>                     Decode a JWT payload
    param <url> <name>              Read a query-string parameter
    help                            Show this help message
    version                         Show version information

OPTIONS:
    --cookie <string>               Seed the cookie jar (e.g. "jwt=eyJ...")

ENVIRONMENT:
    MOVIERAMA_API_URL               Base URL (default http://127.0.0.1:8000)
    MOVIERAMA_ORIGIN                Origin header sent with requests

EXAMPLES:
    movierama-client fetch /api/movies
    movierama-client fetch /api/movies/1/votes POST '{{"reaction":"like"}}' --cookie "jwt=eyJ..."
    movierama-client jwt eyJhbGciOiJIUzI1NiJ9.eyJ1c2VyX2lkIjoxfQ.sig
    movierama-client param "http://localhost/movies.html?user_id=3" user_id
"#
    );
}

fn client_with(jar: &CookieJar) -> Option<ApiClient> {
    match ApiClient::with_config(ClientConfig::from_env(), Arc::new(jar.clone())) {
        Ok(client) => Some(client),
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            None
        }
    }
}

async fn fetch(path: &str, method: &str, body: Option<String>, cookie: Option<&str>) -> ExitCode {
    let jar = cookie.map(CookieJar::parse).unwrap_or_default();
    let Some(client) = client_with(&jar) else {
        return ExitCode::from(1);
    };

    match client.fetch_outcome(path, method, body).await {
        Ok(outcome) => {
            match outcome.status() {
                Some(status) => eprintln!("{} {} -> {}", method, path, status),
                None => eprintln!("{} {} -> ok", method, path),
            }
            match outcome.into_json() {
                Some(value) => println!(
                    "{}",
                    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
                ),
                None => println!("null"),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Request failed: {}", e);
            ExitCode::from(1)
        }
    }
}

async fn login(username: &str, password: &str) -> ExitCode {
    let jar = CookieJar::new();
    let Some(client) = client_with(&jar) else {
        return ExitCode::from(1);
    };

    match client.login(username, password).await {
        Ok(true) => {
            let session = client.session();
            println!("Logged in as {}", username);
            if let Some(user_id) = session.user_id() {
                println!("User ID: {}", user_id);
            }
            if let Some(token) = jar.get_cookie("jwt") {
                println!("Token: {}", token);
            }
            ExitCode::SUCCESS
        }
        Ok(false) => {
            eprintln!("Login rejected");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("Login failed: {}", e);
            ExitCode::from(1)
        }
    }
}

fn decode_jwt(token: &str) -> ExitCode {
    match try_parse_jwt(token) {
        Ok(claims) => {
            let value = serde_json::Value::Object(claims);
            println!(
                "{}",
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Invalid token: {}", e);
            ExitCode::from(1)
        }
    }
}

fn param(url: &str, name: &str) -> ExitCode {
    let location = match PageLocation::new(url) {
        Ok(location) => location,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    match get_parameter_by_name(&location, name) {
        Some(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        None => {
            println!("null");
            ExitCode::SUCCESS
        }
    }
}
