#![deny(clippy::pedantic)]

use std::env;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";

fn main() {
    println!("cargo:rerun-if-env-changed=TRAINER_API_URL");
    let api_url = env::var("TRAINER_API_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    println!("cargo:rustc-env=TRAINER_API_URL={api_url}");
}
