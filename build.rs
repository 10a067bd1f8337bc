// Build script for the prediction endpoint configuration.
// The endpoint URLs are baked in through `option_env!`, so a change to either
// variable has to trigger a rebuild.

use std::env;

const ENDPOINT_VARS: [&str; 2] = ["CBC_API_URL", "VISUAL_API_URL"];

fn main() {
    for var in ENDPOINT_VARS {
        println!("cargo:rerun-if-env-changed={}", var);

        match env::var(var) {
            Ok(value) if !value.trim().is_empty() => {}
            _ => {
                println!(
                    "cargo:warning={} is not set, the endpoint must be supplied at runtime via init_api_config_js()",
                    var
                );
            }
        }
    }
}
