//! Replays a JSON action script through one assessment form.
//!
//! ```text
//! pairwise <script.json>     # or read the script from stdin
//! ```
//!
//! The script is a JSON array of [`FormAction`]s. The final render snapshot
//! and the validation verdict are printed as JSON on stdout.

use std::io::Read;
use std::sync::Arc;

use anyhow::Context;
use serde_json::json;

use pairwise::{AssessmentForm, Config, FormAction, FormContext};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    tracing::info!(
        quantized = config.slider.enabled,
        value_count = config.slider.value_count,
        min = config.slider.min,
        max = config.slider.max,
        "Pairwise replay starting"
    );

    let script = read_script(std::env::args().nth(1))?;
    let actions: Vec<FormAction> =
        serde_json::from_str(&script).context("script must be a JSON array of form actions")?;

    let mut form = AssessmentForm::new(FormContext::new(Arc::new(config)));
    for (index, action) in actions.iter().enumerate() {
        if !form.apply(action) {
            tracing::warn!(index, ?action, "Action rejected");
        }
    }

    let errors: Vec<String> = form
        .validate_all()
        .iter()
        .map(ToString::to_string)
        .collect();
    let output = json!({
        "view": form.render(),
        "valid": errors.is_empty(),
        "errors": errors,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    form.teardown();
    Ok(())
}

fn read_script(path: Option<String>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read script {path}")),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read script from stdin")?;
            Ok(buffer)
        }
    }
}
