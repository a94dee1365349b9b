use std::sync::Arc;

use anyhow::Context;

use charisma_quiz::config::Config;
use charisma_quiz::provider::GeminiProvider;
use charisma_quiz::{logging, ui};

fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let config = Config::load().context("failed to load configuration")?;

    // Missing credential is logged, not enforced: the first provider
    // call fails with an upstream error instead.
    let api_key = match std::env::var(&config.provider.api_key_env) {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            tracing::warn!(
                var = %config.provider.api_key_env,
                "API key not set; provider calls will fail"
            );
            String::new()
        }
    };

    let provider = Arc::new(GeminiProvider::new(
        &config.provider,
        api_key,
        config.quiz.question_count,
    ));

    ui::runtime::run(&config, provider).context("terminal ui failed")?;
    Ok(())
}
