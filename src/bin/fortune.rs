//! One-shot loader: runs a single load cycle against the fortune API and
//! prints the resulting page text (placeholder when the load fails).

use fortune_of_the_day::config::LoaderConfig;
use fortune_of_the_day::loader::{Document, FortuneLoader, FORTUNE_ELEMENT_ID};
use fortune_of_the_day::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    telemetry::init_cli_tracing();

    let cfg = LoaderConfig::from_env();
    let loader = FortuneLoader::from_config(&cfg)?;
    let doc = Document::fortune_page();

    let loaded = loader.on_load(&doc).await;

    println!("{}", doc.text_of(FORTUNE_ELEMENT_ID).unwrap_or_default());
    if loaded.is_none() {
        std::process::exit(1);
    }
    Ok(())
}
