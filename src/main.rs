//! Fortune API — Binary Entrypoint
//! Boots the Axum HTTP server with the seeded fortune table.

use fortune_of_the_day::telemetry;
use shuttle_axum::ShuttleAxum;

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    // Compact dev logs need FORTUNE_DEV_LOG=1 and a dev environment.
    telemetry::init_server_tracing();

    let router = fortune_of_the_day::app()
        .await
        .map_err(shuttle_runtime::Error::Custom)?;

    Ok(router.into())
}
