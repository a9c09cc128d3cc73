use post_probe::utils::{logger, validation::Validate};
use post_probe::{FixtureConfig, RequestRunner};

#[tokio::main]
async fn main() {
    logger::init_logger();

    let config = FixtureConfig::default();
    tracing::debug!("Fixture: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Fixture validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let runner = RequestRunner::over_http(config);

    match runner.run().await {
        Ok(record) => println!("{}", record),
        Err(e) => {
            tracing::error!("❌ Probe run failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
