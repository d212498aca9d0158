use std::sync::Arc;

use tbb_core::config::Config;

#[tokio::main]
async fn main() -> Result<(), tbb_core::Error> {
    tbb_core::logging::init("tbb")?;

    let cfg = Arc::new(Config::load());

    tbb_telegram::router::run_polling(cfg).await?;

    Ok(())
}
