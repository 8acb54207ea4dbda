use anyhow::Result;

use tapoo_engine::logging::{init_logging, LoggingConfig};
use tapoo_playground::Playground;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    Playground::new()
        .title("tapoo playground")
        .size(1024.0, 768.0)
        .run()
}
