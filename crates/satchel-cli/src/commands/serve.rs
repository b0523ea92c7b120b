//! Serve command implementation.

use crate::cli::ServeArgs;
use crate::config::{ConfigOverrides, SatchelConfig};
use crate::error::Result;
use crate::server;

/// Execute the serve command: resolve `serve.*` settings and run the static
/// server until interrupted.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let overrides = ConfigOverrides::from(&args);
    let config = SatchelConfig::load(&overrides, args.config.as_deref())?;

    server::serve(&config.serve).await
}
