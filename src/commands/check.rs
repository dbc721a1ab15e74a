//! Check command - Validates configuration without starting the server.

use crate::config::Config;
use crate::errors::AppResult;

/// Execute the check command
pub async fn execute(config: Config) -> AppResult<()> {
    let backend = config.backend()?;

    println!("{:#?}", config);
    println!("Repository: {}", backend.kind());

    Ok(())
}
