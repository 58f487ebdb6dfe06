use tracklift::{cli, Result};

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await?;

    Ok(())
}
