use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    spielplan::tui::run().await
}
