#[tokio::main]
async fn main() -> anyhow::Result<()> {
    redpen_backend::run().await
}
