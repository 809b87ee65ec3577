use items_api::{env::Env, serve};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt::init();
    let env = Env::environment(Default::default());
    serve(env).await.inspect_err(|e| tracing::error!("{}", e))?;
    Ok(())
}
