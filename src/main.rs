#[tokio::main]
async fn main() {
    if let Err(e) = clinic_auth_backend::run().await {
        tracing::error!("startup failed: {e}");
        std::process::exit(1);
    }
}
