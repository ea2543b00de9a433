#[tracing::instrument]
pub async fn hello() -> &'static str {
    "Hello world"
}
