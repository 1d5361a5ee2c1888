pub static LIVENESS_MESSAGE: &str = "SeedEdit backend running.";

pub async fn get_root() -> &'static str {
    LIVENESS_MESSAGE
}
