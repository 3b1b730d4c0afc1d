#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pitch_booking::run().await
}
