#[tokio::main]
async fn main() {
    let code = command::exec().await;
    std::process::exit(code);
}
