fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    dioxus::launch(bingo_caller::app::App);
}
