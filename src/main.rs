use chrono::Utc;
use std::io::IsTerminal;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use view_counter::{
    ui::render_page, CounterClient, CounterConfig, LoadOutcome, Page, SharedPage,
    ViewCounterWidget,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    info!("page loaded: {}", Utc::now().to_rfc3339());

    let widget = ViewCounterWidget::new(CounterConfig::from_env(), CounterClient::new());
    if !widget.config().is_configured() {
        info!("counter api not configured, showing fallback");
    }

    let page = Page::with_view_count("").into_shared();
    let handle = widget.spawn(page.clone()).await;

    // The page goes out before the counter request settles.
    print_page(&page).await;

    if let LoadOutcome::Updated(count) = handle.await? {
        info!("views: {count}");
        print_page(&page).await;
    }

    Ok(())
}

async fn print_page(page: &SharedPage) {
    let page = page.lock().await;
    println!("{}", render_page(&page));
}
