use anyhow::{bail, Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use tracing::{debug, info};

use crate::document::MARKER_ATTRIBUTE;

/// Connect to an already-running Chrome instance via CDP.
///
/// Chrome must be started with `--remote-debugging-port=<port>`, e.g.:
///   google-chrome --remote-debugging-port=9222
pub async fn connect(port: u16) -> Result<Browser> {
    let url = format!("http://127.0.0.1:{port}");
    info!(port = port, "connecting to Chrome via CDP");
    let (browser, mut handler) = Browser::connect(&url)
        .await
        .with_context(|| format!("Failed to connect to Chrome on port {port}. Is Chrome running with --remote-debugging-port={port}?"))?;

    tokio::spawn(async move { while handler.next().await.is_some() {} });

    info!(port = port, "connected to Chrome");
    Ok(browser)
}

/// Launch a new headless Chrome instance.
pub async fn launch() -> Result<Browser> {
    info!("launching headless Chrome");
    let config = BrowserConfig::builder()
        .no_sandbox()
        .arg("--disable-gpu")
        .arg("--disable-dev-shm-usage")
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build browser config: {e}"))?;

    let (browser, mut handler) = Browser::launch(config)
        .await
        .context("Failed to launch Chrome. Is Chrome/Chromium installed?")?;

    tokio::spawn(async move { while handler.next().await.is_some() {} });

    info!("headless Chrome launched");
    Ok(browser)
}

/// Connect to Chrome on `port`, or launch a headless one.
pub async fn open(port: u16, launch_new: bool) -> Result<Browser> {
    if launch_new {
        launch().await
    } else {
        connect(port).await
    }
}

/// Navigate to a URL and return the rendered HTML.
pub async fn fetch_page(browser: &Browser, url: &str) -> Result<String> {
    let page = navigate(browser, url).await?;
    let html = page.content().await.context("Failed to get page content")?;
    debug!(url = %url, html_len = html.len(), "page fetched");
    Ok(html)
}

/// Navigate to a URL, mark the element under viewport point `(x, y)` and
/// return the rendered HTML with the mark in place.
///
/// This is the pointer-hover step: the marked element is what the user would
/// be pointing at.
pub async fn fetch_page_with_pointer(browser: &Browser, url: &str, x: f64, y: f64) -> Result<String> {
    let page = navigate(browser, url).await?;

    let marked = page
        .evaluate(mark_element_at_js(x, y).as_str())
        .await
        .context("Failed to resolve the element under the pointer")?
        .into_value::<bool>()
        .unwrap_or(false);
    if !marked {
        bail!("No element at viewport point ({x}, {y})");
    }

    let html = page.content().await.context("Failed to get page content")?;
    debug!(url = %url, x = x, y = y, html_len = html.len(), "pointer target marked");
    Ok(html)
}

async fn navigate(browser: &Browser, url: &str) -> Result<Page> {
    debug!(url = %url, "navigating");
    let page = browser
        .new_page(url)
        .await
        .with_context(|| format!("Failed to navigate to {url}"))?;

    page.wait_for_navigation().await.ok();
    Ok(page)
}

/// JavaScript that clears any previous mark and marks `elementFromPoint(x, y)`.
/// Returns whether an element was found.
fn mark_element_at_js(x: f64, y: f64) -> String {
    format!(
        r#"(function() {{
    document.querySelectorAll('[{MARKER_ATTRIBUTE}]').forEach(function(el) {{
        el.removeAttribute('{MARKER_ATTRIBUTE}');
    }});
    var el = document.elementFromPoint({x}, {y});
    if (!el) {{ return false; }}
    el.setAttribute('{MARKER_ATTRIBUTE}', '');
    return true;
}})()"#
    )
}
