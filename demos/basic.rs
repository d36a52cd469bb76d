//! Basic usage example for wdwire
//!
//! Needs a WebDriver server listening on 127.0.0.1:3456 (e.g. a Macaca or
//! chromedriver instance behind `/wd/hub`).
//!
//! Run with: cargo run --example basic

use serde_json::json;
use wdwire::{Keys, Locator, Result, SearchContext, WebDriver};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wdwire=debug".parse().unwrap()),
        )
        .init();

    println!("Creating session...");
    let mut driver = WebDriver::new(
        json!({"platformName": "desktop", "browserName": "chrome"}),
        "http://127.0.0.1:3456/wd/hub",
    )?;
    driver.init()?;
    println!("Session: {}", driver.session_id().unwrap_or("<none>"));

    driver.set_window_size(1280, 800, None)?;
    driver.get("https://example.com")?;

    println!("URL: {}", driver.current_url()?);
    println!("Title: {}", driver.title()?);

    // Heading text, then the first link
    let heading = driver.wait_for_element(Locator::TagName, "h1")?;
    println!("Heading: {}", heading.text()?);

    if let Some(link) = driver.element_by_tag_name_or_none("a")? {
        println!("Link: {:?}", link.attribute("href")?);
    }

    let body = driver.element_by_tag_name("body")?;
    body.send_keys([Keys::End])?;

    let title: String = driver
        .execute_script("return document.title", vec![])?
        .into_typed()?;
    println!("Title via script: {}", title);

    driver.save_screenshot("example_screenshot.png", false)?;
    println!("Screenshot saved to example_screenshot.png");

    println!("Closing session...");
    driver.quit()?;

    println!("Done!");
    Ok(())
}
