//! # walkshot
//!
//! Scripted UI verification walks. Drive a headless browser through a fixed
//! sequence of clicks and waits against a local HTML document, capturing a
//! screenshot at each interesting state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use walkshot::{walks, BrowserConfig, Walker};
//!
//! # #[tokio::main]
//! # async fn main() -> walkshot::Result<()> {
//! let walk = walks::charts_walk("power_consumption.html")?;
//! let walker = Walker::launch(&BrowserConfig::default()).await?;
//! let outcome = walker.run(&walk).await;
//! walker.close().await?;
//! let report = outcome?;
//! println!("captured {} screenshots", report.screenshots.len());
//! # Ok(())
//! # }
//! ```

mod walk;
pub mod walks;

pub use walk::steps::Step;
pub use walk::{BrowserConfig, Walk, WalkReport, Walker};

/// Result type for walkshot operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing or running a walk.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("browser error: {0}")]
    Browser(#[from] eoka::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("step failed: {0}")]
    StepFailed(String),

    #[error("document error: {0}")]
    Document(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn screenshot_paths(walk: &Walk) -> Vec<&Path> {
        walk.steps
            .iter()
            .filter_map(|s| match s {
                Step::Screenshot { path } => Some(path.as_path()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn charts_walk_shape() {
        let walk = walks::charts_walk("power_consumption.html").unwrap();
        assert_eq!(walk.name, "charts");
        assert_eq!(walk.root_selector, "#app");
        assert!(walk.url.starts_with("file://"));
        assert!(walk.url.ends_with("power_consumption.html"));

        let shots = screenshot_paths(&walk);
        assert_eq!(
            shots,
            vec![
                Path::new("verification/01_ai_insights_charts.png"),
                Path::new("verification/02_forecast_chart.png"),
                Path::new("verification/03_golden_tables_chart.png"),
            ]
        );
    }

    #[test]
    fn charts_walk_order() {
        let walk = walks::charts_walk("power_consumption.html").unwrap();
        let names: Vec<&str> = walk.steps.iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "click_button",
                "click_button",
                "wait",
                "screenshot",
                "click_button",
                "wait",
                "screenshot",
                "click_button",
                "wait",
                "screenshot",
            ]
        );

        // The mocked loading state gets the long settle, the rest the short one.
        let waits: Vec<u64> = walk
            .steps
            .iter()
            .filter_map(|s| match s {
                Step::Wait { ms } => Some(*ms),
                _ => None,
            })
            .collect();
        assert_eq!(waits, vec![5000, 1000, 1000]);
    }

    #[test]
    fn charts_walk_button_labels() {
        let walk = walks::charts_walk("power_consumption.html").unwrap();
        let labels: Vec<&str> = walk
            .steps
            .iter()
            .filter_map(|s| match s {
                Step::ClickButton { label } => Some(label.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["Run Query", "Next", "Next", "Golden Tables"]);
    }

    #[test]
    fn redesign_walk_shape() {
        let walk = walks::redesign_walk("power_consumption.html").unwrap();
        assert_eq!(walk.name, "redesign");
        assert_eq!(walk.root_selector, "#app");

        let shots = screenshot_paths(&walk);
        assert_eq!(
            shots,
            vec![
                Path::new("verification/01_analysis_tab.png"),
                Path::new("verification/02_data_sources_tab.png"),
                Path::new("verification/03_golden_tables_tab.png"),
            ]
        );
    }

    #[test]
    fn redesign_walk_waits_on_tab_visibility() {
        let walk = walks::redesign_walk("power_consumption.html").unwrap();
        let selectors: Vec<&str> = walk
            .steps
            .iter()
            .filter_map(|s| match s {
                Step::WaitForSelector { selector, .. } => Some(selector.as_str()),
                _ => None,
            })
            .collect();
        // Each tab switch waits for the panel to shed its hidden marker.
        assert_eq!(selectors, vec!["#data-tab:not(.hidden)", "#golden-tab:not(.hidden)"]);

        // First screenshot is the initial view, before any click.
        assert_eq!(walk.steps[0].name(), "screenshot");
    }

    #[test]
    fn walks_share_the_golden_tables_button() {
        let charts = walks::charts_walk("power_consumption.html").unwrap();
        let redesign = walks::redesign_walk("power_consumption.html").unwrap();
        for walk in [&charts, &redesign] {
            assert!(walk.steps.iter().any(|s| matches!(
                s,
                Step::ClickButton { label } if label == "Golden Tables"
            )));
        }
    }

    #[test]
    fn document_url_is_absolute() {
        let url = walks::document_url("power_consumption.html").unwrap();
        assert!(url.starts_with("file:///"), "url: {}", url);

        let already_abs = walks::document_url("/tmp/power_consumption.html").unwrap();
        assert_eq!(already_abs, "file:///tmp/power_consumption.html");
    }

    #[test]
    fn browser_config_defaults_to_headless() {
        let config = BrowserConfig::default();
        assert!(config.headless);
        assert_eq!(config.viewport_width, 1280);
        assert_eq!(config.viewport_height, 720);
    }
}
