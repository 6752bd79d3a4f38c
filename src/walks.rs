//! The built-in verification walks against the power-consumption dashboard.
//!
//! Both walks address the same document: a single-page app rooted at `#app`,
//! with buttons identified by their visible labels and tab panels that toggle
//! a `hidden` marker class.

use crate::walk::steps::DEFAULT_TIMEOUT_MS;
use crate::{Error, Result, Step, Walk};
use std::path::Path;

/// Where screenshots land, relative to the working directory.
const OUT_DIR: &str = "verification";

/// Root element that must render before any walk proceeds.
const ROOT_SELECTOR: &str = "#app";

/// Resolve a document path to an absolute `file://` URL.
///
/// The path does not have to exist yet; navigation fails later if it doesn't.
pub fn document_url(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let abs = std::path::absolute(path)
        .map_err(|e| Error::Document(format!("cannot resolve '{}': {}", path.display(), e)))?;
    Ok(format!("file://{}", abs.display()))
}

fn click(label: &str) -> Step {
    Step::ClickButton {
        label: label.to_string(),
    }
}

fn wait_ms(ms: u64) -> Step {
    Step::Wait { ms }
}

fn wait_for(selector: &str) -> Step {
    Step::WaitForSelector {
        selector: selector.to_string(),
        timeout_ms: DEFAULT_TIMEOUT_MS,
    }
}

fn shot(name: &str) -> Step {
    Step::Screenshot {
        path: Path::new(OUT_DIR).join(name),
    }
}

/// Walk the query stepper through the AI-insights, forecast and golden-tables
/// chart views.
pub fn charts_walk(document: impl AsRef<Path>) -> Result<Walk> {
    Ok(Walk {
        name: "charts",
        url: document_url(document)?,
        root_selector: ROOT_SELECTOR.to_string(),
        steps: vec![
            click("Run Query"),
            click("Next"),
            // The mocked loading animation needs the long settle before the
            // charts are worth capturing.
            wait_ms(5000),
            shot("01_ai_insights_charts.png"),
            click("Next"),
            wait_ms(1000),
            shot("02_forecast_chart.png"),
            click("Golden Tables"),
            wait_ms(1000),
            shot("03_golden_tables_chart.png"),
        ],
    })
}

/// Walk the redesigned tab bar: initial analysis view, then the data-sources
/// and golden-tables panels once each has shed its `hidden` marker.
pub fn redesign_walk(document: impl AsRef<Path>) -> Result<Walk> {
    Ok(Walk {
        name: "redesign",
        url: document_url(document)?,
        root_selector: ROOT_SELECTOR.to_string(),
        steps: vec![
            shot("01_analysis_tab.png"),
            click("Data Sources"),
            wait_for("#data-tab:not(.hidden)"),
            shot("02_data_sources_tab.png"),
            click("Golden Tables"),
            wait_for("#golden-tab:not(.hidden)"),
            shot("03_golden_tables_tab.png"),
        ],
    })
}
