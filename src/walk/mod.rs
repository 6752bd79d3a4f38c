pub(crate) mod steps;

use crate::Result;
use eoka::{Browser, Page};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use steps::Step;
use tracing::{debug, info};

/// Browser launch options for a walk.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run without a visible window.
    pub headless: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 1280,
            viewport_height: 720,
        }
    }
}

/// A fixed interaction sequence against one document.
#[derive(Debug, Clone)]
pub struct Walk {
    /// Short name for logging.
    pub name: &'static str,
    /// URL the page is navigated to before the steps run.
    pub url: String,
    /// Selector that must appear before the walk proceeds.
    pub root_selector: String,
    pub steps: Vec<Step>,
}

/// What a completed walk produced.
#[derive(Debug, Serialize)]
pub struct WalkReport {
    /// Screenshot paths in capture order.
    pub screenshots: Vec<PathBuf>,
    /// Number of steps executed.
    pub steps_executed: usize,
    /// Total duration in milliseconds.
    pub duration_ms: u64,
}

/// Drives a single page through a [`Walk`].
pub struct Walker {
    browser: Browser,
    page: Page,
}

impl Walker {
    /// Launch a browser and open the page the walk will run on.
    pub async fn launch(config: &BrowserConfig) -> Result<Self> {
        let stealth = eoka::StealthConfig {
            headless: config.headless,
            viewport_width: config.viewport_width,
            viewport_height: config.viewport_height,
            ..Default::default()
        };

        debug!("Launching browser (headless: {})", config.headless);
        let browser = Browser::launch_with_config(stealth).await?;
        let page = browser.new_page("about:blank").await?;

        Ok(Self { browser, page })
    }

    /// Get a reference to the page.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Run the walk to completion.
    ///
    /// Steps execute strictly in order; the first failure aborts the walk and
    /// is returned as-is. Screenshots captured before the failure stay on
    /// disk. The browser is not closed here — call [`Walker::close`]
    /// afterwards regardless of the outcome.
    pub async fn run(&self, walk: &Walk) -> Result<WalkReport> {
        let start = Instant::now();

        info!("Navigating to: {}", walk.url);
        self.page.goto(&walk.url).await?;

        debug!("Waiting for root element: {}", walk.root_selector);
        self.page
            .wait_for(&walk.root_selector, steps::DEFAULT_TIMEOUT_MS)
            .await?;

        let mut screenshots = Vec::new();
        let mut steps_executed = 0;
        for (i, step) in walk.steps.iter().enumerate() {
            debug!("Executing step {}: {}", i + 1, step.name());
            steps::execute(&self.page, step).await?;
            if let Step::Screenshot { path } = step {
                screenshots.push(path.clone());
            }
            steps_executed += 1;
        }

        Ok(WalkReport {
            screenshots,
            steps_executed,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Close the browser.
    pub async fn close(self) -> Result<()> {
        self.browser.close().await?;
        Ok(())
    }
}
