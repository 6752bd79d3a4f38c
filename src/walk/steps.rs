use crate::{Error, Result};
use eoka::Page;
use std::path::PathBuf;
use tracing::{debug, info};

/// Default timeout for selector waits.
pub(crate) const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// A single step of a walk.
#[derive(Debug, Clone)]
pub enum Step {
    /// Click a button addressed by its exact visible label.
    ClickButton { label: String },
    /// Suspend for a fixed wall-clock duration.
    Wait { ms: u64 },
    /// Suspend until the selector matches an element.
    WaitForSelector { selector: String, timeout_ms: u64 },
    /// Capture the page to a PNG at the given path.
    Screenshot { path: PathBuf },
}

impl Step {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ClickButton { .. } => "click_button",
            Self::Wait { .. } => "wait",
            Self::WaitForSelector { .. } => "wait_for_selector",
            Self::Screenshot { .. } => "screenshot",
        }
    }
}

/// Finds a button by accessible role and exact label - returns a CSS selector.
const FIND_BUTTON_JS: &str = r#"(() => {
    const label = arguments[0];
    const accessibleName = (el) => {
        const aria = el.getAttribute('aria-label');
        if (aria) return aria.trim();
        if (el.tagName === 'INPUT') return (el.value || '').trim();
        return (el.textContent || '').trim();
    };
    const candidates = document.querySelectorAll(
        'button, [role="button"], input[type="button"], input[type="submit"]'
    );
    for (const el of candidates) {
        if (accessibleName(el) !== label) continue;
        if (el.id) return '#' + el.id;
        const path = [];
        let node = el;
        while (node && node !== document.body) {
            let selector = node.tagName.toLowerCase();
            if (node.id) {
                path.unshift('#' + node.id);
                break;
            }
            const siblings = Array.from(node.parentNode?.children || []);
            const index = siblings.indexOf(node) + 1;
            if (siblings.length > 1) selector += ':nth-child(' + index + ')';
            path.unshift(selector);
            node = node.parentNode;
        }
        return path.join(' > ');
    }
    return null;
})()"#;

/// Execute a single step on the page.
pub(crate) async fn execute(page: &Page, step: &Step) -> Result<()> {
    match step {
        Step::ClickButton { label } => {
            let selector = resolve_button(page, label).await?;
            info!("click: button '{}'", label);
            page.click(&selector).await?;
        }
        Step::Wait { ms } => {
            debug!("wait: {}ms", ms);
            page.wait(*ms).await;
        }
        Step::WaitForSelector {
            selector,
            timeout_ms,
        } => {
            debug!("wait_for_selector: {}", selector);
            page.wait_for(selector, *timeout_ms).await?;
        }
        Step::Screenshot { path } => {
            info!("screenshot: {}", path.display());
            let data = page.screenshot().await?;
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, data)?;
        }
    }
    Ok(())
}

/// Resolve a button label to a CSS selector via the in-page finder.
pub(crate) async fn resolve_button(page: &Page, label: &str) -> Result<String> {
    let js = find_button_js(label);
    let result: Option<String> = page.evaluate(&js).await?;
    result.ok_or_else(|| Error::StepFailed(format!("button with label '{}' not found", label)))
}

fn find_button_js(label: &str) -> String {
    FIND_BUTTON_JS.replace("arguments[0]", &serde_json::to_string(label).unwrap())
}
