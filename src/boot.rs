use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use technews::content::{Content, NEWSLETTERS_PATH, POSTS_PATH};

use crate::config::SiteConfig;

/// Shell page, must exist or the site cannot start.
const INDEX_FILE: &str = "index.html";

/// Optional assets: the site works without them but looks or behaves wrong.
const EXPECTED_ASSETS: &[&str] = &["style.css", "pkg/technews.js", "pkg/technews_bg.wasm"];

#[derive(Debug, Default, PartialEq)]
pub struct BootReport {
    pub errors: u32,
    pub warnings: u32,
}

/// Run all boot checks. Call this before Rocket launches.
/// Aborts the process if the site directory is unusable.
pub fn run(config: &SiteConfig) {
    info!("Boot check starting for {}...", config.root.display());

    let report = check(&config.root);

    if report.errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            report.errors, report.warnings
        );
        process::exit(1);
    }

    if report.warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some pages may not work correctly.",
            report.warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}

pub fn check(root: &Path) -> BootReport {
    let mut report = BootReport::default();

    // ── 1. Site root ───────────────────────────────────
    if !root.is_dir() {
        error!("  Site directory missing: {}", root.display());
        report.errors += 1;
        return report;
    }

    // ── 2. Shell page ──────────────────────────────────
    if !root.join(INDEX_FILE).is_file() {
        error!("  MISSING shell page: {}", root.join(INDEX_FILE).display());
        report.errors += 1;
    }

    // ── 3. Static assets ───────────────────────────────
    for asset in EXPECTED_ASSETS {
        if !root.join(asset).is_file() {
            warn!("  Missing asset: {} (build the wasm bundle into pkg/)", asset);
            report.warnings += 1;
        }
    }

    // ── 4. Content resources ───────────────────────────
    // The browser shows an "unavailable" page if these are bad, so only warn.
    let posts = fs::read_to_string(root.join(POSTS_PATH));
    let newsletters = fs::read_to_string(root.join(NEWSLETTERS_PATH));
    match (posts, newsletters) {
        (Ok(posts), Ok(newsletters)) => match Content::from_json(&posts, &newsletters) {
            Ok(content) => info!(
                "  Content OK: {} post(s), {} newsletter(s)",
                content.post_count(),
                content.newsletter_count()
            ),
            Err(e) => {
                warn!("  {}", e);
                report.warnings += 1;
            }
        },
        (posts, newsletters) => {
            if let Err(e) = posts {
                warn!("  Cannot read {}: {}", POSTS_PATH, e);
                report.warnings += 1;
            }
            if let Err(e) = newsletters {
                warn!("  Cannot read {}: {}", NEWSLETTERS_PATH, e);
                report.warnings += 1;
            }
        }
    }

    report
}
