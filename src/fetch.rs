//! Fetch a remote resource into a local file.
//!
//! Thin libcurl wrapper: GET, follow redirects, stream the body to disk as
//! it arrives. Independent of the hashing side of the crate.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::error;

/// Download `url` into `dest`, reporting received bytes on stderr.
///
/// Transport and filesystem errors are logged and collapsed to `false`; a
/// partial file may be left behind on failure.
pub fn fetch(url: &str, dest: &Path) -> bool {
    match fetch_inner(url, dest) {
        Ok(()) => true,
        Err(e) => {
            error!("error downloading {}: {:#}", url, e);
            false
        }
    }
}

fn fetch_inner(url: &str, dest: &Path) -> Result<()> {
    let mut out =
        File::create(dest).with_context(|| format!("create {}", dest.display()))?;

    let mut easy = curl::easy::Easy::new();
    easy.url(url).context("invalid URL")?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(30))?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {bytes} received")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            out.write_all(data)
                .map_err(|_| curl::easy::WriteError::Pause)?;
            pb.inc(data.len() as u64);
            Ok(data.len())
        })?;
        transfer.perform().with_context(|| format!("GET {} failed", url))?;
    }
    pb.finish_and_clear();

    let code = easy.response_code().context("no response code")?;
    if code < 200 || code >= 300 {
        anyhow::bail!("GET {} returned HTTP {}", url, code);
    }

    out.flush()?;
    Ok(())
}
