//! Page retrieval over libcurl.
//!
//! The transfer is blocking, so it runs on tokio's blocking pool. The
//! awaiting side adds its own deadline on top of curl's timeouts so a stuck
//! worker can never hold the pipeline indefinitely.

use std::time::Duration;

use url::Url;

use crate::config::FetchConfig;
use crate::error::FetchError;

/// Extra time granted to the blocking task beyond curl's own timeout.
const JOIN_GRACE_SECS: u64 = 5;

/// URL actually requested: the target itself, or the target routed through
/// the configured retrieval proxy.
///
/// A proxy containing `{url}` has the placeholder replaced by the
/// percent-encoded target; otherwise the encoded target is appended.
pub(crate) fn request_url(proxy: Option<&str>, target: &Url) -> String {
    let Some(proxy) = proxy.map(str::trim).filter(|p| !p.is_empty()) else {
        return target.to_string();
    };
    let encoded: String = url::form_urlencoded::byte_serialize(target.as_str().as_bytes()).collect();
    if proxy.contains("{url}") {
        proxy.replace("{url}", &encoded)
    } else {
        format!("{proxy}{encoded}")
    }
}

/// GET `target` and return the response body.
pub(crate) async fn fetch_page(cfg: &FetchConfig, target: &Url) -> Result<Vec<u8>, FetchError> {
    let request = request_url(cfg.proxy_url.as_deref(), target);
    let deadline = Duration::from_secs(cfg.timeout_secs.saturating_add(JOIN_GRACE_SECS));
    let timeout_secs = cfg.timeout_secs;
    tracing::debug!("GET {}", request);

    let task = tokio::task::spawn_blocking({
        let cfg = cfg.clone();
        let request = request.clone();
        move || fetch_blocking(&cfg, &request)
    });

    match tokio::time::timeout(deadline, task).await {
        Ok(joined) => joined?,
        Err(_) => {
            tracing::warn!("fetch of {} abandoned after {:?}", request, deadline);
            Err(FetchError::TimedOut {
                url: request,
                secs: timeout_secs,
            })
        }
    }
}

fn fetch_blocking(cfg: &FetchConfig, url: &str) -> Result<Vec<u8>, FetchError> {
    let transport = |source: curl::Error| FetchError::Transport {
        url: url.to_string(),
        source,
    };
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.follow_location(true).map_err(transport)?;
    easy.max_redirections(10).map_err(transport)?;
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .map_err(transport)?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))
        .map_err(transport)?;
    easy.useragent(&cfg.user_agent).map_err(transport)?;
    // Empty string = advertise every encoding libcurl can decode; body is
    // measured after decompression.
    easy.accept_encoding("").map_err(transport)?;

    let limit = cfg.max_body_bytes;
    let mut over_limit = false;
    let performed = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                if body.len() as u64 + data.len() as u64 > limit {
                    over_limit = true;
                    // A short write makes libcurl abort the transfer.
                    return Ok(0);
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform()
    };
    if let Err(e) = performed {
        return Err(if over_limit {
            FetchError::BodyTooLarge {
                url: url.to_string(),
                limit,
            }
        } else if e.is_operation_timedout() {
            FetchError::TimedOut {
                url: url.to_string(),
                secs: cfg.timeout_secs,
            }
        } else {
            transport(e)
        });
    }

    let code = easy.response_code().map_err(transport)?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Status {
            url: url.to_string(),
            code,
        });
    }

    tracing::debug!("GET {} -> HTTP {} ({} bytes)", url, code, body.len());
    Ok(body)
}
