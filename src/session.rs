//! Browser session provider. Tries an ordered list of WebDriver backends
//! (chromedriver, then geckodriver) and hands back the first one that
//! starts. Individual startup failures are demoted to warnings; only
//! exhausting every candidate is fatal.

use crate::Result;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thirtyfour::prelude::*;
use thirtyfour::{Capabilities, TimeoutConfiguration};
use tracing::{debug, info, warn};

/// Polling ceiling for every element lookup.
const ELEMENT_WAIT: Duration = Duration::from_secs(10);

/// A WebDriver backend candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Chrome,
    Firefox,
}

impl Backend {
    /// Candidate list in try order. An explicitly requested backend is the
    /// only candidate; otherwise Chrome is tried first, then Firefox.
    pub fn candidates(requested: Option<Backend>) -> Vec<Backend> {
        match requested {
            Some(backend) => vec![backend],
            None => vec![Backend::Chrome, Backend::Firefox],
        }
    }

    /// Default endpoint of this backend's driver process.
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Backend::Chrome => "http://localhost:9515",
            Backend::Firefox => "http://localhost:4444",
        }
    }

    fn capabilities(&self, headless: bool) -> Result<Capabilities> {
        match self {
            Backend::Chrome => {
                let mut caps = DesiredCapabilities::chrome();
                if headless {
                    caps.set_headless()?;
                }
                Ok(caps.into())
            }
            Backend::Firefox => {
                let mut caps = DesiredCapabilities::firefox();
                if headless {
                    caps.set_headless()?;
                }
                Ok(caps.into())
            }
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Chrome => write!(f, "chrome"),
            Backend::Firefox => write!(f, "firefox"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chrome" => Ok(Backend::Chrome),
            "firefox" => Ok(Backend::Firefox),
            other => Err(format!(
                "unknown backend '{}', expected 'chrome' or 'firefox'",
                other
            )),
        }
    }
}

/// Raised when every candidate backend failed to start.
#[derive(Debug, thiserror::Error)]
#[error("no browser backend available: {}", describe_attempts(.attempts))]
pub struct NoBrowserAvailableError {
    /// Every attempted backend with the reason it failed.
    pub attempts: Vec<(Backend, String)>,
}

fn describe_attempts(attempts: &[(Backend, String)]) -> String {
    attempts
        .iter()
        .map(|(backend, reason)| format!("{}: {}", backend, reason))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Session launch configuration.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Only try this backend when set.
    pub backend: Option<Backend>,

    /// WebDriver endpoint override; each backend's default port otherwise.
    pub webdriver_url: Option<String>,

    /// Run the browser headless.
    pub headless: bool,
}

/// One live browser session, exclusively owned by a single run.
pub struct Session {
    driver: WebDriver,
    backend: Backend,
}

impl Session {
    /// Connect to the first candidate backend that starts. Per-candidate
    /// failures are logged as warnings while candidates remain; exhausting
    /// them all yields [`NoBrowserAvailableError`].
    pub async fn connect(config: &SessionConfig) -> Result<Self> {
        let mut attempts = Vec::new();
        for backend in Backend::candidates(config.backend) {
            let endpoint = config
                .webdriver_url
                .as_deref()
                .unwrap_or_else(|| backend.default_endpoint());
            debug!("Trying {} via {}", backend, endpoint);
            match Self::start(backend, endpoint, config.headless).await {
                Ok(session) => {
                    info!("Browser session started ({})", backend);
                    return Ok(session);
                }
                Err(e) => {
                    warn!("Backend {} failed to start: {}", backend, e);
                    attempts.push((backend, e.to_string()));
                }
            }
        }
        Err(NoBrowserAvailableError { attempts }.into())
    }

    async fn start(backend: Backend, endpoint: &str, headless: bool) -> Result<Self> {
        let caps = backend.capabilities(headless)?;
        let driver = WebDriver::new(endpoint, caps).await?;
        match Self::configure(&driver).await {
            Ok(()) => Ok(Self { driver, backend }),
            Err(e) => {
                // don't leak the browser process on a half-started session
                let _ = driver.quit().await;
                Err(e)
            }
        }
    }

    async fn configure(driver: &WebDriver) -> Result<()> {
        // implicit timeout only: every element lookup polls for up to
        // ELEMENT_WAIT before failing
        let timeouts = TimeoutConfiguration::new(None, None, Some(ELEMENT_WAIT));
        driver.update_timeouts(timeouts).await?;
        driver.maximize_window().await?;
        Ok(())
    }

    /// The underlying WebDriver handle.
    pub fn driver(&self) -> &WebDriver {
        &self.driver
    }

    /// Which backend this session runs on.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Quit the browser. Must be called on every exit path.
    pub async fn quit(self) -> Result<()> {
        self.driver.quit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_candidate_order() {
        let candidates = Backend::candidates(None);
        assert_eq!(candidates, vec![Backend::Chrome, Backend::Firefox]);
    }

    #[test]
    fn test_explicit_backend_is_sole_candidate() {
        let candidates = Backend::candidates(Some(Backend::Firefox));
        assert_eq!(candidates, vec![Backend::Firefox]);
    }

    #[test]
    fn test_default_endpoints() {
        assert_eq!(Backend::Chrome.default_endpoint(), "http://localhost:9515");
        assert_eq!(Backend::Firefox.default_endpoint(), "http://localhost:4444");
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!(Backend::from_str("chrome").unwrap(), Backend::Chrome);
        assert_eq!(Backend::from_str("Firefox").unwrap(), Backend::Firefox);
        let err = Backend::from_str("safari").unwrap_err();
        assert!(err.contains("safari"));
    }

    #[test]
    fn test_aggregated_error_lists_every_attempt() {
        let err = NoBrowserAvailableError {
            attempts: vec![
                (Backend::Chrome, "connection refused".to_string()),
                (Backend::Firefox, "timed out".to_string()),
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("chrome: connection refused"));
        assert!(msg.contains("firefox: timed out"));
    }
}
