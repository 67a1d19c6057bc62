//! Browser session wrapper
//!
//! One `Session` is opened at suite start and closed at suite end; every test
//! case in a run shares it, so navigation and login state carry over between
//! cases. The implicit wait configured here bounds how long each element
//! lookup polls before it reports not-found.

use std::time::Duration;

use thirtyfour::error::WebDriverErrorInner;
use thirtyfour::{DesiredCapabilities, WebDriver, WebElement};
use tracing::debug;

use crate::common::{Config, Error, Result};

use super::Locator;

/// A live browser session
pub struct Session {
    driver: WebDriver,
}

impl Session {
    /// Open a browser through the configured WebDriver endpoint and apply
    /// the implicit-wait timeout to the session.
    pub async fn open(config: &Config) -> Result<Self> {
        let driver = match config.browser.as_str() {
            "firefox" => {
                WebDriver::new(&config.webdriver_url, DesiredCapabilities::firefox()).await?
            }
            "chrome" => {
                WebDriver::new(&config.webdriver_url, DesiredCapabilities::chrome()).await?
            }
            other => {
                return Err(Error::Config(format!(
                    "Unsupported browser '{}'. Supported browsers: 'firefox', 'chrome'",
                    other
                )))
            }
        };

        driver
            .set_implicit_wait_timeout(Duration::from_secs(config.timeout_secs))
            .await?;

        Ok(Self { driver })
    }

    /// Load a page
    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!(url, "navigate");
        self.driver.goto(url).await?;
        Ok(())
    }

    /// Find exactly one element in the document
    ///
    /// Not-found within the implicit wait is fatal for the current test case.
    pub async fn locate(&self, locator: &Locator) -> Result<WebElement> {
        match self.driver.find(locator.to_by()).await {
            Ok(element) => Ok(element),
            Err(e) if matches!(e.as_inner(), WebDriverErrorInner::NoSuchElement(_)) => {
                Err(Error::ElementNotFound(locator.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Find exactly one element scoped under a previously located element
    pub async fn locate_in(&self, parent: &WebElement, locator: &Locator) -> Result<WebElement> {
        match parent.find(locator.to_by()).await {
            Ok(element) => Ok(element),
            Err(e) if matches!(e.as_inner(), WebDriverErrorInner::NoSuchElement(_)) => {
                Err(Error::ElementNotFound(locator.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Find an element that is allowed to be absent
    ///
    /// Returns `Ok(None)` when nothing matches within the implicit wait.
    pub async fn locate_optional(&self, locator: &Locator) -> Result<Option<WebElement>> {
        match self.driver.find(locator.to_by()).await {
            Ok(element) => Ok(Some(element)),
            Err(e) if matches!(e.as_inner(), WebDriverErrorInner::NoSuchElement(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Scoped variant of [`Session::locate_optional`]
    pub async fn locate_optional_in(
        &self,
        parent: &WebElement,
        locator: &Locator,
    ) -> Result<Option<WebElement>> {
        match parent.find(locator.to_by()).await {
            Ok(element) => Ok(Some(element)),
            Err(e) if matches!(e.as_inner(), WebDriverErrorInner::NoSuchElement(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Send keystrokes to an element
    pub async fn type_text(&self, element: &WebElement, text: &str) -> Result<()> {
        element.send_keys(text).await?;
        Ok(())
    }

    /// Click an element
    pub async fn click(&self, element: &WebElement) -> Result<()> {
        element.click().await?;
        Ok(())
    }

    /// Read the visible text of an element
    pub async fn read_text(&self, element: &WebElement) -> Result<String> {
        Ok(element.text().await?)
    }

    /// Read a named attribute of an element; `None` if the attribute is unset
    pub async fn read_attribute(
        &self,
        element: &WebElement,
        name: &str,
    ) -> Result<Option<String>> {
        Ok(element.attr(name).await?)
    }

    /// Read the document title
    pub async fn title(&self) -> Result<String> {
        Ok(self.driver.title().await?)
    }

    /// Close the browser and end the WebDriver session
    pub async fn close(self) -> Result<()> {
        self.driver.quit().await?;
        Ok(())
    }
}
