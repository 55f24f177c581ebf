//! Share action
//!
//! Prefers the platform share sheet and falls back to copying the message to
//! the clipboard. The caller decides what to do with failures; the page drops
//! them.

use async_trait::async_trait;
use thiserror::Error;

/// Title handed to the share sheet
pub const SHARE_TITLE: &str = "Azadi Day";

/// Message shared or copied
pub const SHARE_TEXT: &str = "🇵🇰 Happy Independence Day Pakistan! #AzadiMubarak";

/// How long the "Copied!" acknowledgment stays up
pub const COPIED_FLASH_MS: u32 = 2000;

/// What gets shared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    /// The standard greeting pointing at `url`
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: SHARE_TEXT.to_string(),
            url: url.into(),
        }
    }

    /// Text placed on the clipboard when no share sheet exists
    pub fn clipboard_text(&self) -> String {
        if self.url.is_empty() {
            self.text.clone()
        } else {
            format!("{} {}", self.text, self.url)
        }
    }
}

/// Share/clipboard failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// The share sheet rejected or was dismissed
    #[error("Share failed: {0}")]
    Share(String),

    /// Writing to the clipboard was refused
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),
}

/// How the share went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The share sheet took the payload
    Shared,
    /// The message was copied to the clipboard
    Copied,
    /// Neither a share sheet nor a clipboard is available
    Unsupported,
}

/// Platform capabilities used by the share action
#[async_trait(?Send)]
pub trait SharePlatform {
    fn can_share(&self) -> bool;

    fn can_copy(&self) -> bool;

    async fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;

    async fn copy_text(&self, text: &str) -> Result<(), ShareError>;
}

/// Share the greeting for `url`, falling back to the clipboard
pub async fn share_page<P>(platform: &P, url: &str) -> Result<ShareOutcome, ShareError>
where
    P: SharePlatform + ?Sized,
{
    let payload = SharePayload::for_url(url);

    if platform.can_share() {
        platform.share(&payload).await?;
        Ok(ShareOutcome::Shared)
    } else if platform.can_copy() {
        platform.copy_text(&payload.clipboard_text()).await?;
        Ok(ShareOutcome::Copied)
    } else {
        Ok(ShareOutcome::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakePlatform {
        share: bool,
        clipboard: bool,
        fail: bool,
        shared: RefCell<Vec<SharePayload>>,
        copied: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl SharePlatform for FakePlatform {
        fn can_share(&self) -> bool {
            self.share
        }

        fn can_copy(&self) -> bool {
            self.clipboard
        }

        async fn share(&self, payload: &SharePayload) -> Result<(), ShareError> {
            if self.fail {
                return Err(ShareError::Share("AbortError".to_string()));
            }
            self.shared.borrow_mut().push(payload.clone());
            Ok(())
        }

        async fn copy_text(&self, text: &str) -> Result<(), ShareError> {
            if self.fail {
                return Err(ShareError::Clipboard("NotAllowedError".to_string()));
            }
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    const URL: &str = "https://azadi.example/";

    #[tokio::test]
    async fn test_prefers_share_sheet() {
        let platform = FakePlatform {
            share: true,
            clipboard: true,
            ..Default::default()
        };

        assert_eq!(share_page(&platform, URL).await, Ok(ShareOutcome::Shared));
        assert_eq!(platform.shared.borrow()[0], SharePayload::for_url(URL));
        assert!(platform.copied.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_falls_back_to_clipboard() {
        let platform = FakePlatform {
            clipboard: true,
            ..Default::default()
        };

        assert_eq!(share_page(&platform, URL).await, Ok(ShareOutcome::Copied));
        assert_eq!(
            platform.copied.borrow()[0],
            format!("{} {}", SHARE_TEXT, URL)
        );
    }

    #[tokio::test]
    async fn test_unsupported() {
        let platform = FakePlatform::default();
        assert_eq!(share_page(&platform, URL).await, Ok(ShareOutcome::Unsupported));
    }

    #[tokio::test]
    async fn test_failures_are_reported() {
        let platform = FakePlatform {
            share: true,
            fail: true,
            ..Default::default()
        };
        assert!(matches!(share_page(&platform, URL).await, Err(ShareError::Share(_))));

        let platform = FakePlatform {
            clipboard: true,
            fail: true,
            ..Default::default()
        };
        assert!(matches!(
            share_page(&platform, URL).await,
            Err(ShareError::Clipboard(_))
        ));
    }

    #[test]
    fn test_clipboard_text_without_url() {
        assert_eq!(SharePayload::for_url("").clipboard_text(), SHARE_TEXT);
    }
}
