use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::SiteConfig;
use crate::error::ShareError;

pub const COPIED_NOTICE: &str = "已複製分享內容到剪貼簿，可以貼到 Threads 或其他地方！";
const SHARE_HASHTAGS: &str = "#海鮮 #崁仔頂 #基隆美食";
const SHARER_URL: &str = "https://www.facebook.com/sharer/sharer.php";
const SHARER_WINDOW: &str = "facebook-share-dialog";
const SHARER_FEATURES: &str = "width=800,height=600";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn new(site: &SiteConfig, product_id: &str, product_name: &str) -> Self {
        Self {
            title: format!("分享好料：{product_name}"),
            text: format!(
                "看看我在「{}」找到的{product_name}，超新鮮的！ {SHARE_HASHTAGS}",
                site.brand
            ),
            url: site.product_url(product_id),
        }
    }

    /// What lands on the clipboard when there is no native share sheet.
    pub fn clipboard_text(&self) -> String {
        format!("{} {}", self.text, self.url)
    }

    pub fn popup(&self) -> PopupWindow {
        PopupWindow {
            url: format!("{SHARER_URL}?u={}", urlencoding::encode(&self.url)),
            name: SHARER_WINDOW,
            features: SHARER_FEATURES,
        }
    }
}

/// Secondary share dialog opened after a clipboard copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupWindow {
    pub url: String,
    pub name: &'static str,
    pub features: &'static str,
}

/// Share-related capabilities of the host environment.
#[async_trait(?Send)]
pub trait ShareEnvironment {
    /// Feature probe, consulted once when the sharer is built.
    fn has_native_share(&self) -> bool;

    async fn native_share(&self, payload: &SharePayload) -> Result<(), ShareError>;

    async fn write_clipboard(&self, text: &str) -> Result<(), ShareError>;

    fn notify(&self, message: &str);

    fn open_window(&self, popup: &PopupWindow);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareMode {
    Native,
    ClipboardFallback,
}

impl ShareMode {
    pub fn detect<E: ShareEnvironment + ?Sized>(env: &E) -> Self {
        if env.has_native_share() {
            Self::Native
        } else {
            Self::ClipboardFallback
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied(PopupWindow),
    /// Failure was logged and swallowed.
    Failed(ShareError),
}

/// Runs share requests on the path chosen at construction.
#[derive(Debug)]
pub struct Sharer<E> {
    env: E,
    mode: ShareMode,
}

impl<E: ShareEnvironment> Sharer<E> {
    pub fn new(env: E) -> Self {
        let mode = ShareMode::detect(&env);
        debug!(?mode, "share capability detected");
        Self { env, mode }
    }

    pub const fn mode(&self) -> ShareMode {
        self.mode
    }

    pub const fn env(&self) -> &E {
        &self.env
    }

    pub async fn share(&self, payload: &SharePayload) -> ShareOutcome {
        match self.mode {
            ShareMode::Native => match self.env.native_share(payload).await {
                Ok(()) => ShareOutcome::Shared,
                Err(error) => {
                    warn!(%error, url = %payload.url, "native share failed");
                    ShareOutcome::Failed(error)
                }
            },
            ShareMode::ClipboardFallback => {
                match self.env.write_clipboard(&payload.clipboard_text()).await {
                    Ok(()) => {
                        let popup = payload.popup();
                        self.env.notify(COPIED_NOTICE);
                        self.env.open_window(&popup);
                        ShareOutcome::Copied(popup)
                    }
                    Err(error) => {
                        warn!(%error, url = %payload.url, "clipboard write failed");
                        ShareOutcome::Failed(error)
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingEnv {
        native: bool,
        fail: bool,
        native_calls: RefCell<Vec<SharePayload>>,
        clipboard: RefCell<Vec<String>>,
        notices: RefCell<Vec<String>>,
        windows: RefCell<Vec<PopupWindow>>,
    }

    #[async_trait(?Send)]
    impl ShareEnvironment for RecordingEnv {
        fn has_native_share(&self) -> bool {
            self.native
        }

        async fn native_share(&self, payload: &SharePayload) -> Result<(), ShareError> {
            self.native_calls.borrow_mut().push(payload.clone());
            if self.fail {
                return Err(ShareError::Rejected("AbortError".to_string()));
            }
            Ok(())
        }

        async fn write_clipboard(&self, text: &str) -> Result<(), ShareError> {
            if self.fail {
                return Err(ShareError::Unavailable);
            }
            self.clipboard.borrow_mut().push(text.to_string());
            Ok(())
        }

        fn notify(&self, message: &str) {
            self.notices.borrow_mut().push(message.to_string());
        }

        fn open_window(&self, popup: &PopupWindow) {
            self.windows.borrow_mut().push(popup.clone());
        }
    }

    fn payload() -> SharePayload {
        SharePayload::new(&SiteConfig::default(), "A1", "白帶魚")
    }

    #[test]
    fn test_payload_text() {
        let payload = payload();

        assert_eq!(payload.title, "分享好料：白帶魚");
        assert_eq!(
            payload.text,
            "看看我在「崁仔頂小商人」找到的白帶魚，超新鮮的！ #海鮮 #崁仔頂 #基隆美食"
        );
        assert_eq!(payload.url, "https://yourdomain.com/#product-A1");
    }

    #[tokio::test]
    async fn test_fallback_copies_then_opens_sharer() {
        let sharer = Sharer::new(RecordingEnv::default());
        let payload = payload();

        assert_eq!(sharer.mode(), ShareMode::ClipboardFallback);
        let outcome = sharer.share(&payload).await;

        let env = sharer.env();
        assert_eq!(
            *env.clipboard.borrow(),
            vec![format!("{} {}", payload.text, payload.url)]
        );
        assert_eq!(*env.notices.borrow(), vec![COPIED_NOTICE.to_string()]);
        assert!(env.native_calls.borrow().is_empty());

        let windows = env.windows.borrow();
        assert_eq!(windows.len(), 1);
        assert_eq!(
            windows[0].url,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fyourdomain.com%2F%23product-A1"
        );
        assert_eq!(windows[0].name, "facebook-share-dialog");
        assert_eq!(windows[0].features, "width=800,height=600");
        assert_eq!(outcome, ShareOutcome::Copied(windows[0].clone()));
    }

    #[tokio::test]
    async fn test_clipboard_failure_only_logs() {
        let sharer = Sharer::new(RecordingEnv {
            fail: true,
            ..RecordingEnv::default()
        });

        let outcome = sharer.share(&payload()).await;

        assert_eq!(outcome, ShareOutcome::Failed(ShareError::Unavailable));
        assert!(sharer.env().notices.borrow().is_empty());
        assert!(sharer.env().windows.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_native_share_takes_exactly_one_path() {
        let sharer = Sharer::new(RecordingEnv {
            native: true,
            ..RecordingEnv::default()
        });

        assert_eq!(sharer.mode(), ShareMode::Native);
        assert_eq!(sharer.share(&payload()).await, ShareOutcome::Shared);
        assert_eq!(*sharer.env().native_calls.borrow(), vec![payload()]);
        assert!(sharer.env().clipboard.borrow().is_empty());
        assert!(sharer.env().windows.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_native_failure_is_swallowed() {
        let sharer = Sharer::new(RecordingEnv {
            native: true,
            fail: true,
            ..RecordingEnv::default()
        });

        let outcome = sharer.share(&payload()).await;

        assert!(matches!(outcome, ShareOutcome::Failed(ShareError::Rejected(_))));
        assert!(sharer.env().clipboard.borrow().is_empty());
    }
}
