use thiserror::Error;

/// How long the "copied" hint stays up after a successful copy.
pub const COPY_RESET_MS: f64 = 1500.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("No clipboard available")]
    Unavailable,
    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
    #[error("Couldn't prepare copy target: {0}")]
    Dom(String),
}

/// Which technique ended up putting the text on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPath {
    AsyncApi,
    Selection,
}

/// A place text can be copied to.
///
/// The async write is the platform clipboard API, only usable in a secure
/// context. The legacy write selects a transient text field and issues a
/// synchronous copy command.
#[allow(async_fn_in_trait)]
pub trait ClipboardBackend {
    fn async_api_available(&self) -> bool;
    async fn write_async(&self, text: &str) -> Result<(), ClipboardError>;
    fn write_legacy(&self, text: &str) -> Result<(), ClipboardError>;
}

pub async fn copy_text<B: ClipboardBackend>(
    backend: &B,
    text: &str,
) -> Result<CopyPath, ClipboardError> {
    if backend.async_api_available() {
        match backend.write_async(text).await {
            Ok(()) => return Ok(CopyPath::AsyncApi),
            Err(err) => log::debug!("{err}, falling back to selection copy"),
        }
    }
    backend.write_legacy(text).map(|_| CopyPath::Selection)
}

#[cfg(feature = "hydrate")]
pub async fn copy_to_clipboard(text: &str) -> Result<CopyPath, ClipboardError> {
    copy_text(&browser::BrowserClipboard, text).await
}

#[cfg(not(feature = "hydrate"))]
pub async fn copy_to_clipboard(_text: &str) -> Result<CopyPath, ClipboardError> {
    Err(ClipboardError::Unavailable)
}

/// Transient feedback for the copy control: `Idle -> Copied -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyIndicator {
    #[default]
    Idle,
    Copied,
}

impl CopyIndicator {
    pub fn after_copy<T>(result: &Result<T, ClipboardError>) -> Self {
        if result.is_ok() {
            CopyIndicator::Copied
        } else {
            CopyIndicator::Idle
        }
    }

    pub fn is_copied(self) -> bool {
        self == CopyIndicator::Copied
    }

    pub fn hint(self) -> &'static str {
        match self {
            CopyIndicator::Idle => "(copy)",
            CopyIndicator::Copied => "(copied)",
        }
    }
}

/// Indicator plus the ticket of the one reset that may clear it.
///
/// Every successful copy issues a new ticket; a reset carrying an older
/// ticket is stale and leaves the indicator alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyFeedback {
    indicator: CopyIndicator,
    ticket: u64,
}

impl CopyFeedback {
    pub fn indicator(&self) -> CopyIndicator {
        self.indicator
    }

    /// Applies a copy result. Returns the ticket to schedule a reset with,
    /// or `None` when nothing needs resetting.
    pub fn record<T>(&mut self, result: &Result<T, ClipboardError>) -> Option<u64> {
        self.indicator = CopyIndicator::after_copy(result);
        if self.indicator.is_copied() {
            self.ticket += 1;
            Some(self.ticket)
        } else {
            None
        }
    }

    /// Returns `true` if this reset cleared the indicator.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.ticket || !self.indicator.is_copied() {
            return false;
        }
        self.indicator = CopyIndicator::Idle;
        true
    }
}

/// Outcome of `execCommand("copy")`. Only a thrown error counts as failure;
/// browsers report `false` inconsistently even when the text was copied.
pub fn copy_command_outcome(res: Result<bool, String>) -> Result<(), ClipboardError> {
    match res {
        Ok(true) => Ok(()),
        Ok(false) => {
            log::debug!("copy command reported false, assuming the selection was copied");
            Ok(())
        }
        Err(e) => Err(ClipboardError::Rejected(e)),
    }
}

#[cfg(feature = "hydrate")]
pub use browser::BrowserClipboard;

#[cfg(feature = "hydrate")]
mod browser {
    use leptos::prelude::{document, window};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{HtmlDocument, HtmlTextAreaElement};

    use super::{copy_command_outcome, ClipboardBackend, ClipboardError};

    fn describe(err: JsValue) -> String {
        err.as_string().unwrap_or_else(|| format!("{err:?}"))
    }

    pub struct BrowserClipboard;

    impl ClipboardBackend for BrowserClipboard {
        fn async_api_available(&self) -> bool {
            let window = window();
            // navigator.clipboard is undefined outside secure contexts on most browsers
            let has_api = js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("clipboard"))
                .unwrap_or(false);
            has_api && window.is_secure_context()
        }

        async fn write_async(&self, text: &str) -> Result<(), ClipboardError> {
            let promise = window().navigator().clipboard().write_text(text);
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Rejected(describe(e)))
        }

        fn write_legacy(&self, text: &str) -> Result<(), ClipboardError> {
            let document = document();
            let body = document
                .body()
                .ok_or_else(|| ClipboardError::Dom("document has no body".to_string()))?;
            let html_doc = document
                .dyn_ref::<HtmlDocument>()
                .ok_or_else(|| ClipboardError::Dom("not an HTML document".to_string()))?;
            let area = document
                .create_element("textarea")
                .map_err(|e| ClipboardError::Dom(describe(e)))?
                .dyn_into::<HtmlTextAreaElement>()
                .map_err(|_| ClipboardError::Dom("textarea has the wrong type".to_string()))?;

            area.set_value(text);
            let style = area.style();
            let placed = area
                .set_attribute("readonly", "")
                .and_then(|_| style.set_property("position", "fixed"))
                .and_then(|_| style.set_property("left", "-9999px"))
                .and_then(|_| body.append_child(&area).map(|_| ()));
            placed.map_err(|e| ClipboardError::Dom(describe(e)))?;

            let copied = area.focus().and_then(|_| {
                area.select();
                html_doc.exec_command("copy")
            });
            // the field must not outlive the copy, whatever happened
            if let Err(e) = body.remove_child(&area) {
                log::warn!("couldn't remove copy field: {}", describe(e));
            }

            copy_command_outcome(copied.map_err(describe))
        }
    }
}
