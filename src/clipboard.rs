//! Copying converted output to the system clipboard.

/// Errors reported by a clipboard backend.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is not available on this platform")]
    Unsupported,

    #[cfg(windows)]
    #[error("clipboard operation failed: {0}")]
    Win(#[from] windows::core::Error),
}

/// Destination for copied text.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard. Only Windows has a backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    #[cfg(windows)]
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        win::set_unicode_text(text)
    }

    #[cfg(not(windows))]
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unsupported)
    }
}

#[cfg(windows)]
mod win {
    use windows::Win32::{
        Foundation::{GetLastError, HANDLE, HGLOBAL},
        System::{
            DataExchange::{CloseClipboard, EmptyClipboard, OpenClipboard, SetClipboardData},
            Memory::{GMEM_MOVEABLE, GlobalAlloc, GlobalFree, GlobalLock, GlobalUnlock},
        },
    };

    use windows::core::{Error, HRESULT};

    use super::ClipboardError;

    /// Win32 clipboard format id for UTF 16 text (`CF_UNICODETEXT`).
    const CF_UNICODETEXT_ID: u32 = 13;

    /// Keeps the clipboard open for the current process; closes it on drop.
    struct ClipboardGuard;

    impl ClipboardGuard {
        fn open() -> windows::core::Result<Self> {
            unsafe { OpenClipboard(None)? };
            Ok(Self)
        }
    }

    impl Drop for ClipboardGuard {
        fn drop(&mut self) {
            unsafe {
                let _ = CloseClipboard();
            }
        }
    }

    /// Frees the global block unless ownership moved to the clipboard.
    struct GlobalMem {
        handle: HGLOBAL,
        owned: bool,
    }

    impl GlobalMem {
        fn new(handle: HGLOBAL) -> Self {
            Self {
                handle,
                owned: true,
            }
        }

        fn disarm(&mut self) {
            self.owned = false;
        }
    }

    impl Drop for GlobalMem {
        fn drop(&mut self) {
            if self.owned && !self.handle.0.is_null() {
                unsafe {
                    let _ = GlobalFree(Some(self.handle));
                }
            }
        }
    }

    /// Replaces clipboard content with `text` as `CF_UNICODETEXT`.
    ///
    /// After a successful `SetClipboardData` the system owns the `HGLOBAL`.
    pub(super) fn set_unicode_text(text: &str) -> Result<(), ClipboardError> {
        let _clip = ClipboardGuard::open()?;

        let mut units: Vec<u16> = text.encode_utf16().collect();
        units.push(0);
        let bytes = units.len() * std::mem::size_of::<u16>();

        unsafe {
            EmptyClipboard()?;

            let hmem = GlobalAlloc(GMEM_MOVEABLE, bytes)?;
            let mut mem = GlobalMem::new(hmem);

            let ptr = GlobalLock(hmem).cast::<u16>();
            if ptr.is_null() {
                let err = Error::from_hresult(HRESULT::from_win32(GetLastError().0));
                return Err(err.into());
            }
            std::ptr::copy_nonoverlapping(units.as_ptr(), ptr, units.len());
            let _ = GlobalUnlock(hmem);

            SetClipboardData(CF_UNICODETEXT_ID, Some(HANDLE(hmem.0)))?;
            mem.disarm();
        }

        tracing::debug!(units = bytes / 2, "clipboard text set");
        Ok(())
    }
}
