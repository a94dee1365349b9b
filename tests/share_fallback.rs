//! The three share-link control paths: native hand-off, native failure
//! with clipboard fallback, and clipboard-only.

use charisma_quiz::share::{
    share_link, ClipboardSink, NativeShare, ShareError, ShareOutcome,
};

struct RecordingClipboard {
    copied: Vec<String>,
    fail: bool,
}

impl RecordingClipboard {
    fn new() -> Self {
        Self {
            copied: Vec::new(),
            fail: false,
        }
    }
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ShareError> {
        if self.fail {
            return Err(ShareError::Clipboard("no display".to_string()));
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}

fn sink<'a>(
    clipboard: &'a mut RecordingClipboard,
) -> impl FnOnce() -> Result<&'a mut dyn ClipboardSink, ShareError> {
    move || Ok(clipboard as &mut dyn ClipboardSink)
}

fn no_clipboard() -> Result<&'static mut dyn ClipboardSink, ShareError> {
    Err(ShareError::Clipboard("no display".to_string()))
}

struct ScriptedShare {
    accept: bool,
    calls: usize,
}

impl NativeShare for ScriptedShare {
    fn share(&mut self, _title: &str, _text: &str, url: &str) -> Result<(), ShareError> {
        self.calls += 1;
        assert_eq!(url, "https://quiz.example");
        if self.accept {
            Ok(())
        } else {
            Err(ShareError::Native("user cancelled".to_string()))
        }
    }
}

#[test]
fn native_target_takes_the_share() {
    let mut native = ScriptedShare {
        accept: true,
        calls: 0,
    };
    let mut clipboard = RecordingClipboard::new();

    let outcome = share_link(Some(&mut native), sink(&mut clipboard), "https://quiz.example")
        .expect("share succeeds");

    assert_eq!(outcome, ShareOutcome::Shared);
    assert_eq!(native.calls, 1);
    assert!(clipboard.copied.is_empty());
}

#[test]
fn native_share_works_without_a_clipboard() {
    let mut native = ScriptedShare {
        accept: true,
        calls: 0,
    };

    let outcome = share_link(Some(&mut native), no_clipboard, "https://quiz.example")
        .expect("share succeeds");

    assert_eq!(outcome, ShareOutcome::Shared);
    assert_eq!(native.calls, 1);
}

#[test]
fn cancelled_native_share_falls_back_to_clipboard() {
    let mut native = ScriptedShare {
        accept: false,
        calls: 0,
    };
    let mut clipboard = RecordingClipboard::new();

    let outcome = share_link(Some(&mut native), sink(&mut clipboard), "https://quiz.example")
        .expect("fallback succeeds");

    assert_eq!(outcome, ShareOutcome::Copied);
    assert_eq!(native.calls, 1);
    assert_eq!(clipboard.copied, vec!["https://quiz.example".to_string()]);
}

#[test]
fn no_native_target_copies_directly() {
    let mut clipboard = RecordingClipboard::new();

    let outcome = share_link(None, sink(&mut clipboard), "https://quiz.example")
        .expect("copy succeeds");

    assert_eq!(outcome, ShareOutcome::Copied);
    assert_eq!(clipboard.copied, vec!["https://quiz.example".to_string()]);
}

#[test]
fn cancelled_native_share_without_clipboard_surfaces_the_error() {
    let mut native = ScriptedShare {
        accept: false,
        calls: 0,
    };

    let err = share_link(Some(&mut native), no_clipboard, "https://quiz.example").unwrap_err();
    assert_eq!(native.calls, 1);
    assert!(matches!(err, ShareError::Clipboard(_)));
}

#[test]
fn clipboard_failure_surfaces() {
    let mut clipboard = RecordingClipboard::new();
    clipboard.fail = true;

    let err = share_link(None, sink(&mut clipboard), "https://quiz.example").unwrap_err();
    assert!(matches!(err, ShareError::Clipboard(_)));
}
