//! # Dialogs and notifications
//!
//! A [`DialogQueue`] holds every open dialog in display order. A confirm dialog
//! is a pending request: [`DialogQueue::push_confirm`] hands back a receiver that
//! resolves when the user answers, and [`DialogQueue::resolve`] answers it. Alerts
//! carry no request and self-dismiss after the configured timeout.
//!
//! Components reach the queue through the copyable [`Dialogs`] handle provided by
//! [`DialogProvider`]; [`DialogHost`] renders the stack.

use std::collections::HashMap;

use dioxus::prelude::*;
use futures::channel::oneshot;

use crate::i18n::Text;
use crate::icons::{FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaTriangleExclamation, FaXmark};
use crate::preferences::use_language;
use crate::timer::sleep_ms;
use crate::views::ModalOverlay;
use crate::Icon;

pub type DialogId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    Confirm,
    Alert,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    #[default]
    Info,
    Success,
    Error,
    Warning,
}

impl Variant {
    fn class(self) -> &'static str {
        match self {
            Variant::Info => "info",
            Variant::Success => "success",
            Variant::Error => "error",
            Variant::Warning => "warning",
        }
    }
}

/// One open dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct DialogEntry {
    pub id: DialogId,
    pub kind: DialogKind,
    pub variant: Variant,
    pub title: String,
    pub message: String,
}

/// Open dialogs plus the confirm requests still waiting for an answer.
#[derive(Debug, Default)]
pub struct DialogQueue {
    next_id: DialogId,
    entries: Vec<DialogEntry>,
    pending: HashMap<DialogId, oneshot::Sender<bool>>,
}

impl DialogQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: DialogKind, variant: Variant, title: &str, message: &str) -> DialogId {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(DialogEntry {
            id,
            kind,
            variant,
            title: title.to_string(),
            message: message.to_string(),
        });
        id
    }

    /// Open a confirm dialog. The receiver yields the user's answer; it errors
    /// only if the queue is dropped, which callers treat as `false`.
    pub fn push_confirm(&mut self, message: &str, title: &str) -> (DialogId, oneshot::Receiver<bool>) {
        let id = self.push(DialogKind::Confirm, Variant::Warning, title, message);
        let (tx, rx) = oneshot::channel();
        self.pending.insert(id, tx);
        (id, rx)
    }

    pub fn push_alert(&mut self, variant: Variant, message: &str, title: &str) -> DialogId {
        self.push(DialogKind::Alert, variant, title, message)
    }

    /// Remove dialog `id` and answer its request, if it has one. Unknown ids
    /// are ignored.
    pub fn resolve(&mut self, id: DialogId, answer: bool) {
        self.entries.retain(|d| d.id != id);
        if let Some(tx) = self.pending.remove(&id) {
            // The waiting task may be gone already.
            let _ = tx.send(answer);
        }
    }

    /// Dismiss without confirming.
    pub fn close(&mut self, id: DialogId) {
        self.resolve(id, false);
    }

    pub fn entries(&self) -> &[DialogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Await the answer to a confirm request.
pub async fn answer(rx: oneshot::Receiver<bool>) -> bool {
    rx.await.unwrap_or(false)
}

/// Copyable handle to the shared dialog queue.
#[derive(Clone, Copy, PartialEq)]
pub struct Dialogs {
    queue: Signal<DialogQueue>,
    timeout_ms: u64,
}

impl Dialogs {
    /// Ask the user; resolves to `true` only if they pressed Confirm.
    pub async fn confirm(mut self, message: &str, title: &str) -> bool {
        let (_, rx) = self.queue.write().push_confirm(message, title);
        answer(rx).await
    }

    pub fn alert(mut self, variant: Variant, message: &str, title: &str) -> DialogId {
        self.queue.write().push_alert(variant, message, title)
    }

    pub fn success(self, message: &str, title: &str) -> DialogId {
        self.alert(Variant::Success, message, title)
    }

    pub fn error(self, message: &str, title: &str) -> DialogId {
        self.alert(Variant::Error, message, title)
    }

    pub fn resolve(mut self, id: DialogId, answer: bool) {
        self.queue.write().resolve(id, answer);
    }

    pub fn close(mut self, id: DialogId) {
        self.queue.write().close(id);
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }
}

pub fn use_dialogs() -> Dialogs {
    use_context::<Dialogs>()
}

/// Provides [`Dialogs`] to `children` and renders the dialog stack above them.
#[component]
pub fn DialogProvider(timeout_ms: u64, children: Element) -> Element {
    let queue = use_signal(DialogQueue::new);
    use_context_provider(|| Dialogs { queue, timeout_ms });

    rsx! {
        {children}
        DialogHost {}
    }
}

#[component]
fn DialogHost() -> Element {
    let dialogs = use_dialogs();
    let entries = dialogs.queue.read().entries().to_vec();

    if entries.is_empty() {
        return rsx! {};
    }

    // A click outside dismisses the topmost dialog.
    let topmost = entries.last().map(|d| d.id);

    rsx! {
        ModalOverlay {
            on_close: move |_| {
                if let Some(id) = topmost {
                    dialogs.close(id);
                }
            },
            for entry in entries {
                DialogCard { key: "{entry.id}", entry }
            }
        }
    }
}

#[component]
fn DialogCard(entry: DialogEntry) -> Element {
    let dialogs = use_dialogs();
    let language = use_language();
    let id = entry.id;

    // Alerts close themselves; confirms wait for an answer.
    let kind = entry.kind;
    use_future(move || async move {
        if kind == DialogKind::Alert {
            sleep_ms(dialogs.timeout_ms()).await;
            dialogs.close(id);
        }
    });

    let variant = entry.variant;
    let lang = language();
    let tone = variant.class();
    let icon = match variant {
        Variant::Success => rsx! { Icon { icon: FaCircleCheck, width: 20, height: 20 } },
        Variant::Error => rsx! { Icon { icon: FaCircleExclamation, width: 20, height: 20 } },
        Variant::Warning => rsx! { Icon { icon: FaTriangleExclamation, width: 20, height: 20 } },
        Variant::Info => rsx! { Icon { icon: FaCircleInfo, width: 20, height: 20 } },
    };

    rsx! {
        div {
            class: "dialog dialog-{tone}",
            role: "dialog",
            div {
                class: "dialog-header",
                span { class: "dialog-icon {tone}", {icon} }
                h3 { class: "dialog-title", "{entry.title}" }
                button {
                    class: "dialog-close",
                    title: Text::Close.get(lang),
                    onclick: move |_| dialogs.close(id),
                    Icon { icon: FaXmark, width: 16, height: 16 }
                }
            }
            p { class: "dialog-message", "{entry.message}" }
            div {
                class: "dialog-actions",
                if entry.kind == DialogKind::Confirm {
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| dialogs.close(id),
                        {Text::Cancel.get(lang)}
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| dialogs.resolve(id, true),
                        {Text::Confirm.get(lang)}
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| dialogs.close(id),
                        {Text::Ok.get(lang)}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_confirm_resolves_true() {
        let mut queue = DialogQueue::new();
        let (id, rx) = queue.push_confirm("Delete?", "Delete Note");
        assert_eq!(queue.len(), 1);
        queue.resolve(id, true);
        assert!(answer(rx).await);
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn test_close_resolves_false() {
        let mut queue = DialogQueue::new();
        let (id, rx) = queue.push_confirm("Archive?", "Confirm Action");
        queue.close(id);
        assert!(!answer(rx).await);
    }

    #[tokio::test]
    async fn test_dropped_queue_resolves_false() {
        let mut queue = DialogQueue::new();
        let (_, rx) = queue.push_confirm("Leave?", "Discard Changes");
        drop(queue);
        assert!(!answer(rx).await);
    }

    #[tokio::test]
    async fn test_stacked_dialogs_close_independently() {
        let mut queue = DialogQueue::new();
        let (first, rx1) = queue.push_confirm("one", "t");
        let alert = queue.push_alert(Variant::Success, "saved", "Success");
        let (second, rx2) = queue.push_confirm("two", "t");
        assert_eq!(
            queue.entries().iter().map(|d| d.id).collect::<Vec<_>>(),
            vec![first, alert, second]
        );

        queue.resolve(second, true);
        queue.close(alert);
        assert_eq!(queue.entries().len(), 1);
        assert_eq!(queue.entries()[0].id, first);

        queue.resolve(first, false);
        assert!(answer(rx2).await);
        assert!(!answer(rx1).await);
    }

    #[test]
    fn test_alert_has_no_pending_request() {
        let mut queue = DialogQueue::new();
        let id = queue.push_alert(Variant::Error, "Failed", "Error");
        assert_eq!(queue.entries()[0].kind, DialogKind::Alert);
        assert_eq!(queue.entries()[0].variant, Variant::Error);
        queue.resolve(id, true);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut queue = DialogQueue::new();
        queue.push_alert(Variant::Info, "hi", "Information");
        queue.close(999);
        assert_eq!(queue.len(), 1);
    }
}
