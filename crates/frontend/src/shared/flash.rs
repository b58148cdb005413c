//! Inline alerts that clear themselves, and the browser confirm dialog.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const FLASH_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    fn class(&self) -> &'static str {
        match self {
            FlashKind::Success => "alert alert--success",
            FlashKind::Error => "alert alert--error",
        }
    }
}

/// One alert slot. A newer message replaces the current one and owns the
/// dismissal timer.
#[derive(Debug, Clone, Copy)]
pub struct Flash {
    message: RwSignal<Option<(FlashKind, String)>>,
    generation: RwSignal<u64>,
}

impl Flash {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(FlashKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(FlashKind::Error, text.into());
    }

    pub fn clear(&self) {
        self.message.set(None);
    }

    fn show(&self, kind: FlashKind, text: String) {
        self.message.set(Some((kind, text)));
        self.generation.update(|g| *g += 1);
        let mine = self.generation.get_untracked();
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(FLASH_MS).await;
            if this.generation.get_untracked() == mine {
                this.message.set(None);
            }
        });
    }
}

impl Default for Flash {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn FlashMessage(flash: Flash) -> impl IntoView {
    move || {
        flash
            .message
            .get()
            .map(|(kind, text)| view! { <div class=kind.class()>{text}</div> })
    }
}

/// Browser confirm dialog; false when no window is available
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
