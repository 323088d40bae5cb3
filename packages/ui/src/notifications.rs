//! Transient toast notifications for mutation results.

use dioxus::prelude::*;

use crate::debounce::sleep_ms;

/// How long a toast stays on screen before auto-dismissing.
const TOAST_TTL_MS: u64 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast--success",
            ToastLevel::Error => "toast toast--error",
            ToastLevel::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub timestamp: String,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl Notifications {
    pub fn push(&mut self, level: ToastLevel, message: &str) {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn latest_id(&self) -> u64 {
        self.next_id
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

pub fn notify(toasts: &mut Signal<Notifications>, level: ToastLevel, message: &str) {
    toasts.write().push(level, message);
}

/// Renders the toast stack and schedules auto-dismissal for new entries.
#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_notifications();
    let mut scheduled = use_signal(|| 0u64);

    use_effect(move || {
        let pending: Vec<Toast> = toasts()
            .toasts
            .iter()
            .filter(|toast| toast.id > *scheduled.peek())
            .cloned()
            .collect();
        if let Some(max_id) = pending.iter().map(|toast| toast.id).max() {
            scheduled.set(max_id);
        }
        for toast in pending {
            spawn(async move {
                sleep_ms(TOAST_TTL_MS).await;
                toasts.write().dismiss(toast.id);
            });
        }
    });

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts().toasts {
                div {
                    key: "{toast.id}",
                    class: toast.level.class(),
                    span { class: "toast-message", "{toast.message}" }
                    span { class: "toast-time", "{toast.timestamp}" }
                    button {
                        class: "toast-dismiss",
                        onclick: move |_| toasts.write().dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_toast_gets_a_fresh_id() {
        let mut queue = Notifications::default();
        queue.push(ToastLevel::Success, "User created successfully");
        queue.push(ToastLevel::Error, "Failed to create user");
        assert_eq!(queue.toasts.len(), 2);
        assert_ne!(queue.toasts[0].id, queue.toasts[1].id);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut queue = Notifications::default();
        queue.push(ToastLevel::Success, "one");
        queue.push(ToastLevel::Success, "two");
        let first = queue.toasts[0].id;
        queue.dismiss(first);
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].message, "two");
    }
}
