use dioxus::core::Task;
use dioxus::prelude::*;

/// Debounce delay applied to search inputs.
pub const SEARCH_DEBOUNCE_MS: u32 = 400;

/// Monotonic sequence gate that lets only the most recently armed timer
/// publish. Arm on every keystroke; a sleeping task fires only if its token
/// is still the latest when it wakes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DebounceGate {
    seq: u64,
}

impl DebounceGate {
    pub fn arm(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    pub fn fires(&self, token: u64) -> bool {
        self.seq == token
    }
}

async fn debounce_sleep(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms as u64)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms as u64)).await;
}

/// Search/filter bar — wraps inputs and action buttons in a flex row.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            {children}
        }
    }
}

/// Text input that publishes its value through `on_search` only after the
/// user pauses typing. The pending timer is an explicit `Task` owned by the
/// component, cancelled on every keystroke and on unmount, so rapid
/// keystrokes inside the debounce window produce at most one publish with
/// the final value.
#[component]
pub fn SearchInput(
    on_search: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default = SEARCH_DEBOUNCE_MS)] delay_ms: u32,
) -> Element {
    let mut draft = use_signal(String::new);
    let mut gate = use_signal(DebounceGate::default);
    let mut pending: Signal<Option<Task>> = use_signal(|| None);

    use_drop(move || {
        if let Some(task) = pending.write().take() {
            task.cancel();
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            class: "search-input",
            r#type: "search",
            value: draft(),
            placeholder: placeholder,
            oninput: move |evt: FormEvent| {
                let value = evt.value();
                draft.set(value.clone());
                let token = gate.write().arm();
                if let Some(task) = pending.write().take() {
                    task.cancel();
                }
                let delay = delay_ms;
                let task = spawn(async move {
                    debounce_sleep(delay).await;
                    if gate.read().fires(token) {
                        on_search.call(value);
                    }
                });
                pending.set(Some(task));
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_latest_token_fires() {
        let mut gate = DebounceGate::default();
        let first = gate.arm();
        let second = gate.arm();
        let last = gate.arm();
        assert!(!gate.fires(first));
        assert!(!gate.fires(second));
        assert!(gate.fires(last));
    }

    #[test]
    fn token_stays_live_until_rearmed() {
        let mut gate = DebounceGate::default();
        let token = gate.arm();
        assert!(gate.fires(token));
        gate.arm();
        assert!(!gate.fires(token));
    }

    #[tokio::test]
    async fn rapid_keystrokes_publish_once_with_final_value() {
        use std::sync::{Arc, Mutex};

        // "r", "ru", "rust" typed faster than the debounce window: every
        // keystroke re-arms the gate, so only the final timer publishes.
        let published: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let gate = Arc::new(Mutex::new(DebounceGate::default()));

        let mut handles = Vec::new();
        for text in ["r", "ru", "rust"] {
            let token = gate.lock().unwrap().arm();
            let gate = Arc::clone(&gate);
            let published = Arc::clone(&published);
            handles.push(tokio::spawn(async move {
                tokio::time::sleep(std::time::Duration::from_millis(30)).await;
                if gate.lock().unwrap().fires(token) {
                    published.lock().unwrap().push(text.to_string());
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(*published.lock().unwrap(), vec!["rust".to_string()]);
    }
}
