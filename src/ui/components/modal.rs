// src/ui/components/modal.rs - Modal dialog with focus trap, and the confirm dialog built on it

use dioxus::prelude::*;

use crate::table::ButtonVariant;

use super::Button;

/// Elements Tab may land on inside a dialog
const FOCUSABLE: &str = "a[href], button:not([disabled]), input:not([disabled]), select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex='-1'])";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl ModalSize {
    fn class(&self) -> &'static str {
        match self {
            Self::Small => "sm:max-w-sm",
            Self::Medium => "sm:max-w-lg",
            Self::Large => "sm:max-w-2xl",
            Self::ExtraLarge => "sm:max-w-4xl",
        }
    }
}

/// Index Tab (or Shift+Tab with `backwards`) moves focus to among `count`
/// focusable elements, wrapping at both ends. Focus outside the list enters
/// at the first element, or the last when going backwards.
pub fn next_focus_index(count: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let next = match current.filter(|&i| i < count) {
        None if backwards => count - 1,
        None => 0,
        Some(0) if backwards => count - 1,
        Some(i) if backwards => i - 1,
        Some(i) => (i + 1) % count,
    };
    Some(next)
}

/// Moves focus within the dialog `dialog_id`
async fn cycle_focus(dialog_id: String, backwards: bool) {
    let focus_query = format!(
        r#"const root = document.getElementById("{dialog_id}");
if (!root) {{ return [0, -1]; }}
const items = Array.from(root.querySelectorAll("{FOCUSABLE}")).filter(e => e.offsetParent !== null);
return [items.length, items.indexOf(document.activeElement)];"#
    );

    let (count, active) = match document::eval(&focus_query).join::<Vec<i64>>().await {
        Ok(found) if found.len() == 2 => (found[0].max(0) as usize, found[1]),
        Ok(_) => return,
        Err(e) => {
            tracing::debug!("Focus query failed: {:?}", e);
            return;
        }
    };

    let current = usize::try_from(active).ok();
    let Some(target) = next_focus_index(count, current, backwards) else {
        return;
    };

    let focus = format!(
        r#"const root = document.getElementById("{dialog_id}");
if (root) {{
  const items = Array.from(root.querySelectorAll("{FOCUSABLE}")).filter(e => e.offsetParent !== null);
  if (items[{target}]) {{ items[{target}].focus(); }}
}}"#
    );
    let _ = document::eval(&focus);
}

/// Focuses the first focusable element, or the dialog itself
fn focus_first(dialog_id: &str) {
    let script = format!(
        r#"const root = document.getElementById("{dialog_id}");
if (root) {{
  const first = root.querySelector("{FOCUSABLE}");
  (first || root).focus();
}}"#
    );
    let _ = document::eval(&script);
}

/// Modal dialog. Escape and a click on the overlay ask to close through
/// `on_open_change(false)` unless `prevent_close` is set; Tab and Shift+Tab
/// stay inside the dialog.
#[component]
pub fn Modal(
    open: bool,
    on_open_change: EventHandler<bool>,
    #[props(default = "".to_string())] title: String,
    #[props(default)] size: ModalSize,
    #[props(default = true)] close_on_escape: bool,
    #[props(default = true)] close_on_click_outside: bool,
    #[props(default = false)] prevent_close: bool,
    #[props(default = None)] footer: Option<Element>,
    children: Element,
) -> Element {
    let dialog_id = use_hook(|| format!("modal-{}", uuid::Uuid::new_v4().simple()));

    use_effect({
        let dialog_id = dialog_id.clone();
        use_reactive!(|(open,)| {
            if open {
                focus_first(&dialog_id);
            }
        })
    });

    if !open {
        return rsx! {};
    }

    let request_close = move || {
        if !prevent_close {
            on_open_change.call(false);
        }
    };

    let title_id = format!("{}-title", dialog_id);
    let keydown_id = dialog_id.clone();

    rsx! {
        div {
            class: "fixed inset-0 z-50 overflow-y-auto",

            // Backdrop
            div {
                class: "fixed inset-0 bg-gray-500/75 dark:bg-black/70 transition-opacity",
                onclick: move |_| {
                    if close_on_click_outside {
                        request_close();
                    }
                }
            }

            div {
                class: "pointer-events-none flex min-h-full items-end justify-center p-4 text-center sm:items-center sm:p-0",
                div {
                    id: "{dialog_id}",
                    role: "dialog",
                    aria_modal: "true",
                    aria_labelledby: "{title_id}",
                    tabindex: "-1",
                    class: format!(
                        "pointer-events-auto relative w-full transform overflow-hidden rounded-lg bg-white dark:bg-gray-800 text-left shadow-xl transition-all sm:my-8 {}",
                        size.class()
                    ),
                    onkeydown: move |evt: KeyboardEvent| {
                        match evt.key() {
                            Key::Escape => {
                                if close_on_escape {
                                    evt.prevent_default();
                                    request_close();
                                }
                            }
                            Key::Tab => {
                                evt.prevent_default();
                                let backwards = evt.modifiers().shift();
                                spawn(cycle_focus(keydown_id.clone(), backwards));
                            }
                            _ => {}
                        }
                    },

                    if !title.is_empty() {
                        div {
                            class: "flex items-start justify-between px-4 pt-5 sm:px-6",
                            h3 {
                                id: "{title_id}",
                                class: "text-lg font-medium leading-6 text-gray-900 dark:text-gray-100",
                                "{title}"
                            }
                            button {
                                r#type: "button",
                                class: "rounded-md text-gray-400 hover:text-gray-600 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-40",
                                disabled: prevent_close,
                                onclick: move |_| request_close(),
                                span { class: "sr-only", "Close" }
                                "✕"
                            }
                        }
                    }

                    div {
                        class: "px-4 pb-4 pt-5 sm:p-6",
                        {children}
                    }

                    if let Some(footer) = footer {
                        div {
                            class: "flex justify-end gap-3 bg-gray-50 dark:bg-gray-900 px-4 py-3 sm:px-6",
                            {footer}
                        }
                    }
                }
            }
        }
    }
}

/// Yes/no confirmation. With `with_reason` an optional free-text reason is
/// collected and handed to `on_confirm`.
#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    message: String,
    on_confirm: EventHandler<Option<String>>,
    on_cancel: EventHandler<()>,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    #[props(default = false)] danger: bool,
    #[props(default = false)] with_reason: bool,
    #[props(default = "Reason (optional)".to_string())] reason_label: String,
    #[props(default = false)] busy: bool,
) -> Element {
    let mut reason = use_signal(String::new);
    let confirm_variant = if danger {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };

    let confirm = move |_| {
        let text = reason.peek().trim().to_string();
        let given = if with_reason && !text.is_empty() {
            Some(text)
        } else {
            None
        };
        on_confirm.call(given);
        reason.set(String::new());
    };

    let cancel = move |_| {
        reason.set(String::new());
        on_cancel.call(());
    };

    rsx! {
        Modal {
            open: open,
            on_open_change: move |now_open: bool| {
                if !now_open {
                    reason.set(String::new());
                    on_cancel.call(());
                }
            },
            title: title,
            size: ModalSize::Small,
            prevent_close: busy,
            footer: rsx! {
                Button {
                    variant: ButtonVariant::Secondary,
                    disabled: busy,
                    onclick: cancel,
                    "{cancel_label}"
                }
                Button {
                    variant: confirm_variant,
                    loading: busy,
                    onclick: confirm,
                    "{confirm_label}"
                }
            },

            p { class: "text-sm text-gray-600 dark:text-gray-300", "{message}" }

            if with_reason {
                div { class: "mt-4",
                    label {
                        r#for: "confirm-reason",
                        class: "block text-sm font-medium text-gray-700 dark:text-gray-200",
                        "{reason_label}"
                    }
                    textarea {
                        id: "confirm-reason",
                        class: "mt-1 block w-full rounded-md border-gray-300 shadow-sm sm:text-sm dark:bg-gray-900 dark:border-gray-600",
                        rows: "3",
                        disabled: busy,
                        value: "{reason}",
                        oninput: move |evt: FormEvent| reason.set(evt.value()),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_wraps_forward() {
        assert_eq!(next_focus_index(3, Some(0), false), Some(1));
        assert_eq!(next_focus_index(3, Some(2), false), Some(0));
    }

    #[test]
    fn shift_tab_wraps_backward() {
        assert_eq!(next_focus_index(3, Some(2), true), Some(1));
        assert_eq!(next_focus_index(3, Some(0), true), Some(2));
    }

    #[test]
    fn focus_from_outside_enters_at_an_end() {
        assert_eq!(next_focus_index(4, None, false), Some(0));
        assert_eq!(next_focus_index(4, None, true), Some(3));
        assert_eq!(next_focus_index(4, Some(9), false), Some(0));
    }

    #[test]
    fn nothing_to_focus() {
        assert_eq!(next_focus_index(0, None, false), None);
        assert_eq!(next_focus_index(1, Some(0), false), Some(0));
        assert_eq!(next_focus_index(1, Some(0), true), Some(0));
    }
}
