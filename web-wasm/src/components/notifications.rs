//! トースト通知

use call_analyzer_common::notify::{Toast, ToastStage};
use leptos::prelude::*;

#[component]
pub fn Notifications(toasts: Signal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="notification-stack">
            <For
                each=move || toasts.get()
                key=|toast| (toast.id, toast.stage == ToastStage::Leaving)
                children=|toast| {
                    view! {
                        <div class=toast.class() style=toast.style()>
                            <div class="notification-content">
                                <i class=toast.icon_class()></i>
                                <span>{toast.message.clone()}</span>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
