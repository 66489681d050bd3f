//! Toast renderer for `NoticeState`.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

#[cfg(feature = "hydrate")]
const DISMISS_AFTER_MS: u32 = 4000;

#[component]
pub fn NoticeToast() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    // Auto-dismiss each notice by id so a newer one is not cut short.
    Effect::new(move || {
        let Some(id) = notices.with(|n| n.current().map(|c| c.id)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(DISMISS_AFTER_MS).await;
            notices.update(|n| n.dismiss(id));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        {move || {
            notices
                .get()
                .current()
                .cloned()
                .map(|notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => "toast toast--success",
                        NoticeKind::Error => "toast toast--error",
                    };
                    let id = notice.id;
                    view! {
                        <div class=class role="status" on:click=move |_| notices.update(|n| n.dismiss(id))>
                            {notice.message}
                        </div>
                    }
                })
        }}
    }
}
