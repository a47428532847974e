use chrono::Utc;
use leptos::{either::Either, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use crate::{
    config::SiteConfig,
    contact::{ContactForm, ContactStatus, Field, Notice},
    data::PROFILE,
};

#[cfg(feature = "ssr")]
mod relay {
    use std::sync::LazyLock;

    use crate::{config::RelayConfig, contact::EmailJsRelay};

    pub static RELAY_CONFIG: LazyLock<RelayConfig> = LazyLock::new(RelayConfig::from_env);
    pub static RELAY: LazyLock<EmailJsRelay> =
        LazyLock::new(|| EmailJsRelay::new(reqwest::Client::new()));
}

/// Forwards the form to the e-mail relay. Relay failures are logged here and
/// reported to the visitor without detail.
#[server]
pub async fn send_message(
    name: String,
    email: String,
    subject: String,
    message: String,
) -> Result<(), ServerFnError> {
    use crate::contact::submit;

    let form = ContactForm {
        name,
        email,
        subject,
        message,
    };
    match submit(&*relay::RELAY, &relay::RELAY_CONFIG, &form).await {
        Ok(()) => {
            tracing::info!("contact message relayed");
            Ok(())
        }
        Err(e) if e.is_validation() => Err(ServerFnError::new(e.to_string())),
        Err(e) => {
            tracing::error!(error = %e, "contact message was not relayed");
            Err(ServerFnError::new("relay failure"))
        }
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let lifetime = config.notice_lifetime();
    let form = RwSignal::new(ContactForm::default());
    let notice = RwSignal::new(None::<Notice>);
    let sending = RwSignal::new(false);

    let UseTimeoutFnReturn { start, stop, .. } = use_timeout_fn(
        move |_: ()| notice.set(None),
        config.notice_ms as f64,
    );
    let post = move |status: ContactStatus| {
        stop();
        notice.set(Some(Notice::new(status, Utc::now(), lifetime)));
        start(());
    };

    let send = Action::new(move |form: &ContactForm| {
        let form = form.clone();
        async move {
            send_message(form.name, form.email, form.subject, form.message).await
        }
    });

    let post_result = post.clone();
    Effect::new(move |_| {
        let Some(result) = send.value().get() else {
            return;
        };
        sending.set(false);
        match result {
            Ok(()) => {
                form.set(ContactForm::default());
                post_result(ContactStatus::Sent);
            }
            Err(e) => {
                log::warn!("contact submission failed: {e}");
                post_result(ContactStatus::Failed);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let current = form.get_untracked();
        // invalid forms never leave the browser
        if current.validate().is_err() {
            post(ContactStatus::Invalid);
            return;
        }
        sending.set(true);
        send.dispatch(current);
    };

    let field = move |field: Field, label: &'static str, required: bool| {
        let value = move || {
            form.with(|f| match field {
                Field::Name => f.name.clone(),
                Field::Email => f.email.clone(),
                Field::Subject => f.subject.clone(),
                Field::Message => f.message.clone(),
            })
        };
        let input_class = "w-full px-4 py-2 rounded-md border border-white/20 bg-background/60 focus:outline-none focus:ring-2 focus:ring-purple";
        let input = match field {
            Field::Message => Either::Left(view! {
                <textarea
                    name=field.to_string()
                    rows=5
                    class=input_class
                    prop:value=value
                    on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                />
            }),
            _ => Either::Right(view! {
                <input
                    type=if field == Field::Email { "email" } else { "text" }
                    name=field.to_string()
                    class=input_class
                    prop:value=value
                    on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                />
            }),
        };
        view! {
            <label class="block">
                <span class="block text-sm mb-1">
                    {label} {required.then_some(view! { <span class="text-red">" *"</span> })}
                </span>
                {input}
            </label>
        }
    };

    let notice_view = move || {
        notice.get().and_then(|n| {
            let message = n.current(Utc::now())?;
            let class = if n.status().is_error() {
                "text-red border-red/40"
            } else {
                "text-green border-green/40"
            };
            Some(view! {
                <p role="status" class=format!("mt-4 px-4 py-2 rounded-md border {class}")>
                    {message}
                </p>
            })
        })
    };

    view! {
        <div class="grid lg:grid-cols-5 gap-8">
            <div class="lg:col-span-2">
                <h2 class="text-2xl font-bold mb-4">
                    <span class="text-purple">"# "</span>
                    "Get In Touch"
                </h2>
                <p class="text-muted mb-6 leading-relaxed">
                    "Have a project, a dataset or a question? Send a message and I'll get back to you."
                </p>
                <ul class="space-y-2 text-sm">
                    <li>
                        <span class="text-cyan">"email: "</span>
                        <a href=format!("mailto:{}", PROFILE.email) class="hover:underline">
                            {PROFILE.email}
                        </a>
                    </li>
                    <li>
                        <span class="text-cyan">"location: "</span>
                        {PROFILE.location}
                    </li>
                </ul>
            </div>
            <form class="lg:col-span-3 space-y-4" on:submit=on_submit novalidate>
                <div class="grid md:grid-cols-2 gap-4">
                    {field(Field::Name, "Name", true)} {field(Field::Email, "Email", true)}
                </div>
                {field(Field::Subject, "Subject", false)}
                {field(Field::Message, "Message", true)}
                <button
                    type="submit"
                    class="px-5 py-2 rounded-md bg-purple-600 hover:bg-purple-500 disabled:opacity-50 transition-colors"
                    disabled=move || sending.get()
                >
                    {move || if sending.get() { "Sending..." } else { "Send Message" }}
                </button>
                {notice_view}
            </form>
        </div>
    }
}
