use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::use_unmount;

use crate::analytics::Tracker;
use crate::campaign::Campaign;
use crate::funnel::flow::{FailurePolicy, Phase};
use crate::funnel::lead::Field;
use crate::funnel::scheduler::BrowserScheduler;
use crate::funnel::session::LeadSession;
use crate::store::rest::RestStore;

pub const FORM_ANCHOR: &str = "registration-form";

#[derive(Properties, PartialEq)]
pub struct RegistrationFormProps {
    pub campaign: Campaign,
    #[prop_or_default]
    pub policy: FailurePolicy,
}

#[function_component(RegistrationForm)]
pub fn registration_form(props: &RegistrationFormProps) -> Html {
    let tracker = use_context::<Tracker>().unwrap_or_default();
    let force_update = use_force_update();

    // One session per mounted form; the store client and policy are fixed for its lifetime.
    let session = {
        let campaign = props.campaign.clone();
        let policy = props.policy;
        use_memo(
            move |_| {
                let on_change: Rc<dyn Fn()> = Rc::new(move || force_update.force_update());
                LeadSession::new(
                    campaign,
                    RestStore::from_env(),
                    BrowserScheduler,
                    tracker,
                    policy,
                    on_change,
                )
            },
            (),
        )
    };

    {
        let session = session.clone();
        use_unmount(move || session.teardown());
    }

    let onsubmit = {
        let session = session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let session = session.clone();
            spawn_local(async move {
                let _ = session.submit().await;
            });
        })
    };

    let edit = |field: Field| {
        let session = session.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            session.edit(field, input.value());
        })
    };

    let flow = session.snapshot();
    let copy = &session.campaign().copy;
    let busy = !flow.accepts_input();

    let body = if flow.is_submitted() {
        html! {
            <div class="registration__success">
                <div class="registration__success-icon">{"✅"}</div>
                <h3>{copy.success_title}</h3>
                <p>{copy.success_body}</p>
            </div>
        }
    } else {
        html! {
            <form class="registration__form" onsubmit={onsubmit}>
                if let Phase::Rejected(reason) = flow.phase() {
                    <div class="registration__error">
                        {format!("{} {}", copy.error_prefix, reason)}
                    </div>
                }
                <input
                    type="text"
                    name="name"
                    placeholder={copy.name_placeholder}
                    value={flow.form().name.clone()}
                    oninput={edit(Field::Name)}
                    required=true
                    disabled={busy}
                />
                <input
                    type="email"
                    name="email"
                    placeholder={copy.email_placeholder}
                    value={flow.form().email.clone()}
                    oninput={edit(Field::Email)}
                    required=true
                    disabled={busy}
                />
                <button type="submit" class="registration__submit" disabled={busy}>
                    {flow.button_label(copy)}
                </button>
            </form>
        }
    };

    html! {
        <section id={FORM_ANCHOR} class="registration">
            <div class="registration__inner">
                <div class="registration__header">
                    <h2>{copy.form_title}</h2>
                    <p>{copy.form_subtitle}</p>
                </div>
                {body}
                <div class="registration__privacy">
                    <p>{copy.privacy_note}</p>
                </div>
            </div>
        </section>
    }
}
