use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::notification::use_notifier;
use crate::leads::{InitializeField, InitializeForm, InitializeSubmission, LeadHandoff, Service, SubmissionMeta};
use crate::pages::form_style::FORM_CSS;
use crate::submission::{use_lead_submitter, FormPhase};
use crate::Route;

#[function_component]
pub fn Initialize() -> Html {
    let location = use_location();
    // Email typed on the landing page, if any.
    let form = use_state(|| {
        let handoff = location.as_ref().and_then(|l| l.state::<LeadHandoff>());
        InitializeForm::from_handoff(handoff.as_deref())
    });
    let notifier = use_notifier();
    let (phase, submit): (FormPhase, Callback<InitializeSubmission>) =
        use_lead_submitter("Thank you for your interest!");

    let on_input = |field: InitializeField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(field, input.value());
            form.set(next);
        })
    };

    let on_service = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.set(InitializeField::Service, select.value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !phase.accepts_submit() {
                return;
            }
            match InitializeSubmission::from_form(&form, SubmissionMeta::capture()) {
                Ok(submission) => submit.emit(submission),
                Err(err) => notifier.error(err.to_string()),
            }
        })
    };

    html! {
        <div class="form-page">
            <style>{FORM_CSS}</style>
            <div class="form-shell">
                <Link<Route> to={Route::Home} classes="back-link">
                    {"← Back to Home"}
                </Link<Route>>

                <div class="form-card">
                    <div class="form-title">
                        <h1>{"Initialize Your Account"}</h1>
                        <img src="/assets/icon-brain.png" alt="AI Icon" />
                    </div>
                    <p class="form-intro">
                        {"Please provide your basic information to get started."}
                    </p>

                    <form onsubmit={onsubmit} novalidate={true}>
                        <div class="form-field">
                            <label for="name">{"Name "}<span class="required">{"*"}</span></label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                value={form.name.clone()}
                                oninput={on_input(InitializeField::Name)}
                            />
                        </div>

                        <div class="form-field">
                            <label for="email">{"Email Address "}<span class="required">{"*"}</span></label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                value={form.email.clone()}
                                oninput={on_input(InitializeField::Email)}
                            />
                        </div>

                        <div class="form-field">
                            <label for="service">{"Type of Service "}<span class="required">{"*"}</span></label>
                            <select id="service" name="service" onchange={on_service}>
                                { for Service::ALL.iter().map(|service| html! {
                                    <option
                                        key={service.as_str()}
                                        value={service.as_str()}
                                        selected={*service == form.service}
                                    >
                                        {service.as_str()}
                                    </option>
                                }) }
                            </select>
                        </div>

                        <button type="submit" class="button-primary" disabled={!phase.accepts_submit()}>
                            {phase.submit_label("Submit")}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
