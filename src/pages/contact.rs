use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::notification::use_notifier;
use crate::config::MIN_PROBLEM_DESCRIPTION_CHARS;
use crate::leads::{ContactField, ContactForm, ContactSubmission, LeadHandoff, Service, SubmissionMeta};
use crate::pages::form_style::FORM_CSS;
use crate::submission::{use_lead_submitter, FormPhase};
use crate::Route;

#[function_component]
pub fn Contact() -> Html {
    let location = use_location();
    let form = use_state(|| {
        let handoff = location.as_ref().and_then(|l| l.state::<LeadHandoff>());
        ContactForm::from_handoff(handoff.as_deref())
    });
    let notifier = use_notifier();
    let (phase, submit): (FormPhase, Callback<ContactSubmission>) =
        use_lead_submitter("Thank you! We will contact you shortly.");

    let on_field = |field: ContactField| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        }
    };

    let on_input = |field: ContactField| {
        let update = on_field(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(input.value());
        })
    };

    let on_textarea = |field: ContactField| {
        let update = on_field(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            update(input.value());
        })
    };

    let on_service = {
        let update = on_field(ContactField::Service);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            update(select.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !phase.accepts_submit() {
                return;
            }
            match ContactSubmission::from_form(&form, SubmissionMeta::capture()) {
                Ok(submission) => submit.emit(submission),
                Err(err) => notifier.error(err.to_string()),
            }
        })
    };

    let char_count = form.problem_description_len();

    html! {
        <div class="form-page">
            <style>{FORM_CSS}</style>
            <div class="form-shell wide">
                <Link<Route> to={Route::Home} classes="back-link">
                    {"← Back to Home"}
                </Link<Route>>

                <div class="form-card">
                    <div class="form-title">
                        <h1>{"Book a Call"}</h1>
                        <img src="/assets/icon-brain.png" alt="AI Icon" />
                    </div>
                    <p class="form-intro">
                        {"Fill out the form below and we'll get back to you within 24 hours."}
                    </p>

                    <form onsubmit={onsubmit} novalidate={true}>
                        <div class="form-row">
                            <div class="form-field">
                                <label for="fullName">{"Full Name "}<span class="required">{"*"}</span></label>
                                <input
                                    type="text"
                                    id="fullName"
                                    name="fullName"
                                    value={form.full_name.clone()}
                                    oninput={on_input(ContactField::FullName)}
                                />
                            </div>
                            <div class="form-field">
                                <label for="email">{"Email Address "}<span class="required">{"*"}</span></label>
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    value={form.email.clone()}
                                    oninput={on_input(ContactField::Email)}
                                />
                            </div>
                        </div>

                        <div class="form-row">
                            <div class="form-field">
                                <label for="service">{"Service "}<span class="required">{"*"}</span></label>
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
                            <div class="form-field">
                                <label for="companyName">{"Company Name "}<span class="required">{"*"}</span></label>
                                <input
                                    type="text"
                                    id="companyName"
                                    name="companyName"
                                    value={form.company_name.clone()}
                                    oninput={on_input(ContactField::CompanyName)}
                                />
                            </div>
                        </div>

                        <div class="form-field">
                            <label for="problemDescription">
                                {"What problems are you looking to solve? "}<span class="required">{"*"}</span>
                            </label>
                            <textarea
                                id="problemDescription"
                                name="problemDescription"
                                rows="4"
                                value={form.problem_description.clone()}
                                oninput={on_textarea(ContactField::ProblemDescription)}
                            />
                            <p class={classes!("char-count", (char_count >= MIN_PROBLEM_DESCRIPTION_CHARS).then_some("met"))}>
                                {format!("Characters: {}/{} minimum", char_count, MIN_PROBLEM_DESCRIPTION_CHARS)}
                            </p>
                        </div>

                        <div class="form-field">
                            <label for="additionalInfo">{"Additional Information"}</label>
                            <textarea
                                id="additionalInfo"
                                name="additionalInfo"
                                rows="3"
                                value={form.additional_info.clone()}
                                oninput={on_textarea(ContactField::AdditionalInfo)}
                            />
                        </div>

                        <p class="form-note">
                            {"By submitting this form, you agree to our "}
                            <a href="/privacy">{"Privacy Policy"}</a>
                            {". We'll handle your information in accordance with our privacy practices."}
                        </p>

                        <button type="submit" class="button-primary" disabled={!phase.accepts_submit()}>
                            {phase.submit_label("Submit Request")}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
