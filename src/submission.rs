//! Submit flow shared by both lead forms: `Idle -> Submitting -> Succeeded`
//! on a 2xx, back to `Idle` on anything else.

use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info};
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::notification::use_notifier;
use crate::config::{self, REDIRECT_DELAY_MS};
use crate::timers::{BrowserScheduler, Scheduler};
use crate::webhook::{BrowserTransport, SubmissionError, Transport, Webhook};
use crate::Route;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

impl FormPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormPhase::Submitting)
    }

    /// Only an idle form takes a new submit. After a success the form waits
    /// for its redirect.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, FormPhase::Idle)
    }

    pub fn submit_label(&self, idle_label: &'static str) -> &'static str {
        if self.is_submitting() {
            "Submitting..."
        } else {
            idle_label
        }
    }

    /// Where an attempt lands once the webhook has answered. The submitting
    /// state never outlives the attempt.
    pub fn settle(outcome: &Result<(), SubmissionError>) -> FormPhase {
        match outcome {
            Ok(()) => FormPhase::Succeeded,
            Err(_) => FormPhase::Idle,
        }
    }
}

struct SubmitState<H> {
    phase: FormPhase,
    detached: bool,
    redirect: Option<H>,
}

/// One form's submissions: a single request at a time, then the redirect home
/// `REDIRECT_DELAY_MS` after a success.
pub struct LeadSubmitter<T = BrowserTransport, S = BrowserScheduler>
where
    T: Transport,
    S: Scheduler,
{
    webhook: Webhook<T>,
    scheduler: S,
    on_redirect: Rc<dyn Fn()>,
    state: RefCell<SubmitState<S::Handle>>,
}

impl<T: Transport, S: Scheduler> LeadSubmitter<T, S> {
    pub fn new(webhook: Webhook<T>, scheduler: S, on_redirect: impl Fn() + 'static) -> Self {
        Self {
            webhook,
            scheduler,
            on_redirect: Rc::new(on_redirect),
            state: RefCell::new(SubmitState {
                phase: FormPhase::Idle,
                detached: false,
                redirect: None,
            }),
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.state.borrow().phase
    }

    pub fn is_detached(&self) -> bool {
        self.state.borrow().detached
    }

    /// Posts a validated payload. Resolves to `None` without touching the
    /// network when the form is not idle.
    pub async fn submit<P: Serialize>(&self, payload: &P) -> Option<Result<(), SubmissionError>> {
        {
            let mut state = self.state.borrow_mut();
            if state.detached || !state.phase.accepts_submit() {
                info!("Form is {:?}, ignoring submit", state.phase);
                return None;
            }
            state.phase = FormPhase::Submitting;
        }

        info!("Submitting lead to webhook");
        let outcome = self.webhook.deliver(payload).await;
        match &outcome {
            Ok(()) => info!("Lead submitted"),
            Err(e) => error!("Submission error: {}", e),
        }

        let mut state = self.state.borrow_mut();
        state.phase = FormPhase::settle(&outcome);
        if outcome.is_ok() && !state.detached {
            let on_redirect = self.on_redirect.clone();
            state.redirect = Some(
                self.scheduler
                    .schedule(REDIRECT_DELAY_MS, Box::new(move || on_redirect())),
            );
        }
        Some(outcome)
    }

    /// The owning view is gone: drop any pending redirect and schedule no
    /// new ones.
    pub fn detach(&self) {
        let pending = {
            let mut state = self.state.borrow_mut();
            state.detached = true;
            state.redirect.take()
        };
        drop(pending);
    }
}

/// Returns the current phase and a callback that posts an already validated
/// payload to the webhook, raising the matching toast once it resolves.
#[hook]
pub fn use_lead_submitter<P: Serialize + 'static>(
    success_message: &'static str,
) -> (FormPhase, Callback<P>) {
    let phase = use_state(FormPhase::default);
    let notifier = use_notifier();
    let navigator = use_navigator();
    let submitter = use_memo(
        move |_| {
            LeadSubmitter::new(
                Webhook::new(config::get_webhook_url()),
                BrowserScheduler,
                move || {
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::Home);
                    }
                },
            )
        },
        (),
    );

    {
        let submitter = submitter.clone();
        use_effect_with_deps(move |_| move || submitter.detach(), ());
    }

    let submit = {
        let phase = phase.clone();
        Callback::from(move |payload: P| {
            if !submitter.phase().accepts_submit() {
                return;
            }
            phase.set(FormPhase::Submitting);

            let phase = phase.clone();
            let notifier = notifier.clone();
            let submitter = submitter.clone();
            spawn_local(async move {
                let Some(outcome) = submitter.submit(&payload).await else {
                    return;
                };
                match outcome {
                    Ok(()) => notifier.success(success_message),
                    Err(e) => notifier.error(e.user_message()),
                }
                if !submitter.is_detached() {
                    phase.set(submitter.phase());
                }
            });
        })
    };

    (*phase, submit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use futures::channel::oneshot;
    use futures::executor::block_on;
    use serde_json::json;

    use crate::timers::manual::ManualScheduler;

    struct StubTransport {
        posts: Rc<Cell<usize>>,
        reply: Result<u16, String>,
        hold: RefCell<Option<oneshot::Receiver<()>>>,
    }

    impl Transport for StubTransport {
        async fn post_json(&self, _url: &str, _body: String) -> Result<u16, String> {
            self.posts.set(self.posts.get() + 1);
            let hold = self.hold.borrow_mut().take();
            if let Some(hold) = hold {
                let _ = hold.await;
            }
            self.reply.clone()
        }
    }

    struct Harness {
        submitter: LeadSubmitter<StubTransport, ManualScheduler>,
        scheduler: ManualScheduler,
        posts: Rc<Cell<usize>>,
        redirects: Rc<Cell<usize>>,
    }

    fn harness(reply: Result<u16, String>, hold: Option<oneshot::Receiver<()>>) -> Harness {
        let posts = Rc::new(Cell::new(0));
        let redirects = Rc::new(Cell::new(0));
        let scheduler = ManualScheduler::default();
        let transport = StubTransport {
            posts: posts.clone(),
            reply,
            hold: RefCell::new(hold),
        };
        let counter = redirects.clone();
        let submitter = LeadSubmitter::new(
            Webhook::with_transport("https://hooks.test/lead", transport),
            scheduler.clone(),
            move || counter.set(counter.get() + 1),
        );
        Harness {
            submitter,
            scheduler,
            posts,
            redirects,
        }
    }

    fn lead() -> serde_json::Value {
        json!({ "name": "Grace", "email": "grace@navy.mil", "service": "AI Agent" })
    }

    #[test]
    fn idle_by_default() {
        assert_eq!(FormPhase::default(), FormPhase::Idle);
        assert!(!FormPhase::default().is_submitting());
        assert!(FormPhase::default().accepts_submit());
    }

    #[test]
    fn label_tracks_submitting() {
        assert_eq!(FormPhase::Idle.submit_label("Submit Request"), "Submit Request");
        assert_eq!(FormPhase::Submitting.submit_label("Submit Request"), "Submitting...");
        assert_eq!(FormPhase::Succeeded.submit_label("Submit"), "Submit");
    }

    #[test]
    fn redirect_fires_exactly_after_delay() {
        let h = harness(Ok(200), None);

        let outcome = block_on(h.submitter.submit(&lead()));
        assert!(matches!(outcome, Some(Ok(()))));
        assert_eq!(h.submitter.phase(), FormPhase::Succeeded);
        assert_eq!(h.posts.get(), 1);

        h.scheduler.advance(u64::from(REDIRECT_DELAY_MS) - 1);
        assert_eq!(h.redirects.get(), 0);

        h.scheduler.advance(1);
        assert_eq!(h.redirects.get(), 1);

        h.scheduler.advance(10_000);
        assert_eq!(h.redirects.get(), 1);
    }

    #[test]
    fn rejected_submission_is_usable_again_without_redirect() {
        let h = harness(Ok(500), None);

        let outcome = block_on(h.submitter.submit(&lead()));
        assert!(matches!(
            outcome,
            Some(Err(SubmissionError::Rejected { status: 500 }))
        ));
        assert_eq!(h.submitter.phase(), FormPhase::Idle);
        assert!(!h.submitter.phase().is_submitting());
        assert_eq!(h.scheduler.pending(), 0);

        h.scheduler.advance(10_000);
        assert_eq!(h.redirects.get(), 0);

        // The visitor can resubmit by hand.
        assert!(block_on(h.submitter.submit(&lead())).is_some());
        assert_eq!(h.posts.get(), 2);
    }

    #[test]
    fn transport_failure_returns_to_idle() {
        let h = harness(Err("offline".to_string()), None);

        let outcome = block_on(h.submitter.submit(&lead()));
        assert!(matches!(outcome, Some(Err(SubmissionError::Transport(_)))));
        assert_eq!(h.submitter.phase(), FormPhase::Idle);
        assert_eq!(h.scheduler.pending(), 0);
    }

    #[test]
    fn only_one_post_while_pending() {
        let (release, hold) = oneshot::channel::<()>();
        let h = harness(Ok(200), Some(hold));
        let submitter = &h.submitter;
        let (payload, retry) = (lead(), lead());

        let (first, second) = block_on(async move {
            futures::join!(submitter.submit(&payload), async move {
                assert_eq!(submitter.phase(), FormPhase::Submitting);
                let second = submitter.submit(&retry).await;
                let _ = release.send(());
                second
            })
        });

        assert!(matches!(first, Some(Ok(()))));
        assert!(second.is_none());
        assert_eq!(h.posts.get(), 1);
    }

    #[test]
    fn no_second_post_while_waiting_to_redirect() {
        let h = harness(Ok(200), None);

        assert!(block_on(h.submitter.submit(&lead())).is_some());
        h.scheduler.advance(1_000);
        assert!(block_on(h.submitter.submit(&lead())).is_none());
        assert_eq!(h.posts.get(), 1);

        h.scheduler.advance(1_000);
        assert_eq!(h.redirects.get(), 1);
    }

    #[test]
    fn detaching_cancels_pending_redirect() {
        let h = harness(Ok(200), None);

        assert!(block_on(h.submitter.submit(&lead())).is_some());
        h.scheduler.advance(500);
        h.submitter.detach();
        h.scheduler.advance(10_000);

        assert_eq!(h.redirects.get(), 0);
        assert!(h.submitter.is_detached());
    }

    #[test]
    fn answer_after_detach_schedules_nothing() {
        let (release, hold) = oneshot::channel::<()>();
        let h = harness(Ok(200), Some(hold));
        let submitter = &h.submitter;
        let payload = lead();

        let (outcome, ()) = block_on(async move {
            futures::join!(submitter.submit(&payload), async move {
                submitter.detach();
                let _ = release.send(());
            })
        });

        assert!(matches!(outcome, Some(Ok(()))));
        assert_eq!(h.scheduler.pending(), 0);
        h.scheduler.advance(10_000);
        assert_eq!(h.redirects.get(), 0);
    }
}
