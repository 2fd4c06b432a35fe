use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::{ERROR_TOAST_MS, SUCCESS_TOAST_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn duration_ms(&self) -> u32 {
        match self {
            ToastKind::Success => SUCCESS_TOAST_MS,
            ToastKind::Error => ERROR_TOAST_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

pub enum ToastAction {
    Push { kind: ToastKind, message: String },
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            ToastAction::Push { kind, message } => {
                queue.toasts.push(Toast {
                    id: queue.next_id,
                    kind,
                    message,
                });
                queue.next_id = queue.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => {
                queue.toasts.retain(|toast| toast.id != id);
            }
        }
        Rc::new(queue)
    }
}

/// Handle pages use to raise toasts. Without a `Toaster` above it the
/// messages only reach the log.
#[derive(Clone, Default, PartialEq)]
pub struct Notifier {
    dispatch: Option<UseReducerDispatcher<ToastQueue>>,
}

impl Notifier {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        match &self.dispatch {
            Some(dispatch) => dispatch.dispatch(ToastAction::Push { kind, message }),
            None => log::warn!("No toaster mounted, dropping {:?} toast: {}", kind, message),
        }
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    #[prop_or_default]
    pub children: Children,
}

/// Notification layer mounted once by the app shell. Toasts outlive the page
/// that raised them.
#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let notifier = Notifier {
        dispatch: Some(queue.dispatcher()),
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            <style>
                {r#"
                    .toaster {
                        position: fixed;
                        top: 1rem;
                        right: 1rem;
                        z-index: 9999;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        pointer-events: none;
                    }
                    .toast {
                        display: flex;
                        align-items: center;
                        gap: 0.6rem;
                        min-width: 240px;
                        max-width: 360px;
                        padding: 0.75rem 1rem;
                        background: #fff;
                        color: #363636;
                        border-radius: 8px;
                        box-shadow: 0 3px 10px rgba(0, 0, 0, 0.1), 0 3px 3px rgba(0, 0, 0, 0.05);
                        font-size: 0.95rem;
                        pointer-events: auto;
                        animation: toastIn 0.35s cubic-bezier(0.21, 1.02, 0.73, 1) forwards;
                    }
                    .toast-icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 20px;
                        height: 20px;
                        border-radius: 50%;
                        color: #fff;
                        font-size: 0.75rem;
                        flex-shrink: 0;
                    }
                    .toast.success .toast-icon { background: #61d345; }
                    .toast.error .toast-icon { background: #ff4b4b; }
                    @keyframes toastIn {
                        from { transform: translateY(-100%); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            <div class="toaster" role="status" aria-live="polite">
                { for queue.toasts.iter().map(|toast| html! {
                    <ToastItem
                        key={toast.id}
                        toast={toast.clone()}
                        dispatch={queue.dispatcher()}
                    />
                }) }
            </div>
            { for props.children.iter() }
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    dispatch: UseReducerDispatcher<ToastQueue>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let dispatch = props.dispatch.clone();
        use_effect_with_deps(
            move |(id, kind)| {
                let id = *id;
                let timeout = Timeout::new(kind.duration_ms(), move || {
                    dispatch.dispatch(ToastAction::Dismiss(id));
                });
                move || drop(timeout)
            },
            (props.toast.id, props.toast.kind),
        );
    }

    let (class, icon) = match props.toast.kind {
        ToastKind::Success => ("toast success", "✓"),
        ToastKind::Error => ("toast error", "✕"),
    };

    html! {
        <div class={class}>
            <span class="toast-icon">{icon}</span>
            <span>{&props.toast.message}</span>
        </div>
    }
}
