use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient notification. The widget shows at most one at a time; a new
/// toast replaces the previous one and restarts the dismiss timer.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Toast {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub toast: Option<Toast>,
    pub on_dismiss: Callback<()>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    // Arm the auto-dismiss timer whenever a new toast lands; dropping the
    // handle on cleanup cancels the previous timer.
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |toast: &Option<Toast>| {
                let timeout = toast.as_ref().map(|_| {
                    Timeout::new(config::TOAST_DURATION_MS, move || on_dismiss.emit(()))
                });
                move || drop(timeout)
            },
            props.toast.clone(),
        );
    }

    let toast_css = r#"
        .toast {
            position: fixed;
            bottom: 2rem;
            right: 2rem;
            z-index: 2000;
            display: flex;
            align-items: center;
            gap: 0.75rem;
            padding: 1rem 1.5rem;
            border-radius: 12px;
            background: rgba(30, 30, 30, 0.95);
            backdrop-filter: blur(10px);
            color: #fff;
            font-size: 0.95rem;
            max-width: 360px;
            animation: toast-in 0.3s ease;
        }
        .toast.success {
            border: 1px solid rgba(52, 211, 153, 0.4);
        }
        .toast.success i {
            color: #34D399;
        }
        .toast.error {
            border: 1px solid rgba(255, 99, 71, 0.4);
        }
        .toast.error i {
            color: #FF6347;
        }
        @keyframes toast-in {
            from {
                opacity: 0;
                transform: translateY(1rem);
            }
            to {
                opacity: 1;
                transform: translateY(0);
            }
        }
        @media (max-width: 480px) {
            .toast {
                left: 1rem;
                right: 1rem;
                bottom: 1rem;
                max-width: none;
            }
        }
    "#;

    match &props.toast {
        Some(toast) => {
            let (kind_class, icon) = match toast.kind {
                ToastKind::Success => ("success", "fas fa-circle-check"),
                ToastKind::Error => ("error", "fas fa-circle-exclamation"),
            };
            html! {
                <>
                    <style>{toast_css}</style>
                    <div class={classes!("toast", kind_class)}>
                        <i class={icon}></i>
                        <span>{&toast.message}</span>
                    </div>
                </>
            }
        }
        None => html! {},
    }
}
