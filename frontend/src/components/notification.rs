use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
    pub kind: NotificationKind,
    pub leaving: bool,
}

/// Anything that can surface a short message to the visitor.
pub trait Notifier {
    fn notify(&self, message: &str, kind: NotificationKind);
}

/// Holds at most one notice. Each `show` bumps the id, so dismiss steps
/// scheduled for an earlier notice become no-ops.
#[derive(Debug, Default)]
pub struct NotificationSlot {
    next_id: u32,
    current: Option<Notice>,
}

impl NotificationSlot {
    pub fn show(&mut self, message: &str, kind: NotificationKind) -> u32 {
        self.next_id = self.next_id.wrapping_add(1);
        self.current = Some(Notice {
            id: self.next_id,
            message: message.to_string(),
            kind,
            leaving: false,
        });
        self.next_id
    }

    /// Starts the exit animation if `id` is still the one on screen.
    pub fn begin_dismiss(&mut self, id: u32) -> bool {
        match self.current.as_mut() {
            Some(notice) if notice.id == id && !notice.leaving => {
                notice.leaving = true;
                true
            }
            _ => false,
        }
    }

    pub fn finish_dismiss(&mut self, id: u32) -> bool {
        if self.current.as_ref().map(|n| n.id) == Some(id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

/// Notifier that renders through a Yew callback and owns the dismiss timer.
#[derive(Clone)]
pub struct NotificationCenter {
    slot: Rc<RefCell<NotificationSlot>>,
    render: Callback<Option<Notice>>,
    timer: Rc<RefCell<Option<Timeout>>>,
}

impl PartialEq for NotificationCenter {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl NotificationCenter {
    pub fn new(render: Callback<Option<Notice>>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(NotificationSlot::default())),
            render,
            timer: Rc::new(RefCell::new(None)),
        }
    }

    fn publish(slot: &RefCell<NotificationSlot>, render: &Callback<Option<Notice>>) {
        render.emit(slot.borrow().current().cloned());
    }
}

impl Notifier for NotificationCenter {
    fn notify(&self, message: &str, kind: NotificationKind) {
        let id = self.slot.borrow_mut().show(message, kind);
        Self::publish(&self.slot, &self.render);

        let slot = Rc::clone(&self.slot);
        let render = self.render.clone();
        let dismiss = Timeout::new(config::NOTIFICATION_MS, move || {
            if !slot.borrow_mut().begin_dismiss(id) {
                return;
            }
            Self::publish(&slot, &render);
            Timeout::new(config::NOTIFICATION_EXIT_MS, move || {
                if slot.borrow_mut().finish_dismiss(id) {
                    Self::publish(&slot, &render);
                }
            })
            .forget();
        });
        // Replacing the handle cancels the previous notice's timer.
        *self.timer.borrow_mut() = Some(dismiss);
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationToastProps {
    pub notice: Option<Notice>,
}

#[function_component(NotificationToast)]
pub fn notification_toast(props: &NotificationToastProps) -> Html {
    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };

    html! {
        <div
            key={notice.id}
            class={classes!("notification", notice.kind.class(), notice.leaving.then(|| "leaving"))}
            role="status"
        >
            <style>
                {r#"
                    .notification {
                        position: fixed;
                        top: 100px;
                        right: 20px;
                        color: white;
                        padding: 15px 25px;
                        border-radius: 10px;
                        box-shadow: 0 10px 30px rgba(139, 92, 246, 0.4);
                        z-index: 10000;
                        animation: slideIn 0.3s ease;
                    }
                    .notification-success {
                        background: linear-gradient(135deg, #8b5cf6, #ec4899);
                    }
                    .notification-error {
                        background: linear-gradient(135deg, #ef4444, #dc2626);
                    }
                    .notification.leaving {
                        animation: slideOut 0.3s ease forwards;
                    }
                    @keyframes slideIn {
                        from { transform: translateX(400px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @keyframes slideOut {
                        from { transform: translateX(0); opacity: 1; }
                        to { transform: translateX(400px); opacity: 0; }
                    }
                "#}
            </style>
            { &notice.message }
        </div>
    }
}
