use std::rc::Rc;

use gloo_timers::callback::Timeout;
use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use crate::components::notification::{NotificationCenter, NotificationKind, Notifier};
use crate::config;

pub const SUCCESS_MESSAGE: &str = "Account created successfully!";
const SUBMIT_LABEL: &str = "Create Account";
const SUBMITTING_LABEL: &str = "Creating Account...";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupFields {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupFields {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        if self.password.chars().count() < config::MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort {
                min: config::MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}

/// The parts of the rendered form the submission flow touches.
pub trait SignupView {
    fn fields(&self) -> SignupFields;
    fn set_submitting(&self, submitting: bool);
    fn reset(&self);
}

/// Validates and, if accepted, puts the form into its submitting state. The
/// caller finishes the submission with [`complete`] after the simulated delay.
pub fn submit(view: &impl SignupView, notifier: &impl Notifier) -> Result<(), FormError> {
    if let Err(err) = view.fields().validate() {
        log::info!("Signup rejected: {}", err);
        notifier.notify(&err.to_string(), NotificationKind::Error);
        return Err(err);
    }
    view.set_submitting(true);
    Ok(())
}

pub fn complete(view: &impl SignupView, notifier: &impl Notifier) {
    notifier.notify(SUCCESS_MESSAGE, NotificationKind::Success);
    view.reset();
    view.set_submitting(false);
}

#[derive(Clone)]
struct FormRefs {
    form: NodeRef,
    name: NodeRef,
    email: NodeRef,
    password: NodeRef,
    submitting: UseStateHandle<bool>,
}

impl FormRefs {
    fn value(node: &NodeRef) -> String {
        node.cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }
}

impl SignupView for FormRefs {
    fn fields(&self) -> SignupFields {
        SignupFields {
            name: Self::value(&self.name),
            email: Self::value(&self.email),
            password: Self::value(&self.password),
        }
    }

    fn set_submitting(&self, submitting: bool) {
        self.submitting.set(submitting);
    }

    fn reset(&self) {
        if let Some(form) = self.form.cast::<HtmlFormElement>() {
            form.reset();
        }
    }
}

/// Scales the input's wrapping group while it has focus.
fn scale_group(scale: &'static str) -> Callback<FocusEvent> {
    Callback::from(move |e: FocusEvent| {
        let group = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            .and_then(|input| input.parent_element())
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
        if let Some(group) = group {
            let style = group.style();
            let _ = style.set_property("transform", &format!("scale({})", scale));
            let _ = style.set_property("transition", "transform 0.3s ease");
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub notifier: NotificationCenter,
    /// Lets the page focus the email field from the header button.
    pub email_ref: NodeRef,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let submitting = use_state(|| false);
    let pending = use_mut_ref(|| None::<Timeout>);
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let password_ref = use_node_ref();

    let refs = FormRefs {
        form: form_ref.clone(),
        name: name_ref.clone(),
        email: props.email_ref.clone(),
        password: password_ref.clone(),
        submitting: submitting.clone(),
    };

    let onsubmit = {
        let notifier = props.notifier.clone();
        let pending = pending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if submit(&refs, &notifier).is_err() {
                return;
            }
            let refs = refs.clone();
            let notifier = notifier.clone();
            let timeout = Timeout::new(config::SUBMIT_DELAY_MS, move || {
                complete(&refs, &notifier);
            });
            // A newer accepted submission supersedes one still in flight.
            *pending.borrow_mut() = Some(timeout);
        })
    };

    {
        let pending = Rc::clone(&pending);
        use_effect_with_deps(
            move |_| {
                move || {
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <form class="signup-form" ref={form_ref} {onsubmit}>
            <div class="form-group">
                <input
                    class="form-input"
                    type="text"
                    placeholder="Full name"
                    ref={name_ref}
                    onfocus={scale_group("1.02")}
                    onblur={scale_group("1")}
                />
            </div>
            <div class="form-group">
                <input
                    class="form-input"
                    type="email"
                    placeholder="Email address"
                    ref={props.email_ref.clone()}
                    onfocus={scale_group("1.02")}
                    onblur={scale_group("1")}
                />
            </div>
            <div class="form-group">
                <input
                    class="form-input"
                    type="password"
                    placeholder="Password"
                    ref={password_ref}
                    onfocus={scale_group("1.02")}
                    onblur={scale_group("1")}
                />
            </div>
            <button class="btn-signup-form" type="submit" disabled={*submitting}>
                { if *submitting { SUBMITTING_LABEL } else { SUBMIT_LABEL } }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingNotifier {
        calls: RefCell<Vec<(String, NotificationKind)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, kind: NotificationKind) {
            self.calls.borrow_mut().push((message.to_string(), kind));
        }
    }

    struct FakeForm {
        fields: SignupFields,
        submitting: Cell<bool>,
        resets: Cell<u32>,
    }

    impl FakeForm {
        fn new(name: &str, email: &str, password: &str) -> Self {
            Self {
                fields: SignupFields {
                    name: name.to_string(),
                    email: email.to_string(),
                    password: password.to_string(),
                },
                submitting: Cell::new(false),
                resets: Cell::new(0),
            }
        }
    }

    impl SignupView for FakeForm {
        fn fields(&self) -> SignupFields {
            self.fields.clone()
        }

        fn set_submitting(&self, submitting: bool) {
            self.submitting.set(submitting);
        }

        fn reset(&self) {
            self.resets.set(self.resets.get() + 1);
        }
    }

    #[test]
    fn short_password_is_reported_once_and_form_kept() {
        let form = FakeForm::new("Ada", "ada@example.com", "12345");
        let notifier = RecordingNotifier::default();

        let result = submit(&form, &notifier);

        assert_eq!(result, Err(FormError::PasswordTooShort { min: 6 }));
        assert_eq!(
            *notifier.calls.borrow(),
            vec![(
                "Password must be at least 6 characters".to_string(),
                NotificationKind::Error
            )]
        );
        assert_eq!(form.resets.get(), 0);
        assert!(!form.submitting.get());
    }

    #[test]
    fn any_empty_field_is_missing() {
        for (name, email, password) in [
            ("", "a@b.c", "secret1"),
            ("Ada", "", "secret1"),
            ("Ada", "a@b.c", ""),
        ] {
            let form = FakeForm::new(name, email, password);
            let notifier = RecordingNotifier::default();
            assert_eq!(submit(&form, &notifier), Err(FormError::MissingFields));
            assert_eq!(notifier.calls.borrow()[0].0, "Please fill in all fields");
        }
    }

    #[test]
    fn missing_fields_take_precedence_over_length() {
        let fields = SignupFields {
            name: String::new(),
            email: "a@b.c".to_string(),
            password: "123".to_string(),
        };
        assert_eq!(fields.validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn password_length_counts_characters() {
        let fields = SignupFields {
            name: "Ada".to_string(),
            email: "a@b.c".to_string(),
            password: "ééééé".to_string(),
        };
        assert_eq!(fields.validate(), Err(FormError::PasswordTooShort { min: 6 }));
    }

    #[test]
    fn accepted_submission_waits_then_completes() {
        let form = FakeForm::new("Ada", "ada@example.com", "123456");
        let notifier = RecordingNotifier::default();

        assert_eq!(submit(&form, &notifier), Ok(()));
        assert!(form.submitting.get());
        assert!(notifier.calls.borrow().is_empty());

        complete(&form, &notifier);
        assert_eq!(
            *notifier.calls.borrow(),
            vec![(SUCCESS_MESSAGE.to_string(), NotificationKind::Success)]
        );
        assert_eq!(form.resets.get(), 1);
        assert!(!form.submitting.get());
    }
}
