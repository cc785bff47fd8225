use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::cards::FeatureCard;
use crate::components::cursor_glow::CursorGlow;
use crate::components::nav::{scroll_to_section, Nav};
use crate::components::notification::{Notice, NotificationCenter, NotificationToast};
use crate::components::signup_form::SignupForm;
use crate::config;
use crate::scroll::effects::PageEffects;

const FEATURES: [(&str, &str, &str); 3] = [
    ("⚡", "Quantum Speed", "Pages that respond before you finish thinking about clicking."),
    ("🛰", "Orbital Sync", "Your workspace follows you across every device in real time."),
    ("🔒", "Zero-Trust Core", "Encrypted end to end, verified at every hop."),
];

const PLANS: [(&str, &str, &[&str]); 3] = [
    ("Starter", "$0", &["1 project", "Community support"]),
    ("Pro", "$19", &["Unlimited projects", "Priority support", "Custom domains"]),
    ("Team", "$49", &["Everything in Pro", "Shared workspaces", "Audit log"]),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let active_section = use_state_eq(String::new);
    let notice = use_state(|| None::<Notice>);
    let progress_ref = use_node_ref();
    let email_ref = use_node_ref();

    let notifier = {
        let setter = notice.setter();
        (*use_memo(
            move |_| NotificationCenter::new(Callback::from(move |n: Option<Notice>| setter.set(n))),
            (),
        ))
        .clone()
    };

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    {
        let active_section = active_section.clone();
        let progress_ref = progress_ref.clone();
        use_effect_with_deps(
            move |_| {
                let on_active = Callback::from(move |id: String| active_section.set(id));
                let effects = PageEffects::install(progress_ref.cast::<HtmlElement>(), on_active);
                move || drop(effects)
            },
            (),
        );
    }

    let on_signup = {
        let email_ref = email_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if !scroll_to_section("pricing") {
                return;
            }
            let email_ref = email_ref.clone();
            Timeout::new(config::SIGNUP_FOCUS_DELAY_MS, move || {
                if let Some(input) = email_ref.cast::<HtmlElement>() {
                    let _ = input.focus();
                }
            })
            .forget();
        })
    };

    html! {
        <div class="landing-page">
            <div class="scroll-progress" ref={progress_ref}></div>
            <CursorGlow />
            <Nav active={(*active_section).clone()} {on_signup} />
            <NotificationToast notice={(*notice).clone()} />

            <section id="hero" class="hero">
                <div class="hero-bg"></div>
                <div class="orbital-line orbit-1"></div>
                <div class="orbital-line orbit-2"></div>
                <div class="orbital-line orbit-3"></div>
                <div class="hero-text">
                    <h1>{"Build at the speed of light"}</h1>
                    <p>{"A workspace engineered for the next decade of the web."}</p>
                </div>
            </section>

            <section id="features" class="features">
                <h2 class="section-title">{"Features"}</h2>
                <div class="card-grid">
                    { for FEATURES.iter().map(|(icon, title, description)| html! {
                        <FeatureCard icon={*icon} title={*title} description={*description} />
                    }) }
                </div>
            </section>

            <section id="pricing" class="pricing">
                <h2 class="section-title">{"Pricing"}</h2>
                <div class="pricing-grid">
                    { for PLANS.iter().map(|(name, price, perks)| html! {
                        <div class="pricing-card">
                            <h3>{*name}</h3>
                            <p class="price">{*price}<span>{"/mo"}</span></p>
                            <ul>
                                { for perks.iter().map(|perk| html! { <li>{*perk}</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div class="signup-content">
                    <h2>{"Create your account"}</h2>
                    <SignupForm notifier={notifier} email_ref={email_ref} />
                </div>
            </section>

            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 3px;
                        background: linear-gradient(135deg, #8b5cf6, #ec4899, #3b82f6);
                        z-index: 10001;
                        transform-origin: left;
                        transform: scaleX(0);
                        transition: transform 0.1s ease;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        height: 80px;
                        z-index: 1000;
                        backdrop-filter: blur(10px);
                    }
                    .nav-content {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        max-width: 1200px;
                        margin: 0 auto;
                        height: 100%;
                        padding: 0 2rem;
                    }
                    .nav-link {
                        color: rgba(255, 255, 255, 0.7);
                        margin-right: 1.5rem;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .nav-link.active {
                        color: #ec4899;
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .hero-bg {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at 50% 30%, rgba(139, 92, 246, 0.35), transparent 60%);
                        z-index: -1;
                    }
                    .orbital-line {
                        position: absolute;
                        border: 1px solid rgba(139, 92, 246, 0.3);
                        border-radius: 50%;
                        pointer-events: none;
                    }
                    .orbit-1 { width: 400px; height: 400px; }
                    .orbit-2 { width: 600px; height: 600px; }
                    .orbit-3 { width: 800px; height: 800px; }
                    .card-grid, .pricing-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .card, .pricing-card {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(139, 92, 246, 0.2);
                        border-radius: 16px;
                        padding: 2rem;
                        overflow: hidden;
                    }
                    .animate-in {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    @keyframes ripple {
                        to {
                            transform: scale(4);
                            opacity: 0;
                        }
                    }
                    @media (max-width: 768px) {
                        .nav-link {
                            display: none;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
