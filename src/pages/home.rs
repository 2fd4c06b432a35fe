use log::info;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{FIRST_LINE_DELAY_MS, SECOND_LINE_DELAY_MS};
use crate::hooks::use_delayed_flag;
use crate::leads::{LeadHandoff, Service};
use crate::Route;

const HOME_CSS: &str = r#"
    .home-page {
        min-height: 100vh;
        background: #0A0F1C;
        color: #fff;
        font-family: 'Inter', sans-serif;
    }
    .top-nav {
        position: fixed;
        width: 100%;
        z-index: 50;
        background: rgba(10, 15, 28, 0.8);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 1.5rem;
        height: 4rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-logo {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 1.25rem;
        font-weight: 700;
        letter-spacing: 0.05em;
    }
    .nav-logo img { width: 1.5rem; height: 1.5rem; }
    .nav-links {
        display: flex;
        align-items: center;
        gap: 2rem;
    }
    .nav-link {
        color: #9CA3AF;
        background: none;
        border: none;
        font-size: 1rem;
        cursor: pointer;
        text-decoration: none;
        transition: color 0.2s;
    }
    .nav-link:hover { color: #fff; }
    .button-primary {
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 9999px;
        background: linear-gradient(to right, #3B82F6, #2563EB);
        color: #fff;
        font-weight: 500;
        cursor: pointer;
        transition: transform 0.2s, box-shadow 0.2s;
    }
    .button-primary:hover {
        transform: translateY(-1px);
        box-shadow: 0 8px 24px rgba(59, 130, 246, 0.3);
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        color: #9CA3AF;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .mobile-menu {
        display: flex;
        flex-direction: column;
        gap: 0.25rem;
        padding: 0.5rem 1rem 1rem;
    }
    .mobile-menu .nav-link { padding: 0.5rem 0.75rem; text-align: left; }
    .mobile-menu .button-primary { margin-top: 1rem; width: 100%; }
    .hero {
        padding: 8rem 1rem 5rem;
        text-align: center;
    }
    .hero-inner { max-width: 80rem; margin: 0 auto; }
    .hero-sparkle {
        font-size: 3rem;
        color: #60A5FA;
        margin-bottom: 1.5rem;
        animation: float 3s ease-in-out infinite;
    }
    .typewriter {
        overflow: hidden;
        white-space: nowrap;
        margin: 0 auto;
        font-size: clamp(2.5rem, 7vw, 4.5rem);
        font-weight: 700;
        line-height: 1.2;
        border-right: 3px solid #60A5FA;
        width: 0;
        animation: typing 2.5s steps(30, end) forwards, blink 0.75s step-end infinite;
    }
    .typewriter-delay-2 { animation-delay: 2.5s, 0s; }
    .typewriter-complete { width: auto; border-right-color: transparent; animation: none; }
    .gradient-text {
        background: linear-gradient(to right, #60A5FA, #A78BFA);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .glass-card {
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1rem;
        backdrop-filter: blur(12px);
    }
    .hero-pitch {
        max-width: 42rem;
        margin: 1.5rem auto 2rem;
        padding: 1.5rem;
        font-size: 1.25rem;
        color: #9CA3AF;
    }
    .hero-actions {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1rem;
        max-width: 28rem;
        margin: 0 auto;
    }
    .hero-actions > .button-primary { width: 100%; }
    .capture-row { display: flex; width: 100%; gap: 0.5rem; }
    .capture-row input {
        flex: 1;
        padding: 0.75rem 1rem;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 9999px;
        color: #fff;
        outline: none;
    }
    .capture-row input:focus { border-color: rgba(59, 130, 246, 0.5); }
    .capture-row .button-primary { white-space: nowrap; }
    .features {
        padding: 5rem 1rem;
        background: rgba(17, 24, 39, 0.5);
    }
    .features h2, .cta h2 {
        font-size: clamp(1.875rem, 4vw, 2.25rem);
        font-weight: 700;
        text-align: center;
        margin-bottom: 4rem;
    }
    .feature-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
        gap: 2rem;
    }
    .feature-card {
        padding: 2rem;
        background: rgba(31, 41, 55, 0.5);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1rem;
        transition: transform 0.2s;
    }
    .feature-card:hover { transform: translateY(-4px); }
    .feature-card h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.75rem; }
    .feature-card p { color: #9CA3AF; }
    .feature-icon { font-size: 2.5rem; color: #60A5FA; margin-bottom: 1rem; }
    .cta { padding: 5rem 1rem; }
    .cta .glass-card { max-width: 56rem; margin: 0 auto; padding: 3rem; text-align: center; }
    .cta h2 { margin-bottom: 1.5rem; }
    .cta p { font-size: 1.25rem; color: #9CA3AF; margin-bottom: 2rem; }
    .attribution { text-align: center; font-size: 0.75rem; padding: 1rem 0; }
    .attribution a { color: #6B7280; text-decoration: none; }
    .attribution a:hover { color: #9CA3AF; }
    @keyframes typing { from { width: 0; } to { width: 100%; } }
    @keyframes blink { 50% { border-color: transparent; } }
    @keyframes float {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-10px); }
    }
    @media (max-width: 768px) {
        .nav-links { display: none; }
        .burger-menu { display: block; }
    }
"#;

fn feature_icon(service: Service) -> &'static str {
    match service {
        Service::AiAgent => "⚡",
        Service::AiPhoneAgent => "🤖",
        Service::SocialMediaAutomation => "🏢",
    }
}

#[function_component]
pub fn Home() -> Html {
    let navigator = use_navigator();
    let menu_open = use_state(|| false);
    let email = use_state(String::new);
    let first_line_complete = use_delayed_flag(FIRST_LINE_DELAY_MS);
    let second_line_complete = use_delayed_flag(SECOND_LINE_DELAY_MS);

    let go_contact = {
        let navigator = navigator.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Contact);
            }
        })
    };

    let go_initialize = {
        let navigator = navigator.clone();
        let email = email.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(navigator) = &navigator else {
                return;
            };
            match LeadHandoff::from_capture(&email) {
                Some(handoff) => {
                    info!("Forwarding captured email to initialize");
                    navigator.push_with_state(&Route::Initialize, handoff);
                }
                None => navigator.push(&Route::Initialize),
            }
        })
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <div class="home-page">
            <style>{HOME_CSS}</style>
            <nav class="top-nav">
                <div class="nav-content">
                    <div class="nav-logo">
                        <img src="/assets/icon-brain.png" alt="Talisman AI" />
                        <span>{"TALISMAN.AI"}</span>
                    </div>

                    <div class="nav-links">
                        <a href="#features" class="nav-link">{"Features"}</a>
                        <a href="#about" class="nav-link">{"About"}</a>
                        <button onclick={go_contact.clone()} class="nav-link">{"Contact"}</button>
                        <button onclick={go_contact.clone()} class="button-primary">{"Book a Call"}</button>
                    </div>

                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>

                if *menu_open {
                    <div class="mobile-menu">
                        <a href="#features" class="nav-link" onclick={close_menu.clone()}>{"Features"}</a>
                        <a href="#about" class="nav-link" onclick={close_menu}>{"About"}</a>
                        <button onclick={go_contact.clone()} class="nav-link">{"Contact"}</button>
                        <button onclick={go_contact.clone()} class="button-primary">{"Book a Call"}</button>
                    </div>
                }
            </nav>

            <section class="hero" id="about">
                <div class="hero-inner">
                    <div class="hero-sparkle">{"✦"}</div>
                    <h1 class={classes!("typewriter", "typewriter-delay-1", first_line_complete.then_some("typewriter-complete"))}>
                        {"Automate Your Business"}
                    </h1>
                    <h1 class={classes!("typewriter", "typewriter-delay-2", "gradient-text", second_line_complete.then_some("typewriter-complete"))}>
                        {"with Artificial Intelligence"}
                    </h1>
                    <div class="glass-card hero-pitch">
                        <p>
                            {"Transform your CRM workflow with cutting-edge AI automation. Streamline operations, boost efficiency, and drive growth."}
                        </p>
                    </div>
                    <div class="hero-actions">
                        <button onclick={go_contact.clone()} class="button-primary">{"Book a Call"}</button>
                        <div class="capture-row">
                            <input
                                type="email"
                                placeholder="Enter your email"
                                value={(*email).clone()}
                                oninput={on_email_input}
                            />
                            <button onclick={go_initialize} class="button-primary">{"Initialize →"}</button>
                        </div>
                    </div>
                </div>
            </section>

            <section id="features" class="features">
                <h2>{"Powerful Features for Modern Businesses"}</h2>
                <div class="feature-grid">
                    { for Service::ALL.iter().map(|service| html! {
                        <div class="feature-card" key={service.as_str()}>
                            <div class="feature-icon">{feature_icon(*service)}</div>
                            <h3>{service.as_str()}</h3>
                            <p>{service.pitch()}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="cta">
                <div class="glass-card">
                    <h2>{"Ready to Transform Your Business?"}</h2>
                    <p>{"Join leading companies that trust TALISMAN.AI for their automation needs."}</p>
                    <button onclick={go_contact} class="button-primary">{"Schedule a Demo →"}</button>
                </div>
            </section>

            <div class="attribution">
                <a
                    href="https://es.vecteezy.com/png-gratis/inteligencia-artificial"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"Artificial Intelligence PNGs by Vecteezy"}
                </a>
            </div>
        </div>
    }
}
