use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

use crate::audio::{PageTones, SoundCue, WebAudioPlatform};
use crate::components::earnings_card::EarningsCard;
use crate::components::testimonial_panel::TestimonialPanel;
use crate::config;
use crate::content::{Gate, LandingContent};
use crate::simulator::{BrowserTimers, PanelId, Simulator};

pub type LandingSimulator = Simulator<BrowserTimers>;

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let tones = use_memo(|_| PageTones::new(WebAudioPlatform), ());
    let content = use_memo(
        |_| match LandingContent::load() {
            Ok(content) => Some(content),
            Err(e) => {
                error!("{}", e);
                None
            }
        },
        (),
    );
    let simulator = use_state(|| None::<LandingSimulator>);
    let muted = {
        let tones = tones.clone();
        use_state(move || tones.is_muted())
    };

    // Audio may only start inside this gesture.
    let on_enter = {
        let tones = tones.clone();
        let simulator = simulator.clone();
        Callback::from(move |_: MouseEvent| {
            tones.initialize();
            tones.confirm_tone();
            let sounds: Rc<dyn SoundCue> = tones.clone();
            simulator.set(Some(Simulator::new(BrowserTimers, sounds)));
            info!("Landing gate dismissed");
            scroll_to_top();
        })
    };

    let on_toggle_sound = {
        let tones = tones.clone();
        let muted = muted.clone();
        Callback::from(move |_: ()| {
            muted.set(tones.toggle_muted());
        })
    };

    let on_purchase = {
        let tones = tones.clone();
        Callback::from(move |_: ()| tones.confirm_tone())
    };

    match &*simulator {
        Some(simulator) => html! {
            <LandingBody
                simulator={simulator.clone()}
                content={content.clone()}
                muted={*muted}
                {on_toggle_sound}
                {on_purchase}
            />
        },
        None => html! {
            <EntryGate gate={(*content).as_ref().map(|c| c.gate.clone())} {on_enter} />
        },
    }
}

#[derive(Properties, PartialEq)]
struct EntryGateProps {
    gate: Option<Gate>,
    on_enter: Callback<MouseEvent>,
}

#[function_component(EntryGate)]
fn entry_gate(props: &EntryGateProps) -> Html {
    let button = props
        .gate
        .as_ref()
        .map(|g| g.button.clone())
        .unwrap_or_else(|| "Enter".to_string());

    html! {
        <div class="entry-gate">
            <style>{PAGE_CSS}</style>
            <div class="entry-card">
                <div class="entry-wave">{"👋"}</div>
                if let Some(gate) = &props.gate {
                    <h1>{&gate.greeting}</h1>
                    <p>{&gate.message}</p>
                }
                <button class="entry-button" onclick={props.on_enter.clone()}>{button}</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct LandingBodyProps {
    simulator: LandingSimulator,
    content: Rc<Option<LandingContent>>,
    muted: bool,
    on_toggle_sound: Callback<()>,
    on_purchase: Callback<()>,
}

#[function_component(LandingBody)]
fn landing_body(props: &LandingBodyProps) -> Html {
    let state = use_state(|| props.simulator.state());

    // Mirror every simulator mutation into this view.
    {
        let state = state.clone();
        use_effect_with_deps(
            move |simulator: &LandingSimulator| {
                simulator.subscribe(move |snapshot| state.set(snapshot.clone()));
                let simulator = simulator.clone();
                move || simulator.unsubscribe()
            },
            props.simulator.clone(),
        );
    }

    let on_audience_change = {
        let simulator = props.simulator.clone();
        Callback::from(move |value: u32| simulator.set_audience_size(value))
    };
    let on_toggle_tips = {
        let simulator = props.simulator.clone();
        Callback::from(move |_: ()| simulator.toggle_tip_mode())
    };
    let on_claim = {
        let simulator = props.simulator.clone();
        Callback::from(move |_: ()| simulator.activate_claim())
    };
    let on_toggle_panel = {
        let simulator = props.simulator.clone();
        Callback::from(move |id: PanelId| simulator.toggle_expanded_panel(id))
    };
    let on_purchase_click = props.on_purchase.reform(|_: MouseEvent| ());
    let on_sound_click = props.on_toggle_sound.reform(|_: MouseEvent| ());
    let purchase_url = config::get_purchase_url();

    let content = (*props.content).as_ref();

    html! {
        <div class="landing-page">
            <style>{PAGE_CSS}</style>
            <head>
                <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css" integrity="sha512-SnH5WK+bZxgPHs44uWIX+LLJAJ9/2PkPKZ5QiAj6Ta86w+fsb2TkcmfRyVX3pBnMFcV7oQPJkl9QevSCWr3W6A==" crossorigin="anonymous" referrerpolicy="no-referrer" />
            </head>
            <nav class="top-nav">
                <div class="brand">
                    if let Some(content) = content {
                        {&content.brand.lead}<span class="accent">{&content.brand.accent}</span>
                    }
                </div>
                <div class="nav-actions">
                    <button class="sound-toggle" onclick={on_sound_click} title="Toggle sound">
                        <i class={if props.muted { "fas fa-volume-xmark" } else { "fas fa-volume-high" }}></i>
                    </button>
                    <a class="join-link" href={purchase_url} target="_blank" rel="noopener noreferrer">
                        {"Join Now"}
                    </a>
                </div>
            </nav>

            <section class="section hero">
                <h1>{"Are You "}<span class="accent">{"Ready?"}</span></h1>
                <EarningsCard
                    state={(*state).clone()}
                    {on_audience_change}
                    {on_toggle_tips}
                    {on_claim}
                />
                <p class="hero-note">
                    {"💡 You can be the next person to make this amount. While others are just scrolling, smart people are setting up these digital characters to build a real future."}
                </p>
            </section>

            if let Some(content) = content {
                <section class="section explainers">
                    { for content.explainers.iter().map(|explainer| html! {
                        <div class="glass-box">
                            <span class="explainer-icon"><i class={classes!("fas", explainer.icon.clone())}></i></span>
                            <h3>{&explainer.title}</h3>
                            <p>{&explainer.body}</p>
                        </div>
                    }) }
                </section>

                <section class="section">
                    <h2>{"Real World Examples"}</h2>
                    <div class="stack">
                        { for content.testimonials.iter().map(|testimonial| html! {
                            <TestimonialPanel
                                key={testimonial.id}
                                testimonial={testimonial.clone()}
                                expanded={state.is_expanded(testimonial.panel_id())}
                                on_toggle={on_toggle_panel.clone()}
                            />
                        }) }
                    </div>
                </section>

                <section class="section" id="products">
                    <div class="offer">
                        <div class="offer-badge">{&content.offer.badge}</div>
                        <h2>{&content.offer.title}</h2>
                        <div class="stack">
                            { for content.offer.items.iter().map(|item| html! {
                                <div class="offer-item">
                                    <i class="fas fa-circle-check"></i>
                                    <div>
                                        <h4>{&item.title}</h4>
                                        <p>{&item.description}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                        <p class="offer-note">
                            <span class="accent">{&content.offer.note_lead}</span>{" "}{&content.offer.note}
                        </p>
                        <div class="offer-footer">
                            <div>
                                <p class="list-price">{&content.offer.list_price}</p>
                                <p class="price">{&content.offer.price}</p>
                            </div>
                            <a class="cta" href={purchase_url} target="_blank" rel="noopener noreferrer" onclick={on_purchase_click}>
                                {&content.offer.cta}
                                <i class="fas fa-arrow-right"></i>
                            </a>
                        </div>
                    </div>
                </section>

                <section class="section">
                    <h2>{"Common Questions"}</h2>
                    <div class="stack">
                        { for content.faqs.iter().map(|faq| html! {
                            <div class="glass-box faq">
                                <h4><i class="fas fa-circle-question"></i>{" "}{&faq.question}</h4>
                                <p>{&faq.answer}</p>
                            </div>
                        }) }
                    </div>
                </section>

                <footer class="footer">
                    <p>{&content.footer.legal}</p>
                    <p>{&content.footer.tagline}</p>
                </footer>
            }
        </div>
    }
}

const PAGE_CSS: &str = r#"
    body {
        margin: 0;
        background: #000;
        color: #e5e7eb;
        font-family: system-ui, sans-serif;
    }
    .accent {
        color: #10b981;
    }
    .entry-gate {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1.5rem;
        text-align: center;
    }
    .entry-card {
        max-width: 28rem;
    }
    .entry-wave {
        font-size: 3.75rem;
        margin-bottom: 1.5rem;
    }
    .entry-card h1 {
        color: #fff;
        font-size: 1.875rem;
    }
    .entry-card p {
        color: #9ca3af;
        font-size: 1.125rem;
        line-height: 1.6;
        margin-bottom: 2rem;
    }
    .entry-button, .cta, .join-link {
        background: #10b981;
        color: #000;
        font-weight: 700;
        text-transform: uppercase;
        text-decoration: none;
        border: none;
        border-radius: 0.75rem;
        cursor: pointer;
    }
    .entry-button {
        width: 100%;
        padding: 1.25rem;
        font-size: 1.25rem;
    }
    .top-nav {
        position: sticky;
        top: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: space-between;
        height: 5rem;
        padding: 0 1.5rem;
        background: rgba(0, 0, 0, 0.9);
        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
    }
    .brand {
        color: #fff;
        font-size: 1.5rem;
        font-weight: 900;
        font-style: italic;
    }
    .nav-actions {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .sound-toggle {
        background: none;
        border: none;
        color: #9ca3af;
        font-size: 1.1rem;
        cursor: pointer;
    }
    .join-link {
        padding: 0.5rem 1.5rem;
        font-size: 0.875rem;
    }
    .section {
        max-width: 56rem;
        margin: 0 auto;
        padding: 4rem 1.5rem;
    }
    .section h2 {
        color: #fff;
        text-align: center;
        text-transform: uppercase;
        font-style: italic;
    }
    .hero {
        text-align: center;
        padding-top: 3rem;
    }
    .hero h1 {
        color: #fff;
        font-size: 3rem;
        font-weight: 900;
        text-transform: uppercase;
    }
    .hero-note {
        display: inline-block;
        max-width: 32rem;
        padding: 1rem;
        color: #34d399;
        background: rgba(6, 78, 59, 0.1);
        border: 1px solid rgba(16, 185, 129, 0.2);
        border-radius: 0.5rem;
    }
    .explainers {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
        gap: 1.5rem;
    }
    .glass-box {
        background: #0f0f0f;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1rem;
        padding: 2rem;
        transition: border-color 0.3s;
    }
    .glass-box:hover {
        border-color: rgba(16, 185, 129, 0.3);
    }
    .glass-box h3 {
        color: #fff;
    }
    .glass-box p {
        color: #9ca3af;
        line-height: 1.6;
    }
    .explainer-icon {
        color: #10b981;
        font-size: 1.5rem;
    }
    .stack {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .testimonial-panel {
        cursor: pointer;
    }
    .testimonial-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .testimonial-headline {
        color: #10b981 !important;
        font-weight: 700;
        font-size: 0.875rem;
        text-transform: uppercase;
    }
    .testimonial-arrow {
        color: #fff;
        transition: transform 0.2s;
    }
    .testimonial-panel.open .testimonial-arrow {
        transform: rotate(90deg);
    }
    .testimonial-story {
        margin-top: 1.5rem;
        padding-top: 1.5rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
    }
    .offer {
        position: relative;
        overflow: hidden;
        padding: 3rem;
        border: 2px solid #10b981;
        border-radius: 1.5rem;
        background: linear-gradient(135deg, #0f0f0f, #000);
    }
    .offer-badge {
        position: absolute;
        top: 0;
        right: 0;
        padding: 0.5rem 1rem;
        background: #10b981;
        color: #000;
        font-size: 0.75rem;
        font-weight: 900;
        text-transform: uppercase;
        border-bottom-left-radius: 0.75rem;
    }
    .offer-item {
        display: flex;
        gap: 1rem;
    }
    .offer-item i {
        color: #10b981;
        margin-top: 0.25rem;
    }
    .offer-item h4 {
        color: #fff;
        margin: 0;
    }
    .offer-item p {
        color: #9ca3af;
        font-size: 0.875rem;
    }
    .offer-note {
        margin: 2rem 0;
        padding: 1.5rem;
        text-align: center;
        background: rgba(255, 255, 255, 0.05);
        border-radius: 0.75rem;
    }
    .offer-footer {
        display: flex;
        flex-wrap: wrap;
        align-items: center;
        justify-content: space-between;
        gap: 2rem;
        padding-top: 2rem;
        border-top: 1px solid rgba(255, 255, 255, 0.1);
    }
    .list-price {
        color: #6b7280;
        font-weight: 700;
        text-decoration: line-through;
    }
    .price {
        color: #10b981;
        font-size: 3.75rem;
        font-weight: 900;
        margin: 0;
    }
    .cta {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem 2rem;
    }
    .faq h4 {
        color: #fff;
    }
    .faq i {
        color: #10b981;
    }
    .footer {
        padding: 3rem 1.5rem;
        text-align: center;
        color: #4b5563;
        font-size: 0.875rem;
    }
    @media (max-width: 768px) {
        .hero h1 {
            font-size: 2.25rem;
        }
        .offer {
            padding: 2rem;
        }
    }
"#;
