use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::simulator::state::{AUDIENCE_STEP, MAX_AUDIENCE, MIN_AUDIENCE};
use crate::simulator::SimulatorState;
use crate::utils::format::format_currency;

#[derive(Properties, PartialEq)]
pub struct EarningsCardProps {
    pub state: SimulatorState,
    pub on_audience_change: Callback<u32>,
    pub on_toggle_tips: Callback<()>,
    pub on_claim: Callback<()>,
}

#[function_component(EarningsCard)]
pub fn earnings_card(props: &EarningsCardProps) -> Html {
    let state = &props.state;

    let oninput = {
        let on_audience_change = props.on_audience_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match input.value().parse::<u32>() {
                Ok(value) => on_audience_change.emit(value),
                Err(_) => log::warn!("Ignoring slider value {:?}", input.value()),
            }
        })
    };
    let on_toggle_tips = props.on_toggle_tips.reform(|_: MouseEvent| ());
    let on_claim = props.on_claim.reform(|_: MouseEvent| ());
    let tips_on = state.tip_mode_enabled();

    html! {
        <div class="earnings-card">
            <style>{EARNINGS_CSS}</style>
            <div>
                <p class="earnings-caption">{"Estimated Monthly Income"}</p>
                <div class="earnings-amount">{format_currency(state.displayed_income())}</div>
            </div>
            <div class="earnings-slider">
                <input
                    type="range"
                    min={MIN_AUDIENCE.to_string()}
                    max={MAX_AUDIENCE.to_string()}
                    step={AUDIENCE_STEP.to_string()}
                    value={state.audience_size().to_string()}
                    {oninput}
                />
                <div class="slider-tiers">
                    <span>{"Beginner"}</span>
                    <span>{"Pro"}</span>
                    <span>{"God Mode"}</span>
                </div>
            </div>
            <div class={classes!("tip-toggle", tips_on.then_some("on"))} onclick={on_toggle_tips}>
                <div class="tip-toggle-text">
                    <span class="tip-icon"><i class="fas fa-bolt"></i></span>
                    <div>
                        <p class="tip-title">{"Activate VIP Tips"}</p>
                        <p class="tip-hint">{"Add extra earnings from super fans"}</p>
                    </div>
                </div>
                <div class="switch"><div class="knob"></div></div>
            </div>
            <button
                class={classes!("claim-button", state.claim_active().then_some("warning"))}
                onclick={on_claim}
            >
                if !state.claim_active() {
                    <i class="fas fa-dollar-sign"></i>
                }
                {state.claim_label()}
            </button>
        </div>
    }
}

const EARNINGS_CSS: &str = r#"
    .earnings-card {
        display: flex;
        flex-direction: column;
        gap: 2rem;
        max-width: 640px;
        margin: 0 auto 2rem;
        padding: 2rem;
        background: #0a0a0a;
        border: 1px solid rgba(16, 185, 129, 0.2);
        border-radius: 1rem;
    }
    .earnings-caption {
        color: #9ca3af;
        font-size: 0.85rem;
        font-weight: 700;
        letter-spacing: 0.2em;
        text-transform: uppercase;
    }
    .earnings-amount {
        color: #fff;
        font-family: monospace;
        font-size: 3.75rem;
        font-weight: 900;
    }
    .earnings-slider input {
        width: 100%;
        accent-color: #10b981;
        cursor: pointer;
    }
    .slider-tiers {
        display: flex;
        justify-content: space-between;
        margin-top: 0.75rem;
        color: #6b7280;
        font-size: 0.75rem;
        font-weight: 700;
        text-transform: uppercase;
    }
    .tip-toggle {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1rem;
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 0.75rem;
        background: rgba(255, 255, 255, 0.05);
        cursor: pointer;
        transition: background 0.2s, border-color 0.2s;
    }
    .tip-toggle.on {
        background: rgba(6, 78, 59, 0.2);
        border-color: #10b981;
    }
    .tip-toggle-text {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        text-align: left;
    }
    .tip-title {
        color: #9ca3af;
        font-weight: 700;
        font-size: 0.85rem;
        text-transform: uppercase;
    }
    .tip-toggle.on .tip-title {
        color: #fff;
    }
    .tip-hint {
        color: #6b7280;
        font-size: 0.65rem;
    }
    .switch {
        position: relative;
        width: 3rem;
        height: 1.5rem;
        border-radius: 9999px;
        background: #374151;
    }
    .tip-toggle.on .switch {
        background: #10b981;
    }
    .knob {
        position: absolute;
        top: 0.25rem;
        left: 0.25rem;
        width: 1rem;
        height: 1rem;
        border-radius: 9999px;
        background: #fff;
        transition: left 0.2s;
    }
    .tip-toggle.on .knob {
        left: 1.75rem;
    }
    .claim-button {
        width: 100%;
        padding: 1rem;
        border: none;
        border-radius: 0.75rem;
        background: #10b981;
        color: #000;
        font-size: 1.25rem;
        font-weight: 900;
        cursor: pointer;
    }
    .claim-button.warning {
        background: #ef4444;
        color: #fff;
    }
"#;
