use yew::prelude::*;

use crate::content::Testimonial;
use crate::simulator::PanelId;

#[derive(Properties, PartialEq)]
pub struct TestimonialPanelProps {
    pub testimonial: Testimonial,
    pub expanded: bool,
    pub on_toggle: Callback<PanelId>,
}

#[function_component(TestimonialPanel)]
pub fn testimonial_panel(props: &TestimonialPanelProps) -> Html {
    let onclick = {
        let id = props.testimonial.panel_id();
        props.on_toggle.reform(move |_: MouseEvent| id)
    };
    let testimonial = &props.testimonial;

    html! {
        <div class={classes!("glass-box", "testimonial-panel", props.expanded.then_some("open"))} {onclick}>
            <div class="testimonial-header">
                <div>
                    <h3>{&testimonial.name}</h3>
                    <p class="testimonial-headline">{&testimonial.headline}</p>
                </div>
                <span class="testimonial-arrow"><i class="fas fa-arrow-right"></i></span>
            </div>
            if props.expanded {
                <div class="testimonial-story">
                    <p>{&testimonial.story}</p>
                </div>
            }
        </div>
    }
}
