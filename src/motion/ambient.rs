use yew::prelude::*;

pub const FLOAT_PERIOD_MS: u32 = 3000;
pub const FLOAT_RISE_PX: i32 = 18;
/// Per-sibling phase offsets so the orbs drift out of lockstep.
pub const ORB_PHASE_MS: [u32; 3] = [0, 500, 1000];

/// Animation shorthand for one looping element. Ungated: it runs from mount
/// to unmount with no terminal state.
pub fn float_style(phase_ms: u32) -> String {
    format!(
        "animation: orb-float {}ms ease-in-out {}ms infinite;",
        FLOAT_PERIOD_MS, phase_ms
    )
}

/// Decorative orb field behind the hero. The loop itself lives entirely in
/// the CSS animation engine; waypoints are 0 -> -18px -> 0.
#[function_component(FloatingOrbs)]
pub fn floating_orbs() -> Html {
    html! {
        <div class="floating-orbs">
            <style>
                {format!(r#"
                    @keyframes orb-float {{
                        0% {{ transform: translateY(0); }}
                        50% {{ transform: translateY(-{}px); }}
                        100% {{ transform: translateY(0); }}
                    }}
                    .floating-orbs {{
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }}
                    .orb {{
                        position: absolute;
                        border-radius: 50%;
                        filter: blur(60px);
                        opacity: 0.35;
                    }}
                    .orb-1 {{
                        width: 340px;
                        height: 340px;
                        top: 12%;
                        left: 8%;
                        background: radial-gradient(circle, #7EB2FF, transparent 70%);
                    }}
                    .orb-2 {{
                        width: 260px;
                        height: 260px;
                        top: 45%;
                        right: 10%;
                        background: radial-gradient(circle, #9D7BFF, transparent 70%);
                    }}
                    .orb-3 {{
                        width: 200px;
                        height: 200px;
                        bottom: 8%;
                        left: 35%;
                        background: radial-gradient(circle, #41D1C7, transparent 70%);
                    }}
                "#, FLOAT_RISE_PX)}
            </style>
            <div class="orb orb-1" style={float_style(ORB_PHASE_MS[0])}></div>
            <div class="orb orb-2" style={float_style(ORB_PHASE_MS[1])}></div>
            <div class="orb orb-3" style={float_style(ORB_PHASE_MS[2])}></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{float_style, ORB_PHASE_MS};

    #[test]
    fn loop_carries_period_and_repeats_forever() {
        let style = float_style(0);
        assert!(style.contains("3000ms"));
        assert!(style.contains("infinite"));
    }

    #[test]
    fn sibling_orbs_are_out_of_phase() {
        let styles: Vec<String> = ORB_PHASE_MS.iter().map(|ms| float_style(*ms)).collect();
        assert!(styles[0].contains(" 0ms infinite"));
        assert!(styles[1].contains(" 500ms infinite"));
        assert!(styles[2].contains(" 1000ms infinite"));
    }
}
