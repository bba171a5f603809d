use web_sys::Element;
use yew::prelude::*;

use crate::motion::gate::ViewportWatcher;

pub const REVEAL_DURATION_MS: u32 = 800;
pub const STAGGER_STEP_MS: u32 = 120;
pub const HIDDEN_OFFSET_PX: i32 = 24;
pub const REVEAL_EASING: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

/// Delay for the nth sibling of a group. Siblings sharing a gate all start
/// their delay timers on the same render; only this offset separates them.
pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

/// Inline style for one reveal entry. Per-frame interpolation is delegated
/// to the CSS transition engine; this only flips hidden -> final.
pub fn reveal_style(revealed: bool, delay_ms: u32) -> String {
    let transition = format!(
        "transition: opacity {}ms {} {}ms, transform {}ms {} {}ms;",
        REVEAL_DURATION_MS, REVEAL_EASING, delay_ms, REVEAL_DURATION_MS, REVEAL_EASING, delay_ms
    );
    if revealed {
        format!("opacity: 1; transform: translateY(0); {}", transition)
    } else {
        format!(
            "opacity: 0; transform: translateY({}px); {}",
            HIDDEN_OFFSET_PX, transition
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealGroupProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub item_class: Classes,
    pub children: Children,
}

/// Ordered group of entries behind one shared gate: the container's first
/// visibility reveals every child, staggered by sibling index.
#[function_component(RevealGroup)]
pub fn reveal_group(props: &RevealGroupProps) -> Html {
    let node_ref = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let watcher = node_ref
                    .cast::<Element>()
                    .map(|region| ViewportWatcher::watch(&region, move || revealed.set(true)));
                move || drop(watcher)
            },
            (),
        );
    }

    html! {
        <div ref={node_ref} class={props.class.clone()}>
            { for props.children.iter().enumerate().map(|(index, child)| html! {
                <div
                    class={props.item_class.clone()}
                    style={reveal_style(*revealed, stagger_delay_ms(index))}
                >
                    { child }
                </div>
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(0)]
    pub delay_ms: u32,
    pub children: Children,
}

/// Single region with its own gate.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let watcher = node_ref
                    .cast::<Element>()
                    .map(|region| ViewportWatcher::watch(&region, move || revealed.set(true)));
                move || drop(watcher)
            },
            (),
        );
    }

    html! {
        <div
            ref={node_ref}
            class={props.class.clone()}
            style={reveal_style(*revealed, props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{reveal_style, stagger_delay_ms, REVEAL_DURATION_MS, STAGGER_STEP_MS};

    #[test]
    fn stagger_preserves_sibling_order() {
        let mut previous_finish = 0;
        for index in 0..6 {
            let finish = stagger_delay_ms(index) + REVEAL_DURATION_MS;
            assert!(finish >= previous_finish);
            previous_finish = finish;
        }
    }

    #[test]
    fn sibling_delays_differ_by_one_step() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(1) - stagger_delay_ms(0), STAGGER_STEP_MS);
        assert_eq!(stagger_delay_ms(4), 4 * STAGGER_STEP_MS);
    }

    #[test]
    fn hidden_entries_sit_offset_and_transparent() {
        let style = reveal_style(false, 0);
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("translateY(24px)"));
    }

    #[test]
    fn fired_gate_sends_entries_to_final_state() {
        let style = reveal_style(true, stagger_delay_ms(2));
        assert!(style.contains("opacity: 1"));
        assert!(style.contains("translateY(0)"));
        assert!(style.contains("240ms"));
    }
}
