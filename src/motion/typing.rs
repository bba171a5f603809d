use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::Element;
use yew::prelude::*;

use crate::motion::gate::ViewportWatcher;

pub const TYPE_TICK_MS: u32 = 80;
pub const TYPE_CURSOR: &str = "▍";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingPhase {
    Idle,
    Revealing,
    Complete,
}

/// Character-by-character reveal of a fixed string. Counts chars, not bytes,
/// so multi-byte text never splits a code point. `Complete` is terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingSequencer {
    chars: Vec<char>,
    revealed: usize,
    phase: TypingPhase,
}

impl TypingSequencer {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
            phase: TypingPhase::Idle,
        }
    }

    /// Starts revealing. Only meaningful in `Idle`; an empty source string
    /// has nothing to tick and lands directly in `Complete`.
    pub fn begin(&mut self) {
        if self.phase != TypingPhase::Idle {
            return;
        }
        self.phase = if self.chars.is_empty() {
            TypingPhase::Complete
        } else {
            TypingPhase::Revealing
        };
    }

    /// Advances one character while revealing. No-op in `Idle` and `Complete`.
    pub fn tick(&mut self) -> TypingPhase {
        if self.phase == TypingPhase::Revealing {
            self.revealed += 1;
            if self.revealed == self.chars.len() {
                self.phase = TypingPhase::Complete;
            }
        }
        self.phase
    }

    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == TypingPhase::Complete
    }

    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    pub fn visible_text(&self) -> String {
        self.chars.iter().take(self.revealed).collect()
    }

    /// Revealed prefix with the cursor marker appended unconditionally,
    /// including at length zero and after completion.
    pub fn output(&self) -> String {
        let mut out = self.visible_text();
        out.push_str(TYPE_CURSOR);
        out
    }
}

#[derive(Properties, PartialEq)]
pub struct TypedTextProps {
    pub text: String,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypedText)]
pub fn typed_text(props: &TypedTextProps) -> Html {
    let node_ref = use_node_ref();
    let started = use_state(|| false);
    let revealed = use_state(String::new);

    // Gate on first visibility of the text's own region
    {
        let node_ref = node_ref.clone();
        let started = started.clone();
        use_effect_with_deps(
            move |_| {
                let watcher = node_ref
                    .cast::<Element>()
                    .map(|region| ViewportWatcher::watch(&region, move || started.set(true)));
                move || drop(watcher)
            },
            (),
        );
    }

    // No timer exists while the gate is closed. Once it fires, one interval
    // drives the sequencer and stops itself at the terminal state; the
    // cleanup drains the same slot so unmounting cancels a reveal in flight.
    {
        let revealed = revealed.clone();
        let text = props.text.clone();
        use_effect_with_deps(
            move |started: &bool| {
                let interval_slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if *started {
                    let sequencer = Rc::new(RefCell::new(TypingSequencer::new(&text)));
                    sequencer.borrow_mut().begin();
                    if sequencer.borrow().is_complete() {
                        revealed.set(sequencer.borrow().visible_text());
                    } else {
                        let slot = interval_slot.clone();
                        let interval = Interval::new(TYPE_TICK_MS, move || {
                            let phase = sequencer.borrow_mut().tick();
                            revealed.set(sequencer.borrow().visible_text());
                            if phase == TypingPhase::Complete {
                                if let Some(interval) = slot.borrow_mut().take() {
                                    drop(interval);
                                }
                            }
                        });
                        *interval_slot.borrow_mut() = Some(interval);
                    }
                }
                move || {
                    if let Some(interval) = interval_slot.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            *started,
        );
    }

    html! {
        <span ref={node_ref} class={classes!("typed-text", props.class.clone())}>
            { (*revealed).clone() }
            <span class="typing-cursor">{ TYPE_CURSOR }</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::{TypingPhase, TypingSequencer, TYPE_CURSOR};

    #[test]
    fn idle_until_begun() {
        let mut sequencer = TypingSequencer::new("hello");
        assert_eq!(sequencer.phase(), TypingPhase::Idle);
        sequencer.tick();
        sequencer.tick();
        assert_eq!(sequencer.revealed_len(), 0);
        assert_eq!(sequencer.output(), TYPE_CURSOR);
    }

    #[test]
    fn reveals_one_char_per_tick() {
        let mut sequencer = TypingSequencer::new("hello");
        sequencer.begin();
        for k in 1..=7 {
            sequencer.tick();
            assert_eq!(sequencer.revealed_len(), k.min(5));
        }
    }

    #[test]
    fn complete_is_terminal() {
        let mut sequencer = TypingSequencer::new("hi");
        sequencer.begin();
        sequencer.tick();
        assert_eq!(sequencer.tick(), TypingPhase::Complete);
        let settled = sequencer.clone();
        sequencer.tick();
        sequencer.begin();
        assert_eq!(sequencer, settled);
    }

    #[test]
    fn full_reveal_of_hello() {
        let mut sequencer = TypingSequencer::new("hello");
        assert_eq!(sequencer.output(), TYPE_CURSOR);
        sequencer.begin();
        let mut phase = sequencer.phase();
        for _ in 0..5 {
            phase = sequencer.tick();
        }
        assert_eq!(phase, TypingPhase::Complete);
        assert_eq!(sequencer.output(), format!("hello{}", TYPE_CURSOR));
    }

    #[test]
    fn empty_text_completes_without_ticking() {
        let mut sequencer = TypingSequencer::new("");
        sequencer.begin();
        assert!(sequencer.is_complete());
        assert_eq!(sequencer.output(), TYPE_CURSOR);
    }

    #[test]
    fn counts_chars_not_bytes() {
        let mut sequencer = TypingSequencer::new("naïve");
        sequencer.begin();
        for _ in 0..5 {
            sequencer.tick();
        }
        assert!(sequencer.is_complete());
        assert_eq!(sequencer.visible_text(), "naïve");
    }
}
