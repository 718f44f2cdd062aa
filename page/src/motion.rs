//! Entrance and hover animations as explicit two-state transition tables.
//!
//! Each animated node carries one motion class. The table behind that class
//! says which state the node renders in, which trigger moves it to which
//! state, and what the node looks like in each state. The stylesheet compiler
//! turns a table into CSS: a `Mount` rule becomes a run-once keyframe
//! animation, a `PointerEnter` rule becomes a `:hover` transition.

use std::fmt::Debug;

/// Events that can move an animated node between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Node inserted into the document.
    Mount,
    /// Pointer moved onto the node.
    PointerEnter,
    /// Pointer moved off the node.
    PointerLeave,
}

/// Visual properties a motion state controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// `0.0..=1.0`
    pub opacity: f32,
    /// Vertical offset in px, positive is down.
    pub offset_y: i32,
}

impl VisualState {
    /// `transform` value for the offset.
    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.offset_y)
    }

    /// `opacity` value.
    pub fn opacity_css(&self) -> String {
        format!("{}", self.opacity)
    }
}

/// A state of an animated node.
pub trait MotionState: Copy + Eq + Debug {
    /// What the node looks like in this state.
    fn visual(self) -> VisualState;
}

/// Entrance animation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Hidden, 20px below its resting place.
    Initial,
    /// Visible and in place.
    Settled,
}

impl MotionState for Presence {
    fn visual(self) -> VisualState {
        match self {
            Self::Initial => VisualState {
                opacity: 0.0,
                offset_y: 20,
            },
            Self::Settled => VisualState {
                opacity: 1.0,
                offset_y: 0,
            },
        }
    }
}

/// Hover animation states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lift {
    /// In place.
    Rest,
    /// Raised 10px.
    Hovered,
}

impl MotionState for Lift {
    fn visual(self) -> VisualState {
        match self {
            Self::Rest => VisualState {
                opacity: 1.0,
                offset_y: 0,
            },
            Self::Hovered => VisualState {
                opacity: 1.0,
                offset_y: -10,
            },
        }
    }
}

/// One row of a transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule<S> {
    /// State the rule applies in.
    pub from: S,
    /// Event that fires it.
    pub trigger: Trigger,
    /// Resulting state.
    pub to: S,
}

/// How a transition between two states plays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Transition length.
    pub duration_ms: u32,
    /// Wait before starting.
    pub delay_ms: u32,
    /// CSS timing function.
    pub easing: &'static str,
}

/// Transition table for one kind of animated node.
#[derive(Debug, Clone, Copy)]
pub struct MotionTable<S: 'static> {
    /// Class name the page puts on animated nodes.
    pub class: &'static str,
    /// State the node is rendered in.
    pub initial: S,
    /// Transitions; a trigger with no row is ignored.
    pub rules: &'static [Rule<S>],
    /// Shared by every transition in the table.
    pub timing: Timing,
}

impl<S: MotionState + 'static> MotionTable<S> {
    /// Next state for `trigger`. Triggers with no matching row leave the
    /// state unchanged.
    pub fn step(&self, state: S, trigger: Trigger) -> S {
        self.rules
            .iter()
            .find(|r| r.from == state && r.trigger == trigger)
            .map(|r| r.to)
            .unwrap_or(state)
    }

    /// Fold a trigger sequence starting from the initial state.
    pub fn run(&self, triggers: &[Trigger]) -> S {
        triggers
            .iter()
            .fold(self.initial, |state, &t| self.step(state, t))
    }

    fn has_trigger(&self, trigger: Trigger) -> bool {
        self.rules.iter().any(|r| r.trigger == trigger)
    }

    /// Final declarations for static evaluation: the settled state after
    /// mount, plus the hovered state when `hovered` is set.
    pub fn resolved(&self, hovered: bool) -> Vec<(String, String)> {
        let mut state = self.step(self.initial, Trigger::Mount);
        if hovered {
            state = self.step(state, Trigger::PointerEnter);
        }
        let visual = state.visual();
        vec![
            ("opacity".to_string(), visual.opacity_css()),
            ("transform".to_string(), visual.transform()),
        ]
    }

    /// Compile the table to CSS rules targeting `.{class}`.
    pub fn css(&self) -> String {
        let class = self.class;
        let Timing {
            duration_ms,
            delay_ms,
            easing,
        } = self.timing;
        let mut css = String::new();

        if self.has_trigger(Trigger::Mount) {
            let from = self.initial.visual();
            let to = self.step(self.initial, Trigger::Mount).visual();
            css.push_str(&format!(
                "@keyframes {class} {{\n    from {{ opacity: {}; transform: {}; }}\n    to {{ opacity: {}; transform: {}; }}\n}}\n",
                from.opacity_css(),
                from.transform(),
                to.opacity_css(),
                to.transform(),
            ));
            css.push_str(&format!(
                ".{class} {{ animation: {class} {duration_ms}ms {easing} {delay_ms}ms 1 both; }}\n"
            ));
        }

        if self.has_trigger(Trigger::PointerEnter) {
            let rest = self.initial.visual();
            let hovered = self.step(self.initial, Trigger::PointerEnter).visual();
            css.push_str(&format!(
                ".{class} {{ transform: {}; transition: transform {duration_ms}ms {easing} {delay_ms}ms; }}\n",
                rest.transform()
            ));
            css.push_str(&format!(
                ".{class}:hover {{ transform: {}; }}\n",
                hovered.transform()
            ));
        }

        css
    }
}

const PRESENCE_RULES: &[Rule<Presence>] = &[Rule {
    from: Presence::Initial,
    trigger: Trigger::Mount,
    to: Presence::Settled,
}];

const LIFT_RULES: &[Rule<Lift>] = &[
    Rule {
        from: Lift::Rest,
        trigger: Trigger::PointerEnter,
        to: Lift::Hovered,
    },
    Rule {
        from: Lift::Hovered,
        trigger: Trigger::PointerLeave,
        to: Lift::Rest,
    },
];

/// Fade-and-rise on mount for the intro block.
pub const ENTRANCE: MotionTable<Presence> = MotionTable {
    class: "motion-enter",
    initial: Presence::Initial,
    rules: PRESENCE_RULES,
    timing: Timing {
        duration_ms: 600,
        delay_ms: 0,
        easing: "ease-out",
    },
};

/// Same as [`ENTRANCE`], started after the intro.
pub const ENTRANCE_LATE: MotionTable<Presence> = MotionTable {
    class: "motion-enter-late",
    initial: Presence::Initial,
    rules: PRESENCE_RULES,
    timing: Timing {
        duration_ms: 600,
        delay_ms: 200,
        easing: "ease-out",
    },
};

/// Feature card hover lift.
pub const LIFT: MotionTable<Lift> = MotionTable {
    class: "motion-lift",
    initial: Lift::Rest,
    rules: LIFT_RULES,
    timing: Timing {
        duration_ms: 200,
        delay_ms: 0,
        easing: "ease-out",
    },
};

/// CSS for a motion class, or `None` if the class is not a motion class.
pub fn css_for(class: &str) -> Option<String> {
    match class {
        c if c == ENTRANCE.class => Some(ENTRANCE.css()),
        c if c == ENTRANCE_LATE.class => Some(ENTRANCE_LATE.css()),
        c if c == LIFT.class => Some(LIFT.css()),
        _ => None,
    }
}

/// Final declarations for a motion class (see [`MotionTable::resolved`]).
pub fn resolved_for(class: &str, hovered: bool) -> Option<Vec<(String, String)>> {
    match class {
        c if c == ENTRANCE.class => Some(ENTRANCE.resolved(hovered)),
        c if c == ENTRANCE_LATE.class => Some(ENTRANCE_LATE.resolved(hovered)),
        c if c == LIFT.class => Some(LIFT.resolved(hovered)),
        _ => None,
    }
}
