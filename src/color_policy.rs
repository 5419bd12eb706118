//! Color assignment for bracket tokens.
//!
//! The policy is a pure function of the nesting state and the settings:
//!
//! - **Consecutive**: one cycle shared by every rule, indexed by the combined
//!   nesting depth.
//! - **Independent**: each rule cycles through its own colors, indexed by how
//!   many brackets of that rule are open on the current nesting path.
//!
//! `force_iteration_color_cycle` replaces the depth index with "one after the
//! previous opener", and `force_unique_opening_color` skips a color equal to
//! the previous opener's. Both remember the previous opener per scope (global
//! in consecutive mode, per rule in independent mode) in [`CycleMemory`].
//! The index an opener receives is pinned on its stack frame and reused by its
//! matching closer.

use crate::config::{ColorMode, Settings};
use crate::scanner::{BracketToken, CycleMemory, OpenBracket};

/// Color index for an opener of `rule`, given the stack before it is pushed.
pub fn open_color_index(
    settings: &Settings,
    rule: usize,
    stack: &[OpenBracket],
    cycle: &mut CycleMemory,
) -> usize {
    let cycle_len = settings.rules.get(rule).map_or(1, |r| r.cycle_len());
    let previous = match settings.color_mode {
        ColorMode::Consecutive => cycle.consecutive,
        ColorMode::Independent => cycle.per_rule.get(&rule).copied(),
    };

    let mut index = if settings.force_iteration_color_cycle {
        previous.map_or(0, |p| (p + 1) % cycle_len)
    } else {
        nesting_index(settings.color_mode, rule, stack) % cycle_len
    };

    if settings.force_unique_opening_color && cycle_len > 1 && previous == Some(index) {
        index = (index + 1) % cycle_len;
    }

    if settings.tracks_previous_opener() {
        match settings.color_mode {
            ColorMode::Consecutive => cycle.consecutive = Some(index),
            ColorMode::Independent => {
                cycle.per_rule.insert(rule, index);
            }
        }
    }

    index
}

/// Color index for the closer of `frame`, given the stack after it is popped.
pub fn close_color_index(settings: &Settings, frame: &OpenBracket, remaining: &[OpenBracket]) -> usize {
    if settings.tracks_previous_opener() {
        return frame.color_index;
    }
    let cycle_len = settings.rules.get(frame.rule).map_or(1, |r| r.cycle_len());
    nesting_index(settings.color_mode, frame.rule, remaining) % cycle_len
}

/// Color of a resolved token; orphans always take their rule's orphan color.
pub fn color_for<'a>(token: &BracketToken, settings: &'a Settings) -> &'a str {
    let Some(rule) = settings.rules.get(token.rule) else {
        return "";
    };
    if token.is_orphan() {
        &rule.orphan_color
    } else {
        rule.color(token.color_index)
    }
}

fn nesting_index(mode: ColorMode, rule: usize, stack: &[OpenBracket]) -> usize {
    match mode {
        ColorMode::Consecutive => stack.len(),
        ColorMode::Independent => stack.iter().filter(|open| open.rule == rule).count(),
    }
}

#[cfg(test)]
#[path = "color_policy_tests.rs"]
mod color_policy_tests;
