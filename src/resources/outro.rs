//! Drop trigger state resource.
//!
//! [`OutroState`] edge-detects the drop condition: the transition into the
//! outro fires only on the rising edge, so the outro track starts exactly
//! once per contiguous interval during which the condition holds, not once
//! per frame.

use bevy_ecs::prelude::Resource;

/// Edge-detecting state for the drop trigger.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct OutroState {
    /// True while the drop condition currently holds.
    pub is_outro: bool,
}

impl OutroState {
    pub fn new() -> Self {
        Self { is_outro: false }
    }

    /// Feed one evaluation of the drop condition.
    ///
    /// Returns `true` exactly on the rising edge (condition true while the
    /// state was idle). While the condition keeps holding nothing fires; once
    /// it clears the state re-arms.
    pub fn advance(&mut self, should_drop: bool) -> bool {
        if should_drop && !self.is_outro {
            self.is_outro = true;
            true
        } else {
            if !should_drop {
                self.is_outro = false;
            }
            false
        }
    }
}
