//! The UI's command surface.
//!
//! The pedal's touch UI never reaches into the chain directly: it resolves
//! an [`EffectId`](crate::chain::EffectId) and issues one of four commands.
//! Every command mutes the output device for the duration of the edit —
//! parameter state and block processing share the main loop, so the mute
//! only serializes the edit against the audio *hardware*, keeping a
//! half-applied edit from reaching the speaker mid-block.

use pedalera_core::{Effect, EffectWithParams};

use crate::chain::EffectId;
use crate::coordinator::BufferCoordinator;
use crate::driver::AudioIoDriver;

/// One UI edit against a single effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    /// Flip the effect's enable flag.
    ToggleEnabled,
    /// Move the parameter cursor forward (wraps).
    SelectNext,
    /// Move the parameter cursor backward (wraps).
    SelectPrevious,
    /// Nudge the selected parameter by ±1 tick (saturating).
    Adjust(i32),
}

impl<D: AudioIoDriver> BufferCoordinator<D> {
    /// Apply one UI command to the addressed effect, muting the output
    /// around the edit.
    pub fn handle_command(&mut self, id: EffectId, command: ControlCommand) {
        self.driver_mut().set_muted(true);

        #[cfg(feature = "tracing")]
        tracing::debug!(?id, ?command, "control command");

        let effect = self.chain_mut().effect_mut(id);
        match command {
            ControlCommand::ToggleEnabled => {
                let enabled = !effect.enabled();
                effect.set_enabled(enabled);
            }
            ControlCommand::SelectNext => effect.select_next(),
            ControlCommand::SelectPrevious => effect.select_previous(),
            ControlCommand::Adjust(direction) => effect.adjust(direction),
        }

        self.driver_mut().set_muted(false);
    }
}
