use crate::input::InputChannel;
use crate::round::state::PlayerId;

/// A winning press, as decided by one arbitration pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Buzz {
    pub player: PlayerId,
    /// Time from window open to this poll, in ms. Includes the debounce
    /// latency, the same for every player.
    pub reaction_ms: u32,
}

/// Decide the winner among the channels' freshly sampled states.
///
/// Scans in ascending player order and takes the first channel whose press
/// edge fired this poll, so two presses that stabilize within the same poll
/// tie-break to the lower index deterministically. Returns `None` when
/// nobody pressed. Runs in one pass with no allocation.
pub fn arbitrate(channels: &[InputChannel], open_ms: u32, now_ms: u32) -> Option<Buzz> {
    channels
        .iter()
        .position(|ch| ch.just_pressed())
        .map(|index| Buzz {
            player: PlayerId(index),
            reaction_ms: now_ms.wrapping_sub(open_ms),
        })
}
