use crate::round::state::PlayerId;

/// Largest reaction the three reaction cells can show.
pub const MAX_SHOWN_REACTION_MS: u16 = 999;

/// One display cell holds the player number, so it wraps at ten.
const PLAYER_CELL_WRAP: usize = 10;

/// What the readout shows for a locked round. Derived from the stored
/// round facts at render time; the stored values themselves are never
/// clamped or wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinnerReadout {
    /// One-based player number folded into a single cell: players 1..=9
    /// show as themselves, player 10 shows as 0, and so on around.
    pub player_digit: u8,
    /// Reaction in ms, saturated at `MAX_SHOWN_REACTION_MS`.
    pub shown_reaction_ms: u16,
}

pub fn winner_readout(player: PlayerId, reaction_ms: u32) -> WinnerReadout {
    WinnerReadout {
        player_digit: ((player.index() + 1) % PLAYER_CELL_WRAP) as u8,
        shown_reaction_ms: reaction_ms.min(u32::from(MAX_SHOWN_REACTION_MS)) as u16,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn players_show_one_based() {
        assert_eq!(winner_readout(PlayerId(0), 0).player_digit, 1);
        assert_eq!(winner_readout(PlayerId(3), 0).player_digit, 4);
        assert_eq!(winner_readout(PlayerId(8), 0).player_digit, 9);
    }

    #[test]
    fn tenth_player_wraps_to_zero() {
        assert_eq!(winner_readout(PlayerId(9), 0).player_digit, 0);
        assert_eq!(winner_readout(PlayerId(10), 0).player_digit, 1);
    }

    #[test]
    fn fast_reaction_passes_through() {
        assert_eq!(winner_readout(PlayerId(0), 55).shown_reaction_ms, 55);
        assert_eq!(winner_readout(PlayerId(0), 999).shown_reaction_ms, 999);
    }

    #[test]
    fn slow_reaction_saturates() {
        assert_eq!(winner_readout(PlayerId(0), 1_000).shown_reaction_ms, 999);
        assert_eq!(winner_readout(PlayerId(0), 48_213).shown_reaction_ms, 999);
    }
}
