use std::fmt;

/// Zero-based player identity, assigned by wiring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub usize);

impl PlayerId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Where a round currently stands.
///
/// Facts about a round live in the variant that needs them: the open
/// timestamp appears once the window opens, the winner and press time only
/// once somebody has won. There is no phase in which a stale winner or
/// timestamp is reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for the operator to arm a round.
    Idle,
    /// Ticking down; player presses do not count yet.
    Countdown,
    /// Buzzers live, first press wins.
    Open { open_ms: u32 },
    /// Won and frozen until the operator clears it.
    Locked {
        open_ms: u32,
        winner: PlayerId,
        press_ms: u32,
    },
}

impl RoundPhase {
    pub fn name(&self) -> &'static str {
        match self {
            RoundPhase::Idle => "idle",
            RoundPhase::Countdown => "countdown",
            RoundPhase::Open { .. } => "open",
            RoundPhase::Locked { .. } => "locked",
        }
    }
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything that can happen to a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEvent {
    /// Operator pressed the reset button.
    Reset,
    /// The countdown finished and the window opened at `at_ms`.
    Opened { at_ms: u32 },
    /// A player's press won arbitration at `at_ms`.
    Buzz { player: PlayerId, at_ms: u32 },
}

/// Side effect requested by a transition. The state machine itself never
/// touches a collaborator; the controller executes these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEffect {
    StartCountdown,
    AnnounceOpen,
    AnnounceWinner { player: PlayerId, reaction_ms: u32 },
    ClearRound,
}

/// One quiz round, reused in place across the idle/countdown/open/locked
/// cycle.
#[derive(Debug)]
pub struct Round {
    phase: RoundPhase,
}

impl Round {
    pub fn new() -> Self {
        Self {
            phase: RoundPhase::Idle,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Apply one event and return the effect the transition asks for.
    ///
    /// Total over every phase/event pair: combinations outside the cycle
    /// (reset mid-countdown, a buzz while locked) leave the phase untouched
    /// and return `None`. Reaction time is derived here from the two stored
    /// timestamps with `wrapping_sub`, so a window straddling the clock
    /// wraparound still reports correctly.
    pub fn apply(&mut self, event: RoundEvent) -> Option<RoundEffect> {
        let (next, effect) = match (self.phase, event) {
            (RoundPhase::Idle, RoundEvent::Reset) => {
                (RoundPhase::Countdown, Some(RoundEffect::StartCountdown))
            }
            (RoundPhase::Countdown, RoundEvent::Opened { at_ms }) => (
                RoundPhase::Open { open_ms: at_ms },
                Some(RoundEffect::AnnounceOpen),
            ),
            (RoundPhase::Open { open_ms }, RoundEvent::Buzz { player, at_ms }) => (
                RoundPhase::Locked {
                    open_ms,
                    winner: player,
                    press_ms: at_ms,
                },
                Some(RoundEffect::AnnounceWinner {
                    player,
                    reaction_ms: at_ms.wrapping_sub(open_ms),
                }),
            ),
            (RoundPhase::Locked { .. }, RoundEvent::Reset) => {
                (RoundPhase::Idle, Some(RoundEffect::ClearRound))
            }
            (phase, _) => (phase, None),
        };
        self.phase = next;
        effect
    }

    /// When the window opened, if it has.
    pub fn open_ms(&self) -> Option<u32> {
        match self.phase {
            RoundPhase::Open { open_ms } | RoundPhase::Locked { open_ms, .. } => Some(open_ms),
            _ => None,
        }
    }

    /// Who won, if anyone has.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            RoundPhase::Locked { winner, .. } => Some(winner),
            _ => None,
        }
    }

    /// Winning press timestamp, if locked.
    pub fn press_ms(&self) -> Option<u32> {
        match self.phase {
            RoundPhase::Locked { press_ms, .. } => Some(press_ms),
            _ => None,
        }
    }

    /// Winner's reaction time in ms, if locked. Full precision; display
    /// clamping happens at presentation, never here.
    pub fn reaction_ms(&self) -> Option<u32> {
        match self.phase {
            RoundPhase::Locked {
                open_ms, press_ms, ..
            } => Some(press_ms.wrapping_sub(open_ms)),
            _ => None,
        }
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}
