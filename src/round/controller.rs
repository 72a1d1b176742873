use tracing::{debug, info};

use crate::config::Settings;
use crate::input::{DebounceConfig, InputChannel};
use crate::round::arbiter::arbitrate;
use crate::round::countdown::{Countdown, CountdownStep};
use crate::round::present::winner_readout;
use crate::round::state::{Round, RoundEffect, RoundEvent, RoundPhase};
use crate::traits::{BLANK_PATTERN, Clock, Display, IDLE_PATTERN, Line, LineReader, Sounder};

/// Sounder pulse for each countdown tick.
pub const TICK_PULSE_MS: u32 = 80;
/// Longer pulse announcing the open window.
pub const OPEN_PULSE_MS: u32 = 400;
/// Pulse confirming a locked win.
pub const WINNER_PULSE_MS: u32 = 150;

/// Label shown while the window is open.
const OPEN_TEXT: &str = "go";

/// Readout cell used for countdown digits (rightmost).
const TICK_DIGIT_POS: u8 = 3;

/// Borrowed collaborators for one poll. The controller owns no hardware;
/// every external effect flows through these seams.
pub struct Io<'a> {
    pub clock: &'a dyn Clock,
    pub lines: &'a mut dyn LineReader,
    pub display: &'a mut dyn Display,
    pub sounder: &'a mut dyn Sounder,
}

/// Drives the idle/countdown/open/locked cycle from polled inputs.
///
/// One `poll` per loop iteration: sample every channel, then let the
/// current phase decide what the fresh states mean. Channels are sampled
/// unconditionally so debounce history stays correct even in phases that
/// ignore a line.
pub struct RoundController {
    round: Round,
    countdown: Option<Countdown>,
    reset: InputChannel,
    players: Vec<InputChannel>,
    debounce: DebounceConfig,
    countdown_secs: u8,
    brightness: u8,
}

impl RoundController {
    pub fn new(settings: &Settings) -> Self {
        Self {
            round: Round::new(),
            countdown: None,
            reset: InputChannel::new(),
            players: vec![InputChannel::new(); settings.players],
            debounce: DebounceConfig::new(settings.debounce_ms),
            countdown_secs: settings.countdown_secs,
            brightness: settings.brightness,
        }
    }

    /// One-time display bring-up. Call before the first `poll`.
    pub fn startup(&self, io: &mut Io<'_>) {
        io.display.set_brightness(self.brightness);
        io.display.show_pattern(IDLE_PATTERN);
        info!(
            players = self.players.len(),
            countdown_secs = self.countdown_secs,
            debounce_ms = self.debounce.interval_ms,
            "Controller: ready"
        );
    }

    /// Sample every line once and advance the round if anything became due.
    pub fn poll(&mut self, io: &mut Io<'_>) {
        let now_ms = io.clock.now_ms();

        let reset_raw = io.lines.level(Line::Reset);
        self.reset.sample(reset_raw, now_ms, &self.debounce);
        for (index, channel) in self.players.iter_mut().enumerate() {
            let raw = io.lines.level(Line::Player(index));
            channel.sample(raw, now_ms, &self.debounce);
        }

        match self.round.phase() {
            RoundPhase::Idle => {
                if self.reset.just_pressed() {
                    let effect = self.round.apply(RoundEvent::Reset);
                    self.run_effect(effect, now_ms, io);
                }
            }
            RoundPhase::Countdown => {
                self.drive_countdown(now_ms, io);
            }
            RoundPhase::Open { open_ms } => {
                if let Some(hit) = arbitrate(&self.players, open_ms, now_ms) {
                    debug!(
                        player = hit.player.index(),
                        reaction_ms = hit.reaction_ms,
                        "Arbiter: first press"
                    );
                    let effect = self.round.apply(RoundEvent::Buzz {
                        player: hit.player,
                        at_ms: now_ms,
                    });
                    self.run_effect(effect, now_ms, io);
                }
            }
            RoundPhase::Locked { .. } => {
                if self.reset.just_pressed() {
                    let effect = self.round.apply(RoundEvent::Reset);
                    self.run_effect(effect, now_ms, io);
                }
            }
        }
    }

    /// Poll the countdown sequencer and render whatever came due.
    fn drive_countdown(&mut self, now_ms: u32, io: &mut Io<'_>) {
        let step = match self.countdown.as_mut() {
            Some(seq) => seq.step(now_ms),
            None => return,
        };
        match step {
            CountdownStep::Pending => {}
            CountdownStep::Tick(digit) => {
                debug!(digit, "Round: countdown tick");
                io.display.show_number(u16::from(digit), false, 1, TICK_DIGIT_POS);
                io.sounder.pulse(TICK_PULSE_MS);
            }
            CountdownStep::Blank => {
                io.display.show_pattern(BLANK_PATTERN);
            }
            CountdownStep::Open { open_ms } => {
                self.countdown = None;
                let effect = self.round.apply(RoundEvent::Opened { at_ms: open_ms });
                self.run_effect(effect, now_ms, io);
            }
        }
    }

    fn run_effect(&mut self, effect: Option<RoundEffect>, now_ms: u32, io: &mut Io<'_>) {
        let Some(effect) = effect else { return };
        match effect {
            RoundEffect::StartCountdown => {
                info!(seconds = self.countdown_secs, "Round: armed, countdown started");
                self.countdown = Some(Countdown::start(self.countdown_secs, now_ms));
                // First tick (or an immediate open) lands in this same poll.
                self.drive_countdown(now_ms, io);
            }
            RoundEffect::AnnounceOpen => {
                info!(at_ms = now_ms, "Round: window open");
                io.display.show_text(OPEN_TEXT);
                io.sounder.pulse(OPEN_PULSE_MS);
            }
            RoundEffect::AnnounceWinner { player, reaction_ms } => {
                let readout = winner_readout(player, reaction_ms);
                info!(
                    player = player.index(),
                    reaction_ms,
                    shown_ms = readout.shown_reaction_ms,
                    "Round: locked"
                );
                io.display
                    .show_number(u16::from(readout.player_digit), false, 1, 0);
                io.display.show_number(readout.shown_reaction_ms, true, 3, 1);
                io.sounder.pulse(WINNER_PULSE_MS);
            }
            RoundEffect::ClearRound => {
                info!("Round: cleared");
                io.display.show_pattern(IDLE_PATTERN);
            }
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn phase(&self) -> RoundPhase {
        self.round.phase()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::round::countdown::TICK_SLOT_MS;
    use crate::round::state::PlayerId;
    use crate::sim::{DisplayCall, DisplayRecorder, SounderRecorder};
    use crate::traits::{Level, ManualClock};

    /// Line fixture with directly settable levels, idle `High` by default.
    struct TestLines {
        levels: HashMap<Line, Level>,
    }

    impl TestLines {
        fn new() -> Self {
            Self {
                levels: HashMap::new(),
            }
        }

        fn set(&mut self, line: Line, level: Level) {
            self.levels.insert(line, level);
        }
    }

    impl LineReader for TestLines {
        fn level(&mut self, line: Line) -> Level {
            self.levels.get(&line).copied().unwrap_or(Level::High)
        }
    }

    struct Rig {
        controller: RoundController,
        clock: ManualClock,
        lines: TestLines,
        display: DisplayRecorder,
        sounder: SounderRecorder,
    }

    impl Rig {
        fn new() -> Self {
            Self::with_settings(&Settings::default())
        }

        fn with_settings(settings: &Settings) -> Self {
            Self {
                controller: RoundController::new(settings),
                clock: ManualClock::new(),
                lines: TestLines::new(),
                display: DisplayRecorder::new(),
                sounder: SounderRecorder::new(),
            }
        }

        /// Poll once per ms from the clock's current time through `until_ms`.
        fn run_until(&mut self, until_ms: u32) {
            loop {
                let now = self.clock.now_ms();
                let mut io = Io {
                    clock: &self.clock,
                    lines: &mut self.lines,
                    display: &mut self.display,
                    sounder: &mut self.sounder,
                };
                self.controller.poll(&mut io);
                if now == until_ms {
                    break;
                }
                self.clock.advance(1);
            }
        }

        fn press(&mut self, line: Line) {
            self.lines.set(line, Level::Low);
        }

        fn release(&mut self, line: Line) {
            self.lines.set(line, Level::High);
        }
    }

    /// Default settings: 25 ms debounce, 3 s countdown. Reset pressed at
    /// t=0 arms at t=25, so the window opens at 25 + 3 slots.
    const ARMED_MS: u32 = 25;
    const OPEN_MS: u32 = ARMED_MS + 3 * TICK_SLOT_MS;

    fn armed_rig() -> Rig {
        let mut rig = Rig::new();
        rig.press(Line::Reset);
        rig.run_until(ARMED_MS);
        rig.release(Line::Reset);
        rig
    }

    #[test]
    fn startup_initializes_display() {
        let mut rig = Rig::new();
        let mut io = Io {
            clock: &rig.clock,
            lines: &mut rig.lines,
            display: &mut rig.display,
            sounder: &mut rig.sounder,
        };
        rig.controller.startup(&mut io);
        assert_eq!(
            rig.display.calls(),
            &[
                DisplayCall::Brightness(Settings::default().brightness),
                DisplayCall::Pattern(IDLE_PATTERN),
            ]
        );
    }

    #[test]
    fn reset_edge_arms_after_debounce() {
        let mut rig = Rig::new();
        rig.press(Line::Reset);
        rig.run_until(24);
        assert_eq!(rig.controller.phase(), RoundPhase::Idle);
        rig.run_until(25);
        assert_eq!(rig.controller.phase(), RoundPhase::Countdown);
        // First tick rendered in the arming poll.
        assert_eq!(
            rig.display.calls(),
            &[DisplayCall::Number {
                value: 3,
                leading_zeros: false,
                length: 1,
                position: TICK_DIGIT_POS,
            }]
        );
        assert_eq!(rig.sounder.pulses(), &[TICK_PULSE_MS]);
    }

    #[test]
    fn player_press_while_idle_is_ignored() {
        let mut rig = Rig::new();
        rig.press(Line::Player(0));
        rig.run_until(500);
        assert_eq!(rig.controller.phase(), RoundPhase::Idle);
        assert!(rig.display.calls().is_empty());
    }

    #[test]
    fn countdown_runs_into_open() {
        let mut rig = armed_rig();
        rig.run_until(OPEN_MS);
        assert_eq!(rig.controller.phase(), RoundPhase::Open { open_ms: OPEN_MS });
        assert_eq!(rig.display.calls().last(), Some(&DisplayCall::Text("go".into())));
        assert_eq!(rig.sounder.pulses().last(), Some(&OPEN_PULSE_MS));
    }

    #[test]
    fn zero_second_countdown_opens_in_the_arming_poll() {
        let settings = Settings {
            countdown_secs: 0,
            ..Settings::default()
        };
        let mut rig = Rig::with_settings(&settings);
        rig.press(Line::Reset);
        rig.run_until(ARMED_MS);
        assert_eq!(
            rig.controller.phase(),
            RoundPhase::Open { open_ms: ARMED_MS }
        );
        assert_eq!(rig.sounder.pulses(), &[OPEN_PULSE_MS]);
    }

    #[test]
    fn first_press_locks_and_renders_readout() {
        let mut rig = armed_rig();
        rig.run_until(OPEN_MS + 30);
        rig.press(Line::Player(2));
        rig.display.clear();
        rig.sounder.clear();
        // 30 ms raw offset + 25 ms debounce.
        rig.run_until(OPEN_MS + 55);
        assert_eq!(rig.controller.round().winner(), Some(PlayerId(2)));
        assert_eq!(rig.controller.round().reaction_ms(), Some(55));
        assert_eq!(
            rig.display.calls(),
            &[
                DisplayCall::Number {
                    value: 3,
                    leading_zeros: false,
                    length: 1,
                    position: 0,
                },
                DisplayCall::Number {
                    value: 55,
                    leading_zeros: true,
                    length: 3,
                    position: 1,
                },
            ]
        );
        assert_eq!(rig.sounder.pulses(), &[WINNER_PULSE_MS]);
    }

    #[test]
    fn later_press_cannot_steal_a_locked_round() {
        let mut rig = armed_rig();
        rig.run_until(OPEN_MS);
        rig.press(Line::Player(3));
        rig.run_until(OPEN_MS + 25);
        assert_eq!(rig.controller.round().winner(), Some(PlayerId(3)));
        rig.press(Line::Player(0));
        rig.run_until(OPEN_MS + 200);
        assert_eq!(rig.controller.round().winner(), Some(PlayerId(3)));
    }

    #[test]
    fn reset_during_countdown_is_ignored() {
        let mut rig = armed_rig();
        rig.run_until(ARMED_MS + 400);
        rig.press(Line::Reset);
        rig.run_until(ARMED_MS + 600);
        assert_eq!(rig.controller.phase(), RoundPhase::Countdown);
        rig.release(Line::Reset);
        rig.run_until(OPEN_MS);
        assert_eq!(rig.controller.phase(), RoundPhase::Open { open_ms: OPEN_MS });
    }

    #[test]
    fn reset_clears_a_locked_round() {
        let mut rig = armed_rig();
        rig.run_until(OPEN_MS);
        rig.press(Line::Player(1));
        rig.run_until(OPEN_MS + 25);
        assert_eq!(rig.controller.phase().name(), "locked");

        rig.press(Line::Reset);
        rig.display.clear();
        rig.run_until(OPEN_MS + 50);
        assert_eq!(rig.controller.phase(), RoundPhase::Idle);
        assert_eq!(rig.display.calls(), &[DisplayCall::Pattern(IDLE_PATTERN)]);
    }

    #[test]
    fn press_held_through_open_does_not_win() {
        let mut rig = armed_rig();
        // Held from mid-countdown onwards; the edge fires (and is spent)
        // long before the window opens.
        rig.press(Line::Player(0));
        rig.run_until(OPEN_MS + 2_000);
        assert_eq!(rig.controller.phase(), RoundPhase::Open { open_ms: OPEN_MS });

        // A release and fresh press still wins.
        rig.release(Line::Player(0));
        rig.run_until(OPEN_MS + 2_010);
        rig.press(Line::Player(0));
        rig.run_until(OPEN_MS + 2_035);
        assert_eq!(rig.controller.round().winner(), Some(PlayerId(0)));
        assert_eq!(rig.controller.round().reaction_ms(), Some(2_035));
    }
}
