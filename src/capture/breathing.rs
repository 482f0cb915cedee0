use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// 4-4-6 breathing pattern for relaxation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Inhale,
    Hold,
    Exhale,
}

impl Phase {
    pub fn duration_secs(self) -> u32 {
        match self {
            Phase::Inhale => 4,
            Phase::Hold => 4,
            Phase::Exhale => 6,
        }
    }

    pub fn next(self) -> Phase {
        match self {
            Phase::Inhale => Phase::Hold,
            Phase::Hold => Phase::Exhale,
            Phase::Exhale => Phase::Inhale,
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Phase::Inhale => "Breathe In",
            Phase::Hold => "Hold",
            Phase::Exhale => "Breathe Out",
        }
    }
}

/// Deterministic single-timer breathing state machine. The countdown shows
/// each phase's remaining seconds down to zero; the tick after zero rolls
/// over into the next phase. Completing exhale→inhale counts one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingTimer {
    active: bool,
    phase: Phase,
    seconds_left: u32,
    cycles: u32,
}

impl Default for BreathingTimer {
    fn default() -> Self {
        Self {
            active: false,
            phase: Phase::Inhale,
            seconds_left: Phase::Inhale.duration_secs(),
            cycles: 0,
        }
    }
}

impl BreathingTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    /// Freeze the countdown without touching phase or cycle count.
    pub fn pause(&mut self) {
        self.active = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance one second. No-op while paused.
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        if self.seconds_left == 0 {
            self.phase = self.phase.next();
            if self.phase == Phase::Inhale {
                self.cycles += 1;
            }
            self.seconds_left = self.phase.duration_secs();
        } else {
            self.seconds_left -= 1;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }
}

/// Owns the one-second ticker driving a [`BreathingTimer`]. At most one
/// ticker task is live per session: starting again cancels the previous
/// task first, and pause, reset, and drop all cancel it.
#[derive(Debug, Default)]
pub struct BreathingSession {
    timer: Arc<Mutex<BreathingTimer>>,
    ticker: Option<JoinHandle<()>>,
}

impl BreathingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn start(&mut self) {
        self.cancel_ticker();
        self.timer.lock().await.start();

        let timer = Arc::clone(&self.timer);
        self.ticker = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first interval tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                timer.lock().await.tick();
            }
        }));
    }

    pub async fn pause(&mut self) {
        self.cancel_ticker();
        self.timer.lock().await.pause();
    }

    pub async fn reset(&mut self) {
        self.cancel_ticker();
        self.timer.lock().await.reset();
    }

    pub async fn snapshot(&self) -> BreathingTimer {
        *self.timer.lock().await
    }

    fn cancel_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}

impl Drop for BreathingSession {
    fn drop(&mut self) {
        self.cancel_ticker();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ticks(timer: &mut BreathingTimer, n: u32) {
        for _ in 0..n {
            timer.tick();
        }
    }

    #[test]
    fn test_fourteen_seconds_is_mid_exhale() {
        let mut timer = BreathingTimer::new();
        timer.start();
        run_ticks(&mut timer, 14);

        assert_eq!(timer.phase(), Phase::Exhale);
        assert_eq!(timer.cycles(), 0);
    }

    #[test]
    fn test_eighteen_seconds_completes_one_cycle() {
        let mut timer = BreathingTimer::new();
        timer.start();
        run_ticks(&mut timer, 18);

        assert_eq!(timer.phase(), Phase::Inhale);
        assert_eq!(timer.cycles(), 1);
    }

    #[test]
    fn test_phase_order_and_countdown_reload() {
        let mut timer = BreathingTimer::new();
        timer.start();

        run_ticks(&mut timer, 5);
        assert_eq!(timer.phase(), Phase::Hold);
        assert_eq!(timer.seconds_left(), Phase::Hold.duration_secs());

        run_ticks(&mut timer, 5);
        assert_eq!(timer.phase(), Phase::Exhale);
        assert_eq!(timer.seconds_left(), Phase::Exhale.duration_secs());
    }

    #[test]
    fn test_pause_freezes_state() {
        let mut timer = BreathingTimer::new();
        timer.start();
        run_ticks(&mut timer, 6);
        let frozen = timer;

        timer.pause();
        run_ticks(&mut timer, 10);
        assert_eq!(timer.phase(), frozen.phase());
        assert_eq!(timer.seconds_left(), frozen.seconds_left());
        assert_eq!(timer.cycles(), frozen.cycles());
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut timer = BreathingTimer::new();
        timer.start();
        run_ticks(&mut timer, 25);
        timer.reset();

        assert!(!timer.is_active());
        assert_eq!(timer.phase(), Phase::Inhale);
        assert_eq!(timer.seconds_left(), 4);
        assert_eq!(timer.cycles(), 0);
    }

    #[test]
    fn test_tick_before_start_is_noop() {
        let mut timer = BreathingTimer::new();
        run_ticks(&mut timer, 10);
        assert_eq!(timer.seconds_left(), 4);
        assert_eq!(timer.phase(), Phase::Inhale);
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_ticker_advances_timer() {
        let mut session = BreathingSession::new();
        session.start().await;
        // The ticker task must register its interval before the clock moves.
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        tokio::time::advance(Duration::from_secs(2)).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        let snap = session.snapshot().await;
        assert!(snap.is_active());
        assert_eq!(snap.seconds_left(), 2);
        session.pause().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_cancels_ticker() {
        let mut session = BreathingSession::new();
        session.start().await;
        session.pause().await;

        let before = session.snapshot().await;
        tokio::time::advance(Duration::from_secs(10)).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        let after = session.snapshot().await;
        assert!(!after.is_active());
        assert_eq!(after.seconds_left(), before.seconds_left());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_replaces_ticker_without_duplicate_ticks() {
        let mut session = BreathingSession::new();
        session.start().await;
        // Starting again while active must first cancel the prior ticker.
        session.start().await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        tokio::time::advance(Duration::from_secs(1)).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        let snap = session.snapshot().await;
        assert_eq!(snap.seconds_left(), 3);
        session.reset().await;
    }
}
