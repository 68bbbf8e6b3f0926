use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::limits::{SpinLimits, POINTER_OFFSET_DEG};

/// Cubic ease-out. Derivative is zero at t = 1, which is what makes the
/// wheel glide to a stop instead of snapping; the smooth stop is part of the
/// visual contract, not decoration.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// One in-flight spin, from trigger to resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinSession {
    pub start_rotation: f64,
    pub spin_angle: f64,
    pub end_rotation: f64,
    pub duration_ms: f64,
    pub started_at_ms: f64,
}

/// What the frame driver should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinTick {
    /// No active session; nothing to animate.
    Idle,
    /// Mid-spin visual rotation in degrees. Schedule another frame.
    Frame(f64),
    /// The spin just completed; resolve the winner from `end_rotation`.
    Finished { end_rotation: f64 },
}

/// Drives one randomized rotation per trigger: `Idle -> Spinning -> Idle`.
/// The engine owns `current_rotation`; callers only read it. Time comes in
/// as an argument so tests can run the whole animation on a fake clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinEngine {
    current_rotation: f64,
    limits: SpinLimits,
    session: Option<SpinSession>,
}

impl Default for SpinEngine {
    fn default() -> Self {
        Self::new(SpinLimits::default())
    }
}

impl SpinEngine {
    pub fn new(limits: SpinLimits) -> Self {
        Self {
            current_rotation: 0.0,
            limits,
            session: None,
        }
    }

    /// Rotation in degrees, normalized into [0, 360) between spins.
    pub fn rotation(&self) -> f64 {
        self.current_rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&SpinSession> {
        self.session.as_ref()
    }

    /// Draws a random target and duration and opens a session. Refuses (as a
    /// silent no-op) while a spin is active or when the wheel has no
    /// sectors; both are expected conditions, not errors.
    pub fn start<R: Rng>(&mut self, rng: &mut R, now_ms: f64, option_count: usize) -> bool {
        if self.session.is_some() {
            log::debug!("spin: ignored trigger while already spinning");
            return false;
        }
        if option_count == 0 {
            log::debug!("spin: ignored trigger with no options");
            return false;
        }
        let rotations = rng.gen_range(self.limits.min_rotations..self.limits.max_rotations);
        let duration_ms = rng.gen_range(self.limits.min_duration_ms..self.limits.max_duration_ms);
        let spin_angle = (rotations * 360.0).floor();
        let start_rotation = self.current_rotation;
        let session = SpinSession {
            start_rotation,
            spin_angle,
            end_rotation: (start_rotation + spin_angle).rem_euclid(360.0),
            duration_ms,
            started_at_ms: now_ms,
        };
        log::info!(
            "spin: {}deg over {:.0}ms from {}deg",
            spin_angle,
            duration_ms,
            start_rotation
        );
        self.session = Some(session);
        true
    }

    /// Advances the active session to `now_ms`. Rotation is monotone
    /// non-decreasing in elapsed time for the life of a session. On the
    /// finishing tick the session is dropped and `current_rotation` snaps to
    /// the normalized end angle.
    pub fn tick(&mut self, now_ms: f64) -> SpinTick {
        let session = match self.session {
            Some(session) => session,
            None => return SpinTick::Idle,
        };
        let elapsed = now_ms - session.started_at_ms;
        if elapsed < session.duration_ms {
            let t = (elapsed / session.duration_ms).max(0.0);
            let rotation = session.start_rotation + ease_out_cubic(t) * session.spin_angle;
            self.current_rotation = rotation;
            return SpinTick::Frame(rotation);
        }
        self.current_rotation = session.end_rotation;
        self.session = None;
        SpinTick::Finished {
            end_rotation: session.end_rotation,
        }
    }

    /// Tears down an active session without resolving a winner. Used when
    /// the hosting component unmounts mid-spin.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            log::debug!("spin: cancelled mid-flight");
        }
    }
}

/// Maps a final rotation to the winning sector index. Pure: identical inputs
/// always pick the same sector. Returns `None` for an empty wheel (the
/// engine refuses to start one, but finalize stays defensive). The option
/// count is whatever the wheel holds at finalize time; deleting options
/// mid-spin can shift the winner relative to what the animation implied,
/// which is an accepted limitation.
pub fn resolve_winner(end_rotation: f64, option_count: usize) -> Option<usize> {
    if option_count == 0 {
        return None;
    }
    let sector_deg = 360.0 / option_count as f64;
    let selected = (end_rotation + POINTER_OFFSET_DEG).rem_euclid(360.0);
    let index = (selected / sector_deg).floor() as usize % option_count;
    Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn engine() -> SpinEngine {
        SpinEngine::new(SpinLimits::default())
    }

    fn rng() -> StepRng {
        StepRng::new(0, 0x5DEECE66D)
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn test_ease_out_cubic_monotone() {
        let mut last = 0.0;
        for i in 0..=100 {
            let value = ease_out_cubic(i as f64 / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_start_draws_within_limits() {
        let mut engine = engine();
        assert!(engine.start(&mut rng(), 1000.0, 4));
        let session = engine.session().unwrap();
        assert!(session.spin_angle >= 5.0 * 360.0);
        assert!(session.spin_angle < 10.0 * 360.0);
        assert!(session.duration_ms >= 2000.0);
        assert!(session.duration_ms < 6000.0);
        assert_eq!(session.spin_angle, session.spin_angle.floor());
        assert!((0.0..360.0).contains(&session.end_rotation));
    }

    #[test]
    fn test_start_refused_with_zero_options() {
        let mut engine = engine();
        assert!(!engine.start(&mut rng(), 0.0, 0));
        assert!(!engine.is_spinning());
    }

    #[test]
    fn test_start_refused_while_spinning() {
        let mut engine = engine();
        assert!(engine.start(&mut rng(), 0.0, 3));
        assert!(!engine.start(&mut rng(), 10.0, 3));
    }

    #[test]
    fn test_tick_is_monotone_and_finishes() {
        let mut engine = engine();
        assert!(engine.start(&mut rng(), 0.0, 6));
        let duration = engine.session().unwrap().duration_ms;
        let end = engine.session().unwrap().end_rotation;
        let mut last = 0.0;
        let mut now = 0.0;
        loop {
            now += 16.0;
            match engine.tick(now) {
                SpinTick::Frame(rotation) => {
                    assert!(rotation >= last);
                    last = rotation;
                }
                SpinTick::Finished { end_rotation } => {
                    assert!(now >= duration);
                    assert_eq!(end_rotation, end);
                    break;
                }
                SpinTick::Idle => panic!("session vanished mid-spin"),
            }
        }
        assert!(!engine.is_spinning());
        assert_eq!(engine.rotation(), end);
        assert_eq!(engine.tick(now + 16.0), SpinTick::Idle);
    }

    #[test]
    fn test_next_spin_starts_from_normalized_end() {
        let mut engine = engine();
        assert!(engine.start(&mut rng(), 0.0, 4));
        let first_end = match engine.tick(10_000.0) {
            SpinTick::Finished { end_rotation } => end_rotation,
            other => panic!("expected finish, got {:?}", other),
        };
        assert!(engine.start(&mut rng(), 20_000.0, 4));
        assert_eq!(engine.session().unwrap().start_rotation, first_end);
    }

    #[test]
    fn test_cancel_drops_session_without_winner() {
        let mut engine = engine();
        assert!(engine.start(&mut rng(), 0.0, 4));
        engine.tick(100.0);
        let mid = engine.rotation();
        engine.cancel();
        assert!(!engine.is_spinning());
        assert_eq!(engine.rotation(), mid);
        assert_eq!(engine.tick(200.0), SpinTick::Idle);
    }

    #[test]
    fn test_resolve_winner_in_range() {
        for count in 1..=20 {
            let mut angle = 0.0;
            while angle < 360.0 {
                let index = resolve_winner(angle, count).unwrap();
                assert!(index < count, "index {} for count {} at {}", index, count, angle);
                angle += 0.25;
            }
        }
    }

    #[test]
    fn test_resolve_winner_deterministic() {
        assert_eq!(resolve_winner(123.4, 7), resolve_winner(123.4, 7));
    }

    #[test]
    fn test_resolve_winner_pointer_offset() {
        // Pointer at +90: a final rotation of 0 selects the sector starting
        // at 90 degrees.
        assert_eq!(resolve_winner(0.0, 4), Some(1));
        // 270 + 90 wraps to 0.
        assert_eq!(resolve_winner(270.0, 4), Some(0));
    }

    #[test]
    fn test_resolve_winner_empty_wheel() {
        assert_eq!(resolve_winner(42.0, 0), None);
    }

    #[test]
    fn test_resolve_winner_negative_rotation() {
        // rem_euclid keeps the normalized angle in [0, 360).
        assert_eq!(resolve_winner(-90.0, 4), Some(0));
    }
}
