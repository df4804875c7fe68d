//=========================================================================
// Camera Effects
//=========================================================================
//
// Head bobbing, field-of-view easing and the landing recoil.
//
// All three work on the camera's local position / FOV and are driven by
// the fixed tick delta; none of them owns the camera.
//
// Landing recoil:
// ```text
//   Idle ──trigger()──► Down { elapsed } ──(elapsed ≥ phase)──►
//        Return { elapsed } ──(elapsed ≥ phase)──► Idle
// ```
// Down eases from rest to `rest - depth` over one phase; Return eases the
// current position back to rest over another. While not idle the recoil
// owns the camera position and the bob's settle step is suspended.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;
use serde::Deserialize;

//=== Settings ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BobSettings {
    pub speed: f32,
    pub amount_horizontal: f32,
    pub amount_vertical: f32,
    pub sprint_multiplier: f32,
}

impl Default for BobSettings {
    fn default() -> Self {
        Self {
            speed: 5.0,
            amount_horizontal: 0.1,
            amount_vertical: 0.05,
            sprint_multiplier: 1.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FovSettings {
    pub default_fov: f32,
    pub sprint_fov: f32,
    pub transition_speed: f32,
}

impl Default for FovSettings {
    fn default() -> Self {
        Self {
            default_fov: 80.0,
            sprint_fov: 100.0,
            transition_speed: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecoilSettings {
    pub depth: f32,
    /// Seconds spent in each of the two phases.
    pub phase_duration: f32,
}

impl Default for RecoilSettings {
    fn default() -> Self {
        Self { depth: 0.1, phase_duration: 0.1 }
    }
}

//=== HeadBob =============================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadBob {
    phase: f32,
}

impl HeadBob {
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Advances the phase and returns the bobbed camera position.
    pub fn bob(&mut self, rest: Vec3, dt: f32, sprinting: bool, settings: &BobSettings) -> Vec3 {
        let rate = if sprinting { settings.speed * settings.sprint_multiplier } else { settings.speed };
        self.phase += dt * rate;

        rest + Vec3::new(
            self.phase.sin() * settings.amount_horizontal,
            (self.phase * 2.0).cos() * settings.amount_vertical,
            0.0,
        )
    }

    /// Eases `current` back toward rest and restarts the cycle.
    pub fn settle(&mut self, current: Vec3, rest: Vec3, dt: f32, settings: &BobSettings) -> Vec3 {
        self.phase = 0.0;
        current.lerp(rest, (dt * settings.speed).clamp(0.0, 1.0))
    }
}

//=== FovEaser ============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FovEaser {
    fov: f32,
}

impl FovEaser {
    pub fn new(fov: f32) -> Self {
        Self { fov }
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn ease(&mut self, sprinting: bool, dt: f32, settings: &FovSettings) -> f32 {
        let target = if sprinting { settings.sprint_fov } else { settings.default_fov };
        let t = (dt * settings.transition_speed).clamp(0.0, 1.0);
        self.fov += (target - self.fov) * t;
        self.fov
    }
}

//=== LandingRecoil =======================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RecoilPhase {
    #[default]
    Idle,
    Down { elapsed: f32 },
    Return { elapsed: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LandingRecoil {
    phase: RecoilPhase,
}

impl LandingRecoil {
    pub fn phase(&self) -> RecoilPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase != RecoilPhase::Idle
    }

    /// Starts a recoil. Rejected while one is already running.
    pub fn trigger(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        self.phase = RecoilPhase::Down { elapsed: 0.0 };
        true
    }

    pub fn cancel(&mut self) {
        self.phase = RecoilPhase::Idle;
    }

    /// Steps the recoil, returning the camera position it dictates.
    ///
    /// `None` when idle, including the step on which it finishes.
    pub fn tick(&mut self, current: Vec3, rest: Vec3, dt: f32, settings: &RecoilSettings) -> Option<Vec3> {
        let duration = settings.phase_duration;
        loop {
            match self.phase {
                RecoilPhase::Idle => return None,
                RecoilPhase::Down { elapsed } if elapsed < duration => {
                    let low = rest - Vec3::new(0.0, settings.depth, 0.0);
                    self.phase = RecoilPhase::Down { elapsed: elapsed + dt };
                    return Some(rest.lerp(low, elapsed / duration));
                }
                RecoilPhase::Down { .. } => self.phase = RecoilPhase::Return { elapsed: 0.0 },
                RecoilPhase::Return { elapsed } if elapsed < duration => {
                    self.phase = RecoilPhase::Return { elapsed: elapsed + dt };
                    return Some(current.lerp(rest, elapsed / duration));
                }
                RecoilPhase::Return { .. } => self.phase = RecoilPhase::Idle,
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;
    const DT: f32 = 1.0 / 60.0;

    //--- HeadBob ----------------------------------------------------------

    #[test]
    fn bob_offset_follows_phase() {
        let settings = BobSettings::default();
        let mut bob = HeadBob::default();
        let rest = Vec3::new(0.0, 1.6, 0.0);

        let pos = bob.bob(rest, 0.1, false, &settings);

        let t = 0.5f32;
        assert!((bob.phase() - t).abs() < EPS);
        assert!((pos.x - t.sin() * 0.1).abs() < EPS);
        assert!((pos.y - (1.6 + (2.0 * t).cos() * 0.05)).abs() < EPS);
        assert_eq!(pos.z, 0.0);
    }

    #[test]
    fn bob_is_periodic_with_configured_frequency() {
        let settings = BobSettings::default();
        let mut bob = HeadBob::default();
        let period = std::f32::consts::TAU / settings.speed;
        let steps = 200;
        let dt = period / steps as f32;

        let first = bob.bob(Vec3::ZERO, dt, false, &settings);
        let mut last = first;
        let mut max_x: f32 = 0.0;
        for _ in 0..steps {
            last = bob.bob(Vec3::ZERO, dt, false, &settings);
            max_x = max_x.max(last.x.abs());
        }

        assert!(first.abs_diff_eq(last, 1e-3));
        assert!((max_x - settings.amount_horizontal).abs() < 1e-3);
    }

    #[test]
    fn sprint_speeds_up_bob() {
        let settings = BobSettings::default();
        let mut bob = HeadBob::default();
        bob.bob(Vec3::ZERO, 0.1, true, &settings);
        assert!((bob.phase() - 0.75).abs() < EPS);
    }

    #[test]
    fn settle_decays_toward_rest_and_resets_phase() {
        let settings = BobSettings::default();
        let mut bob = HeadBob::default();
        let rest = Vec3::new(0.0, 1.6, 0.0);
        let mut pos = bob.bob(rest, 0.3, false, &settings);

        let mut last_distance = pos.distance(rest);
        for _ in 0..60 {
            pos = bob.settle(pos, rest, DT, &settings);
            let d = pos.distance(rest);
            assert!(d <= last_distance);
            last_distance = d;
        }

        assert_eq!(bob.phase(), 0.0);
        assert!(last_distance < 0.01);
    }

    //--- FovEaser ---------------------------------------------------------

    #[test]
    fn fov_converges_without_overshoot() {
        let settings = FovSettings::default();
        let mut fov = FovEaser::new(settings.default_fov);

        for _ in 0..300 {
            let value = fov.ease(true, DT, &settings);
            assert!(value <= settings.sprint_fov);
        }
        assert!((fov.fov() - settings.sprint_fov).abs() < 0.01);

        for _ in 0..300 {
            let value = fov.ease(false, DT, &settings);
            assert!(value >= settings.default_fov);
        }
        assert!((fov.fov() - settings.default_fov).abs() < 0.01);
    }

    #[test]
    fn fov_large_step_lands_on_target() {
        let settings = FovSettings::default();
        let mut fov = FovEaser::new(80.0);
        assert_eq!(fov.ease(true, 1.0, &settings), 100.0);
    }

    //--- LandingRecoil ----------------------------------------------------

    #[test]
    fn recoil_rejects_retrigger_while_active() {
        let mut recoil = LandingRecoil::default();
        assert!(recoil.trigger());
        assert!(!recoil.trigger());

        recoil.cancel();
        assert!(!recoil.is_active());
        assert!(recoil.trigger());
    }

    #[test]
    fn recoil_runs_both_phases_then_idles() {
        let settings = RecoilSettings::default();
        let rest = Vec3::new(0.0, 1.6, 0.0);
        let mut recoil = LandingRecoil::default();
        recoil.trigger();

        let dt = 0.03;
        let mut current = rest;
        let mut lowest = rest.y;
        let mut steps = 0;
        let mut saw_return = false;

        while let Some(pos) = recoil.tick(current, rest, dt, &settings) {
            current = pos;
            lowest = lowest.min(pos.y);
            saw_return |= matches!(recoil.phase(), RecoilPhase::Return { .. });
            steps += 1;
            assert!(steps < 100);
        }

        assert!(saw_return);
        assert_eq!(recoil.phase(), RecoilPhase::Idle);
        // four steps down, four steps back
        assert_eq!(steps, 8);
        assert!(lowest < rest.y - 0.05);
        assert!(lowest >= rest.y - settings.depth - EPS);
        assert!(current.y <= rest.y + EPS);
    }

    #[test]
    fn recoil_first_step_starts_at_rest() {
        let settings = RecoilSettings::default();
        let rest = Vec3::new(0.0, 1.6, 0.0);
        let mut recoil = LandingRecoil::default();
        recoil.trigger();

        let first = recoil.tick(rest + Vec3::X, rest, DT, &settings);
        assert_eq!(first, Some(rest));
    }

    #[test]
    fn zero_duration_recoil_finishes_immediately() {
        let settings = RecoilSettings { depth: 0.1, phase_duration: 0.0 };
        let mut recoil = LandingRecoil::default();
        recoil.trigger();

        assert_eq!(recoil.tick(Vec3::ZERO, Vec3::ZERO, DT, &settings), None);
        assert!(!recoil.is_active());
    }
}
