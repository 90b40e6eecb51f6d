//! Tracking radar — narrow-beam projection and the direction/range capture
//! state machines.
//!
//! The beam obeys manual steering while idle; once a capture holds an axis,
//! that axis slaves to the tracked target's true geometry every tick until
//! the lock drops. Range lock is only reachable on top of a direction lock
//! (see [`CaptureState`]).

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyguard_core::components::{Airframe, Interceptor, RadarCrossSection};
use skyguard_core::config::RadarConfig;
use skyguard_core::enums::CaptureState;
use skyguard_core::events::RadarEvent;
use skyguard_core::state::{BeamState, Designation};
use skyguard_core::types::Position;

use crate::display::{NullDisplay, TrackingDisplay};
use crate::geometry;

/// Narrow-beam direction/range capture radar.
pub struct TrackingRadar {
    beam: BeamState,
    capture: CaptureState,
    display: Box<dyn TrackingDisplay>,
}

impl TrackingRadar {
    pub fn new(config: &RadarConfig) -> Self {
        Self {
            beam: BeamState {
                azimuth: -std::f64::consts::FRAC_PI_2,
                vertical_angle: 0.0,
                beam_width: config.beam_width,
                range_cursor: config.missile_max_range_km / 2.0,
            },
            capture: CaptureState::Idle,
            display: Box::new(NullDisplay),
        }
    }

    /// Wire a real display collaborator (replaces the no-op default).
    pub fn set_display(&mut self, display: Box<dyn TrackingDisplay>) {
        self.display = display;
    }

    pub fn beam(&self) -> &BeamState {
        &self.beam
    }

    pub fn capture_state(&self) -> &CaptureState {
        &self.capture
    }

    // --- Manual steering -------------------------------------------------

    /// Point the beam. Input wraps into (−180°, 180°] and maps to internal
    /// radians with a fixed 90° offset. Ignored while a direction lock
    /// drives the beam.
    pub fn set_azimuth(&mut self, degrees: f64) {
        if self.capture.is_direction_locked() {
            return;
        }
        let mut wrapped = degrees % 360.0;
        if wrapped > 180.0 {
            wrapped -= 360.0;
        } else if wrapped <= -180.0 {
            wrapped += 360.0;
        }
        self.beam.azimuth = (wrapped - 90.0).to_radians();
    }

    /// Elevate the beam. Accepted only strictly inside the configured
    /// bounds; out-of-range input is silently ignored, not clamped.
    pub fn set_vertical_angle(&mut self, degrees: f64, config: &RadarConfig) {
        if self.capture.is_direction_locked() {
            return;
        }
        let radians = degrees.to_radians();
        if radians > config.min_elevation && radians < config.max_elevation {
            self.beam.vertical_angle = radians;
        }
    }

    pub fn set_beam_width(&mut self, degrees: f64) {
        if degrees > 0.0 {
            self.beam.beam_width = degrees.to_radians();
        }
    }

    /// Move the range cursor. Accepted only strictly inside (0, max range);
    /// ignored while a range lock drives the cursor.
    pub fn set_range_cursor(&mut self, km: f64, config: &RadarConfig) {
        if self.capture.is_range_locked() {
            return;
        }
        if km > 0.0 && km < config.missile_max_range_km {
            self.beam.range_cursor = km;
        }
    }

    /// Slew the beam onto a noisy designation from the search radar.
    /// Only honored while idle — a live lock keeps the beam.
    pub fn apply_designation(&mut self, designation: &Designation) {
        if self.capture.is_direction_locked() {
            return;
        }
        self.beam.azimuth = designation.azimuth;
        self.beam.vertical_angle = designation.elevation;
        self.beam.range_cursor = designation.distance;
    }

    // --- Capture state machines ------------------------------------------

    /// Attempt a direction lock: the first airframe (registration order)
    /// whose apparent spot sits close enough to the beam axis is captured.
    /// The window is 2× the spot angle in azimuth and 1× in vertical angle.
    pub fn capture_direction(
        &mut self,
        world: &World,
        flights: &[Entity],
        config: &RadarConfig,
        events: &mut Vec<RadarEvent>,
    ) {
        if self.capture.is_direction_locked() {
            return;
        }
        for &entity in flights {
            let Ok(airframe) = world.get::<&Airframe>(entity) else {
                continue;
            };
            if !airframe.is_launched || airframe.is_destroyed {
                continue;
            }
            let Ok(position) = world.get::<&Position>(entity).map(|p| *p) else {
                continue;
            };
            let Ok(rcs) = world.get::<&RadarCrossSection>(entity).map(|r| *r) else {
                continue;
            };
            let geo = geometry::target_geometry(
                &position,
                airframe.heading,
                airframe.velocity,
                config.radar_height_km,
            );
            if geo.distance <= 0.0 {
                continue;
            }
            let spot_angle = geometry::apparent_size_km(rcs.base_rcs_m2) / geo.distance;
            let azimuth_offset = geometry::wrap_angle(geo.azimuth - self.beam.azimuth).abs();
            let vertical_offset = (geo.elevation - self.beam.vertical_angle).abs();
            if azimuth_offset < 2.0 * spot_angle && vertical_offset < spot_angle {
                log::info!("track: direction lock on {}", airframe.id);
                self.capture = CaptureState::Direction {
                    target_id: airframe.id.clone(),
                };
                events.push(RadarEvent::DirectionCapture { captured: true });
                return;
            }
        }
    }

    /// Attempt a range lock on the direction-locked target: valid only when
    /// the manual cursor already sits within the detection window of the
    /// target's true range.
    pub fn capture_distance(
        &mut self,
        world: &World,
        flights: &[Entity],
        config: &RadarConfig,
        events: &mut Vec<RadarEvent>,
    ) {
        let CaptureState::Direction { target_id } = &self.capture else {
            return;
        };
        let target_id = target_id.clone();
        let Some(entity) = resolve(world, flights, &target_id) else {
            return;
        };
        let Ok(position) = world.get::<&Position>(entity).map(|p| *p) else {
            return;
        };
        let distance = position.ground_range();
        if (self.beam.range_cursor - distance).abs() < config.capture_distance_window_km {
            log::info!("track: range lock on {target_id}");
            self.capture = CaptureState::Full { target_id };
            events.push(RadarEvent::DistanceCapture { captured: true });
        }
    }

    /// Drop the direction lock: emits the lock-lost events for every lock
    /// actually held, destroys the missiles assigned to the abandoned
    /// engagement, and cascades into the range-lock drop. Idempotent.
    pub fn reset_direction_capture(
        &mut self,
        world: &mut World,
        missiles: &[Entity],
        events: &mut Vec<RadarEvent>,
    ) {
        let had_range_lock = self.capture.is_range_locked();
        let Some(target_id) = self.capture.target_id().map(String::from) else {
            return;
        };
        log::info!("track: direction lock dropped on {target_id}");
        destroy_assigned(world, missiles, &target_id);
        self.capture = CaptureState::Idle;
        if had_range_lock {
            events.push(RadarEvent::DistanceCapture { captured: false });
        }
        events.push(RadarEvent::DirectionCapture { captured: false });
    }

    /// Drop the range lock only; the direction lock stays. Idempotent.
    pub fn reset_distance_capture(&mut self, events: &mut Vec<RadarEvent>) {
        if let CaptureState::Full { target_id } = &self.capture {
            log::info!("track: range lock dropped on {target_id}");
            self.capture = CaptureState::Direction {
                target_id: target_id.clone(),
            };
            events.push(RadarEvent::DistanceCapture { captured: false });
        }
    }

    // --- Per-tick recompute ----------------------------------------------

    /// One projection pass. Runs on its own cadence, independent of the
    /// search radar's enabled flag.
    pub fn tick(
        &mut self,
        world: &mut World,
        flights: &[Entity],
        missiles: &[Entity],
        config: &RadarConfig,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<RadarEvent>,
    ) {
        self.follow_tracked(world, flights, missiles, config, events);
        self.project_targets(world, flights, config, rng);
        self.project_missiles(world, missiles, config);
        self.display.set_azimuth(self.beam.azimuth);
        self.display.set_vertical_angle(self.beam.vertical_angle);
        self.display.set_distance(self.beam.range_cursor);
    }

    /// Slave the beam to the tracked target and run the continuous lock
    /// checks: lost/destroyed target, vertical bounds, max range.
    fn follow_tracked(
        &mut self,
        world: &mut World,
        flights: &[Entity],
        missiles: &[Entity],
        config: &RadarConfig,
        events: &mut Vec<RadarEvent>,
    ) {
        let Some(target_id) = self.capture.target_id().map(String::from) else {
            return;
        };

        let tracked = resolve(world, flights, &target_id).and_then(|entity| {
            let airframe = world.get::<&Airframe>(entity).ok()?;
            let position = world.get::<&Position>(entity).ok()?;
            Some((airframe.is_destroyed, *position, airframe.velocity))
        });
        let Some((is_destroyed, position, velocity)) = tracked else {
            self.reset_direction_capture(world, missiles, events);
            self.display.remove_target(&target_id);
            return;
        };
        if is_destroyed {
            self.reset_direction_capture(world, missiles, events);
            self.display.remove_target(&target_id);
            return;
        }

        let geo = geometry::target_geometry(&position, 0.0, velocity, config.radar_height_km);
        if geo.elevation <= config.min_elevation || geo.elevation >= config.max_elevation {
            self.reset_direction_capture(world, missiles, events);
            return;
        }

        self.beam.azimuth = geo.azimuth;
        self.beam.vertical_angle = geo.elevation;

        if self.capture.is_range_locked() {
            if geo.distance > config.missile_max_range_km {
                self.reset_direction_capture(world, missiles, events);
                return;
            }
            self.beam.range_cursor = geo.distance;
        }

        events.push(RadarEvent::TrackedRange {
            km: self.beam.range_cursor,
        });
        events.push(RadarEvent::TrackedVelocity { mps: velocity });
        events.push(RadarEvent::TrackedHeight {
            meters: (position.z * 1000.0).round(),
        });
    }

    /// Project every live airframe into beam-relative coordinates and
    /// forward the in-beam ones to the display.
    fn project_targets(
        &mut self,
        world: &World,
        flights: &[Entity],
        config: &RadarConfig,
        rng: &mut ChaCha8Rng,
    ) {
        let half_width = self.beam.beam_width / 2.0;
        for &entity in flights {
            let Ok(airframe) = world.get::<&Airframe>(entity) else {
                continue;
            };
            if !airframe.is_launched {
                continue;
            }
            if airframe.is_destroyed {
                self.display.remove_target(&airframe.id);
                continue;
            }
            let Ok(position) = world.get::<&Position>(entity).map(|p| *p) else {
                continue;
            };
            let Ok(rcs) = world.get::<&RadarCrossSection>(entity).map(|r| *r) else {
                continue;
            };
            let geo = geometry::target_geometry(
                &position,
                airframe.heading,
                airframe.velocity,
                config.radar_height_km,
            );
            if geo.distance <= 0.0 {
                continue;
            }
            let azimuth_offset = geometry::wrap_angle(geo.azimuth - self.beam.azimuth);
            let vertical_offset = geo.elevation - self.beam.vertical_angle;

            if azimuth_offset.abs() < half_width && vertical_offset.abs() < half_width {
                let size = geometry::apparent_size_km(rcs.base_rcs_m2);
                let spot_size = size / (self.beam.beam_width * geo.distance);
                let spot_length =
                    size + rng.gen_range(-1.0..=1.0) * config.tracking_accuracy;
                let visibility_k = geo.distance / config.missile_max_range_km;
                self.display.set_target_params(
                    &airframe.id,
                    visibility_k,
                    spot_size,
                    spot_length,
                    azimuth_offset / half_width,
                    vertical_offset / half_width,
                );
            } else {
                self.display.remove_target(&airframe.id);
            }
        }
    }

    /// Missiles are projected unconditionally with the same offset formulas;
    /// destroyed missiles are removed from display instead.
    fn project_missiles(&mut self, world: &World, missiles: &[Entity], config: &RadarConfig) {
        let half_width = self.beam.beam_width / 2.0;
        for &entity in missiles {
            let Ok(missile) = world.get::<&Interceptor>(entity) else {
                continue;
            };
            if missile.is_destroyed {
                self.display.remove_missile(&missile.id);
                continue;
            }
            let Ok(position) = world.get::<&Position>(entity).map(|p| *p) else {
                continue;
            };
            let geo =
                geometry::target_geometry(&position, 0.0, missile.velocity, config.radar_height_km);
            let azimuth_offset = geometry::wrap_angle(geo.azimuth - self.beam.azimuth);
            let vertical_offset = geo.elevation - self.beam.vertical_angle;
            self.display.set_missile_params(
                &missile.id,
                azimuth_offset / half_width,
                vertical_offset / half_width,
            );
        }
    }
}

/// Find a roster entity by airframe id.
fn resolve(world: &World, flights: &[Entity], id: &str) -> Option<Entity> {
    flights.iter().copied().find(|&entity| {
        world
            .get::<&Airframe>(entity)
            .map(|airframe| airframe.id == id)
            .unwrap_or(false)
    })
}

/// Destroy every missile assigned to the abandoned engagement.
fn destroy_assigned(world: &mut World, missiles: &[Entity], target_id: &str) {
    for &entity in missiles {
        if let Ok(mut missile) = world.get::<&mut Interceptor>(entity) {
            if missile.target_id == target_id && !missile.is_destroyed {
                log::info!("track: destroying assigned missile {}", missile.id);
                missile.destroy();
            }
        }
    }
}
