//! Search radar — recognition sweep, missile-kill evaluation, wide-area
//! plot, and target-designation queries.
//!
//! Each sweep rebuilds the recognized-target table from the live world:
//! presence of a key is the signal, removals fire `TargetDropped` exactly
//! once. The missile sweep runs in the same pass at the same cadence.

use std::collections::HashMap;

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyguard_core::components::{Airframe, Interceptor, RadarCrossSection};
use skyguard_core::config::RadarConfig;
use skyguard_core::events::RadarEvent;
use skyguard_core::state::{Designation, FlightView, MissileSnapshot, RecognizedTarget};
use skyguard_core::types::Position;

use crate::geometry;

/// Surveillance/engagement radar state.
pub struct SearchRadar {
    enabled: bool,
    recognized: HashMap<String, RecognizedTarget>,
    missiles: HashMap<String, MissileSnapshot>,
}

impl Default for SearchRadar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchRadar {
    pub fn new() -> Self {
        Self {
            enabled: true,
            recognized: HashMap::new(),
            missiles: HashMap::new(),
        }
    }

    /// Gate the sweep and plot work. The cadences themselves keep running.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current recognized-target table (live reference, for inspection).
    pub fn recognized_targets(&self) -> &HashMap<String, RecognizedTarget> {
        &self.recognized
    }

    /// Current live-missile table (live reference, for inspection).
    pub fn missile_snapshots(&self) -> &HashMap<String, MissileSnapshot> {
        &self.missiles
    }

    /// One recognition + missile sweep.
    ///
    /// Rosters are walked in registration order so event payloads are
    /// deterministic and correlation ties resolve the documented way.
    pub fn sweep(
        &mut self,
        world: &mut World,
        flights: &[Entity],
        missiles: &[Entity],
        config: &RadarConfig,
        events: &mut Vec<RadarEvent>,
    ) {
        if !self.enabled {
            return;
        }

        for &entity in flights {
            let Ok(airframe) = world.get::<&Airframe>(entity) else {
                continue;
            };
            // Unlaunched objects are invisible: no entry, no removal event.
            if !airframe.is_launched {
                continue;
            }
            let id = airframe.id.clone();
            if airframe.is_destroyed {
                drop(airframe);
                self.drop_target(&id, events);
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
            let visible = geometry::horizon_visible(config.radar_height_km, position.z, geo.distance);
            let gated = geo.elevation > config.min_elevation && geo.elevation < config.max_elevation;

            if visible && gated {
                let size = geometry::apparent_size_km(rcs.base_rcs_m2);
                let visibility_k =
                    (config.max_distance_km * rcs.base_rcs_m2 / geo.distance).clamp(0.0, 1.0);
                self.recognized.insert(
                    id.clone(),
                    RecognizedTarget {
                        id,
                        distance: geo.distance,
                        azimuth: geo.azimuth,
                        elevation: geo.elevation,
                        radial_velocity: geo.radial_velocity,
                        velocity: airframe.velocity,
                        height: position.z,
                        intercept_param: geo.distance * geo.nose_offset.tan(),
                        size,
                        x: position.x,
                        y: position.y,
                        heading: airframe.heading,
                        visibility_k,
                    },
                );
            } else {
                drop(airframe);
                self.drop_target(&id, events);
            }
        }

        self.missile_sweep(world, flights, missiles);

        events.push(RadarEvent::TrackTable {
            targets: self.targets_in_order(world, flights),
            missiles: self.missiles_in_order(world, missiles),
        });
    }

    /// Missile half of the sweep: snapshot upkeep and proximity-kill
    /// evaluation.
    fn missile_sweep(&mut self, world: &mut World, flights: &[Entity], missiles: &[Entity]) {
        for &entity in missiles {
            let (id, is_destroyed, position, velocity, target_distance, kill_radius) = {
                let Ok(missile) = world.get::<&Interceptor>(entity) else {
                    continue;
                };
                let Ok(position) = world.get::<&Position>(entity).map(|p| *p) else {
                    continue;
                };
                (
                    missile.id.clone(),
                    missile.is_destroyed,
                    position,
                    missile.velocity,
                    missile.target_distance_km,
                    missile.kill_radius_km,
                )
            };

            if is_destroyed {
                self.missiles.remove(&id);
                continue;
            }

            self.missiles.insert(
                id.clone(),
                MissileSnapshot {
                    id: id.clone(),
                    position,
                    velocity,
                },
            );

            if target_distance <= kill_radius {
                if let Ok(mut missile) = world.get::<&mut Interceptor>(entity) {
                    missile.destroy();
                }
                log::info!("search: missile {id} detonated, kill radius {kill_radius} km");
                self.missiles.remove(&id);

                // Burst catches every airframe inside the kill sphere; each
                // kill() is independent and idempotent, so order is
                // insignificant.
                let burst = DVec3::new(position.x, position.y, position.z);
                for &flight in flights {
                    let Ok(target_pos) = world.get::<&Position>(flight).map(|p| *p) else {
                        continue;
                    };
                    if burst.distance(target_pos.as_dvec3()) <= kill_radius {
                        if let Ok(mut airframe) = world.get::<&mut Airframe>(flight) {
                            if !airframe.is_destroyed {
                                log::info!("search: {} killed by missile {id}", airframe.id);
                                airframe.kill();
                            }
                        }
                    }
                }
            }
        }
    }

    /// Emit the wide-area plot snapshot: every registered airframe at low
    /// fidelity, regardless of recognition state.
    pub fn plot(&self, world: &World, flights: &[Entity], events: &mut Vec<RadarEvent>) {
        if !self.enabled {
            return;
        }
        let flights = flights
            .iter()
            .filter_map(|&entity| {
                let airframe = world.get::<&Airframe>(entity).ok()?;
                let position = world.get::<&Position>(entity).ok()?;
                Some(FlightView {
                    id: airframe.id.clone(),
                    position: *position,
                    heading: airframe.heading,
                    velocity: airframe.velocity,
                    is_launched: airframe.is_launched,
                    is_destroyed: airframe.is_destroyed,
                })
            })
            .collect();
        events.push(RadarEvent::WideAreaPlot { flights });
    }

    /// Noisy handoff estimate for the tracking radar.
    ///
    /// True geometry plus independent uniform jitter per axis; a target past
    /// the detection range reports a distance clamped just inside it.
    /// `None` for unknown or destroyed ids.
    pub fn designation(
        &self,
        world: &World,
        flights: &[Entity],
        id: &str,
        config: &RadarConfig,
        rng: &mut ChaCha8Rng,
    ) -> Option<Designation> {
        let is_destroyed = flights.iter().find_map(|&entity| {
            let airframe = world.get::<&Airframe>(entity).ok()?;
            (airframe.id == id).then_some(airframe.is_destroyed)
        })?;
        if is_destroyed {
            return None;
        }
        let target = self.recognized.get(id)?;
        let azimuth =
            target.azimuth + rng.gen_range(-config.accuracy_azimuth..=config.accuracy_azimuth);
        let elevation = target.elevation
            + rng.gen_range(-config.accuracy_elevation..=config.accuracy_elevation);
        let distance = if target.distance > config.max_distance_km {
            config.max_distance_km - config.accuracy_distance_km
        } else {
            target.distance
                + rng.gen_range(-config.accuracy_distance_km..=config.accuracy_distance_km)
        };
        Some(Designation {
            azimuth,
            elevation,
            distance,
        })
    }

    /// First recognized target (registration order) within the angular
    /// accuracy windows of the query.
    pub fn find_by_direction(
        &self,
        world: &World,
        flights: &[Entity],
        azimuth: f64,
        elevation: f64,
        config: &RadarConfig,
    ) -> Option<String> {
        for &entity in flights {
            let Ok(airframe) = world.get::<&Airframe>(entity) else {
                continue;
            };
            let Some(target) = self.recognized.get(&airframe.id) else {
                continue;
            };
            if geometry::wrap_angle(target.azimuth - azimuth).abs() < config.accuracy_azimuth
                && (target.elevation - elevation).abs() < config.accuracy_elevation
            {
                return Some(target.id.clone());
            }
        }
        None
    }

    /// Angular correlation plus a distance window on the target it found.
    /// A distance mismatch is "no match" even when the angles matched.
    pub fn find_by_direction_and_distance(
        &self,
        world: &World,
        flights: &[Entity],
        azimuth: f64,
        elevation: f64,
        distance: f64,
        config: &RadarConfig,
    ) -> Option<String> {
        let id = self.find_by_direction(world, flights, azimuth, elevation, config)?;
        let target = self.recognized.get(&id)?;
        ((target.distance - distance).abs() < config.accuracy_distance_km).then_some(id)
    }

    fn drop_target(&mut self, id: &str, events: &mut Vec<RadarEvent>) {
        if self.recognized.remove(id).is_some() {
            log::debug!("search: dropped {id}");
            events.push(RadarEvent::TargetDropped { id: id.to_string() });
        }
    }

    /// Recognized targets cloned out in registration order.
    fn targets_in_order(&self, world: &World, flights: &[Entity]) -> Vec<RecognizedTarget> {
        flights
            .iter()
            .filter_map(|&entity| {
                let airframe = world.get::<&Airframe>(entity).ok()?;
                self.recognized.get(&airframe.id).cloned()
            })
            .collect()
    }

    /// Live-missile snapshots cloned out in registration order.
    fn missiles_in_order(&self, world: &World, missiles: &[Entity]) -> Vec<MissileSnapshot> {
        missiles
            .iter()
            .filter_map(|&entity| {
                let missile = world.get::<&Interceptor>(entity).ok()?;
                self.missiles.get(&missile.id).cloned()
            })
            .collect()
    }
}
