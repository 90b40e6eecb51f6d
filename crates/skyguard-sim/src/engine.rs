//! Engagement-chain engine — the core of the simulation.
//!
//! `RadarEngine` owns the hecs ECS world, processes operator commands, runs
//! both radars at their cadences, and returns the per-tick event stream.
//! The flight collaborator mutates positions and lifecycle flags between
//! ticks through `world_mut`.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyguard_core::commands::OperatorCommand;
use skyguard_core::components::{Airframe, Interceptor, RadarCrossSection};
use skyguard_core::config::{RadarConfig, SimConfig};
use skyguard_core::enums::CaptureState;
use skyguard_core::events::RadarEvent;
use skyguard_core::state::{BeamState, Designation, MissileSnapshot, RecognizedTarget};
use skyguard_core::types::{Position, SimTime};

use crate::display::TrackingDisplay;
use crate::search::SearchRadar;
use crate::track::TrackingRadar;

/// The engagement-chain engine. Owns the ECS world and all radar state.
pub struct RadarEngine {
    world: World,
    time: SimTime,
    config: RadarConfig,
    rng: ChaCha8Rng,
    command_queue: VecDeque<OperatorCommand>,
    events: Vec<RadarEvent>,
    /// Airframe roster in registration order (append-only).
    flights: Vec<Entity>,
    /// Missile roster in registration order (append-only).
    missiles: Vec<Entity>,
    search: SearchRadar,
    tracker: TrackingRadar,
}

impl RadarEngine {
    /// Create a new engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let tracker = TrackingRadar::new(&config.radar);
        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config: config.radar,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            flights: Vec::new(),
            missiles: Vec::new(),
            search: SearchRadar::new(),
            tracker,
        }
    }

    /// Register an airborne object. Registration order is the documented
    /// tie-break for correlation queries and event payload ordering.
    pub fn add_flight_object(
        &mut self,
        airframe: Airframe,
        position: Position,
        rcs: RadarCrossSection,
    ) -> Entity {
        let entity = self.world.spawn((airframe, position, rcs));
        self.flights.push(entity);
        entity
    }

    /// Register an interceptor missile.
    pub fn add_missile(&mut self, missile: Interceptor, position: Position) -> Entity {
        let entity = self.world.spawn((missile, position));
        self.missiles.push(entity);
        entity
    }

    /// Queue an operator command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: OperatorCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = OperatorCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the chain by one tick and return the events it emitted.
    ///
    /// This is the only clock: cadences are derived from the tick counter,
    /// so a test harness and a wall-clock adapter step the engine the same
    /// way.
    pub fn tick(&mut self) -> Vec<RadarEvent> {
        self.process_commands();

        let tick = self.time.tick;
        if tick % self.config.sweep_interval_ticks.max(1) == 0 {
            self.search.sweep(
                &mut self.world,
                &self.flights,
                &self.missiles,
                &self.config,
                &mut self.events,
            );
        }
        if tick % self.config.plot_interval_ticks.max(1) == 0 {
            self.search.plot(&self.world, &self.flights, &mut self.events);
        }
        self.tracker.tick(
            &mut self.world,
            &self.flights,
            &self.missiles,
            &self.config,
            &mut self.rng,
            &mut self.events,
        );

        self.time.advance();
        std::mem::take(&mut self.events)
    }

    // --- Designation and correlation queries ------------------------------

    /// Noisy handoff estimate for the given target id.
    pub fn designation(&mut self, id: &str) -> Option<Designation> {
        self.search
            .designation(&self.world, &self.flights, id, &self.config, &mut self.rng)
    }

    /// First recognized target within the angular accuracy windows.
    pub fn find_by_direction(&self, azimuth: f64, elevation: f64) -> Option<String> {
        self.search
            .find_by_direction(&self.world, &self.flights, azimuth, elevation, &self.config)
    }

    /// Angular correlation plus a distance window.
    pub fn find_by_direction_and_distance(
        &self,
        azimuth: f64,
        elevation: f64,
        distance: f64,
    ) -> Option<String> {
        self.search.find_by_direction_and_distance(
            &self.world,
            &self.flights,
            azimuth,
            elevation,
            distance,
            &self.config,
        )
    }

    // --- Inspection --------------------------------------------------------

    pub fn recognized_targets(&self) -> &std::collections::HashMap<String, RecognizedTarget> {
        self.search.recognized_targets()
    }

    pub fn missile_snapshots(&self) -> &std::collections::HashMap<String, MissileSnapshot> {
        self.search.missile_snapshots()
    }

    pub fn capture_state(&self) -> &CaptureState {
        self.tracker.capture_state()
    }

    pub fn beam(&self) -> &BeamState {
        self.tracker.beam()
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for the flight collaborator: positions, flags,
    /// and precomputed missile distances are written here between ticks.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Wire a display collaborator into the tracking radar.
    pub fn set_display(&mut self, display: Box<dyn TrackingDisplay>) {
        self.tracker.set_display(display);
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single operator command.
    fn handle_command(&mut self, command: OperatorCommand) {
        match command {
            OperatorCommand::SetSearchEnabled { enabled } => {
                self.search.set_enabled(enabled);
            }
            OperatorCommand::SetBeamAzimuth { degrees } => {
                self.tracker.set_azimuth(degrees);
            }
            OperatorCommand::SetBeamVerticalAngle { degrees } => {
                self.tracker.set_vertical_angle(degrees, &self.config);
            }
            OperatorCommand::SetBeamWidth { degrees } => {
                self.tracker.set_beam_width(degrees);
            }
            OperatorCommand::SetRangeCursor { km } => {
                self.tracker.set_range_cursor(km, &self.config);
            }
            OperatorCommand::DesignateTarget { id } => {
                let designation = self.search.designation(
                    &self.world,
                    &self.flights,
                    &id,
                    &self.config,
                    &mut self.rng,
                );
                if let Some(designation) = designation {
                    self.tracker.apply_designation(&designation);
                }
            }
            OperatorCommand::CaptureDirection => {
                self.tracker.capture_direction(
                    &self.world,
                    &self.flights,
                    &self.config,
                    &mut self.events,
                );
            }
            OperatorCommand::CaptureDistance => {
                self.tracker.capture_distance(
                    &self.world,
                    &self.flights,
                    &self.config,
                    &mut self.events,
                );
            }
            OperatorCommand::ResetDirectionCapture => {
                self.tracker
                    .reset_direction_capture(&mut self.world, &self.missiles, &mut self.events);
            }
            OperatorCommand::ResetDistanceCapture => {
                self.tracker.reset_distance_capture(&mut self.events);
            }
        }
    }
}
