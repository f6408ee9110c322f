//! A toy toroidal arena: just enough world to feed percepts to the
//! strategies and move agents along their intents.

use std::f64::consts::PI;
use std::ops::Range;

use rand::{Rng, rngs::SmallRng};

use st_behavior::{AgentProfile, Disposition, SteeringIntent, disposition};
use st_core::{Force, Hue, ObjectCategory, Percept, angle_diff, normalize_angle};
use tracing::debug;

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Body {
    pub profile: AgentProfile,
    pub x:       f64,
    pub y:       f64,
    pub heading: f64,
    pub speed:   f64,
    pub alive:   bool,
}

impl Body {
    fn category(&self) -> ObjectCategory {
        self.profile.kind.looks_like(self.alive)
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Obstacle {
    pub x:      f64,
    pub y:      f64,
    pub radius: f64,
}

#[derive(Copy, Clone, Debug)]
pub struct Light {
    pub x:   f64,
    pub y:   f64,
    pub hue: Hue,
}

/// A contiguous block of bodies driven by one population.
#[derive(Copy, Clone, Debug)]
pub struct Group {
    pub start: usize,
    pub len:   usize,
}

impl Group {
    pub fn range(self) -> Range<usize> {
        self.start..self.start + self.len
    }
}

// ── Arena ─────────────────────────────────────────────────────────────────────

pub struct Arena {
    pub width:     f64,
    pub height:    f64,
    /// Perception radius shared by every agent.
    pub range:     f64,
    pub bodies:    Vec<Body>,
    pub obstacles: Vec<Obstacle>,
    pub lights:    Vec<Light>,
}

impl Arena {
    pub fn new(width: f64, height: f64, range: f64) -> Self {
        Self {
            width,
            height,
            range,
            bodies:    Vec::new(),
            obstacles: Vec::new(),
            lights:    Vec::new(),
        }
    }

    /// Scatter `count` bodies with `profile` at random positions and headings.
    pub fn spawn(&mut self, profile: AgentProfile, count: usize, rng: &mut SmallRng) -> Group {
        let start = self.bodies.len();
        for _ in 0..count {
            self.bodies.push(Body {
                profile,
                x:       rng.gen_range(0.0..self.width),
                y:       rng.gen_range(0.0..self.height),
                heading: rng.gen_range(-PI..PI),
                speed:   profile.max_speed,
                alive:   true,
            });
        }
        Group { start, len: count }
    }

    pub fn scatter_obstacles(&mut self, count: usize, radius: f64, rng: &mut SmallRng) {
        for _ in 0..count {
            self.obstacles.push(Obstacle {
                x: rng.gen_range(0.0..self.width),
                y: rng.gen_range(0.0..self.height),
                radius,
            });
        }
    }

    /// Place `per_hue` lights of every palette colour.
    pub fn scatter_lights(&mut self, per_hue: usize, rng: &mut SmallRng) {
        for hue in Hue::CYCLE {
            for _ in 0..per_hue {
                self.lights.push(Light {
                    x: rng.gen_range(0.0..self.width),
                    y: rng.gen_range(0.0..self.height),
                    hue,
                });
            }
        }
    }

    pub fn alive(&self, group: Group) -> usize {
        self.bodies[group.range()].iter().filter(|b| b.alive).count()
    }

    /// Shortest displacement from `(x0, y0)` to `(x1, y1)` on the torus.
    fn offset(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> (f64, f64) {
        let wrap = |d: f64, span: f64| d - span * (d / span).round();
        (wrap(x1 - x0, self.width), wrap(y1 - y0, self.height))
    }

    // ── Perception ────────────────────────────────────────────────────────

    /// One percept list per body in `group`, relative to that body's
    /// position and heading.  Dead bodies perceive nothing.
    pub fn percepts(&self, group: Group) -> Vec<Vec<Percept>> {
        group.range().map(|i| self.percepts_of(i)).collect()
    }

    fn percepts_of(&self, me: usize) -> Vec<Percept> {
        let body = &self.bodies[me];
        if !body.alive {
            return Vec::new();
        }
        let mut out = Vec::new();
        let locate = |x: f64, y: f64| {
            let (dx, dy) = self.offset(body.x, body.y, x, y);
            let to = Force::from_cartesian(dx, dy);
            (to.magnitude() <= self.range)
                .then(|| (to.magnitude(), angle_diff(to.angle(), body.heading)))
        };

        for (j, other) in self.bodies.iter().enumerate() {
            if j == me {
                continue;
            }
            if let Some((distance, bearing)) = locate(other.x, other.y) {
                out.push(
                    Percept::new(other.category(), distance, bearing)
                        .with_orientation(angle_diff(other.heading, body.heading))
                        .with_speed(other.speed),
                );
            }
        }
        for obstacle in &self.obstacles {
            if let Some((distance, bearing)) = locate(obstacle.x, obstacle.y) {
                let surface = (distance - obstacle.radius).max(0.0);
                out.push(Percept::new(ObjectCategory::Obstacle, surface, bearing));
            }
        }
        for light in &self.lights {
            if let Some((distance, bearing)) = locate(light.x, light.y) {
                out.push(Percept::light(light.hue, distance, bearing));
            }
        }
        out
    }

    // ── Motion ────────────────────────────────────────────────────────────

    /// Turn each live body in `group` toward its intent (limited by its
    /// `max_turn`) and advance it at full speed.  `None` holds course.
    pub fn apply(&mut self, group: Group, intents: &[Option<SteeringIntent>]) {
        let (width, height) = (self.width, self.height);
        for (body, intent) in self.bodies[group.range()].iter_mut().zip(intents) {
            if !body.alive {
                continue;
            }
            if let Some(intent) = intent {
                let turn = intent.bearing.clamp(-body.profile.max_turn, body.profile.max_turn);
                body.heading = normalize_angle(body.heading + turn);
            }
            body.speed = body.profile.max_speed;
            body.x = (body.x + body.speed * body.heading.cos()).rem_euclid(width);
            body.y = (body.y + body.speed * body.heading.sin()).rem_euclid(height);
        }
    }

    /// Resolve contacts using the disposition table.  An attacked body
    /// becomes a corpse; an attacked light is eaten and reappears at a
    /// random spot.
    pub fn resolve_contacts(&mut self, rng: &mut SmallRng) -> Contacts {
        let mut victims = Vec::new();
        let mut meals = Vec::new();
        for (i, hunter) in self.bodies.iter().enumerate() {
            if !hunter.alive {
                continue;
            }
            let kind = hunter.profile.kind;
            for (j, prey) in self.bodies.iter().enumerate() {
                if i == j || !prey.alive {
                    continue;
                }
                let (dx, dy) = self.offset(hunter.x, hunter.y, prey.x, prey.y);
                let reach = hunter.profile.size + prey.profile.size;
                if dx.hypot(dy) <= reach && disposition(kind, prey.category()) == Disposition::Attack {
                    victims.push((i, j));
                }
            }
            if disposition(kind, ObjectCategory::Light) == Disposition::Attack {
                for (k, light) in self.lights.iter().enumerate() {
                    let (dx, dy) = self.offset(hunter.x, hunter.y, light.x, light.y);
                    if dx.hypot(dy) <= hunter.profile.size {
                        meals.push((i, k));
                    }
                }
            }
        }

        let mut contacts = Contacts::default();
        for (hunter, prey) in victims {
            if self.bodies[prey].alive {
                self.bodies[prey].alive = false;
                self.bodies[prey].speed = 0.0;
                contacts.kills += 1;
                debug!(hunter, prey, kind = %self.bodies[prey].profile.kind, "caught");
            }
        }
        meals.sort_unstable_by_key(|&(_, k)| k);
        meals.dedup_by_key(|&mut (_, k)| k);
        for (eater, k) in meals {
            let light = &mut self.lights[k];
            light.x = rng.gen_range(0.0..self.width);
            light.y = rng.gen_range(0.0..self.height);
            contacts.lights_eaten += 1;
            debug!(eater, light = k, hue = %light.hue, "light eaten");
        }
        contacts
    }

    /// Length of the mean heading vector of the live bodies in `group`:
    /// 1.0 when they all fly the same way, near 0.0 when scattered.
    pub fn polarization(&self, group: Group) -> f64 {
        let live = self.bodies[group.range()].iter().filter(|b| b.alive);
        let n = live.clone().count();
        if n == 0 {
            return 0.0;
        }
        let sum: Force = live.map(|b| Force::from_polar(1.0, b.heading)).sum();
        sum.magnitude() / n as f64
    }
}

/// What happened on contact during one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Contacts {
    pub kills:        usize,
    pub lights_eaten: usize,
}

impl std::ops::AddAssign for Contacts {
    fn add_assign(&mut self, rhs: Contacts) {
        self.kills += rhs.kills;
        self.lights_eaten += rhs.lights_eaten;
    }
}
