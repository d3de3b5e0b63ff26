//! Particle field behind the animated header background.
//!
//! A fixed number of particles drift across a rectangle, wrapping at the edges.
//! Every pair closer than the link distance is joined by a line that fades out as
//! the pair separates. Pair checks are O(n²), which is fine for a hundred points.
//!
//! The field never touches a canvas directly: drawing goes through [`Surface`] and
//! randomness through [`RandomSource`], so the whole animation runs in unit tests.

use crate::config::BackgroundConfig;

/// Uniform random numbers in [0, 1).
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
    fn next_f64(&mut self) -> f64 {
        self()
    }
}

/// Drawing target for one frame.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub alpha: f64,
    /// `rgba(...)` fill, fixed at spawn
    pub color: String,
}

impl Particle {
    /// A particle at a uniformly random position inside `width` x `height`.
    pub fn spawn<R: RandomSource + ?Sized>(
        width: f64,
        height: f64,
        settings: &BackgroundConfig,
        rng: &mut R,
    ) -> Self {
        let x = wrap(rng.next_f64() * width, width);
        let y = wrap(rng.next_f64() * height, height);
        let vx = (rng.next_f64() - 0.5) * 2.0 * settings.max_speed;
        let vy = (rng.next_f64() - 0.5) * 2.0 * settings.max_speed;
        let radius =
            settings.min_radius + rng.next_f64() * (settings.max_radius - settings.min_radius);
        let alpha = settings.min_alpha + rng.next_f64() * (1.0 - settings.min_alpha);
        Self {
            x,
            y,
            vx,
            vy,
            radius,
            alpha,
            color: rgba(&settings.rgb, alpha),
        }
    }

    /// Advance by one velocity step, wrapping into [0, width) x [0, height).
    pub fn step(&mut self, width: f64, height: f64) {
        self.x = wrap(self.x + self.vx, width);
        self.y = wrap(self.y + self.vy, height);
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A line between two nearby particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub opacity: f64,
}

/// Opacity of the line between two particles `distance` apart, `None` when they
/// are not close enough to be linked.
pub fn link_opacity(distance: f64, link_distance: f64) -> Option<f64> {
    (distance < link_distance).then(|| (1.0 - distance / link_distance).clamp(0.0, 1.0))
}

fn wrap(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

fn rgba(rgb: &str, alpha: f64) -> String {
    format!("rgba({rgb}, {alpha})")
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    settings: BackgroundConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// An empty 0 x 0 field; call [`ParticleField::resize`] to populate it.
    pub fn new(settings: BackgroundConfig) -> Self {
        Self {
            settings,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Adopt new bounds and replace every particle with a fresh batch.
    ///
    /// Particles are not rescaled; nothing survives a resize.
    pub fn resize<R: RandomSource + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.particles = (0..self.settings.particle_count)
            .map(|_| Particle::spawn(self.width, self.height, &self.settings, rng))
            .collect();
        log::debug!(
            "background: {} particles in {}x{}",
            self.particles.len(),
            self.width,
            self.height
        );
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    /// Lines for every unordered pair closer than the link distance.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let link_distance = self.settings.link_distance;
        self.particles.iter().enumerate().flat_map(move |(i, a)| {
            self.particles[i + 1..].iter().filter_map(move |b| {
                link_opacity(a.distance_to(b), link_distance).map(|opacity| Link {
                    from: (a.x, a.y),
                    to: (b.x, b.y),
                    opacity,
                })
            })
        })
    }

    /// One animation frame: clear, move and draw every particle, then draw links.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear(self.width, self.height);
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
            surface.fill_circle(particle.x, particle.y, particle.radius, &particle.color);
        }
        for link in self.links() {
            surface.stroke_line(
                link.from,
                link.to,
                &rgba(&self.settings.rgb, link.opacity),
                self.settings.line_width,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lcg(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed;
        move || {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    fn particle_at(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
        Particle {
            x,
            y,
            vx,
            vy,
            radius: 1.0,
            alpha: 1.0,
            color: String::new(),
        }
    }

    #[derive(Default)]
    struct Recorder {
        clears: usize,
        circles: Vec<(f64, f64, f64, String)>,
        lines: Vec<String>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, _width: f64, _height: f64) {
            self.clears += 1;
        }
        fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
            self.circles.push((x, y, radius, color.to_string()));
        }
        fn stroke_line(&mut self, _from: (f64, f64), _to: (f64, f64), color: &str, width: f64) {
            assert_eq!(width, 0.5);
            self.lines.push(color.to_string());
        }
    }

    #[test]
    fn resize_populates_exactly_particle_count() {
        let mut field = ParticleField::new(BackgroundConfig::default());
        assert!(field.particles().is_empty());
        let mut rng = lcg(7);
        field.resize(800.0, 400.0, &mut rng);
        assert_eq!(field.particles().len(), 100);
        field.resize(1024.0, 300.0, &mut rng);
        assert_eq!(field.particles().len(), 100);
        assert_eq!((field.width(), field.height()), (1024.0, 300.0));
    }

    #[test]
    fn spawned_particles_respect_ranges() {
        let mut field = ParticleField::new(BackgroundConfig::default());
        field.resize(640.0, 480.0, &mut lcg(42));
        for p in field.particles() {
            assert!((0.0..640.0).contains(&p.x));
            assert!((0.0..480.0).contains(&p.y));
            assert!((-0.25..=0.25).contains(&p.vx));
            assert!((-0.25..=0.25).contains(&p.vy));
            assert!((1.0..=3.0).contains(&p.radius));
            assert!((0.5..=1.0).contains(&p.alpha));
            assert!(p.color.starts_with("rgba(88, 166, 255, "));
        }
    }

    #[test]
    fn positions_stay_in_bounds_after_many_steps() {
        let mut field = ParticleField::new(BackgroundConfig::default());
        field.resize(300.0, 150.0, &mut lcg(3));
        for _ in 0..5_000 {
            field.step();
        }
        for p in field.particles() {
            assert!(p.x >= 0.0 && p.x < 300.0, "x out of bounds: {}", p.x);
            assert!(p.y >= 0.0 && p.y < 150.0, "y out of bounds: {}", p.y);
        }
    }

    #[test]
    fn wraps_across_each_edge() {
        let mut left = particle_at(0.1, 50.0, -0.2, 0.0);
        left.step(100.0, 100.0);
        assert!((left.x - 99.9).abs() < 1e-9);

        let mut right = particle_at(99.9, 50.0, 0.2, 0.0);
        right.step(100.0, 100.0);
        assert!((right.x - 0.1).abs() < 1e-9);

        let mut top = particle_at(50.0, 0.0, 0.0, -0.25);
        top.step(100.0, 100.0);
        assert!((top.y - 99.75).abs() < 1e-9);

        let mut bottom = particle_at(50.0, 99.8, 0.0, 0.25);
        bottom.step(100.0, 100.0);
        assert!((bottom.y - 0.05).abs() < 1e-9);
    }

    #[test]
    fn tiny_negative_position_does_not_land_on_edge() {
        let mut p = particle_at(0.0, 0.0, -1e-18, -1e-18);
        p.step(100.0, 100.0);
        assert!(p.x < 100.0 && p.y < 100.0);
    }

    #[test]
    fn link_threshold_and_opacity() {
        assert_eq!(link_opacity(0.0, 150.0), Some(1.0));
        assert_eq!(link_opacity(75.0, 150.0), Some(0.5));
        assert_eq!(link_opacity(150.0, 150.0), None);
        assert_eq!(link_opacity(200.0, 150.0), None);
        let almost = link_opacity(149.999, 150.0).unwrap();
        assert!(almost > 0.0 && almost < 1e-4);
    }

    #[test]
    fn links_cover_close_pairs_only() {
        let mut field = ParticleField::new(BackgroundConfig::default());
        field.width = 1000.0;
        field.height = 1000.0;
        field.particles = vec![
            particle_at(0.0, 0.0, 0.0, 0.0),
            particle_at(90.0, 119.0, 0.0, 0.0),
            particle_at(500.0, 500.0, 0.0, 0.0),
        ];
        let links: Vec<Link> = field.links().collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].from, (0.0, 0.0));
        assert_eq!(links[0].to, (90.0, 119.0));
        let distance = 90.0f64.hypot(119.0);
        assert!((links[0].opacity - (1.0 - distance / 150.0)).abs() < 1e-12);

        // exactly on the threshold: not linked
        field.particles[1] = particle_at(150.0, 0.0, 0.0, 0.0);
        assert_eq!(field.links().count(), 0);
    }

    #[test]
    fn frame_draws_every_particle_then_links() {
        let mut field = ParticleField::new(BackgroundConfig::default());
        field.width = 400.0;
        field.height = 400.0;
        field.particles = vec![
            particle_at(10.0, 10.0, 1.0, 0.0),
            particle_at(40.0, 50.0, 0.0, 0.0),
            particle_at(390.0, 390.0, 0.0, 0.0),
        ];
        let mut recorder = Recorder::default();
        field.frame(&mut recorder);
        assert_eq!(recorder.clears, 1);
        assert_eq!(recorder.circles.len(), 3);
        assert_eq!(recorder.circles[0].0, 11.0);
        // (11,10)-(40,50) is ~49.4 apart, everything else is far
        assert_eq!(recorder.lines.len(), 1);
        assert!(recorder.lines[0].starts_with("rgba(88, 166, 255, 0.6"));
    }

    #[test]
    fn zero_size_then_regular_size_yields_fresh_batch() {
        let mut field = ParticleField::new(BackgroundConfig::default());
        let mut rng = lcg(11);
        field.resize(0.0, 0.0, &mut rng);
        assert_eq!((field.width(), field.height()), (0.0, 0.0));
        assert_eq!(field.particles().len(), 100);
        field.step();
        assert!(field.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0));

        field.resize(800.0, 400.0, &mut rng);
        assert_eq!(field.particles().len(), 100);
        assert!(field
            .particles()
            .iter()
            .all(|p| (0.0..800.0).contains(&p.x) && (0.0..400.0).contains(&p.y)));
        // a fresh batch is spread out, not pinned at the old origin
        assert!(field.particles().iter().any(|p| p.x != 0.0 || p.y != 0.0));
    }

    #[test]
    fn closures_are_random_sources() {
        let mut fixed = || 0.5;
        let p = Particle::spawn(200.0, 100.0, &BackgroundConfig::default(), &mut fixed);
        assert_eq!((p.x, p.y), (100.0, 50.0));
        assert_eq!((p.vx, p.vy), (0.0, 0.0));
        assert_eq!(p.radius, 2.0);
        assert_eq!(p.alpha, 0.75);
        assert_eq!(p.color, "rgba(88, 166, 255, 0.75)");
    }
}
