use itertools::iproduct;
use rand::Rng;

use crate::point::Coord;

/// Row-major rectangle: `x` in `[0, width)`, `y` in `[offset, offset + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
    pub offset: i64,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 20,
            offset: 5,
        }
    }
}

impl Grid {
    /// Number of pairs `points()` yields. `y` never reaches past `i64::MAX`.
    pub fn len(&self) -> u64 {
        self.width as u64 * (self.y_end() - self.offset) as u64
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn points(&self) -> impl Iterator<Item = Coord> {
        let ys = self.offset..self.y_end();
        iproduct!(0..self.width as i64, ys).map(|(x, y)| Coord::new(x, y))
    }

    fn y_end(&self) -> i64 {
        self.offset.saturating_add(self.height as i64)
    }
}

/// One sine wave per adder, each shifted diagonally by that adder.
#[derive(Debug, Clone, PartialEq)]
pub struct Sine {
    pub adders: Vec<i64>,
    pub samples: u32,
    pub amplitude: f64,
    pub period: f64,
}

impl Default for Sine {
    fn default() -> Self {
        Self {
            adders: vec![200, 400, 800],
            samples: 1000,
            amplitude: 200.0,
            period: 100.0,
        }
    }
}

impl Sine {
    pub fn points(&self) -> impl Iterator<Item = Coord> + '_ {
        iproduct!(self.adders.iter().copied(), 0..self.samples as i64).map(move |(adder, i)| {
            let y = (i as f64 / self.period).sin() * self.amplitude + adder as f64;
            Coord::new(adder.saturating_add(i), y as i64)
        })
    }
}

/// Egg-shaped blobs: points on a circle of `radius` around each center, with
/// the horizontal component squashed by a random factor.
#[derive(Debug, Clone, PartialEq)]
pub struct Eggs {
    pub centers: Vec<Coord>,
    pub radius: f64,
    pub samples: u32,
}

impl Default for Eggs {
    fn default() -> Self {
        Self {
            centers: vec![Coord::new(100, 100), Coord::new(200, 100), Coord::new(150, 150)],
            radius: 50.0,
            samples: 2000,
        }
    }
}

impl Eggs {
    pub fn points<'a, R: Rng + 'a>(&'a self, mut rng: R) -> impl Iterator<Item = Coord> + 'a {
        let samples = self.samples as usize;
        let total = self.centers.len() * samples;

        (0..total).map(move |n| {
            let center = self.centers[n / samples];
            // the angle is scaled like degrees but fed to sin/cos as radians
            let angle = rng.random::<f64>() * 360.0;
            let x = angle.sin() * self.radius * rng.random::<f64>();
            let y = angle.cos() * self.radius;
            Coord::new((x + center.x as f64) as i64, (y + center.y as f64) as i64)
        })
    }
}

/// Uniform points inside a `width` x `height` box starting at `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scatter {
    pub origin: Coord,
    pub width: f64,
    pub height: f64,
    pub samples: u32,
}

impl Default for Scatter {
    fn default() -> Self {
        Self {
            origin: Coord::new(0, 0),
            width: 100.0,
            height: 100.0,
            samples: 1000,
        }
    }
}

impl Scatter {
    pub fn points<R: Rng>(&self, mut rng: R) -> impl Iterator<Item = Coord> {
        let Scatter {
            origin,
            width,
            height,
            samples,
        } = *self;

        (0..samples).map(move |_| {
            let x = rng.random::<f64>() * width + origin.x as f64;
            let y = rng.random::<f64>() * height + origin.y as f64;
            Coord::new(x as i64, y as i64)
        })
    }
}

/// Any of the generators, picked at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Grid(Grid),
    Sine(Sine),
    Eggs(Eggs),
    Scatter(Scatter),
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern::Grid(Grid::default())
    }
}

impl Pattern {
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Grid(_) => "grid",
            Pattern::Sine(_) => "sine",
            Pattern::Eggs(_) => "eggs",
            Pattern::Scatter(_) => "scatter",
        }
    }

    /// Lazily yields the pattern's pairs. Deterministic patterns ignore `rng`.
    pub fn points<'a, R: Rng + 'a>(&'a self, rng: R) -> Box<dyn Iterator<Item = Coord> + 'a> {
        match self {
            Pattern::Grid(grid) => Box::new(grid.points()),
            Pattern::Sine(sine) => Box::new(sine.points()),
            Pattern::Eggs(eggs) => Box::new(eggs.points(rng)),
            Pattern::Scatter(scatter) => Box::new(scatter.points(rng)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn small_grid_is_row_major() {
        let grid = Grid { width: 3, height: 2, offset: 5 };
        let points: Vec<_> = grid.points().map(|c| (c.x, c.y)).collect();
        assert_eq!(points, vec![(0, 5), (0, 6), (1, 5), (1, 6), (2, 5), (2, 6)]);
    }

    #[test]
    fn default_grid_count_and_range() {
        let grid = Grid::default();
        assert_eq!(grid.len(), 20000);
        assert_eq!(grid.points().count(), 20000);
        assert!(grid.points().all(|c| (0..1000).contains(&c.x) && (5..25).contains(&c.y)));
    }

    #[test]
    fn default_grid_order() {
        let grid = Grid::default();
        let points: Vec<_> = grid.points().collect();
        assert!(points.iter().tuple_windows().all(|(a, b)| a.x <= b.x));

        for (x, column) in &points.iter().chunk_by(|c| c.x) {
            let ys: Vec<_> = column.map(|c| c.y).collect();
            assert_eq!(ys, (5..25).collect::<Vec<_>>(), "column {x}");
        }
    }

    #[test]
    fn empty_grid() {
        let grid = Grid { width: 0, height: 20, offset: 5 };
        assert!(grid.is_empty());
        assert_eq!(grid.points().count(), 0);

        let grid = Grid { width: 4, height: 0, offset: 5 };
        assert_eq!(grid.points().count(), 0);
    }

    #[test]
    fn grid_rows_stop_at_i64_max() {
        let grid = Grid { width: 2, height: 5, offset: i64::MAX - 1 };
        let points: Vec<_> = grid.points().collect();
        assert_eq!(grid.len(), 2);
        assert_eq!(points, vec![Coord::new(0, i64::MAX - 1), Coord::new(1, i64::MAX - 1)]);

        let grid = Grid { width: 1, height: 20, offset: i64::MAX };
        assert_eq!(grid.points().count(), 0);
    }

    #[test]
    fn sine_x_saturates() {
        let sine = Sine {
            adders: vec![i64::MAX],
            samples: 2,
            amplitude: 200.0,
            period: 100.0,
        };
        let xs: Vec<_> = sine.points().map(|c| c.x).collect();
        assert_eq!(xs, vec![i64::MAX, i64::MAX]);
    }

    #[test]
    fn sine_starts_on_the_diagonal() {
        let sine = Sine::default();
        let points: Vec<_> = sine.points().collect();
        assert_eq!(points.len(), 3000);
        assert_eq!(points[0], Coord::new(200, 200));
        assert_eq!(points[1000], Coord::new(400, 400));
        assert_eq!(points[2000], Coord::new(800, 800));
        // sin(1.57) * 200 + 200 truncates to 399
        assert_eq!(points[157], Coord::new(357, 399));
    }

    #[test]
    fn sine_truncates_toward_zero() {
        let sine = Sine {
            adders: vec![0],
            samples: 400,
            amplitude: 200.0,
            period: 100.0,
        };
        // sin(3.5) * 200 = -70.16..., truncated to -70
        assert_eq!(sine.points().nth(350), Some(Coord::new(350, -70)));
    }

    #[test]
    fn eggs_stay_near_their_centers() {
        let eggs = Eggs::default();
        let points: Vec<_> = eggs.points(rng()).collect();
        assert_eq!(points.len(), 6000);

        for (i, chunk) in points.chunks(2000).enumerate() {
            let center = eggs.centers[i];
            for p in chunk {
                assert!((p.x - center.x).abs() <= 50, "{p} from {center}");
                assert!((p.y - center.y).abs() <= 50, "{p} from {center}");
            }
        }
    }

    #[test]
    fn seeded_eggs_are_reproducible() {
        let eggs = Eggs::default();
        let a: Vec<_> = eggs.points(rng()).collect();
        let b: Vec<_> = eggs.points(rng()).collect();
        assert_eq!(a, b);

        let c: Vec<_> = eggs.points(ChaCha8Rng::seed_from_u64(8)).collect();
        assert_ne!(a, c);
    }

    #[test]
    fn scatter_stays_in_its_box() {
        let scatter = Scatter {
            origin: Coord::new(400, 200),
            width: 100.0,
            height: 50.0,
            samples: 500,
        };
        let points: Vec<_> = scatter.points(rng()).collect();
        assert_eq!(points.len(), 500);
        assert!(points
            .iter()
            .all(|p| (400..500).contains(&p.x) && (200..250).contains(&p.y)));
    }

    #[test]
    fn pattern_dispatch() {
        assert_eq!(Pattern::default().name(), "grid");
        assert_eq!(Pattern::default().points(rng()).count(), 20000);
        assert_eq!(Pattern::Sine(Sine::default()).points(rng()).count(), 3000);
        assert_eq!(Pattern::Eggs(Eggs::default()).points(rng()).count(), 6000);
        assert_eq!(Pattern::Scatter(Scatter::default()).points(rng()).count(), 1000);
    }
}
