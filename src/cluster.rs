//! Headless k-means over points read from a data file.
//!
//! The first `cluster()` after loading data (or changing `k`) seeds `k` means at
//! random inside the bounds of the data. Every step then assigns each point to
//! its nearest mean and moves each mean to the integer centroid of its points.

use log::{debug, info};
use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::point::{parse_line, Coord, NamedPoint};

pub const DEFAULT_K: usize = 3;

/// Margin added around the data when reporting the viewing area.
pub const VIEW_MARGIN: i64 = 10;

/// Extremes of the loaded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl Bounds {
    pub fn of<'a>(points: impl IntoIterator<Item = &'a NamedPoint>) -> Option<Self> {
        points.into_iter().fold(None, |bounds, point| {
            let Coord { x, y } = point.position;
            Some(match bounds {
                None => Bounds { min_x: x, max_x: x, min_y: y, max_y: y },
                Some(b) => Bounds {
                    min_x: b.min_x.min(x),
                    max_x: b.max_x.max(x),
                    min_y: b.min_y.min(y),
                    max_y: b.max_y.max(y),
                },
            })
        })
    }

    /// Grows the box by `margin` on every side.
    pub fn padded(&self, margin: i64) -> Self {
        Bounds {
            min_x: self.min_x.saturating_sub(margin),
            max_x: self.max_x.saturating_add(margin),
            min_y: self.min_y.saturating_sub(margin),
            max_y: self.max_y.saturating_add(margin),
        }
    }
}

pub struct ClusterModel<R> {
    points: Vec<NamedPoint>,
    means: Vec<Coord>,
    assignments: Vec<Option<usize>>,
    bounds: Option<Bounds>,
    k: usize,
    first_time: bool,
    rng: R,
}

impl<R: Rng> ClusterModel<R> {
    pub fn new(k: usize, rng: R) -> Result<Self> {
        if k == 0 {
            return Err(Error::InvalidK);
        }
        info!("Cluster model initializing.");
        Ok(Self {
            points: Vec::new(),
            means: Vec::new(),
            assignments: Vec::new(),
            bounds: None,
            k,
            first_time: true,
            rng,
        })
    }

    pub fn points(&self) -> &[NamedPoint] {
        &self.points
    }

    pub fn means(&self) -> &[Coord] {
        &self.means
    }

    /// Index into `means()` for each point, `None` until the first step.
    pub fn assignments(&self) -> &[Option<usize>] {
        &self.assignments
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn set_k(&mut self, k: usize) -> Result<()> {
        if k == 0 {
            return Err(Error::InvalidK);
        }
        self.k = k;
        self.first_time = true;
        info!("Changed k to value {}", k);
        Ok(())
    }

    pub fn open_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        self.load(BufReader::new(file)).map_err(|e| match e {
            Error::Io { source, .. } => io_err(source),
            other => other,
        })
    }

    /// Replaces the data set with every point found in `reader`. On error the
    /// previous data set is left untouched.
    pub fn load<B: BufRead>(&mut self, reader: B) -> Result<usize> {
        let mut points = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(|source| Error::Io {
                path: Default::default(),
                source,
            })?;
            match parse_line(&line)? {
                Some(point) => points.push(point),
                None => debug!("skipping line: {:?}", line),
            }
        }

        self.bounds = Bounds::of(&points);
        self.assignments = vec![None; points.len()];
        self.means.clear();
        self.points = points;
        self.first_time = true;

        info!("Found {} named points in the file.", self.points.len());
        Ok(self.points.len())
    }

    /// One k-means step. Returns the means after the update.
    pub fn cluster(&mut self) -> Result<&[Coord]> {
        debug!("clustering");
        let bounds = self.bounds.ok_or(Error::NoPoints)?;

        if self.first_time {
            self.generate_initial_means(bounds);
        }

        // i128 so that sums of large coordinates cannot overflow
        let mut sums = vec![(0i128, 0i128, 0i128); self.means.len()];
        for (point, assignment) in self.points.iter().zip(self.assignments.iter_mut()) {
            let mut nearest = None;
            let mut nearest_distance = f64::MAX;
            for (i, mean) in self.means.iter().enumerate() {
                let distance = point.distance(mean);
                // strict so ties keep the earlier mean
                if distance < nearest_distance {
                    nearest_distance = distance;
                    nearest = Some(i);
                }
            }

            *assignment = nearest;
            if let Some(i) = nearest {
                let (sx, sy, n) = &mut sums[i];
                *sx += point.position.x as i128;
                *sy += point.position.y as i128;
                *n += 1;
            }
        }

        for (mean, (sx, sy, n)) in self.means.iter_mut().zip(sums) {
            if n != 0 {
                // an average of i64 values always fits back into an i64
                *mean = Coord::new((sx / n) as i64, (sy / n) as i64);
            }
        }

        Ok(&self.means)
    }

    /// Steps until the means stop moving, at most `max_iterations` times.
    /// Returns the number of steps taken.
    pub fn run(&mut self, max_iterations: usize) -> Result<usize> {
        for step in 1..=max_iterations {
            let before = if self.first_time {
                None
            } else {
                Some(self.means.clone())
            };
            let after = self.cluster()?;
            if before.as_deref() == Some(after) {
                info!("Converged after {} steps", step);
                return Ok(step);
            }
        }
        Ok(max_iterations)
    }

    /// Counts the points assigned to each mean.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.means.len()];
        for i in self.assignments.iter().flatten() {
            sizes[*i] += 1;
        }
        sizes
    }

    fn generate_initial_means(&mut self, bounds: Bounds) {
        debug!("generating some initial means");

        let rng = &mut self.rng;
        let mut axis = |min: i64, max: i64| {
            if max > min {
                rng.random_range(min..max)
            } else {
                min
            }
        };

        self.means = (0..self.k)
            .map(|_| {
                let x = axis(bounds.min_x, bounds.max_x);
                let y = axis(bounds.min_y, bounds.max_y);
                Coord::new(x, y)
            })
            .collect();
        self.first_time = false;
    }
}
