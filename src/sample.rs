use geo::{BoundingRect, Contains, Point, Polygon};
use rand::Rng;
use thiserror::Error;

/// Number of points drawn when the caller has no particular count in mind.
pub const DEFAULT_NUM_POINTS: usize = 10;

/// Seed for reproducible sampling runs.
pub const DEFAULT_SEED: u64 = 100;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("polygon has no coordinates to bound")]
    EmptyPolygon,
    #[error("gave up after {attempts} attempts with {accepted}/{requested} points accepted")]
    AttemptsExhausted {
        attempts: u64,
        accepted: usize,
        requested: usize,
    },
}

/// Generate `num_points` random points inside `polygon` by rejection
/// sampling: draw uniform candidates over the bounding rectangle and keep
/// the ones the polygon contains.
///
/// Points come back in acceptance order. A zero-area polygon never accepts
/// anything, so this loops forever on one; use [`sample_points_capped`] when
/// that matters.
pub fn sample_points<R: Rng>(
    rng: &mut R,
    polygon: &Polygon<f64>,
    num_points: usize,
) -> Result<Vec<Point<f64>>, SampleError> {
    sample_inner(rng, polygon, num_points, None)
}

/// Like [`sample_points`], but gives up once `max_attempts` candidates have
/// been drawn.
pub fn sample_points_capped<R: Rng>(
    rng: &mut R,
    polygon: &Polygon<f64>,
    num_points: usize,
    max_attempts: u64,
) -> Result<Vec<Point<f64>>, SampleError> {
    sample_inner(rng, polygon, num_points, Some(max_attempts))
}

fn sample_inner<R: Rng>(
    rng: &mut R,
    polygon: &Polygon<f64>,
    num_points: usize,
    max_attempts: Option<u64>,
) -> Result<Vec<Point<f64>>, SampleError> {
    let mut points = Vec::with_capacity(num_points);
    if num_points == 0 {
        return Ok(points);
    }
    let bounds = polygon.bounding_rect().ok_or(SampleError::EmptyPolygon)?;
    let (min, max) = (bounds.min(), bounds.max());

    let mut attempts: u64 = 0;
    while points.len() < num_points {
        if let Some(cap) = max_attempts {
            if attempts >= cap {
                return Err(SampleError::AttemptsExhausted {
                    attempts,
                    accepted: points.len(),
                    requested: num_points,
                });
            }
        }
        attempts += 1;

        let candidate = Point::new(
            rng.random_range(min.x..=max.x),
            rng.random_range(min.y..=max.y),
        );
        if polygon.contains(&candidate) {
            points.push(candidate);
        }
    }
    Ok(points)
}
