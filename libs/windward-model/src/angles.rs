//! Circular angle math
//!
//! Compass directions live on a circle; naive arithmetic means across the
//! 0/360 seam are wrong, so averages go through unit vectors.

/// Wrap an angle into [0, 360)
pub fn wrap_360(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Wrap an angle into (-180, 180]
pub fn wrap_180(deg: f64) -> f64 {
    let wrapped = wrap_360(deg);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Smallest signed difference `a - b`, in (-180, 180]
pub fn angle_diff(a_deg: f64, b_deg: f64) -> f64 {
    wrap_180(a_deg - b_deg)
}

/// Circular mean of compass directions, in [0, 360).
///
/// Averages the unit vectors rather than the raw degrees. Returns None for an
/// empty slice or when the vectors cancel out (the mean direction is
/// undefined for e.g. {0, 180}).
pub fn circular_mean(directions_deg: &[f64]) -> Option<f64> {
    if directions_deg.is_empty() {
        return None;
    }

    let (mut x, mut y) = (0.0, 0.0);
    for d in directions_deg {
        let r = d.to_radians();
        x += r.cos();
        y += r.sin();
    }
    let n = directions_deg.len() as f64;
    x /= n;
    y /= n;

    if x.hypot(y) < 1e-9 {
        return None;
    }
    Some(wrap_360(y.atan2(x).to_degrees()))
}

/// Average compass directions over fixed windows.
///
/// The final window may be shorter. Windows whose vectors cancel are dropped.
pub fn compass_average(directions_deg: &[f64], window: usize) -> Vec<f64> {
    if window == 0 {
        return Vec::new();
    }
    directions_deg
        .chunks(window)
        .filter_map(circular_mean)
        .collect()
}

/// Velocity made good on course: speed projected onto the course bearing.
///
/// The heading/bearing difference is folded to at most 180 degrees, so a
/// boat sailing directly away comes out as `-speed`.
pub fn vmc(speed: f64, heading_deg: f64, bearing_deg: f64) -> f64 {
    let mut diff = (heading_deg - bearing_deg).abs();
    if diff > 180.0 {
        diff = 360.0 - diff;
    }
    speed * diff.to_radians().cos()
}
