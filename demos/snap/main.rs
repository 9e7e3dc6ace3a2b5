//! Snaps a handful of GPS-like points onto a short road polyline.
//!
//! ```text
//! cargo run --example snap
//! RUST_LOG=edgecalc=trace cargo run --example snap
//! ```

use edgecalc::geometry::Segment2;
use edgecalc::math::Point2;
use edgecalc::{DistanceCalc, Euclidean};
use tracing::info;

fn main() {
    // Default: WARN for everything, INFO for the demo itself.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("snap=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let road = [
        Point2::new(0.0, 0.0),
        Point2::new(10.0, 10.0),
        Point2::new(10.0, 10.0),
        Point2::new(20.0, 10.0),
    ];
    let queries = [
        Point2::new(-5.0, 0.0),
        Point2::new(3.0, 3.0),
        Point2::new(15.0, 20.0),
        Point2::new(14.0, 7.0),
    ];

    let calc = Euclidean;
    for q in &queries {
        let Some((edge, seg)) = road
            .windows(2)
            .map(|w| Segment2::new(w[0], w[1]))
            .enumerate()
            .min_by(|(_, s1), (_, s2)| {
                s1.normalized_distance(q)
                    .total_cmp(&s2.normalized_distance(q))
            })
        else {
            continue;
        };

        let snapped = seg.closest_point(q);
        let crossing = seg.crossing_point(q);
        info!(
            query = ?(q.x, q.y),
            edge,
            snapped = ?(snapped.x, snapped.y),
            crossing = ?(crossing.x, crossing.y),
            valid = seg.is_projection_valid(q),
            dist = calc.denormalize(seg.normalized_distance(q)),
            "snapped"
        );
    }
}
