//! Shortest obstacle-avoiding paths between two points.
//!
//! Walls are axis-aligned boxes, so a shortest path bends only at wall
//! corners. The search runs Dijkstra over the visibility graph of the two
//! endpoints and every usable corner.

use physics::{Aabb, Vec2};

/// Offset applied to wall corners so that waypoints sit strictly outside.
const CORNER_NUDGE: f32 = 1e-4;
/// Walls are shrunk by this much for the line-of-sight test, so grazing a
/// face or touching a corner does not count as a collision.
const GRAZE_TOLERANCE: f32 = 1e-6;

/// True when the segment `a -> b` overlaps the interior of `wall`.
#[must_use]
pub fn segment_hits_box(a: Vec2, b: Vec2, wall: &Aabb) -> bool {
    let solid = wall.inflate(-GRAZE_TOLERANCE);
    let d = b - a;
    let mut t0 = 0.0_f32;
    let mut t1 = 1.0_f32;

    for (origin, dir, lo, hi) in [
        (a.x, d.x, solid.min.x, solid.max.x),
        (a.y, d.y, solid.min.y, solid.max.y),
    ] {
        if dir.abs() < f32::EPSILON {
            if origin <= lo || origin >= hi {
                return false;
            }
            continue;
        }
        let mut near = (lo - origin) / dir;
        let mut far = (hi - origin) / dir;
        if near > far {
            std::mem::swap(&mut near, &mut far);
        }
        t0 = t0.max(near);
        t1 = t1.min(far);
        if t0 >= t1 {
            return false;
        }
    }
    true
}

#[must_use]
pub fn line_of_sight(a: Vec2, b: Vec2, walls: &[Aabb]) -> bool {
    !walls.iter().any(|w| segment_hits_box(a, b, w))
}

/// Candidate bend points: wall corners pushed diagonally outward, kept only
/// when they lie inside `bounds` and outside every wall.
#[must_use]
pub fn waypoints(walls: &[Aabb], bounds: &Aabb) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(walls.len() * 4);
    for wall in walls {
        let center = wall.center();
        for corner in wall.corners() {
            let nudge = Vec2::new(
                (corner.x - center.x).signum() * CORNER_NUDGE,
                (corner.y - center.y).signum() * CORNER_NUDGE,
            );
            let p = corner + nudge;
            if bounds.contains(p) && !walls.iter().any(|w| w.inflate(-GRAZE_TOLERANCE).contains(p)) {
                points.push(p);
            }
        }
    }
    points
}

/// Length of the shortest path from `from` to `to` that avoids `walls`, or
/// `None` when the endpoints are disconnected.
#[must_use]
pub fn shortest_path_length(from: Vec2, to: Vec2, walls: &[Aabb], nodes: &[Vec2]) -> Option<f32> {
    if line_of_sight(from, to, walls) {
        return Some(from.distance(to));
    }

    // 0 = from, 1 = to, 2.. = waypoints
    let mut graph = Vec::with_capacity(nodes.len() + 2);
    graph.push(from);
    graph.push(to);
    graph.extend_from_slice(nodes);

    let n = graph.len();
    let mut dist = vec![f32::INFINITY; n];
    let mut done = vec![false; n];
    dist[0] = 0.0;

    for _ in 0..n {
        let current = (0..n)
            .filter(|&i| !done[i] && dist[i].is_finite())
            .min_by(|&i, &j| dist[i].total_cmp(&dist[j]))?;
        if current == 1 {
            return Some(dist[1]);
        }
        done[current] = true;

        for next in 0..n {
            if done[next] {
                continue;
            }
            let candidate = dist[current] + graph[current].distance(graph[next]);
            if candidate < dist[next] && line_of_sight(graph[current], graph[next], walls) {
                dist[next] = candidate;
            }
        }
    }
    None
}
