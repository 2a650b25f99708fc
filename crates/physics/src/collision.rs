//! # Contact Handling
//!
//! The particle is a disc of radius `r`. Walls and the room boundary are
//! treated as inflated boxes so contact tests reduce to point queries.

use crate::types::{Aabb, Vec2};

/// Contact between the particle and a static obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing away from the obstacle.
    pub normal: Vec2,
    /// Penetration depth along `normal`.
    pub depth: f32,
}

/// Contacts with the room boundary. `bounds` is the room extent before
/// accounting for the particle radius.
#[must_use]
pub fn detect_bounds_contacts(pos: Vec2, radius: f32, bounds: &Aabb) -> Vec<Contact> {
    let inner = bounds.inflate(-radius);
    let mut contacts = Vec::new();
    if pos.x < inner.min.x {
        contacts.push(Contact { normal: Vec2::new(1.0, 0.0), depth: inner.min.x - pos.x });
    }
    if pos.x > inner.max.x {
        contacts.push(Contact { normal: Vec2::new(-1.0, 0.0), depth: pos.x - inner.max.x });
    }
    if pos.y < inner.min.y {
        contacts.push(Contact { normal: Vec2::new(0.0, 1.0), depth: inner.min.y - pos.y });
    }
    if pos.y > inner.max.y {
        contacts.push(Contact { normal: Vec2::new(0.0, -1.0), depth: pos.y - inner.max.y });
    }
    contacts
}

/// Contact with a wall, pushing out along the axis of least penetration
/// that keeps the particle inside `bounds`. A wall touching the room edge
/// is never escaped through the edge.
#[must_use]
pub fn detect_wall_contact(pos: Vec2, radius: f32, wall: &Aabb, bounds: &Aabb) -> Option<Contact> {
    let solid = wall.inflate(radius);
    if pos.x <= solid.min.x || pos.x >= solid.max.x || pos.y <= solid.min.y || pos.y >= solid.max.y {
        return None;
    }

    let inner = bounds.inflate(-radius);
    let candidates = [
        (pos.x - solid.min.x, Vec2::new(-1.0, 0.0)),
        (solid.max.x - pos.x, Vec2::new(1.0, 0.0)),
        (pos.y - solid.min.y, Vec2::new(0.0, -1.0)),
        (solid.max.y - pos.y, Vec2::new(0.0, 1.0)),
    ];
    let shallowest = |keep: &dyn Fn(&(f32, Vec2)) -> bool| {
        candidates
            .into_iter()
            .filter(|c| keep(c))
            .min_by(|a, b| a.0.total_cmp(&b.0))
    };
    let stays_inside = |(depth, normal): &(f32, Vec2)| {
        let landing = pos + *normal * *depth;
        if normal.x.abs() < 0.5 {
            (inner.min.y..=inner.max.y).contains(&landing.y)
        } else {
            (inner.min.x..=inner.max.x).contains(&landing.x)
        }
    };
    shallowest(&stays_inside)
        .or_else(|| shallowest(&|_| true))
        .map(|(depth, normal)| Contact { normal, depth })
}

/// Project the particle out of the obstacle and cancel the approaching
/// velocity component. Restitution is zero.
pub fn resolve_contact(pos: &mut Vec2, vel: &mut Vec2, contact: &Contact) {
    *pos += contact.normal * contact.depth;

    let velocity_along_normal = vel.dot(contact.normal);
    if velocity_along_normal < 0.0 {
        *vel -= contact.normal * velocity_along_normal;
    }
}
