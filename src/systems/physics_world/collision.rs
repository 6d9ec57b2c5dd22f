use crate::rigid_body::{RigidBody, Vec2};

/// Static axis-aligned box. Walls never move on their own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Wall {
    pub center: Vec2,
    pub half_extents: Vec2,
}

pub(super) const WALL_THICKNESS: f32 = 100.0;

impl Wall {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            half_extents: Vec2::new(width / 2.0, height / 2.0),
        }
    }

    fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }
}

/// Push a body out of a wall and reflect the normal velocity.
///
/// Returns true on contact.
pub(super) fn resolve_wall(body: &mut RigidBody, wall: &Wall) -> bool {
    let (min, max) = (wall.min(), wall.max());
    let r = body.radius;

    // Closest point on the box to the body center
    let closest = Vec2::new(body.pos.x.clamp(min.x, max.x), body.pos.y.clamp(min.y, max.y));
    let delta = body.pos - closest;
    let dist2 = delta.length_squared();
    if dist2 >= r * r {
        return false;
    }

    let normal = if dist2 > 1e-8 {
        delta.normalize()
    } else if body.pos.x < wall.center.x {
        // Center inside the box: exit through the nearer side face
        Vec2::new(-1.0, 0.0)
    } else {
        Vec2::new(1.0, 0.0)
    };

    let penetration = if dist2 > 1e-8 {
        r - dist2.sqrt()
    } else if normal.x < 0.0 {
        body.pos.x - min.x + r
    } else {
        max.x - body.pos.x + r
    };
    body.pos += normal * penetration;

    let vn = body.velocity.dot(normal);
    if vn < 0.0 {
        body.velocity -= normal * ((1.0 + body.restitution) * vn);
        // Wall friction bleeds off tangential speed and turns it into spin
        let tangent = Vec2::new(-normal.y, normal.x);
        let vt = body.velocity.dot(tangent);
        let jt = (vt * body.friction).clamp(-vn.abs(), vn.abs());
        body.velocity -= tangent * jt;
        body.apply_torque(-jt * r * body.mass);
    }
    true
}

/// Separate two overlapping bodies and exchange a normal impulse.
///
/// Returns true on contact.
pub(super) fn resolve_pair(a: &mut RigidBody, b: &mut RigidBody) -> bool {
    let delta = b.pos - a.pos;
    let reach = a.radius + b.radius;
    let dist2 = delta.length_squared();
    if dist2 >= reach * reach {
        return false;
    }

    let dist = dist2.sqrt();
    let normal = if dist > 1e-4 { delta * (1.0 / dist) } else { Vec2::new(0.0, 1.0) };
    let overlap = reach - dist;
    let inv_sum = a.inverse_mass + b.inverse_mass;
    if inv_sum <= 0.0 {
        return true;
    }

    // Positional correction split by inverse mass
    let correction = normal * (overlap / inv_sum);
    a.pos -= correction * a.inverse_mass;
    b.pos += correction * b.inverse_mass;

    let rel = b.velocity - a.velocity;
    let vn = rel.dot(normal);
    if vn >= 0.0 {
        return true;
    }

    let restitution = a.restitution.max(b.restitution);
    let j = -(1.0 + restitution) * vn / inv_sum;
    let impulse = normal * j;
    a.apply_impulse(impulse * -1.0);
    b.apply_impulse(impulse);

    let tangent = Vec2::new(-normal.y, normal.x);
    let vt = rel.dot(tangent);
    let friction = (a.friction * b.friction).sqrt();
    let jt = (-vt / inv_sum).clamp(-j * friction, j * friction);
    let t_impulse = tangent * jt;
    a.apply_impulse(t_impulse * -1.0);
    b.apply_impulse(t_impulse);
    a.apply_torque(-jt * a.radius);
    b.apply_torque(-jt * b.radius);
    true
}
