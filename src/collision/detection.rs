use super::manifold::CollisionManifold;
use crate::math::vec2::Vec2;
use crate::shapes::{Circle, Polygon};

/// Checks for overlap between two circles.
/// The normal points from `a` to `b`; touching circles do not collide.
pub fn intersect_circles(a: &Circle, b: &Circle) -> Option<CollisionManifold> {
    let offset = b.center - a.center;
    let distance = offset.length();
    let radii = a.radius + b.radius;

    if distance >= radii {
        return None;
    }

    let normal = if distance > 0.0 {
        offset / distance
    } else {
        // Concentric circles have no direction, pick one
        Vec2::DOWN
    };
    Some(CollisionManifold::new(normal, radii - distance))
}

/// Boolean form of [`intersect_circles`].
pub fn circles_overlap(a: &Circle, b: &Circle) -> bool {
    a.center.distance(b.center) < a.radius + b.radius
}

/// Separating axis test between two convex polygons.
///
/// Every edge axis of `a` and then of `b` is tried. The axis with the smallest
/// overlap becomes the normal, oriented from the centroid of `a` towards the
/// centroid of `b`.
pub fn intersect_polygons(a: &Polygon, b: &Polygon) -> Option<CollisionManifold> {
    let mut normal = Vec2::ZERO;
    let mut depth = f64::MAX;

    for axis in a.edge_axes().chain(b.edge_axes()) {
        let pa = a.project(axis);
        let pb = b.project(axis);
        if pa.separated(&pb) {
            return None;
        }
        let axis_depth = pa.overlap(&pb);
        if axis_depth < depth {
            depth = axis_depth;
            normal = axis;
        }
    }

    let direction = b.centroid() - a.centroid();
    if direction.dot(normal) < 0.0 {
        normal = -normal;
    }
    Some(CollisionManifold::new(normal, depth))
}

/// Boolean form of [`intersect_polygons`], stops at the first separating axis.
pub fn polygons_overlap(a: &Polygon, b: &Polygon) -> bool {
    a.edge_axes()
        .chain(b.edge_axes())
        .all(|axis| !a.project(axis).separated(&b.project(axis)))
}

/// Separating axis test between a circle and a convex polygon.
///
/// Axes are the polygon edges plus the direction from the circle center to the
/// closest polygon vertex. The normal points from the circle towards the
/// polygon centroid; callers holding the pair the other way round use
/// [`CollisionManifold::reversed`].
pub fn intersect_circle_polygon(circle: &Circle, polygon: &Polygon) -> Option<CollisionManifold> {
    let mut normal = Vec2::ZERO;
    let mut depth = f64::MAX;

    for axis in circle_polygon_axes(circle, polygon) {
        let pp = polygon.project(axis);
        let pc = circle.project(axis);
        if pp.separated(&pc) {
            return None;
        }
        let axis_depth = pp.overlap(&pc);
        if axis_depth < depth {
            depth = axis_depth;
            normal = axis;
        }
    }

    let direction = polygon.centroid() - circle.center;
    if direction.dot(normal) < 0.0 {
        normal = -normal;
    }
    Some(CollisionManifold::new(normal, depth))
}

/// Boolean form of [`intersect_circle_polygon`].
pub fn circle_polygon_overlap(circle: &Circle, polygon: &Polygon) -> bool {
    circle_polygon_axes(circle, polygon)
        .all(|axis| !polygon.project(axis).separated(&circle.project(axis)))
}

fn circle_polygon_axes<'a>(
    circle: &Circle,
    polygon: &Polygon<'a>,
) -> impl Iterator<Item = Vec2> + 'a {
    let vertex_axis = polygon
        .closest_vertex(circle.center)
        .map(|vertex| (vertex - circle.center).normalize());
    polygon.edge_axes().chain(vertex_axis)
}
