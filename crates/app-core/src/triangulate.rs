//! Polygon-with-holes triangulation by ear clipping.
//!
//! Holes are first merged into the outer ring through a bridge edge from the
//! hole's rightmost vertex to a visible outer vertex, which yields one simple
//! (weakly) polygon that plain ear clipping can consume.

use glam::Vec2;

const EPS: f32 = 1e-9;

/// Twice the signed area; positive for counter-clockwise rings.
pub fn signed_area(points: &[Vec2]) -> f32 {
    let n = points.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum * 0.5
}

#[inline]
fn cross(o: Vec2, a: Vec2, b: Vec2) -> f32 {
    (a - o).perp_dot(b - o)
}

fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);
    d1 >= -EPS && d2 >= -EPS && d3 >= -EPS
}

/// Triangulate `outer` minus `holes`. Returned indices address the
/// concatenation `outer ++ holes[0] ++ holes[1] ++ ...` and every triangle is
/// counter-clockwise.
pub fn triangulate(outer: &[Vec2], holes: &[Vec<Vec2>]) -> Vec<[u32; 3]> {
    if outer.len() < 3 {
        return Vec::new();
    }
    let mut points: Vec<Vec2> = outer.to_vec();
    let mut ring: Vec<usize> = (0..outer.len()).collect();
    if signed_area(outer) < 0.0 {
        ring.reverse();
    }

    let mut hole_rings: Vec<Vec<usize>> = Vec::with_capacity(holes.len());
    for hole in holes.iter().filter(|h| h.len() >= 3) {
        let start = points.len();
        points.extend_from_slice(hole);
        let mut idx: Vec<usize> = (start..start + hole.len()).collect();
        if signed_area(hole) > 0.0 {
            idx.reverse();
        }
        hole_rings.push(idx);
    }
    // Rightmost holes first so later bridges never cross earlier ones.
    hole_rings.sort_by(|a, b| {
        let ax = a.iter().map(|&i| points[i].x).fold(f32::MIN, f32::max);
        let bx = b.iter().map(|&i| points[i].x).fold(f32::MIN, f32::max);
        bx.total_cmp(&ax)
    });
    for hole in &hole_rings {
        bridge_hole(&points, &mut ring, hole);
    }

    clip_ears(&points, ring)
}

fn bridge_hole(points: &[Vec2], ring: &mut Vec<usize>, hole: &[usize]) {
    let (hm, &m) = hole
        .iter()
        .enumerate()
        .max_by(|(_, &a), (_, &b)| points[a].x.total_cmp(&points[b].x))
        .unwrap_or((0, &hole[0]));
    let mp = points[m];

    // Nearest edge hit by a ray from M towards +x.
    let mut best: Option<(f32, usize)> = None;
    for k in 0..ring.len() {
        let a = points[ring[k]];
        let b = points[ring[(k + 1) % ring.len()]];
        if (a.y > mp.y) == (b.y > mp.y) || (a.y - b.y).abs() < EPS {
            continue;
        }
        let x = a.x + (mp.y - a.y) * (b.x - a.x) / (b.y - a.y);
        if x < mp.x - EPS {
            continue;
        }
        if best.map_or(true, |(bx, _)| x < bx) {
            let pick = if a.x >= b.x { k } else { (k + 1) % ring.len() };
            best = Some((x, pick));
        }
    }

    let mut target = match best {
        Some((_, k)) => k,
        None => (0..ring.len())
            .min_by(|&a, &b| {
                points[ring[a]]
                    .distance_squared(mp)
                    .total_cmp(&points[ring[b]].distance_squared(mp))
            })
            .unwrap_or(0),
    };

    // A ring vertex inside (M, hit, P) would block the bridge; take the one
    // closest in angle to the ray instead.
    if let Some((hit_x, _)) = best {
        let hit = Vec2::new(hit_x, mp.y);
        let p = points[ring[target]];
        let mut best_angle = f32::MAX;
        for (k, &vi) in ring.iter().enumerate() {
            let v = points[vi];
            if k == target || v == p || v == mp {
                continue;
            }
            let inside = if cross(mp, hit, p) >= 0.0 {
                point_in_triangle(v, mp, hit, p)
            } else {
                point_in_triangle(v, mp, p, hit)
            };
            if inside {
                let d = v - mp;
                let angle = d.y.abs().atan2(d.x);
                if angle < best_angle {
                    best_angle = angle;
                    target = k;
                }
            }
        }
    }

    let mut merged = Vec::with_capacity(ring.len() + hole.len() + 2);
    merged.extend_from_slice(&ring[..=target]);
    for j in 0..hole.len() {
        merged.push(hole[(hm + j) % hole.len()]);
    }
    merged.push(m);
    merged.push(ring[target]);
    merged.extend_from_slice(&ring[target + 1..]);
    *ring = merged;
}

fn clip_ears(points: &[Vec2], mut ring: Vec<usize>) -> Vec<[u32; 3]> {
    let mut tris = Vec::with_capacity(ring.len().saturating_sub(2));
    let mut guard = 0usize;
    while ring.len() > 3 {
        let n = ring.len();
        let mut clipped = false;
        for i in 0..n {
            let (ia, ib, ic) = (ring[(i + n - 1) % n], ring[i], ring[(i + 1) % n]);
            let (a, b, c) = (points[ia], points[ib], points[ic]);
            if cross(a, b, c) <= EPS {
                continue;
            }
            let blocked = ring.iter().any(|&vi| {
                let v = points[vi];
                v != a && v != b && v != c && point_in_triangle(v, a, b, c)
            });
            if !blocked {
                tris.push([ia as u32, ib as u32, ic as u32]);
                ring.remove(i);
                clipped = true;
                break;
            }
        }
        if !clipped {
            // Degenerate input (collinear runs, touching bridges): drop a
            // vertex so the loop always terminates.
            let n = ring.len();
            let (ia, ib, ic) = (ring[n - 1], ring[0], ring[1]);
            if cross(points[ia], points[ib], points[ic]) > EPS {
                tris.push([ia as u32, ib as u32, ic as u32]);
            }
            ring.remove(0);
            guard += 1;
            if guard > 10_000 {
                log::warn!("[triangulate] giving up on degenerate polygon");
                break;
            }
        }
    }
    if ring.len() == 3 {
        let (a, b, c) = (ring[0], ring[1], ring[2]);
        if cross(points[a], points[b], points[c]) > EPS {
            tris.push([a as u32, b as u32, c as u32]);
        }
    }
    tris
}
