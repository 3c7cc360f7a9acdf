//! Triangle-mesh builders for the 3D scene
//!
//! Flat-shaded primitives; per-face brightness against a fixed key light
//! stands in for scene lighting. The pipeline renders with culling off, so
//! winding order is not significant.

use glam::Vec3;

use super::vertex::Vertex;

/// Key light direction, normalized (matches the scene's sun placement)
const LIGHT_DIR: Vec3 = Vec3::new(0.5035, 0.7553, 0.4196);

/// Rotate a vector around the Y axis
#[inline]
fn rot_y(v: Vec3, yaw: f32) -> Vec3 {
    let (s, c) = yaw.sin_cos();
    Vec3::new(v.x * c + v.z * s, v.y, -v.x * s + v.z * c)
}

/// Scale a color by flat-shade brightness for the given surface normal
fn shaded(color: [f32; 4], normal: Vec3) -> [f32; 4] {
    let brightness = 0.45 + 0.55 * normal.dot(LIGHT_DIR).max(0.0);
    [
        color[0] * brightness,
        color[1] * brightness,
        color[2] * brightness,
        color[3],
    ]
}

fn push_quad(out: &mut Vec<Vertex>, corners: [Vec3; 4], color: [f32; 4]) {
    let [a, b, c, d] = corners;
    for p in [a, b, c, a, c, d] {
        out.push(Vertex::new(p.to_array(), color));
    }
}

/// Square ground plane at y = 0
pub fn ground_plane(half: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(6);
    push_quad(
        &mut out,
        [
            Vec3::new(-half, 0.0, -half),
            Vec3::new(half, 0.0, -half),
            Vec3::new(half, 0.0, half),
            Vec3::new(-half, 0.0, half),
        ],
        shaded(color, Vec3::Y),
    );
    out
}

/// Grid overlay sitting just above the ground plane
pub fn grid_lines(half: f32, divisions: u32, color: [f32; 4]) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(((divisions + 1) * 2 * 6) as usize);
    let step = (half * 2.0) / divisions as f32;
    let w = 0.03;
    let y = 0.01;
    for i in 0..=divisions {
        let offset = -half + i as f32 * step;
        // Line along z
        push_quad(
            &mut out,
            [
                Vec3::new(offset - w, y, -half),
                Vec3::new(offset + w, y, -half),
                Vec3::new(offset + w, y, half),
                Vec3::new(offset - w, y, half),
            ],
            color,
        );
        // Line along x
        push_quad(
            &mut out,
            [
                Vec3::new(-half, y, offset - w),
                Vec3::new(half, y, offset - w),
                Vec3::new(half, y, offset + w),
                Vec3::new(-half, y, offset + w),
            ],
            color,
        );
    }
    out
}

/// Axis-aligned box rotated by `yaw`, flat-shaded per face
pub fn cuboid(center: Vec3, half: Vec3, yaw: f32, color: [f32; 4]) -> Vec<Vertex> {
    let corner = |sx: f32, sy: f32, sz: f32| {
        center + rot_y(Vec3::new(half.x * sx, half.y * sy, half.z * sz), yaw)
    };

    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (
            Vec3::X,
            [
                corner(1.0, -1.0, -1.0),
                corner(1.0, 1.0, -1.0),
                corner(1.0, 1.0, 1.0),
                corner(1.0, -1.0, 1.0),
            ],
        ),
        (
            -Vec3::X,
            [
                corner(-1.0, -1.0, -1.0),
                corner(-1.0, 1.0, -1.0),
                corner(-1.0, 1.0, 1.0),
                corner(-1.0, -1.0, 1.0),
            ],
        ),
        (
            Vec3::Y,
            [
                corner(-1.0, 1.0, -1.0),
                corner(1.0, 1.0, -1.0),
                corner(1.0, 1.0, 1.0),
                corner(-1.0, 1.0, 1.0),
            ],
        ),
        (
            -Vec3::Y,
            [
                corner(-1.0, -1.0, -1.0),
                corner(1.0, -1.0, -1.0),
                corner(1.0, -1.0, 1.0),
                corner(-1.0, -1.0, 1.0),
            ],
        ),
        (
            Vec3::Z,
            [
                corner(-1.0, -1.0, 1.0),
                corner(1.0, -1.0, 1.0),
                corner(1.0, 1.0, 1.0),
                corner(-1.0, 1.0, 1.0),
            ],
        ),
        (
            -Vec3::Z,
            [
                corner(-1.0, -1.0, -1.0),
                corner(1.0, -1.0, -1.0),
                corner(1.0, 1.0, -1.0),
                corner(-1.0, 1.0, -1.0),
            ],
        ),
    ];

    let mut out = Vec::with_capacity(36);
    for (normal, corners) in faces {
        push_quad(&mut out, corners, shaded(color, rot_y(normal, yaw)));
    }
    out
}

/// Regular icosahedron, flat-shaded per face
pub fn icosahedron(center: Vec3, radius: f32, yaw: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let raw = [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ];
    let verts: Vec<Vec3> = raw
        .iter()
        .map(|p| rot_y(p.normalize() * radius, yaw))
        .collect();

    const FACES: [[usize; 3]; 20] = [
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    let mut out = Vec::with_capacity(60);
    for [a, b, c] in FACES {
        let (pa, pb, pc) = (verts[a], verts[b], verts[c]);
        let mut normal = (pb - pa).cross(pc - pa).normalize_or_zero();
        // Outward normal regardless of face winding
        if normal.dot(pa) < 0.0 {
            normal = -normal;
        }
        let face_color = shaded(color, normal);
        for p in [pa, pb, pc] {
            out.push(Vertex::new((center + p).to_array(), face_color));
        }
    }
    out
}

/// Small quads for the star shell, each facing the arena center
pub fn star_billboards(stars: &[Vec3], sky_yaw: f32, size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(stars.len() * 6);
    let h = size * 0.5;
    for &star in stars {
        let p = rot_y(star, sky_yaw);
        let radial = p.normalize_or_zero();
        let mut u = radial.cross(Vec3::Y).normalize_or_zero();
        if u == Vec3::ZERO {
            u = Vec3::X;
        }
        let v = u.cross(radial);
        push_quad(
            &mut out,
            [
                p - u * h - v * h,
                p + u * h - v * h,
                p + u * h + v * h,
                p - u * h + v * h,
            ],
            color,
        );
    }
    out
}
