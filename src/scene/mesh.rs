use std::f32::consts::PI;

use nalgebra_glm as glm;

use super::Primitive;
use crate::renderer::vertex::Vertex;

/// Indexed triangle list for the whole scene.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn push(&mut self, primitive: &Primitive) {
        match primitive {
            Primitive::Cuboid {
                center,
                size,
                color,
            } => self.push_cuboid(*center, *size, *color),
            Primitive::Sphere {
                center,
                radius,
                scale,
                slices,
                stacks,
                color,
            } => self.push_sphere(*center, *radius, *scale, *slices, *stacks, *color),
            Primitive::Ground {
                half_extent,
                y,
                color,
            } => self.push_ground(*half_extent, *y, *color),
        }
    }

    fn push_quad(&mut self, corners: [[f32; 3]; 4], normal: [f32; 3], color: [f32; 3]) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(corners.iter().map(|&position| Vertex {
            position,
            normal,
            color,
        }));
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    fn push_cuboid(&mut self, center: [f32; 3], size: [f32; 3], color: [f32; 3]) {
        let [cx, cy, cz] = center;
        let (hx, hy, hz) = (size[0] * 0.5, size[1] * 0.5, size[2] * 0.5);
        let (x0, x1) = (cx - hx, cx + hx);
        let (y0, y1) = (cy - hy, cy + hy);
        let (z0, z1) = (cz - hz, cz + hz);

        // One quad per face: outward normal, then its corners
        let faces = [
            ([0.0, 1.0, 0.0], [[x0, y1, z0], [x0, y1, z1], [x1, y1, z1], [x1, y1, z0]]),
            ([0.0, -1.0, 0.0], [[x0, y0, z0], [x1, y0, z0], [x1, y0, z1], [x0, y0, z1]]),
            ([0.0, 0.0, 1.0], [[x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1]]),
            ([0.0, 0.0, -1.0], [[x0, y0, z0], [x0, y1, z0], [x1, y1, z0], [x1, y0, z0]]),
            ([-1.0, 0.0, 0.0], [[x0, y0, z1], [x0, y1, z1], [x0, y1, z0], [x0, y0, z0]]),
            ([1.0, 0.0, 0.0], [[x1, y0, z1], [x1, y0, z0], [x1, y1, z0], [x1, y1, z1]]),
        ];

        for (normal, corners) in faces {
            self.push_quad(corners, normal, color);
        }
    }

    fn push_sphere(
        &mut self,
        center: [f32; 3],
        radius: f32,
        scale: [f32; 3],
        slices: u32,
        stacks: u32,
        color: [f32; 3],
    ) {
        let base = self.vertices.len() as u32;
        let center = glm::make_vec3(&center);
        let scale = glm::make_vec3(&scale);

        for stack in 0..=stacks {
            let phi = PI * stack as f32 / stacks as f32;
            for slice in 0..=slices {
                let theta = 2.0 * PI * slice as f32 / slices as f32;
                let unit = glm::vec3(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
                let position = center + unit.component_mul(&scale) * radius;
                // Inverse-transpose of a diagonal scale
                let normal = glm::normalize(&unit.component_div(&scale));
                self.vertices.push(Vertex {
                    position: [position.x, position.y, position.z],
                    normal: [normal.x, normal.y, normal.z],
                    color,
                });
            }
        }

        let row = slices + 1;
        for stack in 0..stacks {
            for slice in 0..slices {
                let a = base + stack * row + slice;
                let b = a + row;
                self.indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
            }
        }
    }

    fn push_ground(&mut self, half_extent: f32, y: f32, color: [f32; 3]) {
        let e = half_extent;
        self.push_quad(
            [[-e, y, -e], [-e, y, e], [e, y, e], [e, y, -e]],
            [0.0, 1.0, 0.0],
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREY: [f32; 3] = [0.5, 0.5, 0.5];

    fn single(primitive: Primitive) -> Mesh {
        let mut mesh = Mesh::default();
        mesh.push(&primitive);
        assert_eq!(mesh.vertices.len(), primitive.vertex_count());
        assert_eq!(mesh.indices.len(), primitive.index_count());
        mesh
    }

    #[test]
    fn cuboid_spans_its_size() {
        let mesh = single(Primitive::Cuboid {
            center: [-8.0, 3.0, -5.0],
            size: [3.0, 7.0, 4.0],
            color: GREY,
        });
        let xs = mesh.vertices.iter().map(|v| v.position[0]);
        let ys = mesh.vertices.iter().map(|v| v.position[1]);
        assert_eq!(xs.clone().fold(f32::INFINITY, f32::min), -9.5);
        assert_eq!(xs.fold(f32::NEG_INFINITY, f32::max), -6.5);
        assert_eq!(ys.clone().fold(f32::INFINITY, f32::min), -0.5);
        assert_eq!(ys.fold(f32::NEG_INFINITY, f32::max), 6.5);
    }

    #[test]
    fn cuboid_normals_point_outwards() {
        let center = [1.0, 2.0, 3.0];
        let mesh = single(Primitive::Cuboid {
            center,
            size: [2.0, 2.0, 2.0],
            color: GREY,
        });
        for v in &mesh.vertices {
            let out: f32 = (0..3).map(|i| (v.position[i] - center[i]) * v.normal[i]).sum();
            assert!(out > 0.0);
        }
    }

    #[test]
    fn squashed_sphere_stays_inside_its_bounds() {
        let mesh = single(Primitive::Sphere {
            center: [0.0, 5.0, -5.0],
            radius: 3.0,
            scale: [1.0, 1.0, 0.5],
            slices: 20,
            stacks: 20,
            color: GREY,
        });
        for v in &mesh.vertices {
            assert!(v.position[0].abs() <= 3.0 + 1e-4);
            assert!((v.position[1] - 5.0).abs() <= 3.0 + 1e-4);
            assert!((v.position[2] + 5.0).abs() <= 1.5 + 1e-4);
            let n = glm::make_vec3(&v.normal);
            assert!((glm::length(&n) - 1.0).abs() < 1e-4);
        }
        assert_eq!(mesh.vertices[0].position, [0.0, 8.0, -5.0]);
    }

    #[test]
    fn indices_are_offset_per_primitive() {
        let mut mesh = Mesh::default();
        let ground = Primitive::Ground {
            half_extent: 10.0,
            y: 0.0,
            color: GREY,
        };
        mesh.push(&ground);
        mesh.push(&ground);
        assert_eq!(&mesh.indices[6..], &[4, 5, 6, 4, 6, 7]);
    }
}
