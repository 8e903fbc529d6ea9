mod mesh;
mod primitive;

pub use mesh::Mesh;
pub use primitive::Primitive;

const CREAM: [f32; 3] = [1.0, 0.93, 0.75];
const GREY: [f32; 3] = [0.5, 0.5, 0.5];

/// The fixed set of shapes the viewer shows. Built once at startup and
/// never touched by camera input.
#[derive(Debug, Clone)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Five blocks, a dais and a flattened dome on a 20x20 ground square.
    pub fn demo() -> Self {
        let block = |center: [f32; 3], size: [f32; 3], color| Primitive::Cuboid {
            center,
            size,
            color,
        };

        Self {
            primitives: vec![
                block([-8.0, 3.0, -5.0], [3.0, 7.0, 4.0], CREAM),
                block([8.0, 3.0, -5.0], [3.0, 7.0, 4.0], CREAM),
                block([6.0, 2.5, -5.0], [3.0, 5.0, 4.0], CREAM),
                block([-6.0, 2.5, -5.0], [3.0, 5.0, 4.0], CREAM),
                block([0.0, 3.0, -5.0], [9.0, 7.5, 4.0], CREAM),
                block([0.0, 0.5, -2.0], [9.0, 1.0, 5.0], GREY),
                Primitive::Sphere {
                    center: [0.0, 5.0, -5.0],
                    radius: 3.0,
                    scale: [1.0, 1.0, 0.5],
                    slices: 20,
                    stacks: 20,
                    color: GREY,
                },
                Primitive::Ground {
                    half_extent: 10.0,
                    y: 0.0,
                    color: GREY,
                },
            ],
        }
    }

    pub fn mesh(&self) -> Mesh {
        let mut mesh = Mesh {
            vertices: Vec::with_capacity(self.primitives.iter().map(Primitive::vertex_count).sum()),
            indices: Vec::with_capacity(self.primitives.iter().map(Primitive::index_count).sum()),
        };
        for primitive in &self.primitives {
            mesh.push(primitive);
        }
        mesh
    }
}
