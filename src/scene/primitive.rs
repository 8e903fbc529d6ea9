/// Fixed drawable shapes. Sizes are full extents along x, y and z.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Cuboid {
        center: [f32; 3],
        size: [f32; 3],
        color: [f32; 3],
    },
    /// UV sphere, optionally squashed per axis.
    Sphere {
        center: [f32; 3],
        radius: f32,
        scale: [f32; 3],
        slices: u32,
        stacks: u32,
        color: [f32; 3],
    },
    /// Horizontal square at height `y`, facing up.
    Ground {
        half_extent: f32,
        y: f32,
        color: [f32; 3],
    },
}

impl Primitive {
    pub fn vertex_count(&self) -> usize {
        match self {
            Primitive::Cuboid { .. } => 24,
            Primitive::Sphere { slices, stacks, .. } => {
                ((*slices + 1) * (*stacks + 1)) as usize
            }
            Primitive::Ground { .. } => 4,
        }
    }

    pub fn index_count(&self) -> usize {
        match self {
            Primitive::Cuboid { .. } => 36,
            Primitive::Sphere { slices, stacks, .. } => (*slices * *stacks * 6) as usize,
            Primitive::Ground { .. } => 6,
        }
    }
}
