//! Unit UV-sphere mesh used by every celestial body (scaled per draw).

use bytemuck::{Pod, Zeroable};
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub(crate) struct SphereVertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
}

/// Generate a unit sphere with `stacks` latitude bands and `sectors`
/// longitude bands. Outward faces wind counter-clockwise.
pub(crate) fn uv_sphere(stacks: u32, sectors: u32) -> (Vec<SphereVertex>, Vec<u32>) {
    let mut vertices = Vec::with_capacity(((stacks + 1) * (sectors + 1)) as usize);
    for i in 0..=stacks {
        let phi = PI * i as f32 / stacks as f32;
        for j in 0..=sectors {
            let theta = TAU * j as f32 / sectors as f32;
            let p = [
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            ];
            vertices.push(SphereVertex {
                position: p,
                normal: p,
            });
        }
    }

    let mut indices = Vec::with_capacity((stacks * sectors * 6) as usize);
    for i in 0..stacks {
        for j in 0..sectors {
            let k1 = i * (sectors + 1) + j;
            let k2 = k1 + sectors + 1;
            if i != 0 {
                indices.extend_from_slice(&[k1, k2, k1 + 1]);
            }
            if i != stacks - 1 {
                indices.extend_from_slice(&[k1 + 1, k2, k2 + 1]);
            }
        }
    }
    (vertices, indices)
}
