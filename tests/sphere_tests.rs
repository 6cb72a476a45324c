// Host-side tests for the shared unit-sphere mesh.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/render/sphere.rs"]
mod sphere;

use sphere::uv_sphere;

#[test]
fn uv_sphere_has_expected_vertex_and_index_counts() {
    let (vertices, indices) = uv_sphere(32, 32);
    assert_eq!(vertices.len(), 33 * 33);
    // Pole bands contribute one triangle per sector, the rest two.
    assert_eq!(indices.len() as u32, (32 * 32 * 6) - (2 * 32 * 3));
    assert_eq!(indices.len() % 3, 0);
}

#[test]
fn uv_sphere_vertices_lie_on_the_unit_sphere_with_outward_normals() {
    let (vertices, indices) = uv_sphere(8, 12);
    for v in &vertices {
        let p = glam::Vec3::from_array(v.position);
        let n = glam::Vec3::from_array(v.normal);
        assert!((p.length() - 1.0).abs() < 1e-5);
        assert!(p.distance(n) < 1e-6);
    }
    for &i in &indices {
        assert!((i as usize) < vertices.len());
    }
}
