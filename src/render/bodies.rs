//! Celestial body GPU resources: a shared unit-sphere mesh, an opaque
//! pipeline for solid bodies and an additive back-face pipeline for the rim
//! shells, with one uniform buffer per body.

use super::sphere;
use crate::scene::{Body, BodyMaterial};
use wgpu::util::DeviceExt;

const SPHERE_STACKS: u32 = 32;
const SPHERE_SECTORS: u32 = 32;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BodyUniforms {
    pub(crate) mvp: [[f32; 4]; 4],
    pub(crate) mv: [[f32; 4]; 4],
    pub(crate) tint: [f32; 4],
    pub(crate) rim: [f32; 4],
}

pub(crate) struct BodyDraw {
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) rim: bool,
}

pub(crate) struct BodyResources {
    pub(crate) solid_pipeline: wgpu::RenderPipeline,
    pub(crate) rim_pipeline: wgpu::RenderPipeline,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) draws: Vec<BodyDraw>,
}

fn make_body_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    frag_entry: &str,
    surface_format: wgpu::TextureFormat,
    depth_format: wgpu::TextureFormat,
    rim: bool,
) -> wgpu::RenderPipeline {
    let vertex_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<sphere::SphereVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    };
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("body_pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_body"),
            buffers: &[vertex_layout],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            // Rim shells draw their back faces only, like the original
            // BackSide halo materials.
            cull_mode: Some(if rim {
                wgpu::Face::Front
            } else {
                wgpu::Face::Back
            }),
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: depth_format,
            depth_write_enabled: !rim,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(frag_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: Some(if rim {
                    wgpu::BlendState {
                        color: wgpu::BlendComponent {
                            src_factor: wgpu::BlendFactor::SrcAlpha,
                            dst_factor: wgpu::BlendFactor::One,
                            operation: wgpu::BlendOperation::Add,
                        },
                        alpha: wgpu::BlendComponent {
                            src_factor: wgpu::BlendFactor::One,
                            dst_factor: wgpu::BlendFactor::One,
                            operation: wgpu::BlendOperation::Add,
                        },
                    }
                } else {
                    wgpu::BlendState::REPLACE
                }),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

pub(crate) fn create_body_resources(
    device: &wgpu::Device,
    surface_format: wgpu::TextureFormat,
    depth_format: wgpu::TextureFormat,
    bodies: &[Body],
) -> BodyResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("bodies_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::BODIES_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("bodies_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("bodies_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });

    let solid_pipeline = make_body_pipeline(
        device,
        &pl,
        &shader,
        "fs_solid",
        surface_format,
        depth_format,
        false,
    );
    let rim_pipeline = make_body_pipeline(
        device,
        &pl,
        &shader,
        "fs_rim",
        surface_format,
        depth_format,
        true,
    );

    let (vertices, indices) = sphere::uv_sphere(SPHERE_STACKS, SPHERE_SECTORS);
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sphere_vertices"),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sphere_indices"),
        contents: bytemuck::cast_slice(&indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    let draws = bodies
        .iter()
        .map(|body| {
            let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("body_uniforms"),
                size: std::mem::size_of::<BodyUniforms>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("body_bg"),
                layout: &bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });
            BodyDraw {
                uniform_buffer,
                bind_group,
                rim: matches!(body.material, BodyMaterial::Rim { .. }),
            }
        })
        .collect();

    BodyResources {
        solid_pipeline,
        rim_pipeline,
        vertex_buffer,
        index_buffer,
        index_count: indices.len() as u32,
        draws,
    }
}
