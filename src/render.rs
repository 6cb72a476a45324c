use crate::camera::Camera;
use crate::scene::{BodyMaterial, SceneState};
use glam::Mat4;
use web_sys as web;

mod bodies;
mod sphere;
mod stars;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// ===================== WebGPU state =====================

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,

    stars: stars::StarResources,
    bodies: bodies::BodyResources,

    camera: Camera,
    pixel_ratio: f32,
    width: u32,
    height: u32,
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_tex"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        scene: &SceneState,
        pixel_ratio: f32,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_view = create_depth_view(&device, width, height);
        let stars = stars::create_star_resources(&device, format, DEPTH_FORMAT, &scene.layers);
        let bodies = bodies::create_body_resources(&device, format, DEPTH_FORMAT, &scene.bodies);

        let camera = Camera::hero(width as f32 / height.max(1) as f32);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            stars,
            bodies,
            camera,
            pixel_ratio,
            width,
            height,
        })
    }

    /// Reconfigure the swapchain, depth buffer, and camera aspect when the
    /// canvas backing size changes. Safe to call every frame.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth_view = create_depth_view(&self.device, width, height);
            self.camera.set_viewport(width, height);
        }
    }

    /// Submit one frame of the full scene against the current camera.
    pub fn render(&mut self, scene: &SceneState) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let view_m = self.camera.view_matrix();
        let proj_m = self.camera.projection_matrix();
        let resolution = [self.width as f32, self.height as f32];

        for (layer, res) in scene.layers.iter().zip(&self.stars.layers) {
            let u = stars::StarUniforms {
                view: view_m.to_cols_array_2d(),
                proj: proj_m.to_cols_array_2d(),
                model: Mat4::from_rotation_y(layer.rotation_y).to_cols_array_2d(),
                resolution,
                time: layer.shader_time,
                pixel_ratio: self.pixel_ratio,
            };
            self.queue
                .write_buffer(&res.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }

        for (body, draw) in scene.bodies.iter().zip(&self.bodies.draws) {
            let model = Mat4::from_translation(body.position)
                * Mat4::from_rotation_y(body.rotation_y)
                * Mat4::from_scale(glam::Vec3::splat(body.radius));
            let mv = view_m * model;
            let (tint, rim) = match body.material {
                BodyMaterial::Solid { color } => (color.extend(1.0).to_array(), [0.0; 4]),
                BodyMaterial::Rim { tint, bias, power } => {
                    (tint.to_array(), [bias, power, 0.0, 0.0])
                }
            };
            let u = bodies::BodyUniforms {
                mvp: (proj_m * mv).to_cols_array_2d(),
                mv: mv.to_cols_array_2d(),
                tint,
                rim,
            };
            self.queue
                .write_buffer(&draw.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        // Transparent clear; the page background shows through.
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Opaque bodies write depth first, then the additive passes.
            rpass.set_vertex_buffer(0, self.bodies.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.bodies.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.set_pipeline(&self.bodies.solid_pipeline);
            for draw in self.bodies.draws.iter().filter(|d| !d.rim) {
                rpass.set_bind_group(0, &draw.bind_group, &[]);
                rpass.draw_indexed(0..self.bodies.index_count, 0, 0..1);
            }

            rpass.set_pipeline(&self.stars.pipeline);
            for layer in &self.stars.layers {
                rpass.set_bind_group(0, &layer.bind_group, &[]);
                rpass.set_vertex_buffer(0, layer.instance_buffer.slice(..));
                rpass.draw(0..6, 0..layer.instance_count);
            }

            rpass.set_vertex_buffer(0, self.bodies.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.bodies.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.set_pipeline(&self.bodies.rim_pipeline);
            for draw in self.bodies.draws.iter().filter(|d| d.rim) {
                rpass.set_bind_group(0, &draw.bind_group, &[]);
                rpass.draw_indexed(0..self.bodies.index_count, 0, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
