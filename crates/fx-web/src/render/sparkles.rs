use super::helpers::{uniform_bind_group, uniform_layout};
use super::{clear_color, GpuContext, SPARKLES_WGSL};
use crate::constants::SPARKLE_POINT_SCALE;
use fx_core::{Camera, Particle};

// Two triangles per sprite, expanded from vertex_index in the shader.
const QUAD_VERTICES: u32 = 6;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SparkleUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    resolution: [f32; 2],
    current_time: f32,
    point_scale: f32,
}

pub struct SparkleRenderer {
    pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    capacity: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl SparkleRenderer {
    pub fn new(gpu: &GpuContext, capacity: usize) -> Self {
        let device = &gpu.device;
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sparkle_instances"),
            size: (capacity * std::mem::size_of::<Particle>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sparkle_uniforms"),
            size: std::mem::size_of::<SparkleUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = uniform_layout(device, "sparkle_bgl");
        let bind_group = uniform_bind_group(device, "sparkle_bg", &bgl, &uniform_buffer);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sparkle_shader"),
            source: wgpu::ShaderSource::Wgsl(SPARKLES_WGSL.into()),
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sparkle_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        // Matches Particle: position (vec3), size, spawn_time.
        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Particle>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &wgpu::vertex_attr_array![
                0 => Float32x3,
                1 => Float32,
                2 => Float32
            ],
        };
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sparkle_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_sparkle"),
                buffers: &[instance_layout],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_sparkle"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.format(),
                    blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Self {
            pipeline,
            instance_buffer,
            capacity: capacity as u32,
            uniform_buffer,
            bind_group,
        }
    }

    /// Replace the instance buffer with the ring contents.
    pub fn upload(&self, gpu: &GpuContext, ring_bytes: &[u8]) {
        gpu.queue.write_buffer(&self.instance_buffer, 0, ring_bytes);
    }

    pub fn render(&self, gpu: &GpuContext, camera: &Camera, current_time: f32) {
        let Some(frame) = gpu.acquire() else {
            return;
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let (width, height) = gpu.size();
        let uniforms = SparkleUniforms {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
            resolution: [width as f32, height as f32],
            current_time,
            point_scale: SPARKLE_POINT_SCALE,
        };
        gpu.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("sparkle_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sparkle_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
            rpass.draw(0..QUAD_VERTICES, 0..self.capacity);
        }
        gpu.queue.submit(Some(encoder.finish()));
        frame.present();
    }
}
