use crate::coords::Viewport;
use crate::device::{Gpu, GpuFrame};
use crate::paint::Color;
use crate::scene::DrawList;

use super::common::{premul_alpha_blend, viewport_ubo_min_binding_size, ViewportUniform};
use super::tessellate::{Mesh, StrokeVertex, Tessellator};

/// Renderer for every command recorded by `canvas::Canvas`.
///
/// Strokes and partial clears are tessellated on the CPU into one indexed
/// triangle list and drawn with a single pipeline, preserving paint order.
#[derive(Default)]
pub struct StrokeRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    vertex_vbo: Option<wgpu::Buffer>,
    vertex_capacity: usize,
    index_ibo: Option<wgpu::Buffer>,
    index_capacity: usize,

    tessellator: Tessellator,
    /// Reused CPU-side geometry scratch.
    mesh: Mesh,
}

impl StrokeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears `frame` to `background` and draws `list` on top in one pass.
    ///
    /// `viewport` is the logical size the list was recorded against.
    pub fn render(
        &mut self,
        gpu: &Gpu<'_>,
        frame: &mut GpuFrame,
        viewport: Viewport,
        background: Color,
        list: &DrawList,
    ) {
        self.mesh.vertices.clear();
        self.mesh.indices.clear();
        self.tessellator.tessellate(list, &mut self.mesh);

        let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("orrery stroke pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &frame.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear_color(background)),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if self.mesh.indices.is_empty() {
            return;
        }

        self.ensure_pipeline(gpu);
        self.ensure_bindings(gpu);
        self.write_viewport_uniform(gpu, viewport);
        self.ensure_capacity(gpu);

        let (Some(vbo), Some(ibo)) = (self.vertex_vbo.as_ref(), self.index_ibo.as_ref()) else {
            return;
        };
        gpu.queue().write_buffer(vbo, 0, bytemuck::cast_slice(&self.mesh.vertices));
        gpu.queue().write_buffer(ibo, 0, bytemuck::cast_slice(&self.mesh.indices));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.mesh.indices.len() as u32, 0, 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, gpu: &Gpu<'_>) {
        if self.pipeline_format == Some(gpu.format()) && self.pipeline.is_some() {
            return;
        }

        let shader = gpu.device().create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("orrery stroke shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/stroke.wgsl").into()),
        });

        let bind_group_layout =
            gpu.device().create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("orrery stroke bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(viewport_ubo_min_binding_size()),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            gpu.device().create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("orrery stroke pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = gpu.device().create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("orrery stroke pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[vertex_layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: gpu.format(),
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("stroke pipeline built for {:?}", gpu.format());

        self.pipeline_format = Some(gpu.format());
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, gpu: &Gpu<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = gpu.device().create_buffer(&wgpu::BufferDescriptor {
            label: Some("orrery stroke viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = gpu.device().create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("orrery stroke bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_viewport_uniform(&mut self, gpu: &Gpu<'_>, viewport: Viewport) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        let w = viewport.width.max(1.0);
        let h = viewport.height.max(1.0);
        gpu.queue().write_buffer(
            ubo,
            0,
            bytemuck::bytes_of(&ViewportUniform { viewport: [w, h], _pad: [0.0; 2] }),
        );
    }

    fn ensure_capacity(&mut self, gpu: &Gpu<'_>) {
        let vertices = self.mesh.vertices.len();
        if vertices > self.vertex_capacity || self.vertex_vbo.is_none() {
            let cap = vertices.next_power_of_two().max(1024);
            log::debug!("stroke vertex buffer grown to {cap} vertices");
            let bytes = cap * size_of::<StrokeVertex>();
            self.vertex_vbo =
                Some(grow(gpu, "orrery stroke vbo", bytes, wgpu::BufferUsages::VERTEX));
            self.vertex_capacity = cap;
        }

        let indices = self.mesh.indices.len();
        if indices > self.index_capacity || self.index_ibo.is_none() {
            let cap = indices.next_power_of_two().max(2048);
            log::debug!("stroke index buffer grown to {cap} indices");
            let bytes = cap * size_of::<u32>();
            self.index_ibo = Some(grow(gpu, "orrery stroke ibo", bytes, wgpu::BufferUsages::INDEX));
            self.index_capacity = cap;
        }
    }
}

fn grow(gpu: &Gpu<'_>, label: &'static str, bytes: usize, usage: wgpu::BufferUsages) -> wgpu::Buffer {
    gpu.device().create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: bytes as u64,
        usage: usage | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn clear_color(c: Color) -> wgpu::Color {
    wgpu::Color { r: c.r as f64, g: c.g as f64, b: c.b as f64, a: c.a as f64 }
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
    0 => Float32x2, // pos
    1 => Float32x4  // color
];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<StrokeVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRS,
    }
}
