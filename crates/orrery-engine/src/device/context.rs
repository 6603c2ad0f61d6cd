use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::surface::{self, SurfaceErrorAction};
use super::GpuInit;

/// One acquired swapchain image plus the encoder recording into it.
///
/// Holding a frame blocks acquisition of the next one; hand it back through
/// [`Gpu::present`].
pub struct GpuFrame {
    texture: wgpu::SurfaceTexture,
    pub(crate) view: wgpu::TextureView,
    pub(crate) encoder: wgpu::CommandEncoder,
}

/// The single window surface this runtime draws to, with its device and queue.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    adapter_info: wgpu::AdapterInfo,
    /// Set while the window is minimized; the surface keeps its last size.
    minimized: bool,
}

impl<'w> Gpu<'w> {
    /// Picks an adapter for `window` and configures its surface.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(surface::is_drawable(size), "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;
        let adapter_info = adapter.get_info();
        log::info!("using GPU adapter \"{}\" ({:?})", adapter_info.name, adapter_info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("orrery device"),
                required_features: wgpu::Features::empty(),
                required_limits: init.required_limits,
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = surface.get_capabilities(&adapter);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface::choose_surface_format(&caps, init.prefer_srgb)
                .context("no supported surface formats")?,
            width: size.width,
            height: size.height,
            present_mode: init.present_mode,
            alpha_mode: surface::choose_alpha_mode(&caps, init.alpha_mode),
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };
        surface.configure(&device, &config);
        log::debug!(
            "surface configured: {:?} {}x{} {:?}",
            config.format, config.width, config.height, config.present_mode
        );

        Ok(Self { surface, device, queue, config, adapter_info, minimized: false })
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn adapter_info(&self) -> &wgpu::AdapterInfo {
        &self.adapter_info
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Follows the window's drawable size in physical pixels.
    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        self.minimized = !surface::is_drawable(size);
        if self.minimized {
            return;
        }
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Acquires the next swapchain image.
    ///
    /// A lost or outdated surface is reconfigured before the error is returned,
    /// so the caller only has to skip the frame.
    pub fn acquire(&mut self) -> Result<GpuFrame, SurfaceErrorAction> {
        if self.minimized {
            return Err(SurfaceErrorAction::SkipFrame);
        }

        let texture = self.surface.get_current_texture().map_err(|err| {
            log::debug!("surface error: {err:?}");
            let action = surface::classify(&err);
            if action == SurfaceErrorAction::Reconfigured {
                self.surface.configure(&self.device, &self.config);
            }
            action
        })?;

        let view = texture.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("orrery frame encoder"),
        });
        Ok(GpuFrame { texture, view, encoder })
    }

    /// Submits the frame's commands and presents its image.
    pub fn present(&self, frame: GpuFrame) {
        let GpuFrame { texture, view, encoder } = frame;
        self.queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        texture.present();
    }
}
