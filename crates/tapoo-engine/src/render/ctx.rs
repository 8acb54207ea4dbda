use crate::coords::Viewport;
use crate::paint::Color;

/// Renderer-facing context (device/queue + surface format + viewport).
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    pub viewport: Viewport, // logical px
    /// Physical pixels per logical pixel; used for scissor conversion.
    pub scale_factor: f32,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
        scale_factor: f32,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            viewport,
            scale_factor,
        }
    }
}

/// `*Srgb` formats encode on write, so they take linear values. Every other
/// format stores the output as-is and needs sRGB-encoded values.
pub fn surface_color(color: Color, format: wgpu::TextureFormat) -> [f32; 4] {
    if format.is_srgb() {
        color.to_array()
    } else {
        color.to_srgb_array()
    }
}

/// Target for drawing (encoder + color view).
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_surface_takes_linear_components() {
        let c = Color::from_srgb_u8(0x53, 0xd8, 0x0f, 0xff);
        assert_eq!(surface_color(c, wgpu::TextureFormat::Bgra8UnormSrgb), c.to_array());
    }

    #[test]
    fn unorm_surface_takes_encoded_components() {
        let c = Color::from_srgb_u8(0x53, 0xd8, 0x0f, 0xff);
        assert_eq!(surface_color(c, wgpu::TextureFormat::Bgra8Unorm), c.to_srgb_array());
    }
}
