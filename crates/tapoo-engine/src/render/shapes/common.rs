//! Shared GPU types and utilities used by the shape renderers.

use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Viewport};

// ── blend ─────────────────────────────────────────────────────────────────

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: component, alpha: component }
}

// ── viewport uniform ──────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

impl ViewportUniform {
    pub(super) fn from_viewport(viewport: Viewport) -> Self {
        Self {
            viewport: [viewport.width.max(1.0), viewport.height.max(1.0)],
            _pad: [0.0; 2],
        }
    }
}

/// Minimum binding size for the viewport uniform buffer.
pub(super) fn viewport_ubo_min_binding_size() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(std::mem::size_of::<ViewportUniform>() as u64)
}

// ── quad vertex ───────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2], // 0..1
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [0.0, 0.0] },
    QuadVertex { pos: [1.0, 0.0] },
    QuadVertex { pos: [1.0, 1.0] },
    QuadVertex { pos: [0.0, 1.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

// ── scissor rect ──────────────────────────────────────────────────────────

/// Converts a logical-pixel clip rect to physical scissor rect arguments for wgpu.
///
/// Returns `None` if the clip rect is zero-area (renderer should skip the draw call).
/// Returns `Some((x, y, w, h))` in physical pixels, clamped to the viewport.
///
/// `clip = None` means "no scissor" → returns the full viewport rect.
pub(super) fn logical_clip_to_scissor(
    clip: Option<Rect>,
    viewport: Viewport,
    scale: f32,
) -> Option<(u32, u32, u32, u32)> {
    let phys_vw = (viewport.width * scale).max(1.0) as u32;
    let phys_vh = (viewport.height * scale).max(1.0) as u32;

    let (x, y, w, h) = match clip {
        None => (0, 0, phys_vw, phys_vh),
        Some(r) => {
            let max = r.max();
            let x  = ((r.origin.x * scale).max(0.0) as u32).min(phys_vw);
            let y  = ((r.origin.y * scale).max(0.0) as u32).min(phys_vh);
            let x2 = ((max.x * scale).max(0.0) as u32).min(phys_vw);
            let y2 = ((max.y * scale).max(0.0) as u32).min(phys_vh);
            (x, y, x2.saturating_sub(x), y2.saturating_sub(y))
        }
    };

    if w == 0 || h == 0 { None } else { Some((x, y, w, h)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport::new(800.0, 600.0);

    #[test]
    fn no_clip_covers_physical_viewport() {
        assert_eq!(logical_clip_to_scissor(None, VP, 2.0), Some((0, 0, 1600, 1200)));
    }

    #[test]
    fn clip_is_scaled_and_clamped() {
        let clip = Rect::new(0.0, 30.0, 1000.0, 540.0);
        assert_eq!(logical_clip_to_scissor(Some(clip), VP, 1.0), Some((0, 30, 800, 540)));
    }

    #[test]
    fn zero_area_clip_is_skipped() {
        let clip = Rect::new(10.0, 10.0, 0.0, 50.0);
        assert_eq!(logical_clip_to_scissor(Some(clip), VP, 1.0), None);
    }

    #[test]
    fn viewport_uniform_never_divides_by_zero() {
        let u = ViewportUniform::from_viewport(Viewport::new(0.0, 0.0));
        assert_eq!(u.viewport, [1.0, 1.0]);
    }
}
