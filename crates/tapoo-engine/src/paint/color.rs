/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    ///
    /// RGB is decoded to linear; alpha is already linear.
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let lin = |v: u8| srgb_to_linear(v as f32 / 255.0);
        Self::from_straight(lin(r), lin(g), lin(b), a as f32 / 255.0)
    }

    /// Returns straight sRGB bytes; the inverse of [`Color::from_srgb_u8`].
    pub fn to_srgb_u8(self) -> [u8; 4] {
        let (r, g, b, a) = self.to_straight();
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [
            q(linear_to_srgb(r)),
            q(linear_to_srgb(g)),
            q(linear_to_srgb(b)),
            q(a),
        ]
    }

    /// Formats the color as lowercase `#rrggbb`, or `#rrggbbaa` when translucent.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_srgb_u8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Creates a premultiplied color from straight alpha linear components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Premultiplied components with RGB sRGB-encoded, for targets that store
    /// shader output unconverted (`*Unorm` rather than `*UnormSrgb`).
    pub fn to_srgb_array(self) -> [f32; 4] {
        let (r, g, b, a) = self.to_straight();
        [linear_to_srgb(r) * a, linear_to_srgb(g) * a, linear_to_srgb(b) * a, a]
    }
}

/// sRGB electro-optical transfer function, `[0, 1]` in and out.
#[inline]
pub fn srgb_to_linear(v: f32) -> f32 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Inverse of [`srgb_to_linear`].
#[inline]
pub fn linear_to_srgb(v: f32) -> f32 {
    if v <= 0.003_130_8 {
        v * 12.92
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_drops_opaque_alpha() {
        assert_eq!(Color::from_srgb_u8(0x53, 0xd8, 0x0f, 0xff).to_hex(), "#53d80f");
        assert_eq!(Color::from_srgb_u8(0, 0, 0, 0x80).to_hex(), "#00000080");
    }

    #[test]
    fn srgb_bytes_are_stored_linear() {
        let c = Color::from_srgb_u8(0x53, 0xd8, 0x0f, 0xff);
        // 0x53 / 255 = 0.3255 in sRGB is about 0.0865 linear.
        assert!((c.r - 0.0865).abs() < 1e-3, "r = {}", c.r);
        assert!((c.g - 0.6867).abs() < 1e-3, "g = {}", c.g);
        assert!((c.b - 0.0048).abs() < 1e-3, "b = {}", c.b);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn srgb_bytes_survive_the_linear_round_trip() {
        for v in 0..=255u8 {
            let c = Color::from_srgb_u8(v, v, v, 255);
            assert_eq!(c.to_srgb_u8(), [v, v, v, 255], "byte {v}");
        }
    }

    #[test]
    fn srgb_array_is_premultiplied_and_encoded() {
        let c = Color::from_srgb_u8(0x53, 0xd8, 0x0f, 0xff);
        let [r, g, b, a] = c.to_srgb_array();
        let q = |v: f32| (v * 255.0).round() as u8;
        assert_eq!([q(r), q(g), q(b), q(a)], [0x53, 0xd8, 0x0f, 0xff]);
    }

    #[test]
    fn transfer_endpoints_are_fixed() {
        assert_eq!(srgb_to_linear(0.0), 0.0);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn transparent_straight_is_zero() {
        assert_eq!(Color::transparent().to_straight(), (0.0, 0.0, 0.0, 0.0));
    }
}
