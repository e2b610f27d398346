//! Numeric conversions used to pack clear colors.

/// Round the way the hardware does before converting a scaled value: add or subtract 0.5, then truncate towards zero.
///
/// Negative results are returned as their two's complement bit pattern, the caller masks them to the channel size.
pub fn round_half_away_from_zero_then_truncate(val: f32) -> u64 {
    let val = if val > 0.0 { val + 0.5 } else { val - 0.5 };
    val as i64 as u64
}

/// Convert a linear value to an 8-bit sRGB encoded value
pub fn linear_to_srgb_8unorm(val: f32) -> u8 {
    if val.is_nan() || val <= 0.0 {
        return 0;
    }
    if val >= 1.0 {
        return 255;
    }

    let srgb = if val < 0.0031308 {
        val * 12.92
    } else {
        1.055 * val.powf(1.0 / 2.4) - 0.055
    };
    (srgb * 255.0 + 0.5).clamp(0.0, 255.0) as u8
}

/// Convert a float to a half float, rounding towards zero
pub fn f32_to_f16_rtz(val: f32) -> u16 {
    let bits = val.to_bits();
    let sign = ((bits >> 16) & 0x8000) as u16;
    let exp_bits = ((bits >> 23) & 0xFF) as i32;
    let mantissa = bits & 0x7F_FFFF;

    if exp_bits == 0xFF {
        return if mantissa != 0 { sign | 0x7E00 } else { sign | 0x7C00 };
    }
    // zero and denormals
    if exp_bits == 0 {
        return sign;
    }

    let exp = exp_bits - 127;
    if exp > 15 {
        // largest finite value
        sign | 0x7BFF
    } else if exp >= -14 {
        sign | (((exp + 15) as u16) << 10) | (mantissa >> 13) as u16
    } else if exp >= -24 {
        sign | ((mantissa | 0x80_0000) >> (-exp - 1)) as u16
    } else {
        sign
    }
}

const UF11_MAX_EXPONENT: u32 = 0x1F << 6;
const UF10_MAX_EXPONENT: u32 = 0x1F << 5;

/// Convert a float to an unsigned 11-bit float (5-bit exponent, 6-bit mantissa)
fn f32_to_uf11(val: f32) -> u32 {
    let bits = val.to_bits();
    let exponent = ((bits >> 23) & 0xFF) as i32 - 127;
    let mantissa = bits & 0x7F_FFFF;
    let sign = bits >> 31 != 0;

    if exponent == 128 {
        if mantissa != 0 {
            UF11_MAX_EXPONENT | 1
        } else if sign {
            0
        } else {
            UF11_MAX_EXPONENT
        }
    } else if sign {
        0
    } else if val > 65024.0 {
        (30 << 6) | 0x3F
    } else if exponent > -15 {
        (((exponent + 15) as u32) << 6) | (mantissa >> 17)
    } else {
        0
    }
}

/// Convert a float to an unsigned 10-bit float (5-bit exponent, 5-bit mantissa)
fn f32_to_uf10(val: f32) -> u32 {
    let bits = val.to_bits();
    let exponent = ((bits >> 23) & 0xFF) as i32 - 127;
    let mantissa = bits & 0x7F_FFFF;
    let sign = bits >> 31 != 0;

    if exponent == 128 {
        if mantissa != 0 {
            UF10_MAX_EXPONENT | 1
        } else if sign {
            0
        } else {
            UF10_MAX_EXPONENT
        }
    } else if sign {
        0
    } else if val > 64512.0 {
        (30 << 5) | 0x1F
    } else if exponent > -15 {
        (((exponent + 15) as u32) << 5) | (mantissa >> 18)
    } else {
        0
    }
}

/// Pack an RGB value into the 11/11/10 unsigned float layout, R in the lowest bits
pub fn float3_to_r11g11b10f(rgb: [f32; 3]) -> u32 {
    (f32_to_uf11(rgb[0]) & 0x7FF) |
    (f32_to_uf11(rgb[1]) & 0x7FF) << 11 |
    (f32_to_uf10(rgb[2]) & 0x3FF) << 22
}

const RGB9E5_MAX: f32 = 65408.0;
const RGB9E5_EXP_BIAS: u32 = 15;
const RGB9E5_MANTISSA_BITS: u32 = 9;

fn rgb9e5_clamp(val: f32) -> f32 {
    let bits = val.to_bits();
    // negative values and NaN
    if bits > 0x7F80_0000 {
        0.0
    } else if bits >= RGB9E5_MAX.to_bits() {
        RGB9E5_MAX
    } else {
        val
    }
}

/// Pack an RGB value into the shared exponent 9/9/9/5 layout, R in the lowest bits
pub fn float3_to_rgb9e5(rgb: [f32; 3]) -> u32 {
    let [r, g, b] = rgb.map(rgb9e5_clamp);

    let mut max_bits = r.to_bits().max(g.to_bits()).max(b.to_bits());
    // round up the maximum, so it doesn't overflow the mantissa once rounded
    max_bits += max_bits & (1 << (23 - RGB9E5_MANTISSA_BITS));

    let min_exp = 127 - RGB9E5_EXP_BIAS - 1;
    let exp_shared = (max_bits >> 23).max(min_exp) - min_exp;
    let rev_denom = f32::from_bits((127 + RGB9E5_EXP_BIAS + RGB9E5_MANTISSA_BITS + 1 - exp_shared) << 23);

    let [rm, gm, bm] = [r, g, b].map(|val| {
        let m = (val * rev_denom) as i32 as u32;
        (m & 1) + (m >> 1)
    });

    exp_shared << 27 | bm << 18 | gm << 9 | rm
}
