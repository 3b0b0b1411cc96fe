use image::{Rgba, RgbaImage};

use crate::geometry::Rect;

/// 3x5 bitmap glyphs for the digits 0-9, one row per byte, MSB-first in the low 3 bits.
const DIGIT_GLYPHS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b010, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

const GLYPH_WIDTH: u32 = 3;
const GLYPH_HEIGHT: u32 = 5;

/// Clip a float rect to integer pixel bounds `[x0, x1) x [y0, y1)`.
pub(crate) fn clip(img: &RgbaImage, rect: Rect) -> Option<(u32, u32, u32, u32)> {
    let x0 = rect.left.max(0.0).floor() as u32;
    let y0 = rect.top.max(0.0).floor() as u32;
    let x1 = (rect.right().max(0.0).ceil() as u32).min(img.width());
    let y1 = (rect.bottom().max(0.0).ceil() as u32).min(img.height());
    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

pub(crate) fn fill_rect(img: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    if let Some((x0, y0, x1, y1)) = clip(img, rect) {
        for y in y0..y1 {
            for x in x0..x1 {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// One-pixel outline along the inside edge of `rect`.
pub(crate) fn stroke_rect(img: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let Some((x0, y0, x1, y1)) = clip(img, rect) else {
        return;
    };
    for x in x0..x1 {
        img.put_pixel(x, y0, color);
        img.put_pixel(x, y1 - 1, color);
    }
    for y in y0..y1 {
        img.put_pixel(x0, y, color);
        img.put_pixel(x1 - 1, y, color);
    }
}

pub(crate) fn fill_disc(img: &mut RgbaImage, cx: i32, cy: i32, radius: i32, color: Rgba<u8>) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > r2 {
                continue;
            }
            let (x, y) = (cx + dx, cy + dy);
            if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Draw the decimal form of `value` with its top-left corner at (`x`, `y`).
pub(crate) fn draw_number(img: &mut RgbaImage, x: u32, y: u32, value: u32, scale: u32, color: Rgba<u8>) {
    let scale = scale.max(1);
    let advance = (GLYPH_WIDTH + 1) * scale;
    for (i, ch) in value.to_string().bytes().enumerate() {
        let glyph = &DIGIT_GLYPHS[(ch - b'0') as usize];
        let gx = x + i as u32 * advance;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let px = Rect::new(
                    (gx + col * scale) as f32,
                    (y + row as u32 * scale) as f32,
                    scale as f32,
                    scale as f32,
                );
                fill_rect(img, px, color);
            }
        }
    }
}

/// Pixel height of a label drawn at `scale`.
pub(crate) fn label_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale.max(1)
}
