use image::Rgba;
use palette::{FromColor, Hsv, Srgb};

pub fn rgba_to_hsv(pixel: Rgba<u8>) -> Hsv {
    let rgb = Srgb::new(
        pixel[0] as f32 / 255.0,
        pixel[1] as f32 / 255.0,
        pixel[2] as f32 / 255.0,
    );
    Hsv::from_color(rgb)
}

pub fn hsv_to_image_rgba(hsv: Hsv, alpha: u8) -> Rgba<u8> {
    let rgb = Srgb::from_color(hsv);
    Rgba([
        (rgb.red.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.green.clamp(0.0, 1.0) * 255.0) as u8,
        (rgb.blue.clamp(0.0, 1.0) * 255.0) as u8,
        alpha,
    ])
}
