use crate::types::HueShift;
use crate::utils::{hsv_to_image_rgba, rgba_to_hsv};

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;
use indicatif::ProgressBar;
use palette::Hsv;

/// Recolors a single PNG in place, overwriting the file it was loaded from.
pub fn recolor_file(path: &Path, shift: &HueShift, pb: &ProgressBar) -> Result<()> {
    let img = image::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut img = img.to_rgba8();

    pb.set_length(img.width() as u64 * img.height() as u64);
    shift_hues(&mut img, shift, pb);

    img.save(path)
        .with_context(|| format!("failed to save {}", path.display()))?;

    Ok(())
}

pub fn shift_hues(img: &mut RgbaImage, shift: &HueShift, pb: &ProgressBar) {
    for (i, pixel) in img.pixels_mut().enumerate() {
        if i % 100 == 0 {
            pb.inc(100);
        }

        // Fully transparent pixels are never touched.
        let alpha = pixel[3];
        if alpha == 0 {
            continue;
        }

        let hsv = rgba_to_hsv(*pixel);
        let hue_deg = hsv.hue.into_positive_degrees();

        // Non-selected pixels keep their exact bytes, no HSV round trip.
        if !shift.selects(hue_deg, hsv.saturation) {
            continue;
        }

        let shifted = Hsv::new(shift.remap(hue_deg), hsv.saturation, hsv.value);
        *pixel = hsv_to_image_rgba(shifted, alpha);
    }
}
