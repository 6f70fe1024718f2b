//! Source-over alpha compositing of full-frame layers.

use image::{Rgba, RgbaImage};

/// Paint `layer` over `canvas`, pixel for pixel from the top-left corner.
///
/// Pixels outside the canvas are ignored.
pub(crate) fn blit_layer(canvas: &mut RgbaImage, layer: &RgbaImage) {
    let (width, height) = canvas.dimensions();
    for (x, y, src) in layer.enumerate_pixels() {
        if x >= width || y >= height || src[3] == 0 {
            continue;
        }
        let dst = canvas.get_pixel(x, y);
        let blended = source_over(src, dst);
        canvas.put_pixel(x, y, blended);
    }
}

/// Porter-Duff "source over" for one pixel.
pub(crate) fn source_over(src: &Rgba<u8>, dst: &Rgba<u8>) -> Rgba<u8> {
    let src_alpha = src[3] as f32 / 255.0;
    let dst_alpha = dst[3] as f32 / 255.0;

    // out_alpha = src_alpha + dst_alpha * (1 - src_alpha)
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    if out_alpha == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| -> u8 {
        let s = src[i] as f32 / 255.0;
        let d = dst[i] as f32 / 255.0;
        let result = (s * src_alpha + d * dst_alpha * (1.0 - src_alpha)) / out_alpha;
        (result.clamp(0.0, 1.0) * 255.0).round() as u8
    };

    Rgba([channel(0), channel(1), channel(2), (out_alpha * 255.0).round() as u8])
}
