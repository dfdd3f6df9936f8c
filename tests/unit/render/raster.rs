use super::*;
use crate::foundation::core::Rect;
use crate::render::paint::PaintCmd;

fn rasterizer(scale: f64) -> Rasterizer {
    Rasterizer::new(&RasterOpts::default().with_system_fonts(false).with_scale(scale)).unwrap()
}

fn page() -> Page {
    Page {
        screen: "Swatch".to_owned(),
        width: 40.0,
        height: 20.0,
        background: Rgba8::opaque(0xFF, 0xFF, 0xFF),
        font_family: "sans-serif".to_owned(),
        commands: vec![PaintCmd::Rect {
            rect: Rect::new(0.0, 0.0, 20.0, 20.0),
            fill: Rgba8::opaque(0xFF, 0x00, 0x00),
        }],
    }
}

fn solid(width: u32, height: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: px.repeat((width * height) as usize),
        premultiplied: false,
    }
}

#[test]
fn rasterize_paints_background_and_shapes() {
    let frame = rasterizer(1.0).rasterize(&page()).unwrap();
    assert_eq!((frame.width, frame.height), (40, 20));
    assert!(!frame.premultiplied);
    assert_eq!(frame.pixel(5, 10), Some([0xFF, 0x00, 0x00, 0xFF]));
    assert_eq!(frame.pixel(35, 10), Some([0xFF, 0xFF, 0xFF, 0xFF]));
    assert_eq!(frame.pixel(40, 0), None);
}

#[test]
fn rasterize_page_builds_a_one_off_rasterizer() {
    let opts = RasterOpts::default().with_system_fonts(false);
    let frame = rasterize_page(&page(), &opts).unwrap();
    assert_eq!(frame.pixel(0, 0), Some([0xFF, 0x00, 0x00, 0xFF]));
}

#[test]
fn scale_multiplies_the_raster_size() {
    let frame = rasterizer(2.0).rasterize(&page()).unwrap();
    assert_eq!((frame.width, frame.height), (80, 40));
    assert_eq!(frame.pixel(70, 30), Some([0xFF, 0xFF, 0xFF, 0xFF]));
}

#[test]
fn oversized_pages_are_rejected() {
    let r = Rasterizer::new(
        &RasterOpts::default()
            .with_system_fonts(false)
            .with_max_dim(32),
    )
    .unwrap();
    assert!(r.raster_size(&page()).is_err());
}

#[test]
fn invalid_scale_is_rejected() {
    let opts = RasterOpts::default().with_system_fonts(false);
    assert!(Rasterizer::new(&opts.clone().with_scale(0.0)).is_err());
    assert!(Rasterizer::new(&opts.with_scale(f64::INFINITY)).is_err());
}

#[test]
fn png_round_trips_dimensions_and_pixels() {
    let frame = solid(3, 2, [10, 20, 30, 255]);
    let bytes = encode_png(&frame).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (3, 2));
    assert_eq!(decoded.get_pixel(2, 1).0, [10, 20, 30, 255]);
}

#[test]
fn premultiplied_frames_are_not_encoded() {
    let mut frame = solid(1, 1, [0, 0, 0, 0]);
    frame.premultiplied = true;
    assert!(encode_png(&frame).is_err());
}

#[test]
fn stack_places_frames_top_to_bottom_with_a_gap() {
    let a = solid(4, 2, [255, 0, 0, 255]);
    let b = solid(2, 3, [0, 0, 255, 255]);
    let bg = Rgba8::opaque(0xEE, 0xEE, 0xEE);
    let out = stack_pages(&[a, b], 1, bg).unwrap();
    assert_eq!((out.width, out.height), (4, 6));
    assert_eq!(out.pixel(3, 1), Some([255, 0, 0, 255]));
    assert_eq!(out.pixel(0, 2), Some([0xEE, 0xEE, 0xEE, 0xFF]));
    assert_eq!(out.pixel(1, 3), Some([0, 0, 255, 255]));
    assert_eq!(out.pixel(3, 3), Some([0xEE, 0xEE, 0xEE, 0xFF]));
    assert!(stack_pages(&[], 0, bg).is_err());
}

#[test]
fn stack_rejects_empty_and_short_frames() {
    let bg = Rgba8::opaque(0xFF, 0xFF, 0xFF);
    let empty = FrameRGBA {
        width: 0,
        height: 3,
        data: Vec::new(),
        premultiplied: false,
    };
    let err = stack_pages(&[solid(2, 2, [0, 0, 0, 255]), empty], 0, bg).unwrap_err();
    assert!(err.to_string().contains("frame 1 is empty"));

    let mut short = solid(2, 2, [0, 0, 0, 255]);
    short.data.truncate(8);
    assert!(stack_pages(&[short], 0, bg).is_err());
}
