//! End-to-end retargeting of paints and shader trees.

use std::io::Cursor;
use std::sync::Arc;

use glam::{Affine2, Vec2};
use image::{ImageFormat, Rgba, RgbaImage};
use tincture_core::{
    Color, ColorSpace, EncodedGenerator, Image, ImageGenerator, Primaries, TransferFn, XformError,
};
use tincture_paint::{
    BlendMode, ColorFilter, ColorSpaceXformer, GradientFlags, Layer, LayerDrawLooper, Paint,
    Shader, TileMode, XformerConfig,
};

#[derive(Debug)]
struct Unreadable;

impl ImageGenerator for Unreadable {
    fn dimensions(&self) -> (u32, u32) {
        (4, 4)
    }

    fn generate(&self) -> Result<RgbaImage, XformError> {
        Err(XformError::Generator("truncated file".into()))
    }
}

fn p3() -> ColorSpaceXformer {
    ColorSpaceXformer::make(ColorSpace::display_p3()).expect("P3 is supported")
}

fn png_image(color: [u8; 4]) -> Arc<Image> {
    let mut bytes = Vec::new();
    RgbaImage::from_pixel(4, 4, Rgba(color))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("png encode");
    let generator = EncodedGenerator::new(bytes).expect("png header");
    Arc::new(Image::from_generator(Arc::new(generator), None))
}

#[test]
fn gradient_stops_keep_order_and_offsets() {
    let xformer = p3();
    let colors = [Color::RED, Color::GREEN, Color::GREEN, Color::BLUE];
    let offsets = [0.0, 0.3, 0.3, 1.0];
    let shader = Shader::linear_gradient(
        [Vec2::ZERO, Vec2::new(0.0, 64.0)],
        &colors,
        Some(&offsets[..]),
        TileMode::Repeat,
        GradientFlags::empty(),
        Affine2::IDENTITY,
    )
    .unwrap();

    let out = xformer.apply_shader(&shader).unwrap();
    let info = out.as_gradient().unwrap();
    assert_eq!(info.offsets, offsets);
    assert_eq!(info.colors.len(), colors.len());
    for (i, c) in colors.iter().enumerate() {
        assert_eq!(info.colors[i], xformer.apply_color(*c), "stop {i}");
    }
    assert_eq!(info.colors[1], info.colors[2]);
}

#[test]
fn image_shader_keeps_tiling_and_matrix() {
    let xformer = p3();
    let m = Affine2::from_scale_angle_translation(Vec2::splat(0.5), 0.25, Vec2::new(10.0, 20.0));
    let src = png_image([255, 0, 0, 255]);
    let shader = Shader::image(Arc::clone(&src), TileMode::Repeat, TileMode::Mirror, m);

    let out = xformer.apply_shader(&shader).unwrap();
    let rec = out.as_image().unwrap();
    assert_eq!(rec.tile_x, TileMode::Repeat);
    assert_eq!(rec.tile_y, TileMode::Mirror);
    assert_eq!(rec.local_matrix, m);
    assert!(!Arc::ptr_eq(&rec.image, &src));
    assert_eq!(**rec.image.color_space().unwrap(), **xformer.dst());

    let expected = xformer.apply_color(Color::RED).to_rgba8();
    assert!(rec.image.pixels().unwrap().pixels().all(|p| p.0 == expected));
}

#[test]
fn composite_fails_when_a_child_image_fails() {
    let xformer = p3();
    let good = Shader::color(Color::RED, Affine2::IDENTITY);
    let bad = Shader::image(
        Arc::new(Image::from_generator(Arc::new(Unreadable), None)),
        TileMode::Clamp,
        TileMode::Clamp,
        Affine2::IDENTITY,
    );
    let compose = Shader::compose(good, bad, BlendMode::SrcOver, Affine2::IDENTITY);
    assert!(xformer.apply_shader(&compose).is_none());

    // Nested one level deeper, the failure still reaches the root.
    let outer = Shader::compose(
        compose,
        Shader::color(Color::BLUE, Affine2::IDENTITY),
        BlendMode::Plus,
        Affine2::IDENTITY,
    );
    assert!(xformer.apply_shader(&outer).is_none());
}

#[test]
fn full_paint_with_layer_looper() {
    let xformer = p3();
    let gradient = Shader::radial_gradient(
        Vec2::new(32.0, 32.0),
        16.0,
        &[Color::WHITE, Color(0x80FF_8800)],
        None,
        TileMode::Clamp,
        GradientFlags::INTERPOLATE_COLORS_IN_PREMUL,
        Affine2::IDENTITY,
    )
    .unwrap();
    let shadow_paint = Paint::new(Color(0x6600_00FF));
    let looper = LayerDrawLooper::new(vec![Layer {
        offset: Vec2::new(3.0, 3.0),
        paint: shadow_paint.with_shader(Shader::color(Color::GREEN, Affine2::IDENTITY)),
    }]);

    let paint = Paint::new(Color(0xFF33_6699))
        .with_shader(gradient)
        .with_color_filter(ColorFilter::mode(Color(0xFF80_8080), BlendMode::Modulate))
        .with_looper(Arc::new(looper.clone()));

    let out = xformer.apply_paint(&paint);
    assert_eq!(out.color, xformer.apply_color(Color(0xFF33_6699)));
    assert_eq!(
        out.shader.as_ref().unwrap().as_gradient().unwrap().colors,
        xformer.apply_colors(&[Color::WHITE, Color(0x80FF_8800)])
    );
    assert_eq!(
        out.color_filter.as_ref().unwrap().as_color_mode(),
        Some((xformer.apply_color(Color(0xFF80_8080)), BlendMode::Modulate))
    );

    let converted = looper.converted(&xformer);
    let layer_paint = &converted.layers()[0].paint;
    assert_eq!(layer_paint.color, xformer.apply_color(Color(0x6600_00FF)));
    assert_eq!(
        layer_paint.shader.as_ref().unwrap().as_constant_color(),
        Some(xformer.apply_color(Color::GREEN))
    );
}

#[test]
fn identity_xformer_changes_nothing() {
    let identity = ColorSpaceXformer::make(ColorSpace::srgb()).unwrap();
    let paint = Paint::new(Color(0xFF12_3456))
        .with_shader(Shader::color(Color(0x8001_0203), Affine2::IDENTITY));
    let out = identity.apply_paint(&paint);
    assert_eq!(out.color, paint.color);
    assert_eq!(out.shader.unwrap().as_constant_color(), Some(Color(0x8001_0203)));
}

#[test]
fn unsupported_destination_yields_no_xformer() {
    let unusable = ColorSpace::new(Primaries::SRGB, TransferFn::Gamma(f32::INFINITY));
    assert!(ColorSpaceXformer::make(unusable).is_none());
}

#[test]
fn config_round_trip_builds_xformer() {
    let config = XformerConfig::from_json(r#"{ "destination": "AcesCg" }"#).unwrap();
    let xformer = ColorSpaceXformer::from_config(&config).unwrap();
    assert_eq!(xformer.apply_color(Color::BLACK), Color::BLACK);
}
