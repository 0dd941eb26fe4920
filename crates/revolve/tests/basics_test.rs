//! Basic integration tests for revolve-rs: application lifecycle and frames.

use revolve::*;

fn small_options() -> Options {
    Options {
        meridians: 12,
        rings: 7,
        disc_rings: 4,
        ..Options::default()
    }
}

fn demo_app(options: Options) -> App {
    let mut app = App::new(options);
    app.set_init_function(|ctx| SceneDescription::demo().register_all(ctx));
    app.start().expect("start failed");
    app
}

#[test]
fn test_lifecycle() {
    let mut app = App::new(small_options());
    let mut sink = CountingSink::new();
    assert!(matches!(app.frame(&mut sink), Err(RevolveError::NotStarted)));

    app.set_init_function(|ctx| SceneDescription::demo().register_all(ctx));
    app.start().unwrap();
    assert!(app.is_started());
    assert_eq!(app.context().registry.len(), 4);
    assert!(matches!(app.start(), Err(RevolveError::AlreadyStarted)));

    let stats = app.run_frames(3, &mut sink).unwrap();
    assert_eq!(stats.len(), 3);
    assert!(stats.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(app.frame_count(), 3);

    app.shutdown();
    assert!(!app.is_started());
    assert!(app.context().registry.is_empty());
}

#[test]
fn test_stride_change_applies_to_next_frame() {
    let mut app = demo_app(small_options());
    let handle = app.stride_handle();

    let mut sink = CountingSink::new();
    let first = app.frame(&mut sink).unwrap();
    assert_eq!(first.stride, Stride::FULL);

    // A write between frames is read once at the start of the next one.
    handle.set(3);
    let second = app.frame(&mut sink).unwrap();
    assert_eq!(second.stride.value(), 3);
    assert!(second.stats.triangles < first.stats.triangles);

    let third = app.frame(&mut sink).unwrap();
    assert_eq!(third.stats, second.stats);
}

#[test]
fn test_slider_control_drives_stride() {
    let mut app = demo_app(small_options());
    let control = app.panel().control("step").unwrap().clone();
    assert!(control.apply(5));

    let buffer = headless::render_to_buffer(&mut app).unwrap();
    assert_eq!(app.context().stride().value(), 5);
    assert_eq!(buffer.batches().len(), 4);
}

#[test]
fn test_out_of_range_stride_is_clamped() {
    let mut app = demo_app(small_options());
    app.stride_handle().set(0);
    let mut sink = CountingSink::new();
    assert_eq!(app.frame(&mut sink).unwrap().stride.value(), 1);

    app.stride_handle().set(99);
    assert_eq!(app.frame(&mut sink).unwrap().stride.value(), 10);
}

#[test]
fn test_disabled_structures_are_not_drawn() {
    let mut app = demo_app(small_options());
    let mut all = CountingSink::new();
    app.frame(&mut all).unwrap();

    app.context_mut()
        .registry
        .get_mut("torus")
        .unwrap()
        .set_enabled(false);
    let mut some = CountingSink::new();
    app.frame(&mut some).unwrap();

    assert_eq!(some.stats().surfaces, 3);
    assert_eq!(all.stats().triangles - some.stats().triangles, 2 * 12 * 6);
}

#[test]
fn test_custom_draw_function() {
    let mut app = App::new(small_options());
    app.set_init_function(|ctx| SceneDescription::demo().register_all(ctx));
    app.set_draw_function(|ctx, stride, sink| {
        if let Some(sphere) = ctx.registry.get("sphere") {
            sphere.draw(stride, sink);
        }
    });
    app.start().unwrap();

    let buffer = headless::render_to_buffer(&mut app).unwrap();
    assert_eq!(buffer.batches().len(), 1);
    assert_eq!(buffer.batches()[0].name, "sphere");
    assert_eq!(buffer.triangle_count(), 2 * 12 * 6);
}

#[test]
fn test_styles_reach_the_sink() {
    let mut app = demo_app(Options {
        material: "clay".into(),
        surface_color: Vec3::new(0.0, 0.0, 1.0),
        ..small_options()
    });
    let buffer = headless::render_to_buffer(&mut app).unwrap();
    for batch in buffer.batches() {
        assert_eq!(batch.style.material, "clay");
        assert_eq!(batch.style.color, Vec3::Z);
        assert_eq!(batch.as_bytes().len(), batch.triangle_count() * 3 * 24);
        assert_eq!(batch.material, MaterialUniforms::from(&Material::clay()));
    }
}

#[test]
fn test_material_change_reaches_the_batch() {
    let mut app = demo_app(small_options());
    app.context_mut()
        .registry
        .get_mut("sphere")
        .unwrap()
        .style_mut()
        .material = "wax".into();
    let buffer = headless::render_to_buffer(&mut app).unwrap();
    let sphere = buffer.batch("sphere").unwrap();
    assert_eq!(sphere.style.material, "wax");
    assert_eq!(sphere.material, MaterialUniforms::from(&Material::wax()));
    assert_eq!(
        buffer.batch("cone").unwrap().material,
        MaterialUniforms::from(&Material::plastic())
    );
}

#[test]
fn test_duplicate_structure_fails_start() {
    let mut app = App::new(small_options());
    app.set_init_function(|ctx| {
        SceneDescription::demo().register_all(ctx)?;
        SceneDescription::demo().register_all(ctx)
    });
    assert!(matches!(app.start(), Err(RevolveError::StructureExists(_))));
}
