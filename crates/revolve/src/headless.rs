//! Headless frame capture.
//!
//! Runs frames without a window and keeps the triangles in a
//! [`FrameBuffer`], for tests and batch export.

use revolve_core::{Options, Result, Stride};
use revolve_render::FrameBuffer;
use revolve_structures::SceneDescription;

use crate::App;

/// Runs one frame of a started app and returns what was drawn.
///
/// Materials are resolved against the app's registry.
pub fn render_to_buffer(app: &mut App) -> Result<FrameBuffer> {
    let mut buffer = FrameBuffer::with_materials(app.materials().clone());
    app.frame(&mut buffer)?;
    Ok(buffer)
}

/// Builds `scene` with `options` and captures one frame at each stride.
pub fn render_scene_at_strides(
    scene: &SceneDescription,
    options: Options,
    strides: impl IntoIterator<Item = u32>,
) -> Result<Vec<(Stride, FrameBuffer)>> {
    let mut app = App::new(options);
    let scene = scene.clone();
    app.set_init_function(move |ctx| scene.register_all(ctx));
    app.start()?;

    let handle = app.stride_handle();
    let frames: Result<Vec<_>> = strides
        .into_iter()
        .map(|stride| {
            handle.set(stride);
            let buffer = render_to_buffer(&mut app)?;
            Ok((handle.get(), buffer))
        })
        .collect();
    app.shutdown();
    frames
}
