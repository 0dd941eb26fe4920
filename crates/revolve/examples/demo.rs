//! Demo application showing the four classic solids.
//!
//! Usage: `demo [options.json] [scene.json]`. Without arguments the default
//! options and the cone / cylinder / sphere / torus scene are used.
//!
//! There is no window here: the demo sweeps the stride the way a user
//! dragging the `step` slider would and prints what each frame drew.

use std::path::PathBuf;

use revolve::*;

fn main() -> Result<()> {
    init_logging();

    let args: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    let options = load_options(args.first().map(PathBuf::as_path))?;
    let scene = load_scene(args.get(1).map(PathBuf::as_path))?;

    let mut app = App::new(options);
    app.set_init_function(move |ctx| scene.register_all(ctx));
    app.set_ctrl_function(|ctx, panel| {
        panel.add_scroll_control(
            "step",
            ctx.stride_handle(),
            Stride::range(),
            1,
            "distance in lattice points between drawn vertices",
        );
    });
    app.start()?;

    let handle = app.stride_handle();
    let mut buffer = FrameBuffer::new();
    for stride in Stride::range() {
        handle.set(stride);
        buffer.clear();
        let output = app.frame(&mut buffer)?;
        println!(
            "stride {:>2}: {:>6} triangles ({} degenerate), {} KiB of vertices",
            output.stride,
            output.stats.triangles,
            output.stats.degenerate,
            buffer
                .batches()
                .iter()
                .map(|b| b.as_bytes().len())
                .sum::<usize>()
                / 1024
        );
    }

    app.shutdown();
    Ok(())
}
