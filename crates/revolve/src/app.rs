//! Application object and frame loop.

use revolve_core::{Context, Options, Result, RevolveError, Stride, StrideHandle, TriangleSink};
use revolve_render::{FrameStats, MaterialRegistry};
use revolve_ui::ControlPanel;

use crate::recorder::RecordingSink;

/// Runs once before the first frame; creates and registers structures.
pub type InitFn = Box<dyn FnOnce(&mut Context) -> Result<()>>;

/// Runs once after init; registers controls on the panel.
pub type CtrlFn = Box<dyn FnOnce(&Context, &mut ControlPanel)>;

/// Runs every frame with the stride read at the start of that frame.
pub type DrawFn = Box<dyn FnMut(&Context, Stride, &mut dyn TriangleSink)>;

/// Runs at the start of every frame, before the UI pass.
pub type AnimFn = Box<dyn FnMut(&mut Context)>;

/// Runs once when the application shuts down, before structures are removed.
pub type ExitFn = Box<dyn FnOnce(&mut Context)>;

/// What one frame produced.
pub struct FrameOutput {
    /// The stride the frame was drawn with.
    pub stride: Stride,
    /// Triangle counts of the frame.
    pub stats: FrameStats,
    /// egui output for the window backend (shapes, cursor, repaint hints).
    pub ui: egui::FullOutput,
}

/// The revolve application state.
///
/// A frame runs the UI pass (which may move the stride), reads the stride
/// once, then calls the draw function. A stride change made during the UI
/// pass of frame `k` is therefore drawn in frame `k`, and one made by other
/// code between frames is drawn in the next frame.
pub struct App {
    context: Context,
    panel: ControlPanel,
    materials: MaterialRegistry,
    egui: egui::Context,
    init: Option<InitFn>,
    ctrl: Option<CtrlFn>,
    draw: DrawFn,
    anim: Option<AnimFn>,
    exit: Option<ExitFn>,
    started: bool,
    frame_count: u64,
    last_stats: FrameStats,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl App {
    /// Creates an application with the default control and draw functions.
    pub fn new(options: Options) -> Self {
        let panel = ControlPanel::new(options.window_title.clone());
        Self {
            context: Context::new(options),
            panel,
            materials: MaterialRegistry::new(),
            egui: egui::Context::default(),
            init: None,
            ctrl: None,
            draw: Box::new(default_draw),
            anim: None,
            exit: None,
            started: false,
            frame_count: 0,
            last_stats: FrameStats::default(),
        }
    }

    /// Sets the function run once before the first frame.
    pub fn set_init_function(
        &mut self,
        init: impl FnOnce(&mut Context) -> Result<()> + 'static,
    ) -> &mut Self {
        if self.started {
            log::warn!("init function set after start; it will not run");
        }
        self.init = Some(Box::new(init));
        self
    }

    /// Sets the function that registers controls after init.
    ///
    /// Without one, a single `step` slider over the full stride range is added.
    pub fn set_ctrl_function(
        &mut self,
        ctrl: impl FnOnce(&Context, &mut ControlPanel) + 'static,
    ) -> &mut Self {
        if self.started {
            log::warn!("control function set after start; it will not run");
        }
        self.ctrl = Some(Box::new(ctrl));
        self
    }

    /// Sets the per-frame draw function.
    ///
    /// Without one, every enabled registered structure is drawn.
    pub fn set_draw_function(
        &mut self,
        draw: impl FnMut(&Context, Stride, &mut dyn TriangleSink) + 'static,
    ) -> &mut Self {
        self.draw = Box::new(draw);
        self
    }

    /// Sets a function run at the start of every frame, before the UI pass.
    ///
    /// Use it to move things over time; a stride written here is drawn in
    /// the same frame.
    pub fn set_anim_function(&mut self, anim: impl FnMut(&mut Context) + 'static) -> &mut Self {
        self.anim = Some(Box::new(anim));
        self
    }

    /// Sets a function run once by [`App::shutdown`] while the structures
    /// are still registered.
    pub fn set_exit_function(&mut self, exit: impl FnOnce(&mut Context) + 'static) -> &mut Self {
        self.exit = Some(Box::new(exit));
        self
    }

    /// The scene state: registry, options, extents and stride.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Mutable access to the scene state, e.g. to register structures after start.
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    /// The control panel filled by the control function.
    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    /// Materials offered in the structure tree and used by headless capture.
    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }

    /// Mutable access to the materials, to register custom ones.
    pub fn materials_mut(&mut self) -> &mut MaterialRegistry {
        &mut self.materials
    }

    /// Handle to the stride shared by the controls and the draw phase.
    pub fn stride_handle(&self) -> StrideHandle {
        self.context.stride_handle()
    }

    /// Whether [`App::start`] succeeded and [`App::shutdown`] has not run since.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Number of frames drawn since start.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Runs the init then the control function.
    ///
    /// Errors from init are fatal: the application stays unstarted.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Err(RevolveError::AlreadyStarted);
        }
        log::info!(
            "starting '{}' ({}x{})",
            self.context.options.window_title,
            self.context.options.window_width,
            self.context.options.window_height
        );

        if let Some(init) = self.init.take() {
            init(&mut self.context)?;
        }
        self.context.update_extents();

        match self.ctrl.take() {
            Some(ctrl) => ctrl(&self.context, &mut self.panel),
            None => default_ctrl(&self.context, &mut self.panel),
        }

        log::info!(
            "started with {} structures, {} controls, stride {}",
            self.context.registry.len(),
            self.panel.len(),
            self.context.stride()
        );
        self.started = true;
        Ok(())
    }

    /// Runs one frame without window input.
    pub fn frame(&mut self, sink: &mut dyn TriangleSink) -> Result<FrameOutput> {
        self.frame_with_input(egui::RawInput::default(), sink)
    }

    /// Runs one frame: animation, UI pass with `input`, stride read, draw into `sink`.
    pub fn frame_with_input(
        &mut self,
        input: egui::RawInput,
        sink: &mut dyn TriangleSink,
    ) -> Result<FrameOutput> {
        if !self.started {
            return Err(RevolveError::NotStarted);
        }

        if let Some(anim) = self.anim.as_mut() {
            anim(&mut self.context);
        }
        let ui = self.build_ui(input);

        let stride = self.context.stride();
        let mut recorder = RecordingSink::new(sink);
        (self.draw)(&self.context, stride, &mut recorder);
        let stats = recorder.finish();

        self.frame_count += 1;
        self.last_stats = stats;
        log::debug!(
            "frame {}: stride {stride}, {} triangles ({} degenerate)",
            self.frame_count,
            stats.triangles,
            stats.degenerate
        );

        Ok(FrameOutput { stride, stats, ui })
    }

    /// Runs `frames` frames into `sink` and returns the stats of each.
    pub fn run_frames(
        &mut self,
        frames: usize,
        sink: &mut dyn TriangleSink,
    ) -> Result<Vec<FrameStats>> {
        (0..frames)
            .map(|_| self.frame(sink).map(|output| output.stats))
            .collect()
    }

    /// Runs the exit function, then removes every structure and control.
    ///
    /// The application can be started again afterwards.
    pub fn shutdown(&mut self) {
        if let Some(exit) = self.exit.take() {
            exit(&mut self.context);
        }
        self.context.registry.clear();
        self.context.update_extents();
        self.panel.clear();
        self.started = false;
        log::info!("shut down after {} frames", self.frame_count);
        self.frame_count = 0;
    }

    fn build_ui(&mut self, input: egui::RawInput) -> egui::FullOutput {
        let Self {
            context,
            panel,
            materials,
            egui: egui_ctx,
            last_stats,
            ..
        } = self;
        let stride = context.stride().value();
        let triangles = last_stats.triangles;
        let material_names = materials.names();
        egui_ctx.run(input, |ctx| {
            revolve_ui::build_left_panel(ctx, panel.title(), |ui| {
                panel.build_ui(ui);
                revolve_ui::build_frame_stats(ui, stride, triangles);
                ui.separator();
                revolve_ui::build_structure_tree(ui, &mut context.registry, &material_names);
                revolve_ui::build_scene_extents_section(
                    ui,
                    context.length_scale,
                    context.bounding_box,
                );
            });
        })
    }
}

fn default_ctrl(ctx: &Context, panel: &mut ControlPanel) {
    panel.add_scroll_control(
        "step",
        ctx.stride_handle(),
        Stride::range(),
        1,
        "distance in lattice points between drawn vertices",
    );
}

fn default_draw(ctx: &Context, stride: Stride, sink: &mut dyn TriangleSink) {
    ctx.draw_structures(stride, sink);
}
