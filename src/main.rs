use clap::Parser;
use log::{error, info};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use wavefolio::cli::Cli;
use wavefolio::config::Settings;
use wavefolio::core::canvas_layer::Canvas;
use wavefolio::core::clock::Clock;
use wavefolio::core::controller::InputEvent;
use wavefolio::core::display_context::DisplayContext;
use wavefolio::core::input_adapter::WinitInputAdapter;
use wavefolio::core::surface_renderer::{DisplayUniform, SurfaceRenderer};
use wavefolio::core::timer::FixedHz;
use wavefolio::nav::{
    Dispatch, GestureRecognizer, InputSource, NavCommand, NavEvent, SectionNavigator, SectionScroller,
};
use wavefolio::overlay::{Overlay, OverlayAction, OverlayView};
use wavefolio::presentation::SectionPresenter;
use wavefolio::theme::Theme;
use wavefolio::wave::{FrameStats, WaveEngine};

/// How often the FPS figure refreshes
const FPS_UPDATE_HZ: f32 = 1.0;

/// Window-bound resources, dropped together on shutdown
struct Graphics {
    window: Arc<Window>,
    renderer: SurfaceRenderer,
    overlay: Option<Overlay>,
}

struct App {
    cli: Cli,
    settings: Settings,
    graphics: Option<Graphics>,
    running: bool,
    clock: Clock,
    fps_timer: FixedHz,
    frame_count: u32,
    fps_elapsed: f32,
    fps: f32,
    theme: Theme,
    engine: WaveEngine,
    canvas: Canvas,
    input: WinitInputAdapter,
    gestures: GestureRecognizer,
    navigator: SectionNavigator,
    scroller: SectionScroller,
    presenter: SectionPresenter,
    last_stats: FrameStats,
}

impl App {
    fn new(cli: Cli, settings: Settings) -> Self {
        let display = DisplayContext::new(settings.window.width, settings.window.height);
        let theme = Theme::new(settings.dark_mode);
        let navigator = SectionNavigator::new(&settings.navigation);
        let presenter = SectionPresenter::new(&navigator.snapshot());

        Self {
            engine: WaveEngine::new(&settings.animation, display, theme, settings.smooth_transition),
            canvas: Canvas::new(display.width, display.height),
            input: WinitInputAdapter::new(settings.navigation.line_height),
            gestures: GestureRecognizer::new(&settings.navigation),
            scroller: SectionScroller::new(&settings.navigation),
            navigator,
            presenter,
            theme,
            graphics: None,
            running: true,
            clock: Clock::new(),
            fps_timer: FixedHz::new(FPS_UPDATE_HZ),
            frame_count: 0,
            fps_elapsed: 0.0,
            fps: 0.0,
            last_stats: FrameStats::default(),
            cli,
            settings,
        }
    }

    fn display_uniform(&self) -> DisplayUniform {
        DisplayUniform::new(self.theme.background(), self.settings.animation.opacity)
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_elapsed += delta;

        if self.fps_timer.tick(delta) {
            self.fps = self.frame_count as f32 / self.fps_elapsed.max(f32::EPSILON);
            if !self.cli.no_ui {
                info!("FPS: {:.1}", self.fps);
            }
            self.frame_count = 0;
            self.fps_elapsed = 0.0;
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.engine.set_theme(self.theme);
        if let Some(graphics) = &self.graphics {
            graphics.renderer.set_display(self.display_uniform());
        }
        info!("switched to {} mode", self.theme.name());
    }

    fn navigate(&mut self, command: NavCommand, source: InputSource) {
        if let Dispatch::Accepted { from, to, .. } = self.navigator.dispatch(command, source) {
            self.presenter.sync(&self.navigator.snapshot());
            log::trace!("accepted {from} -> {to}");
        }
    }

    fn handle_input(&mut self, event_loop: &ActiveEventLoop, input: InputEvent) {
        match input {
            InputEvent::Quit => self.shutdown(event_loop),
            InputEvent::ToggleTheme => self.toggle_theme(),
            gesture if gesture.is_gesture() => {
                if let Some((command, source)) = self.gestures.recognize(&gesture, self.navigator.is_cooling()) {
                    self.navigate(command, source);
                }
            }
            _ => {}
        }
    }

    fn handle_nav_event(&mut self, event: NavEvent) {
        if let NavEvent::SectionCommitted { section, .. } = event {
            self.scroller.scroll_to(section);
        }
        self.presenter.sync(&self.navigator.snapshot());
    }

    fn frame(&mut self) {
        let timing = self.clock.tick();
        self.update_fps(timing.delta);

        for event in self.navigator.tick(timing.delta) {
            self.handle_nav_event(event);
        }
        self.scroller.tick(timing.delta);
        self.presenter.tick(timing.delta);

        let snapshot = self.navigator.snapshot();
        self.last_stats = self.engine.step(snapshot.active, &mut self.canvas);

        let Some(graphics) = self.graphics.as_mut() else {
            return;
        };

        let mut actions = Vec::new();
        let overlay_frame = match graphics.overlay.as_mut() {
            Some(overlay) => {
                overlay.tick(timing.delta);
                let visuals = self.presenter.visuals();
                let view = OverlayView {
                    visuals: &visuals,
                    nav: snapshot,
                    scroll: self.scroller.position(),
                    theme: self.theme,
                    loading: overlay.is_loading(),
                    show_stats: self.settings.show_stats,
                    fps: self.fps,
                    stats: self.last_stats,
                };
                let (frame, requested) = overlay.run(&graphics.window, &view);
                actions = requested;
                Some(frame)
            }
            None => None,
        };

        if let Err(e) = graphics.renderer.present(self.canvas.pixels(), overlay_frame) {
            error!("Render error: {}", e);
        }

        for action in actions {
            match action {
                OverlayAction::Advance => self.navigate(NavCommand::Advance, InputSource::Pointer),
                OverlayAction::ToggleTheme => self.toggle_theme(),
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Some(graphics) = self.graphics.as_mut() {
            graphics.renderer.resize(width, height);
        }
        self.engine.resize(DisplayContext::new(width, height));
    }

    /// Stop frame scheduling, drop pending timers and release the surface
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.running = false;
        self.navigator.cancel();
        self.scroller.cancel();
        self.graphics = None;
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.settings.window.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.settings.window.width,
                    self.settings.window.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(SurfaceRenderer::new(window.clone(), self.display_uniform())) {
            Ok(renderer) => renderer,
            Err(e) => {
                error!("Failed to initialize renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        let (width, height) = renderer.dimensions();
        self.engine.resize(DisplayContext::new(width, height));

        let overlay = (!self.cli.no_ui)
            .then(|| Overlay::new(&window, self.settings.navigation.loading_duration));

        self.graphics = Some(Graphics {
            window,
            renderer,
            overlay,
        });
        self.clock.reset();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let Some(graphics) = self.graphics.as_mut() {
            if let Some(overlay) = graphics.overlay.as_mut() {
                let consumed = overlay.on_window_event(&graphics.window, &event);
                let always_ours = matches!(
                    event,
                    WindowEvent::CloseRequested | WindowEvent::Resized(_) | WindowEvent::RedrawRequested
                );
                if consumed && !always_ours {
                    return;
                }
            }
        }

        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),
            WindowEvent::Resized(size) => self.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                if self.running {
                    self.frame();
                }
            }
            other => {
                if let Some(input) = self.input.translate(&other) {
                    self.handle_input(event_loop, input);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if !self.running {
            return;
        }
        if let Some(graphics) = &self.graphics {
            graphics.window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli)?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    if !cli.no_ui {
        println!("wavefolio - Controls: wheel, swipe, PageUp/PageDown, arrows, Home/End; T toggles theme; Escape quits");
    }

    let mut app = App::new(cli, settings);
    event_loop.run_app(&mut app)?;

    Ok(())
}
