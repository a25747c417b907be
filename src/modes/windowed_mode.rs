use softbuffer::{Context, Surface};

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    platform::{
        modifier_supplement::KeyEventExtModifierSupplement, wayland::WindowAttributesExtWayland,
    },
    window::{Theme, Window, WindowId},
};

use std::{
    num::NonZeroU32,
    sync::mpsc::{self, SyncSender},
    thread,
};

use crate::data::{
    log::format_red, Command, Program, RefreshRateMode, CAP_MILLI_HZ, MAX_HEIGHT, MAX_WIDTH,
};

type WindowSurface = Surface<&'static Window, &'static Window>;

struct WindowState {
    pub prog: Program,
    pub window: Option<&'static Window>,
    pub surface: Option<WindowSurface>,
    pub exit_sender: Option<SyncSender<()>>,
    pub final_buffer_size: PhysicalSize<u32>,
}

impl ApplicationHandler for WindowState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // the startup state counts as the first update
        self.prog.print_readout();

        let scale = self.prog.scale() as u32;
        let win_size = PhysicalSize::<u32>::new(
            self.prog.pix.width() as u32 * scale,
            self.prog.pix.height() as u32 * scale,
        );

        let window_attributes = Window::default_attributes()
            .with_title("driftvis")
            .with_inner_size(win_size)
            .with_transparent(false)
            .with_resizable(true)
            .with_name("driftvis", "driftvis")
            .with_theme(Some(Theme::Dark));

        // The window is leaked into a static reference so the surface
        // and the redraw thread can borrow it. resumed() must therefore
        // never run twice.
        match self.window {
            None => {
                self.window = Some(Box::leak(Box::new(
                    event_loop.create_window(window_attributes).unwrap(),
                )))
            }

            Some(_) => panic!("Resume being called the 2nd time!"),
        }

        let window = self
            .window
            .expect("Window unwraps to none. This error should never happen!");

        let size = window.inner_size();
        self.final_buffer_size = size;

        self.surface = {
            let context = Context::new(window).unwrap();
            let mut surface = Surface::new(&context, window).unwrap();

            Self::resize_surface(&mut surface, size.width, size.height);

            Some(surface)
        };

        if self.prog.refresh_rate_mode != RefreshRateMode::Specified {
            Self::check_refresh_rate(window, &mut self.prog);
        }

        let (exit_send, exit_recv) = mpsc::sync_channel(1);

        self.exit_sender = Some(exit_send);

        let interval = self.prog.refresh_rate;

        // Thread to control requesting redraws.
        let _ = thread::Builder::new().stack_size(1024).spawn(move || loop {
            if exit_recv.recv_timeout(interval).is_ok() {
                break;
            }

            if !window.is_minimized().unwrap_or(false) {
                window.request_redraw();
            }
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Focused(_) => {
                if let Some(w) = self.window.as_ref() {
                    w.request_redraw()
                }
            }

            WindowEvent::Occluded(b) => {
                self.prog.eval_command(&Command::Hidden(b));
            }

            WindowEvent::Resized(PhysicalSize { width, height }) => {
                let Some(surface) = self.surface.as_mut() else {
                    self.prog
                        .print_message("driftvis is unable to resize the buffer!\n".to_string());
                    return;
                };

                let scale = self.prog.scale() as u16;

                let w = u16::min(MAX_WIDTH, width as u16);
                let h = u16::min(MAX_HEIGHT, height as u16);

                if w == MAX_WIDTH || h == MAX_HEIGHT {
                    self.prog.print_message(format_red!(
                        "You are hitting the resolution limit of driftvis!\n"
                    ));
                }

                // the scene is rebuilt from scratch here; no motion
                // carries across a resize
                self.prog.update_size((w / scale, h / scale));

                let (w, h) = (w as u32, h as u32);

                self.final_buffer_size.width = w;
                self.final_buffer_size.height = h;

                Self::resize_surface(surface, w, h);

                if let Ok(mut buffer) = surface.buffer_mut() {
                    buffer.fill(0x0);
                }
            }

            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed && !event.repeat =>
            {
                let cmd = match event.key_without_modifiers().as_ref() {
                    Key::Named(NamedKey::Escape) => {
                        event_loop.exit();
                        Command::Blank
                    }

                    Key::Named(NamedKey::Space) => Command::TogglePause,

                    Key::Character("1") => Command::SelectSlider(0),
                    Key::Character("2") => Command::SelectSlider(1),
                    Key::Character("3") => Command::SelectSlider(2),

                    Key::Character("-") => Command::SliderDown,
                    Key::Character("=") => Command::SliderUp,

                    Key::Character("/") => Command::ResetSliders,

                    Key::Character("q") => Command::TogglePanel(0),
                    Key::Character("w") => Command::TogglePanel(1),
                    Key::Character("e") => Command::TogglePanel(2),
                    Key::Character("r") => Command::TogglePanel(3),

                    _ => Command::Blank,
                };

                if self.prog.eval_command(&cmd) {
                    if let Some(w) = self.window.as_ref() {
                        w.request_redraw()
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(window) = self.window.as_ref() else {
                    return;
                };

                if self.prog.is_hidden() {
                    return;
                }

                self.prog.tick();
                self.prog.render();

                if let Some(Ok(mut buffer)) = self.surface.as_mut().map(|s| s.buffer_mut()) {
                    self.prog.pix.scale_to(
                        self.prog.scale() as usize,
                        &mut buffer,
                        Some(self.final_buffer_size.width as usize),
                    );

                    window.pre_present_notify();
                    if let Err(e) = buffer.present() {
                        self.prog.print_message(format!(
                            "driftvis is failing to present buffers to the window: {e}.\n"
                        ));
                    }
                }
            }

            _ => {}
        }
    }
}

impl WindowState {
    fn resize_surface(surface: &mut WindowSurface, w: u32, h: u32) {
        surface
            .resize(
                NonZeroU32::new(w).expect("Surface width is zero"),
                NonZeroU32::new(h).expect("Surface height is zero"),
            )
            .expect("Failed to resize surface buffer");
    }

    fn check_refresh_rate(window: &Window, prog: &mut Program) {
        let Some(Some(mut milli_hz)) = window
            .current_monitor()
            .map(|m| m.refresh_rate_millihertz())
        else {
            prog.print_message("driftvis is unable to query your monitor's refresh rate.\n".to_string());
            return;
        };

        if milli_hz == prog.get_milli_hz() {
            return;
        }

        if milli_hz > CAP_MILLI_HZ {
            milli_hz = CAP_MILLI_HZ;
        }

        prog.print_message(format!(
            "Following the monitor at {}hz. Run with --fps to lock the rate.\n",
            milli_hz as f32 / 1000.0
        ));

        prog.change_fps_frac(milli_hz);
    }
}

pub fn winit_main(prog: Program) {
    let event_loop = EventLoop::new().unwrap();

    let mut state = WindowState {
        prog,
        window: None,
        surface: None,
        exit_sender: None,
        final_buffer_size: PhysicalSize::<u32>::new(0, 0),
    };

    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut state).unwrap();
    state.exit_sender.as_ref().map(|x| x.send(()));
}
