//! Borderless desktop window

pub mod display;
pub mod input;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use egui::{CentralPanel, Frame, ProgressBar, RichText, ViewportCommand};
use tracing::{error, info};

use crate::audio::Beeper;
use crate::config::Config;
use crate::display::{Position, TickId};
use crate::error::{Error, Result};
use crate::timer::{Controller, Flow, Input};

use display::{WindowDisplay, color32};

type FatalSlot = Rc<RefCell<Option<Error>>>;

pub struct ZenFocusApp {
    controller: Controller<WindowDisplay>,
    config: Config,
    fatal: FatalSlot,
}

impl ZenFocusApp {
    fn new(
        cc: &eframe::CreationContext<'_>,
        config: Config,
        beeper: Beeper,
        fatal: FatalSlot,
    ) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        let display = WindowDisplay::new(cc.egui_ctx.clone(), beeper);
        Self {
            controller: Controller::new(config.clone(), display),
            config,
            fatal,
        }
    }

    fn dispatch(
        &mut self,
        ctx: &egui::Context,
        queued: Vec<Input>,
        due: Vec<TickId>,
    ) {
        match self.controller.handle_frame(queued, due) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => ctx.send_viewport_cmd(ViewportCommand::Close),
            Err(err) => {
                error!(%err, "collaborator failure, closing");
                *self.fatal.borrow_mut() = Some(err);
                ctx.send_viewport_cmd(ViewportCommand::Close);
            }
        }
    }

    fn draw(&self, ctx: &egui::Context) {
        let surface = self.controller.display().surface();
        let window = &self.config.window;
        let palette = &self.config.palette;

        CentralPanel::default()
            .frame(Frame::NONE.fill(color32(surface.background)))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.15);
                    ui.label(
                        RichText::new(&surface.time_text)
                            .size(window.timer_font_size)
                            .strong()
                            .color(color32(surface.time_color)),
                    );
                    ui.add_space(10.0);
                    ui.add(
                        ProgressBar::new(surface.progress as f32)
                            .desired_width(window.progress_width)
                            .desired_height(window.progress_height)
                            .fill(color32(palette.progress)),
                    );
                    if surface.helper_visible {
                        ui.add_space(30.0);
                        ui.label(
                            RichText::new(self.config.helper_text)
                                .size(window.helper_font_size)
                                .color(color32(palette.helper_text)),
                        );
                    }
                });
            });
    }
}

impl eframe::App for ZenFocusApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(rect) = ctx.input(|i| i.viewport().outer_rect) {
            self.controller
                .display_mut()
                .sync_position(Position::new(rect.min.x, rect.min.y));
        }

        let queued = input::collect(ctx);
        let due = self.controller.display_mut().take_due(Instant::now());
        self.dispatch(ctx, queued, due);

        self.draw(ctx);

        if let Some(wait) = self
            .controller
            .display()
            .time_until_next_tick(Instant::now())
        {
            ctx.request_repaint_after(wait);
        }
    }
}

/// Open the window and run until the user quits
pub fn run(config: Config) -> Result<()> {
    let beeper = Beeper::open()?;
    let fatal = FatalSlot::default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title)
            .with_inner_size([config.window.width, config.window.height])
            .with_decorations(false),
        centered: true,
        ..Default::default()
    };

    info!(total_seconds = config.total_seconds.get(), "opening window");
    let title = config.window.title;
    let app_fatal = Rc::clone(&fatal);
    eframe::run_native(
        title,
        options,
        Box::new(move |cc| {
            Ok(Box::new(ZenFocusApp::new(cc, config, beeper, app_fatal)))
        }),
    )
    .map_err(|err| Error::Window(err.to_string()))?;

    match fatal.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
