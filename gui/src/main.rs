mod scenes;
mod widgets;

use std::time::Instant;

use crate::scenes::MainContentState;
use crate::widgets::help_panel::HelpPanel;
use eframe::egui;
use eframe::egui::{CentralPanel, Color32, Frame, Margin, Vec2};

pub struct App {
    last_render: Instant,
    help_panel: HelpPanel,
    main_content: MainContentState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            last_render: Instant::now(),
            help_panel: HelpPanel::new(),
            main_content: MainContentState::setup(),
        }
    }

    pub(crate) fn update(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        Frame::default()
            .outer_margin(Margin::same(30))
            .inner_margin(Margin::same(15))
            .show(ui, |ui| self.main_content.render(ui, ctx));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        log::trace!(
            "Frame rendering time: {}",
            self.last_render.elapsed().as_millis()
        );

        // Redefine frame for some custom properties with light theme
        let my_frame = Frame {
            fill: Color32::from_rgb(248, 248, 248),
            shadow: eframe::epaint::Shadow::NONE,
            inner_margin: Margin::same(0),
            ..Default::default()
        };

        CentralPanel::default().frame(my_frame).show(ctx, |ui| {
            self.update(ui, ctx);
        });

        // Render help panel on top of other UI elements
        self.help_panel.render(ctx);

        self.last_render = Instant::now();
    }
}

fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::init();

    let window_size = Vec2::new(900.0, 760.0);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(window_size),
        ..Default::default()
    };

    let app = App::new();
    eframe::run_native(
        "Ciphers: Vigenère, Playfair, Hill",
        options,
        Box::new(move |ctx| {
            let mut visuals = egui::Visuals::light();
            visuals.override_text_color = Some(Color32::BLACK);
            visuals.panel_fill = Color32::from_rgb(248, 248, 248);
            visuals.window_fill = Color32::from_rgb(255, 255, 255);
            visuals.extreme_bg_color = Color32::from_rgb(240, 240, 240);

            ctx.egui_ctx.set_visuals(visuals);

            Ok(Box::new(app))
        }),
    )
}
