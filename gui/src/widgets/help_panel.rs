use eframe::egui::{self, Key, ScrollArea, Vec2, Window};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};

const HELP_TEXT: &str = r#"
# About the ciphers

All three ciphers work on uppercase A-Z text. Output is always uppercase.

## Vigenère

A polyalphabetic shift cipher. The key (letters only, at least 12 characters
here) repeats over the whole input. Non-letter characters pass through
unchanged but still consume a key position.

## Playfair

A digraph substitution cipher over a 5x5 table derived from the key.
Input is uppercased, `J` becomes `I`, spaces are removed and a trailing `X`
is appended when the length is odd. Repeated letters inside a pair (such as
`LL`) are substituted as-is; no filler letter is inserted between them.

## Hill

A matrix cipher over Z26. The key is the matrix entered below the radio
buttons, one row per line; the whole input is one block, so its letter count
must equal the matrix dimension. Decryption requires the matrix determinant
to be coprime with 26.

These ciphers are classical teaching material and provide no real-world
security.
"#;

/// F1-toggled window with a Markdown description of the three ciphers.
pub struct HelpPanel {
    visible: bool,
    cache: CommonMarkCache,
}

impl HelpPanel {
    pub fn new() -> Self {
        Self {
            visible: false,
            cache: CommonMarkCache::default(),
        }
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    pub fn render(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(Key::F1)) {
            self.toggle_visibility();
        }

        self.render_corner_hint(ctx);

        if !self.visible {
            return;
        }

        let mut open = true;
        Window::new("Help")
            .open(&mut open)
            .collapsible(false)
            .default_size(Vec2::new(500.0, 500.0))
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    CommonMarkViewer::new().show(ui, &mut self.cache, HELP_TEXT);
                });
            });

        if !open {
            self.visible = false;
        }
    }

    // "F1 - help" hint in the bottom right corner
    fn render_corner_hint(&self, ctx: &egui::Context) {
        let screen_rect = ctx.input(|i| i.screen_rect());

        let galley = ctx.fonts(|f| {
            let font_id = egui::FontId::proportional(16.0);
            f.layout_no_wrap("F1 - help".to_string(), font_id, egui::Color32::DARK_GRAY)
        });

        let text_rect = egui::Rect::from_min_size(
            egui::pos2(
                screen_rect.max.x - galley.size().x - 10.0,
                screen_rect.max.y - galley.size().y - 10.0,
            ),
            galley.size(),
        );

        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("help_text"),
        ));

        painter.galley(text_rect.min, galley, egui::Color32::DARK_GRAY);
    }
}
