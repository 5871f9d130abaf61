use crate::widgets::error_popup::ErrorPopup;

use classical_crypto::errors::ClassicalCryptoError;
use classical_crypto::ring::Matrix;
use classical_crypto::{hill, playfair, vigenere};
use eframe::egui;
use eframe::egui::{Color32, FontId, RichText, ScrollArea, TextEdit, Ui, Vec2};

/// Shell-level input gate: text keys shorter than this never reach the core.
pub const MIN_KEY_LENGTH: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CipherChoice {
    Vigenere,
    Playfair,
    Hill,
}

#[derive(Clone, Copy, Debug)]
enum Operation {
    Encrypt,
    Decrypt,
}

pub struct MainContentState {
    cipher: CipherChoice,
    input_text: String,
    key_text: String,
    matrix_text: String,
    output_text: String,
    error_popup: ErrorPopup,
}

impl MainContentState {
    pub fn setup() -> Self {
        Self {
            cipher: CipherChoice::Vigenere,
            input_text: String::new(),
            key_text: String::new(),
            // The classical worked example key; editable by the user.
            matrix_text: "6 24 1\n13 16 10\n20 17 15".to_string(),
            output_text: String::new(),
            error_popup: ErrorPopup::new(),
        }
    }

    pub fn render(&mut self, ui: &mut Ui, ctx: &egui::Context) {
        self.error_popup.update(ctx);

        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical(|ui| {
                ui.heading(RichText::new("Ciphers: Vigenère, Playfair, Hill").size(24.0));
                ui.add_space(15.0);

                self.render_input_section(ui);
                ui.add_space(15.0);
                self.render_key_section(ui);
                ui.add_space(15.0);
                self.render_action_buttons(ui);
                ui.add_space(15.0);
                self.render_output_section(ui);
            });
        });
    }

    fn render_input_section(&mut self, ui: &mut Ui) {
        ui.label(
            RichText::new("Input Text")
                .size(14.0)
                .color(Color32::DARK_GRAY),
        );
        ui.add_space(5.0);
        ui.add_sized(
            Vec2::new(ui.available_width(), 90.0),
            TextEdit::multiline(&mut self.input_text)
                .font(FontId::monospace(14.0))
                .hint_text("Type the plaintext or ciphertext here, or upload a file"),
        );

        ui.add_space(8.0);
        if ui
            .add_sized(
                Vec2::new(120.0, 26.0),
                egui::Button::new(RichText::new("Upload File").size(14.0)),
            )
            .clicked()
        {
            self.handle_upload();
        }
    }

    fn render_key_section(&mut self, ui: &mut Ui) {
        ui.label(
            RichText::new(format!("Key (min {} characters)", MIN_KEY_LENGTH))
                .size(14.0)
                .color(Color32::DARK_GRAY),
        );
        ui.add_space(5.0);
        ui.add_sized(
            Vec2::new(ui.available_width(), 24.0),
            TextEdit::singleline(&mut self.key_text).font(FontId::monospace(14.0)),
        );

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.radio_value(&mut self.cipher, CipherChoice::Vigenere, "Vigenère Cipher");
            ui.radio_value(&mut self.cipher, CipherChoice::Playfair, "Playfair Cipher");
            ui.radio_value(&mut self.cipher, CipherChoice::Hill, "Hill Cipher");
        });

        if self.cipher == CipherChoice::Hill {
            ui.add_space(10.0);
            ui.label(
                RichText::new("Key matrix (one row per line, integers separated by spaces)")
                    .size(14.0)
                    .color(Color32::DARK_GRAY),
            );
            ui.add_space(5.0);
            ui.add_sized(
                Vec2::new(ui.available_width(), 70.0),
                TextEdit::multiline(&mut self.matrix_text).font(FontId::monospace(14.0)),
            );
        }
    }

    fn render_action_buttons(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui
                .add_sized(
                    Vec2::new(120.0, 30.0),
                    egui::Button::new(RichText::new("Encrypt").size(16.0)),
                )
                .clicked()
            {
                self.handle_operation(Operation::Encrypt);
            }
            if ui
                .add_sized(
                    Vec2::new(120.0, 30.0),
                    egui::Button::new(RichText::new("Decrypt").size(16.0)),
                )
                .clicked()
            {
                self.handle_operation(Operation::Decrypt);
            }
        });
    }

    fn render_output_section(&mut self, ui: &mut Ui) {
        ui.label(
            RichText::new("Output Text")
                .size(14.0)
                .color(Color32::DARK_GRAY),
        );
        ui.add_space(5.0);
        ui.add_sized(
            Vec2::new(ui.available_width(), 90.0),
            TextEdit::multiline(&mut self.output_text).font(FontId::monospace(14.0)),
        );

        if !self.output_text.is_empty() {
            ui.add_space(8.0);
            if ui
                .add_sized(
                    Vec2::new(100.0, 25.0),
                    egui::Button::new(RichText::new("Copy").size(14.0)),
                )
                .clicked()
            {
                ui.output_mut(|o| o.copied_text = self.output_text.clone());
            }
        }
    }

    fn handle_upload(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Text files", &["txt"])
            .pick_file()
        else {
            return;
        };

        match std::fs::read_to_string(&path) {
            Ok(data) => {
                log::debug!("Loaded {} bytes from {}", data.len(), path.display());
                self.input_text = data;
            }
            Err(e) => {
                self.error_popup
                    .show_error_timed(format!("Failed to read {}: {}", path.display(), e), 5.0);
            }
        }
    }

    // The single dispatch point: picks one cipher module by user selection.
    fn handle_operation(&mut self, operation: Operation) {
        let input = self.input_text.trim().to_string();
        let key = self.key_text.trim().to_string();

        // The Hill key is the matrix field, so the text-key gate only
        // applies to the letter-keyed ciphers.
        if self.cipher != CipherChoice::Hill && key.chars().count() < MIN_KEY_LENGTH {
            self.error_popup.show_error_timed(
                format!("Key must be at least {} characters long.", MIN_KEY_LENGTH),
                5.0,
            );
            return;
        }

        let result = match (self.cipher, operation) {
            (CipherChoice::Vigenere, Operation::Encrypt) => vigenere::encrypt(&input, &key),
            (CipherChoice::Vigenere, Operation::Decrypt) => vigenere::decrypt(&input, &key),
            (CipherChoice::Playfair, Operation::Encrypt) => playfair::encrypt(&input, &key),
            (CipherChoice::Playfair, Operation::Decrypt) => playfair::decrypt(&input, &key),
            (CipherChoice::Hill, _) => match self.parse_matrix() {
                Ok(matrix) => match operation {
                    Operation::Encrypt => hill::encrypt(&input, &matrix),
                    Operation::Decrypt => hill::decrypt(&input, &matrix),
                },
                Err(message) => {
                    self.error_popup.show_error_timed(message, 5.0);
                    return;
                }
            },
        };

        match result {
            Ok(output) => {
                log::debug!(
                    "{:?} {:?}: {} input chars, {} output chars",
                    operation,
                    self.cipher,
                    input.len(),
                    output.len()
                );
                self.output_text = output;
            }
            Err(e) => {
                self.error_popup.show_error_timed(describe_error(&e), 5.0);
            }
        }
    }

    fn parse_matrix(&self) -> Result<Matrix, String> {
        let matrix: Matrix = self
            .matrix_text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|token| token.parse::<i64>())
                    .collect::<Result<Vec<i64>, _>>()
            })
            .collect::<Result<Matrix, _>>()
            .map_err(|_| "Key matrix entries must be integers separated by spaces.".to_string())?;

        if matrix.is_empty() {
            return Err("Key matrix must have at least one row.".to_string());
        }

        Ok(matrix)
    }
}

fn describe_error(error: &ClassicalCryptoError) -> String {
    match error {
        ClassicalCryptoError::InvalidKey(message) => {
            format!("Invalid key: {}", message)
        }
        ClassicalCryptoError::InvalidCiphertext(message) => {
            format!("Invalid ciphertext: {}", message)
        }
        ClassicalCryptoError::InvalidBlockLength(message) => {
            format!("Wrong input length: {}", message)
        }
        ClassicalCryptoError::SingularKey(message) => {
            format!("Key matrix is not invertible mod 26: {}", message)
        }
        ClassicalCryptoError::UnsupportedCharacter(ch) => {
            format!("Character '{}' is not part of the cipher alphabet.", ch)
        }
        ClassicalCryptoError::DimensionMismatch(message) => {
            format!("Key matrix shape error: {}", message)
        }
        other => format!("Cipher error: {}", other),
    }
}
