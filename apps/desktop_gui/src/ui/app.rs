use std::time::Duration;

use client_core::{CardDeckController, NO_CARDS_NOTICE};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::reduce;

const CARD_HEIGHT: f32 = 240.0;
const CARD_PADDING: f32 = 16.0;
const MIN_CARD_SQUASH: f32 = 0.05;
const CONTENT_MAX_WIDTH: f32 = 560.0;
const KNOWN_COLOR: egui::Color32 = egui::Color32::from_rgb(46, 160, 67);
const UNKNOWN_COLOR: egui::Color32 = egui::Color32::from_rgb(218, 54, 51);

pub struct FlashcardsApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    controller: CardDeckController,
    api_url: String,
    status: String,
    notice: Option<String>,
}

impl FlashcardsApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>, api_url: String) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            controller: CardDeckController::new(),
            api_url,
            status: "Loading flashcards...".to_string(),
            notice: None,
        };
        app.dispatch(BackendCommand::FetchAll);
        app
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            if let Some(cmd) = reduce(&mut self.controller, &mut self.status, event) {
                self.dispatch(cmd);
            }
        }
    }

    fn show_card(&mut self, ui: &mut egui::Ui) {
        let Some(card) = self.controller.current().cloned() else {
            ui.add_space(CARD_HEIGHT / 2.0);
            ui.label(egui::RichText::new(NO_CARDS_NOTICE).size(18.0));
            return;
        };

        // 0.0 = question up, 1.0 = answer up; the face swaps halfway through.
        let flip = ui
            .ctx()
            .animate_bool(egui::Id::new("flashcard_flip"), self.controller.is_flipped());
        let (text, fill) = if flip < 0.5 {
            (&card.question, ui.visuals().extreme_bg_color)
        } else {
            (&card.answer, ui.visuals().selection.bg_fill)
        };
        let width = ui.available_width();

        // The full-width slot stays put so the layout below doesn't jump;
        // only the painted card narrows, clipping its text.
        let (slot, response) =
            ui.allocate_exact_size(egui::vec2(width, CARD_HEIGHT), egui::Sense::click());
        if ui.is_rect_visible(slot) {
            let card_rect = flip_card_rect(slot, flip);
            let painter = ui.painter_at(card_rect);
            painter.rect_filled(card_rect, 12.0, fill);
            let text_color = ui.visuals().strong_text_color();
            let galley = painter.layout(
                text.clone(),
                egui::FontId::proportional(22.0),
                text_color,
                (width - 2.0 * CARD_PADDING).max(1.0),
            );
            let text_pos = card_rect.center() - galley.size() / 2.0;
            painter.galley(text_pos, galley, text_color);
        }
        if response
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .on_hover_text("Click to flip")
            .clicked()
        {
            self.controller.toggle_flip();
        }

        let mut position = format!(
            "{} / {}",
            self.controller.cursor() + 1,
            self.controller.deck().len()
        );
        if self.controller.is_reviewing() {
            position.push_str(" (reviewing unknown cards)");
        }
        ui.weak(position);
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("← Prev").clicked() {
                self.controller.prev();
            }
            if ui
                .button(egui::RichText::new("Known").color(KNOWN_COLOR))
                .clicked()
            {
                self.controller.mark_known(card.id.clone());
            }
            if ui
                .button(egui::RichText::new("Unknown").color(UNKNOWN_COLOR))
                .clicked()
            {
                self.controller.mark_unknown(card.id.clone());
            }
            if ui.button("Next →").clicked() {
                self.controller.next();
            }
        });

        if ui
            .button(egui::RichText::new("Delete").color(UNKNOWN_COLOR))
            .clicked()
        {
            self.dispatch(BackendCommand::DeleteCard {
                id: card.id.clone(),
            });
        }
    }

    fn show_add_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Add New Flashcard");
        ui.add_space(6.0);

        let draft = self.controller.draft_mut();
        ui.add(
            egui::TextEdit::singleline(&mut draft.question)
                .hint_text("Question")
                .desired_width(f32::INFINITY),
        );
        ui.add(
            egui::TextEdit::singleline(&mut draft.answer)
                .hint_text("Answer")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        let button_size = egui::vec2(ui.available_width(), 32.0);
        if ui
            .add_sized(button_size, egui::Button::new("Add Flashcard"))
            .clicked()
        {
            let request = self.controller.draft().to_request();
            self.dispatch(BackendCommand::CreateCard { request });
        }
        if ui
            .add_sized(button_size, egui::Button::new("Review Unknown Cards"))
            .clicked()
        {
            self.controller.review_unknown();
            if let Some(notice) = self.controller.take_notice() {
                self.notice = Some(notice);
            }
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.notice.clone() else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(notice);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.notice = None;
        }
    }
}

/// Card outline for a flip progress in `0.0..=1.0`: full width at either
/// end, collapsing to a sliver around the midpoint where the face swaps.
fn flip_card_rect(slot: egui::Rect, flip: f32) -> egui::Rect {
    let squash = (1.0 - 2.0 * flip).abs().max(MIN_CARD_SQUASH);
    egui::Rect::from_center_size(
        slot.center(),
        egui::vec2(slot.width() * squash, slot.height()),
    )
}

impl eframe::App for FlashcardsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak(self.api_url.as_str());
                ui.separator();
                ui.label(self.status.as_str());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.set_max_width(CONTENT_MAX_WIDTH);
                    ui.add_space(16.0);
                    ui.heading("Flashcard App");
                    ui.add_space(16.0);

                    self.show_card(ui);

                    ui.add_space(16.0);
                    ui.label(self.controller.counts().to_string());
                    ui.add_space(24.0);

                    self.show_add_form(ui);
                });
            });
        });

        self.show_notice(ctx);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(500.0, CARD_HEIGHT))
    }

    #[test]
    fn card_is_full_width_when_settled() {
        assert_eq!(flip_card_rect(slot(), 0.0), slot());
        assert_eq!(flip_card_rect(slot(), 1.0), slot());
    }

    #[test]
    fn card_narrows_below_text_width_mid_flip() {
        let quarter = flip_card_rect(slot(), 0.25);
        assert!((quarter.width() - 250.0).abs() < 1e-3);
        assert_eq!(quarter.center(), slot().center());

        let middle = flip_card_rect(slot(), 0.5);
        assert!((middle.width() - 500.0 * MIN_CARD_SQUASH).abs() < 1e-3);
        assert_eq!(middle.height(), CARD_HEIGHT);
    }
}
