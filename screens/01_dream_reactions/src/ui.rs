//! UI module for the Dream Reactions screen
//!
//! Side panel with picker tuning, the reaction tally and the activity log,
//! using egui. The panel is disabled while the wheel holds the chrome lock.

use nannou_egui::egui;
use shared::{find_reaction, PickerConfig, ReactionOption};

use crate::ActivityEntry;

/// Result of side panel interactions
#[derive(Default)]
pub struct SidePanelResult {
    /// Any picker tuning value changed
    pub config_changed: bool,
    /// Dead zone outline toggled
    pub dead_zone_changed: bool,
    /// Reset to defaults requested
    pub reset: bool,
}

/// Draw the side panel (right)
#[allow(clippy::too_many_arguments)]
pub fn draw_side_panel(
    ctx: &egui::Context,
    config: &mut PickerConfig,
    show_dead_zone: &mut bool,
    options: &[ReactionOption],
    tally: &[u32],
    activity: &[ActivityEntry],
    locked: bool,
    width: f32,
) -> SidePanelResult {
    let mut result = SidePanelResult::default();

    egui::SidePanel::right("reaction_panel")
        .resizable(false)
        .default_width(width)
        .show(ctx, |ui| {
            ui.add_enabled_ui(!locked, |ui| {
                ui.add_space(8.0);
                ui.heading("Wheel");

                let old = config.clone();

                ui.horizontal(|ui| {
                    ui.label("Dead zone:");
                    let radius = egui::Slider::new(&mut config.activation_radius, 0.0..=80.0);
                    ui.add(radius.suffix(" px"))
                        .on_hover_text("Minimum drag distance before a reaction is selected");
                });
                ui.horizontal(|ui| {
                    ui.label("Hold delay:");
                    ui.add(egui::Slider::new(&mut config.hold_delay_ms, 0..=500).suffix(" ms"))
                        .on_hover_text("How long to hold before the wheel opens");
                });
                ui.checkbox(&mut config.haptics, "Pulse on hover")
                    .on_hover_text("Briefly enlarge a reaction when the pointer enters it");
                ui.checkbox(&mut config.anchor_on_press, "Center on press point")
                    .on_hover_text("Otherwise the wheel centers on the trigger");

                if *config != old {
                    result.config_changed = true;
                }

                if ui.checkbox(show_dead_zone, "Show dead zone (D)").changed() {
                    result.dead_zone_changed = true;
                }

                if ui.button("Reset to defaults").clicked() {
                    result.reset = true;
                }

                ui.separator();
                ui.heading("Reactions");

                egui::Grid::new("tally_grid").num_columns(3).show(ui, |ui| {
                    for (option, count) in options.iter().zip(tally) {
                        ui.label(option.glyph.as_str());
                        ui.label(option.label.as_str());
                        ui.label(count.to_string());
                        ui.end_row();
                    }
                });

                ui.separator();
                ui.heading("Activity");

                if activity.is_empty() {
                    ui.label(
                        egui::RichText::new("No reactions yet")
                            .color(egui::Color32::from_rgb(150, 144, 172)),
                    );
                }

                egui::ScrollArea::vertical()
                    .max_height(220.0)
                    .show(ui, |ui| {
                        for entry in activity {
                            let label = find_reaction(options, &entry.reaction_id)
                                .map(|o| format!("{} {}", o.glyph, o.label))
                                .unwrap_or_else(|| entry.reaction_id.clone());
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(entry.at.format("%H:%M:%S").to_string())
                                        .monospace()
                                        .color(egui::Color32::from_rgb(150, 144, 172)),
                                );
                                ui.label(label);
                            });
                        }
                    });
            });
        });

    result
}
