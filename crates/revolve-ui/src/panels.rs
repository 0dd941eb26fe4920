//! UI panel builders.

use std::collections::BTreeMap;

use egui::{CollapsingHeader, Context, SidePanel, Ui};
use revolve_core::{Registry, Vec3};

/// Builds the main left panel.
pub fn build_left_panel(ctx: &Context, title: &str, build_contents: impl FnOnce(&mut Ui)) {
    SidePanel::left("revolve_main_panel")
        .default_width(260.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading(title);
            ui.separator();
            build_contents(ui);
        });
}

/// Builds the structure tree section, grouped by type.
///
/// Each structure gets an enable checkbox and, when `materials` is not
/// empty, a material selector. Returns true if a structure was toggled or
/// its material changed.
pub fn build_structure_tree(ui: &mut Ui, registry: &mut Registry, materials: &[&str]) -> bool {
    let mut changed = false;

    CollapsingHeader::new("Structures")
        .default_open(true)
        .show(ui, |ui| {
            if registry.is_empty() {
                ui.label("No structures registered");
                return;
            }

            let mut by_type: BTreeMap<&'static str, Vec<(String, bool, String)>> =
                BTreeMap::new();
            for structure in registry.iter() {
                by_type.entry(structure.type_name()).or_default().push((
                    structure.name().to_string(),
                    structure.is_enabled(),
                    structure.style().material.clone(),
                ));
            }

            for (type_name, instances) in by_type {
                let header = format!("{} ({})", type_name, instances.len());
                CollapsingHeader::new(header)
                    .default_open(true)
                    .show(ui, |ui| {
                        for (name, mut enabled, mut material) in instances {
                            if ui.checkbox(&mut enabled, name.as_str()).changed() {
                                if let Some(structure) = registry.get_mut(&name) {
                                    structure.set_enabled(enabled);
                                    log::debug!("{name} enabled: {enabled}");
                                    changed = true;
                                }
                            }
                            if materials.is_empty() {
                                continue;
                            }
                            let picked = ui
                                .push_id(name.as_str(), |ui| {
                                    ui.indent("material", |ui| {
                                        build_material_selector(ui, &mut material, materials)
                                    })
                                    .inner
                                })
                                .inner;
                            if picked {
                                if let Some(structure) = registry.get_mut(&name) {
                                    log::debug!("{name} material: {material}");
                                    structure.style_mut().material = material;
                                    changed = true;
                                }
                            }
                        }
                    });
            }
        });

    changed
}

/// Builds the read-only scene extents section.
pub fn build_scene_extents_section(ui: &mut Ui, length_scale: f32, bounding_box: (Vec3, Vec3)) {
    CollapsingHeader::new("Scene Extents")
        .default_open(false)
        .show(ui, |ui| {
            let (min, max) = bounding_box;
            ui.horizontal(|ui| {
                ui.label("Length scale:");
                ui.label(format!("{length_scale:.4}"));
            });
            ui.label("Bounding box:");
            ui.indent("bbox", |ui| {
                ui.label(format!("Min: ({:.2}, {:.2}, {:.2})", min.x, min.y, min.z));
                ui.label(format!("Max: ({:.2}, {:.2}, {:.2})", max.x, max.y, max.z));
            });
        });
}

/// Builds a one-line frame summary.
pub fn build_frame_stats(ui: &mut Ui, stride: u32, triangles: usize) {
    ui.label(format!("stride {stride}: {triangles} triangles"));
}

/// Builds a material selector `ComboBox`. Returns true if the material changed.
pub fn build_material_selector(ui: &mut Ui, material: &mut String, available: &[&str]) -> bool {
    let mut changed = false;
    egui::ComboBox::from_label("Material")
        .selected_text(material.as_str())
        .show_ui(ui, |ui| {
            for &name in available {
                if ui
                    .selectable_value(material, name.to_string(), name)
                    .changed()
                {
                    changed = true;
                }
            }
        });
    changed
}
