//! Filter toggle and parameter slider rows.

use asciipaint::filters::{FilterChain, FilterKind};

/// Draw one row per filter: an enable checkbox plus a slider for the
/// filter's parameter, ranged and stepped per its declared spec.
///
/// Returns true when any flag or parameter changed this frame, so the
/// caller can re-render. Slider values pass through the chain's setter,
/// which clamps them into the declared range.
pub fn filter_panel(ui: &mut egui::Ui, chain: &mut FilterChain) -> bool {
    let mut changed = false;

    for kind in FilterKind::ALL {
        let mut on = chain.is_enabled(kind);
        if ui.checkbox(&mut on, kind.label()).changed() {
            chain.set_enabled(kind, on);
            changed = true;
        }

        if let (Some(name), Some(spec)) = (kind.param_name(), kind.param_spec()) {
            let mut value = chain.param_value(kind);
            let slider = egui::Slider::new(&mut value, spec.min..=spec.max)
                .step_by(spec.step as f64)
                .text(name);
            if ui.add(slider).changed() {
                chain.set_param(kind, value);
                changed = true;
            }
        }

        ui.separator();
    }

    changed
}
