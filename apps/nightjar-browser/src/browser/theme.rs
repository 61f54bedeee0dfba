use super::*;
use nj_browser::DarkPalette;
use nj_browser::Rgb;

pub(super) fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Maps the palette roles onto egui's visuals.
pub(super) fn dark_visuals(palette: &DarkPalette) -> egui::Visuals {
    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = color(palette.window);
    visuals.window_fill = color(palette.window);
    visuals.extreme_bg_color = color(palette.base);
    visuals.faint_bg_color = color(palette.alternate_base);
    visuals.code_bg_color = color(palette.base);
    visuals.override_text_color = Some(color(palette.text));
    visuals.error_fg_color = color(palette.bright_text);

    visuals.widgets.noninteractive.bg_fill = color(palette.window);
    visuals.widgets.noninteractive.fg_stroke.color = color(palette.window_text);
    for widget in [&mut visuals.widgets.inactive, &mut visuals.widgets.hovered] {
        widget.bg_fill = color(palette.button);
        widget.weak_bg_fill = color(palette.button);
        widget.fg_stroke.color = color(palette.button_text);
    }

    visuals.selection.bg_fill = color(palette.highlight);
    visuals.selection.stroke.color = color(palette.highlighted_text);

    visuals
}

pub(super) fn apply_dark_palette(ctx: &egui::Context, palette: &DarkPalette) {
    ctx.set_visuals(dark_visuals(palette));
}
