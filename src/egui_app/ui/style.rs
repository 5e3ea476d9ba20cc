use crate::egui_app::view_model::PanelTone;
use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_card: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub heading: Color32,
    pub accent: Color32,
    pub error: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(239, 246, 255),
        bg_card: Color32::WHITE,
        panel_outline: Color32::from_rgb(209, 213, 219),
        text_primary: Color32::from_rgb(55, 65, 81),
        text_muted: Color32::from_rgb(107, 114, 128),
        heading: Color32::from_rgb(30, 64, 175),
        accent: Color32::from_rgb(37, 99, 235),
        error: Color32::from_rgb(239, 68, 68),
    }
}

/// Fill, border and text colors for a result panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToneColors {
    pub fill: Color32,
    pub stroke: Color32,
    pub text: Color32,
}

pub fn tone_colors(tone: PanelTone) -> ToneColors {
    match tone {
        PanelTone::Success => ToneColors {
            fill: Color32::from_rgb(240, 253, 244),
            stroke: Color32::from_rgb(187, 247, 208),
            text: Color32::from_rgb(22, 163, 74),
        },
        PanelTone::Caution => ToneColors {
            fill: Color32::from_rgb(254, 252, 232),
            stroke: Color32::from_rgb(254, 240, 138),
            text: Color32::from_rgb(202, 138, 4),
        },
        PanelTone::Error => ToneColors {
            fill: Color32::from_rgb(254, 242, 242),
            stroke: Color32::from_rgb(254, 202, 202),
            text: Color32::from_rgb(220, 38, 38),
        },
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_card;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_card;
    visuals.error_fg_color = palette.error;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    set_rounded(&mut visuals.widgets.inactive, palette);
    set_rounded(&mut visuals.widgets.hovered, palette);
    set_rounded(&mut visuals.widgets.active, palette);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.active.bg_stroke = Stroke::new(2.0, palette.accent);
    visuals.window_corner_radius = CornerRadius::same(12);
    visuals.popup_shadow = Shadow::NONE;
}

fn set_rounded(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(8);
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Border drawn around an input, red while it shows a message.
pub fn input_border(invalid: bool) -> Stroke {
    let palette = palette();
    if invalid {
        Stroke::new(1.5, palette.error)
    } else {
        Stroke::new(1.0, palette.panel_outline)
    }
}
