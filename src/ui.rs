const HELP_PROMPT: &[&str] = &["Press F1 for help"];

const HELP_TEXT: &[&str] = &[
    "Rotate: left mouse drag",
    " Scale: right mouse drag up/down",
    "   Pan: middle mouse drag",
    "",
    "Toggle fullscreen: f",
    "Toggle animation: space",
    "Quit: escape",
];

const LINE_HEIGHT: f32 = 20.0;
const LEFT_MARGIN: f32 = 5.0;
const SHADOW_OFFSET: egui::Vec2 = egui::vec2(2.0, 2.0);
const TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 230, 0);
const SHADOW_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 26, 0);

/// Text overlay in the top-left corner: a one-line prompt, or the full
/// control reference while help is shown.
#[derive(Debug, Default)]
pub struct Ui {
    help_visible: bool,
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn lines(&self) -> &'static [&'static str] {
        if self.help_visible { HELP_TEXT } else { HELP_PROMPT }
    }

    pub fn show(&self, ctx: &egui::Context) {
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("help_overlay"),
        ));
        let font = egui::FontId::monospace(15.0);

        for (i, line) in self.lines().iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let baseline = egui::pos2(LEFT_MARGIN, (i + 1) as f32 * LINE_HEIGHT);
            painter.text(
                baseline + SHADOW_OFFSET,
                egui::Align2::LEFT_BOTTOM,
                *line,
                font.clone(),
                SHADOW_COLOR,
            );
            painter.text(
                baseline,
                egui::Align2::LEFT_BOTTOM,
                *line,
                font.clone(),
                TEXT_COLOR,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_until_help_requested() {
        let mut ui = Ui::new();
        assert!(!ui.help_visible());
        assert_eq!(ui.lines(), &["Press F1 for help"]);

        ui.toggle_help();
        assert_eq!(ui.lines().len(), 7);
        assert_eq!(ui.lines()[0], "Rotate: left mouse drag");

        ui.toggle_help();
        assert_eq!(ui.lines(), HELP_PROMPT);
    }

    #[test]
    fn overlay_paints_without_panicking() {
        let mut ui = Ui::new();
        ui.toggle_help();
        let ctx = egui::Context::default();
        let output = ctx.run(egui::RawInput::default(), |ctx| ui.show(ctx));
        assert!(!output.shapes.is_empty());
    }
}
