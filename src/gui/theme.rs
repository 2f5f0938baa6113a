use crate::config::Colors;
use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub neutral: Srgba<f64>,
    pub highlight: Srgba<f64>,
    pub text: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            neutral: Self::lookup_color(context, "theme_bg_color", Srgba::new(0.5, 0.5, 0.5, 1.0)),
            highlight: Self::lookup_color(
                context,
                "success_color",
                Srgba::new(0.0, 0.75, 0.0, 1.0),
            ),
            text: Self::lookup_color(context, "theme_fg_color", Srgba::new(0.0, 0.0, 0.0, 1.0)),
        }
    }

    /// Config-file colors win over the theme lookup.
    pub fn with_overrides(mut self, colors: &Colors) -> Self {
        if let Some(c) = colors.neutral {
            self.neutral = c.srgba();
        }
        if let Some(c) = colors.highlight {
            self.highlight = c.srgba();
        }
        if let Some(c) = colors.text {
            self.text = c.srgba();
        }
        self
    }

    fn lookup_color(context: &gtk::StyleContext, name: &str, fallback: Srgba<f64>) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                Srgba::new(
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                )
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.fandial-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
