use super::model::State;
use super::MARKER_RADIUS;
use crate::gui::theme::ThemeColors;
use cairo::Context;
use std::f64::consts::PI;

pub fn draw(cr: &Context, state: &State, colors: &ThemeColors) -> Result<(), cairo::Error> {
    // nothing sensible to paint before the first resize
    if !state.geometry.is_ready() {
        return Ok(());
    }

    draw_disc(cr, state, colors)?;
    for index in 0..state.selection_count {
        draw_label(cr, state, colors, index)?;
    }
    draw_marker(cr, state, colors)
}

fn draw_disc(cr: &Context, state: &State, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let (r, g, b, a) = state.dial_color.color(colors).into_components();
    cr.set_source_rgba(r, g, b, a);
    let center = state.geometry.center();
    cr.arc(center.x, center.y, state.geometry.radius, 0.0, 2.0 * PI);
    cr.fill()
}

fn draw_label(
    cr: &Context,
    state: &State,
    colors: &ThemeColors,
    index: usize,
) -> Result<(), cairo::Error> {
    let (r, g, b, a) = colors.text.into_components();
    cr.set_source_rgba(r, g, b, a);
    cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
    cr.set_font_size(state.text_size);

    let text = index.to_string();
    let pos = state.label_position(index);
    if let Ok(ext) = cr.text_extents(&text) {
        cr.move_to(pos.x - ext.width() / 2.0, pos.y + ext.height() / 2.0);
        cr.show_text(&text)?;
    }
    Ok(())
}

fn draw_marker(cr: &Context, state: &State, colors: &ThemeColors) -> Result<(), cairo::Error> {
    let (r, g, b, a) = colors.text.into_components();
    cr.set_source_rgba(r, g, b, a);
    let pos = state.marker_position();
    cr.arc(pos.x, pos.y, MARKER_RADIUS, 0.0, 2.0 * PI);
    cr.fill()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::gui::dial::State;
    use cairo::{Format, ImageSurface};
    use palette::Srgba;

    fn test_colors() -> ThemeColors {
        ThemeColors {
            neutral: Srgba::new(0.5, 0.5, 0.5, 1.0),
            highlight: Srgba::new(0.0, 0.75, 0.0, 1.0),
            text: Srgba::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    fn render(state: &State, size: i32) -> ImageSurface {
        let surface = ImageSurface::create(Format::ARgb32, size, size).unwrap();
        {
            let cr = Context::new(&surface).unwrap();
            draw(&cr, state, &test_colors()).unwrap();
        }
        surface.flush();
        surface
    }

    #[test]
    fn draw_is_noop_before_first_resize() {
        let state = State::from_config(&Config::default());
        let mut surface = render(&state, 100);
        let data = surface.data().unwrap();
        assert!(data.iter().all(|&b| b == 0));
    }

    #[test]
    fn draw_paints_disc_at_center() {
        let mut state = State::from_config(&Config::default());
        state.resize(300, 300);
        let mut surface = render(&state, 300);

        // ARGB32 is 4 bytes per pixel; the disc covers the center
        let stride = surface.stride() as usize;
        let data = surface.data().unwrap();
        let idx = 150 * stride + 150 * 4;
        let alpha = data[idx + 3];
        assert_eq!(alpha, 255);
    }
}
