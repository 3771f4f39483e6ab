use crate::feedback::Confetti;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, Frame};

const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
];

pub fn draw_confetti(f: &mut Frame, confetti: &Confetti) {
    let area = f.area();
    render_confetti(f.buffer_mut(), area, confetti);
}

/// Paints particles straight into the buffer on top of whatever is there.
/// Particles above the top edge are not drawn yet.
pub fn render_confetti(buf: &mut Buffer, area: Rect, confetti: &Confetti) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    for particle in &confetti.particles {
        if !(0.0..1.0).contains(&particle.y) || !(0.0..1.0).contains(&particle.x) {
            continue;
        }
        let x = area.x + (particle.x * area.width as f32) as u16;
        let y = area.y + (particle.y * area.height as f32) as u16;
        if let Some(cell) = buf.cell_mut((x.min(area.right() - 1), y.min(area.bottom() - 1))) {
            cell.set_char(particle.glyph)
                .set_fg(PALETTE[particle.color as usize % PALETTE.len()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Particle;

    fn particle(x: f32, y: f32) -> Particle {
        Particle {
            x,
            y,
            speed: 0.01,
            drift: 0.0,
            glyph: '*',
            color: 1,
        }
    }

    #[test]
    fn test_render_confetti_positions() {
        let area = Rect::new(0, 0, 10, 10);
        let mut buf = Buffer::empty(area);
        let confetti = Confetti {
            particles: vec![particle(0.55, 0.25), particle(0.5, -0.3)],
        };

        render_confetti(&mut buf, area, &confetti);

        assert_eq!(buf[(5, 2)].symbol(), "*");
        assert_eq!(buf[(5, 2)].fg, Color::Yellow);
        let painted = buf.content().iter().filter(|c| c.symbol() == "*").count();
        assert_eq!(painted, 1);
    }

    #[test]
    fn test_render_confetti_empty_area() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        let confetti = Confetti {
            particles: vec![particle(0.5, 0.5)],
        };
        render_confetti(&mut buf, area, &confetti);
    }
}
