//! Render contracts between the simulation and whatever paints it.
//!
//! The simulation never talks to a canvas directly. It emits discs and lines
//! through [`Surface`]; the web frontend implements it on top of a Canvas 2D
//! context, and [`DrawList`] records the calls for tests and headless use.

use glam::Vec2;
use std::fmt;

/// Opaque 8-bit colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba {
            rgb: self,
            a: a.clamp(0.0, 1.0),
        }
    }
}

/// Colour plus alpha in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f32,
}

/// Formats as a CSS colour, e.g. `rgba(102, 126, 234, 0.35)`.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.a
        )
    }
}

pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn clear(&mut self);
    fn draw_disc(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgba);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Disc {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgba,
    },
}

/// Recording surface of a fixed size.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn discs(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Disc {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Line { from, to, color } => Some((from, to, color)),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    // Drops earlier commands, same as wiping the canvas.
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_disc(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Disc {
            center,
            radius,
            color,
        });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_formats_as_css() {
        let c = Rgb::new(102, 126, 234).with_alpha(0.5);
        assert_eq!(c.to_string(), "rgba(102, 126, 234, 0.5)");
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Rgb::new(1, 2, 3).with_alpha(-0.2).a, 0.0);
        assert_eq!(Rgb::new(1, 2, 3).with_alpha(3.0).a, 1.0);
    }

    #[test]
    fn clear_drops_previous_frame() {
        let mut list = DrawList::new(10.0, 10.0);
        list.draw_disc(Vec2::ZERO, 1.0, Rgb::new(0, 0, 0).with_alpha(1.0));
        list.clear();
        assert_eq!(list.commands, vec![DrawCommand::Clear]);
    }
}
