//! Free-form drawing surface

use super::{Widget, WidgetHeader, WidgetKind, WidgetRef};
use crate::backend::Painter;
use crate::theme::Color;

/// One recorded drawing operation, in canvas-relative coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCommand {
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Color,
        filled: bool,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    },
    Arc {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        angle1: i32,
        angle2: i32,
        color: Color,
    },
}

/// Surface that replays its command list on every redraw
#[derive(Debug, Clone)]
pub struct Canvas {
    pub(crate) header: WidgetHeader,
    commands: Vec<CanvasCommand>,
}

impl Canvas {
    /// Create an empty canvas
    #[must_use]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            header: WidgetHeader::new(WidgetKind::Canvas, x, y, width, height),
            commands: Vec::new(),
        }
    }

    /// Recorded commands in draw order
    #[must_use]
    pub fn commands(&self) -> &[CanvasCommand] {
        &self.commands
    }

    pub fn draw_rectangle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color, filled: bool) {
        self.commands.push(CanvasCommand::Rect {
            x,
            y,
            width,
            height,
            color,
            filled,
        });
    }

    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.commands.push(CanvasCommand::Line { x1, y1, x2, y2, color });
    }

    pub fn draw_arc(&mut self, x: i32, y: i32, width: i32, height: i32, angle1: i32, angle2: i32, color: Color) {
        self.commands.push(CanvasCommand::Arc {
            x,
            y,
            width,
            height,
            angle1,
            angle2,
            color,
        });
    }
}

impl Widget for Canvas {
    const KIND: WidgetKind = WidgetKind::Canvas;

    fn slot(index: usize) -> WidgetRef {
        WidgetRef::Canvas(index)
    }

    fn header(&self) -> &WidgetHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut WidgetHeader {
        &mut self.header
    }

    fn draw(&self, painter: &mut Painter<'_>) {
        let (ox, oy) = (self.header.x, self.header.y);
        for command in &self.commands {
            match *command {
                CanvasCommand::Rect {
                    x,
                    y,
                    width,
                    height,
                    color,
                    filled,
                } => {
                    if filled {
                        painter.fill_rect(ox + x, oy + y, width, height, color);
                    } else {
                        painter.draw_rect(ox + x, oy + y, width, height, color);
                    }
                }
                CanvasCommand::Line { x1, y1, x2, y2, color } => {
                    painter.draw_line(ox + x1, oy + y1, ox + x2, oy + y2, color);
                }
                CanvasCommand::Arc {
                    x,
                    y,
                    width,
                    height,
                    angle1,
                    angle2,
                    color,
                } => {
                    painter.fill_arc(ox + x, oy + y, width, height, angle1, angle2, color);
                }
            }
        }
    }
}
