// ui/confetti.rs - Canvas layer that paints live confetti

use iced::mouse;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{Element, Length, Rectangle, Renderer, Theme};

use crate::celebration::Particle;

/// Borrowed view over the particles of a `ConfettiField`
pub struct ConfettiLayer<'a> {
    particles: &'a [Particle],
}

impl<'a> ConfettiLayer<'a> {
    pub fn new(particles: &'a [Particle]) -> Self {
        Self { particles }
    }

    pub fn view<Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for ConfettiLayer<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for particle in self.particles {
            let [a, b, c, d] = particle.corners();
            let quad = Path::new(|builder| {
                builder.move_to(a);
                builder.line_to(b);
                builder.line_to(c);
                builder.line_to(d);
                builder.close();
            });
            frame.fill(&quad, particle.color());
        }

        vec![frame.into_geometry()]
    }
}
