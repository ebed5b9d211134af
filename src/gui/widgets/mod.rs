use iced::{
    Color, Element, Length, Theme, border,
    widget::{column, container, container::Style, opaque, stack, text},
};
use iced_widget::container::bordered_box;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Danger,
    Info,
}

impl AlertKind {
    fn style(self) -> impl Fn(&Theme) -> Style {
        move |theme: &Theme| {
            let palette = theme.extended_palette();
            let pair = match self {
                AlertKind::Danger => palette.danger.weak,
                AlertKind::Info => palette.primary.weak,
            };
            bordered_box(theme)
                .background(pair.color)
                .color(pair.text)
                .border(border::rounded(4))
        }
    }
}

pub fn alert<'a, Message: 'a>(message: impl Into<String>, kind: AlertKind) -> Element<'a, Message> {
    container(text(message.into()))
        .padding(12)
        .width(Length::Fill)
        .style(kind.style())
        .into()
}

pub fn spinner<'a, Message: 'a>() -> Element<'a, Message> {
    container(text("Loading..."))
        .center_x(Length::Fill)
        .padding(20)
        .into()
}

/// Bordered card with a header line.
pub fn card<'a, Message: 'a>(
    header: impl Into<Element<'a, Message>>,
    body: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(column![
        container(header.into()).padding(10).width(Length::Fill).style(header_style),
        container(body.into()).padding(10).width(Length::Fill),
    ])
    .width(Length::Fill)
    .style(bordered_box)
    .into()
}

fn header_style(theme: &Theme) -> Style {
    let mut color_rgba = theme.palette().background.into_rgba8();
    color_rgba[0] /= 2;
    color_rgba[1] /= 2;
    color_rgba[2] /= 2;
    Style::default().background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
}

/// Draws `content` centered over a dimmed `base`. Clicks on the backdrop
/// are swallowed.
pub fn modal<'a, Message: 'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            container(opaque(content))
                .center(Length::Fill)
                .style(|_theme: &Theme| Style::default().background(Color {
                    a: 0.7,
                    ..Color::BLACK
                }))
        )
    ]
    .into()
}

/// Navigation bar above the routed content.
pub fn layout<'a, Message>(
    navbar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    column![
        container(navbar.into())
            .padding(10)
            .width(Length::Fill)
            .style(bordered_box),
        container(main_content.into())
            .padding(20)
            .width(Length::Fill)
            .height(Length::Fill),
    ]
    .into()
}
