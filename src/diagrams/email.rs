//! Diagrams of the email article

use crate::error::SceneError;
use crate::layout::text::{bold, colorize, line};
use crate::layout::{
    estimate_text_size_with_margin, estimate_text_width_with_margin, Point, Side, TextLine,
};
use crate::renderer::{Element, Line, Rectangle, Styled, VisualElement};
use crate::stylesheet::Color;

/// How an incoming mail server hands messages to offline and online clients
pub fn email_filtering() -> Result<Vec<Element>, SceneError> {
    let sender_client_text: Vec<TextLine> = vec![bold("Mail client").into(), "of sender".into()];
    let outgoing_server_text: Vec<TextLine> = vec![
        bold("Outgoing").into(),
        bold("mail server").into(),
        "of sender".into(),
    ];
    let incoming_server_text: Vec<TextLine> = vec![
        bold("Incoming").into(),
        bold("mail server").into(),
        "of recipient".into(),
    ];
    let offline_client_text: Vec<TextLine> = vec![
        bold("Offline").into(),
        bold("mail client").into(),
        "of recipient".into(),
    ];
    let online_client_text: Vec<TextLine> = vec![
        bold("Online").into(),
        bold("mail client").into(),
        "of recipient".into(),
    ];

    let size = estimate_text_size_with_margin(&incoming_server_text);
    let horizontal_gap = size.x / 2.0;
    let vertical_gap = size.y / 4.0;
    let column = |index: f64| index * (size.x + horizontal_gap);

    let sender_client = Rectangle::new(Point::new(0.0, 0.0), size);
    let outgoing_server = Rectangle::new(Point::new(column(1.0), 0.0), size);
    let incoming_server = Rectangle::new(Point::new(column(2.0), 0.0), size).with_color(Color::Green);
    let offline_client = Rectangle::new(
        Point::new(column(3.0), -(size.y + vertical_gap) / 2.0),
        size,
    )
    .with_color(Color::Gray);
    let online_client = Rectangle::new(
        Point::new(column(3.0), (size.y + vertical_gap) / 2.0),
        size,
    )
    .with_color(Color::Blue);

    let connectors = [
        Line::connect_boxes(&sender_client, Side::Right, &outgoing_server, Side::Left),
        Line::connect_boxes(&outgoing_server, Side::Right, &incoming_server, Side::Left),
        Line::connect_boxes(&incoming_server, Side::Right, &offline_client, Side::Left)
            .with_color(Color::Gray),
        Line::connect_boxes(&incoming_server, Side::Right, &online_client, Side::Left),
    ];

    // Connectors in reverse order, underneath the boxes
    let mut elements: Vec<VisualElement> = connectors.into_iter().rev().map(Into::into).collect();
    for (rectangle, text) in [
        (sender_client, sender_client_text),
        (outgoing_server, outgoing_server_text),
        (incoming_server, incoming_server_text),
        (offline_client, offline_client_text),
        (online_client, online_client_text),
    ] {
        elements.extend(rectangle.with_text(text));
    }

    Ok(elements.into_iter().map(Element::from).collect())
}

/// Why servers store salted password hashes instead of passwords
pub fn applications_password_protection() -> Result<Vec<Element>, SceneError> {
    let client_text: Vec<TextLine> = vec![bold("Client").into(), "of user".into()];
    let server_text: Vec<TextLine> = vec![
        line([bold("Server"), " of provider".into()]),
        colorize(Color::Pink, "hash(Password + Salt) = Hash?").into(),
    ];
    let database_text: Vec<TextLine> = vec![bold("Database").into(), "of provider".into()];
    let password_text: Vec<TextLine> = vec!["Password".into()];
    let salt_text: Vec<TextLine> = vec!["Salt, Hash".into()];
    let color = Color::Blue;

    let client_size = estimate_text_size_with_margin(&client_text);
    let client = Rectangle::new(Point::new(0.0, 0.0), client_size);

    let server_size = estimate_text_size_with_margin(&server_text);
    let server = Rectangle::new(
        Point::new(
            client_size.x + estimate_text_width_with_margin(&password_text, 3.0),
            0.0,
        ),
        server_size,
    );

    let database_size = estimate_text_size_with_margin(&database_text);
    let database = Rectangle::new(
        Point::new(
            server.position.x + server_size.x + estimate_text_width_with_margin(&salt_text, 3.0),
            0.0,
        ),
        database_size,
    );

    let mut elements: Vec<VisualElement> = Vec::new();
    elements.extend(
        Line::connect_boxes(&database, Side::Left, &server, Side::Right)
            .with_color(color)
            .with_text(salt_text, Side::Top),
    );
    elements.extend(
        Line::connect_boxes(&client, Side::Right, &server, Side::Left)
            .with_color(color)
            .with_text(password_text, Side::Top),
    );
    elements.extend(client.with_text(client_text));
    elements.extend(server.with_text(server_text));
    elements.extend(database.with_text(database_text));

    Ok(elements.into_iter().map(Element::from).collect())
}
