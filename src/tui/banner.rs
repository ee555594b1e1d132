//! Banner panels: environment, key help, logo. Cosmetics only.

use ratatui::text::{Line, Span};

use super::theme::Theme;
use crate::environment::Environment;
use crate::topic::{Service, Topic};

/// Banner row height, including borders.
pub const BANNER_HEIGHT: u16 = 7;

const LOGO: &[&str] = &[
    r"  ___  __ _ _   _  __ _  __| |",
    r" / __|/ _` | | | |/ _` |/ _` |",
    r" \__ \ (_| | |_| | (_| | (_| |",
    r" |___/\__, |\__,_|\__,_|\__,_|",
    r"         |_|                  ",
];

/// The service endpoints in play.
pub fn environment_lines<'a>(environment: &'a Environment, theme: &Theme) -> Vec<Line<'a>> {
    let token = if environment.token().is_some() {
        "present"
    } else {
        "none"
    };
    vec![
        Line::from(vec![
            Span::styled("AS    ", theme.accent()),
            Span::styled(environment.api_url(Service::Account).as_str(), theme.text()),
        ]),
        Line::from(vec![
            Span::styled("DM    ", theme.accent()),
            Span::styled(environment.api_url(Service::Data).as_str(), theme.text()),
        ]),
        Line::from(vec![
            Span::styled("token ", theme.accent()),
            Span::styled(token, theme.text()),
        ]),
        Line::from(vec![
            Span::styled("every ", theme.accent()),
            Span::styled(
                format!("{}s", environment.refresh_period().as_secs()),
                theme.text(),
            ),
        ]),
    ]
}

/// Key bindings, three topics per line to fit the banner height.
pub fn help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans = Vec::new();
    for (i, topic) in Topic::ALL.iter().enumerate() {
        spans.push(Span::styled(format!("[{}]", topic.key()), theme.accent()));
        spans.push(Span::styled(format!(" {:<24}", topic.name()), theme.text()));
        if i % 3 == 2 {
            lines.push(Line::from(std::mem::take(&mut spans)));
        }
    }
    if !spans.is_empty() {
        spans.push(Span::styled("[Q]", theme.accent()));
        spans.push(Span::styled(" quit", theme.text()));
        lines.push(Line::from(spans));
    }
    lines
}

pub fn logo_lines(theme: &Theme) -> Vec<Line<'static>> {
    LOGO.iter()
        .map(|row| Line::from(Span::styled(*row, theme.header())))
        .collect()
}
