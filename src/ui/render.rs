use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Padding, Paragraph, Wrap};
use ratatui::Frame;

use crate::quiz::{Phase, Question, SessionState};
use crate::ui::app::App;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{
    BORDER, EMBER, EMBER_DIM, STATUS_ERROR, STATUS_OK, TEXT, TEXT_DIM, TEXT_FAINT,
};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

struct Testimonial {
    name: &'static str,
    quote: &'static str,
    role: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Ricardo M.",
        quote: "I used to freeze the moment a topic died. The icebreaker guide \
                saved my last date. She would not stop laughing.",
        role: "Bought 2 weeks ago",
    },
    Testimonial {
        name: "Lucas F.",
        quote: "Thought it was snake oil, but the positive-tension technique is \
                unreal. An awkward hello turned into three dates in one week.",
        role: "Method student",
    },
    Testimonial {
        name: "Andre S.",
        quote: "Straight to the point. No wild theories, just applied psychology. \
                Read it in the morning, used it at the bar that night.",
        role: "Verified student",
    },
];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(header_widget(app.session()), header);
    frame.render_widget(Clear, body);

    match app.session().phase {
        Phase::Welcome => draw_welcome(frame, body),
        Phase::Loading => draw_wait(
            frame,
            body,
            app.spinner_frame(),
            "Calibrating scenarios...",
            "accessing behavioral database",
        ),
        Phase::Quiz => draw_quiz(frame, body, app.session()),
        Phase::Analyzing => draw_wait(
            frame,
            body,
            app.spinner_frame(),
            "Building your profile...",
            "weighing every answer",
        ),
        Phase::Results => draw_results(frame, body, app.session()),
        Phase::Error => draw_error(frame, body),
    }

    frame.render_widget(footer_widget(app), footer);
}

fn header_widget(session: &SessionState) -> Paragraph<'static> {
    let phase_label = match session.phase {
        Phase::Welcome => "welcome",
        Phase::Loading => "loading",
        Phase::Quiz => "quiz",
        Phase::Analyzing => "analyzing",
        Phase::Results => "results",
        Phase::Error => "error",
    };
    let line = Line::from(vec![
        Span::styled(
            " CONVERSATION MASTER ",
            Style::default().fg(EMBER).add_modifier(Modifier::BOLD),
        ),
        Span::styled("· applied attraction psychology ", Style::default().fg(TEXT_FAINT)),
        Span::styled(format!("[{phase_label}]"), Style::default().fg(TEXT_DIM)),
    ]);
    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(BORDER)),
    )
}

fn footer_widget(app: &App) -> Paragraph<'static> {
    let hints = match app.session().phase {
        Phase::Welcome => "[s] start assessment   [c] share quiz   [q] quit",
        Phase::Loading | Phase::Analyzing => "[q] quit",
        Phase::Quiz => {
            if app.session().explanation_visible {
                "[n] continue   [q] quit"
            } else {
                "[1-4] pick an answer   [q] quit"
            }
        }
        Phase::Results => "[u] unlock e-books   [c] share   [r] retake   [q] quit",
        Phase::Error => "[r] try again   [q] quit",
    };

    let mut spans = vec![Span::styled(
        format!(" {hints}"),
        Style::default().fg(TEXT_FAINT),
    )];
    if app.share_notice_visible() {
        spans.push(Span::styled(
            "   ✓ Link copied!",
            Style::default().fg(STATUS_OK),
        ));
    }
    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(BORDER)),
    )
}

fn draw_welcome(frame: &mut Frame<'_>, body: Rect) {
    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(6),
        ])
        .split(body);

    let title = Paragraph::new(Line::from(Span::styled(
        "PSYCHOLOGY OF ATTRACTION",
        Style::default().fg(EMBER).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, regions[1]);

    let tagline = Paragraph::new(
        "Discover the psychology e-books that turn any dull conversation \
         into an effortless date. Five scenarios. One diagnosis.",
    )
    .style(Style::default().fg(TEXT_DIM))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(tagline, regions[2]);

    let proof = Paragraph::new(Line::from(Span::styled(
        "REAL RESULTS FROM STUDENTS",
        Style::default().fg(TEXT_FAINT),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(proof, regions[3]);

    draw_testimonials(frame, regions[4]);
}

fn draw_testimonials(frame: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    for (testimonial, column) in TESTIMONIALS.iter().zip(columns.iter()) {
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("\"{}\"", testimonial.quote),
                Style::default().fg(TEXT_DIM),
            )),
            Line::from(""),
            Line::from(Span::styled(
                testimonial.role,
                Style::default().fg(TEXT_FAINT),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER))
                .padding(Padding::horizontal(1))
                .title(Span::styled(
                    format!(" {} ", testimonial.name),
                    Style::default().fg(TEXT),
                )),
        );
        frame.render_widget(card, *column);
    }
}

fn draw_wait(frame: &mut Frame<'_>, body: Rect, tick: usize, headline: &str, detail: &str) {
    let spinner = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
    let area = centered_rect(60, 40, body);
    let lines = vec![
        Line::from(Span::styled(
            format!("{spinner} {headline}"),
            Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            detail.to_string(),
            Style::default().fg(EMBER_DIM),
        )),
    ];
    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn draw_quiz(frame: &mut Frame<'_>, body: Rect, session: &SessionState) {
    let Some(question) = session.current_question() else {
        return;
    };
    let total = session.questions.len();
    let number = session.current_question + 1;

    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(question.options.len() as u16 + 2),
            Constraint::Min(0),
        ])
        .split(body);

    let status = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" PHASE {number} / {total}"),
            Style::default().fg(TEXT_FAINT),
        ),
        Span::styled(
            format!("   correct: {}", session.score),
            Style::default().fg(TEXT_DIM),
        ),
    ]));
    frame.render_widget(status, regions[0]);

    let progress = Gauge::default()
        .gauge_style(Style::default().fg(EMBER).bg(BORDER))
        .ratio(number as f64 / total as f64)
        .use_unicode(true)
        .label("");
    frame.render_widget(progress, regions[1]);

    let scenario = Paragraph::new(question.scenario.clone())
        .style(Style::default().fg(TEXT))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER))
                .padding(Padding::horizontal(1))
                .title(Span::styled(" Scenario ", Style::default().fg(EMBER))),
        );
    frame.render_widget(scenario, regions[2]);

    let options = Paragraph::new(option_lines(question, session)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(options, regions[3]);

    if session.explanation_visible {
        let explanation = Paragraph::new(question.explanation.clone())
            .style(Style::default().fg(TEXT_DIM))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(EMBER_DIM))
                    .padding(Padding::horizontal(1))
                    .title(Span::styled(" Why ", Style::default().fg(EMBER))),
            );
        frame.render_widget(explanation, regions[4]);
    }
}

/// Option rows. Before a pick, everything is neutral. After, the best
/// answer goes green and a wrong pick goes red.
fn option_lines(question: &Question, session: &SessionState) -> Vec<Line<'static>> {
    question
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let style = if session.explanation_visible {
                if index == question.correct_option_index {
                    Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD)
                } else if session.selected_option == Some(index) {
                    Style::default().fg(STATUS_ERROR)
                } else {
                    Style::default().fg(TEXT_FAINT)
                }
            } else {
                Style::default().fg(TEXT)
            };
            let marker = if session.selected_option == Some(index) {
                "›"
            } else {
                " "
            };
            Line::from(Span::styled(
                format!("{marker}{}. {option}", index + 1),
                style,
            ))
        })
        .collect()
}

fn draw_results(frame: &mut Frame<'_>, body: Rect, session: &SessionState) {
    let Some(result) = session.result.as_ref() else {
        return;
    };

    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(6),
            Constraint::Length(2),
        ])
        .split(body);

    let banner = Paragraph::new(Line::from(Span::styled(
        "FINAL DIAGNOSIS",
        Style::default().fg(EMBER_DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(banner, regions[0]);

    let archetype = Paragraph::new(Line::from(Span::styled(
        result.archetype.clone(),
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(archetype, regions[1]);

    let potential = Paragraph::new(Line::from(vec![
        Span::styled("Attraction potential: ", Style::default().fg(TEXT_FAINT)),
        Span::styled(
            format!("{}%", result.percentage()),
            Style::default().fg(EMBER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({} of {})", result.score, result.total_questions),
            Style::default().fg(TEXT_FAINT),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(potential, regions[2]);

    let report = Paragraph::new(result.feedback.clone())
        .style(Style::default().fg(TEXT_DIM))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(EMBER_DIM))
                .padding(Padding::horizontal(1))
                .title(Span::styled(" Mentor report ", Style::default().fg(EMBER))),
        );
    frame.render_widget(report, regions[3]);

    draw_testimonials(frame, regions[4]);

    let pitch = Paragraph::new(Line::from(Span::styled(
        "Don't let the conversation die — unlock the full guide with [u]",
        Style::default().fg(TEXT),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(pitch, regions[5]);
}

fn draw_error(frame: &mut Frame<'_>, body: Rect) {
    let area = centered_rect(60, 40, body);
    let lines = vec![
        Line::from(Span::styled(
            "Connection failed",
            Style::default()
                .fg(STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "The mentor did not respond. Check your network and API key.",
            Style::default().fg(TEXT_DIM),
        )),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}
