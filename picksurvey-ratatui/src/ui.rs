use picksurvey::{Progress, Question, Summary, SurveyEngine, SurveyView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::{ScreenState, Theme, screen::option_rows};

/// Label of the extra row that switches to typing an answer.
pub const OTHER_ROW: &str = "Other...";

/// Draw the engine's current view into the whole frame.
pub fn draw(
    frame: &mut Frame,
    engine: &SurveyEngine,
    screen: &ScreenState,
    theme: &Theme,
    title: &str,
) {
    match engine.view() {
        SurveyView::Question {
            title: set_title,
            question,
            progress,
        } => {
            let rows = option_rows(engine);
            draw_question(
                frame,
                set_title.unwrap_or(title),
                QuestionScreen {
                    question,
                    progress,
                    with_other: rows > question.options().len(),
                },
                screen,
                theme,
            )
        }
        SurveyView::Results { summary, .. } => draw_results(frame, &summary, theme, title),
    }
}

struct QuestionScreen<'a> {
    question: &'a Question,
    progress: Progress,
    with_other: bool,
}

fn draw_question(
    frame: &mut Frame,
    title: &str,
    q: QuestionScreen<'_>,
    screen: &ScreenState,
    theme: &Theme,
) {
    let [header, bar, prompt, image, body, help] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(4),
        Constraint::Length(1),
    ])
    .margin(1)
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(Line::from(title.to_string()).bold())
            .fg(theme.accent)
            .alignment(Alignment::Center),
        header,
    );

    frame.render_widget(
        LineGauge::default()
            .ratio(q.progress.ratio())
            .label(format!("{} / {}", q.progress.current, q.progress.total))
            .filled_style(Style::default().fg(theme.accent))
            .unfilled_style(Style::default().fg(theme.muted)),
        Rect { height: 1, ..bar },
    );

    frame.render_widget(
        Paragraph::new(q.question.prompt().to_string())
            .fg(theme.text)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_style(Style::default().fg(theme.accent))
                    .title(format!(
                        " Question {} of {} ",
                        q.progress.position(),
                        q.progress.total
                    )),
            ),
        prompt,
    );

    if let Some(image_ref) = q.question.image_ref() {
        frame.render_widget(
            Paragraph::new(format!(" image: {image_ref}"))
                .fg(theme.info)
                .italic(),
            image,
        );
    }

    let help_text = match screen.entry() {
        Some(text) => {
            draw_entry(frame, body, text, theme);
            "type your answer · Enter submit · Esc back to options"
        }
        None => {
            draw_options(frame, body, &q, screen.selected(), theme);
            "↑/↓ select · 1-9 jump · Enter answer · Esc cancel"
        }
    };
    frame.render_widget(
        Paragraph::new(help_text)
            .fg(theme.muted)
            .alignment(Alignment::Center),
        help,
    );
}

fn draw_options(
    frame: &mut Frame,
    area: Rect,
    q: &QuestionScreen<'_>,
    selected: usize,
    theme: &Theme,
) {
    let labels = q
        .question
        .options()
        .iter()
        .map(String::as_str)
        .chain(q.with_other.then_some(OTHER_ROW));
    let items: Vec<ListItem> = labels
        .enumerate()
        .map(|(i, label)| ListItem::new(format!("{}. {label}", i + 1)).fg(theme.text))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(theme.muted)),
        )
        .highlight_style(Style::default().fg(theme.cursor).bold())
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_entry(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let input = Paragraph::new(Line::from(vec![
        Span::raw(text.to_string()).fg(theme.text),
        Span::raw("_").fg(theme.cursor),
    ]))
    .block(
        Block::bordered()
            .border_style(Style::default().fg(theme.cursor))
            .title(" Your answer "),
    );
    frame.render_widget(input, Rect { height: area.height.min(3), ..area });
}

fn draw_results(frame: &mut Frame, summary: &Summary<'_>, theme: &Theme, title: &str) {
    let block = Block::bordered()
        .border_style(Style::default().fg(theme.done))
        .title(format!(" {} ", summary.title().unwrap_or(title)).bold());
    let [body, help] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(block.inner(frame.area()));
    frame.render_widget(block, frame.area());

    let mut lines = vec![Line::from("Survey Completed!").bold().fg(theme.done).centered()];
    if let Some(epilogue) = summary.epilogue() {
        lines.push(Line::from(epilogue).fg(theme.text).centered());
    }
    lines.push(Line::default());
    lines.push(Line::from("Your Answers:").bold().fg(theme.accent));
    for entry in summary.entries() {
        lines.push(Line::from(entry.question.prompt()).bold().fg(theme.text));
        lines.push(
            Line::from(format!("  - {}", entry.answer.unwrap_or("(no answer)"))).fg(theme.info),
        );
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);

    frame.render_widget(
        Paragraph::new("r take another survey · Enter finish")
            .fg(theme.muted)
            .alignment(Alignment::Center),
        help,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use picksurvey::{AnswerPolicy, QuestionSet};
    use ratatui::{Terminal, backend::TestBackend as BufferBackend};

    fn buffer_text(terminal: &Terminal<BufferBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(engine: &SurveyEngine, screen: &ScreenState) -> String {
        let mut terminal = Terminal::new(BufferBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| draw(frame, engine, screen, &Theme::plain(), "Survey"))
            .unwrap();
        buffer_text(&terminal)
    }

    fn engine() -> SurveyEngine {
        SurveyEngine::new(
            QuestionSet::new(vec![
                Question::new(1, "Favorite season?", ["Spring", "Autumn"])
                    .with_image("img://leaves"),
                Question::new(2, "Coffee or tea?", ["Coffee", "Tea"]),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn question_screen() {
        let text = render(&engine(), &ScreenState::new());
        assert!(text.contains("Survey"));
        assert!(text.contains("Question 1 of 2"));
        assert!(text.contains("Favorite season?"));
        assert!(text.contains("image: img://leaves"));
        assert!(text.contains("1. Spring"));
        assert!(text.contains("2. Autumn"));
        assert!(text.contains("0 / 2"));
        assert!(!text.contains(OTHER_ROW));
    }

    #[test]
    fn free_text_screens() {
        let mut engine = engine().with_policy(AnswerPolicy::FreeText);
        let mut screen = ScreenState::new();
        assert!(render(&engine, &screen).contains("3. Other..."));

        screen.handle_key(&mut engine, KeyCode::End).unwrap();
        screen.handle_key(&mut engine, KeyCode::Enter).unwrap();
        screen.handle_key(&mut engine, KeyCode::Char('W')).unwrap();
        let text = render(&engine, &screen);
        assert!(text.contains("Your answer"));
        assert!(text.contains("W_"));
        assert!(text.contains("Enter submit"));
    }

    #[test]
    fn results_screen() {
        let mut engine = engine();
        engine.submit_answer("Autumn").unwrap();
        engine.submit_answer("Tea").unwrap();

        let text = render(&engine, &ScreenState::new());
        assert!(text.contains("Survey Completed!"));
        assert!(text.contains("Your Answers:"));
        assert!(text.contains("Favorite season?"));
        assert!(text.contains("  - Autumn"));
        assert!(text.contains("  - Tea"));
        assert!(text.contains("r take another survey"));
    }
}
