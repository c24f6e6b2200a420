//! Rendering pipeline: title, username input, and the per-phase body panel.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table};
use throbber_widgets_tui::Throbber;

use super::App;
use crate::github::GistRecord;
use crate::languages::LanguageMap;
use crate::search::Phase;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
/// Display caps carried over from the web original.
const DESCRIPTION_MAX_CHARS: usize = 50;
const LANGUAGES_MAX_CHARS: usize = 25;
const FORKS_SHOWN: usize = 3;

impl App<'_> {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let constraints = if self.state.input_enabled() {
            vec![
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(1),
            ]
        } else {
            vec![Constraint::Length(2), Constraint::Min(1)]
        };
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.render_title(frame, layout[0]);
        if self.state.input_enabled() {
            self.render_input(frame, layout[1]);
            self.render_body(frame, layout[2]);
        } else {
            self.render_body(frame, layout[1]);
        }
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from("Get GH Gists."))
            .style(
                Style::default()
                    .fg(self.theme.title)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(title, area);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(ratatui::symbols::border::ROUNDED)
            .border_style(Style::default().fg(self.theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(self.input.widget(), inner);
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        match self.state.phase {
            Phase::Initializing => self.render_spinner(frame, area, "Initializing"),
            Phase::Pending => self.render_spinner(frame, area, "Searching gists"),
            Phase::InitFailed | Phase::Failed => {
                let message = self.state.error.unwrap_or("Something went wrong.");
                self.render_message(frame, area, message, self.theme.error);
            }
            Phase::Idle => self.render_message(
                frame,
                area,
                "Type a GitHub username to search their public gists.",
                self.theme.muted,
            ),
            Phase::Ready => self.render_results(frame, area),
        }
    }

    fn render_spinner(&mut self, frame: &mut Frame, area: Rect, label: &str) {
        let block = self.panel_block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let throbber = Throbber::default()
            .label(format!("{label}..."))
            .style(Style::default().fg(self.theme.header))
            .throbber_style(Style::default().fg(self.theme.header));
        let line = centered_line(inner);
        frame.render_stateful_widget(throbber, line, &mut self.throbber_state);
    }

    fn render_message(&self, frame: &mut Frame, area: Rect, message: &str, color: ratatui::style::Color) {
        let block = self.panel_block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, centered_line(inner));
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        let records = self.visible_records();
        if records.is_empty() {
            self.render_message(frame, area, "No results", self.theme.muted);
            return;
        }

        let rows: Vec<Row<'static>> = records
            .iter()
            .map(|record| build_row(record, &self.languages))
            .collect();

        let header = Row::new(
            ["Description", "Forks", "Languages"]
                .into_iter()
                .map(Cell::from)
                .collect::<Vec<_>>(),
        )
        .style(Style::default().fg(self.theme.header))
        .height(1)
        .bottom_margin(1);

        let widths = [
            Constraint::Min(30),
            Constraint::Length(24),
            Constraint::Length(27),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_spacing(HighlightSpacing::WhenSelected);

        let block = self.panel_block();
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_stateful_widget(table, inner, &mut self.table_state);
    }

    fn panel_block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_set(ratatui::symbols::border::ROUNDED)
            .border_style(Style::default().fg(self.theme.border))
    }
}

/// Vertically centered single-line area within a panel.
fn centered_line(area: Rect) -> Rect {
    let y = area.y + area.height / 2;
    Rect {
        x: area.x,
        y: y.min(area.y + area.height.saturating_sub(1)),
        width: area.width,
        height: 1.min(area.height),
    }
}

fn build_row(record: &GistRecord, languages: &LanguageMap) -> Row<'static> {
    // Callers filter out records without a displayable description.
    let description = record.display_description().unwrap_or_default();
    Row::new(vec![
        Cell::from(ellipsize(description, DESCRIPTION_MAX_CHARS)),
        Cell::from(fork_summary(record)),
        Cell::from(language_summary(record, languages)),
    ])
}

/// First few fork owners, matching the avatar strip of the web original.
fn fork_summary(record: &GistRecord) -> String {
    let owners: Vec<&str> = record
        .forks
        .iter()
        .take(FORKS_SHOWN)
        .map(|fork| fork.owner.login.as_str())
        .collect();
    owners.join(", ")
}

fn language_summary(record: &GistRecord, languages: &LanguageMap) -> String {
    let labels = languages.labels_for(record.file_names());
    clip(&labels.join(", "), LANGUAGES_MAX_CHARS)
}

/// Truncate to `max` characters, appending `...` when anything was cut.
fn ellipsize(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let mut cut: String = text.chars().take(max).collect();
        cut.push_str("...");
        cut
    } else {
        text.to_string()
    }
}

/// Hard cut to `max` characters, no ellipsis.
fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::Gist;
    use crate::languages::LanguageEntry;

    #[test]
    fn ellipsize_only_when_too_long() {
        assert_eq!(ellipsize("short", 50), "short");
        let long = "x".repeat(60);
        let shown = ellipsize(&long, 50);
        assert_eq!(shown.chars().count(), 53);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn clip_is_a_hard_cut() {
        assert_eq!(clip("JavaScript, Python, Ruby", 10), "JavaScript");
    }

    #[test]
    fn fork_summary_is_bounded_to_three() {
        let gist: Gist = serde_json::from_str(
            r#"{
                "id": "g",
                "description": "d",
                "html_url": "u",
                "files": {},
                "forks_url": "f"
            }"#,
        )
        .expect("decode gist");
        let fork_json = |login: &str| {
            serde_json::from_str(&format!(
                r#"{{
                    "html_url": "https://gist.github.com/{login}",
                    "owner": {{"login": "{login}", "avatar_url": "https://avatars/{login}"}}
                }}"#
            ))
            .expect("decode fork")
        };
        let record = GistRecord {
            gist,
            forks: vec![
                fork_json("a"),
                fork_json("b"),
                fork_json("c"),
                fork_json("d"),
            ],
        };
        assert_eq!(fork_summary(&record), "a, b, c");
    }

    #[test]
    fn language_summary_labels_files() {
        let gist: Gist = serde_json::from_str(
            r#"{
                "id": "g",
                "description": "d",
                "html_url": "u",
                "files": {"x.js": {}, "y.js": {}},
                "forks_url": "f"
            }"#,
        )
        .expect("decode gist");
        let record = GistRecord {
            gist,
            forks: Vec::new(),
        };
        let languages = LanguageMap::new(vec![LanguageEntry {
            name: "JavaScript".to_string(),
            extensions: vec![".js".to_string()],
        }]);
        assert_eq!(language_summary(&record, &languages), "JavaScript");
    }
}
