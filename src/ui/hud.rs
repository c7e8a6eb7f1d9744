use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::game::{GameState, GameStatus};
use crate::theme::Theme;

const HUD_SEPARATOR: &str = " │ ";
const CONTROLS_FULL: &str = "[G] Start  [P] Pause  [R] Reset  [Q] Quit";
const CONTROLS_COMPACT: &str = "G▸ P‖ R↺ Q✕";

/// Supplemental values displayed by the HUD rows.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub best_score: u32,
    pub theme: &'a Theme,
}

/// Number of terminal rows the HUD needs below the board.
pub const HUD_HEIGHT: u16 = 2;

/// Renders the status and controls rows into `area`.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: &HudInfo<'_>) {
    let [status_area, controls_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(status_line(state, info)).alignment(Alignment::Center),
        status_area,
    );

    let controls = controls_hint(usize::from(controls_area.width));
    frame.render_widget(
        Paragraph::new(Line::from(controls))
            .alignment(Alignment::Center)
            .style(Style::default().fg(info.theme.menu_footer)),
        controls_area,
    );
}

fn status_line(state: &GameState, info: &HudInfo<'_>) -> Line<'static> {
    let label = Style::default().fg(info.theme.hud_text);
    let value = Style::default()
        .fg(info.theme.hud_accent)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled(status_label(state.status).to_owned(), value),
        Span::styled(HUD_SEPARATOR, label),
        Span::styled("Score: ", label),
        Span::styled(state.score.to_string(), value),
        Span::styled(HUD_SEPARATOR, label),
        Span::styled("Length: ", label),
        Span::styled(state.snake.len().to_string(), value),
        Span::styled(HUD_SEPARATOR, label),
        Span::styled("Best: ", label),
        Span::styled(info.best_score.to_string(), value),
    ])
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Playing => "RUNNING",
        GameStatus::Paused => "PAUSED",
        GameStatus::GameOver => "GAME OVER",
        GameStatus::Victory => "CLEARED",
    }
}

/// Picks the widest controls hint that fits in `available_width` columns.
fn controls_hint(available_width: usize) -> &'static str {
    if CONTROLS_FULL.width() <= available_width {
        CONTROLS_FULL
    } else {
        CONTROLS_COMPACT
    }
}

#[cfg(test)]
mod tests {
    use super::{CONTROLS_COMPACT, CONTROLS_FULL, controls_hint, status_label};
    use crate::game::GameStatus;

    #[test]
    fn controls_hint_falls_back_when_narrow() {
        assert_eq!(controls_hint(80), CONTROLS_FULL);
        assert_eq!(controls_hint(20), CONTROLS_COMPACT);
    }

    #[test]
    fn every_status_has_a_label() {
        assert_eq!(status_label(GameStatus::Playing), "RUNNING");
        assert_eq!(status_label(GameStatus::GameOver), "GAME OVER");
    }
}
