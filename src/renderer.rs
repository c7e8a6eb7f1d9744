use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::config::GridSize;
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::snake::Position;
use crate::theme::{
    BORDER_HALF_BLOCK, CELL_WIDTH, GLYPH_EMPTY, GLYPH_EYES_DOWN, GLYPH_EYES_LEFT,
    GLYPH_EYES_RIGHT, GLYPH_EYES_UP, GLYPH_FOOD, GLYPH_FOOD_PULSE, GLYPH_SNAKE_BODY, Theme,
};
use crate::ui::hud::{HUD_HEIGHT, HudInfo, render_hud};
use crate::ui::menu::{
    render_game_over_menu, render_pause_menu, render_start_menu, render_victory_menu,
};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, hud_info: HudInfo<'_>) {
    let area = frame.area();
    let bounds = state.bounds();
    let board_width = bounds.width.saturating_mul(CELL_WIDTH).saturating_add(2);
    let board_height = bounds.height.saturating_add(2);

    if area.width < board_width || area.height < board_height.saturating_add(HUD_HEIGHT) {
        render_too_small(frame, area, board_width, board_height.saturating_add(HUD_HEIGHT));
        return;
    }

    let [column] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(area);
    let [board_area, hud_area] = Layout::vertical([
        Constraint::Length(board_height),
        Constraint::Length(HUD_HEIGHT),
    ])
    .flex(Flex::Center)
    .areas(column);

    let theme = hud_info.theme;
    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg));

    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_grid(frame, inner, bounds, theme);
    if state.status != GameStatus::Victory {
        render_food(frame, inner, state, theme);
    }
    render_snake(frame, inner, state, theme);

    if state.is_game_over() {
        frame
            .buffer_mut()
            .set_style(inner, Style::new().bg(theme.game_over_tint));
    }

    render_hud(frame, hud_area, state, &hud_info);

    if state.is_start_screen() {
        render_start_menu(frame, board_area, hud_info.best_score, theme);
        return;
    }

    match state.status {
        GameStatus::Paused => render_pause_menu(frame, board_area),
        GameStatus::GameOver => render_game_over_menu(
            frame,
            board_area,
            state.score,
            hud_info.best_score,
            state.death_reason,
        ),
        GameStatus::Victory => render_victory_menu(frame, board_area, state.score, theme),
        GameStatus::Playing => {}
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, width: u16, height: u16) {
    let message = vec![
        Line::from("Terminal too small"),
        Line::from(format!("need {width}x{height}, have {}x{}", area.width, area.height)),
    ];
    frame.render_widget(Paragraph::new(message).alignment(Alignment::Center), area);
}

fn render_grid(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, theme: &Theme) {
    let style = Style::new().fg(theme.grid).bg(theme.play_bg);
    let buffer = frame.buffer_mut();

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            if let Some((column, row)) = logical_to_terminal(inner, bounds, Position { x, y }) {
                buffer.set_string(column, row, GLYPH_EMPTY, style);
            }
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), state.food) else {
        return;
    };

    let glyph = if state.just_ate {
        GLYPH_FOOD_PULSE
    } else {
        GLYPH_FOOD
    };
    frame.buffer_mut().set_string(
        x,
        y,
        glyph,
        Style::new()
            .fg(theme.food)
            .bg(theme.play_bg)
            .add_modifier(Modifier::BOLD),
    );
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let buffer = frame.buffer_mut();

    // Tail first so the head wins if a finished game left an overlap.
    for segment in state.snake.segments().skip(1).rev() {
        let Some((x, y)) = logical_to_terminal(inner, state.bounds(), *segment) else {
            continue;
        };
        buffer.set_string(
            x,
            y,
            GLYPH_SNAKE_BODY,
            Style::new().fg(theme.snake_body).bg(theme.play_bg),
        );
    }

    let Some((x, y)) = logical_to_terminal(inner, state.bounds(), state.snake.head()) else {
        return;
    };
    buffer.set_string(
        x,
        y,
        eyes_glyph(state.direction),
        Style::new()
            .fg(theme.snake_eyes)
            .bg(theme.snake_head)
            .add_modifier(Modifier::BOLD),
    );
}

/// Eye placement on the head cell, facing the direction of travel.
fn eyes_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_EYES_UP,
        Direction::Down => GLYPH_EYES_DOWN,
        Direction::Left => GLYPH_EYES_LEFT,
        Direction::Right => GLYPH_EYES_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
