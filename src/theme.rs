use ratatui::style::Color;
use ratatui::symbols::border;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    /// Fill behind the head glyphs.
    pub snake_head: Color,
    pub snake_body: Color,
    /// Eye color drawn on top of the head fill.
    pub snake_eyes: Color,
    pub food: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    /// Faint dot marking each empty cell.
    pub grid: Color,
    /// Background of every board cell once the game is over.
    pub game_over_tint: Color,
    pub border_fg: Color,
    pub hud_text: Color,
    pub hud_accent: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

const CANVAS_BG: (u8, u8, u8) = (0xfa, 0xfb, 0xfc);
const GAME_OVER_RED: (u8, u8, u8) = (0xff, 0x44, 0x00);

/// Green snake on a light board with amber food.
pub const THEME_RETRO: Theme = Theme {
    snake_head: Color::Rgb(0x4c, 0xaf, 0x50),
    snake_body: Color::Rgb(0x38, 0x8e, 0x3c),
    snake_eyes: Color::Rgb(0xff, 0xff, 0xff),
    food: Color::Rgb(0xff, 0xc1, 0x07),
    play_bg: rgb(CANVAS_BG),
    grid: Color::Rgb(0xd6, 0xdd, 0xdd),
    game_over_tint: rgb(blend(CANVAS_BG, GAME_OVER_RED, 18)),
    border_fg: Color::Rgb(0xe9, 0xec, 0xef),
    hud_text: Color::Rgb(0xe9, 0xec, 0xef),
    hud_accent: Color::Rgb(0xff, 0xc1, 0x07),
    menu_title: Color::Rgb(0x4c, 0xaf, 0x50),
    menu_footer: Color::DarkGray,
};

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Terminal columns used per board cell, keeping cells roughly square.
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_EMPTY: &str = "· ";
pub const GLYPH_FOOD: &str = "● ";
/// Food glyph for the tick right after eating.
pub const GLYPH_FOOD_PULSE: &str = "◉ ";
pub const GLYPH_SNAKE_BODY: &str = "██";
pub const GLYPH_EYES_UP: &str = "°°";
pub const GLYPH_EYES_DOWN: &str = "..";
pub const GLYPH_EYES_LEFT: &str = ": ";
pub const GLYPH_EYES_RIGHT: &str = " :";

const fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Alpha-composites `over` on top of `base`; `alpha_percent` is 0..=100.
const fn blend(base: (u8, u8, u8), over: (u8, u8, u8), alpha_percent: u16) -> (u8, u8, u8) {
    (
        mix(base.0, over.0, alpha_percent),
        mix(base.1, over.1, alpha_percent),
        mix(base.2, over.2, alpha_percent),
    )
}

const fn mix(base: u8, over: u8, alpha_percent: u16) -> u8 {
    let value = (base as u16 * (100 - alpha_percent) + over as u16 * alpha_percent) / 100;
    value as u8
}
