use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Purple
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border: Color,
    pub bar_bg: Color,
    pub highlight_bg: Color, // Cursor row on the question screen
    pub selected_bg: Color,  // Recorded answer
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(203, 166, 247),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border: Color::Rgb(137, 180, 250),
    bar_bg: Color::Rgb(50, 50, 70),
    highlight_bg: Color::Rgb(69, 71, 90),
    selected_bg: Color::Rgb(49, 78, 128),
};
