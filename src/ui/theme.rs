use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub heading: Color,
    // Bar roles
    pub bar_default: Color,
    pub bar_comparing: Color,
    pub bar_swapping: Color,
    pub bar_sorted: Color, // Also used for the found element
    pub bar_target: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for the status bar
    heading: Color::Rgb(245, 194, 231),        // Pink for titles
    bar_default: Color::Rgb(137, 180, 250),    // Blue
    bar_comparing: Color::Rgb(203, 166, 247),  // Mauve
    bar_swapping: Color::Rgb(243, 139, 168),   // Red
    bar_sorted: Color::Rgb(166, 227, 161),     // Green
    bar_target: Color::Rgb(249, 226, 175),     // Yellow
};
