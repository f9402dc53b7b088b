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
    pub highlight: Color,  // Active element
    pub path: Color,       // Nodes/edges on the emphasized path
    pub edge: Color,       // Ordinary edges
    pub unvisited: Color,  // Graph nodes the traversal has not reached yet
    pub node_text: Color,
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
    current_line_bg: Color::Rgb(50, 50, 70),
    highlight: Color::Rgb(255, 215, 0), // Gold
    path: Color::Rgb(255, 179, 71),     // Light orange
    edge: Color::Rgb(123, 143, 161),    // Slate
    unvisited: Color::Rgb(234, 240, 250),
    node_text: Color::Rgb(34, 34, 34),
};

/// Fill colors cycled through by element index
pub const NODE_PALETTE: [Color; 20] = [
    Color::Rgb(255, 111, 97),
    Color::Rgb(107, 91, 149),
    Color::Rgb(136, 176, 75),
    Color::Rgb(247, 202, 201),
    Color::Rgb(146, 168, 209),
    Color::Rgb(149, 82, 81),
    Color::Rgb(181, 101, 167),
    Color::Rgb(0, 155, 119),
    Color::Rgb(221, 65, 36),
    Color::Rgb(69, 184, 172),
    Color::Rgb(239, 192, 80),
    Color::Rgb(91, 94, 166),
    Color::Rgb(155, 35, 53),
    Color::Rgb(223, 207, 190),
    Color::Rgb(85, 180, 176),
    Color::Rgb(225, 93, 68),
    Color::Rgb(127, 205, 205),
    Color::Rgb(188, 36, 60),
    Color::Rgb(195, 68, 122),
    Color::Rgb(152, 180, 212),
];

/// Palette color for the element at `index`
pub fn palette_color(index: usize) -> Color {
    NODE_PALETTE[index % NODE_PALETTE.len()]
}
