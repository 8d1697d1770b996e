use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Centered rectangle sized as a percentage of `area`.
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(percent_y.min(100)) / 100) as u16;
    center_rect(area, width, height)
}

/// Top bar, body and footer rows.
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .areas(area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = center_rect(area, 20, 10);
        assert_eq!(rect, Rect::new(40, 15, 20, 10));
    }

    #[test]
    fn test_center_rect_clamps() {
        let area = Rect::new(0, 0, 10, 5);
        let rect = center_rect(area, 20, 10);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_center_popup() {
        let rect = center_popup(Rect::new(0, 0, 100, 40), 50, 50);
        assert_eq!(rect, Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn test_standard_layout() {
        let [header, body, footer] = create_standard_layout(Rect::new(0, 0, 80, 24), 1, 1);
        assert_eq!(header.height, 1);
        assert_eq!(footer.y, 23);
        assert_eq!(body.height, 22);
    }
}
